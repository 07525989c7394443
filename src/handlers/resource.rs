//! Generic resource handlers: list, create, read, update, delete. The resource
//! comes from the `Extension<Arc<ResourceSpec>>` layered onto each route.

use crate::config::{Filter, ResourceSpec};
use crate::error::AppError;
use crate::extractors::{JsonBody, Pagination};
use crate::mapping::{list_count, list_items, unwrap_envelope};
use crate::response;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

pub type Reply = (StatusCode, Json<Value>);

fn usable(value: &str) -> bool {
    let v = value.trim();
    !v.is_empty() && v != "null" && v != "undefined"
}

/// Backend query parameters for a resource's list filters.
pub(crate) fn filter_params(filters: &[Filter], params: &HashMap<String, String>) -> Vec<(&'static str, String)> {
    filters
        .iter()
        .filter_map(|f| {
            f.admin
                .iter()
                .find_map(|name| params.get(*name).filter(|v| usable(v)))
                .map(|v| (f.backend, v.trim().to_string()))
        })
        .collect()
}

/// Reshape a backend list reply into the admin list envelope.
pub(crate) fn list_reply(spec: &ResourceSpec, reply: &Value, page: &Pagination) -> Reply {
    let items = list_items(reply, spec.backend_list_keys);
    let count = list_count(reply, items.len());
    let items = items.into_iter().map(|item| spec.list_item.apply(item)).collect();
    response::list(spec.plural, items, count, page)
}

/// GET one entity, mapping a backend 404 onto the resource's not-found message.
pub(crate) async fn fetch_entity(
    state: &AppState,
    spec: &ResourceSpec,
    id: &str,
    query: &[(&str, String)],
) -> Result<Value, AppError> {
    let reply = state
        .backend
        .get(&spec.item_path(id), query)
        .await
        .map_err(|e| e.for_entity(spec.label, id))?;
    Ok(unwrap_envelope(reply, spec.backend_entity_key))
}

pub async fn list(
    State(state): State<AppState>,
    Extension(spec): Extension<Arc<ResourceSpec>>,
    page: Pagination,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Reply, AppError> {
    let mut query = page.backend_params(spec.paging);
    query.extend(filter_params(spec.filters, &params));
    let reply = state.backend.get(spec.backend_path, &query).await?;
    Ok(list_reply(&spec, &reply, &page))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(spec): Extension<Arc<ResourceSpec>>,
    JsonBody(body): JsonBody,
) -> Result<Reply, AppError> {
    let request = spec.create_body.apply(body);
    let reply = state.backend.post(spec.backend_path, &request).await?;
    let entity = spec.entity.apply(unwrap_envelope(reply, spec.backend_entity_key));
    tracing::info!(resource = spec.name, "created");
    let status = StatusCode::from_u16(spec.create_status).unwrap_or(StatusCode::OK);
    Ok(response::single_with_status(status, spec.singular, entity))
}

pub async fn read(
    State(state): State<AppState>,
    Extension(spec): Extension<Arc<ResourceSpec>>,
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Reply, AppError> {
    let query: Vec<(&str, String)> = spec
        .read_params
        .iter()
        .filter_map(|name| params.get(*name).filter(|v| usable(v)).map(|v| (*name, v.clone())))
        .collect();
    let entity = fetch_entity(&state, &spec, &id, &query).await?;
    Ok(response::single(spec.singular, spec.entity.apply(entity)))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(spec): Extension<Arc<ResourceSpec>>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Reply, AppError> {
    let request = spec.update_body.apply(body);
    let reply = state
        .backend
        .update(spec.update_verb, &spec.item_path(&id), &request)
        .await
        .map_err(|e| e.for_entity(spec.label, &id))?;
    let entity = spec.updated.apply(unwrap_envelope(reply, spec.backend_entity_key));
    tracing::info!(resource = spec.name, id = %id, "updated");
    Ok(response::single(spec.singular, entity))
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(spec): Extension<Arc<ResourceSpec>>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<response::Deleted>), AppError> {
    state
        .backend
        .delete(&spec.item_path(&id), None)
        .await
        .map_err(|e| e.for_entity(spec.label, &id))?;
    tracing::info!(resource = spec.name, id = %id, "deleted");
    Ok(response::deleted(id, spec.object))
}
