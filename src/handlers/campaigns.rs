//! Campaign routes that touch promotions.

use crate::config::ResourceSpec;
use crate::error::AppError;
use crate::extractors::{JsonBody, Pagination};
use crate::handlers::resource::{fetch_entity, Reply};
use crate::mapping::{apply_fields, list_count, list_items, tables::PROMOTION_FIELDS};
use crate::response;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

fn promotions_path(spec: &ResourceSpec, id: &str) -> String {
    format!("{}/promotions", spec.item_path(id))
}

fn promotions_of(reply: &Value) -> Vec<Value> {
    list_items(reply, &["promotions"])
        .iter()
        .map(|p| apply_fields(p, PROMOTION_FIELDS))
        .collect()
}

/// Campaign with its promotions, fetched concurrently.
pub async fn read(
    State(state): State<AppState>,
    Extension(spec): Extension<Arc<ResourceSpec>>,
    Path(id): Path<String>,
) -> Result<Reply, AppError> {
    let path = promotions_path(&spec, &id);
    let (campaign, promotions) = tokio::try_join!(fetch_entity(&state, &spec, &id, &[]), async {
        state
            .backend
            .get(&path, &[])
            .await
            .map_err(|e| e.for_entity(spec.label, &id))
    })?;
    let mut campaign = spec.entity.apply(campaign);
    if let Value::Object(map) = &mut campaign {
        map.insert("promotions".into(), Value::Array(promotions_of(&promotions)));
    }
    Ok(response::single(spec.singular, campaign))
}

pub async fn list_promotions(
    State(state): State<AppState>,
    Extension(spec): Extension<Arc<ResourceSpec>>,
    Path(id): Path<String>,
    page: Pagination,
) -> Result<Reply, AppError> {
    let query = page.backend_params(spec.paging);
    let reply = state
        .backend
        .get(&promotions_path(&spec, &id), &query)
        .await
        .map_err(|e| e.for_entity(spec.label, &id))?;
    let items = promotions_of(&reply);
    let count = list_count(&reply, items.len());
    Ok(response::list("promotions", items, count, &page))
}

/// `{ add, remove }` is forwarded as-is and the backend reply returned unchanged.
pub async fn manage_promotions(
    State(state): State<AppState>,
    Extension(spec): Extension<Arc<ResourceSpec>>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Reply, AppError> {
    let (add, remove) = crate::service::IdProbe::add_remove(&body)?;
    tracing::info!(campaign = %id, add = add.len(), remove = remove.len(), "updating campaign promotions");
    let reply = state
        .backend
        .post(&promotions_path(&spec, &id), &json!({ "add": add, "remove": remove }))
        .await
        .map_err(|e| e.for_entity(spec.label, &id))?;
    Ok((StatusCode::OK, Json(reply)))
}
