//! Collection product membership. Changes are followed by a refetch so the
//! reply carries the whole collection.

use crate::case::{converted, Case};
use crate::config::ResourceSpec;
use crate::error::AppError;
use crate::extractors::{JsonBody, Pagination};
use crate::handlers::resource::{fetch_entity, Reply};
use crate::mapping::{list_count, list_items};
use crate::response;
use crate::service::{IdProbe, Membership};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Extension,
};
use serde_json::Value;
use std::sync::Arc;

fn products_path(spec: &ResourceSpec, id: &str) -> String {
    format!("{}/products", spec.item_path(id))
}

async fn refetch(state: &AppState, spec: &ResourceSpec, id: &str) -> Result<Reply, AppError> {
    let entity = fetch_entity(state, spec, id, &[]).await?;
    Ok(response::single(spec.singular, spec.entity.apply(entity)))
}

pub async fn list_products(
    State(state): State<AppState>,
    Extension(spec): Extension<Arc<ResourceSpec>>,
    Path(id): Path<String>,
    page: Pagination,
) -> Result<Reply, AppError> {
    let reply = state
        .backend
        .get(&products_path(&spec, &id), &[])
        .await
        .map_err(|e| e.for_entity(spec.label, &id))?;
    let all = list_items(&reply, &["products"]);
    let count = list_count(&reply, all.len());
    // The backend returns the whole membership; the window is cut here.
    let items: Vec<Value> = all
        .into_iter()
        .skip(page.offset as usize)
        .take(page.limit as usize)
        .map(|p| converted(p, Case::Snake))
        .collect();
    Ok(response::list("products", items, count, &page))
}

/// Adds products; a `remove` list in the same body is applied after the adds.
pub async fn add_products(
    State(state): State<AppState>,
    Extension(spec): Extension<Arc<ResourceSpec>>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Reply, AppError> {
    let add = IdProbe::product_ids(&body, Membership::Add).ok();
    let remove = body
        .get("remove")
        .filter(|r| r.as_array().map(|a| !a.is_empty()).unwrap_or(false))
        .map(|r| IdProbe::product_ids(r, Membership::Remove))
        .transpose()?;
    if add.is_none() && remove.is_none() {
        return Err(AppError::BadRequest("must provide IDs of products to add or remove".into()));
    }
    let path = products_path(&spec, &id);
    if let Some(ids) = add {
        tracing::info!(collection = %id, count = ids.len(), "adding products");
        state
            .backend
            .post(&path, &Value::Array(ids))
            .await
            .map_err(|e| e.for_entity(spec.label, &id))?;
    }
    if let Some(ids) = remove {
        tracing::info!(collection = %id, count = ids.len(), "removing products");
        state
            .backend
            .delete(&path, Some(&Value::Array(ids)))
            .await
            .map_err(|e| e.for_entity(spec.label, &id))?;
    }
    refetch(&state, &spec, &id).await
}

pub async fn remove_products(
    State(state): State<AppState>,
    Extension(spec): Extension<Arc<ResourceSpec>>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Reply, AppError> {
    let ids = IdProbe::product_ids(&body, Membership::Remove)?;
    tracing::info!(collection = %id, count = ids.len(), "removing products");
    state
        .backend
        .delete(&products_path(&spec, &id), Some(&Value::Array(ids)))
        .await
        .map_err(|e| e.for_entity(spec.label, &id))?;
    refetch(&state, &spec, &id).await
}
