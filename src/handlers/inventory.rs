//! Inventory item create and location levels.

use crate::config::ResourceSpec;
use crate::error::AppError;
use crate::extractors::{JsonBody, Pagination};
use crate::handlers::resource::Reply;
use crate::mapping::{inventory, list_count, list_items, unwrap_envelope};
use crate::response;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Extension,
};
use std::sync::Arc;

/// New items start at quantity 0; the reply echoes the caller's title.
pub async fn create(
    State(state): State<AppState>,
    Extension(spec): Extension<Arc<ResourceSpec>>,
    JsonBody(body): JsonBody,
) -> Result<Reply, AppError> {
    let request = spec.create_body.apply(body.clone());
    let reply = state.backend.post(spec.backend_path, &request).await?;
    let item = unwrap_envelope(reply, spec.backend_entity_key);
    tracing::info!(resource = spec.name, "created");
    Ok(response::single(spec.singular, inventory::created(&item, &body)))
}

pub async fn location_levels(
    State(state): State<AppState>,
    Extension(spec): Extension<Arc<ResourceSpec>>,
    Path(id): Path<String>,
    page: Pagination,
) -> Result<Reply, AppError> {
    let path = format!("{}/location-levels", spec.item_path(&id));
    let reply = state
        .backend
        .get(&path, &page.backend_params(spec.paging))
        .await
        .map_err(|e| e.for_entity(spec.label, &id))?;
    let items = list_items(&reply, &["location_levels", "locationLevels"]);
    let count = list_count(&reply, items.len());
    Ok(response::list("inventory_levels", items, count, &page))
}
