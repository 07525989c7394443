//! Product category list and create.

use crate::config::ResourceSpec;
use crate::error::AppError;
use crate::extractors::{JsonBody, Pagination};
use crate::handlers::resource::{self, filter_params, Reply};
use crate::mapping::{categories, list_count, list_items};
use crate::response;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Extension,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// `include_descendants_tree=true` returns the whole subtree; otherwise one
/// level of children.
pub async fn list(
    State(state): State<AppState>,
    Extension(spec): Extension<Arc<ResourceSpec>>,
    page: Pagination,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Reply, AppError> {
    let depth = match params.get("include_descendants_tree").map(String::as_str) {
        Some("true") | Some("1") => None,
        _ => Some(1),
    };
    let mut query = page.backend_params(spec.paging);
    query.extend(filter_params(spec.filters, &params));
    let reply = state.backend.get(spec.backend_path, &query).await?;
    let items = list_items(&reply, spec.backend_list_keys);
    let count = list_count(&reply, items.len());
    let items = items.iter().map(|c| categories::format(c, depth)).collect();
    Ok(response::list(spec.plural, items, count, &page))
}

pub async fn create(
    state: State<AppState>,
    spec: Extension<Arc<ResourceSpec>>,
    body: JsonBody,
) -> Result<Reply, AppError> {
    let empty = match &body.0 {
        Value::Object(map) => map.is_empty(),
        _ => true,
    };
    if empty {
        return Err(AppError::BadRequest("request body must not be empty".into()));
    }
    resource::create(state, spec, body).await
}
