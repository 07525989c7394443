//! Promotion list; `campaign_id` narrows it to one campaign's promotions.

use crate::config::ResourceSpec;
use crate::error::AppError;
use crate::extractors::Pagination;
use crate::handlers::resource::{self, list_reply, Reply};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Extension,
};
use std::collections::HashMap;
use std::sync::Arc;

pub async fn list(
    State(state): State<AppState>,
    Extension(spec): Extension<Arc<ResourceSpec>>,
    page: Pagination,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Reply, AppError> {
    let campaign_id = params
        .get("campaign_id")
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && *s != "null")
        .map(str::to_string);
    let Some(campaign_id) = campaign_id else {
        return resource::list(State(state), Extension(spec), page, Query(params)).await;
    };
    let path = format!("campaigns/{}/promotions", campaign_id);
    let reply = state
        .backend
        .get(&path, &page.backend_params(spec.paging))
        .await
        .map_err(|e| e.for_entity("Campaign", &campaign_id))?;
    Ok(list_reply(&spec, &reply, &page))
}
