//! Customer and customer group membership routes.

use crate::config::ResourceSpec;
use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::handlers::resource::Reply;
use crate::service::{IdProbe, Membership};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Map, Value};
use std::sync::Arc;

fn forwarded(reply: Value) -> Reply {
    let body = if reply.is_null() { Value::Object(Map::new()) } else { reply };
    (StatusCode::OK, Json(body))
}

/// `POST /customers/:id/customer-groups` with `{ add, remove }`: adds first,
/// then removes; the last backend reply is returned.
pub async fn update_groups(
    State(state): State<AppState>,
    Extension(spec): Extension<Arc<ResourceSpec>>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Reply, AppError> {
    let (add, remove) = IdProbe::add_remove(&body)?;
    let base = format!("{}/customer-groups", spec.item_path(&id));
    let mut reply = Value::Null;
    if !add.is_empty() {
        reply = state
            .backend
            .post(&base, &json!({ "groupIds": add }))
            .await
            .map_err(|e| e.for_entity(spec.label, &id))?;
    }
    if !remove.is_empty() {
        reply = state
            .backend
            .post(&format!("{}/remove", base), &json!({ "groupIds": remove }))
            .await
            .map_err(|e| e.for_entity(spec.label, &id))?;
    }
    Ok(forwarded(reply))
}

fn members_path(spec: &ResourceSpec, id: &str) -> String {
    format!("{}/customers", spec.item_path(id))
}

pub async fn add_customers(
    State(state): State<AppState>,
    Extension(spec): Extension<Arc<ResourceSpec>>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Reply, AppError> {
    let customer_ids = IdProbe::customer_ids(&body, Membership::Add)?;
    tracing::info!(group = %id, count = customer_ids.len(), "adding customers to group");
    let reply = state
        .backend
        .post(&members_path(&spec, &id), &json!({ "customer_ids": customer_ids }))
        .await
        .map_err(|e| e.for_entity(spec.label, &id))?;
    Ok(forwarded(reply))
}

pub async fn remove_customers(
    State(state): State<AppState>,
    Extension(spec): Extension<Arc<ResourceSpec>>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Reply, AppError> {
    let customer_ids = IdProbe::customer_ids(&body, Membership::Remove)?;
    tracing::info!(group = %id, count = customer_ids.len(), "removing customers from group");
    let reply = state
        .backend
        .delete(&members_path(&spec, &id), Some(&json!({ "customer_ids": customer_ids })))
        .await
        .map_err(|e| e.for_entity(spec.label, &id))?;
    Ok(forwarded(reply))
}
