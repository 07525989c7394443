//! Admin UI response envelope helpers.

use crate::extractors::Pagination;
use axum::{http::StatusCode, Json};
use serde::Serialize;
use serde_json::{Map, Value};

/// `{ id, object, deleted: true }`, what the admin UI expects after a delete.
#[derive(Serialize, Debug)]
pub struct Deleted {
    pub id: String,
    pub object: &'static str,
    pub deleted: bool,
}

/// Wrap one entity under its envelope key, e.g. `{ "collection": {...} }`.
pub fn wrap(key: &str, entity: Value) -> Value {
    let mut map = Map::with_capacity(1);
    map.insert(key.to_string(), entity);
    Value::Object(map)
}

pub fn single(key: &str, entity: Value) -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(wrap(key, entity)))
}

pub fn single_with_status(status: StatusCode, key: &str, entity: Value) -> (StatusCode, Json<Value>) {
    (status, Json(wrap(key, entity)))
}

/// `{ <plural>: [...], count, offset, limit }`. Offset and limit always echo the
/// request, whatever the backend reported.
pub fn list(key: &str, items: Vec<Value>, count: u64, page: &Pagination) -> (StatusCode, Json<Value>) {
    let mut map = Map::with_capacity(4);
    map.insert(key.to_string(), Value::Array(items));
    map.insert("count".into(), Value::from(count));
    map.insert("offset".into(), Value::from(page.offset));
    map.insert("limit".into(), Value::from(page.limit));
    (StatusCode::OK, Json(Value::Object(map)))
}

pub fn deleted(id: impl Into<String>, object: &'static str) -> (StatusCode, Json<Deleted>) {
    (
        StatusCode::OK,
        Json(Deleted {
            id: id.into(),
            object,
            deleted: true,
        }),
    )
}
