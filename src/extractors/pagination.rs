//! Extract list paging (`offset`/`limit`) from the query string.

use crate::config::{PagingStyle, ResourceSpec};
use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Limit used when neither the request nor the resource names one.
pub const DEFAULT_LIMIT: u32 = 10;

/// Requested window of a list, in admin UI terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub offset: u32,
    pub limit: u32,
}

fn parse(query: &HashMap<String, String>, key: &str) -> Result<Option<u32>, AppError> {
    match query.get(key).map(|s| s.trim()).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(raw) => raw
            .parse::<u32>()
            .map(Some)
            .map_err(|_| AppError::BadRequest(format!("invalid {}: {}", key, raw))),
    }
}

impl Pagination {
    /// `offset`/`limit` win; `page`/`size` are accepted when both are absent.
    /// A zero or missing limit falls back to `default_limit`.
    pub fn from_query(query: &HashMap<String, String>, default_limit: u32) -> Result<Self, AppError> {
        let offset = parse(query, "offset")?;
        let limit = parse(query, "limit")?;
        if offset.is_none() && limit.is_none() {
            if let Some(size) = parse(query, "size")?.filter(|s| *s > 0) {
                let page = parse(query, "page")?.unwrap_or(0);
                return Ok(Pagination {
                    offset: page.saturating_mul(size),
                    limit: size,
                });
            }
        }
        Ok(Pagination {
            offset: offset.unwrap_or(0),
            limit: limit.filter(|l| *l > 0).unwrap_or(default_limit),
        })
    }

    pub fn page(&self) -> u32 {
        self.offset / self.limit.max(1)
    }

    pub fn size(&self) -> u32 {
        self.limit
    }

    /// Query parameters the backend expects for this window.
    pub fn backend_params(&self, style: PagingStyle) -> Vec<(&'static str, String)> {
        match style {
            PagingStyle::PageSize => vec![("page", self.page().to_string()), ("size", self.size().to_string())],
            PagingStyle::OffsetLimit => {
                vec![("offset", self.offset.to_string()), ("limit", self.limit.to_string())]
            }
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let default_limit = parts
            .extensions
            .get::<Arc<ResourceSpec>>()
            .map(|spec| spec.default_limit)
            .unwrap_or(DEFAULT_LIMIT);
        let Query(query) = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        Pagination::from_query(&query, default_limit)
    }
}
