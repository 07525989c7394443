//! Config types: runtime settings and the resource descriptors that drive the
//! generic handlers.

use crate::case::{converted, Case};
use crate::mapping::{apply_fields, apply_renames, Field, Rename};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::net::SocketAddr;
use std::time::Duration;

/// Process-level settings, read from the environment.
#[derive(Clone, Debug)]
pub struct ProxyConfig {
    pub backend_url: String,
    pub listen_addr: SocketAddr,
    pub backend_timeout: Duration,
    pub request_body_limit: usize,
    /// Optional JSON file with extra rewrite rules, applied after the built-in ones.
    pub rewrites_path: Option<String>,
}

/// Operations a resource exposes through the generic handlers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    List,
    Create,
    Read,
    Update,
    Delete,
}

/// How list paging is expressed to the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PagingStyle {
    /// `page = offset / limit`, `size = limit`.
    PageSize,
    /// `offset` and `limit` forwarded as-is.
    OffsetLimit,
}

/// Backend verb used for updates. Most backend controllers update with POST,
/// a few with PUT.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateVerb {
    Post,
    Put,
}

/// Transformation applied to an admin request body before it is sent.
#[derive(Clone, Copy, Debug)]
pub enum RequestShape {
    Passthrough,
    /// Recursively camelCase all keys.
    Camelize,
    Renamed(&'static [Rename]),
    Custom(fn(&Value) -> Value),
}

impl RequestShape {
    pub fn apply(&self, body: Value) -> Value {
        match self {
            RequestShape::Passthrough => body,
            RequestShape::Camelize => converted(body, Case::Camel),
            RequestShape::Renamed(table) => apply_renames(&body, table),
            RequestShape::Custom(f) => f(&body),
        }
    }
}

/// Transformation applied to a backend entity before it is returned.
#[derive(Clone, Copy, Debug)]
pub enum ResponseShape {
    Passthrough,
    /// Recursively snake_case all keys.
    SnakeKeys,
    Fields(&'static [Field]),
    Custom(fn(&Value) -> Value),
}

impl ResponseShape {
    pub fn apply(&self, entity: Value) -> Value {
        match self {
            ResponseShape::Passthrough => entity,
            ResponseShape::SnakeKeys => converted(entity, Case::Snake),
            ResponseShape::Fields(table) => apply_fields(&entity, table),
            ResponseShape::Custom(f) => f(&entity),
        }
    }
}

/// A list query parameter forwarded to the backend. The first admin name
/// present wins; `"null"` and empty values are dropped.
#[derive(Clone, Copy, Debug)]
pub struct Filter {
    pub admin: &'static [&'static str],
    pub backend: &'static str,
}

/// Everything the generic handlers need to proxy one resource.
#[derive(Clone, Debug)]
pub struct ResourceSpec {
    /// Route segment under `/admin`, e.g. `customer-groups`.
    pub name: &'static str,
    /// Human label used in not-found messages.
    pub label: &'static str,
    /// Backend path relative to the base URL, e.g. `customers/groups`.
    pub backend_path: &'static str,
    pub singular: &'static str,
    pub plural: &'static str,
    /// `object` value in delete replies.
    pub object: &'static str,
    /// Keys the backend may use for its list array; first match wins.
    pub backend_list_keys: &'static [&'static str],
    /// Envelope key the backend may wrap single entities in.
    pub backend_entity_key: &'static str,
    pub paging: PagingStyle,
    pub default_limit: u32,
    pub create_status: u16,
    pub update_verb: UpdateVerb,
    pub operations: &'static [Operation],
    pub create_body: RequestShape,
    pub update_body: RequestShape,
    pub list_item: ResponseShape,
    pub entity: ResponseShape,
    /// Shape of the update reply; usually the same as `entity`.
    pub updated: ResponseShape,
    pub filters: &'static [Filter],
    /// Query parameters forwarded on single-entity reads (e.g. `fields`).
    pub read_params: &'static [&'static str],
}

impl ResourceSpec {
    pub fn supports(&self, op: Operation) -> bool {
        self.operations.contains(&op)
    }

    pub fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.backend_path, id)
    }
}

/// One rewrite rule as written in a rewrites file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RewriteRuleConfig {
    pub source: String,
    pub destination: String,
    /// Only rewrite requests with this method.
    #[serde(default)]
    pub method: Option<String>,
    /// Only rewrite when this query parameter is present.
    #[serde(default)]
    pub has_query: Option<String>,
}
