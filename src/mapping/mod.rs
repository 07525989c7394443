//! Field tables that translate payloads between admin UI and backend shapes.
//!
//! A request table ([`Rename`]) says which admin fields are forwarded and under
//! which backend name. A response table ([`Field`]) says which admin fields are
//! emitted, where each is read from, and what to put there when the backend
//! omitted it. Resources whose shapes cannot be expressed as a flat table get a
//! formatter function instead (see `products`, `inventory`, `categories`).

pub mod categories;
pub mod inventory;
pub mod products;
pub mod tables;

use crate::case::{converted, Case};
use serde_json::{Map, Value};

/// Value substituted when a field is missing (or null).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fallback {
    /// Leave the field out entirely.
    Omit,
    Null,
    EmptyString,
    EmptyObject,
    EmptyArray,
    Bool(bool),
    Int(i64),
    Str(&'static str),
}

impl Fallback {
    pub fn value(&self) -> Option<Value> {
        match self {
            Fallback::Omit => None,
            Fallback::Null => Some(Value::Null),
            Fallback::EmptyString => Some(Value::String(String::new())),
            Fallback::EmptyObject => Some(Value::Object(Map::new())),
            Fallback::EmptyArray => Some(Value::Array(Vec::new())),
            Fallback::Bool(b) => Some(Value::Bool(*b)),
            Fallback::Int(n) => Some(Value::from(*n)),
            Fallback::Str(s) => Some(Value::String((*s).to_string())),
        }
    }
}

/// One admin -> backend rename in a request table.
#[derive(Clone, Copy, Debug)]
pub struct Rename {
    pub admin: &'static str,
    pub backend: &'static str,
    pub fallback: Fallback,
    /// Table applied to the field's value when it is an object.
    pub nested: Option<&'static [Rename]>,
}

impl Rename {
    pub const fn new(admin: &'static str, backend: &'static str) -> Self {
        Rename {
            admin,
            backend,
            fallback: Fallback::Omit,
            nested: None,
        }
    }

    pub const fn or(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }

    pub const fn nested(mut self, table: &'static [Rename]) -> Self {
        self.nested = Some(table);
        self
    }
}

/// How a response field's value is produced.
#[derive(Clone, Copy, Debug)]
pub enum Conv {
    /// Copy the backend value, substituting the fallback when missing.
    Copy(Fallback),
    /// Ignore the backend and always emit the fallback.
    Always(Fallback),
    /// Lowercased string, or the given default.
    Lowercase(&'static str),
    /// Render numbers and strings as a string id.
    IdString,
    /// Object, or a JSON string holding an object; `{}` otherwise.
    JsonObject,
    /// Recursively snake_case the keys of the copied value.
    SnakeKeys(Fallback),
}

/// One backend -> admin field in a response table.
#[derive(Clone, Copy, Debug)]
pub struct Field {
    pub ui: &'static str,
    pub backend: &'static str,
    pub conv: Conv,
}

impl Field {
    /// Copy `backend` to `ui`; null when missing.
    pub const fn copy(ui: &'static str, backend: &'static str) -> Self {
        Field {
            ui,
            backend,
            conv: Conv::Copy(Fallback::Null),
        }
    }

    /// Same name on both sides.
    pub const fn same(name: &'static str) -> Self {
        Field::copy(name, name)
    }

    pub const fn always(ui: &'static str, fallback: Fallback) -> Self {
        Field {
            ui,
            backend: ui,
            conv: Conv::Always(fallback),
        }
    }

    pub const fn or(mut self, fallback: Fallback) -> Self {
        self.conv = Conv::Copy(fallback);
        self
    }

    pub const fn conv(mut self, conv: Conv) -> Self {
        self.conv = conv;
        self
    }
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// Read a field, trying the backend (camelCase) name first and the admin name
/// second; the backend is not consistent about which one it sends.
pub fn lookup<'a>(src: &'a Value, backend: &str, ui: &str) -> Option<&'a Value> {
    present(src.get(backend)).or_else(|| present(src.get(ui)))
}

fn is_blank(v: &Value) -> bool {
    match v {
        Value::String(s) => s.is_empty(),
        Value::Null => true,
        _ => false,
    }
}

fn convert_field(src: &Value, field: &Field) -> Option<Value> {
    let raw = lookup(src, field.backend, field.ui);
    match field.conv {
        Conv::Copy(fallback) => match raw {
            Some(v) if !(is_blank(v) && fallback == Fallback::EmptyString) => Some(v.clone()),
            _ => fallback.value(),
        },
        Conv::Always(fallback) => fallback.value(),
        Conv::Lowercase(default) => Some(Value::String(
            raw.and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_lowercase)
                .unwrap_or_else(|| default.to_string()),
        )),
        Conv::IdString => Some(match raw {
            Some(Value::String(s)) => Value::String(s.clone()),
            Some(Value::Number(n)) => Value::String(n.to_string()),
            _ => Value::Null,
        }),
        Conv::JsonObject => Some(match raw {
            Some(Value::Object(m)) => Value::Object(m.clone()),
            Some(Value::String(s)) => match serde_json::from_str::<Value>(s) {
                Ok(v @ Value::Object(_)) => v,
                _ => Value::Object(Map::new()),
            },
            _ => Value::Object(Map::new()),
        }),
        Conv::SnakeKeys(fallback) => match raw {
            Some(v) => Some(converted(v.clone(), Case::Snake)),
            None => fallback.value(),
        },
    }
}

/// Build an admin-shaped object from a backend entity using a response table.
pub fn apply_fields(src: &Value, fields: &[Field]) -> Value {
    let mut out = Map::with_capacity(fields.len());
    for field in fields {
        if let Some(v) = convert_field(src, field) {
            out.insert(field.ui.to_string(), v);
        }
    }
    Value::Object(out)
}

/// Build a backend-shaped request body from an admin body using a request table.
/// Fields not named in the table are dropped.
pub fn apply_renames(body: &Value, table: &[Rename]) -> Value {
    let mut out = Map::with_capacity(table.len());
    for rename in table {
        let value = match (present(body.get(rename.admin)), rename.nested) {
            (Some(v @ Value::Object(_)), Some(nested)) => Some(apply_renames(v, nested)),
            (Some(v), _) => Some(v.clone()),
            (None, _) => rename.fallback.value(),
        };
        if let Some(v) = value {
            out.insert(rename.backend.to_string(), v);
        }
    }
    Value::Object(out)
}

/// Single-entity backend replies are sometimes wrapped (`{ "campaign": {...} }`).
pub fn unwrap_envelope(value: Value, key: &str) -> Value {
    match value {
        Value::Object(mut map) if map.get(key).map(Value::is_object).unwrap_or(false) => {
            map.remove(key).unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Pull the item array out of a backend list reply. The first key that holds an
/// array wins; a bare top-level array is accepted too.
pub fn list_items(value: &Value, keys: &[&str]) -> Vec<Value> {
    if let Value::Array(items) = value {
        return items.clone();
    }
    keys.iter()
        .find_map(|k| value.get(*k).and_then(Value::as_array))
        .cloned()
        .unwrap_or_default()
}

/// Backend `count` when present, else the number of items returned.
pub fn list_count(value: &Value, items: usize) -> u64 {
    ["count", "total", "totalElements"]
        .iter()
        .find_map(|k| value.get(*k).and_then(Value::as_u64))
        .unwrap_or(items as u64)
}
