//! Product category shapes. Categories nest (parent and children), so they are
//! formatted recursively rather than through a flat table.

use super::{apply_fields, lookup, Fallback, Field};
use serde_json::{json, Map, Value};

const CATEGORY_FIELDS: &[Field] = &[
    Field::same("id"),
    Field::same("name"),
    Field::same("handle"),
    Field::same("description").or(Fallback::EmptyString),
    Field::copy("is_internal", "isInternal"),
    Field::copy("is_active", "isActive"),
    Field::same("rank").or(Fallback::Int(0)),
    Field::copy("parent_category_id", "parentCategoryId"),
    Field::copy("created_at", "createdAt"),
    Field::copy("updated_at", "updatedAt"),
    Field::always("deleted_at", Fallback::Null),
    Field::same("metadata").or(Fallback::EmptyObject),
];

fn children(category: &Value) -> &[Value] {
    lookup(category, "children", "category_children")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Format a category with its parent and children. `depth` bounds how many
/// levels of children are kept; `None` keeps the whole tree.
pub fn format(category: &Value, depth: Option<usize>) -> Value {
    let mut out = apply_fields(category, CATEGORY_FIELDS);
    if let Value::Object(map) = &mut out {
        let parent = match lookup(category, "parentCategory", "parent_category") {
            Some(p @ Value::Object(_)) => format(p, Some(0)),
            _ => Value::Null,
        };
        map.insert("parent_category".into(), parent);
        let kids = match depth {
            Some(0) => Vec::new(),
            _ => children(category)
                .iter()
                .map(|c| format(c, depth.map(|d| d - 1)))
                .collect(),
        };
        map.insert("category_children".into(), Value::Array(kids));
    }
    out
}

/// Backend body for a new category. The parent may be sent as
/// `parent_category.id` or `parent_category_id`; the backend wants a number.
pub fn create_request(body: &Value) -> Value {
    let parent = body
        .get("parent_category")
        .and_then(|p| p.get("id"))
        .filter(|v| !v.is_null())
        .or_else(|| body.get("parent_category_id").filter(|v| !v.is_null()))
        .map(numeric)
        .unwrap_or(Value::Null);

    let mut out = Map::new();
    for (ui, backend) in [
        ("name", "name"),
        ("handle", "handle"),
        ("description", "description"),
        ("is_internal", "isInternal"),
        ("is_active", "isActive"),
    ] {
        if let Some(v) = body.get(ui) {
            out.insert(backend.into(), v.clone());
        }
    }
    out.insert(
        "rank".into(),
        body.get("rank").filter(|v| !v.is_null()).cloned().unwrap_or(json!(0)),
    );
    out.insert("parentCategoryId".into(), parent);
    out.insert(
        "metadata".into(),
        body.get("metadata").filter(|v| !v.is_null()).cloned().unwrap_or_else(|| json!({})),
    );
    Value::Object(out)
}

/// Numeric strings become numbers; anything else is passed through.
pub fn numeric(value: &Value) -> Value {
    match value {
        Value::String(s) => s
            .parse::<i64>()
            .map(Value::from)
            .unwrap_or_else(|_| value.clone()),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Value {
        json!({
            "id": 1,
            "name": "Apparel",
            "isActive": true,
            "children": [{
                "id": 2,
                "name": "Shirts",
                "children": [{ "id": 3, "name": "Polos" }]
            }]
        })
    }

    #[test]
    fn one_level_of_children_by_default() {
        let out = format(&tree(), Some(1));
        assert_eq!(out["is_active"], true);
        assert_eq!(out["rank"], 0);
        assert_eq!(out["description"], "");
        assert_eq!(out["category_children"][0]["name"], "Shirts");
        assert_eq!(out["category_children"][0]["category_children"], json!([]));
    }

    #[test]
    fn full_tree_when_unbounded() {
        let out = format(&tree(), None);
        assert_eq!(out["category_children"][0]["category_children"][0]["name"], "Polos");
    }

    #[test]
    fn parent_is_formatted_without_children() {
        let out = format(
            &json!({ "id": 5, "parentCategory": { "id": 1, "isInternal": false, "children": [{ "id": 5 }] } }),
            Some(1),
        );
        assert_eq!(out["parent_category"]["is_internal"], false);
        assert_eq!(out["parent_category"]["category_children"], json!([]));
    }

    #[test]
    fn create_request_resolves_parent() {
        let body = create_request(&json!({ "name": "Hats", "parent_category": { "id": "4" } }));
        assert_eq!(body["parentCategoryId"], 4);
        assert_eq!(body["rank"], 0);
        assert_eq!(body["metadata"], json!({}));
        let body = create_request(&json!({ "name": "Hats", "parent_category_id": 9, "is_active": true }));
        assert_eq!(body["parentCategoryId"], 9);
        assert_eq!(body["isActive"], true);
        let body = create_request(&json!({ "name": "Hats" }));
        assert_eq!(body["parentCategoryId"], Value::Null);
    }
}
