//! Inventory item shapes. List rows derive a variant-style title from the SKU
//! (`TYPE-SIZE-COLOR`) and a single location level from the stocked quantity.

use super::{apply_fields, lookup, Fallback, Field};
use serde_json::{json, Map, Value};

pub const DETAIL_FIELDS: &[Field] = &[
    Field::same("id"),
    Field::same("sku"),
    Field::copy("origin_country", "originCountry"),
    Field::copy("hs_code", "hsCode"),
    Field::copy("mid_code", "midCode"),
    Field::same("material"),
    Field::same("weight"),
    Field::same("length"),
    Field::same("height"),
    Field::same("width"),
    Field::copy("requires_shipping", "requiresShipping"),
    Field::same("metadata").or(Fallback::EmptyObject),
    Field::copy("created_at", "createdAt"),
    Field::copy("updated_at", "updatedAt"),
    Field::copy("deleted_at", "deletedAt"),
    Field::copy("location_levels", "locationLevels").or(Fallback::EmptyArray),
];

pub const UPDATE_FIELDS: &[Field] = &[
    Field::same("id"),
    Field::same("sku"),
    Field::same("height"),
    Field::same("width"),
    Field::same("length"),
    Field::same("weight"),
    Field::copy("mid_code", "midCode"),
    Field::copy("hs_code", "hsCode"),
    Field::copy("origin_country", "originCountry"),
    Field::always("requires_shipping", Fallback::Bool(true)),
    Field::same("metadata").or(Fallback::EmptyObject),
];

/// `SHIRT-XL-WHITE` reads as `XL / WHITE`, `SHIRT-XL` as `XL`.
pub fn title_from_sku(sku: &str) -> String {
    let mut parts = sku.split('-').skip(1);
    let size = parts.next().unwrap_or("");
    match parts.next().filter(|c| !c.is_empty()) {
        Some(color) => format!("{} / {}", size, color),
        None => size.to_string(),
    }
}

/// Row in the inventory item list.
pub fn summary(item: &Value) -> Value {
    let id = item.get("id").cloned().unwrap_or(Value::Null);
    let sku = match item.get("sku").and_then(Value::as_str).filter(|s| !s.is_empty()) {
        Some(sku) => sku,
        None => {
            return json!({ "id": id, "sku": "", "title": "", "requires_shipping": true });
        }
    };
    let quantity = item.get("quantity").filter(|q| !q.is_null()).cloned().unwrap_or(json!(0));
    let location_id = item
        .get("location")
        .and_then(|l| l.get("id"))
        .cloned()
        .unwrap_or(Value::Null);

    let mut out = Map::new();
    out.insert("id".into(), id);
    out.insert("sku".into(), Value::String(sku.to_string()));
    out.insert("title".into(), Value::String(title_from_sku(sku)));
    out.insert("thumbnail".into(), Value::Null);
    out.insert(
        "location_levels".into(),
        json!([{
            "location_id": location_id,
            "stocked_quantity": quantity,
            "available_quantity": quantity,
            "reserved_quantity": 0,
        }]),
    );
    out.insert("requires_shipping".into(), Value::Bool(true));
    for key in [
        "material",
        "weight",
        "length",
        "height",
        "width",
        "origin_country",
        "hs_code",
        "mid_code",
        "description",
    ] {
        out.insert(key.into(), Value::Null);
    }
    let copy = |ui: &str, backend: &str| lookup(item, backend, ui).cloned().unwrap_or(Value::Null);
    out.insert("manage_inventory".into(), copy("manage_inventory", "manageInventory"));
    out.insert("allow_backorder".into(), copy("allow_backorder", "allowBackorder"));
    out.insert(
        "metadata".into(),
        lookup(item, "metadata", "metadata").cloned().unwrap_or_else(|| json!({})),
    );
    out.insert("created_at".into(), copy("created_at", "createdAt"));
    out.insert("updated_at".into(), copy("updated_at", "updatedAt"));
    Value::Object(out)
}

pub fn detail(item: &Value) -> Value {
    apply_fields(item, DETAIL_FIELDS)
}

/// Backend body for a new inventory item. New items start empty at the given
/// location (location 1 unless the request names one).
pub fn create_request(body: &Value) -> Value {
    let location_id = body
        .get("location_id")
        .filter(|v| !v.is_null())
        .cloned()
        .unwrap_or(json!(1));
    json!({
        "sku": body.get("sku").cloned().unwrap_or(Value::Null),
        "quantity": 0,
        "allowBackorder": false,
        "manageInventory": true,
        "locationId": location_id,
        "metadata": {
            "title": body.get("title").cloned().unwrap_or(Value::Null),
            "requires_shipping": body.get("requires_shipping").cloned().unwrap_or(Value::Null),
        },
    })
}

/// Created item echoed back with the title and shipping flag the caller sent.
pub fn created(item: &Value, request: &Value) -> Value {
    json!({
        "id": item.get("id").cloned().unwrap_or(Value::Null),
        "sku": item.get("sku").cloned().unwrap_or(Value::Null),
        "title": request.get("title").cloned().unwrap_or(Value::Null),
        "requires_shipping": request.get("requires_shipping").cloned().unwrap_or(Value::Null),
        "metadata": lookup(item, "metadata", "metadata").cloned().unwrap_or_else(|| json!({})),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sku_titles() {
        assert_eq!(title_from_sku("SHIRT-XL-WHITE"), "XL / WHITE");
        assert_eq!(title_from_sku("SHIRT-XL"), "XL");
        assert_eq!(title_from_sku("SHIRT"), "");
    }

    #[test]
    fn summary_builds_single_location_level() {
        let row = summary(&json!({
            "id": "inv_1",
            "sku": "SWEATPANTS-M-BLACK",
            "quantity": 12,
            "location": { "id": 3 },
            "manageInventory": true,
            "allowBackorder": false
        }));
        assert_eq!(row["title"], "M / BLACK");
        assert_eq!(row["location_levels"][0]["location_id"], 3);
        assert_eq!(row["location_levels"][0]["available_quantity"], 12);
        assert_eq!(row["location_levels"][0]["reserved_quantity"], 0);
        assert_eq!(row["manage_inventory"], true);
        assert_eq!(row["metadata"], json!({}));
    }

    #[test]
    fn summary_without_sku_is_minimal() {
        let row = summary(&json!({ "id": "inv_2" }));
        assert_eq!(row, json!({ "id": "inv_2", "sku": "", "title": "", "requires_shipping": true }));
    }

    #[test]
    fn create_request_defaults_location() {
        let body = create_request(&json!({ "sku": "CAP-S", "title": "S", "requires_shipping": true }));
        assert_eq!(body["locationId"], 1);
        assert_eq!(body["quantity"], 0);
        assert_eq!(body["metadata"]["title"], "S");
        let body = create_request(&json!({ "sku": "CAP-S", "location_id": 4 }));
        assert_eq!(body["locationId"], 4);
    }
}
