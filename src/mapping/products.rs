//! Product shapes. The admin UI needs a variant, an option and a sales channel
//! on every product, none of which the backend models, so they are synthesized.

use super::{apply_fields, lookup, Conv, Field};
use serde_json::{json, Value};

const SUMMARY_FIELDS: &[Field] = &[
    Field::same("id"),
    Field::same("title"),
    Field::same("description"),
    Field::same("thumbnail"),
    Field::same("status").conv(Conv::Lowercase("draft")),
];

const DETAIL_FIELDS: &[Field] = &[
    Field::same("id"),
    Field::same("title"),
    Field::same("subtitle"),
    Field::same("description"),
    Field::same("handle"),
    Field::same("thumbnail"),
    Field::same("status").conv(Conv::Lowercase("draft")),
    Field::same("weight"),
    Field::same("length"),
    Field::same("height"),
    Field::same("width"),
    Field::copy("origin_country", "originCountry"),
    Field::same("material"),
    Field::same("discountable"),
    Field::copy("is_giftcard", "isGiftcard"),
];

fn id_text(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn timestamp(product: &Value, backend: &str, ui: &str) -> Value {
    lookup(product, backend, ui)
        .cloned()
        .unwrap_or_else(|| Value::String(chrono::Utc::now().to_rfc3339()))
}

fn default_sales_channel() -> Value {
    json!({ "id": "default", "name": "Default Sales Channel", "description": null, "is_disabled": false })
}

/// Row in the product list.
pub fn summary(product: &Value) -> Value {
    let mut out = apply_fields(product, SUMMARY_FIELDS);
    if let Value::Object(map) = &mut out {
        map.insert("variants".into(), json!([]));
        map.insert("collection".into(), Value::Null);
        map.insert("sales_channels".into(), json!([{ "name": "Default Sales Channel" }]));
    }
    out
}

/// Full product as the admin detail page expects it.
pub fn detail(product: &Value) -> Value {
    let id = product.get("id").cloned().unwrap_or(Value::Null);
    let key = id_text(&id);
    let created_at = timestamp(product, "createdAt", "created_at");
    let updated_at = timestamp(product, "updatedAt", "updated_at");
    let handle = product.get("handle").cloned().unwrap_or(Value::Null);

    let mut out = apply_fields(product, DETAIL_FIELDS);
    let Value::Object(map) = &mut out else {
        return out;
    };

    let variant_id = format!("{}_default", key);
    map.insert(
        "variants".into(),
        json!([{
            "id": variant_id,
            "title": "Default Variant",
            "sku": handle,
            "ean": null,
            "upc": null,
            "barcode": null,
            "prices": [{
                "id": format!("price_{}", key),
                "currency_code": "usd",
                "amount": 0,
                "variant_id": variant_id,
            }],
            "options": [],
            "inventory_quantity": 0,
            "manage_inventory": true,
        }]),
    );
    map.insert("collection_id".into(), Value::Null);
    map.insert("collection".into(), Value::Null);
    map.insert("sales_channels".into(), json!([default_sales_channel()]));
    map.insert(
        "metadata".into(),
        lookup(product, "metadata", "metadata").cloned().unwrap_or_else(|| json!({})),
    );
    map.insert(
        "type".into(),
        json!({ "id": "default", "value": "default", "name": "Default Type" }),
    );
    let images = match lookup(product, "thumbnail", "thumbnail") {
        Some(url) => json!([{
            "url": url,
            "id": format!("image_{}", key),
            "created_at": created_at,
            "updated_at": updated_at,
        }]),
        None => json!([]),
    };
    map.insert("images".into(), images);
    map.insert(
        "options".into(),
        json!([{
            "id": format!("option_{}", key),
            "title": "Size",
            "product_id": id,
            "created_at": created_at,
            "updated_at": updated_at,
            "values": [],
        }]),
    );
    map.insert("tags".into(), json!([]));
    map.insert("categories".into(), json!([]));
    map.insert("created_at".into(), created_at);
    map.insert("updated_at".into(), updated_at);
    for key in ["profile_id", "profile", "external_id"] {
        map.insert(key.into(), Value::Null);
    }
    map.insert("handle_exists".into(), Value::Bool(false));
    map.insert("status_exists".into(), Value::Bool(false));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_defaults_status_and_channels() {
        let row = summary(&json!({ "id": 1, "title": "Mug", "status": "PUBLISHED" }));
        assert_eq!(row["status"], "published");
        assert_eq!(row["variants"], json!([]));
        assert_eq!(row["sales_channels"][0]["name"], "Default Sales Channel");
        let row = summary(&json!({ "id": 2 }));
        assert_eq!(row["status"], "draft");
    }

    #[test]
    fn detail_synthesizes_variant_and_image() {
        let product = json!({
            "id": 7,
            "title": "Mug",
            "handle": "mug",
            "thumbnail": "https://img/mug.png",
            "isGiftcard": false,
            "originCountry": "CN",
            "createdAt": "2024-05-01T00:00:00Z",
            "updatedAt": "2024-05-02T00:00:00Z"
        });
        let out = detail(&product);
        assert_eq!(out["variants"][0]["id"], "7_default");
        assert_eq!(out["variants"][0]["sku"], "mug");
        assert_eq!(out["variants"][0]["prices"][0]["id"], "price_7");
        assert_eq!(out["images"][0]["id"], "image_7");
        assert_eq!(out["options"][0]["product_id"], 7);
        assert_eq!(out["origin_country"], "CN");
        assert_eq!(out["is_giftcard"], false);
        assert_eq!(out["created_at"], "2024-05-01T00:00:00Z");
        assert_eq!(out["metadata"], json!({}));
    }

    #[test]
    fn detail_without_thumbnail_has_no_images() {
        let out = detail(&json!({ "id": "p1" }));
        assert_eq!(out["images"], json!([]));
        assert!(out["created_at"].is_string());
    }
}
