//! Flat rename tables, one set per resource.

use super::{Conv, Fallback, Field, Rename};

pub const CAMPAIGN_FIELDS: &[Field] = &[
    Field::same("id").conv(Conv::IdString),
    Field::same("name"),
    Field::same("description"),
    Field::same("currency"),
    Field::copy("campaign_identifier", "campaignIdentifier"),
    Field::copy("starts_at", "startsAt"),
    Field::copy("ends_at", "endsAt"),
    Field::same("budget").conv(Conv::SnakeKeys(Fallback::Null)),
    Field::same("promotions").conv(Conv::SnakeKeys(Fallback::Omit)),
    Field::copy("created_at", "createdAt"),
    Field::copy("updated_at", "updatedAt"),
    Field::copy("deleted_at", "deletedAt"),
];

const BUDGET_CREATE: &[Rename] = &[
    Rename::new("type", "type"),
    Rename::new("currency_code", "currencyCode"),
    Rename::new("limit", "limit"),
    Rename::new("used", "used").or(Fallback::Int(0)),
];

const BUDGET_UPDATE: &[Rename] = &[
    Rename::new("type", "type"),
    Rename::new("currency_code", "currencyCode"),
    Rename::new("limit", "limit"),
    Rename::new("used", "used"),
];

pub const CAMPAIGN_CREATE: &[Rename] = &[
    Rename::new("name", "name"),
    Rename::new("description", "description"),
    Rename::new("campaign_identifier", "campaignIdentifier"),
    Rename::new("starts_at", "startsAt"),
    Rename::new("ends_at", "endsAt"),
    Rename::new("currency", "currency"),
    Rename::new("budget", "budget").or(Fallback::Null).nested(BUDGET_CREATE),
];

pub const CAMPAIGN_UPDATE: &[Rename] = &[
    Rename::new("name", "name"),
    Rename::new("description", "description"),
    Rename::new("campaign_identifier", "campaignIdentifier"),
    Rename::new("starts_at", "startsAt"),
    Rename::new("ends_at", "endsAt"),
    Rename::new("currency", "currency"),
    Rename::new("budget", "budget").nested(BUDGET_UPDATE),
];

pub const COLLECTION_FIELDS: &[Field] = &[
    Field::same("id"),
    Field::same("title"),
    Field::same("handle").or(Fallback::EmptyString),
    Field::same("description").or(Fallback::EmptyString),
    Field::same("products").conv(Conv::SnakeKeys(Fallback::EmptyArray)),
    Field::copy("created_at", "createdAt"),
    Field::copy("updated_at", "updatedAt"),
    Field::always("deleted_at", Fallback::Null),
    Field::same("metadata").conv(Conv::JsonObject),
];

/// List rows never carry products.
pub const COLLECTION_LIST_FIELDS: &[Field] = &[
    Field::same("id"),
    Field::same("title"),
    Field::same("handle").or(Fallback::EmptyString),
    Field::same("description").or(Fallback::EmptyString),
    Field::always("products", Fallback::EmptyArray),
    Field::copy("created_at", "createdAt"),
    Field::copy("updated_at", "updatedAt"),
    Field::always("deleted_at", Fallback::Null),
    Field::same("metadata").conv(Conv::JsonObject),
];

pub const COLLECTION_REQUEST: &[Rename] = &[
    Rename::new("title", "title"),
    Rename::new("handle", "handle"),
    Rename::new("description", "description"),
    Rename::new("metadata", "metadata").or(Fallback::EmptyObject),
];

pub const CUSTOMER_REQUEST: &[Rename] = &[
    Rename::new("email", "email"),
    Rename::new("company_name", "companyName"),
    Rename::new("first_name", "firstName"),
    Rename::new("last_name", "lastName"),
    Rename::new("phone", "phone"),
    Rename::new("metadata", "metadata").or(Fallback::EmptyObject),
];

pub const PRODUCT_REQUEST: &[Rename] = &[
    Rename::new("title", "title"),
    Rename::new("subtitle", "subtitle"),
    Rename::new("description", "description"),
    Rename::new("handle", "handle"),
    Rename::new("status", "status"),
    Rename::new("thumbnail", "thumbnail"),
    Rename::new("is_giftcard", "isGiftcard"),
    Rename::new("discountable", "discountable"),
    Rename::new("weight", "weight"),
    Rename::new("length", "length"),
    Rename::new("height", "height"),
    Rename::new("width", "width"),
    Rename::new("origin_country", "originCountry"),
    Rename::new("material", "material"),
    Rename::new("metadata", "metadata"),
];

const APPLICATION_METHOD_REQUEST: &[Rename] = &[
    Rename::new("description", "description"),
    Rename::new("value", "value"),
    Rename::new("currency_code", "currencyCode"),
    Rename::new("max_quantity", "maxQuantity"),
    Rename::new("type", "type"),
    Rename::new("target_type", "targetType"),
    Rename::new("allocation", "allocation"),
    Rename::new("target_rules", "targetRules"),
    Rename::new("buy_rules", "buyRules"),
    Rename::new("apply_to_quantity", "applyToQuantity"),
    Rename::new("buy_rules_min_quantity", "buyRulesMinQuantity"),
];

pub const PROMOTION_CREATE: &[Rename] = &[
    Rename::new("code", "code"),
    Rename::new("type", "type"),
    Rename::new("is_automatic", "isAutomatic").or(Fallback::Bool(false)),
    Rename::new("campaign_id", "campaignId"),
    Rename::new("status", "status").or(Fallback::Str("draft")),
    Rename::new("application_method", "applicationMethod")
        .or(Fallback::Null)
        .nested(APPLICATION_METHOD_REQUEST),
    Rename::new("rules", "rules"),
];

pub const PROMOTION_UPDATE: &[Rename] = &[
    Rename::new("code", "code"),
    Rename::new("type", "type"),
    Rename::new("is_automatic", "isAutomatic"),
    Rename::new("campaign_id", "campaignId"),
    Rename::new("status", "status"),
    Rename::new("application_method", "applicationMethod")
        .or(Fallback::Null)
        .nested(APPLICATION_METHOD_REQUEST),
    Rename::new("rules", "rules"),
];

pub const PROMOTION_FIELDS: &[Field] = &[
    Field::same("id"),
    Field::same("code"),
    Field::same("type"),
    Field::copy("is_automatic", "isAutomatic"),
    Field::copy("campaign_id", "campaignId"),
    Field::same("status"),
    Field::same("rules").conv(Conv::SnakeKeys(Fallback::EmptyArray)),
    Field::copy("application_method", "applicationMethod").conv(Conv::SnakeKeys(Fallback::Null)),
    Field::copy("created_at", "createdAt"),
    Field::copy("updated_at", "updatedAt"),
    Field::copy("deleted_at", "deletedAt"),
    Field::same("metadata").or(Fallback::EmptyObject),
];

pub const RESERVATION_FIELDS: &[Field] = &[
    Field::same("id"),
    Field::copy("line_item_id", "lineItemId"),
    Field::copy("location_id", "locationId"),
    Field::copy("inventory_item_id", "inventoryItemId"),
    Field::same("quantity"),
    Field::copy("external_id", "externalId"),
    Field::same("description"),
    Field::same("metadata").or(Fallback::EmptyObject),
    Field::copy("created_at", "createdAt"),
    Field::copy("updated_at", "updatedAt"),
];

pub const RESERVATION_UPDATE: &[Rename] = &[
    Rename::new("description", "description"),
    Rename::new("metadata", "metadata").or(Fallback::EmptyObject),
];

pub const STOCK_LOCATION_FIELDS: &[Field] = &[
    Field::same("id").conv(Conv::IdString),
    Field::same("name"),
    Field::copy("address_id", "id").conv(Conv::IdString),
    Field::same("address"),
    Field::same("city"),
    Field::copy("country_code", "countryCode"),
    Field::copy("created_at", "createdAt"),
    Field::copy("updated_at", "updatedAt"),
    Field::copy("deleted_at", "deletedAt"),
    Field::same("metadata").or(Fallback::EmptyObject),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::{apply_fields, apply_renames};
    use serde_json::json;

    #[test]
    fn promotion_create_defaults() {
        let body = apply_renames(
            &json!({ "code": "SUMMER", "application_method": { "currency_code": "eur", "target_type": "items" } }),
            PROMOTION_CREATE,
        );
        assert_eq!(body["isAutomatic"], false);
        assert_eq!(body["status"], "draft");
        assert_eq!(body["applicationMethod"], json!({ "currencyCode": "eur", "targetType": "items" }));
        assert!(body.get("rules").is_none());
    }

    #[test]
    fn stock_location_ids_become_strings() {
        let out = apply_fields(&json!({ "id": 4, "name": "Main", "countryCode": "de" }), STOCK_LOCATION_FIELDS);
        assert_eq!(out["id"], "4");
        assert_eq!(out["address_id"], "4");
        assert_eq!(out["country_code"], "de");
        assert_eq!(out["metadata"], json!({}));
    }

    #[test]
    fn campaign_budget_is_snake_cased() {
        let out = apply_fields(
            &json!({ "id": 42, "campaignIdentifier": "C-42", "budget": { "currencyCode": "usd", "limit": 100 } }),
            CAMPAIGN_FIELDS,
        );
        assert_eq!(out["id"], "42");
        assert_eq!(out["campaign_identifier"], "C-42");
        assert_eq!(out["budget"], json!({ "currency_code": "usd", "limit": 100 }));
        assert!(out.get("promotions").is_none());
    }
}
