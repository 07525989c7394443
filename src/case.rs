//! Key case conversion between the admin UI (snake_case) and the backend (camelCase).

use serde_json::{Map, Value};

/// Which casing object keys should end up in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Case {
    Camel,
    Snake,
}

/// Convert a single identifier from snake_case to camelCase.
/// e.g. "company_name" -> "companyName", "created_at" -> "createdAt"
pub fn to_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut capitalize_next = false;
    for c in s.chars() {
        if c == '_' {
            capitalize_next = !out.is_empty();
        } else if capitalize_next {
            out.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Convert a single identifier from camelCase to snake_case.
/// e.g. "isGiftcard" -> "is_giftcard", "countryCode" -> "country_code"
pub fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn convert_key(key: &str, case: Case) -> String {
    match case {
        Case::Camel => to_camel_case(key),
        Case::Snake => to_snake_case(key),
    }
}

/// Rename the keys of one object in place. Nested values are left alone.
/// On collision the converted key wins, matching what the backend would see last.
pub fn object_keys_to(obj: &mut Map<String, Value>, case: Case) {
    let keys: Vec<String> = obj.keys().cloned().collect();
    for k in keys {
        let converted = convert_key(&k, case);
        if converted != k {
            if let Some(v) = obj.remove(&k) {
                obj.insert(converted, v);
            }
        }
    }
}

/// Recursively convert every object key in a value (objects and arrays of objects).
/// `metadata` objects are opaque user data and keep their keys.
pub fn keys_to_recursive(value: &mut Value, case: Case) {
    match value {
        Value::Object(map) => {
            object_keys_to(map, case);
            for (k, v) in map.iter_mut() {
                if k != "metadata" {
                    keys_to_recursive(v, case);
                }
            }
        }
        Value::Array(arr) => {
            for v in arr.iter_mut() {
                keys_to_recursive(v, case);
            }
        }
        _ => {}
    }
}

/// Owned convenience wrapper around [`keys_to_recursive`].
pub fn converted(mut value: Value, case: Case) -> Value {
    keys_to_recursive(&mut value, case);
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn identifiers_convert_both_ways() {
        assert_eq!(to_camel_case("parent_category_id"), "parentCategoryId");
        assert_eq!(to_snake_case("parentCategoryId"), "parent_category_id");
        assert_eq!(to_camel_case("id"), "id");
        assert_eq!(to_snake_case("id"), "id");
        assert_eq!(to_camel_case("_private"), "private");
    }

    #[test]
    fn recursive_conversion_skips_metadata() {
        let value = json!({
            "firstName": "Ada",
            "groups": [{ "createdAt": "2024-01-01" }],
            "metadata": { "loyaltyTier": "gold" }
        });
        let snake = converted(value, Case::Snake);
        assert_eq!(snake["first_name"], "Ada");
        assert_eq!(snake["groups"][0]["created_at"], "2024-01-01");
        assert_eq!(snake["metadata"]["loyaltyTier"], "gold");
    }

    #[test]
    fn snake_then_camel_restores_keys() {
        let original = json!({ "companyName": "Acme", "lastName": "Lovelace" });
        let back = converted(converted(original.clone(), Case::Snake), Case::Camel);
        assert_eq!(back, original);
    }
}
