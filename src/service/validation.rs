//! Request body probing for membership endpoints. Admin UI versions disagree on
//! where they put IDs, so several shapes are accepted in a fixed order.

use crate::error::AppError;
use serde_json::Value;

/// Which side of a membership change the IDs are for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Membership {
    Add,
    Remove,
}

impl Membership {
    fn key(self) -> &'static str {
        match self {
            Membership::Add => "add",
            Membership::Remove => "remove",
        }
    }
}

pub struct IdProbe;

fn non_empty_array(v: Option<&Value>) -> Option<&Vec<Value>> {
    v.and_then(Value::as_array).filter(|a| !a.is_empty())
}

impl IdProbe {
    /// Customer IDs from `customer_ids`, then `add`/`remove`, then
    /// `payload.customer_ids`, then `data.customer_ids`.
    pub fn customer_ids(body: &Value, side: Membership) -> Result<Vec<Value>, AppError> {
        let found = non_empty_array(body.get("customer_ids"))
            .or_else(|| non_empty_array(body.get(side.key())))
            .or_else(|| non_empty_array(body.get("payload").and_then(|p| p.get("customer_ids"))))
            .or_else(|| non_empty_array(body.get("data").and_then(|d| d.get("customer_ids"))));
        match found {
            Some(ids) => Ok(ids.clone()),
            None => Err(AppError::BadRequest(format!(
                "must provide IDs of customers to {}",
                side.key()
            ))),
        }
    }

    /// `{ add, remove }` lists, each defaulting to empty. At least one must be
    /// non-empty.
    pub fn add_remove(body: &Value) -> Result<(Vec<Value>, Vec<Value>), AppError> {
        let list = |key: &str| {
            body.get(key)
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default()
        };
        let (add, remove) = (list("add"), list("remove"));
        if add.is_empty() && remove.is_empty() {
            return Err(AppError::BadRequest("must provide IDs to add or remove".into()));
        }
        Ok((add, remove))
    }

    /// Product IDs for collection membership: a bare array, `product_ids`, or
    /// the given side's list (`add`/`remove`). Numeric strings become numbers.
    pub fn product_ids(body: &Value, side: Membership) -> Result<Vec<Value>, AppError> {
        let found = match body {
            Value::Array(a) if !a.is_empty() => Some(a),
            _ => non_empty_array(body.get("product_ids")).or_else(|| non_empty_array(body.get(side.key()))),
        };
        match found {
            Some(ids) => Ok(ids.iter().map(crate::mapping::categories::numeric).collect()),
            None => Err(AppError::BadRequest(format!(
                "must provide IDs of products to {}",
                side.key()
            ))),
        }
    }
}
