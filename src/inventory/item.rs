//! Item model and request payload
//!
//! `Item` is what the store holds and what clients receive.
//! `ItemPayload` is what clients send; its fields are kept as raw JSON
//! values so that validation can tell an absent key from a present one
//! of the wrong type.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// An inventory record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// System-assigned identifier, immutable after creation
    pub id: String,
    pub name: String,
    /// Kept as the integer literal the client sent, which may exceed 64 bits
    pub quantity: Number,
    /// Kept as the number the client sent (integer or float)
    pub price: Number,
}

impl Item {
    /// Build an item from validated fields
    pub fn from_fields(id: impl Into<String>, fields: ItemFields) -> Self {
        Self {
            id: id.into(),
            name: fields.name,
            quantity: fields.quantity,
            price: fields.price,
        }
    }
}

/// Item fields that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFields {
    pub name: String,
    pub quantity: Number,
    pub price: Number,
}

/// Parsed request body for Create and Update
///
/// `None` means the key was absent. `Some(Value::Null)` means it was
/// present with a JSON `null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPayload {
    pub name: Option<Value>,
    pub quantity: Option<Value>,
    pub price: Option<Value>,
}

impl ItemPayload {
    /// Parse a raw request body.
    ///
    /// Bodies that are empty, malformed, or not a JSON object produce an
    /// empty payload, which validation reports as missing fields.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice::<Value>(body)
            .map(|value| Self::from_value(&value))
            .unwrap_or_default()
    }

    /// Build a payload from an already decoded JSON value
    pub fn from_value(value: &Value) -> Self {
        match value.as_object() {
            Some(obj) => Self {
                name: obj.get("name").cloned(),
                quantity: obj.get("quantity").cloned(),
                price: obj.get("price").cloned(),
            },
            None => Self::default(),
        }
    }
}
