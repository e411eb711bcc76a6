//! Lead form payload.
//!
//! A lead stores whatever the landing page form submitted. There is no fixed
//! schema: the payload is a mapping from the form field name to a primitive
//! value.
//!
//! ```json
//! {
//!   "name": "Ana",
//!   "phone": "+55 11 99999-0000",
//!   "age": 31,
//!   "accepted_terms": true,
//!   "company": null
//! }
//! ```
//!
//! Nested objects and arrays are not valid field values. A stored payload
//! containing them fails to decode.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A single submitted form value.
///
/// Numbers stay JSON numbers: integers are never turned into floats and
/// floats are never rounded to integers.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value.into())
    }
}

/// Field name to submitted value.
///
/// Keys are encoded in alphabetical order, not in the order the form sent
/// them.
pub type FieldValues = BTreeMap<String, FieldValue>;
