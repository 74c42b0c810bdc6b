//! Body fields that survive a wrong JSON type until validation.
//!
//! A typed field makes serde stop at the first mismatch. Wrapping it in
//! [`Lenient`] lets the body deserialize anyway, so `validator` can report the
//! mismatch together with every other failing field.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::ValidationError;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Lenient<T> {
    Typed(T),
    Mistyped(Value),
}

impl<T> Lenient<T> {
    pub fn into_typed(self) -> Option<T> {
        match self {
            Lenient::Typed(value) => Some(value),
            Lenient::Mistyped(_) => None,
        }
    }
}

impl Lenient<String> {
    /// Returns the string, or a `"<field>" must be a string` error.
    pub fn as_str(&self, field: &str) -> Result<&str, ValidationError> {
        match self {
            Lenient::Typed(value) => Ok(value),
            Lenient::Mistyped(_) => Err(type_error(field, "must be a string")),
        }
    }
}

impl Lenient<Vec<String>> {
    /// Returns the items, or an error naming the expected array of strings.
    pub fn as_strings(&self, field: &str) -> Result<&[String], ValidationError> {
        match self {
            Lenient::Typed(items) => Ok(items),
            Lenient::Mistyped(Value::Array(_)) => {
                Err(type_error(field, "must only contain strings"))
            }
            Lenient::Mistyped(_) => Err(type_error(field, "must be an array")),
        }
    }
}

fn type_error(field: &str, rule: &str) -> ValidationError {
    ValidationError::new("type").with_message(Cow::Owned(format!("\"{field}\" {rule}")))
}
