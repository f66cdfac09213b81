//! External resource shapes: what the API accepts and returns.
//!
//! Every field is optional so that a request body can say exactly which fields it carries.
//! A create checks that the required ones are present; an update overlays only the ones
//! that are. Shapes returned by the API always have every field filled in.
//!
//! JSON names are camelCase. PascalCase spellings are accepted on input as well.

pub mod camp;
pub mod location;
pub mod speaker;
pub mod talk;

pub use camp::*;
pub use location::*;
pub use speaker::*;
pub use talk::*;

use thiserror::Error;

/// A submitted shape broke one of its field constraints.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(pub String);

pub(crate) fn required<'a, T>(field: &'static str, value: &'a Option<T>) -> Result<&'a T, ValidationError> {
    value
        .as_ref()
        .ok_or_else(|| ValidationError(format!("The {field} field is required.")))
}

pub(crate) fn required_text<'a>(field: &'static str, value: &'a Option<String>) -> Result<&'a str, ValidationError> {
    match value.as_deref() {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(ValidationError(format!("The {field} field is required."))),
    }
}

pub(crate) fn max_length(field: &'static str, value: &Option<String>, max: usize) -> Result<(), ValidationError> {
    match value {
        Some(text) if text.chars().count() > max => Err(ValidationError(format!(
            "The field {field} must be a string with a maximum length of {max}."
        ))),
        _ => Ok(()),
    }
}

pub(crate) fn in_range(field: &'static str, value: Option<u32>, min: u32, max: u32) -> Result<(), ValidationError> {
    match value {
        Some(n) if n < min || n > max => Err(ValidationError(format!(
            "The field {field} must be between {min} and {max}."
        ))),
        _ => Ok(()),
    }
}
