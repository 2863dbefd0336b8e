use regex::Regex;

use crate::errors::ServiceError;

/// A form field that didn't pass its checks
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// the `name` of the offending input
    pub field: &'static str,
    pub message: &'static str,
}

impl From<FieldError> for ServiceError {
    fn from(error: FieldError) -> ServiceError {
        ServiceError::BadRequest(error.message.to_string())
    }
}

/// Submitted form data that can check itself before it is used
pub trait Validate {
    /// the first failing field, in the order the form shows them
    fn validate(&self) -> Result<(), FieldError>;
}

/// rejects values that are empty once surrounding whitespace is dropped
pub fn required(field: &'static str, value: &str, message: &'static str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError { field, message });
    }
    Ok(())
}

pub fn matches(
    field: &'static str,
    value: &str,
    pattern: &Regex,
    message: &'static str,
) -> Result<(), FieldError> {
    if !pattern.is_match(value.trim()) {
        return Err(FieldError { field, message });
    }
    Ok(())
}
