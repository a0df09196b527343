// Error types for Tools module

use thiserror::Error;

/// Request validation errors, carrying field-level detail
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{0}' must not be empty")]
    EmptyField(&'static str),

    #[error("Field '{field}' must be within {min}..={max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
        value: i64,
    },
}

pub type Result<T> = std::result::Result<T, ValidationError>;
