//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur while constructing domain values from untyped input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' is required")]
    MissingField { field: String },

    #[error("Unknown parameter key '{key}'")]
    UnknownParameter { key: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: String,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates a missing field validation error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        ValidationError::MissingField { field: field.into() }
    }

    /// Creates an unknown parameter key error.
    pub fn unknown_parameter(key: impl Into<String>) -> Self {
        ValidationError::UnknownParameter { key: key.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(
        field: impl Into<String>,
        min: i64,
        max: i64,
        actual: impl Into<String>,
    ) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual: actual.into(),
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_displays_correctly() {
        let err = ValidationError::missing_field("tool_integration");
        assert_eq!(format!("{}", err), "Field 'tool_integration' is required");
    }

    #[test]
    fn unknown_parameter_displays_correctly() {
        let err = ValidationError::unknown_parameter("is_cloud_native");
        assert_eq!(format!("{}", err), "Unknown parameter key 'is_cloud_native'");
    }

    #[test]
    fn out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("dynamic_goals", 0, 1, "2");
        assert_eq!(
            format!("{}", err),
            "Field 'dynamic_goals' must be between 0 and 1, got 2"
        );
    }

    #[test]
    fn invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("use_case_name", "expected a string");
        assert_eq!(
            format!("{}", err),
            "Field 'use_case_name' has invalid format: expected a string"
        );
    }
}
