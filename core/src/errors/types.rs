//! Error types for authentication, authorization and input validation
//!
//! Display strings are safe to show to clients; they never contain
//! credentials, hashes or token material.

use thiserror::Error;

/// Authentication and authorization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Any credential or token problem; callers cannot tell which
    #[error("Authentication invalid")]
    AuthenticationFailed,

    /// Authenticated, but not the owner of the resource
    #[error("Not authorized to access this route")]
    InsufficientPermissions,

    #[error("Email already in use")]
    EmailAlreadyInUse,
}

/// Input validation errors
///
/// `field` uses the client-facing (camelCase) field name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please provide {field}")]
    RequiredField { field: String },

    #[error("Please provide a valid {field}")]
    InvalidFormat { field: String },

    #[error("{}", length_message(.field, .min, .max))]
    InvalidLength {
        field: String,
        min: usize,
        max: Option<usize>,
    },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

impl ValidationError {
    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            ValidationError::RequiredField { field }
            | ValidationError::InvalidFormat { field }
            | ValidationError::InvalidLength { field, .. }
            | ValidationError::InvalidValue { field, .. } => field,
        }
    }

    /// Unwraps a required input, treating empty or blank values as missing
    ///
    /// Returns the trimmed value.
    pub fn require(field: &str, value: Option<String>) -> Result<String, ValidationError> {
        match value {
            Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
            _ => Err(ValidationError::RequiredField {
                field: field.to_string(),
            }),
        }
    }

    /// Checks a value's length in characters; `max` of `None` means unbounded
    pub fn check_length(
        field: &str,
        value: &str,
        min: usize,
        max: Option<usize>,
    ) -> Result<(), ValidationError> {
        let length = value.chars().count();
        if length < min || max.is_some_and(|max| length > max) {
            return Err(ValidationError::InvalidLength {
                field: field.to_string(),
                min,
                max,
            });
        }
        Ok(())
    }

    /// Parses an optional enum-like input, reporting the raw value on failure
    pub fn parse_optional<T: std::str::FromStr>(
        field: &str,
        value: Option<&str>,
    ) -> Result<Option<T>, ValidationError> {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            None => Ok(None),
            Some(raw) => raw.parse().map(Some).map_err(|_| ValidationError::InvalidValue {
                field: field.to_string(),
                value: raw.to_string(),
            }),
        }
    }
}

fn length_message(field: &str, min: &usize, max: &Option<usize>) -> String {
    match max {
        Some(max) => format!("{} must be between {} and {} characters", field, min, max),
        None => format!("{} must be at least {} characters", field, min),
    }
}
