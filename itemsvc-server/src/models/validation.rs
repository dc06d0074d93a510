//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is absent, null, or empty
    Required { field: &'static str },

    /// Request body could not be decoded
    MalformedBody,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { field } => write!(f, "{} is required", field),
            Self::MalformedBody => write!(f, "invalid request body"),
        }
    }
}

impl std::error::Error for ValidationError {}
