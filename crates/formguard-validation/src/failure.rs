//! Validation failures

use thiserror::Error;

/// Why a required field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Value was empty
    Missing,
    /// Numeric field whose value is not a number
    InvalidNumber,
}

/// A required field that failed validation.
///
/// Both kinds render the same user-facing text; the kind is kept for
/// logging and for callers that want to tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} is required.")]
pub struct ValidationFailure {
    pub field: String,
    pub kind: FailureKind,
}

impl ValidationFailure {
    pub fn missing(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: FailureKind::Missing,
        }
    }

    pub fn invalid_number(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: FailureKind::InvalidNumber,
        }
    }
}
