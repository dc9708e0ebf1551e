//! Domain error types

use thiserror::Error;

/// Rejection of a text before any request is built.
///
/// The display strings are the messages shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Text must be at least 50 characters")]
    TooShort { length: usize },

    #[error("Text cannot exceed 50,000 characters")]
    TooLong { length: usize },
}

impl ValidationError {
    /// Character count of the rejected text
    pub fn length(&self) -> usize {
        match self {
            ValidationError::TooShort { length } | ValidationError::TooLong { length } => *length,
        }
    }

    /// Check if the text fell below the lower bound
    pub fn is_too_short(&self) -> bool {
        matches!(self, ValidationError::TooShort { .. })
    }
}
