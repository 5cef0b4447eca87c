//! Element storage error types
//!
//! Only conditions a user program can trigger are reported here. Misuse by
//! the object model (removing a missing index, writing non-default
//! attributes into dense storage, taking from an empty array) panics.

use thiserror::Error;

/// Errors surfaced to the object model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElementsError {
    /// Array length outside `0..=u32::MAX`
    #[error("RangeError: Invalid array length {0}")]
    InvalidLength(u64),
}

impl ElementsError {
    /// Create an invalid length error
    pub fn invalid_length(length: u64) -> Self {
        Self::InvalidLength(length)
    }
}

/// Result type for element storage operations
pub type ElementsResult<T> = std::result::Result<T, ElementsError>;
