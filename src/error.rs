//! Error types for sorted list operations.
//!
//! There are exactly three failure kinds, and every one is synchronous:
//! validation runs before any mutation, so a failed call always leaves
//! the list exactly as it was.

use thiserror::Error;

/// Errors returned by [`SortedList`](crate::SortedList) operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SortedListError {
    /// An operation that accepts an element value received an absent one.
    ///
    /// Raised only by the `try_*` methods, which take `Option` values;
    /// the core methods make absence unrepresentable at the type level.
    #[error("value must not be absent")]
    InvalidArgument,

    /// `first` or `last` was called on an empty list.
    #[error("list is empty")]
    NotFound,

    /// `get` was called with an index past the end of the list.
    #[error("index {index} out of range for list of length {len}")]
    OutOfRange {
        /// The requested index
        index: usize,
        /// The list length at the time of the call
        len: usize,
    },
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            SortedListError::InvalidArgument.to_string(),
            "value must not be absent"
        );
        assert_eq!(SortedListError::NotFound.to_string(), "list is empty");
        assert_eq!(
            SortedListError::OutOfRange { index: 3, len: 2 }.to_string(),
            "index 3 out of range for list of length 2"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            SortedListError::OutOfRange { index: 1, len: 0 },
            SortedListError::OutOfRange { index: 1, len: 0 }
        );
        assert_ne!(SortedListError::NotFound, SortedListError::InvalidArgument);
    }
}
