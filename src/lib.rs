//! # sorted-list
//!
//! A generic sorted singly-linked list with slab-backed node storage.
//!
//! ## Architecture
//!
//! The crate consists of:
//! - **List**: [`SortedList`], a chain of slab-allocated nodes kept in
//!   ascending order, with O(1) head/tail access and O(n) positional
//!   operations
//! - **Errors**: [`SortedListError`], the three failure kinds every
//!   operation can surface
//!
//! ## Design Principles
//!
//! 1. **Ascending order**: Elements are kept sorted under `T: Ord`;
//!    duplicates are allowed and keep their insertion order
//! 2. **Slab allocation**: Nodes live in a pre-allocatable arena and
//!    link to each other by index, so no unsafe code is needed
//! 3. **Fail before mutating**: Every error is raised before the list
//!    is touched; a failed call never leaves partial state
//! 4. **Single-threaded**: `&mut self` mutators and borrow-checked
//!    iteration; share across threads only behind external locking
//!
//! ## Example
//!
//! ```
//! use sorted_list::SortedList;
//!
//! let mut list = SortedList::new();
//! list.insert(5);
//! list.insert(1);
//! list.insert(3);
//! list.insert(7);
//!
//! assert_eq!(list.first(), Ok(&1));
//! assert_eq!(list.last(), Ok(&7));
//! assert_eq!(list.len(), 4);
//!
//! assert!(list.remove(&5));
//! let values: Vec<i32> = list.iter().copied().collect();
//! assert_eq!(values, vec![1, 3, 7]);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Error types: the three failure kinds
pub mod error;

/// The sorted list and its iterator
pub mod list;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use error::SortedListError;
pub use list::{Iter, SortedList};
