//! Sorted list: slab-backed singly-linked chain.
//!
//! ## Components
//!
//! - [`SortedList`]: The list itself - slab arena plus head/tail/len
//! - [`Iter`]: Forward traversal in ascending order
//!
//! Nodes live in a `slab::Slab`; links between them are slab keys
//! rather than pointers, so the whole structure is safe code.

mod iter;
mod node;
mod sorted;

pub use iter::Iter;
pub use sorted::SortedList;
