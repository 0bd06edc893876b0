//! List node for slab-based storage.
//!
//! ## Design
//!
//! `Node` wraps one element value with a forward link for the singly-linked
//! chain. The link is a slab key (`usize`), not a direct reference, so nodes
//! can be relinked without touching pointers.
//!
//! ## Slab Integration
//!
//! Per official slab docs (https://docs.rs/slab/0.4.11):
//! - Keys are `usize` values returned by `slab.insert()`
//! - Keys may be reused after `slab.remove()`
//! - O(1) insert, remove, and lookup

/// A node stored in the slab.
///
/// Contains one owned element value plus the forward link of the chain.
/// The link is a slab key (`usize`), `None` at the tail.
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    /// The element value
    pub(crate) value: T,

    /// Next node in ascending order (slab key)
    /// None if this node is the tail
    pub(crate) next: Option<usize>,
}

impl<T> Node<T> {
    /// Create a new node (not yet linked)
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Self { value, next: None }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_new() {
        let node = Node::new(42);

        assert_eq!(node.value, 42);
        assert!(node.next.is_none());
    }

    #[test]
    fn test_node_linking() {
        let mut node = Node::new("a");

        node.next = Some(7);
        assert_eq!(node.next, Some(7));

        node.next = None;
        assert!(node.next.is_none());
    }
}
