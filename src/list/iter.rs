//! Iteration over the sorted chain.
//!
//! The iterator chases slab keys from the head, yielding `&T` in
//! ascending order. It borrows the list, so the borrow checker rules
//! out mutation while a traversal is alive.

use slab::Slab;

use crate::list::node::Node;

/// An iterator over the elements of a [`SortedList`](crate::SortedList)
/// in ascending order.
///
/// Created by [`SortedList::iter`](crate::SortedList::iter); each call
/// starts a fresh traversal from the head.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    nodes: &'a Slab<Node<T>>,
    current: Option<usize>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(nodes: &'a Slab<Node<T>>, head: Option<usize>) -> Self {
        Self {
            nodes,
            current: head,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.current?;
        let node = &self.nodes[key];
        self.current = node.next;
        Some(&node.value)
    }
}

impl<T> std::iter::FusedIterator for Iter<'_, T> {}

impl<'a, T: Ord> IntoIterator for &'a crate::SortedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
