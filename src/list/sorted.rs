//! Sorted singly-linked list implementation.
//!
//! ## Architecture
//!
//! The list uses a hybrid data structure:
//!
//! - **Slab**: Pre-allocated storage for O(1) node insert/remove
//! - **Index links**: Each node's `next` is a slab key, not a pointer
//! - **Head/tail/len**: Tracked beside the slab for O(1) boundary access
//!
//! ## Ordering
//!
//! Elements are kept in ascending order under `T`'s total ordering
//! (`Ord`). Duplicates are allowed; a new element that compares equal
//! to existing ones is placed **after** all of them, so relative
//! insertion order among equal elements is preserved.
//!
//! ## Memory Model
//!
//! Per slab docs (https://docs.rs/slab/0.4.11):
//! - `Slab::with_capacity(n)` pre-allocates n slots
//! - Keys are reused after removal
//! - O(1) insert, remove, and lookup
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
//!
//! let values: Vec<i32> = list.iter().copied().collect();
//! assert_eq!(values, vec![1, 3, 5]);
//! assert_eq!(list.first(), Ok(&1));
//! assert_eq!(list.last(), Ok(&5));
//! ```

use std::cmp::Ordering;

use slab::Slab;

use crate::error::SortedListError;
use crate::list::iter::Iter;
use crate::list::node::Node;

/// A sorted singly-linked list.
///
/// Elements are kept in ascending order under `T: Ord`. The ordering
/// comparator (`cmp`) drives insertion position and search pruning;
/// value equality (`==`) drives [`remove`](SortedList::remove). The
/// `Ord` contract requires the two to agree, and the list relies on
/// that agreement without enforcing it.
///
/// Node data lives in a slab; the list only holds the chain metadata.
#[derive(Debug, Clone)]
pub struct SortedList<T> {
    /// Pre-allocated node storage
    /// Key: slab index, Value: Node
    nodes: Slab<Node<T>>,

    /// Head of the chain (smallest element, slab key)
    head: Option<usize>,

    /// Tail of the chain (largest element, slab key)
    tail: Option<usize>,

    /// Number of elements in the list
    len: usize,
}

impl<T: Ord> SortedList<T> {
    /// Create a new empty list
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Create a list with pre-allocated capacity
    ///
    /// # Arguments
    ///
    /// * `capacity` - Number of node slots to pre-allocate
    ///
    /// # Example
    ///
    /// ```
    /// use sorted_list::SortedList;
    ///
    /// let list = SortedList::<u64>::with_capacity(1_000);
    /// assert!(list.capacity() >= 1_000);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: None,
            tail: None,
            len: 0,
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    /// Get the current capacity (pre-allocated node slots)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Get the number of elements in the list
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the list is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    // ========================================================================
    // Boundary Access
    // ========================================================================

    /// Get the first (smallest) element
    ///
    /// # Errors
    ///
    /// Returns [`SortedListError::NotFound`] if the list is empty.
    pub fn first(&self) -> Result<&T, SortedListError> {
        let head = self.head.ok_or(SortedListError::NotFound)?;
        Ok(&self.nodes[head].value)
    }

    /// Get the last (largest) element
    ///
    /// # Errors
    ///
    /// Returns [`SortedListError::NotFound`] if the list is empty.
    pub fn last(&self) -> Result<&T, SortedListError> {
        let tail = self.tail.ok_or(SortedListError::NotFound)?;
        Ok(&self.nodes[tail].value)
    }

    // ========================================================================
    // Positional Access
    // ========================================================================

    /// Get the element at the specified position (0-based)
    ///
    /// Linear traversal from the head, O(n).
    ///
    /// # Errors
    ///
    /// Returns [`SortedListError::OutOfRange`] if the list is empty or
    /// `index >= len()`.
    ///
    /// # Example
    ///
    /// ```
    /// use sorted_list::{SortedList, SortedListError};
    ///
    /// let mut list = SortedList::new();
    /// list.insert(3);
    /// list.insert(5);
    ///
    /// assert_eq!(list.get(0), Ok(&3));
    /// assert_eq!(list.get(1), Ok(&5));
    /// assert_eq!(list.get(2), Err(SortedListError::OutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, SortedListError> {
        let mut current = self.head;
        let mut i = 0;
        while let Some(key) = current {
            if i == index {
                return Ok(&self.nodes[key].value);
            }
            current = self.nodes[key].next;
            i += 1;
        }
        Err(SortedListError::OutOfRange {
            index,
            len: self.len,
        })
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Get the position of the first element equal to `value`
    ///
    /// Linear scan from the head using the ordering comparator. The scan
    /// stops early as soon as it reaches an element that compares greater
    /// than `value`, since no match can follow it in a sorted chain.
    ///
    /// # Returns
    ///
    /// The 0-based position of the first element that compares equal,
    /// or `None` if there is no such element.
    ///
    /// # Example
    ///
    /// ```
    /// use sorted_list::SortedList;
    ///
    /// let mut list = SortedList::new();
    /// list.insert(5);
    /// list.insert(3);
    ///
    /// assert_eq!(list.index_of(&3), Some(0));
    /// assert_eq!(list.index_of(&5), Some(1));
    /// assert_eq!(list.index_of(&1), None);
    /// ```
    pub fn index_of(&self, value: &T) -> Option<usize> {
        let mut current = self.head;
        let mut index = 0;
        while let Some(key) = current {
            match value.cmp(&self.nodes[key].value) {
                Ordering::Equal => return Some(index),
                // Sorted chain: every later element is at least this large.
                Ordering::Less => return None,
                Ordering::Greater => {}
            }
            index += 1;
            current = self.nodes[key].next;
        }
        None
    }

    /// Check if the list contains an element equal to `value`
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Insert a value, preserving ascending order
    ///
    /// Equal values are placed after all existing equal values, so
    /// relative insertion order among duplicates is preserved.
    ///
    /// # Example
    ///
    /// ```
    /// use sorted_list::SortedList;
    ///
    /// let mut list = SortedList::new();
    /// list.insert(5);
    /// list.insert(1);
    /// list.insert(3);
    /// list.insert(7);
    ///
    /// let values: Vec<i32> = list.iter().copied().collect();
    /// assert_eq!(values, vec![1, 3, 5, 7]);
    /// ```
    pub fn insert(&mut self, value: T) {
        let key = self.nodes.insert(Node::new(value));
        self.len += 1;

        let Some(head) = self.head else {
            // Empty list - the new node is both head and tail
            self.head = Some(key);
            self.tail = Some(key);
            return;
        };

        // Strictly smaller than the head: the new node becomes the head
        if self.nodes[key].value < self.nodes[head].value {
            self.nodes[key].next = Some(head);
            self.head = Some(key);
            return;
        }

        // Walk to the last node whose value is at-or-before the new value.
        // The `>=` keeps walking past equal elements, so duplicates are
        // appended after the existing run.
        let mut current = head;
        while let Some(next) = self.nodes[current].next {
            if self.nodes[key].value >= self.nodes[next].value {
                current = next;
            } else {
                break;
            }
        }

        // Splice the new node after the scan position
        self.nodes[key].next = self.nodes[current].next;
        self.nodes[current].next = Some(key);
        if self.nodes[key].next.is_none() {
            self.tail = Some(key);
        }
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Remove the first element equal to `value`
    ///
    /// Matching uses value equality (`==`), not the ordering comparator,
    /// and the scan never exits early on ordering.
    ///
    /// # Returns
    ///
    /// `true` if an element was removed, `false` if no element matched.
    ///
    /// # Example
    ///
    /// ```
    /// use sorted_list::SortedList;
    ///
    /// let mut list = SortedList::new();
    /// list.insert(3);
    /// list.insert(5);
    ///
    /// assert!(list.remove(&3));
    /// assert!(!list.remove(&3));
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        let Some(head) = self.head else {
            return false;
        };

        // Head removal: advance the head, clear the tail if now empty
        if self.nodes[head].value == *value {
            self.head = self.nodes[head].next;
            if self.head.is_none() {
                self.tail = None;
            }
            self.nodes.remove(head);
            self.len -= 1;
            return true;
        }

        // Interior removal: relink the predecessor, fix the tail if the
        // removed node was last
        let mut current = head;
        while let Some(next) = self.nodes[current].next {
            if self.nodes[next].value == *value {
                self.nodes[current].next = self.nodes[next].next;
                if self.nodes[current].next.is_none() {
                    self.tail = Some(current);
                }
                self.nodes.remove(next);
                self.len -= 1;
                return true;
            }
            current = next;
        }
        false
    }

    /// Clear all elements from the list
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Get an iterator over the elements in ascending order
    ///
    /// The traversal is lazy and forward-only; each call starts a fresh
    /// walk from the head. The shared borrow prevents mutation while any
    /// iterator is alive.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.nodes, self.head)
    }

    // ========================================================================
    // Checked Operations
    // ========================================================================

    /// Insert a possibly-absent value
    ///
    /// # Errors
    ///
    /// Returns [`SortedListError::InvalidArgument`] if `value` is `None`;
    /// the list is left unmodified.
    ///
    /// # Example
    ///
    /// ```
    /// use sorted_list::{SortedList, SortedListError};
    ///
    /// let mut list = SortedList::new();
    /// assert_eq!(list.try_insert(None::<i32>), Err(SortedListError::InvalidArgument));
    /// assert!(list.is_empty());
    ///
    /// assert_eq!(list.try_insert(Some(5)), Ok(()));
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn try_insert(&mut self, value: Option<T>) -> Result<(), SortedListError> {
        match value {
            Some(value) => {
                self.insert(value);
                Ok(())
            }
            None => Err(SortedListError::InvalidArgument),
        }
    }

    /// Remove the first element equal to a possibly-absent value
    ///
    /// # Errors
    ///
    /// Returns [`SortedListError::InvalidArgument`] if `value` is `None`.
    pub fn try_remove(&mut self, value: Option<&T>) -> Result<bool, SortedListError> {
        match value {
            Some(value) => Ok(self.remove(value)),
            None => Err(SortedListError::InvalidArgument),
        }
    }

    /// Check containment of a possibly-absent value
    ///
    /// # Errors
    ///
    /// Returns [`SortedListError::InvalidArgument`] if `value` is `None`.
    pub fn try_contains(&self, value: Option<&T>) -> Result<bool, SortedListError> {
        match value {
            Some(value) => Ok(self.contains(value)),
            None => Err(SortedListError::InvalidArgument),
        }
    }

    /// Get the position of a possibly-absent value
    ///
    /// # Errors
    ///
    /// Returns [`SortedListError::InvalidArgument`] if `value` is `None`.
    pub fn try_index_of(&self, value: Option<&T>) -> Result<Option<usize>, SortedListError> {
        match value {
            Some(value) => Ok(self.index_of(value)),
            None => Err(SortedListError::InvalidArgument),
        }
    }
}

impl<T: Ord> Default for SortedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for SortedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for SortedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SortedList::new();
        list.extend(iter);
        list
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
