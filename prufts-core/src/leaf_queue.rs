//! A min-ordered pool of pending leaves.
//!
//! Both codec directions peel leaves smallest-label
//! first: encoding pulls from the current leaves of the
//! shrinking adjacency, decoding from the labels whose
//! working degree has dropped to one.  One structure
//! serves both.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::newtypes::NodeLabel;

/// Pending leaves, retrieved in ascending label order.
///
/// # Examples
///
/// ```
/// use prufts_core::LeafQueue;
/// use prufts_core::NodeLabel;
///
/// let mut queue: LeafQueue = [3, 1, 7].map(NodeLabel::from).into_iter().collect();
/// queue.insert(NodeLabel::from(2));
/// assert_eq!(queue.pop_min(), Some(NodeLabel::from(1)));
/// assert_eq!(queue.pop_min(), Some(NodeLabel::from(2)));
/// assert_eq!(queue.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct LeafQueue {
    heap: BinaryHeap<Reverse<NodeLabel>>,
}

impl LeafQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a newly exposed leaf.
    ///
    /// Labels are not deduplicated.  Codec callers only
    /// insert a label when its degree first reaches one,
    /// so duplicates never arise there.
    pub fn insert(&mut self, label: NodeLabel) {
        self.heap.push(Reverse(label));
    }

    /// Remove and return the smallest pending leaf.
    pub fn pop_min(&mut self) -> Option<NodeLabel> {
        self.heap.pop().map(|Reverse(label)| label)
    }

    /// Number of pending leaves.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// `true` if no leaves are pending.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl FromIterator<NodeLabel> for LeafQueue {
    fn from_iter<I: IntoIterator<Item = NodeLabel>>(iter: I) -> Self {
        Self {
            heap: iter.into_iter().map(Reverse).collect(),
        }
    }
}
