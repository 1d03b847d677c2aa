//! Fibonacci Heap implementation
//!
//! A Fibonacci heap is a data structure for priority queue operations with:
//! - O(1) amortized insert, decrease_key, and meld
//! - O(log n) amortized delete_min and delete
//!
//! The structure consists of a collection of heap-ordered trees. Roots are linked
//! in a circular doubly linked list, and the heap keeps a handle to the root with
//! the smallest key. Nothing is restructured until `delete_min`, which
//! [consolidates](FibonacciHeap::delete_min) the roots so that no two share a
//! rank. `decrease_key` detaches a node that would break heap order and
//! propagates marks upward through *cascading cuts*, which keeps every rank
//! logarithmic in the heap size.
//!
//! # Amortized accounting
//!
//! The heap exposes the quantities of the standard analysis:
//! [`potential`](FibonacciHeap::potential) is `tree_count + 2 * mark_count`,
//! and the [`HeapStats`] collaborator counts every link and cut.

mod consolidate;
mod cut;
mod invariants;
mod select;

use std::fmt;

use tracing::debug;

use crate::builder::HeapBuilder;
use crate::dump::ForestDump;
use crate::error::{HeapError, Result};
use crate::rank::Rank;
use crate::stats::HeapStats;
use crate::storage::{Forest, NodeHandle};
use crate::Key;

/// Fibonacci Heap over `i64` keys
///
/// # Example
///
/// ```rust
/// use fibheap::FibonacciHeap;
///
/// let mut heap = FibonacciHeap::new();
/// let five = heap.insert(5);
/// heap.insert(3);
/// heap.decrease_key(five, 4).unwrap();
/// assert_eq!(heap.min_key(), Some(1));
/// assert_eq!(heap.delete_min(), Ok(1));
/// assert_eq!(heap.delete_min(), Ok(3));
/// assert!(heap.is_empty());
/// ```
pub struct FibonacciHeap {
    forest: Forest,
    /// Root with the smallest key; also the entry point of the root ring
    min: Option<NodeHandle>,
    len: usize,
    tree_count: usize,
    mark_count: usize,
    stats: HeapStats,
}

impl FibonacciHeap {
    /// Creates an empty heap with its own [`HeapStats`]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts configuring a heap
    pub fn builder() -> HeapBuilder {
        HeapBuilder::default()
    }

    pub(crate) fn from_parts(capacity: usize, stats: HeapStats) -> Self {
        Self {
            forest: Forest::with_capacity(capacity),
            min: None,
            len: 0,
            tree_count: 0,
            mark_count: 0,
            stats,
        }
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of trees in the root ring
    pub fn tree_count(&self) -> usize {
        self.tree_count
    }

    /// Number of marked nodes
    pub fn mark_count(&self) -> usize {
        self.mark_count
    }

    /// The counters this heap reports links and cuts to
    pub fn stats(&self) -> &HeapStats {
        &self.stats
    }

    /// Inserts `key` as a new single-node tree and returns its handle
    ///
    /// Duplicate keys are allowed.
    ///
    /// # Time Complexity
    /// O(1)
    pub fn insert(&mut self, key: Key) -> NodeHandle {
        let node = self.forest.alloc(key);
        self.add_root(node);
        self.len += 1;
        node
    }

    /// Handle of the node holding the minimum key, or `None` if empty
    ///
    /// # Time Complexity
    /// O(1)
    pub fn find_min(&self) -> Option<NodeHandle> {
        self.min
    }

    /// The minimum key, or `None` if empty
    pub fn min_key(&self) -> Option<Key> {
        self.min.map(|min| self.forest[min].key)
    }

    /// Current key of `node`
    ///
    /// # Errors
    /// [`HeapError::ForeignNode`] if `node` is not a live node of this heap.
    pub fn key(&self, node: NodeHandle) -> Result<Key> {
        self.forest
            .get(node)
            .map(|n| n.key)
            .ok_or(HeapError::ForeignNode)
    }

    /// Number of children of `node`
    ///
    /// # Errors
    /// [`HeapError::ForeignNode`] if `node` is not a live node of this heap.
    pub fn rank(&self, node: NodeHandle) -> Result<Rank> {
        self.forest
            .get(node)
            .map(|n| n.rank)
            .ok_or(HeapError::ForeignNode)
    }

    /// Whether `node` is marked
    ///
    /// # Errors
    /// [`HeapError::ForeignNode`] if `node` is not a live node of this heap.
    pub fn is_marked(&self, node: NodeHandle) -> Result<bool> {
        self.forest
            .get(node)
            .map(|n| n.marked)
            .ok_or(HeapError::ForeignNode)
    }

    /// Whether `node` is currently a root
    ///
    /// # Errors
    /// [`HeapError::ForeignNode`] if `node` is not a live node of this heap.
    pub fn is_root(&self, node: NodeHandle) -> Result<bool> {
        self.forest
            .get(node)
            .map(|n| n.is_root())
            .ok_or(HeapError::ForeignNode)
    }

    /// Whether `node` is a live node of this heap
    pub fn contains(&self, node: NodeHandle) -> bool {
        self.forest.contains(node)
    }

    /// Removes the minimum and returns its key
    ///
    /// The children of the minimum become roots, then the root ring is
    /// consolidated so that no two roots share a rank.
    ///
    /// # Errors
    /// [`HeapError::EmptyHeap`] if the heap is empty.
    ///
    /// # Time Complexity
    /// O(log n) amortized, O(n) worst case
    pub fn delete_min(&mut self) -> Result<Key> {
        let min = self.min.ok_or(HeapError::EmptyHeap)?;

        // Promote children to roots
        if let Some(child) = self.forest[min].child.take() {
            for c in self.forest.ring_members(child) {
                let node = &mut self.forest[c];
                node.parent = None;
                if std::mem::take(&mut node.marked) {
                    self.mark_count -= 1;
                }
            }
            self.forest.splice(min, child);
        }

        let node = &self.forest[min];
        let key = node.key;
        self.tree_count = self.tree_count + usize::from(node.rank) - 1;

        let successor = self.forest.unlink(min);
        self.forest.remove(min);
        self.len -= 1;
        self.min = None;

        if let Some(start) = successor {
            if self.len > 1 {
                self.consolidate(start);
            } else {
                self.min = Some(start);
            }
        }
        Ok(key)
    }

    /// Moves every tree of `other` into this heap
    ///
    /// The two root rings are spliced together; no consolidation happens until
    /// the next `delete_min`, so ranks may repeat among the roots until then.
    /// Handles issued by `other` remain valid against `self`. Links and cuts
    /// made later are reported to `self`'s [`HeapStats`].
    ///
    /// # Time Complexity
    /// O(1) in the number of elements
    pub fn meld(&mut self, other: FibonacciHeap) {
        let FibonacciHeap {
            forest,
            min: other_min,
            len,
            tree_count,
            mark_count,
            stats: _,
        } = other;

        self.forest.absorb(forest);
        if let Some(other_min) = other_min {
            match self.min {
                None => self.min = Some(other_min),
                Some(min) => {
                    self.forest.splice(min, other_min);
                    if self.forest[other_min].key < self.forest[min].key {
                        self.min = Some(other_min);
                    }
                }
            }
        }
        self.len += len;
        self.tree_count += tree_count;
        self.mark_count += mark_count;
        debug!(absorbed = len, len = self.len, "melded heap");
    }

    /// Decreases the key of `node` by `delta`
    ///
    /// If the node now violates heap order it is cut from its parent, and the
    /// cut cascades up through marked ancestors.
    ///
    /// # Errors
    /// - [`HeapError::InvalidDelta`] if `delta` is negative
    /// - [`HeapError::ForeignNode`] if `node` is not a live node of this heap
    /// - [`HeapError::KeyUnderflow`] if the new key does not fit in a [`Key`]
    ///
    /// # Time Complexity
    /// O(1) amortized
    pub fn decrease_key(&mut self, node: NodeHandle, delta: Key) -> Result<()> {
        if delta < 0 {
            return Err(HeapError::InvalidDelta { delta });
        }
        let current = self.key(node)?;
        let key = current
            .checked_sub(delta)
            .ok_or(HeapError::KeyUnderflow {
                key: current,
                delta,
            })?;

        self.forest[node].key = key;
        let parent = self.forest[node].parent;
        match parent {
            None => self.update_min(node),
            Some(parent) if key < self.forest[parent].key => self.cascading_cut(node, parent),
            Some(_) => {}
        }
        Ok(())
    }

    /// Removes `node` from the heap and returns its key
    ///
    /// The node is treated as if its key were below every other key: it is cut
    /// to the root ring (cascading as needed) and made the minimum, then
    /// removed with `delete_min`. Its stored key is left untouched.
    ///
    /// # Errors
    /// [`HeapError::ForeignNode`] if `node` is not a live node of this heap.
    ///
    /// # Time Complexity
    /// O(log n) amortized
    pub fn delete(&mut self, node: NodeHandle) -> Result<Key> {
        if !self.forest.contains(node) {
            return Err(HeapError::ForeignNode);
        }
        if self.min != Some(node) {
            if let Some(parent) = self.forest[node].parent {
                self.cascading_cut(node, parent);
            }
            self.min = Some(node);
        }
        self.delete_min()
    }

    /// `tree_count + 2 * mark_count`
    pub fn potential(&self) -> usize {
        self.tree_count + 2 * self.mark_count
    }

    /// Number of roots of each rank
    ///
    /// Entry `i` counts the roots of rank `i`; the vector ends at the largest
    /// rank present, and is empty for an empty heap.
    ///
    /// # Time Complexity
    /// O(number of roots)
    pub fn counters_rep(&self) -> Vec<usize> {
        let Some(min) = self.min else {
            return Vec::new();
        };
        let mut counts = Vec::new();
        for root in self.forest.ring_iter(min) {
            let rank = usize::from(self.forest[root].rank);
            if rank >= counts.len() {
                counts.resize(rank + 1, 0);
            }
            counts[rank] += 1;
        }
        counts
    }

    /// Links performed by every heap sharing this heap's [`HeapStats`]
    pub fn total_links(&self) -> u64 {
        self.stats.links()
    }

    /// Cuts performed by every heap sharing this heap's [`HeapStats`]
    pub fn total_cuts(&self) -> u64 {
        self.stats.cuts()
    }

    /// Removes every element, keeping the same [`HeapStats`]
    pub fn clear(&mut self) {
        *self = Self::from_parts(0, self.stats.clone());
    }

    /// Read-only outline of the forest for debugging
    ///
    /// ```rust
    /// use fibheap::FibonacciHeap;
    ///
    /// let mut heap: FibonacciHeap = [3, 1, 2].into_iter().collect();
    /// assert_eq!(
    ///     heap.dump().to_string(),
    ///     "1 [rank=0 size=1]\n3 [rank=0 size=1]\n2 [rank=0 size=1]\n"
    /// );
    /// heap.delete_min().unwrap();
    /// assert_eq!(heap.dump().to_string(), "2 [rank=1 size=2]\n  3 [rank=0 size=1]\n");
    /// ```
    pub fn dump(&self) -> ForestDump<'_> {
        ForestDump::new(&self.forest, self.min)
    }

    /// Splice the detached, unmarked singleton `node` into the root ring.
    fn add_root(&mut self, node: NodeHandle) {
        debug_assert!(self.forest[node].is_root() && !self.forest[node].marked);
        match self.min {
            None => self.min = Some(node),
            Some(min) => {
                self.forest.insert_before(min, node);
                self.update_min(node);
            }
        }
        self.tree_count += 1;
    }

    /// Make the root `node` the minimum if its key is strictly smaller.
    fn update_min(&mut self, node: NodeHandle) {
        let smaller = self
            .min
            .map_or(true, |min| self.forest[node].key < self.forest[min].key);
        if smaller {
            self.min = Some(node);
        }
    }
}

impl Default for FibonacciHeap {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Key> for FibonacciHeap {
    fn extend<I: IntoIterator<Item = Key>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl FromIterator<Key> for FibonacciHeap {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut heap = FibonacciHeap::new();
        heap.extend(iter);
        heap
    }
}

impl fmt::Debug for FibonacciHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FibonacciHeap")
            .field("len", &self.len)
            .field("min", &self.min_key())
            .field("tree_count", &self.tree_count)
            .field("mark_count", &self.mark_count)
            .field("forest", &self.forest)
            .finish()
    }
}
