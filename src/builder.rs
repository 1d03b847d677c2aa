//! Heap construction options

use crate::fibonacci::FibonacciHeap;
use crate::stats::HeapStats;

/// Configures a [`FibonacciHeap`] before it is created
///
/// ```rust
/// use fibheap::{FibonacciHeap, HeapStats};
///
/// let stats = HeapStats::new();
/// let heap = FibonacciHeap::builder()
///     .capacity(1024)
///     .stats(stats.clone())
///     .build();
/// assert!(heap.is_empty());
/// assert!(heap.stats().ptr_eq(&stats));
/// ```
#[derive(Debug, Clone, Default)]
pub struct HeapBuilder {
    capacity: usize,
    stats: Option<HeapStats>,
}

impl HeapBuilder {
    /// Pre-allocates room for `capacity` nodes in the heap's own arena
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Reports links and cuts to `stats` instead of private counters
    pub fn stats(mut self, stats: HeapStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn build(self) -> FibonacciHeap {
        FibonacciHeap::from_parts(self.capacity, self.stats.unwrap_or_default())
    }
}
