//! Mergeable Fibonacci heap over `i64` keys
//!
//! This crate provides a Fibonacci heap: a forest of heap-ordered multi-way
//! trees whose roots form a circular list, with
//!
//! - O(1) insert, find-min and meld
//! - O(1) amortized decrease-key
//! - O(log n) amortized delete-min and delete
//!
//! Nodes live in a generational arena and are addressed by [`NodeHandle`]s, so
//! the structure contains no raw pointers and stale or foreign handles are
//! reported as errors instead of corrupting the heap.
//!
//! The quantities used in the amortized analysis are observable:
//! [`FibonacciHeap::potential`], [`FibonacciHeap::counters_rep`], and the link
//! and cut totals kept by [`HeapStats`].
//!
//! # Example
//!
//! ```rust
//! use fibheap::FibonacciHeap;
//!
//! let mut heap = FibonacciHeap::new();
//! for key in [5, 15, 3, 51, 12, 13, 61, 1, 20, 7] {
//!     heap.insert(key);
//! }
//! assert_eq!(heap.min_key(), Some(1));
//!
//! heap.delete_min().unwrap();
//! heap.delete_min().unwrap();
//! assert_eq!(heap.min_key(), Some(5));
//!
//! let mut other = FibonacciHeap::new();
//! let neg = other.insert(-17);
//! heap.meld(other);
//! assert_eq!(heap.find_min(), Some(neg));
//! assert_eq!(heap.len(), 9);
//! ```

pub mod builder;
pub mod dump;
pub mod error;
pub mod fibonacci;
mod node;
pub mod rank;
mod ring;
pub mod stats;
pub mod storage;

/// Key type stored in the heap
pub type Key = i64;

pub use builder::HeapBuilder;
pub use dump::ForestDump;
pub use error::{HeapError, InvariantViolation, Result};
pub use fibonacci::FibonacciHeap;
pub use stats::HeapStats;
pub use storage::{ArenaId, NodeHandle};
