//! Error types for heap operations

use thiserror::Error;

use crate::storage::NodeHandle;
use crate::Key;

/// Error returned by fallible [`FibonacciHeap`](crate::FibonacciHeap) operations
///
/// Every operation validates its arguments before touching the heap, so an
/// error always leaves the heap exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// `delete_min` was called on an empty heap
    #[error("heap is empty")]
    EmptyHeap,
    /// `decrease_key` was called with a negative delta
    #[error("delta must be non-negative, got {delta}")]
    InvalidDelta { delta: Key },
    /// The handle does not name a live node of this heap
    #[error("node does not belong to this heap")]
    ForeignNode,
    /// The decreased key does not fit in a `Key`
    #[error("decreasing key {key} by {delta} underflows")]
    KeyUnderflow { key: Key, delta: Key },
}

/// Convenience alias for heap results
pub type Result<T, E = HeapError> = std::result::Result<T, E>;

/// Structural defect found by
/// [`FibonacciHeap::check_invariants`](crate::FibonacciHeap::check_invariants)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("ring through {node:?} is broken: next.prev does not point back")]
    BrokenRing { node: NodeHandle },
    #[error("{node:?} has parent {found:?}, expected {expected:?}")]
    WrongParent {
        node: NodeHandle,
        found: Option<NodeHandle>,
        expected: Option<NodeHandle>,
    },
    #[error("{node:?} has rank {rank} but {children} children")]
    RankMismatch {
        node: NodeHandle,
        rank: usize,
        children: usize,
    },
    #[error("{node:?} records subtree size {recorded}, below the {minimum} its children account for")]
    SizeMismatch {
        node: NodeHandle,
        recorded: usize,
        minimum: usize,
    },
    #[error("child {child:?} has key {child_key} below its parent's {parent_key}")]
    HeapOrder {
        child: NodeHandle,
        child_key: Key,
        parent_key: Key,
    },
    #[error("root {node:?} is marked")]
    MarkedRoot { node: NodeHandle },
    #[error("min points at key {min_key:?}, but the smallest root key is {actual:?}")]
    StaleMin {
        min_key: Option<Key>,
        actual: Option<Key>,
    },
    #[error("{counter} is {recorded}, actual {actual}")]
    CounterMismatch {
        counter: &'static str,
        recorded: usize,
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(HeapError::EmptyHeap.to_string(), "heap is empty");
        assert_eq!(
            HeapError::InvalidDelta { delta: -3 }.to_string(),
            "delta must be non-negative, got -3"
        );
        assert_eq!(
            HeapError::KeyUnderflow {
                key: i64::MIN,
                delta: 1
            }
            .to_string(),
            format!("decreasing key {} by 1 underflows", i64::MIN)
        );
        assert_eq!(
            InvariantViolation::CounterMismatch {
                counter: "tree_count",
                recorded: 2,
                actual: 3
            }
            .to_string(),
            "tree_count is 2, actual 3"
        );
    }
}
