//! Rank type and the golden-ratio rank bound.
//!
//! # Why u8?
//!
//! The rank (degree) of a Fibonacci heap node is its number of children. A node
//! of rank `d` roots a subtree of at least `F(d+2)` nodes, where `F` is the
//! Fibonacci sequence, so the largest rank in a heap of `n` elements is at most
//! `log_φ(n)`. Even `n = 2⁶⁴` keeps ranks below 93, and `u8` saves seven bytes
//! per node over `usize` on 64-bit targets.
//!
//! # Runtime Checks
//!
//! [`checked_increment`] panics if the theoretical limit is exceeded, which
//! would indicate a bug since it is impossible with valid heap operations.

/// Type alias for node rank/degree.
pub type Rank = u8;

/// Maximum valid rank value.
pub const MAX_RANK: Rank = u8::MAX;

/// Extra buckets the consolidation table keeps above the rank bound
pub const BUCKET_SLACK: usize = 2;

/// Safely increment a rank value, panicking on overflow.
///
/// # Panics
///
/// Panics if `rank == MAX_RANK`, which would require a heap with more than
/// `F(257)` elements.
///
/// # Example
///
/// ```rust
/// use fibheap::rank::{checked_increment, Rank};
///
/// let rank: Rank = 5;
/// assert_eq!(checked_increment(rank), 6);
/// ```
#[inline]
pub fn checked_increment(rank: Rank) -> Rank {
    rank.checked_add(1).expect(
        "rank overflow: this should be impossible since max rank is log_φ(n) \
         and u8::MAX (255) covers heaps far larger than memory",
    )
}

/// Decrement a rank value, returning 0 if already at minimum.
///
/// # Example
///
/// ```rust
/// use fibheap::rank::{saturating_decrement, Rank};
///
/// let rank: Rank = 5;
/// assert_eq!(saturating_decrement(rank), 4);
///
/// let zero: Rank = 0;
/// assert_eq!(saturating_decrement(zero), 0);
/// ```
#[inline]
pub fn saturating_decrement(rank: Rank) -> Rank {
    rank.saturating_sub(1)
}

/// Largest rank a node can have in a heap of `len` elements: `⌊log_φ(len)⌋`.
///
/// Computed exactly as the largest `d` with `F(d+2) <= len`.
///
/// ```rust
/// use fibheap::rank::max_rank;
///
/// assert_eq!(max_rank(1), 0);
/// assert_eq!(max_rank(2), 1);
/// assert_eq!(max_rank(3), 2);
/// assert_eq!(max_rank(5), 3);
/// assert_eq!(max_rank(7), 3);
/// assert_eq!(max_rank(8), 4);
/// ```
pub fn max_rank(len: usize) -> usize {
    // (F(d+1), F(d+2)) starting at d = 0
    let (mut lo, mut hi): (usize, usize) = (1, 1);
    let mut d = 0;
    loop {
        let Some(next) = lo.checked_add(hi) else {
            return d;
        };
        if next > len {
            return d;
        }
        lo = hi;
        hi = next;
        d += 1;
    }
}

/// Number of rank buckets consolidation needs for a heap of `len` elements
#[inline]
pub fn bucket_count(len: usize) -> usize {
    max_rank(len) + BUCKET_SLACK
}
