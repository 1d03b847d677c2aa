//! Link and cut tallies
//!
//! Every [`FibonacciHeap`](crate::FibonacciHeap) reports its link and cut
//! operations to a [`HeapStats`]. A heap built with [`FibonacciHeap::new`]
//! gets a private one. To total the work done across several heaps, build them
//! from clones of the same `HeapStats`:
//!
//! ```rust
//! use fibheap::{FibonacciHeap, HeapStats};
//!
//! let stats = HeapStats::new();
//! let mut a = FibonacciHeap::builder().stats(stats.clone()).build();
//! let mut b = FibonacciHeap::builder().stats(stats.clone()).build();
//!
//! for k in 0..4 {
//!     a.insert(k);
//!     b.insert(k);
//! }
//! a.delete_min().unwrap();
//! b.delete_min().unwrap();
//!
//! assert_eq!(stats.links(), a.total_links());
//! assert_eq!(stats.links(), 2);
//! ```
//!
//! Counters only ever grow. They are `Rc`-backed, matching the heap's
//! single-threaded model.
//!
//! [`FibonacciHeap::new`]: crate::FibonacciHeap::new

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

#[derive(Default)]
struct Tallies {
    links: Cell<u64>,
    cuts: Cell<u64>,
}

/// Shared, monotonically increasing link and cut counters
#[derive(Clone, Default)]
pub struct HeapStats {
    inner: Rc<Tallies>,
}

impl HeapStats {
    /// Fresh counters starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Link operations performed by every heap sharing these counters
    pub fn links(&self) -> u64 {
        self.inner.links.get()
    }

    /// Cut operations performed by every heap sharing these counters
    pub fn cuts(&self) -> u64 {
        self.inner.cuts.get()
    }

    /// Whether `self` and `other` are the same counters
    pub fn ptr_eq(&self, other: &HeapStats) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    #[inline]
    pub(crate) fn record_link(&self) {
        let links = &self.inner.links;
        links.set(links.get() + 1);
    }

    #[inline]
    pub(crate) fn record_cut(&self) {
        let cuts = &self.inner.cuts;
        cuts.set(cuts.get() + 1);
    }
}

impl fmt::Debug for HeapStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeapStats")
            .field("links", &self.links())
            .field("cuts", &self.cuts())
            .finish()
    }
}
