//! Consolidation: linking equal-rank roots after `delete_min`

use smallvec::{smallvec, SmallVec};
use tracing::{debug, trace};

use super::FibonacciHeap;
use crate::rank::{bucket_count, checked_increment};
use crate::storage::NodeHandle;

/// Rank-indexed table of roots; 64 inline buckets cover any heap that fits in memory
type Buckets = SmallVec<[Option<NodeHandle>; 64]>;

impl FibonacciHeap {
    /// Links trees of the same rank until every root rank is unique, then
    /// rebuilds the root ring and recomputes the minimum.
    pub(super) fn consolidate(&mut self, start: NodeHandle) {
        let roots = self.forest.ring_members(start);
        let roots_before = roots.len();
        let links_before = self.stats.links();
        let mut buckets: Buckets = smallvec![None; bucket_count(self.len)];

        for root in roots {
            // The old ring is discarded wholesale; survivors are relinked below
            self.forest.make_singleton(root);
            let mut tree = root;
            loop {
                let rank = usize::from(self.forest[tree].rank);
                if rank >= buckets.len() {
                    buckets.resize(rank + 1, None);
                }
                match buckets[rank].take() {
                    None => {
                        buckets[rank] = Some(tree);
                        break;
                    }
                    Some(occupant) => tree = self.link(occupant, tree),
                }
            }
        }

        self.min = None;
        for tree in buckets.into_iter().flatten() {
            match self.min {
                None => self.min = Some(tree),
                Some(min) => {
                    self.forest.insert_before(min, tree);
                    if self.forest[tree].key < self.forest[min].key {
                        self.min = Some(tree);
                    }
                }
            }
        }

        debug!(
            roots_before,
            roots_after = self.tree_count,
            links = self.stats.links() - links_before,
            "consolidated root ring"
        );
    }

    /// Hangs the larger-keyed of two equal-rank roots under the other and
    /// returns the surviving root. `first` wins ties.
    ///
    /// Both trees must be detached singletons; the result is one too.
    fn link(&mut self, first: NodeHandle, second: NodeHandle) -> NodeHandle {
        debug_assert_eq!(self.forest[first].rank, self.forest[second].rank);
        let (parent, child) = if self.forest[second].key < self.forest[first].key {
            (second, first)
        } else {
            (first, second)
        };
        debug_assert!(!self.forest[child].marked, "roots are never marked");

        match self.forest[parent].child {
            Some(entry) => self.forest.insert_before(entry, child),
            None => self.forest[parent].child = Some(child),
        }
        let child_size = self.forest[child].size;
        self.forest[child].parent = Some(parent);

        let p = &mut self.forest[parent];
        p.rank = checked_increment(p.rank);
        p.size += child_size;
        let rank = p.rank;

        self.tree_count -= 1;
        self.stats.record_link();
        trace!(
            parent = self.forest[parent].key,
            child = self.forest[child].key,
            rank,
            "linked"
        );
        parent
    }
}
