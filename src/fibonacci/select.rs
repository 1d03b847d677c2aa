//! k smallest keys without disturbing the heap

use rustc_hash::FxHashMap;
use tracing::instrument;

use super::FibonacciHeap;
use crate::storage::NodeHandle;
use crate::Key;

impl FibonacciHeap {
    /// The `k` smallest keys in ascending order (all keys if `k >= len`)
    ///
    /// The heap is left untouched. Candidates are tracked in a scratch heap
    /// seeded with the roots; each extracted node contributes its children,
    /// so a single-tree heap costs O(k · max rank). The scratch heap has its
    /// own [`HeapStats`](crate::HeapStats), so this heap's link and cut totals
    /// do not move.
    ///
    /// ```rust
    /// use fibheap::FibonacciHeap;
    ///
    /// let mut heap: FibonacciHeap = [5, 15, 3, 51, 12, 13, 61, 1, 20, 7].into_iter().collect();
    /// heap.delete_min().unwrap();
    /// assert_eq!(heap.k_min(4), vec![3, 5, 7, 12]);
    /// assert_eq!(heap.len(), 9);
    /// ```
    #[instrument(level = "debug", skip(self), fields(len = self.len))]
    pub fn k_min(&self, k: usize) -> Vec<Key> {
        let mut out = Vec::with_capacity(k.min(self.len));
        let Some(min) = self.min else {
            return out;
        };
        if k == 0 {
            return out;
        }

        let mut candidates = FibonacciHeap::new();
        let mut origin: FxHashMap<NodeHandle, NodeHandle> = FxHashMap::default();
        for root in self.forest.ring_iter(min) {
            origin.insert(candidates.insert(self.forest[root].key), root);
        }

        while out.len() < k {
            let Some(top) = candidates.find_min() else {
                break;
            };
            let Some(source) = origin.remove(&top) else {
                break;
            };
            let Ok(key) = candidates.delete_min() else {
                break;
            };
            out.push(key);
            if let Some(child) = self.forest[source].child {
                for c in self.forest.ring_iter(child) {
                    origin.insert(candidates.insert(self.forest[c].key), c);
                }
            }
        }
        out
    }
}
