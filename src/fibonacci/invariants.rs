//! Whole-forest structural check

use super::FibonacciHeap;
use crate::error::InvariantViolation;
use crate::storage::NodeHandle;

impl FibonacciHeap {
    /// Walks the entire forest and verifies every structural invariant
    ///
    /// Checks ring integrity, parent links, `rank == children`, heap order,
    /// that no root is marked, that `min` holds the smallest root key, and
    /// that `len`, `tree_count` and `mark_count` match the forest.
    ///
    /// Recorded subtree sizes are only adjusted at the parent of a cut node,
    /// so they may overstate the live subtree. The check is that each one
    /// covers at least the node plus its children's recorded sizes.
    /// Costs O(n); meant for tests and debugging.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let Some(min) = self.min else {
            return self.check_counters(0, 0, 0, self.forest.node_count());
        };

        // Roots
        let mut roots = 0;
        let mut smallest = self.forest[min].key;
        for root in self.forest.ring_iter(min) {
            self.check_ring_link(root)?;
            let node = &self.forest[root];
            if node.parent.is_some() {
                return Err(InvariantViolation::WrongParent {
                    node: root,
                    found: node.parent,
                    expected: None,
                });
            }
            if node.marked {
                return Err(InvariantViolation::MarkedRoot { node: root });
            }
            smallest = smallest.min(node.key);
            roots += 1;
        }
        if smallest < self.forest[min].key {
            return Err(InvariantViolation::StaleMin {
                min_key: Some(self.forest[min].key),
                actual: Some(smallest),
            });
        }

        // Depth-first walk of every tree
        let mut reachable = 0;
        let mut stack: Vec<NodeHandle> = self.forest.ring_iter(min).collect();
        let mut marks = 0;
        while let Some(node) = stack.pop() {
            if reachable == self.len {
                // More nodes reachable than stored: a cycle or a stray subtree
                return Err(InvariantViolation::CounterMismatch {
                    counter: "len",
                    recorded: self.len,
                    actual: reachable + 1 + stack.len(),
                });
            }
            reachable += 1;
            let n = &self.forest[node];
            marks += usize::from(n.marked);

            let mut children = 0;
            let mut minimum = 1;
            if let Some(child) = n.child {
                for c in self.forest.ring_iter(child) {
                    self.check_ring_link(c)?;
                    let cn = &self.forest[c];
                    if cn.parent != Some(node) {
                        return Err(InvariantViolation::WrongParent {
                            node: c,
                            found: cn.parent,
                            expected: Some(node),
                        });
                    }
                    if cn.key < n.key {
                        return Err(InvariantViolation::HeapOrder {
                            child: c,
                            child_key: cn.key,
                            parent_key: n.key,
                        });
                    }
                    children += 1;
                    minimum += cn.size;
                    stack.push(c);
                }
            }
            if children != usize::from(n.rank) {
                return Err(InvariantViolation::RankMismatch {
                    node,
                    rank: usize::from(n.rank),
                    children,
                });
            }
            if n.size < minimum {
                return Err(InvariantViolation::SizeMismatch {
                    node,
                    recorded: n.size,
                    minimum,
                });
            }
        }

        self.check_counters(reachable, roots, marks, self.forest.node_count())
    }

    fn check_ring_link(&self, node: NodeHandle) -> Result<(), InvariantViolation> {
        let next = self.forest[node].next;
        if self.forest.get(next).map(|n| n.prev) != Some(node) {
            return Err(InvariantViolation::BrokenRing { node });
        }
        Ok(())
    }

    fn check_counters(
        &self,
        reachable: usize,
        roots: usize,
        marks: usize,
        stored: usize,
    ) -> Result<(), InvariantViolation> {
        let checks = [
            ("len", self.len, reachable),
            ("len (arena)", self.len, stored),
            ("tree_count", self.tree_count, roots),
            ("mark_count", self.mark_count, marks),
        ];
        for (counter, recorded, actual) in checks {
            if recorded != actual {
                return Err(InvariantViolation::CounterMismatch {
                    counter,
                    recorded,
                    actual,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_heaps_are_valid() {
        FibonacciHeap::new().check_invariants().unwrap();
        let heap: FibonacciHeap = (0..50).rev().collect();
        heap.check_invariants().unwrap();
    }

    #[test]
    fn test_detects_counter_drift() {
        let mut heap: FibonacciHeap = (0..5).collect();
        heap.tree_count += 1;
        assert_eq!(
            heap.check_invariants(),
            Err(InvariantViolation::CounterMismatch {
                counter: "tree_count",
                recorded: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn test_detects_stale_min() {
        let mut heap = FibonacciHeap::new();
        heap.insert(1);
        let two = heap.insert(2);
        heap.min = Some(two);
        assert!(matches!(
            heap.check_invariants(),
            Err(InvariantViolation::StaleMin { .. })
        ));
    }

    #[test]
    fn test_detects_bad_size() {
        let mut heap: FibonacciHeap = (0..5).collect();
        heap.delete_min().unwrap();
        let root = heap.find_min().unwrap();
        heap.forest[root].size = 3;
        assert!(matches!(
            heap.check_invariants(),
            Err(InvariantViolation::SizeMismatch { .. })
        ));
    }

    #[test]
    fn test_detects_marked_root() {
        let mut heap: FibonacciHeap = (0..3).collect();
        let root = heap.find_min().unwrap();
        heap.forest[root].marked = true;
        heap.mark_count += 1;
        assert_eq!(
            heap.check_invariants(),
            Err(InvariantViolation::MarkedRoot { node: root })
        );
    }
}
