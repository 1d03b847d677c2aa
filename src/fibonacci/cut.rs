//! Cut and cascading cut

use tracing::trace;

use super::FibonacciHeap;
use crate::rank::saturating_decrement;
use crate::storage::NodeHandle;

impl FibonacciHeap {
    /// Detaches `x` from its parent `y` and makes it an unmarked root.
    ///
    /// Only `y` gives up `x`'s size; ancestors above it keep their recorded
    /// sizes. O(1).
    fn cut(&mut self, x: NodeHandle, y: NodeHandle) {
        debug_assert_eq!(self.forest[x].parent, Some(y));
        let removed = self.forest[x].size;
        let successor = self.forest.unlink(x);

        let parent = &mut self.forest[y];
        if parent.child == Some(x) {
            parent.child = successor;
        }
        parent.rank = saturating_decrement(parent.rank);
        parent.size -= removed;

        let node = &mut self.forest[x];
        node.parent = None;
        let was_marked = std::mem::take(&mut node.marked);
        if was_marked {
            self.mark_count -= 1;
        }
        self.add_root(x);
        self.stats.record_cut();
        trace!(key = self.forest[x].key, was_marked, "cut");
    }

    /// Cuts `x` from `y`, then keeps cutting upward while ancestors are
    /// already marked. The first unmarked non-root ancestor gets marked.
    pub(super) fn cascading_cut(&mut self, mut x: NodeHandle, mut y: NodeHandle) {
        loop {
            self.cut(x, y);
            let Some(grandparent) = self.forest[y].parent else {
                break;
            };
            let parent = &mut self.forest[y];
            if !parent.marked {
                parent.marked = true;
                self.mark_count += 1;
                break;
            }
            x = y;
            y = grandparent;
        }
    }
}
