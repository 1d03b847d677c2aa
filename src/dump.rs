//! Pretty-printing of the forest for debugging

use std::fmt;

use rustc_hash::FxHashMap;

use crate::storage::{Forest, NodeHandle};

/// Indented outline of every tree in a heap, produced by
/// [`FibonacciHeap::dump`](crate::FibonacciHeap::dump)
///
/// One line per node, `key [rank=r size=s]`, followed by `*` when the node is
/// marked. `size` counts the nodes currently in the subtree. Children are
/// indented two spaces under their parent. Roots are listed in ring order
/// starting at the minimum.
pub struct ForestDump<'a> {
    forest: &'a Forest,
    min: Option<NodeHandle>,
}

impl<'a> ForestDump<'a> {
    pub(crate) fn new(forest: &'a Forest, min: Option<NodeHandle>) -> Self {
        ForestDump { forest, min }
    }

    /// Subtree size of every node below `roots`, counted bottom-up
    fn live_sizes(&self, roots: &[NodeHandle]) -> FxHashMap<NodeHandle, usize> {
        let mut order = Vec::new();
        let mut stack = roots.to_vec();
        while let Some(node) = stack.pop() {
            order.push(node);
            if let Some(child) = self.forest[node].child {
                stack.extend(self.forest.ring_iter(child));
            }
        }

        let mut sizes: FxHashMap<NodeHandle, usize> =
            FxHashMap::with_capacity_and_hasher(order.len(), Default::default());
        for &node in order.iter().rev() {
            let below: usize = self.forest[node]
                .child
                .map_or(0, |c| self.forest.ring_iter(c).map(|c| sizes[&c]).sum());
            sizes.insert(node, 1 + below);
        }
        sizes
    }
}

impl fmt::Display for ForestDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(min) = self.min else {
            return f.write_str("(empty)");
        };

        let roots = self.forest.ring_members(min);
        let sizes = self.live_sizes(&roots);
        let mut stack: Vec<(NodeHandle, usize)> =
            roots.iter().rev().map(|&root| (root, 0)).collect();
        while let Some((node, depth)) = stack.pop() {
            let n = &self.forest[node];
            writeln!(
                f,
                "{:indent$}{} [rank={} size={}]{}",
                "",
                n.key,
                n.rank,
                sizes[&node],
                if n.marked { "*" } else { "" },
                indent = depth * 2
            )?;
            if let Some(child) = n.child {
                let children = self.forest.ring_members(child);
                stack.extend(children.iter().rev().map(|&c| (c, depth + 1)));
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ForestDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
