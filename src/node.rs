//! Heap node
//!
//! One vertex of a heap-ordered tree. All links are [`NodeHandle`]s into the
//! owning [`Forest`](crate::storage::Forest): `child` is the owning edge into
//! the child ring, while `parent`, `prev` and `next` are back-references.

use crate::rank::Rank;
use crate::storage::NodeHandle;
use crate::Key;

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) key: Key,
    /// Subtree size, this node included, as of the last link or direct cut.
    /// Cuts further down are not propagated, so this may overstate the live
    /// subtree.
    pub(crate) size: usize,
    /// Number of direct children
    pub(crate) rank: Rank,
    /// Lost a child since it last became a non-root. Never set on a root.
    pub(crate) marked: bool,
    pub(crate) parent: Option<NodeHandle>,
    /// Entry into the circular child ring, `None` iff `rank == 0`
    pub(crate) child: Option<NodeHandle>,
    pub(crate) prev: NodeHandle,
    pub(crate) next: NodeHandle,
}

impl Node {
    /// A detached node forming a ring of one
    pub(crate) fn singleton(this: NodeHandle, key: Key) -> Self {
        Node {
            key,
            size: 1,
            rank: 0,
            marked: false,
            parent: None,
            child: None,
            prev: this,
            next: this,
        }
    }

    #[inline]
    pub(crate) fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
