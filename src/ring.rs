//! Circular doubly-linked rings over the node arena
//!
//! The root list and every child list are rings: a single node points to
//! itself, there is no head or tail, and two rings splice together in O(1).
//! These are the safe, handle-based counterparts of the classic intrusive
//! list operations; every method leaves each ring it touches well formed.

use smallvec::SmallVec;

use crate::storage::{Forest, NodeHandle};

/// Ring members collected ahead of a pass that relinks them
pub(crate) type RingMembers = SmallVec<[NodeHandle; 16]>;

impl Forest {
    /// Turn `node` into a ring of one.
    #[inline]
    pub(crate) fn make_singleton(&mut self, node: NodeHandle) {
        let n = &mut self[node];
        n.prev = node;
        n.next = node;
    }

    /// Insert the singleton `new` just before `at` in `at`'s ring.
    pub(crate) fn insert_before(&mut self, at: NodeHandle, new: NodeHandle) {
        debug_assert!(self[new].next == new, "node is already in a ring");
        let prev = self[at].prev;
        self[new].next = at;
        self[new].prev = prev;
        self[prev].next = new;
        self[at].prev = new;
    }

    /// Remove `node` from its ring, leaving it a singleton.
    ///
    /// Returns the node's former successor, or `None` if `node` was alone.
    pub(crate) fn unlink(&mut self, node: NodeHandle) -> Option<NodeHandle> {
        let (prev, next) = (self[node].prev, self[node].next);
        if next == node {
            return None;
        }
        self[prev].next = next;
        self[next].prev = prev;
        self.make_singleton(node);
        Some(next)
    }

    /// Join the rings containing `a` and `b` into one.
    ///
    /// `a` and `b` must currently be in different rings.
    pub(crate) fn splice(&mut self, a: NodeHandle, b: NodeHandle) {
        let a_prev = self[a].prev;
        let b_prev = self[b].prev;
        self[a_prev].next = b;
        self[b].prev = a_prev;
        self[b_prev].next = a;
        self[a].prev = b_prev;
    }

    /// Every node of the ring starting at `start`, in `next` order.
    pub(crate) fn ring_members(&self, start: NodeHandle) -> RingMembers {
        self.ring_iter(start).collect()
    }

    /// Walk the ring starting at `start` without collecting it.
    pub(crate) fn ring_iter(&self, start: NodeHandle) -> RingIter<'_> {
        RingIter {
            forest: self,
            start,
            next: Some(start),
        }
    }
}

/// Read-only traversal of one ring, yielding each member once
pub(crate) struct RingIter<'a> {
    forest: &'a Forest,
    start: NodeHandle,
    next: Option<NodeHandle>,
}

impl Iterator for RingIter<'_> {
    type Item = NodeHandle;

    fn next(&mut self) -> Option<NodeHandle> {
        let current = self.next?;
        let after = self.forest[current].next;
        self.next = (after != self.start).then_some(after);
        Some(current)
    }
}
