//! Arena storage for heap nodes
//!
//! Nodes live in [`slotmap`] arenas and refer to each other by [`NodeHandle`]
//! rather than by pointer. Sibling rings, parent links and child links are all
//! plain handles, so every structural edit is checked and a freed node can never
//! be reached through a stale handle.
//!
//! # Multiple arenas
//!
//! A [`Forest`] owns one *home* arena, where its own inserts go, plus any arenas
//! absorbed from other heaps through [`Forest::absorb`]. Each handle records
//! the [`ArenaId`] it was allocated in, so absorbing is a move of the donor's
//! arena map and never touches individual nodes. Handles handed out by the donor
//! keep working against the receiver.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::sync::atomic::{AtomicU32, Ordering};

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

use crate::node::Node;
use crate::Key;

new_key_type! {
    /// Slot key of a node inside one arena
    pub(crate) struct NodeKey;
}

static NEXT_ARENA_ID: AtomicU32 = AtomicU32::new(0);

/// Process-unique identifier of a node arena
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArenaId(u32);

impl ArenaId {
    fn fresh() -> Self {
        ArenaId(NEXT_ARENA_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Debug for ArenaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "arena#{}", self.0)
    }
}

/// Handle to a node in a [`FibonacciHeap`](crate::FibonacciHeap)
///
/// Returned by [`insert`](crate::FibonacciHeap::insert) and accepted by
/// [`decrease_key`](crate::FibonacciHeap::decrease_key) and
/// [`delete`](crate::FibonacciHeap::delete). Handles are cheap to copy. A handle
/// stays valid until its node is removed, including after the heap that issued
/// it has been melded into another heap; the receiving heap accepts it.
///
/// Using a handle with a heap that does not own its node is reported as
/// [`HeapError::ForeignNode`](crate::HeapError::ForeignNode).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    pub(crate) arena: ArenaId,
    pub(crate) key: NodeKey,
}

impl NodeHandle {
    /// The arena this node was allocated in
    pub fn arena(&self) -> ArenaId {
        self.arena
    }
}

impl fmt::Debug for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeHandle")
            .field("arena", &self.arena)
            .field("key", &self.key)
            .finish()
    }
}

/// The set of arenas owned by one heap
pub(crate) struct Forest {
    home: ArenaId,
    arenas: FxHashMap<ArenaId, SlotMap<NodeKey, Node>>,
}

impl Forest {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let home = ArenaId::fresh();
        let mut arenas = FxHashMap::default();
        arenas.insert(home, SlotMap::with_capacity_and_key(capacity));
        Forest { home, arenas }
    }

    /// Allocate a singleton node holding `key` in the home arena
    pub(crate) fn alloc(&mut self, key: Key) -> NodeHandle {
        let arena = self.home;
        let slots = self
            .arenas
            .entry(arena)
            .or_insert_with(SlotMap::with_key);
        let slot =
            slots.insert_with_key(|slot| Node::singleton(NodeHandle { arena, key: slot }, key));
        NodeHandle { arena, key: slot }
    }

    /// Free a node, returning it. Absorbed arenas are dropped once empty.
    pub(crate) fn remove(&mut self, handle: NodeHandle) -> Option<Node> {
        let slots = self.arenas.get_mut(&handle.arena)?;
        let node = slots.remove(handle.key);
        if slots.is_empty() && handle.arena != self.home {
            self.arenas.remove(&handle.arena);
        }
        node
    }

    pub(crate) fn get(&self, handle: NodeHandle) -> Option<&Node> {
        self.arenas.get(&handle.arena)?.get(handle.key)
    }

    pub(crate) fn contains(&self, handle: NodeHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Move every arena of `other` into `self`
    ///
    /// The smaller map is folded into the larger one, so a chain of melds moves
    /// each arena id O(log m) times over its lifetime.
    pub(crate) fn absorb(&mut self, other: Forest) {
        let Forest {
            home: other_home,
            arenas: mut other_arenas,
        } = other;
        if other_arenas.len() > self.arenas.len() {
            std::mem::swap(&mut self.arenas, &mut other_arenas);
        }
        for (id, slots) in other_arenas {
            if !slots.is_empty() || id == self.home {
                self.arenas.insert(id, slots);
            }
        }
        if self
            .arenas
            .get(&other_home)
            .is_some_and(|slots| slots.is_empty())
        {
            self.arenas.remove(&other_home);
        }
    }

    /// Total number of live nodes across all arenas
    pub(crate) fn node_count(&self) -> usize {
        self.arenas.values().map(|slots| slots.len()).sum()
    }

    #[cfg(test)]
    pub(crate) fn arena_count(&self) -> usize {
        self.arenas.len()
    }
}

impl Index<NodeHandle> for Forest {
    type Output = Node;

    fn index(&self, handle: NodeHandle) -> &Node {
        match self.get(handle) {
            Some(node) => node,
            None => panic!("dangling {handle:?} inside heap structure"),
        }
    }
}

impl IndexMut<NodeHandle> for Forest {
    fn index_mut(&mut self, handle: NodeHandle) -> &mut Node {
        match self
            .arenas
            .get_mut(&handle.arena)
            .and_then(|slots| slots.get_mut(handle.key))
        {
            Some(node) => node,
            None => panic!("dangling {handle:?} inside heap structure"),
        }
    }
}

impl fmt::Debug for Forest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Forest")
            .field("home", &self.home)
            .field("arenas", &self.arenas.len())
            .field("nodes", &self.node_count())
            .finish()
    }
}
