// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Node Chain
//!
//! The base singly-linked sequence of integers. Nodes live in an arena and
//! link to each other by index, so the only owner of a node is the chain
//! itself; `next` expresses "this node belongs right after that one".
//!
//! ```text
//! head -> [0: 10] -> [3: 20] -> [1: 30] -> NULL
//!          slot 0     slot 3     slot 1      (slot 2 on the free list)
//! ```
//!
//! Removed slots go onto a free list and are recycled by later inserts.
//! Every slot carries a generation counter that is bumped when the slot is
//! released, so a non-owning reference (`Anchor`) can tell a live node from
//! a recycled one.
//!
//! The chain knows nothing about tails, middles, or segment anchors; those
//! are layered on top by `pointers` and `cache`.

/// Element type stored in the chain.
pub type Value = i64;

/// Node index type. u32 saves space vs usize on 64-bit.
pub type Idx = u32;

/// Null index marker.
pub const NULL: Idx = Idx::MAX;

/// A node in the chain.
#[derive(Clone, Debug)]
struct Node {
    value: Value,
    next: Idx,
    /// Bumped every time this slot is released.
    generation: u32,
}

/// An arena-backed singly-linked chain.
#[derive(Clone, Debug, Default)]
pub struct Chain {
    /// Arena of nodes, live and released.
    nodes: Vec<Node>,
    /// Index of the first node, or `NULL` when empty.
    head: Idx,
    /// Number of nodes reachable from `head`.
    len: usize,
    /// Free list for reusing removed node slots.
    free_list: Vec<Idx>,
}

impl Chain {
    pub fn new() -> Chain {
        return Chain {
            nodes: Vec::new(),
            head: NULL,
            len: 0,
            free_list: Vec::new(),
        };
    }

    pub fn len(&self) -> usize {
        return self.len;
    }

    pub fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    pub fn head(&self) -> Idx {
        return self.head;
    }

    // --- Node access helpers ---

    fn node(&self, idx: Idx) -> &Node {
        return &self.nodes[idx as usize];
    }

    fn node_mut(&mut self, idx: Idx) -> &mut Node {
        return &mut self.nodes[idx as usize];
    }

    pub fn value(&self, idx: Idx) -> Value {
        return self.node(idx).value;
    }

    pub fn next(&self, idx: Idx) -> Idx {
        return self.node(idx).next;
    }

    pub fn generation(&self, idx: Idx) -> u32 {
        return self.node(idx).generation;
    }

    /// Whether `idx` names a slot holding `generation`.
    /// Released slots never match the generation they were released with.
    pub fn is_live(&self, idx: Idx, generation: u32) -> bool {
        return self
            .nodes
            .get(idx as usize)
            .is_some_and(|node| node.generation == generation);
    }

    fn alloc(&mut self, value: Value, next: Idx) -> Idx {
        if let Some(idx) = self.free_list.pop() {
            let node = self.node_mut(idx);
            node.value = value;
            node.next = next;
            return idx;
        }
        let idx = self.nodes.len() as Idx;
        self.nodes.push(Node {
            value,
            next,
            generation: 0,
        });
        return idx;
    }

    /// Return an unlinked node's slot to the free list.
    ///
    /// The node keeps its `next` link until release so that callers can still
    /// read the successor of a node they just unlinked.
    pub fn release(&mut self, idx: Idx) {
        let node = self.node_mut(idx);
        node.generation = node.generation.wrapping_add(1);
        node.next = NULL;
        self.free_list.push(idx);
    }

    // --- Linking ---

    /// Link a new node in front of `head`. O(1).
    pub fn push_front(&mut self, value: Value) -> Idx {
        let idx = self.alloc(value, self.head);
        self.head = idx;
        self.len += 1;
        return idx;
    }

    /// Link a new node right after `prev`. O(1).
    pub fn insert_after(&mut self, prev: Idx, value: Value) -> Idx {
        let next = self.next(prev);
        let idx = self.alloc(value, next);
        self.node_mut(prev).next = idx;
        self.len += 1;
        return idx;
    }

    /// Unlink the head node and return its index, or `NULL` when empty.
    /// The slot is not released.
    pub fn remove_front(&mut self) -> Idx {
        let idx = self.head;
        if idx == NULL {
            return NULL;
        }
        self.head = self.next(idx);
        self.len -= 1;
        return idx;
    }

    /// Unlink the node after `prev` and return its index, or `NULL` if `prev`
    /// is the last node. The slot is not released.
    pub fn remove_after(&mut self, prev: Idx) -> Idx {
        let idx = self.next(prev);
        if idx == NULL {
            return NULL;
        }
        let next = self.next(idx);
        self.node_mut(prev).next = next;
        self.len -= 1;
        return idx;
    }

    // --- Traversal ---

    /// Follow `steps` links from `from`. Returns `NULL` if the walk runs off
    /// the end.
    pub fn walk(&self, from: Idx, steps: usize) -> Idx {
        let mut idx = from;
        for _ in 0..steps {
            if idx == NULL {
                return NULL;
            }
            idx = self.next(idx);
        }
        return idx;
    }

    /// The node at `index`, walking from `head`. O(index).
    pub fn node_at(&self, index: usize) -> Idx {
        return self.walk(self.head, index);
    }

    /// Iterate over `(idx, value)` pairs in chain order.
    pub fn iter(&self) -> ChainIter<'_> {
        return ChainIter {
            chain: self,
            idx: self.head,
        };
    }

    /// All values in chain order.
    pub fn values(&self) -> Vec<Value> {
        let mut out = Vec::with_capacity(self.len);
        out.extend(self.iter().map(|(_, value)| value));
        return out;
    }
}

/// Iterator over a chain in link order.
pub struct ChainIter<'a> {
    chain: &'a Chain,
    idx: Idx,
}

impl Iterator for ChainIter<'_> {
    type Item = (Idx, Value);

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx == NULL {
            return None;
        }
        let idx = self.idx;
        let node = self.chain.node(idx);
        self.idx = node.next;
        return Some((idx, node.value));
    }
}
