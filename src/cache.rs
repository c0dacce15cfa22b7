// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Segment Cache
//!
//! Periodic anchors into a chain: `anchors[k]` references the node at
//! position `k * stride`. A lookup can jump to the anchor of its segment and
//! walk at most `stride - 1` links instead of walking from `head`.
//!
//! ```text
//! stride = 3
//! anchors:  [0]            [1]            [2]
//!            |              |              |
//! chain:    a -> b -> c -> d -> e -> f -> g -> h
//! position: 0    1    2    3    4    5    6    7
//! ```
//!
//! # Repair
//!
//! The cache is repaired incrementally around each mutation:
//!
//! - insert at `i`: walk forward from the new node and re-anchor every
//!   stride boundary from there to the end. Everything before `i` is
//!   untouched, so the cost is proportional to the tail of the chain.
//! - remove at `i` (run before the node is unlinked): every anchor at or
//!   after the first boundary `>= i` steps one link forward, which puts it
//!   back on its boundary once the node is gone. An anchor with no successor
//!   sits past the new end, so the cache is cut there.
//!
//! After either repair the cache equals one built by `rebuild`.
//!
//! The cache belongs to a single list. Anchors are weak: they name a slot
//! and the generation it held, and `resolve` refuses a recycled slot.

use crate::chain::{Chain, Idx, NULL};

/// A weak reference to a chain node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Anchor {
    node: Idx,
    generation: u32,
}

impl Anchor {
    pub fn new(chain: &Chain, node: Idx) -> Anchor {
        return Anchor {
            node,
            generation: chain.generation(node),
        };
    }

    /// The node this anchor references, if it is still the same node.
    pub fn resolve(&self, chain: &Chain) -> Option<Idx> {
        if chain.is_live(self.node, self.generation) {
            return Some(self.node);
        }
        return None;
    }
}

/// Stride-spaced anchors into one chain.
#[derive(Clone, Debug)]
pub struct SegmentCache {
    anchors: Vec<Anchor>,
    stride: usize,
}

impl SegmentCache {
    /// Create an empty cache. `stride` must be non-zero.
    pub fn new(stride: usize) -> SegmentCache {
        debug_assert!(stride > 0, "stride must be non-zero");
        return SegmentCache {
            anchors: Vec::new(),
            stride,
        };
    }

    pub fn stride(&self) -> usize {
        return self.stride;
    }

    /// Number of anchors.
    pub fn len(&self) -> usize {
        return self.anchors.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.anchors.is_empty();
    }

    pub fn anchors(&self) -> &[Anchor] {
        return &self.anchors;
    }

    pub fn clear(&mut self) {
        if !self.anchors.is_empty() {
            tracing::debug!(anchors = self.anchors.len(), "segment cache cleared");
        }
        self.anchors.clear();
    }

    /// Rebuild from scratch with one full traversal.
    pub fn rebuild(&mut self, chain: &Chain) {
        self.anchors.clear();
        for (position, (idx, _)) in chain.iter().enumerate() {
            if position % self.stride == 0 {
                self.anchors.push(Anchor::new(chain, idx));
            }
        }
        tracing::debug!(
            len = chain.len(),
            anchors = self.anchors.len(),
            stride = self.stride,
            "segment cache rebuilt"
        );
    }

    /// Repair after `node` was linked in at `index`.
    pub fn after_insert(&mut self, chain: &Chain, index: usize, node: Idx) {
        let slot = index / self.stride;
        if slot >= self.anchors.len() {
            // Only an append landing exactly on a new boundary gets here.
            debug_assert_eq!(slot, self.anchors.len());
            debug_assert_eq!(index % self.stride, 0);
            self.anchors.push(Anchor::new(chain, node));
            return;
        }

        let mut position = index;
        let mut idx = node;
        while idx != NULL {
            if position % self.stride == 0 {
                let slot = position / self.stride;
                let anchor = Anchor::new(chain, idx);
                if slot < self.anchors.len() {
                    self.anchors[slot] = anchor;
                } else {
                    self.anchors.push(anchor);
                }
            }
            position += 1;
            idx = chain.next(idx);
        }
    }

    /// Repair for removing the node at `index`. Must run while that node is
    /// still linked.
    pub fn before_remove(&mut self, chain: &Chain, index: usize) {
        let mut slot = index.div_ceil(self.stride);
        while slot < self.anchors.len() {
            let next = match self.anchors[slot].resolve(chain) {
                Some(idx) => chain.next(idx),
                None => NULL,
            };
            if next == NULL {
                tracing::debug!(slot, "segment cache truncated");
                self.anchors.truncate(slot);
                break;
            }
            self.anchors[slot] = Anchor::new(chain, next);
            slot += 1;
        }
    }

    /// The node at `index`, starting from the nearest anchor at or before it.
    /// Falls back to a walk from `head` when the cache is empty or the anchor
    /// no longer resolves. Returns `NULL` past the end.
    pub fn locate(&self, chain: &Chain, index: usize) -> Idx {
        if self.anchors.is_empty() {
            return chain.node_at(index);
        }
        let slot = (index / self.stride).min(self.anchors.len() - 1);
        return match self.anchors[slot].resolve(chain) {
            Some(start) => chain.walk(start, index - slot * self.stride),
            None => chain.node_at(index),
        };
    }

    /// Whether every anchor sits on its stride boundary and no boundary is
    /// missing.
    pub fn is_consistent(&self, chain: &Chain) -> bool {
        let fresh: Vec<Anchor> = chain
            .iter()
            .enumerate()
            .filter(|(position, _)| position % self.stride == 0)
            .map(|(_, (idx, _))| Anchor::new(chain, idx))
            .collect();
        return fresh == self.anchors;
    }
}
