// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Auxiliary tail and middle pointers.
//!
//! `tail` is exact and gives O(1) append. `middle` is a best-effort anchor
//! near the structural midpoint: it moves at most one step per insert and is
//! re-synchronized from `head` on some removes, so it drifts but stays a
//! reachable node. Nothing relies on it being the true median.

use crate::chain::{Chain, Idx, NULL};

/// Non-owning references into a chain, maintained after each mutation.
#[derive(Clone, Debug)]
pub struct Pointers {
    tail: Idx,
    middle: Idx,
}

impl Pointers {
    pub fn new() -> Pointers {
        return Pointers {
            tail: NULL,
            middle: NULL,
        };
    }

    pub fn tail(&self) -> Idx {
        return self.tail;
    }

    pub fn middle(&self) -> Idx {
        return self.middle;
    }

    /// Update after `node` was linked in at `index`. `chain.len()` is the
    /// post-insert length.
    pub fn after_insert(&mut self, chain: &Chain, index: usize, node: Idx) {
        let len = chain.len();

        if index + 1 == len {
            self.tail = node;
        }

        if len == 1 {
            self.middle = chain.head();
        } else if index <= len / 2 && len % 2 == 0 {
            let next = chain.next(self.middle);
            if next != NULL {
                self.middle = next;
            }
        }
    }

    /// Update after `removed` was unlinked from `index`. `prev` is the node
    /// that preceded it (`NULL` for the head) and `chain.len()` is the
    /// post-remove length. Must run before `removed` is released.
    pub fn after_remove(&mut self, chain: &Chain, index: usize, removed: Idx, prev: Idx) {
        let len = chain.len();

        if len == 0 {
            self.tail = NULL;
            self.middle = NULL;
            return;
        }

        if removed == self.tail {
            self.tail = prev;
        }

        if removed == self.middle || (index <= len / 2 && len % 2 == 1) {
            self.middle = chain.walk(chain.head(), (len / 2).saturating_sub(1));
        }
    }
}

impl Default for Pointers {
    fn default() -> Self {
        return Self::new();
    }
}
