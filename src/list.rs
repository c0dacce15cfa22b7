// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! The augmented list: a node chain plus tail/middle pointers, a segment
//! cache, and concurrent lookup.
//!
//! # Engagement
//!
//! Below `activation_threshold` elements the list is a plain singly-linked
//! list: no cache, and `find` walks from `head`. The first mutation that
//! brings the length to the threshold builds the cache with one traversal;
//! from then on it is repaired incrementally, and `find` races workers over
//! its segments. Dropping back under the threshold clears the cache.
//!
//! # Operations
//!
//! - `insert(index, value)`: O(1) at either end, otherwise a seek to
//!   `index - 1` plus the cache repair walk.
//! - `remove(index)`: seek to `index - 1`, unlink, repair.
//! - `get(index)`: seek. With the cache engaged a seek walks at most
//!   `stride - 1` links from the nearest anchor.
//! - `find(value)`: linear or concurrent, see above.
//!
//! A failed `insert` or `remove` changes nothing.
//!
//! The list does no locking of its own. Wrap it (see `SharedList`) to share
//! it between threads.

use baseline::Sequence;

use crate::cache::SegmentCache;
use crate::chain::{Chain, Idx, NULL, Value};
use crate::config::{Config, ConfigError};
use crate::pointers::Pointers;
use crate::search::{self, CancelToken};

/// A singly-linked list of integers with segment-anchored lookup.
#[derive(Clone, Debug)]
pub struct SegList {
    chain: Chain,
    pointers: Pointers,
    cache: SegmentCache,
    config: Config,
}

impl SegList {
    /// Create an empty list with the default configuration.
    pub fn new() -> SegList {
        let config = Config::default();
        return SegList {
            chain: Chain::new(),
            pointers: Pointers::new(),
            cache: SegmentCache::new(config.stride),
            config,
        };
    }

    /// Create an empty list with a caller-supplied configuration.
    pub fn with_config(config: Config) -> Result<SegList, ConfigError> {
        config.validate()?;
        return Ok(SegList {
            chain: Chain::new(),
            pointers: Pointers::new(),
            cache: SegmentCache::new(config.stride),
            config,
        });
    }

    pub fn len(&self) -> usize {
        return self.chain.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.chain.is_empty();
    }

    fn engaged_at(&self, len: usize) -> bool {
        return len >= self.config.activation_threshold;
    }

    /// Whether the segment cache is currently maintained.
    pub fn is_cache_engaged(&self) -> bool {
        return self.engaged_at(self.chain.len());
    }

    /// Number of segment anchors.
    pub fn cache_len(&self) -> usize {
        return self.cache.len();
    }

    fn locate(&self, index: usize) -> Idx {
        return self.cache.locate(&self.chain, index);
    }

    /// Insert `value` so that it ends up at `index`.
    /// Returns false, leaving the list untouched, if `index > len`.
    pub fn insert(&mut self, index: usize, value: Value) -> bool {
        let len = self.chain.len();
        if index > len {
            return false;
        }

        let node = if index == 0 {
            self.chain.push_front(value)
        } else if index == len {
            self.chain.insert_after(self.pointers.tail(), value)
        } else {
            let prev = self.locate(index - 1);
            self.chain.insert_after(prev, value)
        };

        self.pointers.after_insert(&self.chain, index, node);

        if self.engaged_at(self.chain.len()) {
            if self.cache.is_empty() {
                self.cache.rebuild(&self.chain);
            } else {
                self.cache.after_insert(&self.chain, index, node);
            }
        } else {
            self.cache.clear();
        }

        #[cfg(debug_assertions)]
        self.check_invariants();

        return true;
    }

    /// Remove the element at `index`.
    /// Returns false, leaving the list untouched, if `index >= len`.
    pub fn remove(&mut self, index: usize) -> bool {
        let len = self.chain.len();
        if index >= len {
            return false;
        }

        let prev = if index == 0 { NULL } else { self.locate(index - 1) };

        // The cache repair reads successors, so it runs before unlinking.
        if self.engaged_at(len - 1) {
            self.cache.before_remove(&self.chain, index);
        } else {
            self.cache.clear();
        }

        let removed = if prev == NULL {
            self.chain.remove_front()
        } else {
            self.chain.remove_after(prev)
        };

        self.pointers.after_remove(&self.chain, index, removed, prev);
        self.chain.release(removed);

        #[cfg(debug_assertions)]
        self.check_invariants();

        return true;
    }

    /// The value at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<Value> {
        if index >= self.chain.len() {
            return None;
        }
        let idx = self.locate(index);
        if idx == NULL {
            return None;
        }
        return Some(self.chain.value(idx));
    }

    /// An index holding `value`, or `None` if absent.
    ///
    /// On the linear path this is the first occurrence. On the concurrent
    /// path it is whichever occurrence a worker reached first.
    pub fn find(&self, value: Value) -> Option<usize> {
        return self.find_cancellable(value, &CancelToken::new());
    }

    /// Like `find`, but gives up and returns `None` once `cancel` is raised.
    pub fn find_cancellable(&self, value: Value, cancel: &CancelToken) -> Option<usize> {
        if self.is_cache_engaged() && !self.cache.is_empty() {
            return search::find_concurrent(
                &self.chain,
                &self.cache,
                value,
                self.config.segments_per_worker,
                cancel,
            );
        }
        return search::find_linear(&self.chain, value, cancel);
    }

    /// All values in order.
    pub fn to_vec(&self) -> Vec<Value> {
        return self.chain.values();
    }

    /// Iterate over values in order.
    pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        return self.chain.iter().map(|(_, value)| value);
    }

    /// Value of the last node.
    pub fn tail_value(&self) -> Option<Value> {
        let tail = self.pointers.tail();
        if tail == NULL {
            return None;
        }
        return Some(self.chain.value(tail));
    }

    /// Value of the node the middle pointer references. This is near, not
    /// necessarily at, the median position.
    pub fn middle_value(&self) -> Option<Value> {
        let middle = self.pointers.middle();
        if middle == NULL {
            return None;
        }
        return Some(self.chain.value(middle));
    }

    /// Position of the node the middle pointer references.
    pub fn middle_position(&self) -> Option<usize> {
        let middle = self.pointers.middle();
        if middle == NULL {
            return None;
        }
        return self.chain.iter().position(|(idx, _)| idx == middle);
    }

    /// Panic if the derived state disagrees with the chain.
    pub fn check_invariants(&self) {
        let nodes: Vec<Idx> = self.chain.iter().map(|(idx, _)| idx).collect();
        assert_eq!(
            nodes.len(),
            self.chain.len(),
            "INVARIANT VIOLATED: reachable nodes={} != len={}",
            nodes.len(),
            self.chain.len()
        );

        match nodes.last() {
            Some(&last) => {
                assert_eq!(self.pointers.tail(), last, "INVARIANT VIOLATED: tail is not the last node");
                assert!(
                    nodes.contains(&self.pointers.middle()),
                    "INVARIANT VIOLATED: middle is not reachable"
                );
            }
            None => {
                assert_eq!(self.pointers.tail(), NULL, "INVARIANT VIOLATED: tail set on empty list");
                assert_eq!(self.pointers.middle(), NULL, "INVARIANT VIOLATED: middle set on empty list");
            }
        }

        if self.is_cache_engaged() {
            assert!(
                self.cache.is_consistent(&self.chain),
                "INVARIANT VIOLATED: segment cache differs from a rebuild"
            );
        } else {
            assert!(self.cache.is_empty(), "INVARIANT VIOLATED: cache kept below threshold");
        }
    }
}

impl Default for SegList {
    fn default() -> Self {
        return Self::new();
    }
}

impl Extend<Value> for SegList {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        for value in iter {
            self.insert(self.len(), value);
        }
    }
}

impl FromIterator<Value> for SegList {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut list = SegList::new();
        list.extend(iter);
        return list;
    }
}

impl Sequence for SegList {
    fn insert(&mut self, index: usize, value: i64) -> bool {
        return SegList::insert(self, index, value);
    }

    fn remove(&mut self, index: usize) -> bool {
        return SegList::remove(self, index);
    }

    fn get(&self, index: usize) -> Option<i64> {
        return SegList::get(self, index);
    }

    fn find(&self, value: i64) -> Option<usize> {
        return SegList::find(self, value);
    }

    fn to_vec(&self) -> Vec<i64> {
        return SegList::to_vec(self);
    }

    fn len(&self) -> usize {
        return SegList::len(self);
    }
}
