// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! A lock around `SegList` for callers that share one list across threads.
//!
//! Mutations take the write lock; reads, including a concurrent `find`,
//! take the read lock, so the chain cannot change under a running search.

use parking_lot::RwLock;

use crate::chain::Value;
use crate::config::{Config, ConfigError};
use crate::list::SegList;
use crate::search::CancelToken;

#[derive(Debug, Default)]
pub struct SharedList {
    inner: RwLock<SegList>,
}

impl SharedList {
    pub fn new() -> SharedList {
        return SharedList::default();
    }

    pub fn with_config(config: Config) -> Result<SharedList, ConfigError> {
        return Ok(SharedList {
            inner: RwLock::new(SegList::with_config(config)?),
        });
    }

    pub fn insert(&self, index: usize, value: Value) -> bool {
        return self.inner.write().insert(index, value);
    }

    pub fn remove(&self, index: usize) -> bool {
        return self.inner.write().remove(index);
    }

    pub fn get(&self, index: usize) -> Option<Value> {
        return self.inner.read().get(index);
    }

    pub fn find(&self, value: Value) -> Option<usize> {
        return self.inner.read().find(value);
    }

    pub fn find_cancellable(&self, value: Value, cancel: &CancelToken) -> Option<usize> {
        return self.inner.read().find_cancellable(value, cancel);
    }

    pub fn to_vec(&self) -> Vec<Value> {
        return self.inner.read().to_vec();
    }

    pub fn len(&self) -> usize {
        return self.inner.read().len();
    }

    pub fn is_empty(&self) -> bool {
        return self.inner.read().is_empty();
    }

    /// Run `f` with shared access to the list.
    pub fn read<R>(&self, f: impl FnOnce(&SegList) -> R) -> R {
        return f(&self.inner.read());
    }

    /// Run `f` with exclusive access, for multi-step edits that must not
    /// interleave with other callers.
    pub fn write<R>(&self, f: impl FnOnce(&mut SegList) -> R) -> R {
        return f(&mut self.inner.write());
    }
}
