// model = "claude-opus-4-5"
// created = 2026-10-16
// modified = 2026-10-16
// driver = "Isaac Clayton"

//! Reference integer sequences.
//!
//! This crate holds the shared `Sequence` interface and two deliberately
//! simple implementations of it. They are used for:
//!
//! - Differential testing: `VecSequence` is the oracle every other
//!   implementation is checked against
//! - Benchmarking: `PlainList` is the un-augmented linked list, the cost
//!   baseline for cached and concurrent lookup
//! - Conformance: one test suite runs against every implementation
//!
//! # Implementations
//!
//! | Implementation | Storage | `find` |
//! |----------------|---------|--------|
//! | `VecSequence` | `Vec<i64>` | linear scan |
//! | `PlainList` | boxed singly-linked nodes | walk from head |
//!
//! # Example
//!
//! ```
//! use baseline::Sequence;
//! use baseline::plain_list::PlainList;
//!
//! let mut list = PlainList::new();
//! assert!(list.insert(0, 10));
//! assert!(list.insert(1, 30));
//! assert!(list.insert(1, 20));
//! assert_eq!(list.to_vec(), vec![10, 20, 30]);
//! assert_eq!(list.find(20), Some(1));
//! assert!(!list.insert(9, 40));
//! ```

pub mod plain_list;
pub mod vec_sequence;

/// A positional sequence of integers.
///
/// Failures are reported through the return value and never mutate:
/// - `insert` fails when `index > len`
/// - `remove` and `get` fail when `index >= len`
/// - `find` fails when the value is absent
pub trait Sequence {
    /// Insert `value` so that it ends up at `index`.
    fn insert(&mut self, index: usize, value: i64) -> bool;

    /// Remove the element at `index`.
    fn remove(&mut self, index: usize) -> bool;

    /// The value at `index`.
    fn get(&self, index: usize) -> Option<i64>;

    /// An index holding `value`.
    ///
    /// Implementations may return any matching index when the value occurs
    /// more than once.
    fn find(&self, value: i64) -> Option<usize>;

    /// All values in order.
    fn to_vec(&self) -> Vec<i64>;

    /// Number of elements.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        return self.len() == 0;
    }
}
