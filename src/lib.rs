// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Seglist - a singly-linked integer list with segment-anchored lookup.
//!
//! The plain list is augmented with:
//!
//! - a tail pointer for O(1) append and a best-effort middle pointer,
//! - a segment cache of anchors every `stride` nodes, repaired incrementally,
//! - a concurrent `find` that races one worker per segment to a first match.
//!
//! # Quick Start
//!
//! ```
//! use seglist::SegList;
//!
//! let mut list = SegList::new();
//! assert!(list.insert(0, 10));
//! assert!(list.insert(1, 20));
//! assert!(list.insert(2, 30));
//! assert_eq!(list.to_vec(), vec![10, 20, 30]);
//!
//! assert_eq!(list.get(1), Some(20));
//! assert_eq!(list.find(30), Some(2));
//! assert!(!list.insert(7, 40));
//! ```
//!
//! The list does no locking; `SharedList` wraps it in a read/write lock.

pub mod cache;
pub mod chain;
pub mod config;
pub mod list;
pub mod pointers;
pub mod search;
pub mod shared;

pub use config::{Config, ConfigError};
pub use list::SegList;
pub use search::CancelToken;
pub use shared::SharedList;
