// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Concurrent search over segment anchors.
//!
//! One worker per segment (or per run of `segments_per_worker` segments)
//! starts at its anchor and compares up to `stride` values. Workers race:
//!
//! 1. The first worker to see the target claims the commit slot with a
//!    compare-and-set and records `slot * stride + offset`.
//! 2. The claim raises the stop signal. Every worker polls it before each
//!    comparison and again before following a `next` link, so each one
//!    overshoots by at most one step.
//! 3. Later successes lose the compare-and-set and are dropped.
//!
//! Workers run on scoped threads, so all of them have finished by the time
//! the search returns. When the value occurs more than once, whichever
//! worker gets there first wins; there is no lowest-index guarantee.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;

use crossbeam_utils::CachePadded;

use crate::cache::{Anchor, SegmentCache};
use crate::chain::{Chain, NULL, Value};

/// A cooperative cancellation flag.
///
/// Clones share the flag. Once raised it stays raised.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> CancelToken {
        return CancelToken::default();
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        return self.flag.load(Ordering::Acquire);
    }
}

/// Exactly-once result slot.
struct Commit {
    claimed: CachePadded<AtomicBool>,
    index: CachePadded<AtomicUsize>,
}

impl Commit {
    fn new() -> Commit {
        return Commit {
            claimed: CachePadded::new(AtomicBool::new(false)),
            index: CachePadded::new(AtomicUsize::new(0)),
        };
    }

    /// Returns false if another worker already committed.
    fn try_commit(&self, index: usize) -> bool {
        if self
            .claimed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return false;
        }
        self.index.store(index, Ordering::Release);
        return true;
    }

    fn result(&self) -> Option<usize> {
        if self.claimed.load(Ordering::Acquire) {
            return Some(self.index.load(Ordering::Acquire));
        }
        return None;
    }
}

/// The range one worker scans.
#[derive(Clone, Copy, Debug)]
struct Segment {
    start: Anchor,
    /// Chain position of `start`.
    base: usize,
    /// Maximum number of nodes to inspect.
    limit: usize,
}

/// State shared by all workers of one search.
struct Race<'a> {
    chain: &'a Chain,
    target: Value,
    commit: Commit,
    stop: CachePadded<AtomicBool>,
    caller: &'a CancelToken,
}

impl Race<'_> {
    fn should_stop(&self) -> bool {
        return self.stop.load(Ordering::Acquire) || self.caller.is_cancelled();
    }

    fn run(&self, segment: Segment) {
        let Some(mut idx) = segment.start.resolve(self.chain) else {
            return;
        };
        for offset in 0..segment.limit {
            if self.should_stop() {
                return;
            }
            if self.chain.value(idx) == self.target {
                let index = segment.base + offset;
                if self.commit.try_commit(index) {
                    self.stop.store(true, Ordering::Release);
                    tracing::trace!(index, "search committed");
                }
                return;
            }
            let next = self.chain.next(idx);
            if next == NULL || self.should_stop() {
                return;
            }
            idx = next;
        }
    }
}

/// Race workers over the cache's segments for `target`.
///
/// Returns the committed index, or `None` if no worker found the value or
/// `cancel` was raised before the workers finished.
pub fn find_concurrent(
    chain: &Chain,
    cache: &SegmentCache,
    target: Value,
    segments_per_worker: usize,
    cancel: &CancelToken,
) -> Option<usize> {
    let stride = cache.stride();
    let per_worker = segments_per_worker.max(1);
    let race = Race {
        chain,
        target,
        commit: Commit::new(),
        stop: CachePadded::new(AtomicBool::new(false)),
        caller: cancel,
    };

    let segments = cache
        .anchors()
        .iter()
        .enumerate()
        .step_by(per_worker)
        .map(|(slot, anchor)| Segment {
            start: *anchor,
            base: slot * stride,
            limit: per_worker * stride,
        });

    thread::scope(|scope| {
        let race = &race;
        for (worker, segment) in segments.enumerate() {
            let spawned = thread::Builder::new().spawn_scoped(scope, move || race.run(segment));
            if let Err(err) = spawned {
                tracing::debug!(worker, %err, "worker spawn failed, scanning on caller thread");
                race.run(segment);
            }
        }
    });

    if cancel.is_cancelled() {
        tracing::trace!(value = target, "search cancelled by caller");
        return None;
    }
    return race.commit.result();
}

/// Walk from `head` for the first node holding `target`, polling `cancel`
/// at every node.
pub fn find_linear(chain: &Chain, target: Value, cancel: &CancelToken) -> Option<usize> {
    for (index, (_, value)) in chain.iter().enumerate() {
        if cancel.is_cancelled() {
            tracing::trace!(value = target, "search cancelled by caller");
            return None;
        }
        if value == target {
            return Some(index);
        }
    }
    return None;
}
