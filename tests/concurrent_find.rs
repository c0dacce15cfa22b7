// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Concurrency tests: racing search workers, caller cancellation, and a
//! shared list driven from several threads.

use std::sync::Arc;
use std::thread;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seglist::{CancelToken, Config, SegList, SharedList};

// =============================================================================
// Racing workers
// =============================================================================

#[test]
fn duplicate_in_list_of_twelve() {
    let mut list = SegList::new();
    for value in 0..12 {
        list.insert(list.len(), value * 10);
    }
    list.remove(4);
    list.insert(4, 7);
    list.remove(10);
    list.insert(10, 7);
    assert_eq!(list.len(), 12);
    assert!(list.is_cache_engaged());

    for _ in 0..100 {
        let index = list.find(7).expect("7 is present");
        assert!(index == 4 || index == 10, "find(7) = {index}");
    }
}

#[test]
fn every_value_found_in_long_list() {
    let list: SegList = (0..1_000).map(|v| v * 2).collect();
    assert_eq!(list.cache_len(), 100);
    for index in (0..1_000).step_by(37) {
        assert_eq!(list.find(index as i64 * 2), Some(index));
    }
    assert_eq!(list.find(1), None);
    assert_eq!(list.find(2_000), None);
}

#[test]
fn random_duplicates_report_a_valid_position() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut list = SegList::with_config(Config {
        activation_threshold: 9,
        stride: 5,
        segments_per_worker: 2,
    })
    .unwrap();
    for _ in 0..300 {
        let index = rng.gen_range(0..=list.len());
        list.insert(index, rng.gen_range(0..25));
    }

    let values = list.to_vec();
    for probe in 0..25 {
        let positions: Vec<usize> = values
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == probe)
            .map(|(i, _)| i)
            .collect();
        match list.find(probe) {
            Some(index) => assert!(positions.contains(&index), "probe {probe} -> {index}"),
            None => assert!(positions.is_empty(), "probe {probe} missed"),
        }
    }
}

// =============================================================================
// Cancellation
// =============================================================================

#[test]
fn raised_token_reports_not_found() {
    let list: SegList = (0..200).collect();
    let cancel = CancelToken::new();
    assert_eq!(list.find_cancellable(150, &cancel), Some(150));

    cancel.cancel();
    assert_eq!(list.find_cancellable(150, &cancel), None);
    assert_eq!(list.find_cancellable(3, &cancel), None);
    // Other searches are unaffected.
    assert_eq!(list.find(150), Some(150));
}

#[test]
fn raised_token_stops_linear_search() {
    let list: SegList = (0..5).collect();
    assert!(!list.is_cache_engaged());
    let cancel = CancelToken::new();
    cancel.cancel();
    assert_eq!(list.find_cancellable(0, &cancel), None);
}

#[test]
fn cancel_from_another_thread_terminates() {
    let list = Arc::new(SharedList::new());
    for value in 0..2_000 {
        list.insert(list.len(), value);
    }
    let cancel = CancelToken::new();

    let searcher = {
        let list = Arc::clone(&list);
        let cancel = cancel.clone();
        thread::spawn(move || {
            let mut results = Vec::new();
            while !cancel.is_cancelled() {
                results.push(list.find_cancellable(-1, &cancel));
            }
            return results;
        })
    };
    thread::sleep(std::time::Duration::from_millis(20));
    cancel.cancel();

    let results = searcher.join().unwrap();
    assert!(results.iter().all(Option::is_none));
}

// =============================================================================
// Shared list
// =============================================================================

#[test]
fn shared_list_readers_and_writers() {
    let list = Arc::new(
        SharedList::with_config(Config {
            activation_threshold: 9,
            stride: 4,
            segments_per_worker: 1,
        })
        .unwrap(),
    );

    let writers: Vec<_> = (0..4)
        .map(|writer| {
            let list = Arc::clone(&list);
            thread::spawn(move || {
                for i in 0..100 {
                    let value = writer * 1_000 + i;
                    list.write(|inner| inner.insert(inner.len(), value));
                }
            })
        })
        .collect();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let list = Arc::clone(&list);
            thread::spawn(move || {
                for _ in 0..100 {
                    if let Some(index) = list.find(0) {
                        assert_eq!(list.get(index), Some(0));
                    }
                    let snapshot = list.to_vec();
                    assert!(snapshot.len() <= 400);
                }
            })
        })
        .collect();

    for handle in writers.into_iter().chain(readers) {
        handle.join().unwrap();
    }

    assert_eq!(list.len(), 400);
    list.read(|inner| inner.check_invariants());
    for writer in 0..4 {
        for i in 0..100 {
            assert!(list.find(writer * 1_000 + i).is_some());
        }
    }
}

#[test]
fn shared_list_mixed_mutations_stay_consistent() {
    let list = Arc::new(SharedList::new());
    let handles: Vec<_> = (0..6u64)
        .map(|seed| {
            let list = Arc::clone(&list);
            thread::spawn(move || {
                let mut rng = StdRng::seed_from_u64(seed);
                for _ in 0..300 {
                    list.write(|inner| {
                        if inner.is_empty() || rng.gen_bool(0.6) {
                            let index = rng.gen_range(0..=inner.len());
                            inner.insert(index, rng.gen_range(0..50));
                        } else {
                            let index = rng.gen_range(0..inner.len());
                            inner.remove(index);
                        }
                    });
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    list.read(|inner| inner.check_invariants());
}
