// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Property-based tests for the segmented list.

use baseline::Sequence;
use baseline::vec_sequence::VecSequence;
use proptest::prelude::*;
use seglist::{Config, SegList};

// =============================================================================
// Test helpers
// =============================================================================

/// A random mutation. Positions are fractions of the current length so most
/// land in range; `overshoot` pushes them past the end.
#[derive(Clone, Debug)]
enum ListOp {
    Insert { pos_pct: f64, overshoot: bool, value: i64 },
    Remove { pos_pct: f64, overshoot: bool },
}

fn arbitrary_list_op() -> impl Strategy<Value = ListOp> {
    prop_oneof![
        // Small value range so duplicates are common
        3 => (0.0..=1.0f64, prop::bool::weighted(0.1), -20i64..20)
            .prop_map(|(pos_pct, overshoot, value)| ListOp::Insert { pos_pct, overshoot, value }),
        2 => (0.0..=1.0f64, prop::bool::weighted(0.1))
            .prop_map(|(pos_pct, overshoot)| ListOp::Remove { pos_pct, overshoot }),
    ]
}

fn arbitrary_config() -> impl Strategy<Value = Config> {
    (0usize..12, 1usize..6, 1usize..4).prop_map(|(activation_threshold, stride, segments_per_worker)| {
        Config {
            activation_threshold,
            stride,
            segments_per_worker,
        }
    })
}

fn position(pos_pct: f64, overshoot: bool, len: usize) -> usize {
    if overshoot {
        return len + 1;
    }
    return ((pos_pct * len as f64) as usize).min(len);
}

/// Apply `op` to both and return whether the list accepted it.
fn apply(list: &mut SegList, oracle: &mut VecSequence, op: &ListOp) -> bool {
    let len = oracle.len();
    return match op {
        ListOp::Insert { pos_pct, overshoot, value } => {
            let index = position(*pos_pct, *overshoot, len);
            let accepted = list.insert(index, *value);
            assert_eq!(accepted, oracle.insert(index, *value));
            accepted
        }
        ListOp::Remove { pos_pct, overshoot } => {
            let index = position(*pos_pct, *overshoot, len.saturating_sub(1));
            let index = if len == 0 { 0 } else { index };
            let accepted = list.remove(index);
            assert_eq!(accepted, oracle.remove(index));
            accepted
        }
    };
}

fn build(config: &Config, ops: &[ListOp]) -> (SegList, VecSequence) {
    let mut list = SegList::with_config(config.clone()).unwrap();
    let mut oracle = VecSequence::new();
    for op in ops {
        apply(&mut list, &mut oracle, op);
    }
    return (list, oracle);
}

// =============================================================================
// Contents and length
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The list holds exactly what a Vec would after the same operations
    #[test]
    fn contents_match_vec(
        config in arbitrary_config(),
        ops in prop::collection::vec(arbitrary_list_op(), 1..80),
    ) {
        let (list, oracle) = build(&config, &ops);
        prop_assert_eq!(list.to_vec(), oracle.to_vec());
        prop_assert_eq!(list.iter().collect::<Vec<_>>(), oracle.to_vec());
    }

    /// Length is successful inserts minus successful removes
    #[test]
    fn length_accounts_for_successes(
        config in arbitrary_config(),
        ops in prop::collection::vec(arbitrary_list_op(), 1..80),
    ) {
        let mut list = SegList::with_config(config).unwrap();
        let mut oracle = VecSequence::new();
        let mut net: isize = 0;
        for op in &ops {
            if apply(&mut list, &mut oracle, op) {
                net += match op {
                    ListOp::Insert { .. } => 1,
                    ListOp::Remove { .. } => -1,
                };
            }
        }
        prop_assert_eq!(list.len() as isize, net);
    }

    /// Get right after a successful insert returns the inserted value
    #[test]
    fn insert_then_get(
        config in arbitrary_config(),
        ops in prop::collection::vec(arbitrary_list_op(), 0..60),
        pos_pct in 0.0..=1.0f64,
        value in any::<i64>(),
    ) {
        let (mut list, _) = build(&config, &ops);
        let index = position(pos_pct, false, list.len());
        prop_assert!(list.insert(index, value));
        prop_assert_eq!(list.get(index), Some(value));
    }
}

// =============================================================================
// Find
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(150))]

    /// Find succeeds iff the value is present, on the linear and concurrent
    /// paths alike, and any reported index holds the value
    #[test]
    fn find_iff_reachable_on_both_paths(
        stride in 1usize..6,
        ops in prop::collection::vec(arbitrary_list_op(), 1..80),
        probe in -22i64..22,
    ) {
        let linear_config = Config { activation_threshold: usize::MAX, stride, segments_per_worker: 1 };
        let concurrent_config = Config { activation_threshold: 0, stride, segments_per_worker: 1 };
        let (linear, oracle) = build(&linear_config, &ops);
        let (concurrent, _) = build(&concurrent_config, &ops);
        prop_assert_eq!(linear.to_vec(), concurrent.to_vec());

        let positions = oracle.positions(probe);
        prop_assert_eq!(linear.find(probe), positions.first().copied());
        match concurrent.find(probe) {
            Some(index) => prop_assert!(positions.contains(&index)),
            None => prop_assert!(positions.is_empty()),
        }
    }
}

// =============================================================================
// Derived state
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// After every mutation the incremental cache equals a rebuild and the
    /// tail/middle pointers reference reachable nodes
    #[test]
    fn derived_state_consistent_after_every_step(
        config in arbitrary_config(),
        ops in prop::collection::vec(arbitrary_list_op(), 1..80),
    ) {
        let mut list = SegList::with_config(config.clone()).unwrap();
        let mut oracle = VecSequence::new();
        for op in &ops {
            apply(&mut list, &mut oracle, op);
            list.check_invariants();

            let expected_anchors = if list.len() >= config.activation_threshold {
                list.len().div_ceil(config.stride)
            } else {
                0
            };
            prop_assert_eq!(list.cache_len(), expected_anchors);
            prop_assert_eq!(list.tail_value(), oracle.get(oracle.len().wrapping_sub(1)));
            match list.middle_position() {
                Some(middle) => prop_assert!(middle < list.len()),
                None => prop_assert!(list.is_empty()),
            }
        }
    }

    /// Indexed reads through the cache agree with the oracle everywhere
    #[test]
    fn get_matches_at_every_index(
        config in arbitrary_config(),
        ops in prop::collection::vec(arbitrary_list_op(), 1..80),
    ) {
        let (list, oracle) = build(&config, &ops);
        for index in 0..=oracle.len() {
            prop_assert_eq!(list.get(index), oracle.get(index));
        }
    }
}
