// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! AFL fuzz harness for the segmented list.
//!
//! Decodes the input into a stream of list operations and applies each one to
//! a `SegList` (small stride, low threshold, so the cache churns) and to a
//! `VecSequence` oracle. After every step:
//!
//! 1. Both agree on success, contents, and length
//! 2. The list's derived state (tail, middle, cache) is consistent
//! 3. `find` returns an index that actually holds the value

use afl::fuzz;
use baseline::Sequence;
use baseline::vec_sequence::VecSequence;
use seglist::{Config, SegList};

#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    /// Insert at a position scaled from `pos_frac`; 255 overshoots the end
    Insert { pos_frac: u8, value: i8 },
    Remove { pos_frac: u8 },
    Get { pos_frac: u8 },
    Find { value: i8 },
}

impl FuzzOp {
    fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        let (&tag, rest) = bytes.split_first()?;
        return match tag % 4 {
            0 if rest.len() >= 2 => Some((
                FuzzOp::Insert { pos_frac: rest[0], value: rest[1] as i8 },
                &rest[2..],
            )),
            1 if !rest.is_empty() => Some((FuzzOp::Remove { pos_frac: rest[0] }, &rest[1..])),
            2 if !rest.is_empty() => Some((FuzzOp::Get { pos_frac: rest[0] }, &rest[1..])),
            3 if !rest.is_empty() => Some((FuzzOp::Find { value: rest[0] as i8 }, &rest[1..])),
            _ => None,
        };
    }
}

fn scale(pos_frac: u8, len: usize) -> usize {
    if pos_frac == u8::MAX {
        return len + 1;
    }
    return pos_frac as usize * (len + 1) / 256;
}

fn main() {
    let config = Config {
        activation_threshold: 4,
        stride: 3,
        segments_per_worker: 1,
    };

    fuzz!(|data: &[u8]| {
        let Ok(mut list) = SegList::with_config(config.clone()) else {
            return;
        };
        let mut oracle = VecSequence::new();
        let mut remaining = data;

        while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
            remaining = rest;
            let len = oracle.len();

            match op {
                FuzzOp::Insert { pos_frac, value } => {
                    let index = scale(pos_frac, len);
                    let expected = oracle.insert(index, value as i64);
                    assert_eq!(list.insert(index, value as i64), expected, "insert({index}) disagreed");
                }
                FuzzOp::Remove { pos_frac } => {
                    let index = scale(pos_frac, len);
                    let expected = oracle.remove(index);
                    assert_eq!(list.remove(index), expected, "remove({index}) disagreed");
                }
                FuzzOp::Get { pos_frac } => {
                    let index = scale(pos_frac, len);
                    assert_eq!(list.get(index), oracle.get(index), "get({index}) disagreed");
                }
                FuzzOp::Find { value } => {
                    let value = value as i64;
                    let positions = oracle.positions(value);
                    match list.find(value) {
                        Some(index) => assert!(
                            positions.contains(&index),
                            "find({value}) returned {index}, not one of {positions:?}"
                        ),
                        None => assert!(positions.is_empty(), "find({value}) missed {positions:?}"),
                    }
                }
            }

            assert_eq!(list.len(), oracle.len(), "Length mismatch");
            list.check_invariants();
        }

        assert_eq!(list.to_vec(), oracle.to_vec(), "Final contents mismatch");
    });
}
