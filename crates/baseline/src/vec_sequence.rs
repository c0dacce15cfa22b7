// model = "claude-opus-4-5"
// created = 2026-10-16
// modified = 2026-10-16
// driver = "Isaac Clayton"

//! A `Vec`-backed sequence, the oracle for differential tests.

use crate::Sequence;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VecSequence {
    values: Vec<i64>,
}

impl VecSequence {
    pub fn new() -> VecSequence {
        return VecSequence::default();
    }

    /// Every index holding `value`.
    pub fn positions(&self, value: i64) -> Vec<usize> {
        return self
            .values
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == value)
            .map(|(i, _)| i)
            .collect();
    }
}

impl Sequence for VecSequence {
    fn insert(&mut self, index: usize, value: i64) -> bool {
        if index > self.values.len() {
            return false;
        }
        self.values.insert(index, value);
        return true;
    }

    fn remove(&mut self, index: usize) -> bool {
        if index >= self.values.len() {
            return false;
        }
        self.values.remove(index);
        return true;
    }

    fn get(&self, index: usize) -> Option<i64> {
        return self.values.get(index).copied();
    }

    fn find(&self, value: i64) -> Option<usize> {
        return self.values.iter().position(|v| *v == value);
    }

    fn to_vec(&self) -> Vec<i64> {
        return self.values.clone();
    }

    fn len(&self) -> usize {
        return self.values.len();
    }
}

impl FromIterator<i64> for VecSequence {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        return VecSequence {
            values: iter.into_iter().collect(),
        };
    }
}
