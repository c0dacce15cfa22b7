// model = "claude-opus-4-5"
// created = 2026-10-16
// modified = 2026-10-16
// driver = "Isaac Clayton"

//! The plain singly-linked list.
//!
//! Each node is owned by its predecessor through a `Box`, the first one by
//! the list. There is no tail pointer and no index: every positional
//! operation walks from `head`.

use crate::Sequence;

struct Node {
    value: i64,
    next: Option<Box<Node>>,
}

#[derive(Default)]
pub struct PlainList {
    head: Option<Box<Node>>,
    len: usize,
}

impl PlainList {
    pub fn new() -> PlainList {
        return PlainList::default();
    }

    pub fn iter(&self) -> Iter<'_> {
        return Iter {
            next: self.head.as_deref(),
        };
    }
}

impl Sequence for PlainList {
    fn insert(&mut self, index: usize, value: i64) -> bool {
        if index > self.len {
            return false;
        }
        let mut link = &mut self.head;
        for _ in 0..index {
            link = match link.as_mut() {
                Some(node) => &mut node.next,
                None => return false,
            };
        }
        let next = link.take();
        *link = Some(Box::new(Node { value, next }));
        self.len += 1;
        return true;
    }

    fn remove(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        let mut link = &mut self.head;
        for _ in 0..index {
            link = match link.as_mut() {
                Some(node) => &mut node.next,
                None => return false,
            };
        }
        let Some(mut node) = link.take() else {
            return false;
        };
        *link = node.next.take();
        self.len -= 1;
        return true;
    }

    fn get(&self, index: usize) -> Option<i64> {
        return self.iter().nth(index);
    }

    fn find(&self, value: i64) -> Option<usize> {
        return self.iter().position(|v| v == value);
    }

    fn to_vec(&self) -> Vec<i64> {
        return self.iter().collect();
    }

    fn len(&self) -> usize {
        return self.len;
    }
}

impl Drop for PlainList {
    // Unlink iteratively; the default recursive drop overflows the stack on
    // long lists.
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl Iterator for Iter<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        return Some(node.value);
    }
}
