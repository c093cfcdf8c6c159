//! Point and range lookups (spec component C3).
//!
//! All operations here are O(log n) worst case, non-allocating, and descend
//! from `root_index` comparing with `<`/`>` only.

use std::cmp::Ordering;

use crate::idx::Idx;
use crate::tree::Tree;

impl<K, V, Ix: Idx> Tree<K, V, Ix>
where
    K: Ord + Clone,
    V: Clone,
{
    /// Look up `key`, returning a reference to its value if present.
    pub fn search(&self, key: &K) -> Option<&V> {
        let mut cur = self.root();
        while !Self::is_nil(cur) {
            let node = self.slot(cur);
            match Self::cmp_key(key, node.key()) {
                Ordering::Less => cur = node.left,
                Ordering::Greater => cur = node.right,
                Ordering::Equal => return Some(node.value()),
            }
        }
        None
    }

    /// Look up `key`, returning a mutable reference to its value if present.
    pub fn search_mut(&mut self, key: &K) -> Option<&mut V> {
        let mut cur = self.root();
        while !Self::is_nil(cur) {
            let node = self.slot(cur);
            match Self::cmp_key(key, node.key()) {
                Ordering::Less => cur = node.left,
                Ordering::Greater => cur = node.right,
                Ordering::Equal => return Some(self.slot_mut(cur).value_mut()),
            }
        }
        None
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// The smallest key in the tree and its value, or `None` if empty.
    pub fn min(&self) -> Option<(&K, &V)> {
        self.extreme(|node| node.left)
    }

    /// The largest key in the tree and its value, or `None` if empty.
    pub fn max(&self) -> Option<(&K, &V)> {
        self.extreme(|node| node.right)
    }

    fn extreme(&self, step: impl Fn(&crate::node::Node<K, V, Ix>) -> Ix) -> Option<(&K, &V)> {
        if Self::is_nil(self.root()) {
            return None;
        }
        let mut cur = self.root();
        loop {
            let node = self.slot(cur);
            let next = step(node);
            if Self::is_nil(next) {
                return Some((node.key(), node.value()));
            }
            cur = next;
        }
    }

    /// The largest key strictly less than `key`, and its value.
    pub fn floor(&self, key: &K) -> Option<(&K, &V)> {
        let mut cur = self.root();
        let mut candidate = Ix::NIL;
        while !Self::is_nil(cur) {
            let node = self.slot(cur);
            if *node.key() < *key {
                candidate = cur;
                cur = node.right;
            } else {
                cur = node.left;
            }
        }
        if Self::is_nil(candidate) {
            None
        } else {
            let node = self.slot(candidate);
            Some((node.key(), node.value()))
        }
    }

    /// The smallest key strictly greater than `key`, and its value.
    pub fn ceiling(&self, key: &K) -> Option<(&K, &V)> {
        let mut cur = self.root();
        let mut candidate = Ix::NIL;
        while !Self::is_nil(cur) {
            let node = self.slot(cur);
            if *node.key() > *key {
                candidate = cur;
                cur = node.left;
            } else {
                cur = node.right;
            }
        }
        if Self::is_nil(candidate) {
            None
        } else {
            let node = self.slot(candidate);
            Some((node.key(), node.value()))
        }
    }
}

#[cfg(test)]
#[path = "lookup_test.rs"]
mod lookup_test;
