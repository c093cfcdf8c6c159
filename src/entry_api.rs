//! `operator[]`-style entry access (part of spec component C7).

use crate::idx::Idx;
use crate::tree::Tree;

impl<K, V, Ix: Idx> Tree<K, V, Ix>
where
    K: Ord + Clone,
    V: Clone + Default,
{
    /// Return a mutable reference to the value bound to `key`, inserting
    /// `V::default()` first if `key` is absent. Fails with
    /// [`crate::Error::CapacityExceeded`] if insertion is needed and no
    /// slot is available; the tree is left unchanged in that case.
    pub fn entry(&mut self, key: K) -> crate::Result<&mut V> {
        if !self.contains_key(&key) {
            self.insert(key.clone(), V::default())?;
        }
        Ok(self
            .search_mut(&key)
            .expect("key was just confirmed present"))
    }
}

#[cfg(test)]
#[path = "entry_api_test.rs"]
mod entry_api_test;
