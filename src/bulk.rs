//! Bulk operations (spec component C6): conditional delete and slot-order
//! materialization.
//!
//! `conditional_delete` estimates the deletion rate with a single predicate
//! pre-pass over live slots, then dispatches to one of three tiers by rate
//! `r`: sparse (`r < 0.25`), medium (`0.25 <= r < 0.5`), heavy (`r >= 0.5`).
//! The pre-pass is shared across all three tiers rather than re-run per
//! tier, so the predicate is evaluated exactly `size()` times regardless of
//! which tier ends up handling the deletion (documented further in
//! DESIGN.md as this crate's resolution of spec.md §9's open question on
//! predicate call count).

use crate::idx::Idx;
use crate::tree::Tree;

impl<K, V, Ix: Idx> Tree<K, V, Ix>
where
    K: Ord + Clone,
    V: Clone,
{
    /// Delete every key,value pair for which `predicate` returns `Ok(true)`.
    /// Returns the number of pairs removed.
    ///
    /// If `predicate` returns `Err`, the scan stops immediately and the
    /// error is propagated as [`crate::Error::InvalidPredicate`] without
    /// deleting anything: the pre-pass that evaluates `predicate` always
    /// completes in full before any mutation begins, so a failing predicate
    /// never leaves the tree partially modified.
    pub fn conditional_delete(
        &mut self,
        mut predicate: impl FnMut(&K, &V) -> crate::Result<bool>,
    ) -> crate::Result<usize> {
        let live = self.size();
        if live == 0 {
            return Ok(0);
        }

        let mut matched: Vec<K> = Vec::new();
        for i in 0..live {
            let ix = Self::from_usize(i);
            let node = self.slot(ix);
            if predicate(node.key(), node.value())? {
                matched.push(node.key().clone());
            }
        }
        if matched.is_empty() {
            return Ok(0);
        }

        let rate = matched.len() as f64 / live as f64;
        let removed = if rate >= 0.5 {
            match self.rebuild_without(&matched) {
                Ok(n) => n,
                Err(_) => self.delete_keys_in_order(matched),
            }
        } else if rate >= 0.25 {
            self.delete_keys_in_order(matched)
        } else {
            let mut n = 0;
            for key in &matched {
                if self.delete(key) {
                    n += 1;
                }
            }
            n
        };
        log::trace!(
            "rbarena: conditional_delete removed {} of {} (rate {:.3})",
            removed,
            live,
            rate
        );
        Ok(removed)
    }

    /// Delete the first key,value pair (in slot order) for which `predicate`
    /// returns `Ok(true)`. Returns `0` or `1`; propagates a predicate
    /// failure as [`crate::Error::InvalidPredicate`].
    pub fn conditional_delete_once(
        &mut self,
        mut predicate: impl FnMut(&K, &V) -> crate::Result<bool>,
    ) -> crate::Result<usize> {
        let live = self.size();
        for i in 0..live {
            let ix = Self::from_usize(i);
            let node = self.slot(ix);
            if predicate(node.key(), node.value())? {
                let key = node.key().clone();
                return Ok(if self.delete(&key) { 1 } else { 0 });
            }
        }
        Ok(0)
    }

    /// All keys, in slot order (unordered). Use the ordered cursor for a
    /// sorted walk.
    pub fn keys(&self) -> Vec<K> {
        (0..self.size())
            .map(|i| self.slot(Self::from_usize(i)).key().clone())
            .collect()
    }

    /// All values, in slot order (unordered).
    pub fn values(&self) -> Vec<V> {
        (0..self.size())
            .map(|i| self.slot(Self::from_usize(i)).value().clone())
            .collect()
    }

    /// All key,value pairs, in slot order (unordered).
    pub fn pairs(&self) -> Vec<(K, V)> {
        (0..self.size())
            .map(|i| {
                let node = self.slot(Self::from_usize(i));
                (node.key().clone(), node.value().clone())
            })
            .collect()
    }

    // Medium tier: per-key deletes, processed in key order so the access
    // pattern matches the successor walk spec.md §4.5 describes (each
    // delete's compaction can only invalidate indices, never keys, so
    // re-deriving positions from the key list stays correct throughout).
    fn delete_keys_in_order(&mut self, mut matched: Vec<K>) -> usize {
        matched.sort_by(Self::cmp_key);
        let mut n = 0;
        for key in &matched {
            if self.delete(key) {
                n += 1;
            }
        }
        n
    }

    // Heavy tier: rebuild into a fresh same-capacity, same-width tree
    // containing only the non-matching entries, then swap it into place.
    // `Option::take` moves each surviving entry without requiring `V: Clone`
    // for the move itself (the bound is still carried for `keys`/`values`).
    fn rebuild_without(&mut self, matched: &[K]) -> crate::Result<usize> {
        let mut sorted_matched = matched.to_vec();
        sorted_matched.sort_by(Self::cmp_key);

        let mut fresh = Tree::<K, V, Ix>::with_capacity(self.header.capacity)?;
        let live = self.size();
        let mut removed = 0;
        for i in 0..live {
            let ix = Self::from_usize(i);
            let is_match = {
                let node = self.slot(ix);
                sorted_matched
                    .binary_search_by(|k| Self::cmp_key(k, node.key()))
                    .is_ok()
            };
            if is_match {
                removed += 1;
                continue;
            }
            let (key, value) = self
                .slot_mut(ix)
                .entry
                .take()
                .expect("live slot has an entry");
            fresh.insert(key, value)?;
        }
        *self = fresh;
        Ok(removed)
    }
}

#[cfg(test)]
#[path = "bulk_test.rs"]
mod bulk_test;
