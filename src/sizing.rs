//! Allocation, growth, shrink, clear, and copy (spec component C7).
//!
//! This is the only component permitted to allocate, free, or resize the
//! backing storage. Because the live region always occupies the prefix
//! `[0, live_count)` of the slot vector, growing never moves a live slot
//! (new reserved slots are appended) and shrinking never moves one either
//! (the reserved suffix is simply truncated) — only `delete`'s compaction
//! step ever relocates a live slot.

use crate::idx::Idx;
use crate::node::Node;
use crate::tree::Tree;

impl<K, V, Ix: Idx> Tree<K, V, Ix>
where
    K: Ord + Clone,
    V: Clone,
{
    pub(crate) fn grow_for_insert(&mut self) -> crate::Result<()> {
        let max = Ix::max_count();
        if self.header.capacity >= max {
            return Err(crate::Error::CapacityExceeded {
                requested: self.header.capacity + 1,
                max,
            });
        }
        let doubled = if self.header.capacity == 0 {
            1
        } else {
            self.header.capacity.saturating_mul(2)
        };
        self.grow_to(doubled.min(max))
    }

    fn grow_to(&mut self, new_capacity: u64) -> crate::Result<()> {
        debug_assert!(new_capacity >= self.header.capacity);
        let additional = new_capacity as usize - self.slots.len();
        self.slots
            .try_reserve(additional)
            .map_err(|e| crate::Error::AllocFail(e.to_string()))?;
        self.slots.resize_with(new_capacity as usize, Node::reserved);
        self.header.capacity = new_capacity;
        log::trace!(
            "rbarena: grew backing array from {} to {} slots",
            self.slots.len(),
            new_capacity
        );
        Ok(())
    }

    /// Explicitly resize the backing array to hold exactly `capacity`
    /// slots. Fails if `capacity` exceeds the width's `MAX_COUNT`, or is
    /// smaller than the current `size` (shrinking below live data would
    /// lose entries).
    pub fn resize(&mut self, capacity: u64) -> crate::Result<()> {
        let max = Ix::max_count();
        if capacity > max {
            return Err(crate::Error::CapacityExceeded {
                requested: capacity,
                max,
            });
        }
        if capacity < self.header.live_count {
            return Err(crate::Error::CapacityExceeded {
                requested: capacity,
                max: self.header.live_count,
            });
        }
        if capacity >= self.header.capacity {
            self.grow_to(capacity)
        } else {
            self.slots.truncate(capacity as usize);
            self.header.capacity = capacity;
            log::trace!("rbarena: shrank backing array to {} slots", capacity);
            Ok(())
        }
    }

    /// Reallocate to exactly `max(size, 1)` slots, releasing any unused
    /// reserved capacity.
    pub fn shrink_to_fit(&mut self) {
        let target = self.header.live_count.max(1);
        self.slots.truncate(target as usize);
        self.slots.shrink_to_fit();
        self.header.capacity = target;
        log::trace!("rbarena: shrink_to_fit to {} slots", target);
    }

    /// Destroy and re-default-construct every stored slot, resetting
    /// `live_count` and `root_index` without releasing the allocation.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = Node::reserved();
        }
        self.header.live_count = 0;
        self.header.root_index = Ix::NIL;
    }
}

/// Copy construction: produces an independent tree with identical
/// structure and contents. For a same-width copy this is exactly
/// [`crate::Tree::transform`] with `Ix` held fixed, so no index
/// translation or rebalancing is needed — the clone below is a direct
/// structural copy, which is that transform specialized to an identity
/// index mapping.
impl<K, V, Ix: Idx> Clone for Tree<K, V, Ix>
where
    K: Ord + Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        Tree {
            header: self.header.clone(),
            slots: self.slots.clone(),
        }
    }
}

#[cfg(test)]
#[path = "sizing_test.rs"]
mod sizing_test;
