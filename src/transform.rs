//! Cross-index-width rehoming (spec component C8).
//!
//! Unlike [`crate::sizing`]'s growth/shrink, which keep `Ix` fixed,
//! `transform` moves a tree's contents into a tree of a possibly different
//! index width. No rebalancing is needed: the source shape and colors are
//! already a valid red-black tree, so only the link indices need
//! widening or narrowing.

use crate::idx::Idx;
use crate::node::Node;
use crate::tree::Tree;

impl<K, V, Ix: Idx> Tree<K, V, Ix>
where
    K: Ord + Clone,
    V: Clone,
{
    /// Rehome `self`'s contents into a tree of index width `Jx`, which may
    /// differ from `Ix`. Fails with [`crate::Error::CapacityExceeded`] if
    /// `self.size()` exceeds `Jx`'s `MAX_COUNT`, or with
    /// [`crate::Error::AllocFail`] if the target allocation cannot be made.
    pub fn transform<Jx: Idx>(&self) -> crate::Result<Tree<K, V, Jx>> {
        let live = self.header.live_count;
        let max = Jx::max_count();
        if live > max {
            return Err(crate::Error::CapacityExceeded {
                requested: live,
                max,
            });
        }

        let mut target = Tree::<K, V, Jx>::with_capacity(live.max(1))?;
        target.header.live_count = live;
        target.header.root_index = Self::translate_index::<Jx>(self.header.root_index);

        for i in 0..live as usize {
            let src = self.slot(Self::from_usize(i));
            let (key, value) = src
                .entry
                .as_ref()
                .map(|(k, v)| (k.clone(), v.clone()))
                .expect("live slot has an entry");
            target.slots[i] = Node {
                parent: Self::translate_index::<Jx>(src.parent),
                left: Self::translate_index::<Jx>(src.left),
                right: Self::translate_index::<Jx>(src.right),
                color: src.color,
                entry: Some((key, value)),
            };
        }

        log::trace!(
            "rbarena: transformed {} live entries from {:?} to {:?}",
            live,
            Ix::WIDTH,
            Jx::WIDTH
        );
        Ok(target)
    }

    fn translate_index<Jx: Idx>(ix: Ix) -> Jx {
        if Self::is_nil(ix) {
            Jx::NIL
        } else {
            Jx::from_u64(ix.to_u64())
        }
    }
}

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;
