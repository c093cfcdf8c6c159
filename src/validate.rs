//! Diagnostic invariant checking, grounded in the teacher's
//! `Llrb::validate`/`validate_tree` (`llrb.rs`, `llrb_common.rs`): a
//! recursive walk accumulating black-height and checking BST order and
//! red-red violations, extended here with the index-array-specific
//! invariants spec.md §8 adds (parent/child consistency, root exclusivity,
//! density, no dangling link) that have no counterpart in a pointer-based
//! tree.

use crate::idx::Idx;
use crate::node::Color;
use crate::tree::Tree;

impl<K, V, Ix: Idx> Tree<K, V, Ix>
where
    K: Ord + Clone + std::fmt::Debug,
    V: Clone,
{
    /// Walk the tree checking every invariant spec.md §8 names. Returns the
    /// first violation found rather than panicking, so callers can assert
    /// tree health (e.g. after [`Tree::set_backing`]) without risking a
    /// process abort on a corrupt external image.
    pub fn validate(&self) -> crate::Result<()> {
        self.validate_density()?;
        self.validate_dangling_links()?;
        self.validate_parent_child()?;
        self.validate_root()?;

        if Self::is_nil(self.root()) {
            return Ok(());
        }
        if self.is_red(self.root()) {
            return Err(crate::Error::ConsecutiveReds);
        }
        self.validate_subtree(self.root(), false)?;
        Ok(())
    }

    fn validate_density(&self) -> crate::Result<()> {
        for i in 0..self.header.live_count {
            let ix = Self::from_usize(i as usize);
            if !self.slot(ix).is_live() {
                return Err(crate::Error::DanglingLink(i));
            }
        }
        for i in self.header.live_count..self.header.capacity {
            let ix = Self::from_usize(i as usize);
            if self.slot(ix).is_live() {
                return Err(crate::Error::DanglingLink(i));
            }
        }
        Ok(())
    }

    fn validate_dangling_links(&self) -> crate::Result<()> {
        let live = self.header.live_count;
        for i in 0..live {
            let ix = Self::from_usize(i as usize);
            let node = self.slot(ix);
            for link in [node.parent, node.left, node.right] {
                if !Self::is_nil(link) && link.to_u64() >= live {
                    return Err(crate::Error::DanglingLink(link.to_u64()));
                }
            }
        }
        Ok(())
    }

    fn validate_parent_child(&self) -> crate::Result<()> {
        let live = self.header.live_count;
        for i in 0..live {
            let ix = Self::from_usize(i as usize);
            for child in [self.left(ix), self.right(ix)] {
                if !Self::is_nil(child) && self.parent(child) != ix {
                    return Err(crate::Error::DanglingLink(child.to_u64()));
                }
            }
        }
        Ok(())
    }

    fn validate_root(&self) -> crate::Result<()> {
        let live = self.header.live_count;
        let mut roots = 0usize;
        for i in 0..live {
            let ix = Self::from_usize(i as usize);
            if Self::is_nil(self.parent(ix)) {
                roots += 1;
                if ix != self.root() {
                    return Err(crate::Error::DanglingLink(ix.to_u64()));
                }
            }
        }
        let expected = if live > 0 { 1 } else { 0 };
        if roots != expected {
            return Err(crate::Error::DanglingLink(self.root().to_u64()));
        }
        Ok(())
    }

    // Returns the black-height of `ix`'s subtree. `parent_is_red` lets the
    // caller reject a red node directly under another red node.
    fn validate_subtree(&self, ix: Ix, parent_is_red: bool) -> crate::Result<usize> {
        let node = self.slot(ix);
        let is_red = node.is_red();
        if parent_is_red && is_red {
            return Err(crate::Error::ConsecutiveReds);
        }

        let left = self.left(ix);
        let right = self.right(ix);

        if !Self::is_nil(left) && self.slot(left).key() >= node.key() {
            return Err(crate::Error::SortError(
                format!("{:?}", self.slot(left).key()),
                format!("{:?}", node.key()),
            ));
        }
        if !Self::is_nil(right) && self.slot(right).key() <= node.key() {
            return Err(crate::Error::SortError(
                format!("{:?}", node.key()),
                format!("{:?}", self.slot(right).key()),
            ));
        }

        let left_black = if Self::is_nil(left) {
            1
        } else {
            self.validate_subtree(left, is_red)?
        };
        let right_black = if Self::is_nil(right) {
            1
        } else {
            self.validate_subtree(right, is_red)?
        };
        if left_black != right_black {
            return Err(crate::Error::UnbalancedBlacks(left_black, right_black));
        }

        Ok(left_black + if node.color == Color::Black { 1 } else { 0 })
    }
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;
