//! Shared rotation primitives used by insert fixup (C4) and delete fixup
//! (C5). Both components are the only ones permitted to modify structural
//! links and colors; every other mutator calls into them through these
//! helpers or through `insert`/`delete` directly.
//!
//! A rotation rewrites three or four index fields (parent, the appropriate
//! child, and the great-grandparent's child link if any) and updates
//! `root_index` when the rotated subtree was the root, exactly as spec.md
//! §4.3 describes.

use crate::idx::Idx;
use crate::tree::Tree;

impl<K, V, Ix: Idx> Tree<K, V, Ix>
where
    K: Ord + Clone,
    V: Clone,
{
    /// Replace `u`'s position in its parent (or the root) with `v`.
    pub(crate) fn transplant(&mut self, u: Ix, v: Ix) {
        let up = self.parent(u);
        if Self::is_nil(up) {
            self.header.root_index = v;
        } else if u == self.left(up) {
            self.slot_mut(up).left = v;
        } else {
            self.slot_mut(up).right = v;
        }
        if !Self::is_nil(v) {
            self.slot_mut(v).parent = up;
        }
    }

    /// Left rotation around `x`: `x`'s right child `y` takes `x`'s place,
    /// `x` becomes `y`'s left child.
    pub(crate) fn rotate_left(&mut self, x: Ix) {
        let y = self.right(x);
        debug_assert!(!Self::is_nil(y), "rotate_left requires a right child");

        let y_left = self.left(y);
        self.slot_mut(x).right = y_left;
        if !Self::is_nil(y_left) {
            self.slot_mut(y_left).parent = x;
        }

        let xp = self.parent(x);
        self.slot_mut(y).parent = xp;
        if Self::is_nil(xp) {
            self.header.root_index = y;
        } else if x == self.left(xp) {
            self.slot_mut(xp).left = y;
        } else {
            self.slot_mut(xp).right = y;
        }

        self.slot_mut(y).left = x;
        self.slot_mut(x).parent = y;
    }

    /// Right rotation around `x`: `x`'s left child `y` takes `x`'s place,
    /// `x` becomes `y`'s right child.
    pub(crate) fn rotate_right(&mut self, x: Ix) {
        let y = self.left(x);
        debug_assert!(!Self::is_nil(y), "rotate_right requires a left child");

        let y_right = self.right(y);
        self.slot_mut(x).left = y_right;
        if !Self::is_nil(y_right) {
            self.slot_mut(y_right).parent = x;
        }

        let xp = self.parent(x);
        self.slot_mut(y).parent = xp;
        if Self::is_nil(xp) {
            self.header.root_index = y;
        } else if x == self.left(xp) {
            self.slot_mut(xp).left = y;
        } else {
            self.slot_mut(xp).right = y;
        }

        self.slot_mut(y).right = x;
        self.slot_mut(x).parent = y;
    }

    /// The sibling of `x`'s given parent on the opposite side from `x`.
    /// NIL if `x` is NIL (used when `x` is itself NIL, as happens when
    /// delete-fixup starts from an unlinked leaf).
    pub(crate) fn sibling_via(&self, parent: Ix, x: Ix) -> Ix {
        if x == self.left(parent) {
            self.right(parent)
        } else {
            self.left(parent)
        }
    }
}
