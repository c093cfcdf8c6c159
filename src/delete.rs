//! Delete, fixup, and compaction (spec component C5) — the most involved
//! component per spec.md's effort budget.
//!
//! Three cases for the target node `t`, exactly as spec.md §4.4 states:
//! no left child (splice in the right subtree), no right child (splice in
//! the left subtree), or both children present (copy the in-order
//! successor's key/value over `t` via [`Option::take`]/swap rather than a
//! clone — this needs neither `K: Clone` nor `V: Clone` — and redirect the
//! structural removal to the successor, which by construction has no left
//! child).
//!
//! The classical red-black delete-fixup needs to track "the double black
//! node's parent" even when that node is NIL, since NIL carries no slot and
//! therefore no parent field; `x_parent` is threaded through explicitly
//! rather than read off `x`, which is the standard CLRS technique adapted
//! to an index-addressed tree with no sentinel node.
//!
//! Compaction runs only *after* the fixup loop has fully returned, never
//! interleaved with it: every index the fixup loop reads or writes resolves
//! to its current slot at the moment it's touched, so by the time
//! compaction moves the last live slot into the freed hole there are no
//! stale cached indices left for it to invalidate. This is this crate's
//! resolution of the "indirect slots" concern spec.md §4.4 point 3 raises
//! for implementations that might interleave the two (documented further
//! in DESIGN.md).

use crate::idx::Idx;
use crate::node::{Color, Node};
use crate::tree::Tree;

impl<K, V, Ix: Idx> Tree<K, V, Ix>
where
    K: Ord + Clone,
    V: Clone,
{
    /// Remove `key`, returning whether it was present. On success the tree
    /// remains dense: every index in `[0, size())` still names a live slot.
    pub fn delete(&mut self, key: &K) -> bool {
        let target = self.find_index(key);
        if Self::is_nil(target) {
            return false;
        }
        self.delete_node(target);
        true
    }

    pub(crate) fn find_index(&self, key: &K) -> Ix {
        let mut cur = self.root();
        while !Self::is_nil(cur) {
            let node = self.slot(cur);
            match Self::cmp_key(key, node.key()) {
                std::cmp::Ordering::Less => cur = node.left,
                std::cmp::Ordering::Greater => cur = node.right,
                std::cmp::Ordering::Equal => return cur,
            }
        }
        Ix::NIL
    }

    fn tree_minimum(&self, mut x: Ix) -> Ix {
        while !Self::is_nil(self.left(x)) {
            x = self.left(x);
        }
        x
    }

    fn delete_node(&mut self, mut target: Ix) {
        if !Self::is_nil(self.left(target)) && !Self::is_nil(self.right(target)) {
            let successor = self.tree_minimum(self.right(target));
            let successor_entry = self.slot_mut(successor).entry.take();
            self.slot_mut(target).entry = successor_entry;
            target = successor;
        }

        // `target` now has at most one child.
        let child = if !Self::is_nil(self.left(target)) {
            self.left(target)
        } else {
            self.right(target)
        };
        let removed_color = self.slot(target).color;
        let removed_parent = self.parent(target);

        self.transplant(target, child);

        if removed_color == Color::Black {
            self.delete_fixup(child, removed_parent);
        }

        self.compact(target);
    }

    // Classical RB-DELETE-FIXUP, with the double-black node's parent
    // threaded explicitly since NIL has no slot to read a parent from.
    fn delete_fixup(&mut self, mut x: Ix, mut x_parent: Ix) {
        while x != self.root() && self.is_black(x) {
            if x == self.left(x_parent) {
                let mut w = self.right(x_parent);
                if self.is_red(w) {
                    self.set_color(w, Color::Black);
                    self.set_color(x_parent, Color::Red);
                    self.rotate_left(x_parent);
                    w = self.right(x_parent);
                }
                if self.is_black(self.left(w)) && self.is_black(self.right(w)) {
                    self.set_color(w, Color::Red);
                    x = x_parent;
                    x_parent = self.parent(x);
                } else {
                    if self.is_black(self.right(w)) {
                        self.set_color(self.left(w), Color::Black);
                        self.set_color(w, Color::Red);
                        self.rotate_right(w);
                        w = self.right(x_parent);
                    }
                    let xp_color = self.slot(x_parent).color;
                    self.set_color(w, xp_color);
                    self.set_color(x_parent, Color::Black);
                    self.set_color(self.right(w), Color::Black);
                    self.rotate_left(x_parent);
                    x = self.root();
                    x_parent = self.parent(x);
                }
            } else {
                let mut w = self.left(x_parent);
                if self.is_red(w) {
                    self.set_color(w, Color::Black);
                    self.set_color(x_parent, Color::Red);
                    self.rotate_right(x_parent);
                    w = self.left(x_parent);
                }
                if self.is_black(self.right(w)) && self.is_black(self.left(w)) {
                    self.set_color(w, Color::Red);
                    x = x_parent;
                    x_parent = self.parent(x);
                } else {
                    if self.is_black(self.left(w)) {
                        self.set_color(self.right(w), Color::Black);
                        self.set_color(w, Color::Red);
                        self.rotate_left(w);
                        w = self.left(x_parent);
                    }
                    let xp_color = self.slot(x_parent).color;
                    self.set_color(w, xp_color);
                    self.set_color(x_parent, Color::Black);
                    self.set_color(self.left(w), Color::Black);
                    self.rotate_right(x_parent);
                    x = self.root();
                    x_parent = self.parent(x);
                }
            }
        }
        self.set_color(x, Color::Black);
    }

    // Move-last-into-hole compaction (spec.md §4.4). `d` has already been
    // unlinked from the tree by the time this runs.
    fn compact(&mut self, d: Ix) {
        let last = Self::from_usize(self.header.live_count as usize - 1);
        if d != last {
            let moved = std::mem::replace(self.slot_mut(last), Node::reserved());
            let (moved_parent, moved_left, moved_right) = (moved.parent, moved.left, moved.right);
            *self.slot_mut(d) = moved;

            if Self::is_nil(moved_parent) {
                self.header.root_index = d;
            } else if self.left(moved_parent) == last {
                self.slot_mut(moved_parent).left = d;
            } else {
                self.slot_mut(moved_parent).right = d;
            }
            if !Self::is_nil(moved_left) {
                self.slot_mut(moved_left).parent = d;
            }
            if !Self::is_nil(moved_right) {
                self.slot_mut(moved_right).parent = d;
            }
        } else {
            *self.slot_mut(d) = Node::reserved();
        }
        self.header.live_count -= 1;
        log::trace!("rbarena: compacted slot {:?}, live_count now {}", d, self.header.live_count);
    }
}

#[cfg(test)]
#[path = "delete_test.rs"]
mod delete_test;
