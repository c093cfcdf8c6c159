//! Insert and fixup (spec component C4).

use std::cmp::Ordering;

use crate::idx::Idx;
use crate::node::{Color, Node};
use crate::tree::Tree;

impl<K, V, Ix: Idx> Tree<K, V, Ix>
where
    K: Ord + Clone,
    V: Clone,
{
    /// Insert `key` mapped to `value`. A pre-existing `key` has its value
    /// overwritten and neither structure nor color changes; `size` is
    /// unchanged in that case. Otherwise the new leaf is colored Red,
    /// placed at slot `live_count` (growing the backing array first if it
    /// is exhausted), and the fixup loop restores the red-black invariants.
    ///
    /// Fails with [`crate::Error::CapacityExceeded`] if a new slot is
    /// needed and the width's `MAX_COUNT` has already been reached; the
    /// tree is left unchanged.
    pub fn insert(&mut self, key: K, value: V) -> crate::Result<()> {
        let mut cur = self.root();
        let mut parent = Ix::NIL;
        let mut went_left = false;

        while !Self::is_nil(cur) {
            parent = cur;
            match Self::cmp_key(&key, self.slot(cur).key()) {
                Ordering::Less => {
                    went_left = true;
                    cur = self.left(cur);
                }
                Ordering::Greater => {
                    went_left = false;
                    cur = self.right(cur);
                }
                Ordering::Equal => {
                    *self.slot_mut(cur).value_mut() = value;
                    return Ok(());
                }
            }
        }

        if self.header.live_count == self.header.capacity {
            self.grow_for_insert()?;
        }

        let z = Self::from_usize(self.header.live_count as usize);
        self.slots[Self::to_usize(z)] = Node {
            parent,
            left: Ix::NIL,
            right: Ix::NIL,
            color: Color::Red,
            entry: Some((key, value)),
        };
        self.header.live_count += 1;

        if Self::is_nil(parent) {
            self.header.root_index = z;
        } else if went_left {
            self.slot_mut(parent).left = z;
        } else {
            self.slot_mut(parent).right = z;
        }

        self.insert_fixup(z);
        Ok(())
    }

    // Classical CLRS RB-INSERT-FIXUP, restated in spec terms: while `z`'s
    // parent `p` is Red, classify the grandparent path as LL/LR/RL/RR
    // (spec.md §4.3). LL/RR: one rotation around the grandparent `g` with a
    // recolor. LR/RL: a rotation around `p` first, then the LL/RR case.
    fn insert_fixup(&mut self, mut z: Ix) {
        while self.is_red(self.parent(z)) {
            let p = self.parent(z);
            let g = self.parent(p);
            debug_assert!(!Self::is_nil(g), "a red node always has a black parent");

            if p == self.left(g) {
                let uncle = self.right(g);
                if self.is_red(uncle) {
                    self.set_color(p, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(g, Color::Red);
                    z = g;
                } else {
                    if z == self.right(p) {
                        z = p;
                        self.rotate_left(z);
                    }
                    let p = self.parent(z);
                    let g = self.parent(p);
                    self.set_color(p, Color::Black);
                    self.set_color(g, Color::Red);
                    self.rotate_right(g);
                }
            } else {
                let uncle = self.left(g);
                if self.is_red(uncle) {
                    self.set_color(p, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(g, Color::Red);
                    z = g;
                } else {
                    if z == self.left(p) {
                        z = p;
                        self.rotate_right(z);
                    }
                    let p = self.parent(z);
                    let g = self.parent(p);
                    self.set_color(p, Color::Black);
                    self.set_color(g, Color::Red);
                    self.rotate_left(g);
                }
            }
        }
        self.set_color(self.root(), Color::Black);
    }
}

#[cfg(test)]
#[path = "insert_test.rs"]
mod insert_test;
