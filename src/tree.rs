//! The `Tree` type tying together the header (C1), node slots (C2), and the
//! rest of the components, which each contribute an `impl<K, V, Ix> Tree`
//! block in their own module (`lookup.rs`, `insert.rs`, `delete.rs`, ...).

use std::cmp::Ordering;

use crate::header::{Header, IndexWidth};
use crate::idx::Idx;
use crate::node::{Color, Node};

/// An ordered key,value index backed by a contiguous, index-addressed
/// red-black tree.
///
/// `Ix` selects the index width ([`crate::Width16`], [`crate::Width32`],
/// [`crate::Width64`]) and therefore both the maximum element count and the
/// per-node footprint. Most applications should use one of the
/// [`crate::Tree16`], [`crate::Tree32`], [`crate::Tree64`] aliases rather
/// than naming `Tree` directly.
pub struct Tree<K, V, Ix: Idx>
where
    K: Ord + Clone,
    V: Clone,
{
    pub(crate) header: Header<Ix>,
    pub(crate) slots: Vec<Node<K, V, Ix>>,
}

/// Default capacity used by [`Tree::new`], clamped to the width's maximum.
pub const DEFAULT_CAPACITY: u64 = 256;

impl<K, V, Ix: Idx> Tree<K, V, Ix>
where
    K: Ord + Clone,
    V: Clone,
{
    /// Construct an empty tree with the default capacity (256, clamped to
    /// the width's maximum).
    pub fn new() -> Self {
        let capacity = DEFAULT_CAPACITY.min(Ix::max_count());
        Self::with_capacity(capacity).expect("default capacity always fits")
    }

    /// Construct an empty tree with room for `capacity` entries before the
    /// first growth. Fails with [`crate::Error::CapacityExceeded`] if
    /// `capacity` exceeds the width's `MAX_COUNT`.
    pub fn with_capacity(capacity: u64) -> crate::Result<Self> {
        let max = Ix::max_count();
        if capacity > max {
            return Err(crate::Error::CapacityExceeded {
                requested: capacity,
                max,
            });
        }
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity as usize)
            .map_err(|e| crate::Error::AllocFail(e.to_string()))?;
        slots.resize_with(capacity as usize, Node::reserved);
        Ok(Tree {
            header: Header::empty(capacity),
            slots,
        })
    }

    /// Number of key,value pairs currently stored.
    pub fn size(&self) -> usize {
        self.header.live_count as usize
    }

    /// Alias for [`Tree::size`], matching the standard collection surface.
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Whether the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.header.is_empty()
    }

    /// Number of node slots currently allocated (live + reserved).
    pub fn capacity(&self) -> usize {
        self.header.capacity as usize
    }

    /// The tree's index width.
    pub fn index_width(&self) -> IndexWidth {
        self.header.index_width()
    }

    /// Remaining capacity before the width's `MAX_COUNT` is hit, i.e.
    /// `MAX_COUNT - size`. This is not the same as unused allocated slots;
    /// see [`Tree::capacity`] for that.
    pub fn available(&self) -> u64 {
        Ix::max_count() - self.header.live_count
    }

    pub(crate) fn root(&self) -> Ix {
        self.header.root_index
    }

    pub(crate) fn to_usize(ix: Ix) -> usize {
        ix.to_u64() as usize
    }

    pub(crate) fn from_usize(v: usize) -> Ix {
        Ix::from_u64(v as u64)
    }

    pub(crate) fn slot(&self, ix: Ix) -> &Node<K, V, Ix> {
        &self.slots[Self::to_usize(ix)]
    }

    pub(crate) fn slot_mut(&mut self, ix: Ix) -> &mut Node<K, V, Ix> {
        &mut self.slots[Self::to_usize(ix)]
    }

    pub(crate) fn is_nil(ix: Ix) -> bool {
        ix == Ix::NIL
    }

    pub(crate) fn is_red(&self, ix: Ix) -> bool {
        !Self::is_nil(ix) && self.slot(ix).is_red()
    }

    pub(crate) fn is_black(&self, ix: Ix) -> bool {
        Self::is_nil(ix) || self.slot(ix).is_black()
    }

    pub(crate) fn set_color(&mut self, ix: Ix, color: Color) {
        if !Self::is_nil(ix) {
            self.slot_mut(ix).color = color;
        }
    }

    pub(crate) fn left(&self, ix: Ix) -> Ix {
        self.slot(ix).left
    }

    pub(crate) fn right(&self, ix: Ix) -> Ix {
        self.slot(ix).right
    }

    pub(crate) fn parent(&self, ix: Ix) -> Ix {
        self.slot(ix).parent
    }

    pub(crate) fn cmp_key(a: &K, b: &K) -> Ordering {
        // Defined per spec as "neither less nor greater" for equality:
        // expressed here with `<`/`>` rather than a direct `==` check.
        if *a < *b {
            Ordering::Less
        } else if *a > *b {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl<K, V, Ix: Idx> Default for Tree<K, V, Ix>
where
    K: Ord + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;
