//! Node slot layout (spec component C2).
//!
//! A slot at position `i < live_count` is live; its `parent`/`left`/`right`/
//! `color`/`entry` are all meaningful. A slot at `live_count <= i < capacity`
//! is reserved: only `entry` is meaningful, and it is always `None` there.
//!
//! Rust has no in-place default-construction of arbitrary `K`/`V`, so unlike
//! the fixed per-slot record the spec describes for a systems language, a
//! reserved slot here is modeled as the `entry: Option<(K, V)>` sum-type the
//! spec's own design notes call out as the safe-language substitute: `None`
//! for reserved, `Some` for live. `left`/`right`/`parent`/`color` of a
//! reserved slot are left at whatever stale value they held and are never
//! read; compaction (`delete.rs`) overwrites or clears them immediately.

use crate::idx::Idx;

/// Red/Black coloring of a live node. NIL is treated as Black wherever a
/// color is asked of a non-existent child.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum Color {
    Red,
    Black,
}

#[derive(Clone, Debug)]
pub(crate) struct Node<K, V, Ix: Idx> {
    pub(crate) parent: Ix,
    pub(crate) left: Ix,
    pub(crate) right: Ix,
    pub(crate) color: Color,
    pub(crate) entry: Option<(K, V)>,
}

impl<K, V, Ix: Idx> Node<K, V, Ix> {
    pub(crate) fn reserved() -> Self {
        Node {
            parent: Ix::NIL,
            left: Ix::NIL,
            right: Ix::NIL,
            color: Color::Black,
            entry: None,
        }
    }

    pub(crate) fn is_live(&self) -> bool {
        self.entry.is_some()
    }

    pub(crate) fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    pub(crate) fn is_black(&self) -> bool {
        self.color == Color::Black
    }

    pub(crate) fn key(&self) -> &K {
        &self.entry.as_ref().expect("live slot").0
    }

    pub(crate) fn value(&self) -> &V {
        &self.entry.as_ref().expect("live slot").1
    }

    pub(crate) fn value_mut(&mut self) -> &mut V {
        &mut self.entry.as_mut().expect("live slot").1
    }
}
