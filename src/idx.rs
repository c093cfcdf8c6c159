//! The index-width abstraction (spec component C2's "three width variants
//! share a common abstract shape").
//!
//! Every parent/left/right link in a [`crate::node::Node`] is one of these
//! fixed-width unsigned integers. The all-ones value of the width is the
//! reserved NIL sentinel and is never a valid slot position, which bounds
//! `MAX_COUNT(width) = 2^width - 1`.

use crate::header::IndexWidth;

/// A fixed-width unsigned index type usable as a node link.
///
/// A [`crate::Tree`] is generic over one of `u16`, `u32`, `u64` through this
/// trait; [`Width16`], [`Width32`], [`Width64`] are the aliases callers
/// spell out ([`crate::Tree16`], [`crate::Tree32`], [`crate::Tree64`]).
pub trait Idx: Copy + Eq + PartialEq + std::fmt::Debug + Send + Sync + 'static {
    /// The reserved sentinel meaning "no such slot".
    const NIL: Self;
    /// The runtime tag for this width, carried in the header so a
    /// serialized image can be identified.
    const WIDTH: IndexWidth;

    /// Widen/narrow-safe conversion to a 64-bit count, used by bounds
    /// checks and by [`crate::Tree::transform`].
    fn to_u64(self) -> u64;

    /// Construct from a 64-bit count. Callers must bounds-check against
    /// `max_count()` first; out-of-range values are truncated.
    fn from_u64(v: u64) -> Self;

    /// `MAX_COUNT(width) = 2^width - 1`, also the NIL value as a `u64`.
    fn max_count() -> u64 {
        Self::NIL.to_u64()
    }
}

/// 16-bit index width: trees hold at most `u16::MAX` (65535) entries.
pub type Width16 = u16;
/// 32-bit index width: trees hold at most `u32::MAX` entries.
pub type Width32 = u32;
/// 64-bit index width: trees hold at most `u64::MAX` entries.
pub type Width64 = u64;

impl Idx for u16 {
    const NIL: Self = u16::MAX;
    const WIDTH: IndexWidth = IndexWidth::W16;

    fn to_u64(self) -> u64 {
        self as u64
    }

    fn from_u64(v: u64) -> Self {
        v as u16
    }
}

impl Idx for u32 {
    const NIL: Self = u32::MAX;
    const WIDTH: IndexWidth = IndexWidth::W32;

    fn to_u64(self) -> u64 {
        self as u64
    }

    fn from_u64(v: u64) -> Self {
        v as u32
    }
}

impl Idx for u64 {
    const NIL: Self = u64::MAX;
    const WIDTH: IndexWidth = IndexWidth::W64;

    fn to_u64(self) -> u64 {
        self
    }

    fn from_u64(v: u64) -> Self {
        v
    }
}
