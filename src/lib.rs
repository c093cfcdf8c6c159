//! `rbarena` implements an ordered key,value index as a red-black tree whose
//! nodes live in a single contiguous, index-addressed array instead of
//! heap-scattered allocations.
//!
//! Every parent/left/right link is a fixed-width unsigned integer index into
//! the backing array rather than a pointer, which makes the whole tree
//! position-independent: the array can be written out as a flat byte image
//! and later adopted in place by a fresh [`Tree`]. The same layout gives
//! cache-friendly O(n) unordered scans ([`Tree::keys`], [`Tree::values`],
//! [`Tree::pairs`], [`UnorderedCursor`]) alongside the usual O(log n) ordered
//! operations ([`Tree::search`], [`Tree::floor`], [`Tree::ceiling`],
//! [`OrderedCursor`]).
//!
//! Three index widths are supported, selecting both the maximum element
//! count and the per-node footprint: [`Width16`], [`Width32`], [`Width64`].
//! A tree built with one width can be rehomed into another with
//! [`Tree::transform`].
//!
//! **Non-goals**: multi-key (duplicate keys never coexist, a matching insert
//! overwrites the value), persistent/versioned snapshots, concurrent access,
//! and stable addresses for keys/values across mutation. The tree is a
//! single-owner resource; wrap it in an external mutual-exclusion primitive
//! if it must be shared across threads.

mod bulk;
mod config;
mod cursor;
mod delete;
mod entry_api;
mod error;
mod header;
mod idx;
mod insert;
mod lookup;
mod node;
mod rotate;
mod sizing;
mod transform;
mod tree;
mod validate;
mod wire;

pub use config::Config;
pub use cursor::{OrderedCursor, OrderedIter, UnorderedCursor};
pub use error::Error;
pub use header::IndexWidth;
pub use idx::{Idx, Width16, Width32, Width64};
pub use tree::Tree;
pub use wire::Codec;

/// A tree addressed with 16-bit indices. Holds at most `u16::MAX` entries.
pub type Tree16<K, V> = Tree<K, V, Width16>;
/// A tree addressed with 32-bit indices. Holds at most `u32::MAX` entries.
pub type Tree32<K, V> = Tree<K, V, Width32>;
/// A tree addressed with 64-bit indices. Holds at most `u64::MAX` entries.
pub type Tree64<K, V> = Tree<K, V, Width64>;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;
