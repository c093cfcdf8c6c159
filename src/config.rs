//! Construction configuration, in the teacher's builder-struct style
//! (compare `bubt_config::Config`): a plain struct with setter methods
//! that consume and return `self`, rather than a constructor taking a
//! long positional argument list.

use crate::header::IndexWidth;
use crate::idx::Idx;
use crate::tree::{Tree, DEFAULT_CAPACITY};

/// Configuration for constructing a [`Tree`]. `Tree::new`/`with_capacity`
/// remain available for the common case; `Config` is for callers who want
/// to set capacity and index width together before allocating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub(crate) capacity: u64,
    pub(crate) index_width: IndexWidth,
}

impl Config {
    /// A config for `index_width` at the default capacity (256, clamped to
    /// the width's maximum).
    pub fn new(index_width: IndexWidth) -> Config {
        Config {
            capacity: DEFAULT_CAPACITY.min(index_width.max_count()),
            index_width,
        }
    }

    /// Override the initial capacity.
    pub fn set_capacity(mut self, capacity: u64) -> Config {
        self.capacity = capacity;
        self
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn index_width(&self) -> IndexWidth {
        self.index_width
    }
}

impl<K, V, Ix: Idx> Tree<K, V, Ix>
where
    K: Ord + Clone,
    V: Clone,
{
    /// Construct an empty tree from a [`Config`]. Fails with
    /// [`crate::Error::WidthMismatch`] if `config.index_width()` does not
    /// match `Ix`, or with [`crate::Error::CapacityExceeded`] per the usual
    /// `with_capacity` rules.
    pub fn from_config(config: Config) -> crate::Result<Self> {
        if config.index_width != Ix::WIDTH {
            return Err(crate::Error::WidthMismatch {
                expected: Ix::WIDTH,
                found: config.index_width,
            });
        }
        Self::with_capacity(config.capacity)
    }
}
