use std::fmt;

use serde::{Deserialize, Serialize};

use crate::header::IndexWidth;

/// Errors returned by [`crate::Tree`] operations.
///
/// Lookups never error: a missing key is reported as `None`/`false`, not an
/// `Error`. These variants cover capacity limits, allocation failure, and
/// the diagnostic checks run by [`crate::Tree::validate`].
///
/// Carries `Serialize`/`Deserialize` (like [`IndexWidth`]) purely for
/// logging/diagnostics call sites that want to hand an `Error` to a
/// structured-log sink; it is never used to encode the tree image itself.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub enum Error {
    /// Requested capacity, or live count after an operation, would exceed
    /// `MAX_COUNT` for the tree's index width.
    CapacityExceeded { requested: u64, max: u64 },
    /// The backing allocation could not be grown or created.
    AllocFail(String),
    /// `set_backing` was called with an image whose index width does not
    /// match the receiving tree's. Use `transform` to cross widths.
    WidthMismatch { expected: IndexWidth, found: IndexWidth },
    /// A bulk-delete predicate could not be evaluated consistently.
    InvalidPredicate(String),
    /// `validate()` found a red node with a red child.
    ConsecutiveReds,
    /// `validate()` found two root-to-NIL paths with differing black-height.
    UnbalancedBlacks(usize, usize),
    /// `validate()` found a key out of BST order; holds debug strings for
    /// the two keys on either side of the violated ordering.
    SortError(String, String),
    /// `validate()` found a non-NIL link that does not target a live slot.
    DanglingLink(u64),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CapacityExceeded { requested, max } => write!(
                f,
                "capacity exceeded: requested {}, max {}",
                requested, max
            ),
            Error::AllocFail(msg) => write!(f, "allocation failed: {}", msg),
            Error::WidthMismatch { expected, found } => write!(
                f,
                "index width mismatch: expected {:?}, found {:?}",
                expected, found
            ),
            Error::InvalidPredicate(msg) => write!(f, "invalid predicate: {}", msg),
            Error::ConsecutiveReds => write!(f, "red node with a red child"),
            Error::UnbalancedBlacks(l, r) => {
                write!(f, "unbalanced black-height: left {}, right {}", l, r)
            }
            Error::SortError(a, b) => write!(f, "bst order violated between {} and {}", a, b),
            Error::DanglingLink(idx) => write!(f, "link targets non-live slot {}", idx),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod error_test {
    use super::*;

    // Confirms the `Serialize`/`Deserialize` derive is actually wired up
    // (SPEC_FULL.md §6's diagnostics bullet), not just declared.
    #[test]
    fn test_error_json_round_trip() {
        let err = Error::CapacityExceeded {
            requested: 70_000,
            max: u16::MAX as u64,
        };
        let json = serde_json::to_string(&err).unwrap();
        let back: Error = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);

        let width_err = Error::WidthMismatch {
            expected: IndexWidth::W32,
            found: IndexWidth::W16,
        };
        let json = serde_json::to_string(&width_err).unwrap();
        assert_eq!(
            serde_json::from_str::<Error>(&json).unwrap(),
            width_err
        );
    }
}
