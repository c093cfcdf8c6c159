use super::*;
use crate::Tree16;

#[test]
fn test_entry_miss_inserts_default() {
    let mut t: Tree16<i64, i64> = Tree::new();
    let v = t.entry(5).unwrap();
    assert_eq!(*v, 0);
    *v = 42;
    assert_eq!(t.size(), 1);
    assert_eq!(t.search(&5), Some(&42));
}

#[test]
fn test_entry_hit_returns_existing_without_mutating_structure() {
    let mut t: Tree16<i64, i64> = Tree::new();
    t.insert(5, 99).unwrap();
    assert_eq!(t.size(), 1);

    let v = t.entry(5).unwrap();
    assert_eq!(*v, 99, "entry on a present key returns the existing value");
    assert_eq!(t.size(), 1, "entry on a present key must not insert");
    assert_eq!(t.search(&5), Some(&99));
}

#[test]
fn test_entry_capacity_exceeded_leaves_tree_unchanged() {
    let mut t: Tree<i64, i64, u16> = Tree::with_capacity(4).unwrap();
    // fill to the width's MAX_COUNT so no free slot remains for a new key.
    for k in 0..(u16::MAX as i64) {
        t.insert(k, k).unwrap();
    }
    assert_eq!(t.size(), u16::MAX as usize);

    let before = t.size();
    let err = t.entry(-1).unwrap_err();
    assert!(matches!(err, crate::Error::CapacityExceeded { .. }));
    assert_eq!(
        t.size(),
        before,
        "tree must be left unchanged when entry fails to insert"
    );
    assert!(!t.contains_key(&-1));
}
