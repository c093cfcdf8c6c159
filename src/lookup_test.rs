use super::*;
use crate::Tree32;

fn fixture() -> Tree32<i64, &'static str> {
    let mut t: Tree32<i64, &'static str> = Tree::new();
    for (k, v) in [(10, "ten"), (5, "five"), (20, "twenty"), (15, "fifteen")] {
        t.insert(k, v).unwrap();
    }
    t
}

#[test]
fn test_search_present_and_absent() {
    let t = fixture();
    assert_eq!(t.search(&10), Some(&"ten"));
    assert_eq!(t.search(&11), None);
    assert!(t.contains_key(&5));
    assert!(!t.contains_key(&6));
}

#[test]
fn test_search_mut_updates_value() {
    let mut t = fixture();
    *t.search_mut(&10).unwrap() = "TEN";
    assert_eq!(t.search(&10), Some(&"TEN"));
}

#[test]
fn test_min_max_empty() {
    let t: Tree32<i64, i64> = Tree::new();
    assert_eq!(t.min(), None);
    assert_eq!(t.max(), None);
}

#[test]
fn test_min_max_present() {
    let t = fixture();
    assert_eq!(t.min(), Some((&5, &"five")));
    assert_eq!(t.max(), Some((&20, &"twenty")));
}

#[test]
fn test_floor_and_ceiling() {
    let t = fixture();
    assert_eq!(t.floor(&12), Some((&10, &"ten")));
    assert_eq!(t.floor(&10), Some((&5, &"five")));
    assert_eq!(t.floor(&4), None);
    assert_eq!(t.ceiling(&12), Some((&15, &"fifteen")));
    assert_eq!(t.ceiling(&20), None);
    assert_eq!(t.ceiling(&3), Some((&5, &"five")));
}
