use super::*;
use crate::Tree32;

fn fixture() -> Tree32<i64, i64> {
    let mut t: Tree32<i64, i64> = Tree::new();
    for k in [5, 1, 9, 3, 7] {
        t.insert(k, k * 10).unwrap();
    }
    t
}

#[test]
fn test_ordered_iter_ascending() {
    let t = fixture();
    let collected: Vec<i64> = t.iter().map(|(k, _)| *k).collect();
    assert_eq!(collected, vec![1, 3, 5, 7, 9]);
}

#[test]
fn test_ordered_iter_double_ended() {
    let t = fixture();
    let mut it = t.iter();
    assert_eq!(it.next(), Some((&1, &10)));
    assert_eq!(it.next_back(), Some((&9, &90)));
    assert_eq!(it.next_back(), Some((&7, &70)));
    assert_eq!(it.next(), Some((&3, &30)));
    assert_eq!(it.next(), Some((&5, &50)));
    assert_eq!(it.next(), None);
    assert_eq!(it.next_back(), None);
}

#[test]
fn test_ordered_iter_empty() {
    let t: Tree32<i64, i64> = Tree::new();
    assert_eq!(t.iter().next(), None);
}

#[test]
fn test_ordered_cursor_advance_retreat_sticky_flags() {
    let t = fixture();
    let mut c = t.ordered_cursor();
    assert_eq!(c.current(), None);
    c.advance();
    assert_eq!(c.current(), Some((&1, &10)));
    for _ in 0..4 {
        c.advance();
    }
    assert_eq!(c.current(), Some((&9, &90)));
    c.advance();
    assert_eq!(c.current(), None, "advancing past the max sets after_end");
    c.advance();
    assert_eq!(c.current(), None, "advancing again from after_end is a no-op");

    c.retreat();
    assert_eq!(
        c.current(),
        Some((&9, &90)),
        "retreating from after_end jumps to the maximum"
    );
}

#[test]
fn test_ordered_cursor_equality() {
    let t = fixture();
    let mut a = t.ordered_cursor();
    let mut b = t.ordered_cursor();
    assert_eq!(a, b);
    a.advance();
    assert_ne!(a, b);
    b.advance();
    assert_eq!(a, b);
}

#[test]
fn test_unordered_cursor_slot_order_and_before_begin() {
    let t = fixture();
    let mut c = t.unordered_cursor();
    assert_eq!(c.current(), Some((&5, &50)), "slots in insertion order");
    c.retreat();
    assert_eq!(c.current(), None, "retreating past the first slot is sticky");
    c.retreat();
    assert_eq!(c.current(), None);
    c.advance();
    assert_eq!(c.current(), Some((&5, &50)));
}
