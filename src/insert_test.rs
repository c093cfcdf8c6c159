use super::*;
use crate::Tree16;

#[test]
fn test_insert_overwrite_keeps_size() {
    let mut t: Tree16<i64, i64> = Tree::new();
    t.insert(1, 10).unwrap();
    t.insert(1, 20).unwrap();
    assert_eq!(t.size(), 1);
    assert_eq!(t.search(&1), Some(&20));
}

#[test]
fn test_sequential_insert_ascending_preserves_order() {
    let mut t: Tree16<i64, i64> = Tree::new();
    for k in 0..200 {
        t.insert(k, k * 2).unwrap();
    }
    assert_eq!(t.size(), 200);
    t.validate().unwrap();
    assert_eq!(t.min(), Some((&0, &0)));
    assert_eq!(t.max(), Some((&199, &398)));
}

#[test]
fn test_sequential_insert_descending_preserves_balance() {
    let mut t: Tree16<i64, i64> = Tree::new();
    for k in (0..200).rev() {
        t.insert(k, k).unwrap();
    }
    t.validate().unwrap();
    assert_eq!(t.size(), 200);
}

#[test]
fn test_insert_fails_at_width_capacity() {
    let mut t: Tree<i64, i64, u16> = Tree::with_capacity(4).unwrap();
    for k in 0..(u16::MAX as i64 + 10) {
        if t.insert(k, k).is_err() {
            assert_eq!(t.size(), u16::MAX as usize);
            return;
        }
    }
    panic!("expected CapacityExceeded before exhausting i64 key space");
}

#[test]
fn test_insert_grows_backing_array() {
    let mut t: Tree16<i64, i64> = Tree::with_capacity(1).unwrap();
    assert_eq!(t.capacity(), 1);
    for k in 0..100 {
        t.insert(k, k).unwrap();
    }
    assert!(t.capacity() >= 100);
    t.validate().unwrap();
}
