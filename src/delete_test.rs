use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;
use crate::Tree32;

#[test]
fn test_delete_absent_key_returns_false() {
    let mut t: Tree32<i64, i64> = Tree::new();
    t.insert(1, 1).unwrap();
    assert!(!t.delete(&2));
    assert_eq!(t.size(), 1);
}

#[test]
fn test_delete_present_key_then_search_none() {
    let mut t: Tree32<i64, i64> = Tree::new();
    t.insert(1, 10).unwrap();
    assert!(t.delete(&1));
    assert_eq!(t.search(&1), None);
    assert_eq!(t.size(), 0);
}

#[test]
fn test_delete_keeps_density() {
    let mut t: Tree32<i64, i64> = Tree::new();
    for k in 0..100 {
        t.insert(k, k).unwrap();
    }
    for k in (0..100).step_by(3) {
        assert!(t.delete(&k));
    }
    assert_eq!(t.size(), 100 - (0..100).step_by(3).count());
    t.validate().unwrap();
}

#[test]
fn test_delete_root_with_two_children() {
    let mut t: Tree32<i64, i64> = Tree::new();
    for k in [10, 5, 15, 3, 7, 12, 20] {
        t.insert(k, k).unwrap();
    }
    // whichever key ends up at the root, removing it exercises the
    // two-children successor-copy path.
    for k in [10, 15, 5] {
        t.delete(&k);
        t.validate().unwrap();
    }
}

#[test]
fn test_insert_delete_interleaved_matches_btreemap() {
    use std::collections::BTreeMap;

    let seed: u64 = rand::random();
    let mut rng = SmallRng::seed_from_u64(seed);
    println!("seed {}", seed);

    let mut t: Tree32<i64, i64> = Tree::new();
    let mut oracle: BTreeMap<i64, i64> = BTreeMap::new();

    for _ in 0..1000 {
        let key = rng.gen::<i64>().abs() % 200;
        if rng.gen_bool(0.5) {
            t.insert(key, key).unwrap();
            oracle.insert(key, key);
        } else {
            assert_eq!(t.delete(&key), oracle.remove(&key).is_some());
        }
        t.validate().unwrap();
    }
    assert_eq!(t.size(), oracle.len());
}
