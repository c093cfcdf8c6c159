use super::*;
use crate::{Tree16, Tree32, Tree64};

#[test]
fn test_transform_widen_round_trips_contents() {
    let mut small: Tree16<i64, i64> = Tree::new();
    for k in 0..500 {
        small.insert(k, k * 3).unwrap();
    }
    small.validate().unwrap();

    let wide: Tree64<i64, i64> = small.transform().unwrap();
    assert_eq!(wide.size(), small.size());
    assert_eq!(wide.index_width(), IndexWidth::W64);
    wide.validate().unwrap();
    for k in 0..500 {
        assert_eq!(wide.search(&k), Some(&(k * 3)));
    }
}

#[test]
fn test_transform_narrow_fails_when_source_exceeds_target_max() {
    let mut wide: Tree32<i64, i64> = Tree::with_capacity(u16::MAX as u64 + 10).unwrap();
    for k in 0..(u16::MAX as i64 + 5) {
        wide.insert(k, k).unwrap();
    }
    let narrow: crate::Result<Tree16<i64, i64>> = wide.transform();
    assert!(narrow.is_err());
}

#[test]
fn test_transform_preserves_ordering() {
    let mut small: Tree16<i64, i64> = Tree::new();
    for k in [5, 1, 9, 3, 7] {
        small.insert(k, k).unwrap();
    }
    let wide: Tree32<i64, i64> = small.transform().unwrap();
    let collected: Vec<i64> = wide.iter().map(|(k, _)| *k).collect();
    assert_eq!(collected, vec![1, 3, 5, 7, 9]);
}
