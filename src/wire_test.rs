use super::*;
use crate::Tree32;

#[test]
fn test_to_bytes_from_bytes_round_trip() {
    let mut t: Tree32<u64, u64> = Tree::new();
    for k in 0..300u64 {
        t.insert(k, k * k).unwrap();
    }
    t.validate().unwrap();

    let image = t.to_bytes();
    let restored: Tree32<u64, u64> = Tree::from_bytes(&image).unwrap();

    assert_eq!(restored.size(), t.size());
    restored.validate().unwrap();
    for k in 0..300u64 {
        assert_eq!(restored.search(&k), Some(&(k * k)));
    }
}

#[test]
fn test_set_backing_adopts_same_width_image() {
    let mut source: Tree32<u64, String> = Tree::new();
    source.insert(1, "one".to_string()).unwrap();
    source.insert(2, "two".to_string()).unwrap();
    let image = source.to_bytes();

    let mut target: Tree32<u64, String> = Tree::new();
    target.insert(99, "stale".to_string()).unwrap();
    target.set_backing(&image).unwrap();

    assert_eq!(target.size(), 2);
    assert_eq!(target.search(&1), Some(&"one".to_string()));
    assert!(!target.contains_key(&99));
}

#[test]
fn test_set_backing_rejects_width_mismatch() {
    let mut source: crate::Tree16<u64, u64> = Tree::new();
    source.insert(1, 1).unwrap();
    let image = source.to_bytes();

    let mut target: Tree32<u64, u64> = Tree::new();
    let err = target.set_backing(&image).unwrap_err();
    assert_eq!(
        err,
        crate::Error::WidthMismatch {
            expected: IndexWidth::W32,
            found: IndexWidth::W16,
        }
    );
    // unchanged on failure
    assert_eq!(target.size(), 0);
}

#[test]
fn test_from_bytes_rejects_truncated_image() {
    let mut source: Tree32<u64, u64> = Tree::new();
    for k in 0..50u64 {
        source.insert(k, k).unwrap();
    }
    let image = source.to_bytes();
    let truncated = &image[..image.len() - 5];
    assert!(Tree32::<u64, u64>::from_bytes(truncated).is_err());
}

#[test]
fn test_codec_string_round_trip() {
    let s = "hello, rbarena".to_string();
    let mut buf = Vec::new();
    s.encode(&mut buf);
    let (decoded, used) = String::decode(&buf).unwrap();
    assert_eq!(decoded, s);
    assert_eq!(used, buf.len());
}
