use avltree::{AvlTreeError, AvlTreeMap};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

const KEY_SPACE: i32 = 500;

fn assert_same_contents(tree: &AvlTreeMap<i32, String>, reference: &BTreeMap<i32, String>) {
    assert_eq!(tree.len(), reference.len());
    let ours: Vec<_> = tree.items().collect();
    let theirs: Vec<_> = reference.iter().collect();
    assert_eq!(ours, theirs);
}

#[test]
fn test_random_operations_match_btreemap() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut tree = AvlTreeMap::new();
        let mut reference = BTreeMap::new();

        for step in 0..2_000 {
            let key = rng.gen_range(0..KEY_SPACE);
            if rng.gen_bool(0.6) {
                let value = format!("value_{}_{}", key, step);
                let expected = if reference.contains_key(&key) {
                    Err(AvlTreeError::KeyAlreadyExists)
                } else {
                    reference.insert(key, value.clone());
                    Ok(())
                };
                assert_eq!(tree.insert(key, value), expected);
            } else {
                let expected = reference.remove(&key).ok_or(AvlTreeError::KeyNotFound);
                assert_eq!(tree.remove(&key), expected);
            }

            if let Err(e) = tree.validate() {
                panic!("seed {} step {}: {}", seed, step, e);
            }
        }

        assert_same_contents(&tree, &reference);
        for key in 0..KEY_SPACE {
            assert_eq!(tree.contains_key(&key), reference.contains_key(&key));
            assert_eq!(tree.get(&key).ok(), reference.get(&key));
        }
    }
}

#[test]
fn test_len_is_inserts_minus_removes() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut keys: Vec<i32> = (0..1_000).collect();
    keys.shuffle(&mut rng);

    let mut tree = AvlTreeMap::new();
    for &key in &keys {
        tree.insert(key, key.to_string()).unwrap();
    }
    keys.shuffle(&mut rng);
    for (removed, key) in keys.iter().take(400).enumerate() {
        tree.remove(key).unwrap();
        assert_eq!(tree.len(), 1_000 - removed - 1);
    }
    assert_eq!(tree.len(), 600);
    tree.validate().unwrap();
}

#[test]
fn test_inorder_always_ascending() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut tree = AvlTreeMap::new();

    for _ in 0..3_000 {
        let key = rng.gen_range(-1_000..1_000);
        if rng.gen_bool(0.7) {
            let _ = tree.insert(key, String::new());
        } else {
            let _ = tree.remove(&key);
        }
    }

    let mut previous: Option<i32> = None;
    tree.inorder(|k, _| {
        if let Some(p) = previous {
            assert!(p < *k, "{} visited before {}", p, k);
        }
        previous = Some(*k);
    });
}

#[test]
fn test_failed_operations_leave_tree_unchanged() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut tree = AvlTreeMap::new();
    let mut keys = Vec::new();
    while keys.len() < 200 {
        let key = rng.gen_range(0..KEY_SPACE);
        if tree.insert(key, format!("v{}", key)).is_ok() {
            keys.push(key);
        }
    }

    let before: Vec<_> = tree.items().map(|(k, v)| (*k, v.clone())).collect();

    for &key in keys.iter().take(50) {
        assert_eq!(
            tree.insert(key, "replacement".to_string()),
            Err(AvlTreeError::KeyAlreadyExists)
        );
    }
    for key in KEY_SPACE..KEY_SPACE + 50 {
        assert_eq!(tree.remove(&key), Err(AvlTreeError::KeyNotFound));
    }

    let after: Vec<_> = tree.items().map(|(k, v)| (*k, v.clone())).collect();
    assert_eq!(before, after);
    assert_eq!(tree.len(), 200);
    assert_eq!(tree.arena_stats().allocated_count, 200);
    tree.validate().unwrap();
}

#[test]
fn test_failed_operations_preserve_shape() {
    let mut tree = AvlTreeMap::new();
    let mut twin = AvlTreeMap::new();
    for key in [41, 17, 88, 3, 29, 64, 95, 22, 70] {
        tree.insert(key, ()).unwrap();
        twin.insert(key, ()).unwrap();
    }

    assert!(tree.insert(29, ()).is_err());
    assert!(tree.remove(&30).is_err());
    assert!(tree.batch_insert(vec![(1, ()), (64, ())]).is_err());

    assert_eq!(tree, twin);
}

#[test]
fn test_removing_everything_in_any_order_empties_tree() {
    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut keys: Vec<i32> = (0..300).collect();
        keys.shuffle(&mut rng);

        let mut tree = AvlTreeMap::new();
        for &key in &keys {
            tree.insert(key, key).unwrap();
        }

        keys.shuffle(&mut rng);
        for &key in &keys {
            assert_eq!(tree.remove(&key), Ok(key));
        }

        assert!(tree.is_empty());
        assert_eq!(tree.height(), -1);
        assert_eq!(tree.items().count(), 0);
        assert_eq!(tree.arena_stats().allocated_count, 0);
        assert_eq!(tree.leftmost_value(), Err(AvlTreeError::KeyNotFound));
    }
}

#[test]
fn test_leftmost_value_tracks_minimum() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut tree = AvlTreeMap::new();
    let mut reference = BTreeMap::new();

    for _ in 0..1_000 {
        let key = rng.gen_range(0..200);
        if rng.gen_bool(0.5) {
            if tree.insert(key, key * 2).is_ok() {
                reference.insert(key, key * 2);
            }
        } else if tree.remove(&key).is_ok() {
            reference.remove(&key);
        }

        let expected = reference.values().next().ok_or(AvlTreeError::KeyNotFound);
        assert_eq!(tree.leftmost_value(), expected);
    }
}

#[test]
fn test_height_stays_logarithmic() {
    let mut tree = AvlTreeMap::new();
    for key in 0..100_000 {
        tree.insert(key, ()).unwrap();
    }
    // AVL bound: h < 1.4405 * log2(n + 2) - 0.3277
    let bound = 1.4405 * ((100_000f64 + 2.0).log2()) - 0.3277;
    assert!((tree.height() as f64) < bound);
    println!("height after 100k ascending inserts: {}", tree.height());
}
