use avltree::AvlTreeMap;
use paste::paste;

fn build(keys: &[i32]) -> AvlTreeMap<i32, i32> {
    let mut tree = AvlTreeMap::new();
    for &key in keys {
        tree.insert(key, key * 10).unwrap();
    }
    tree
}

fn preorder(tree: &AvlTreeMap<i32, i32>) -> Vec<i32> {
    let mut keys = Vec::new();
    tree.preorder(|k, _| keys.push(*k));
    keys
}

/// Generates one test per insertion scenario: insert `keys` in order, then
/// check the resulting shape (as a preorder listing) and the root height.
macro_rules! insertion_case {
    ($name:ident: [$($key:expr),+] => [$($expected:expr),+], height $height:expr) => {
        paste! {
            #[test]
            fn [<test_insert_ $name>]() {
                let tree = build(&[$($key),+]);
                assert_eq!(preorder(&tree), vec![$($expected),+]);
                assert_eq!(tree.height(), $height);
                tree.validate().unwrap();
            }
        }
    };
}

/// Same as `insertion_case!`, followed by a removal.
macro_rules! removal_case {
    ($name:ident: [$($key:expr),+], remove $removed:expr => [$($expected:expr),+]) => {
        paste! {
            #[test]
            fn [<test_remove_ $name>]() {
                let mut tree = build(&[$($key),+]);
                assert_eq!(tree.remove(&$removed), Ok($removed * 10));
                assert_eq!(preorder(&tree), vec![$($expected),+]);
                tree.validate().unwrap();
            }
        }
    };
}

insertion_case!(left_left: [30, 20, 10] => [20, 10, 30], height 1);
insertion_case!(left_right: [30, 10, 20] => [20, 10, 30], height 1);
insertion_case!(right_left: [10, 30, 20] => [20, 10, 30], height 1);
insertion_case!(right_right: [10, 20, 30] => [20, 10, 30], height 1);

insertion_case!(left_left_with_subtrees: [50, 30, 70, 20, 40, 10] => [30, 20, 10, 50, 40, 70], height 2);
insertion_case!(left_right_with_subtrees: [50, 30, 70, 20, 40, 45] => [40, 30, 20, 50, 45, 70], height 2);
insertion_case!(right_left_with_subtrees: [50, 30, 70, 60, 80, 55] => [60, 50, 30, 55, 70, 80], height 2);
insertion_case!(right_right_with_subtrees: [50, 30, 70, 60, 80, 90] => [70, 50, 30, 60, 80, 90], height 2);

removal_case!(rotation_after_leaf_delete: [10, 30, 20, 40, 50], remove 10 => [40, 20, 30, 50]);
removal_case!(
    rotations_on_two_levels: [21, 10, 26, 4, 5, 7, 24, 36, 30, 17, 34, 2], remove 26
        => [10, 5, 4, 2, 7, 24, 21, 17, 34, 30, 36]
);
removal_case!(two_children_root: [4, 2, 6, 1, 3, 5, 7], remove 4 => [5, 2, 1, 3, 6, 7]);

#[test]
fn test_single_rotation_leaves_are_height_zero() {
    let tree = build(&[30, 20, 10]);
    assert_eq!(tree.height(), 1);
    // Removing either leaf must not change the root's height.
    for leaf in [10, 30] {
        let mut copy = build(&[30, 20, 10]);
        copy.remove(&leaf).unwrap();
        assert_eq!(copy.height(), 1);
        copy.validate().unwrap();
    }
}

#[test]
fn test_two_level_removal_changes_root() {
    let mut tree = build(&[21, 10, 26, 4, 5, 7, 24, 36, 30, 17, 34, 2]);
    assert_eq!(preorder(&tree)[0], 24);
    tree.remove(&26).unwrap();
    assert_eq!(preorder(&tree)[0], 10);
    assert_eq!(tree.len(), 11);
}
