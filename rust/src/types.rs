//! Core types and data structures for AvlTreeMap.
//!
//! This module contains the fundamental data structures, type definitions,
//! and constants used throughout the AVL tree implementation.

use crate::arena::NodeArena;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Height of an absent subtree. Only ever used in arithmetic, never stored.
pub const EMPTY_HEIGHT: i32 = -1;

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

/// Node ID type for arena-based allocation
pub type NodeId = u32;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Height-balanced (AVL) ordered map with a dict-like API.
///
/// Every node keeps the difference between the heights of its two subtrees
/// in {-1, 0, 1}, which bounds the tree height by ~1.44 log2(n) and makes
/// search, insertion and deletion O(log n) in the worst case.
///
/// # Type Parameters
///
/// * `K` - Key type, must implement `Ord`
/// * `V` - Value type, no bounds
///
/// # Examples
///
/// ```
/// use avltree::AvlTreeMap;
///
/// let mut tree = AvlTreeMap::new();
/// tree.insert(2, "two").unwrap();
/// tree.insert(1, "one").unwrap();
/// tree.insert(3, "three").unwrap();
///
/// assert_eq!(tree.get(&2), Ok(&"two"));
/// assert_eq!(tree.len(), 3);
/// assert!(tree.insert(2, "again").is_err());
///
/// let keys: Vec<_> = tree.keys().copied().collect();
/// assert_eq!(keys, [1, 2, 3]);
/// ```
///
/// # Equality
///
/// `==` is *structural*: two maps are equal only if they have the same shape,
/// the same keys in the same positions and the same cached heights. The same
/// set of entries inserted in a different order may produce a different shape
/// and compare unequal. See [`AvlTreeMap::structural_eq`].
///
/// # Performance Characteristics
///
/// - **Insertion**: O(log n), at most one rotation
/// - **Lookup**: O(log n)
/// - **Deletion**: O(log n), up to O(log n) rotations
/// - **Iteration**: O(n)
#[derive(Debug)]
pub struct AvlTreeMap<K, V> {
    /// The root node of the tree.
    pub(crate) root: Option<NodeId>,
    /// Number of stored entries.
    pub(crate) len: usize,
    /// Arena that owns every node of the tree.
    pub(crate) arena: NodeArena<Node<K, V>>,
}

/// A single key-value entry and its position in the tree.
///
/// `left` and `right` define the tree. `parent` is a back-reference used for
/// upward rebalancing only; it never owns anything.
#[derive(Debug, Clone)]
pub struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) parent: Option<NodeId>,
    /// Cached height of the subtree rooted here; 0 for a leaf.
    pub(crate) height: i32,
}

// ============================================================================
// ENUMS
// ============================================================================

/// The four rebalancing cases, named after the path from the unbalanced
/// node down to the inserted/heavier grandchild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// Left child's left subtree is heavy: single right rotation.
    LeftLeft,
    /// Left child's right subtree is heavy: left then right rotation.
    LeftRight,
    /// Right child's left subtree is heavy: right then left rotation.
    RightLeft,
    /// Right child's right subtree is heavy: single left rotation.
    RightRight,
}

impl Rotation {
    /// Returns true for the two cases that need a double rotation.
    pub fn is_double(self) -> bool {
        matches!(self, Rotation::LeftRight | Rotation::RightLeft)
    }
}
