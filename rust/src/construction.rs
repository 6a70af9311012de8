//! Construction logic for AvlTreeMap.
//!
//! The only tunable is the initial arena capacity; everything else about the
//! tree's shape is determined by the balancing rules.

use crate::arena::NodeArena;
use crate::types::AvlTreeMap;

impl<K, V> AvlTreeMap<K, V> {
    /// Creates an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTreeMap;
    ///
    /// let tree = AvlTreeMap::<i32, String>::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            root: None,
            len: 0,
            arena: NodeArena::new(),
        }
    }

    /// Creates an empty tree with room for `capacity` nodes before the
    /// arena has to grow.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTreeMap;
    ///
    /// let tree = AvlTreeMap::<i32, String>::with_capacity(1024);
    /// assert!(tree.arena_stats().total_capacity >= 1024);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            root: None,
            len: 0,
            arena: NodeArena::with_capacity(capacity),
        }
    }
}

impl<K, V> Default for AvlTreeMap<K, V> {
    /// Create an empty tree.
    fn default() -> Self {
        Self::new()
    }
}
