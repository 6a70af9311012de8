//! GET operations for AvlTreeMap.
//!
//! This module contains the read operations for the AVL tree: the BST
//! descent shared by every point operation, value lookup, and the leftmost
//! entry accessors.

use crate::error::{AvlTreeError, KeyResult};
use crate::types::{AvlTreeMap, NodeId};
use std::cmp::Ordering;

impl<K: Ord, V> AvlTreeMap<K, V> {
    // ============================================================================
    // PUBLIC GET OPERATIONS
    // ============================================================================

    /// Get a reference to the value associated with a key.
    ///
    /// The reference is valid until the next mutation of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::{AvlTreeMap, AvlTreeError};
    ///
    /// let mut tree = AvlTreeMap::new();
    /// tree.insert(1, "one").unwrap();
    /// assert_eq!(tree.get(&1), Ok(&"one"));
    /// assert_eq!(tree.get(&2), Err(AvlTreeError::KeyNotFound));
    /// ```
    pub fn get(&self, key: &K) -> KeyResult<&V> {
        self.find_node(key)
            .map(|id| &self.arena[id].value)
            .ok_or(AvlTreeError::KeyNotFound)
    }

    /// Get a mutable reference to the value for a key.
    ///
    /// The value is the only part of an entry that may change in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTreeMap;
    ///
    /// let mut tree = AvlTreeMap::new();
    /// tree.insert(1, "one").unwrap();
    /// *tree.get_mut(&1).unwrap() = "ONE";
    /// assert_eq!(tree.get(&1), Ok(&"ONE"));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> KeyResult<&mut V> {
        let id = self.find_node(key).ok_or(AvlTreeError::KeyNotFound)?;
        Ok(&mut self.arena[id].value)
    }

    /// Check if key exists in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTreeMap;
    ///
    /// let mut tree = AvlTreeMap::new();
    /// tree.insert(1, "one").unwrap();
    /// assert!(tree.contains_key(&1));
    /// assert!(!tree.contains_key(&2));
    /// ```
    pub fn contains_key(&self, key: &K) -> bool {
        self.find_node(key).is_some()
    }

    // ============================================================================
    // PRIVATE HELPER METHODS FOR GET OPERATIONS
    // ============================================================================

    /// Descend from the root comparing against each node's key.
    pub(crate) fn find_node(&self, key: &K) -> Option<NodeId> {
        let mut current = self.root;

        while let Some(id) = current {
            let node = &self.arena[id];
            current = match key.cmp(&node.key) {
                Ordering::Equal => return Some(id),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }

        None
    }
}

impl<K, V> AvlTreeMap<K, V> {
    /// Value of the minimum-key entry, reached by following `left` links from
    /// the root.
    ///
    /// Returns `KeyNotFound` on an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTreeMap;
    ///
    /// let mut tree = AvlTreeMap::new();
    /// assert!(tree.leftmost_value().is_err());
    ///
    /// for key in [5, 3, 8, 1] {
    ///     tree.insert(key, key * 10).unwrap();
    /// }
    /// assert_eq!(tree.leftmost_value(), Ok(&10));
    /// ```
    pub fn leftmost_value(&self) -> KeyResult<&V> {
        self.leftmost_id()
            .map(|id| &self.arena[id].value)
            .ok_or(AvlTreeError::KeyNotFound)
    }

    /// Returns the minimum-key entry.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.leftmost_id().map(|id| {
            let node = &self.arena[id];
            (&node.key, &node.value)
        })
    }

    /// Get the ID of the leftmost node of the whole tree
    pub(crate) fn leftmost_id(&self) -> Option<NodeId> {
        self.root.map(|root| self.leftmost_from(root))
    }

    /// Follow `left` links starting at `id` until none remains.
    pub(crate) fn leftmost_from(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(left) = self.arena[current].left {
            current = left;
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> AvlTreeMap<i32, String> {
        let mut tree = AvlTreeMap::new();
        for key in [50, 30, 70, 20, 40, 60, 80] {
            tree.insert(key, format!("value_{}", key)).unwrap();
        }
        tree
    }

    #[test]
    fn test_get_existing_and_missing() {
        let tree = sample_tree();
        assert_eq!(tree.get(&40).map(String::as_str), Ok("value_40"));
        assert_eq!(tree.get(&45), Err(AvlTreeError::KeyNotFound));
    }

    #[test]
    fn test_find_node_on_empty_tree() {
        let tree = AvlTreeMap::<i32, ()>::new();
        assert_eq!(tree.find_node(&1), None);
        assert!(!tree.contains_key(&1));
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut tree = sample_tree();
        tree.get_mut(&60).unwrap().push_str("_changed");
        assert_eq!(tree.get(&60).map(String::as_str), Ok("value_60_changed"));
        assert_eq!(tree.get_mut(&65), Err(AvlTreeError::KeyNotFound));
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn test_leftmost_value_and_first() {
        let tree = sample_tree();
        assert_eq!(tree.leftmost_value().map(String::as_str), Ok("value_20"));
        assert_eq!(tree.first().map(|(k, _)| *k), Some(20));
    }

    #[test]
    fn test_leftmost_value_on_empty_tree() {
        let tree = AvlTreeMap::<i32, i32>::new();
        assert_eq!(tree.leftmost_value(), Err(AvlTreeError::KeyNotFound));
        assert_eq!(tree.first(), None);
    }
}
