//! INSERT operations for AvlTreeMap.
//!
//! This module contains the insertion operations for the AVL tree: leaf
//! placement, upward height propagation, and the single corrective rotation
//! an insertion can need. It also carries the validated and batch variants.

use crate::error::{AvlTreeError, ModifyResult};
use crate::types::{AvlTreeMap, Node, NodeId};
use std::cmp::Ordering;
use std::collections::BTreeSet;

impl<K: Ord, V> AvlTreeMap<K, V> {
    /// Insert a new key-value pair.
    ///
    /// Fails with `KeyAlreadyExists` if the key is present; the duplicate is
    /// detected before anything is allocated or relinked, so the tree is left
    /// exactly as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::{AvlTreeMap, AvlTreeError};
    ///
    /// let mut tree = AvlTreeMap::new();
    /// assert!(tree.insert(1, "one").is_ok());
    /// assert_eq!(tree.insert(1, "uno"), Err(AvlTreeError::KeyAlreadyExists));
    /// assert_eq!(tree.get(&1), Ok(&"one"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> ModifyResult<()> {
        let Some(mut current) = self.root else {
            let id = self.arena.allocate(Node::new(key, value));
            self.root = Some(id);
            self.len += 1;
            return Ok(());
        };

        let (parent, goes_left) = loop {
            let node = &self.arena[current];
            let next = match key.cmp(&node.key) {
                Ordering::Equal => return Err(AvlTreeError::KeyAlreadyExists),
                Ordering::Less => node.left.ok_or(true),
                Ordering::Greater => node.right.ok_or(false),
            };
            match next {
                Ok(child) => current = child,
                Err(goes_left) => break (current, goes_left),
            }
        };

        let id = self.attach_leaf(parent, goes_left, Node::new(key, value));
        self.len += 1;
        self.rebalance_after_insert(id);
        Ok(())
    }

    /// Insert with full invariant validation before and after.
    pub fn try_insert(&mut self, key: K, value: V) -> ModifyResult<()> {
        self.validate_for_operation("insert")?;
        self.insert(key, value)?;
        self.validate_for_operation("insert")
    }

    /// Insert every pair, or none of them.
    ///
    /// All keys are checked against the tree and against each other before
    /// the first insertion, so a failed batch leaves the tree untouched,
    /// shape included.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::{AvlTreeMap, AvlTreeError};
    ///
    /// let mut tree = AvlTreeMap::new();
    /// tree.insert(3, "c").unwrap();
    ///
    /// let result = tree.batch_insert(vec![(1, "a"), (3, "again")]);
    /// assert_eq!(result, Err(AvlTreeError::KeyAlreadyExists));
    /// assert_eq!(tree.len(), 1);
    ///
    /// tree.batch_insert(vec![(1, "a"), (2, "b")]).unwrap();
    /// assert_eq!(tree.len(), 3);
    /// ```
    pub fn batch_insert(&mut self, items: Vec<(K, V)>) -> ModifyResult<()> {
        let mut seen = BTreeSet::new();
        for (key, _) in &items {
            if self.contains_key(key) || !seen.insert(key) {
                return Err(AvlTreeError::KeyAlreadyExists);
            }
        }
        drop(seen);

        for (key, value) in items {
            self.insert(key, value)?;
        }
        Ok(())
    }

    // ============================================================================
    // HELPERS FOR INSERT OPERATIONS
    // ============================================================================

    /// Allocate `node` and hang it off `parent`'s empty slot.
    fn attach_leaf(&mut self, parent: NodeId, goes_left: bool, node: Node<K, V>) -> NodeId {
        let id = self.arena.allocate(node);
        self.arena[id].parent = Some(parent);
        if goes_left {
            self.arena[parent].left = Some(id);
        } else {
            self.arena[parent].right = Some(id);
        }
        id
    }

    /// Walk up from a fresh leaf raising ancestor heights.
    ///
    /// Stops at the first ancestor whose height does not grow. The first
    /// ancestor that goes out of balance gets one rotation, which restores the
    /// subtree to its pre-insertion height, so the walk stops there as well.
    fn rebalance_after_insert(&mut self, leaf: NodeId) {
        let mut child = leaf;

        while let Some(parent) = self.arena[child].parent {
            let grown = self.arena[child].height + 1;
            if self.arena[parent].height >= grown {
                break;
            }
            self.arena[parent].height = grown;

            if self.balance_factor(parent).abs() == 2 {
                self.rebalance_node(parent);
                break;
            }
            child = parent;
        }
    }
}
