//! DELETE operations for AvlTreeMap.
//!
//! This module contains the removal operations for the AVL tree: successor
//! splicing for two-child nodes, unlinking, and the upward rebalancing walk
//! that may rotate at several levels.

use crate::error::{AvlTreeError, ModifyResult};
use crate::types::{AvlTreeMap, NodeId};

impl<K: Ord, V> AvlTreeMap<K, V> {
    /// Remove a key and return its value.
    ///
    /// Fails with `KeyNotFound`, leaving the tree untouched, if the key is
    /// absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::{AvlTreeMap, AvlTreeError};
    ///
    /// let mut tree = AvlTreeMap::new();
    /// tree.insert(1, "one").unwrap();
    /// assert_eq!(tree.remove(&1), Ok("one"));
    /// assert_eq!(tree.remove(&1), Err(AvlTreeError::KeyNotFound));
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, key: &K) -> ModifyResult<V> {
        let target = self.find_node(key).ok_or(AvlTreeError::KeyNotFound)?;

        if self.arena[target].has_two_children() {
            self.swap_with_successor(target);
        }

        let parent = self.unlink(target);
        let removed = self
            .arena
            .deallocate(target)
            .ok_or_else(|| AvlTreeError::corrupted_tree("Arena", "removed node was not live"))?;
        self.len -= 1;

        self.rebalance_after_remove(parent);
        Ok(removed.value)
    }

    /// Remove with full invariant validation before and after.
    pub fn try_remove(&mut self, key: &K) -> ModifyResult<V> {
        self.validate_for_operation("remove")?;
        let value = self.remove(key)?;
        self.validate_for_operation("remove")?;
        Ok(value)
    }
}

impl<K, V> AvlTreeMap<K, V> {
    /// Drop every entry.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    // ============================================================================
    // HELPERS FOR DELETE OPERATIONS
    // ============================================================================

    /// Exchange the tree positions of `target` and its in-order successor.
    ///
    /// Only links move; keys and values stay in their nodes. Afterwards
    /// `target` sits where the successor was, with the successor's old right
    /// subtree as its only child. Cached heights are swapped too, so every
    /// node still carries the correct height for the position it occupies.
    fn swap_with_successor(&mut self, target: NodeId) {
        let (Some(target_left), Some(target_right)) =
            (self.arena[target].left, self.arena[target].right)
        else {
            return;
        };
        let successor = self.leftmost_from(target_right);

        let target_parent = self.arena[target].parent;
        let successor_right = self.arena[successor].right;

        if successor == target_right {
            self.arena[successor].right = Some(target);
            self.arena[target].parent = Some(successor);
        } else {
            let successor_parent = self.arena[successor].parent;
            self.arena[target].parent = successor_parent;
            if let Some(sp) = successor_parent {
                self.arena[sp].left = Some(target);
            }
            self.arena[successor].right = Some(target_right);
            self.arena[target_right].parent = Some(successor);
        }

        self.arena[successor].parent = target_parent;
        self.replace_child(target_parent, target, Some(successor));

        self.arena[successor].left = Some(target_left);
        self.arena[target_left].parent = Some(successor);

        self.arena[target].left = None;
        self.arena[target].right = successor_right;
        self.set_parent(successor_right, Some(target));

        let target_height = self.arena[target].height;
        self.arena[target].height = self.arena[successor].height;
        self.arena[successor].height = target_height;
    }

    /// Detach a node with at most one child, linking that child to the
    /// node's parent. Returns the former parent.
    fn unlink(&mut self, id: NodeId) -> Option<NodeId> {
        let node = &self.arena[id];
        debug_assert!(!node.has_two_children());
        let parent = node.parent;
        let child = node.single_child();

        self.set_parent(child, parent);
        self.replace_child(parent, id, child);
        parent
    }

    /// Walk up from the parent of the unlinked node.
    ///
    /// At each ancestor: recompute height, rotate if out of balance, then
    /// stop if the subtree root ends up with the height it had before. A
    /// rotation can shrink a subtree by one, so the walk keeps going past it.
    fn rebalance_after_remove(&mut self, start: Option<NodeId>) {
        let mut current = start;

        while let Some(id) = current {
            let previous_height = self.arena[id].height;
            let parent = self.arena[id].parent;

            self.update_height(id);
            let subtree_root = if self.balance_factor(id).abs() == 2 {
                self.rebalance_node(id)
            } else {
                id
            };

            if self.arena[subtree_root].height == previous_height {
                break;
            }
            current = parent;
        }
    }
}
