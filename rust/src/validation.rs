//! Validation and debugging utilities for AvlTreeMap.
//!
//! This module contains invariant checking, arena/tree consistency checks and
//! debug helpers used by tests and by the validated `try_*` operations.

use std::fmt::Debug;

use crate::error::{AvlTreeError, KeyResult, TreeResult, TreeResultExt};
use crate::types::{AvlTreeMap, NodeId};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<K: Ord, V> AvlTreeMap<K, V> {
    /// Check if the tree maintains every AVL invariant.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    ///
    /// Verifies BST ordering, parent links, cached heights, balance factors,
    /// the entry count, and that the arena holds exactly the reachable nodes.
    pub fn check_invariants_detailed(&self) -> Result<(), String> {
        if let Some(root) = self.root {
            if self.arena[root].parent.is_some() {
                return Err("Root node has a parent".to_string());
            }
        }

        let mut count = 0;
        self.check_node_invariants(self.root, None, None, None, &mut count)?;

        if count != self.len {
            return Err(format!(
                "Tree has {} reachable nodes but len() is {}",
                count, self.len
            ));
        }

        self.check_arena_tree_consistency()
            .map_err(|e| e.to_string())
    }

    /// Alias for check_invariants_detailed (for test compatibility).
    pub fn validate(&self) -> Result<(), String> {
        self.check_invariants_detailed()
    }

    /// Check if tree is in a valid state for operations
    pub fn validate_for_operation(&self, operation: &str) -> KeyResult<()> {
        self.check_invariants_detailed()
            .map_err(AvlTreeError::DataIntegrityError)
            .with_operation(operation)
    }

    /// Recursively check a subtree and return its actual height.
    fn check_node_invariants(
        &self,
        node: Option<NodeId>,
        parent: Option<NodeId>,
        min_key: Option<&K>,
        max_key: Option<&K>,
        count: &mut usize,
    ) -> Result<i32, String> {
        let Some(id) = node else {
            return Ok(crate::types::EMPTY_HEIGHT);
        };
        let current = self
            .arena
            .get(id)
            .ok_or_else(|| format!("Node {} is linked but not allocated", id))?;
        *count += 1;

        if current.parent != parent {
            return Err(format!(
                "Node {} has parent {:?}, expected {:?}",
                id, current.parent, parent
            ));
        }
        if min_key.is_some_and(|min| current.key <= *min) {
            return Err(format!("Node {} violates lower key bound", id));
        }
        if max_key.is_some_and(|max| current.key >= *max) {
            return Err(format!("Node {} violates upper key bound", id));
        }

        let left_height = self.check_node_invariants(
            current.left,
            Some(id),
            min_key,
            Some(&current.key),
            count,
        )?;
        let right_height = self.check_node_invariants(
            current.right,
            Some(id),
            Some(&current.key),
            max_key,
            count,
        )?;

        let height = 1 + left_height.max(right_height);
        if current.height != height {
            return Err(format!(
                "Node {} caches height {} but has height {}",
                id, current.height, height
            ));
        }
        let balance = left_height - right_height;
        if balance.abs() > 1 {
            return Err(format!("Node {} has balance factor {}", id, balance));
        }

        Ok(height)
    }
}

impl<K, V> AvlTreeMap<K, V> {
    /// Check that arena allocation matches tree structure
    pub(crate) fn check_arena_tree_consistency(&self) -> TreeResult<()> {
        let allocated = self.arena.allocated_count();
        if allocated != self.len {
            return Err(AvlTreeError::corrupted_tree(
                "Arena",
                &format!("{} live nodes in arena vs {} entries", allocated, self.len),
            ));
        }
        if self.root.is_none() != (self.len == 0) {
            return Err(AvlTreeError::corrupted_tree(
                "Root",
                &format!("root {:?} with {} entries", self.root, self.len),
            ));
        }
        Ok(())
    }

    // ============================================================================
    // DEBUGGING AND TESTING UTILITIES
    // ============================================================================

    /// Returns all key-value pairs as a vector (for testing/debugging).
    pub fn slice(&self) -> Vec<(&K, &V)> {
        self.items().collect()
    }

    /// Prints the tree sideways, one node per line, for debugging.
    pub fn print_tree(&self)
    where
        K: Debug,
    {
        println!("Tree structure ({} entries):", self.len);
        self.print_node(self.root, 0);
    }

    fn print_node(&self, node: Option<NodeId>, depth: usize)
    where
        K: Debug,
    {
        let indent = "  ".repeat(depth);
        match node {
            None => println!("{}-", indent),
            Some(id) => {
                let current = &self.arena[id];
                println!(
                    "{}{:?} [id={}, h={}, bf={}]",
                    indent,
                    current.key,
                    id,
                    current.height,
                    self.balance_factor(id)
                );
                if !current.is_leaf() {
                    self.print_node(current.left, depth + 1);
                    self.print_node(current.right, depth + 1);
                }
            }
        }
    }
}
