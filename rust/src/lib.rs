//! AVL tree implementation in Rust with dict-like API.
//!
//! This crate provides a height-balanced binary search tree with a
//! dictionary-like interface, supporting worst-case O(log n) insertion,
//! deletion and lookup, plus ordered traversal.
//!
//! Nodes live in an index arena. Child links define the tree; each node also
//! keeps an id of its parent so rebalancing can walk upward without a stack.

mod arena;
mod comparison;
mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod node;
mod rotation;
mod types;
mod validation;

pub use arena::ArenaStats;
pub use error::{AvlTreeError, KeyResult, ModifyResult, TreeResultExt};
pub use iteration::{ItemIterator, KeyIterator, ValueIterator};
pub use types::{AvlTreeMap, Node, NodeId, Rotation, EMPTY_HEIGHT};

impl<K, V> AvlTreeMap<K, V> {
    // ============================================================================
    // OTHER API OPERATIONS
    // ============================================================================

    /// Returns the number of elements in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the whole tree: 0 for a single entry, -1 when empty.
    pub fn height(&self) -> i32 {
        self.subtree_height(self.root)
    }

    /// Get statistics for the node arena.
    pub fn arena_stats(&self) -> ArenaStats {
        self.arena.stats()
    }
}
