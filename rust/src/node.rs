//! Node-level helpers for AvlTreeMap.
//!
//! Height and balance-factor arithmetic lives here. An absent child counts as
//! `EMPTY_HEIGHT`; that sentinel never ends up in a stored `height`.

use crate::types::{AvlTreeMap, Node, NodeId, EMPTY_HEIGHT};

impl<K, V> Node<K, V> {
    /// Creates a detached leaf: height 0, no children, no parent.
    pub(crate) fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            parent: None,
            height: 0,
        }
    }

    /// Returns the key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value stored in this node.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns the cached height of the subtree rooted at this node.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Returns true if both children are present.
    pub fn has_two_children(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    /// Returns the only child, if this node has at most one.
    pub(crate) fn single_child(&self) -> Option<NodeId> {
        self.left.or(self.right)
    }
}

impl<K, V> AvlTreeMap<K, V> {
    /// Cached height of an optional subtree, `EMPTY_HEIGHT` when absent.
    #[inline]
    pub(crate) fn subtree_height(&self, id: Option<NodeId>) -> i32 {
        id.map_or(EMPTY_HEIGHT, |id| self.arena[id].height)
    }

    /// `height(left) - height(right)` for the node `id`.
    #[inline]
    pub(crate) fn balance_factor(&self, id: NodeId) -> i32 {
        let node = &self.arena[id];
        self.subtree_height(node.left) - self.subtree_height(node.right)
    }

    /// Recompute the cached height of `id` from its children's cached heights.
    #[inline]
    pub(crate) fn update_height(&mut self, id: NodeId) {
        let node = &self.arena[id];
        let height = 1 + self
            .subtree_height(node.left)
            .max(self.subtree_height(node.right));
        self.arena[id].height = height;
    }

    /// Point `parent`'s link that currently holds `old` at `new` instead.
    /// With no parent, `new` becomes the root.
    pub(crate) fn replace_child(
        &mut self,
        parent: Option<NodeId>,
        old: NodeId,
        new: Option<NodeId>,
    ) {
        match parent {
            None => self.root = new,
            Some(parent_id) => {
                let parent = &mut self.arena[parent_id];
                if parent.left == Some(old) {
                    parent.left = new;
                } else {
                    debug_assert_eq!(parent.right, Some(old));
                    parent.right = new;
                }
            }
        }
    }

    /// Set the parent link of an optional node.
    #[inline]
    pub(crate) fn set_parent(&mut self, id: Option<NodeId>, parent: Option<NodeId>) {
        if let Some(id) = id {
            self.arena[id].parent = parent;
        }
    }
}
