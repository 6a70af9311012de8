//! Rotation engine for AvlTreeMap.
//!
//! `rotate_left` and `rotate_right` only relink; they never touch heights.
//! `rebalance_node` picks one of the four cases and recomputes heights on
//! exactly the nodes whose subtree changed, bottom-up.

use crate::types::{AvlTreeMap, NodeId, Rotation};

impl<K, V> AvlTreeMap<K, V> {
    // ============================================================================
    // SINGLE ROTATIONS
    // ============================================================================

    /// Rotate `id` down to the left; its right child takes its place.
    ///
    /// ```text
    ///     id                pivot
    ///    /  \               /   \
    ///   a   pivot   =>     id    c
    ///       /   \         /  \
    ///    inner   c       a   inner
    /// ```
    pub(crate) fn rotate_left(&mut self, id: NodeId) {
        let Some(pivot) = self.arena[id].right else {
            debug_assert!(false, "rotate_left on node without right child");
            return;
        };
        let inner = self.arena[pivot].left;
        let parent = self.arena[id].parent;

        self.arena[id].right = inner;
        self.set_parent(inner, Some(id));

        self.arena[pivot].left = Some(id);
        self.arena[id].parent = Some(pivot);

        self.arena[pivot].parent = parent;
        self.replace_child(parent, id, Some(pivot));
    }

    /// Rotate `id` down to the right; its left child takes its place.
    pub(crate) fn rotate_right(&mut self, id: NodeId) {
        let Some(pivot) = self.arena[id].left else {
            debug_assert!(false, "rotate_right on node without left child");
            return;
        };
        let inner = self.arena[pivot].right;
        let parent = self.arena[id].parent;

        self.arena[id].left = inner;
        self.set_parent(inner, Some(id));

        self.arena[pivot].right = Some(id);
        self.arena[id].parent = Some(pivot);

        self.arena[pivot].parent = parent;
        self.replace_child(parent, id, Some(pivot));
    }

    // ============================================================================
    // CASE SELECTION AND REBALANCING
    // ============================================================================

    /// Which rotation restores balance at `id`, or `None` if it is balanced.
    pub(crate) fn select_rotation(&self, id: NodeId) -> Option<Rotation> {
        let node = &self.arena[id];
        match self.balance_factor(id) {
            2 => {
                let left = node.left?;
                if self.balance_factor(left) >= 0 {
                    Some(Rotation::LeftLeft)
                } else {
                    Some(Rotation::LeftRight)
                }
            }
            -2 => {
                let right = node.right?;
                if self.balance_factor(right) <= 0 {
                    Some(Rotation::RightRight)
                } else {
                    Some(Rotation::RightLeft)
                }
            }
            _ => None,
        }
    }

    /// Apply the rotation case required at `id` and fix up heights.
    ///
    /// Returns the id of the node that now roots the rebalanced subtree
    /// (`id` itself when no rotation was needed).
    pub(crate) fn rebalance_node(&mut self, id: NodeId) -> NodeId {
        let Some(rotation) = self.select_rotation(id) else {
            return id;
        };

        match rotation {
            Rotation::LeftLeft | Rotation::RightRight => {
                if rotation == Rotation::LeftLeft {
                    self.rotate_right(id);
                } else {
                    self.rotate_left(id);
                }
                self.update_height(id);
                let new_root = self.arena[id].parent.unwrap_or(id);
                self.update_height(new_root);
                new_root
            }
            Rotation::LeftRight | Rotation::RightLeft => {
                let (child, pivot) = if rotation == Rotation::LeftRight {
                    let child = self.arena[id].left;
                    (child, child.and_then(|c| self.arena[c].right))
                } else {
                    let child = self.arena[id].right;
                    (child, child.and_then(|c| self.arena[c].left))
                };
                let (Some(child), Some(pivot)) = (child, pivot) else {
                    debug_assert!(false, "double rotation without grandchild");
                    return id;
                };

                if rotation == Rotation::LeftRight {
                    self.rotate_left(child);
                    self.rotate_right(id);
                } else {
                    self.rotate_right(child);
                    self.rotate_left(id);
                }
                self.update_height(child);
                self.update_height(id);
                self.update_height(pivot);
                pivot
            }
        }
    }
}
