//! Structural equality for AvlTreeMap.
//!
//! Equality here is about shape, not content: keys, cached heights and
//! parent topology must line up node for node. Values are never compared.
//! Two maps holding the same entries can be unequal if they were built by
//! different insert/remove histories.

use crate::types::{AvlTreeMap, NodeId};

impl<K: PartialEq, V> AvlTreeMap<K, V> {
    /// Shape-sensitive equality.
    ///
    /// True iff both trees have the same size and their roots are equal,
    /// where two nodes are equal when both are absent, or both are present
    /// with equal keys, equal cached heights, equal parent keys (or both
    /// parentless), and equal left and right subtrees.
    ///
    /// This is stricter than comparing entries. Use
    /// `a.items().eq(b.items())` to compare contents.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTreeMap;
    ///
    /// let mut ascending = AvlTreeMap::new();
    /// let mut descending = AvlTreeMap::new();
    /// for key in 1..=4 {
    ///     ascending.insert(key, ()).unwrap();
    ///     descending.insert(5 - key, ()).unwrap();
    /// }
    ///
    /// assert!(ascending.keys().eq(descending.keys()));
    /// assert!(!ascending.structural_eq(&descending));
    /// ```
    pub fn structural_eq(&self, other: &Self) -> bool {
        self.len == other.len && self.nodes_equal(self.root, other, other.root)
    }

    fn nodes_equal(&self, mine: Option<NodeId>, other: &Self, theirs: Option<NodeId>) -> bool {
        let (mine, theirs) = match (mine, theirs) {
            (None, None) => return true,
            (Some(mine), Some(theirs)) => (&self.arena[mine], &other.arena[theirs]),
            _ => return false,
        };

        let parents_match = match (mine.parent, theirs.parent) {
            (None, None) => true,
            (Some(p), Some(q)) => self.arena[p].key == other.arena[q].key,
            _ => false,
        };

        parents_match
            && mine.key == theirs.key
            && mine.height == theirs.height
            && self.nodes_equal(mine.left, other, theirs.left)
            && self.nodes_equal(mine.right, other, theirs.right)
    }
}

impl<K: PartialEq, V> PartialEq for AvlTreeMap<K, V> {
    /// Structural equality, see [`AvlTreeMap::structural_eq`].
    fn eq(&self, other: &Self) -> bool {
        self.structural_eq(other)
    }
}

impl<K: Eq, V> Eq for AvlTreeMap<K, V> {}
