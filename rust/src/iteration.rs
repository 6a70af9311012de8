//! Traversal and iterator implementations for AvlTreeMap.
//!
//! `inorder` and `preorder` hand every entry to a caller-supplied visitor.
//! The borrowing iterators walk the tree in key order with an explicit stack
//! whose depth never exceeds the tree height plus one.

use crate::types::{AvlTreeMap, NodeId};

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

/// Iterator over key-value pairs in ascending key order.
pub struct ItemIterator<'a, K, V> {
    tree: &'a AvlTreeMap<K, V>,
    /// Nodes whose left subtree has been pushed but which are not yet yielded.
    stack: Vec<NodeId>,
    remaining: usize,
}

/// Iterator over keys in ascending order.
pub struct KeyIterator<'a, K, V> {
    items: ItemIterator<'a, K, V>,
}

/// Iterator over values in key order.
pub struct ValueIterator<'a, K, V> {
    items: ItemIterator<'a, K, V>,
}

// ============================================================================
// TRAVERSAL METHODS
// ============================================================================

impl<K, V> AvlTreeMap<K, V> {
    /// Call `visitor` on every entry in strictly ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::AvlTreeMap;
    ///
    /// let mut tree = AvlTreeMap::new();
    /// for key in [3, 1, 2] {
    ///     tree.insert(key, key * 10).unwrap();
    /// }
    ///
    /// let mut seen = Vec::new();
    /// tree.inorder(|k, v| seen.push((*k, *v)));
    /// assert_eq!(seen, [(1, 10), (2, 20), (3, 30)]);
    /// ```
    pub fn inorder<F>(&self, mut visitor: F)
    where
        F: FnMut(&K, &V),
    {
        self.inorder_recursive(self.root, &mut visitor);
    }

    /// Call `visitor` on every node before its children: node, left subtree,
    /// right subtree.
    pub fn preorder<F>(&self, mut visitor: F)
    where
        F: FnMut(&K, &V),
    {
        self.preorder_recursive(self.root, &mut visitor);
    }

    fn inorder_recursive<F>(&self, node: Option<NodeId>, visitor: &mut F)
    where
        F: FnMut(&K, &V),
    {
        if let Some(id) = node {
            let node = &self.arena[id];
            self.inorder_recursive(node.left, visitor);
            visitor(&node.key, &node.value);
            self.inorder_recursive(node.right, visitor);
        }
    }

    fn preorder_recursive<F>(&self, node: Option<NodeId>, visitor: &mut F)
    where
        F: FnMut(&K, &V),
    {
        if let Some(id) = node {
            let node = &self.arena[id];
            visitor(&node.key, &node.value);
            self.preorder_recursive(node.left, visitor);
            self.preorder_recursive(node.right, visitor);
        }
    }

    // ============================================================================
    // ITERATOR METHODS
    // ============================================================================

    /// Returns an iterator over all key-value pairs in sorted order.
    pub fn items(&self) -> ItemIterator<'_, K, V> {
        ItemIterator::new(self)
    }

    /// Returns an iterator over all keys in sorted order.
    pub fn keys(&self) -> KeyIterator<'_, K, V> {
        KeyIterator {
            items: self.items(),
        }
    }

    /// Returns an iterator over all values in key order.
    pub fn values(&self) -> ValueIterator<'_, K, V> {
        ValueIterator {
            items: self.items(),
        }
    }
}

// ============================================================================
// ITERATOR IMPLEMENTATIONS
// ============================================================================

impl<'a, K, V> ItemIterator<'a, K, V> {
    fn new(tree: &'a AvlTreeMap<K, V>) -> Self {
        let mut iter = Self {
            tree,
            stack: Vec::with_capacity((tree.height() + 1).max(0) as usize),
            remaining: tree.len(),
        };
        iter.push_left_spine(tree.root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<NodeId>) {
        while let Some(id) = node {
            self.stack.push(id);
            node = self.tree.arena[id].left;
        }
    }
}

impl<'a, K, V> Iterator for ItemIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let tree = self.tree;
        let node = &tree.arena[id];
        self.push_left_spine(node.right);
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> ExactSizeIterator for ItemIterator<'a, K, V> {}

impl<'a, K, V> Iterator for KeyIterator<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<'a, K, V> Iterator for ValueIterator<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<'a, K, V> IntoIterator for &'a AvlTreeMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = ItemIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.items()
    }
}
