//! Slot arena that owns the nodes of an AvlTreeMap.
//!
//! Nodes reference each other by `NodeId`, so the parent back-links never
//! own anything and the whole tree is torn down by dropping one `Vec`.
//! Freed slots are recycled through a free list.

use std::convert::TryFrom;
use std::ops::{Index, IndexMut};

use crate::types::NodeId;

/// Statistics for a node arena
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArenaStats {
    pub total_capacity: usize,
    pub allocated_count: usize,
    pub free_count: usize,
    pub utilization: f64,
}

/// Arena allocator with a free list for slot reuse
#[derive(Debug, Clone)]
pub struct NodeArena<T> {
    storage: Vec<Option<T>>,
    free_list: Vec<usize>,
    allocated: usize,
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NodeArena<T> {
    /// Create a new empty arena
    pub fn new() -> Self {
        Self {
            storage: Vec::new(),
            free_list: Vec::new(),
            allocated: 0,
        }
    }

    /// Create a new arena with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            allocated: 0,
        }
    }

    /// Allocate a new item in the arena and return its ID
    #[inline]
    pub fn allocate(&mut self, item: T) -> NodeId {
        let index = if let Some(free_index) = self.free_list.pop() {
            self.storage[free_index] = Some(item);
            free_index
        } else {
            let index = self.storage.len();
            self.storage.push(Some(item));
            index
        };
        self.allocated += 1;

        NodeId::try_from(index).expect("Index should fit in NodeId")
    }

    /// Deallocate an item from the arena and return it
    #[inline]
    pub fn deallocate(&mut self, id: NodeId) -> Option<T> {
        let index = usize::try_from(id).ok()?;
        let item = self.storage.get_mut(index)?.take()?;
        self.free_list.push(index);
        self.allocated -= 1;
        Some(item)
    }

    /// Get a reference to an item in the arena
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        let index = usize::try_from(id).ok()?;
        self.storage.get(index)?.as_ref()
    }

    /// Get a mutable reference to an item in the arena
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        let index = usize::try_from(id).ok()?;
        self.storage.get_mut(index)?.as_mut()
    }

    /// Check if an ID is valid and allocated
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live items
    pub fn allocated_count(&self) -> usize {
        self.allocated
    }

    /// Number of slots waiting for reuse
    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }

    /// Drop every item and forget all slots
    pub fn clear(&mut self) {
        self.storage.clear();
        self.free_list.clear();
        self.allocated = 0;
    }

    /// Get arena statistics
    pub fn stats(&self) -> ArenaStats {
        let total_capacity = self.storage.capacity();
        let utilization = if total_capacity > 0 {
            self.allocated as f64 / total_capacity as f64
        } else {
            0.0
        };

        ArenaStats {
            total_capacity,
            allocated_count: self.allocated,
            free_count: self.free_list.len(),
            utilization,
        }
    }
}

impl<T> Index<NodeId> for NodeArena<T> {
    type Output = T;

    #[inline]
    fn index(&self, id: NodeId) -> &T {
        match self.get(id) {
            Some(item) => item,
            None => panic!("dangling node id {}", id),
        }
    }
}

impl<T> IndexMut<NodeId> for NodeArena<T> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        match self.get_mut(id) {
            Some(item) => item,
            None => panic!("dangling node id {}", id),
        }
    }
}
