use crate::collections::FxHashMap;
use crate::errors::QueueError;

use std::hash::Hash;


/// Binary min-heap over (node, key) pairs with a position index
/// https://en.wikipedia.org/wiki/Binary_heap
///
/// Each node is queued at most once. The position index maps a node to its
/// slot in `heap`, which makes `contains` O(1) and lets `decrease_key` find the
/// entry without a scan. Insert, extract_min and decrease_key are O(log n).
///
/// Invariant between operations: `position[heap[i].0] == i` for every slot i.
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<N, K> {
    heap: Vec<(N, K)>,
    position: FxHashMap<N, usize>,
}

impl<N, K> Default for IndexedPriorityQueue<N, K>
where
    N: Eq + Hash + Clone,
    K: PartialOrd + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, K> IndexedPriorityQueue<N, K>
where
    N: Eq + Hash + Clone,
    K: PartialOrd + Copy,
{
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            position: FxHashMap::default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            position: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// O(1) membership test through the position index
    pub fn contains(&self, node: &N) -> bool {
        self.position.contains_key(node)
    }

    /// Current key of a queued node
    pub fn key_of(&self, node: &N) -> Option<K> {
        self.position.get(node).map(|&index| self.heap[index].1)
    }

    /// Entry with the least key, without removing it
    pub fn peek(&self) -> Option<(&N, K)> {
        self.heap.first().map(|(node, key)| (node, *key))
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.position.clear();
    }

    /// Queue a node that is not yet present
    /// Fails with `AlreadyQueued` instead of creating a second entry for the node
    pub fn insert(&mut self, node: N, key: K) -> Result<(), QueueError> {
        check_comparable(key)?;
        if self.position.contains_key(&node) {
            return Err(QueueError::AlreadyQueued);
        }

        let index = self.heap.len();
        self.position.insert(node.clone(), index);
        self.heap.push((node, key));
        self.sift_up(index);

        Ok(())
    }

    /// Remove and return the entry with the least key
    /// Ties are resolved by heap order, callers must not rely on it
    pub fn extract_min(&mut self) -> Option<(N, K)> {
        if self.heap.is_empty() {
            return None;
        }

        // move the root to the back so it can be popped without shifting
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let (node, key) = self.heap.pop()?;
        self.position.remove(&node);

        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        Some((node, key))
    }

    /// Lower the key of a queued node in place and restore heap order
    pub fn decrease_key(&mut self, node: &N, new_key: K) -> Result<(), QueueError> {
        check_comparable(new_key)?;
        let index = *self.position.get(node).ok_or(QueueError::NotQueued)?;

        // a larger key would need a sift down, which this queue never does here
        if new_key > self.heap[index].1 {
            return Err(QueueError::KeyIncrease);
        }

        self.heap[index].1 = new_key;
        self.sift_up(index);

        Ok(())
    }

    /// Swap two slots and keep the position index in sync
    fn swap(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        self.heap.swap(i, j);
        if let Some(slot) = self.position.get_mut(&self.heap[i].0) {
            *slot = i;
        }
        if let Some(slot) = self.position.get_mut(&self.heap[j].0) {
            *slot = j;
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[index].1 < self.heap[parent].1 {
                self.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.heap[left].1 < self.heap[smallest].1 {
                smallest = left;
            }
            if right < len && self.heap[right].1 < self.heap[smallest].1 {
                smallest = right;
            }

            if smallest == index {
                break;
            }
            self.swap(index, smallest);
            index = smallest;
        }
    }
}

#[cfg(test)]
impl<N, K> IndexedPriorityQueue<N, K>
where
    N: Eq + Hash + Clone + std::fmt::Debug,
    K: PartialOrd + Copy + std::fmt::Debug,
{
    /// Panics if the heap order or the position index is broken
    pub(crate) fn assert_consistent(&self) {
        assert_eq!(self.heap.len(), self.position.len());
        for (i, (node, key)) in self.heap.iter().enumerate() {
            assert_eq!(self.position.get(node), Some(&i), "position of {node:?}");
            if i > 0 {
                let parent = &self.heap[(i - 1) / 2];
                assert!(parent.1 <= *key, "{parent:?} above {node:?}/{key:?}");
            }
        }
    }
}

/// NaN keys would silently break the heap order
fn check_comparable<K: PartialOrd>(key: K) -> Result<(), QueueError> {
    match key.partial_cmp(&key) {
        Some(_) => Ok(()),
        None => Err(QueueError::IncomparableKey),
    }
}
