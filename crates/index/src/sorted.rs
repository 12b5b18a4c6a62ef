//! Sorted-array ordered index.
//!
//! Entries are kept in a single vector sorted by the index comparator. Seeks
//! are a binary search for the lower bound; forward iteration walks the
//! slice. Keys are unique.

use crate::comparator::{Comparator, SimpleComparator};
use crate::traits::{IndexError, IndexIter, OrderedIndex};

/// An in-memory ordered index with unique keys.
#[derive(Clone, Debug)]
pub struct SortedIndex<K, V, C = SimpleComparator> {
    /// Entries sorted by `comparator`.
    entries: Vec<(K, V)>,
    /// Comparator declaring the key order.
    comparator: C,
}

impl<K: Ord, V> SortedIndex<K, V> {
    /// Creates an empty index ordered ascending by `K`'s natural order.
    pub fn new() -> Self {
        Self::with_comparator(SimpleComparator::asc())
    }
}

impl<K: Ord, V> Default for SortedIndex<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C: Comparator<K>> SortedIndex<K, V, C> {
    /// Creates an empty index ordered by the given comparator.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            entries: Vec::new(),
            comparator,
        }
    }

    /// Returns the comparator of this index.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Finds the position of the first entry whose key is not less than `key`.
    fn find_key_position(&self, key: &K) -> usize {
        self.entries
            .partition_point(|(k, _)| self.comparator.is_less(k, key))
    }

    /// Finds the exact position of a key, or None if not found.
    fn find_key(&self, key: &K) -> Option<usize> {
        let pos = self.find_key_position(key);
        match self.entries.get(pos) {
            Some((k, _)) if self.comparator.is_equal(k, key) => Some(pos),
            _ => None,
        }
    }

    /// Inserts a new entry. Fails if the key is already present.
    pub fn insert(&mut self, key: K, value: V) -> Result<(), IndexError> {
        let pos = self.find_key_position(&key);
        if let Some((k, _)) = self.entries.get(pos) {
            if self.comparator.is_equal(k, &key) {
                return Err(IndexError::DuplicateKey);
            }
        }
        self.entries.insert(pos, (key, value));
        Ok(())
    }

    /// Inserts or replaces an entry, returning the previous value.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        match self.find_key(&key) {
            Some(pos) => Some(core::mem::replace(&mut self.entries[pos].1, value)),
            None => {
                let pos = self.find_key_position(&key);
                self.entries.insert(pos, (key, value));
                None
            }
        }
    }

    /// Removes an entry, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.find_key(key).map(|pos| self.entries.remove(pos).1)
    }

    /// Gets the value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.find_key(key).map(|pos| &self.entries[pos].1)
    }

    /// Returns true if the index contains `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.find_key(key).is_some()
    }

    /// Returns an iterator starting at the first key not less than `key`.
    pub fn lower_bound(&self, key: &K) -> SortedIter<'_, K, V> {
        SortedIter::new(&self.entries, self.find_key_position(key))
    }

    /// Returns an iterator over all entries in key order.
    pub fn iter(&self) -> SortedIter<'_, K, V> {
        SortedIter::new(&self.entries, 0)
    }

    /// Removes every entry matching the predicate.
    pub fn retain(&mut self, mut f: impl FnMut(&K, &V) -> bool) {
        self.entries.retain(|(k, v)| f(k, v));
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clears all entries from the index.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K, V, C: Comparator<K>> OrderedIndex<K, V> for SortedIndex<K, V, C> {
    fn seek<'a>(&'a self, key: &K) -> IndexIter<'a, K, V>
    where
        K: 'a,
        V: 'a,
    {
        Box::new(self.lower_bound(key))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Forward iterator over a sorted index.
#[derive(Clone, Debug)]
pub struct SortedIter<'a, K, V> {
    entries: &'a [(K, V)],
    pos: usize,
}

impl<'a, K, V> SortedIter<'a, K, V> {
    fn new(entries: &'a [(K, V)], pos: usize) -> Self {
        Self { entries, pos }
    }
}

impl<'a, K, V> Iterator for SortedIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.entries.get(self.pos)?;
        self.pos += 1;
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.entries.len().saturating_sub(self.pos);
        (remaining, Some(remaining))
    }
}

impl<K, V> ExactSizeIterator for SortedIter<'_, K, V> {}
