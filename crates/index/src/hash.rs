//! Hash index implementation.
//!
//! This module provides a hash-based unique index for O(1) point lookups.
//! It is used for sparse side tables such as reputation, where the query
//! engine only ever looks up by exact key.

use crate::traits::{IndexError, PointIndex};
use core::hash::Hash;
use hashbrown::HashMap;

/// A hash-based unique index.
#[derive(Clone, Debug)]
pub struct HashIndex<K, V> {
    /// The underlying map from keys to values.
    map: HashMap<K, V>,
}

impl<K: Eq + Hash, V> HashIndex<K, V> {
    /// Creates a new, empty hash index.
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Inserts a new entry. Fails if the key is already present.
    pub fn insert(&mut self, key: K, value: V) -> Result<(), IndexError> {
        if self.map.contains_key(&key) {
            return Err(IndexError::DuplicateKey);
        }
        self.map.insert(key, value);
        Ok(())
    }

    /// Inserts or replaces an entry, returning the previous value.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        self.map.insert(key, value)
    }

    /// Gets the value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    /// Removes an entry, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.map.remove(key)
    }

    /// Returns true if the index contains `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Clears all entries from the index.
    pub fn clear(&mut self) {
        self.map.clear();
    }
}

impl<K: Eq + Hash, V> Default for HashIndex<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V> PointIndex<K, V> for HashIndex<K, V> {
    fn find(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    fn len(&self) -> usize {
        self.map.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_index_basic() {
        let mut index = HashIndex::new();
        index.insert(1u64, -5i64).unwrap();
        index.insert(2u64, 10i64).unwrap();

        assert_eq!(index.get(&1), Some(&-5));
        assert_eq!(index.get(&3), None);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_hash_index_unique() {
        let mut index = HashIndex::new();
        index.insert(1u64, 0i64).unwrap();
        assert_eq!(index.insert(1u64, 1i64), Err(IndexError::DuplicateKey));
        assert_eq!(index.get(&1), Some(&0));
    }

    #[test]
    fn test_hash_index_set_and_remove() {
        let mut index = HashIndex::new();
        assert_eq!(index.set(7u64, 1i64), None);
        assert_eq!(index.set(7u64, 2i64), Some(1));
        assert_eq!(index.remove(&7), Some(2));
        assert!(index.is_empty());
    }

    #[test]
    fn test_point_index_trait() {
        let mut index = HashIndex::new();
        index.insert("zoe", 0i64).unwrap();
        let view: &dyn PointIndex<&str, i64> = &index;
        assert_eq!(view.find(&"zoe"), Some(&0));
        assert_eq!(view.find(&"amy"), None);
        assert_eq!(view.len(), 1);
    }
}
