//! Index trait definitions.
//!
//! Index views are read-only from the query engine's point of view: the only
//! access paths are an inclusive lower-bound seek followed by forward
//! iteration, and point lookup.

use thiserror::Error;

/// Forward iterator over `(key, value)` pairs of an ordered index.
pub type IndexIter<'a, K, V> = Box<dyn Iterator<Item = (&'a K, &'a V)> + 'a>;

/// An index supporting inclusive lower-bound seek and forward iteration in
/// the index's declared key order.
pub trait OrderedIndex<K, V> {
    /// Returns an iterator positioned at the first entry whose key is not
    /// less than `key` under the index's comparator.
    fn seek<'a>(&'a self, key: &K) -> IndexIter<'a, K, V>
    where
        K: 'a,
        V: 'a;

    /// Returns the number of entries in the index.
    fn len(&self) -> usize;

    /// Returns true if the index is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An index supporting exact-key lookup only.
pub trait PointIndex<K, V> {
    /// Returns the value stored under `key`, if any.
    fn find(&self, key: &K) -> Option<&V>;

    /// Returns the number of entries in the index.
    fn len(&self) -> usize;

    /// Returns true if the index is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Error type for index operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IndexError {
    /// Attempted to insert a duplicate key in a unique index.
    #[error("Duplicate key in unique index")]
    DuplicateKey,
    /// Key not found.
    #[error("Key not found")]
    KeyNotFound,
}

impl From<IndexError> for graphfeed_core::Error {
    fn from(err: IndexError) -> Self {
        match err {
            IndexError::DuplicateKey => Self::invalid_argument(err.to_string()),
            IndexError::KeyNotFound => Self::not_found("Index key", "requested key"),
        }
    }
}
