//! Graphfeed Index - Ordered and point index abstractions.
//!
//! This crate provides the read-side index model the query engine scans:
//!
//! - `Comparator`, `SimpleComparator`, `CompositeComparator`: explicit key orders
//! - `OrderedIndex`: inclusive lower-bound seek plus forward iteration
//! - `PointIndex`: exact-key lookup
//! - `SortedIndex`: in-memory ordered index over a sorted array
//! - `HashIndex`: in-memory point index over a hash map
//! - `StateView`, `IndexProvider`: the boundary to the state store
//!
//! # Example
//!
//! ```rust
//! use graphfeed_index::{CompositeComparator, Order, OrderedIndex, SortedIndex};
//!
//! // Account ascending, entry id descending: newest entries first.
//! let mut feed = SortedIndex::with_comparator(CompositeComparator::new(Order::Asc, Order::Desc));
//! feed.insert((1u64, 0u32), "first").unwrap();
//! feed.insert((1u64, 1u32), "second").unwrap();
//! feed.insert((2u64, 0u32), "other").unwrap();
//!
//! let newest: Vec<_> = feed
//!     .seek(&(1, u32::MAX))
//!     .take_while(|((account, _), _)| *account == 1)
//!     .map(|(_, v)| *v)
//!     .collect();
//! assert_eq!(newest, vec!["second", "first"]);
//! ```

pub mod comparator;
pub mod hash;
pub mod sorted;
pub mod traits;
pub mod view;

pub use comparator::{Comparator, CompositeComparator, Order, SimpleComparator};
pub use hash::HashIndex;
pub use sorted::{SortedIndex, SortedIter};
pub use traits::{IndexError, IndexIter, OrderedIndex, PointIndex};
pub use view::{AccountResolver, ContentResolver, FeedKey, FollowKey, IndexProvider, StateView};
