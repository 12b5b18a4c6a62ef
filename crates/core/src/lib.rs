//! Graphfeed Core - Core types, records and errors for the graphfeed query engine.
//!
//! This crate provides the foundational types shared by the index, storage and
//! query crates:
//!
//! - `AccountName`, `AccountId`, `CommentId`, `EntryId`: identifiers
//! - `FollowType`: relationship kinds (blog, ignore)
//! - `object`: stored objects as seen through the state store's indices
//! - `record`: result records returned by the query operations
//! - `Error`: error taxonomy for query operations
//!
//! # Example
//!
//! ```rust
//! use graphfeed_core::{FollowRelationship, FollowType};
//!
//! let rel = FollowRelationship::new("alice", "bob", [FollowType::Blog]);
//! assert!(rel.has(FollowType::Blog));
//! assert!(!rel.has(FollowType::Ignore));
//! ```

mod error;
pub mod object;
pub mod record;
mod types;

pub use error::{Error, Result};
pub use object::{Account, Comment, FeedObject, FollowRelationship, Reputation};
pub use record::{AccountReputation, CommentFeedEntry, CommentRef, FeedEntry};
pub use types::{AccountId, AccountName, CommentId, EntryId, FollowType};
