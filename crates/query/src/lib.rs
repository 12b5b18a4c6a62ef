//! Graphfeed Query - Follow, feed and reputation queries over ordered indices.
//!
//! This crate provides the read-side query engine:
//!
//! - `limits`: per-operation result caps and validated quotas
//! - `executor`: the five operations, built on one bounded forward scan
//! - `cursor`: feed cursor mapping and pagination helpers
//! - `QueryEngine`: validates, takes one read view per call, runs the operation
//! - `rpc`: JSON request dispatch
//!
//! # Example
//!
//! ```rust
//! use graphfeed_core::{Comment, CommentId};
//! use graphfeed_query::QueryEngine;
//! use graphfeed_storage::MemoryStore;
//!
//! let store = MemoryStore::new();
//! store
//!     .write(|state| {
//!         state.create_account("alice")?;
//!         state.create_account("bob")?;
//!         let post = state.add_comment(Comment::new(CommentId::default(), "bob", "hello"))?;
//!         state.push_feed(&"alice".into(), post, None)?;
//!         Ok(())
//!     })
//!     .unwrap();
//!
//! let engine = QueryEngine::new(store);
//! let feed = engine.get_feed_entries("alice", 0, 10).unwrap();
//! assert_eq!(feed[0].author, "bob");
//! assert_eq!(feed[0].permlink, "hello");
//! ```

pub mod cursor;
mod engine;
pub mod executor;
pub mod limits;
pub mod rpc;

pub use cursor::{
    drop_resumed, effective_entry_cursor, resume_entry_cursor, resume_followers_cursor,
    resume_following_cursor, resume_reputation_cursor, FeedPosition, MIN_FEED_PAGE, NO_CURSOR,
};
pub use engine::QueryEngine;
pub use limits::{
    QueryLimits, Quota, MAX_FEED_LIMIT, MAX_FOLLOW_LIMIT, MAX_REPUTATION_LIMIT,
};
pub use rpc::{call, FollowRequest};
