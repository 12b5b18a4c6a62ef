//! Graphfeed Storage - In-memory index provider.
//!
//! This crate stands in for the external state store. It owns the indices
//! the query engine reads and the mutations that populate them:
//!
//! - `ChainState`: accounts, comments, follows, feeds and reputations
//! - `MemoryStore`: `RwLock`-snapshotted `IndexProvider` over a `ChainState`
//! - `StateGuard`: the read view handed out per query
//!
//! # Example
//!
//! ```rust
//! use graphfeed_core::{Comment, CommentId, FollowType};
//! use graphfeed_index::{AccountResolver, IndexProvider};
//! use graphfeed_storage::MemoryStore;
//!
//! let store = MemoryStore::new();
//! store
//!     .write(|state| {
//!         state.create_account("alice")?;
//!         state.create_account("bob")?;
//!         state.set_follow(&"alice".into(), &"bob".into(), [FollowType::Blog])?;
//!         let post = state.add_comment(Comment::new(CommentId::default(), "bob", "hello"))?;
//!         state.push_feed(&"alice".into(), post, None)?;
//!         Ok(())
//!     })
//!     .unwrap();
//!
//! let view = store.read().unwrap();
//! assert_eq!(view.account(&"bob".into()).unwrap().name, "bob");
//! ```

mod state;
mod store;

pub use state::ChainState;
pub use store::{MemoryStore, StateGuard};
