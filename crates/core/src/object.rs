//! Stored objects as observed through the state store's indices.
//!
//! These are read views: the store owns their lifecycle and the query engine
//! never mutates them.

use crate::types::{AccountId, AccountName, CommentId, EntryId, FollowType};
use std::collections::BTreeSet;
use serde::{Deserialize, Serialize};

/// An account known to the state store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: AccountName,
}

impl Account {
    /// Creates a new account view.
    pub fn new(id: AccountId, name: impl Into<AccountName>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Full content payload of a post or comment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub author: AccountName,
    pub permlink: String,
    /// Empty for root posts.
    pub parent_author: AccountName,
    pub parent_permlink: String,
    pub title: String,
    pub body: String,
    pub json_metadata: String,
    /// Creation time as Unix seconds.
    pub created: u64,
    pub net_votes: i32,
    pub children: u32,
}

impl Comment {
    /// Creates a root post with the given author and permlink and empty content.
    pub fn new(id: CommentId, author: impl Into<AccountName>, permlink: impl Into<String>) -> Self {
        Self {
            id,
            author: author.into(),
            permlink: permlink.into(),
            ..Default::default()
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets the parent, turning this into a reply.
    pub fn with_parent(
        mut self,
        parent_author: impl Into<AccountName>,
        parent_permlink: impl Into<String>,
    ) -> Self {
        self.parent_author = parent_author.into();
        self.parent_permlink = parent_permlink.into();
        self
    }

    /// Sets the creation time.
    pub fn with_created(mut self, created: u64) -> Self {
        self.created = created;
        self
    }

    /// Returns true if this comment is a root post.
    pub fn is_root(&self) -> bool {
        self.parent_author.is_empty()
    }
}

/// A directed relationship between two accounts.
///
/// There is at most one record per `(follower, following)` pair; a stored
/// record always holds at least one kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowRelationship {
    pub follower: AccountName,
    pub following: AccountName,
    pub what: BTreeSet<FollowType>,
}

impl FollowRelationship {
    /// Creates a relationship holding the given kinds.
    pub fn new(
        follower: impl Into<AccountName>,
        following: impl Into<AccountName>,
        what: impl IntoIterator<Item = FollowType>,
    ) -> Self {
        Self {
            follower: follower.into(),
            following: following.into(),
            what: what.into_iter().collect(),
        }
    }

    /// Returns true if the relationship holds the given kind.
    #[inline]
    pub fn has(&self, kind: FollowType) -> bool {
        self.what.contains(&kind)
    }
}

/// A stored feed record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedObject {
    pub account: AccountId,
    pub entry_id: EntryId,
    pub comment: CommentId,
    /// Set when the entry appeared because another account reblogged it.
    pub reblogged_by: Option<AccountId>,
}

/// A stored reputation record. Only accounts whose reputation was ever
/// adjusted have one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reputation {
    pub account: AccountId,
    pub reputation: i64,
}
