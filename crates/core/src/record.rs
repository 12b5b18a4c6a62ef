//! Result records returned by the query operations.

use crate::object::Comment;
use crate::types::{AccountName, EntryId};
use serde::{Deserialize, Serialize};

/// Author and permlink of a comment, borrowed from the content store.
///
/// This is the cheap form of content resolution; it never copies the body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommentRef<'a> {
    pub author: &'a AccountName,
    pub permlink: &'a str,
}

/// Lightweight feed entry: which comment, at which feed position, and who
/// reblogged it if anyone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub author: AccountName,
    pub permlink: String,
    pub entry_id: EntryId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reblog_by: Option<AccountName>,
}

/// Feed entry carrying the full comment payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentFeedEntry {
    pub comment: Comment,
    pub entry_id: EntryId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reblog_by: Option<AccountName>,
}

/// An account name paired with its reputation score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountReputation {
    pub account: AccountName,
    pub reputation: i64,
}

impl AccountReputation {
    /// Creates a new reputation record.
    pub fn new(account: impl Into<AccountName>, reputation: i64) -> Self {
        Self {
            account: account.into(),
            reputation,
        }
    }
}
