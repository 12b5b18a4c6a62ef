//! JSON request dispatch.
//!
//! A request names its method and carries named params:
//!
//! ```json
//! {"method": "get_feed_entries", "params": {"account": "alice", "entry_id": 0, "limit": 20}}
//! ```
//!
//! Transport framing is left to the embedder.

use crate::engine::QueryEngine;
use graphfeed_core::{AccountName, EntryId, Error, FollowType, Result};
use graphfeed_index::IndexProvider;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// A follow API request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", content = "params", rename_all = "snake_case")]
pub enum FollowRequest {
    GetFollowers {
        following: AccountName,
        #[serde(default)]
        start_follower: AccountName,
        #[serde(rename = "type")]
        follow_type: FollowType,
        limit: u32,
    },
    GetFollowing {
        follower: AccountName,
        #[serde(default)]
        start_following: AccountName,
        #[serde(rename = "type")]
        follow_type: FollowType,
        limit: u32,
    },
    GetFeedEntries {
        account: AccountName,
        #[serde(default)]
        entry_id: EntryId,
        limit: u32,
    },
    GetFeed {
        account: AccountName,
        #[serde(default)]
        entry_id: EntryId,
        limit: u32,
    },
    GetAccountReputations {
        #[serde(default)]
        lower_bound_name: AccountName,
        limit: u32,
    },
}

impl FollowRequest {
    /// Returns the method name of this request.
    pub fn method(&self) -> &'static str {
        match self {
            FollowRequest::GetFollowers { .. } => "get_followers",
            FollowRequest::GetFollowing { .. } => "get_following",
            FollowRequest::GetFeedEntries { .. } => "get_feed_entries",
            FollowRequest::GetFeed { .. } => "get_feed",
            FollowRequest::GetAccountReputations { .. } => "get_account_reputations",
        }
    }
}

impl<P: IndexProvider> QueryEngine<P> {
    /// Runs a request and returns its result sequence as JSON.
    pub fn dispatch(&self, request: &FollowRequest) -> Result<Value> {
        debug!(method = request.method(), "dispatching request");
        match request {
            FollowRequest::GetFollowers {
                following,
                start_follower,
                follow_type,
                limit,
            } => to_value(self.get_followers(
                following.as_str(),
                start_follower.as_str(),
                *follow_type,
                *limit,
            )?),
            FollowRequest::GetFollowing {
                follower,
                start_following,
                follow_type,
                limit,
            } => to_value(self.get_following(
                follower.as_str(),
                start_following.as_str(),
                *follow_type,
                *limit,
            )?),
            FollowRequest::GetFeedEntries {
                account,
                entry_id,
                limit,
            } => to_value(self.get_feed_entries(account.as_str(), *entry_id, *limit)?),
            FollowRequest::GetFeed {
                account,
                entry_id,
                limit,
            } => to_value(self.get_feed(account.as_str(), *entry_id, *limit)?),
            FollowRequest::GetAccountReputations {
                lower_bound_name,
                limit,
            } => to_value(self.get_account_reputations(lower_bound_name.as_str(), *limit)?),
        }
    }
}

/// Parses a JSON request, runs it, and returns the JSON result.
///
/// A request that does not parse fails with `InvalidArgument`.
pub fn call<P: IndexProvider>(engine: &QueryEngine<P>, request: &str) -> Result<String> {
    let request: FollowRequest = serde_json::from_str(request)
        .map_err(|err| Error::invalid_argument(format!("malformed request: {}", err)))?;
    let value = engine.dispatch(&request)?;
    serde_json::to_string(&value).map_err(|err| Error::serialization(err.to_string()))
}

fn to_value<T: Serialize>(result: T) -> Result<Value> {
    serde_json::to_value(result).map_err(|err| Error::serialization(err.to_string()))
}
