//! Per-operation result caps.
//!
//! Every operation validates its requested limit before touching an index.
//! A validated limit is carried as a `Quota`, which can only be obtained from
//! `QueryLimits`, so a scan can never run on an unchecked limit.

use graphfeed_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Hard cap for follower / following lookups.
pub const MAX_FOLLOW_LIMIT: u32 = 100;
/// Hard cap for feed lookups.
pub const MAX_FEED_LIMIT: u32 = 500;
/// Hard cap for reputation lookups.
pub const MAX_REPUTATION_LIMIT: u32 = 1000;

/// Result caps applied by the query engine.
///
/// Defaults are the hard caps. Embedders may configure lower caps; values
/// above the hard caps are clamped by `QueryLimits::clamped`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryLimits {
    pub max_follow_limit: u32,
    pub max_feed_limit: u32,
    pub max_reputation_limit: u32,
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self {
            max_follow_limit: MAX_FOLLOW_LIMIT,
            max_feed_limit: MAX_FEED_LIMIT,
            max_reputation_limit: MAX_REPUTATION_LIMIT,
        }
    }
}

impl QueryLimits {
    /// Returns these limits with every cap lowered to at most its hard cap.
    pub fn clamped(self) -> Self {
        Self {
            max_follow_limit: self.max_follow_limit.min(MAX_FOLLOW_LIMIT),
            max_feed_limit: self.max_feed_limit.min(MAX_FEED_LIMIT),
            max_reputation_limit: self.max_reputation_limit.min(MAX_REPUTATION_LIMIT),
        }
    }

    /// Validates a follower lookup limit.
    pub fn followers_quota(&self, limit: u32) -> Result<Quota> {
        Quota::check(limit, self.max_follow_limit, "followers")
    }

    /// Validates a following lookup limit.
    pub fn following_quota(&self, limit: u32) -> Result<Quota> {
        Quota::check(limit, self.max_follow_limit, "following")
    }

    /// Validates a feed lookup limit.
    pub fn feed_quota(&self, limit: u32) -> Result<Quota> {
        Quota::check(limit, self.max_feed_limit, "feed entries")
    }

    /// Validates a reputation lookup limit.
    pub fn reputation_quota(&self, limit: u32) -> Result<Quota> {
        Quota::check(limit, self.max_reputation_limit, "account reputations")
    }
}

/// A validated result count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quota(usize);

impl Quota {
    fn check(limit: u32, max: u32, noun: &str) -> Result<Self> {
        if limit > max {
            return Err(Error::invalid_argument(format!(
                "cannot retrieve more than {} {} at a time",
                max, noun
            )));
        }
        Ok(Self(limit as usize))
    }

    /// Returns the number of results allowed.
    #[inline]
    pub fn get(&self) -> usize {
        self.0
    }

    /// Returns true if no result is allowed.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}
