//! The query engine facade.

use crate::executor;
use crate::limits::QueryLimits;
use graphfeed_core::{
    AccountName, AccountReputation, CommentFeedEntry, EntryId, FeedEntry, FollowRelationship,
    FollowType, Result,
};
use graphfeed_index::IndexProvider;
use tracing::debug;

/// Answers follow, feed and reputation queries against an index provider.
///
/// Every call validates its limit, takes exactly one read view from the
/// provider and releases it before returning. Nothing is cached between
/// calls.
#[derive(Debug)]
pub struct QueryEngine<P> {
    provider: P,
    limits: QueryLimits,
}

impl<P: IndexProvider> QueryEngine<P> {
    /// Creates an engine with the default limits.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            limits: QueryLimits::default(),
        }
    }

    /// Creates an engine with custom limits, clamped to the hard caps.
    pub fn with_limits(provider: P, limits: QueryLimits) -> Self {
        Self {
            provider,
            limits: limits.clamped(),
        }
    }

    /// Returns the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Returns the effective limits.
    pub fn limits(&self) -> &QueryLimits {
        &self.limits
    }

    /// Lists accounts following `following` with relationship `follow_type`,
    /// ascending by follower from `start_follower` inclusive.
    pub fn get_followers(
        &self,
        following: &str,
        start_follower: &str,
        follow_type: FollowType,
        limit: u32,
    ) -> Result<Vec<FollowRelationship>> {
        let quota = self.limits.followers_quota(limit)?;
        let view = self.provider.read()?;
        let result = executor::get_followers(
            &view,
            &AccountName::from(following),
            &AccountName::from(start_follower),
            follow_type,
            quota,
        )?;
        debug!(op = "get_followers", following, %follow_type, limit, count = result.len());
        Ok(result)
    }

    /// Lists accounts `follower` follows with relationship `follow_type`,
    /// ascending by followed account from `start_following` inclusive.
    pub fn get_following(
        &self,
        follower: &str,
        start_following: &str,
        follow_type: FollowType,
        limit: u32,
    ) -> Result<Vec<FollowRelationship>> {
        let quota = self.limits.following_quota(limit)?;
        let view = self.provider.read()?;
        let result = executor::get_following(
            &view,
            &AccountName::from(follower),
            &AccountName::from(start_following),
            follow_type,
            quota,
        )?;
        debug!(op = "get_following", follower, %follow_type, limit, count = result.len());
        Ok(result)
    }

    /// Lists `account`'s feed as comment references, newest first, from
    /// `entry_id` inclusive. `0` starts at the newest entry.
    pub fn get_feed_entries(
        &self,
        account: &str,
        entry_id: EntryId,
        limit: u32,
    ) -> Result<Vec<FeedEntry>> {
        let quota = self.limits.feed_quota(limit)?;
        let view = self.provider.read()?;
        let result =
            executor::get_feed_entries(&view, &AccountName::from(account), entry_id, quota)?;
        debug!(op = "get_feed_entries", account, entry_id, limit, count = result.len());
        Ok(result)
    }

    /// Lists `account`'s feed with full comments, newest first, from
    /// `entry_id` inclusive. `0` starts at the newest entry.
    pub fn get_feed(
        &self,
        account: &str,
        entry_id: EntryId,
        limit: u32,
    ) -> Result<Vec<CommentFeedEntry>> {
        let quota = self.limits.feed_quota(limit)?;
        let view = self.provider.read()?;
        let result = executor::get_feed(&view, &AccountName::from(account), entry_id, quota)?;
        debug!(op = "get_feed", account, entry_id, limit, count = result.len());
        Ok(result)
    }

    /// Lists accounts from `lower_bound_name` inclusive with their
    /// reputation, `0` where none is recorded.
    pub fn get_account_reputations(
        &self,
        lower_bound_name: &str,
        limit: u32,
    ) -> Result<Vec<AccountReputation>> {
        let quota = self.limits.reputation_quota(limit)?;
        let view = self.provider.read()?;
        let result =
            executor::get_account_reputations(&view, &AccountName::from(lower_bound_name), quota)?;
        debug!(op = "get_account_reputations", lower_bound_name, limit, count = result.len());
        Ok(result)
    }
}
