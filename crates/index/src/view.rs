//! Boundary traits between the query engine and the state store.
//!
//! The store owns the indices; the engine receives a `StateView` for the
//! duration of a single call and only reads through it.

use crate::traits::{OrderedIndex, PointIndex};
use graphfeed_core::{
    Account, AccountId, AccountName, Comment, CommentId, CommentRef, EntryId, FeedObject,
    FollowRelationship, Reputation, Result,
};

/// Key of both follow indices. For the followers index it is
/// `(following, follower)`, for the following index `(follower, following)`.
pub type FollowKey = (AccountName, AccountName);

/// Key of the feed index: `(account, entry_id)`.
pub type FeedKey = (AccountId, EntryId);

/// Resolves account names and ids to accounts.
pub trait AccountResolver {
    /// Looks up an account by name. Fails with `NotFound` if it does not exist.
    fn account(&self, name: &AccountName) -> Result<&Account>;

    /// Looks up an account by id. Fails with `NotFound` if it does not exist.
    fn account_by_id(&self, id: AccountId) -> Result<&Account>;
}

/// Resolves content references to comments.
pub trait ContentResolver {
    /// Returns the full comment payload.
    fn comment(&self, id: CommentId) -> Result<&Comment>;

    /// Returns author and permlink only.
    fn comment_ref(&self, id: CommentId) -> Result<CommentRef<'_>> {
        let comment = self.comment(id)?;
        Ok(CommentRef {
            author: &comment.author,
            permlink: &comment.permlink,
        })
    }
}

/// A consistent, read-only view of every index the query engine reads.
pub trait StateView: AccountResolver + ContentResolver {
    /// Follow relationships ordered by `(following, follower)`.
    fn follows_by_following(&self) -> &dyn OrderedIndex<FollowKey, FollowRelationship>;

    /// Follow relationships ordered by `(follower, following)`.
    fn follows_by_follower(&self) -> &dyn OrderedIndex<FollowKey, FollowRelationship>;

    /// Feed records ordered by account ascending, entry id descending.
    fn feed(&self) -> &dyn OrderedIndex<FeedKey, FeedObject>;

    /// Accounts ordered by name.
    fn accounts_by_name(&self) -> &dyn OrderedIndex<AccountName, Account>;

    /// Sparse reputation records keyed by account id.
    fn reputations(&self) -> &dyn PointIndex<AccountId, Reputation>;
}

/// Source of `StateView` snapshots.
///
/// `read` returns a view that stays coherent until it is dropped, or fails
/// with `Unavailable` when no consistent view can be furnished.
pub trait IndexProvider {
    /// The snapshot type handed out by this provider.
    type View<'a>: StateView
    where
        Self: 'a;

    /// Acquires a consistent read view.
    fn read(&self) -> Result<Self::View<'_>>;
}
