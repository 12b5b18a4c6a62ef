//! In-memory chain state.
//!
//! `ChainState` holds every index the query engine reads, plus the
//! bookkeeping needed to populate them the way the ledger would: account
//! creation, content creation, follow operations, feed insertion and
//! reputation adjustment.

use graphfeed_core::{
    Account, AccountId, AccountName, Comment, CommentId, EntryId, Error, FeedObject,
    FollowRelationship, FollowType, Reputation, Result,
};
use graphfeed_index::{
    AccountResolver, CompositeComparator, ContentResolver, FeedKey, FollowKey, HashIndex,
    OrderedIndex, Order, PointIndex, SortedIndex, StateView,
};
use tracing::debug;

/// The complete set of indices backing a `MemoryStore`.
#[derive(Clone, Debug)]
pub struct ChainState {
    accounts_by_name: SortedIndex<AccountName, Account>,
    accounts_by_id: HashIndex<AccountId, Account>,
    next_account_id: u64,
    comments: HashIndex<CommentId, Comment>,
    /// `(author, permlink)` uniqueness.
    comments_by_permlink: HashIndex<(AccountName, String), CommentId>,
    next_comment_id: u64,
    follows_by_following: SortedIndex<FollowKey, FollowRelationship, CompositeComparator>,
    follows_by_follower: SortedIndex<FollowKey, FollowRelationship, CompositeComparator>,
    feed: SortedIndex<FeedKey, FeedObject, CompositeComparator>,
    reputations: HashIndex<AccountId, Reputation>,
}

impl ChainState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self {
            accounts_by_name: SortedIndex::new(),
            accounts_by_id: HashIndex::new(),
            next_account_id: 0,
            comments: HashIndex::new(),
            comments_by_permlink: HashIndex::new(),
            next_comment_id: 0,
            follows_by_following: SortedIndex::with_comparator(CompositeComparator::asc()),
            follows_by_follower: SortedIndex::with_comparator(CompositeComparator::asc()),
            feed: SortedIndex::with_comparator(CompositeComparator::new(Order::Asc, Order::Desc)),
            reputations: HashIndex::new(),
        }
    }

    /// Creates an account and returns its id.
    pub fn create_account(&mut self, name: impl Into<AccountName>) -> Result<AccountId> {
        let name = name.into();
        if self.accounts_by_name.contains_key(&name) {
            return Err(Error::invalid_argument(format!(
                "account already exists: {}",
                name
            )));
        }

        let id = AccountId(self.next_account_id);
        let account = Account::new(id, name.clone());
        self.accounts_by_name.insert(name.clone(), account.clone())?;
        self.accounts_by_id.insert(id, account)?;
        self.next_account_id += 1;

        debug!(account = %name, id = %id, "created account");
        Ok(id)
    }

    /// Removes an account together with its reputation record.
    ///
    /// Follow and feed records referencing the account are left in place, the
    /// way a ledger may briefly hold dangling references; readers resolving
    /// them observe `NotFound`.
    pub fn remove_account(&mut self, name: &AccountName) -> Result<Account> {
        let account = self
            .accounts_by_name
            .remove(name)
            .ok_or_else(|| Error::account_not_found(name))?;
        self.accounts_by_id.remove(&account.id);
        self.reputations.remove(&account.id);

        debug!(account = %name, "removed account");
        Ok(account)
    }

    /// Stores a comment, assigning it a fresh id. The author must exist and
    /// `(author, permlink)` must be unused.
    pub fn add_comment(&mut self, mut comment: Comment) -> Result<CommentId> {
        self.account(&comment.author)?;

        let permlink_key = (comment.author.clone(), comment.permlink.clone());
        if self.comments_by_permlink.contains_key(&permlink_key) {
            return Err(Error::invalid_argument(format!(
                "comment already exists: {}/{}",
                comment.author, comment.permlink
            )));
        }

        let id = CommentId(self.next_comment_id);
        comment.id = id;
        self.comments_by_permlink.insert(permlink_key, id)?;
        self.comments.insert(id, comment)?;
        self.next_comment_id += 1;
        Ok(id)
    }

    /// Removes a comment. Feed records pointing at it are left in place.
    pub fn remove_comment(&mut self, id: CommentId) -> Result<Comment> {
        let comment = self
            .comments
            .remove(&id)
            .ok_or_else(|| Error::comment_not_found(id))?;
        self.comments_by_permlink
            .remove(&(comment.author.clone(), comment.permlink.clone()));
        Ok(comment)
    }

    /// Sets the relationship kinds `follower` holds towards `following`.
    ///
    /// An empty set removes the relationship, so every stored record holds at
    /// least one kind.
    pub fn set_follow(
        &mut self,
        follower: &AccountName,
        following: &AccountName,
        what: impl IntoIterator<Item = FollowType>,
    ) -> Result<()> {
        self.account(follower)?;
        self.account(following)?;

        let relationship = FollowRelationship::new(follower.clone(), following.clone(), what);
        let by_following = (following.clone(), follower.clone());
        let by_follower = (follower.clone(), following.clone());

        if relationship.what.is_empty() {
            self.follows_by_following.remove(&by_following);
            self.follows_by_follower.remove(&by_follower);
            debug!(%follower, %following, "removed follow");
        } else {
            debug!(%follower, %following, kinds = relationship.what.len(), "set follow");
            self.follows_by_following
                .set(by_following, relationship.clone());
            self.follows_by_follower.set(by_follower, relationship);
        }
        Ok(())
    }

    /// Appends a comment to an account's feed and returns the entry id.
    ///
    /// Ids start at 0 per account and increase by one per entry.
    pub fn push_feed(
        &mut self,
        account: &AccountName,
        comment: CommentId,
        reblogged_by: Option<&AccountName>,
    ) -> Result<EntryId> {
        let account_id = self.account(account)?.id;
        self.comment(comment)?;
        let reblogged_by = match reblogged_by {
            Some(name) => Some(self.account(name)?.id),
            None => None,
        };

        let entry_id = match self.latest_entry_id(account_id) {
            Some(latest) => latest.checked_add(1).ok_or_else(|| {
                Error::invalid_argument(format!("feed of {} is full", account))
            })?,
            None => 0,
        };

        self.feed.insert(
            (account_id, entry_id),
            FeedObject {
                account: account_id,
                entry_id,
                comment,
                reblogged_by,
            },
        )?;
        Ok(entry_id)
    }

    /// Returns the highest entry id in an account's feed.
    fn latest_entry_id(&self, account: AccountId) -> Option<EntryId> {
        self.feed
            .lower_bound(&(account, EntryId::MAX))
            .next()
            .filter(|((owner, _), _)| *owner == account)
            .map(|((_, id), _)| *id)
    }

    /// Sets an account's reputation, creating the record if needed.
    pub fn set_reputation(&mut self, account: &AccountName, reputation: i64) -> Result<()> {
        let id = self.account(account)?.id;
        self.reputations.set(
            id,
            Reputation {
                account: id,
                reputation,
            },
        );
        Ok(())
    }

    /// Returns the number of accounts.
    pub fn account_count(&self) -> usize {
        self.accounts_by_name.len()
    }

    /// Returns the number of feed records across all accounts.
    pub fn feed_len(&self) -> usize {
        self.feed.len()
    }
}

impl Default for ChainState {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountResolver for ChainState {
    fn account(&self, name: &AccountName) -> Result<&Account> {
        self.accounts_by_name
            .get(name)
            .ok_or_else(|| Error::account_not_found(name))
    }

    fn account_by_id(&self, id: AccountId) -> Result<&Account> {
        self.accounts_by_id
            .get(&id)
            .ok_or_else(|| Error::account_not_found(id))
    }
}

impl ContentResolver for ChainState {
    fn comment(&self, id: CommentId) -> Result<&Comment> {
        self.comments
            .get(&id)
            .ok_or_else(|| Error::comment_not_found(id))
    }
}

impl StateView for ChainState {
    fn follows_by_following(&self) -> &dyn OrderedIndex<FollowKey, FollowRelationship> {
        &self.follows_by_following
    }

    fn follows_by_follower(&self) -> &dyn OrderedIndex<FollowKey, FollowRelationship> {
        &self.follows_by_follower
    }

    fn feed(&self) -> &dyn OrderedIndex<FeedKey, FeedObject> {
        &self.feed
    }

    fn accounts_by_name(&self) -> &dyn OrderedIndex<AccountName, Account> {
        &self.accounts_by_name
    }

    fn reputations(&self) -> &dyn PointIndex<AccountId, Reputation> {
        &self.reputations
    }
}
