//! Snapshot-isolated in-memory store.
//!
//! Readers share a `RwLock` read guard for the lifetime of one query, so a
//! query never observes a half-applied mutation. Writers go through
//! `MemoryStore::write`, which holds the exclusive lock for the whole
//! closure and commits its changes only if it succeeds.

use crate::state::ChainState;
use graphfeed_core::{
    Account, AccountId, AccountName, Comment, CommentId, Error, FeedObject, FollowRelationship,
    Reputation, Result,
};
use graphfeed_index::{
    AccountResolver, ContentResolver, FeedKey, FollowKey, IndexProvider, OrderedIndex,
    PointIndex, StateView,
};
use std::ops::Deref;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{RwLock, RwLockReadGuard};
use tracing::{debug, warn};

/// An in-memory index provider.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<ChainState>,
    closed: AtomicBool,
}

impl MemoryStore {
    /// Creates an empty, open store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an open store over an existing state.
    pub fn with_state(state: ChainState) -> Self {
        Self {
            state: RwLock::new(state),
            closed: AtomicBool::new(false),
        }
    }

    /// Applies a mutation under the exclusive lock.
    ///
    /// The closure runs against a staged copy of the state that replaces the
    /// live one only when it returns `Ok`. On error nothing it did is kept.
    pub fn write<R>(&self, f: impl FnOnce(&mut ChainState) -> Result<R>) -> Result<R> {
        self.ensure_open()?;
        let mut state = self.state.write().map_err(|_| {
            warn!("state lock poisoned");
            Error::unavailable("state lock poisoned")
        })?;
        let mut staged = state.clone();
        let result = f(&mut staged).map_err(|err| {
            debug!(error = %err, "write rolled back");
            err
        })?;
        *state = staged;
        Ok(result)
    }

    /// Stops handing out views; `read` fails with `Unavailable` until
    /// `reopen` is called.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        debug!("store closed");
    }

    /// Resumes handing out views after `close`.
    pub fn reopen(&self) {
        self.closed.store(false, Ordering::SeqCst);
        debug!("store reopened");
    }

    /// Returns true if the store is closed.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn ensure_open(&self) -> Result<()> {
        if self.is_closed() {
            return Err(Error::unavailable("store is closed"));
        }
        Ok(())
    }
}

impl IndexProvider for MemoryStore {
    type View<'a> = StateGuard<'a>;

    fn read(&self) -> Result<StateGuard<'_>> {
        self.ensure_open()?;
        let guard = self.state.read().map_err(|_| {
            warn!("state lock poisoned");
            Error::unavailable("state lock poisoned")
        })?;
        debug!(accounts = guard.account_count(), "snapshot acquired");
        Ok(StateGuard { guard })
    }
}

/// A read view of a `MemoryStore`, coherent until dropped.
pub struct StateGuard<'a> {
    guard: RwLockReadGuard<'a, ChainState>,
}

impl Deref for StateGuard<'_> {
    type Target = ChainState;

    fn deref(&self) -> &ChainState {
        &self.guard
    }
}

impl AccountResolver for StateGuard<'_> {
    fn account(&self, name: &AccountName) -> Result<&Account> {
        self.guard.account(name)
    }

    fn account_by_id(&self, id: AccountId) -> Result<&Account> {
        self.guard.account_by_id(id)
    }
}

impl ContentResolver for StateGuard<'_> {
    fn comment(&self, id: CommentId) -> Result<&Comment> {
        self.guard.comment(id)
    }
}

impl StateView for StateGuard<'_> {
    fn follows_by_following(&self) -> &dyn OrderedIndex<FollowKey, FollowRelationship> {
        self.guard.follows_by_following()
    }

    fn follows_by_follower(&self) -> &dyn OrderedIndex<FollowKey, FollowRelationship> {
        self.guard.follows_by_follower()
    }

    fn feed(&self) -> &dyn OrderedIndex<FeedKey, FeedObject> {
        self.guard.feed()
    }

    fn accounts_by_name(&self) -> &dyn OrderedIndex<AccountName, Account> {
        self.guard.accounts_by_name()
    }

    fn reputations(&self) -> &dyn PointIndex<AccountId, Reputation> {
        self.guard.reputations()
    }
}
