//! Cursor mapping and pagination helpers.
//!
//! Every resume helper takes the page it continues from and the limit that
//! page was requested with. A page shorter than its limit ends the walk,
//! since scans only stop early at the end of their scope.
//!
//! Name cursors resume at the exclusive successor of the last name, so the
//! next page never repeats a record and any limit makes progress.
//!
//! Feed cursors cannot do the same: the successor of entry `1` would be `0`,
//! which is the "newest" sentinel. A feed page therefore resumes at its last
//! entry id inclusive and the caller drops the repeated record with
//! `drop_resumed`. This needs at least two entries per page to advance, and
//! `resume_entry_cursor` rejects smaller limits.

use graphfeed_core::{
    AccountName, AccountReputation, CommentFeedEntry, EntryId, Error, FeedEntry,
    FollowRelationship, Result,
};

/// The feed cursor value meaning "start from the newest entry".
pub const NO_CURSOR: EntryId = 0;

/// Smallest feed page size that can be resumed.
pub const MIN_FEED_PAGE: u32 = 2;

/// Maps a caller-supplied feed cursor to the seek key component.
///
/// `0` becomes `EntryId::MAX`, which sorts before every real entry under the
/// descending feed order. Any other value is used verbatim.
#[inline]
pub fn effective_entry_cursor(cursor: EntryId) -> EntryId {
    if cursor == NO_CURSOR {
        EntryId::MAX
    } else {
        cursor
    }
}

/// Feed records that carry their position in the feed.
pub trait FeedPosition {
    fn entry_id(&self) -> EntryId;
}

impl FeedPosition for FeedEntry {
    fn entry_id(&self) -> EntryId {
        self.entry_id
    }
}

impl FeedPosition for CommentFeedEntry {
    fn entry_id(&self) -> EntryId {
        self.entry_id
    }
}

/// The smallest name strictly greater than `name`.
fn successor(name: &AccountName) -> AccountName {
    let mut next = String::with_capacity(name.as_str().len() + 1);
    next.push_str(name.as_str());
    next.push('\0');
    AccountName::new(next)
}

fn is_last_page<T>(page: &[T], limit: u32) -> bool {
    page.is_empty() || page.len() < limit as usize
}

/// Returns the follower cursor for the page after `page`, or `None` when
/// `page` was the last one.
pub fn resume_followers_cursor(page: &[FollowRelationship], limit: u32) -> Option<AccountName> {
    if is_last_page(page, limit) {
        return None;
    }
    page.last().map(|rel| successor(&rel.follower))
}

/// Returns the following cursor for the page after `page`, or `None` when
/// `page` was the last one.
pub fn resume_following_cursor(page: &[FollowRelationship], limit: u32) -> Option<AccountName> {
    if is_last_page(page, limit) {
        return None;
    }
    page.last().map(|rel| successor(&rel.following))
}

/// Returns the lower bound name for the page after `page`, or `None` when
/// `page` was the last one.
pub fn resume_reputation_cursor(page: &[AccountReputation], limit: u32) -> Option<AccountName> {
    if is_last_page(page, limit) {
        return None;
    }
    page.last().map(|rep| successor(&rep.account))
}

/// Returns the inclusive entry cursor for the page after `page`.
///
/// `Ok(None)` means the feed is exhausted, either because the page was short
/// or because it ended at entry `0`. Fails with `InvalidArgument` when a full
/// page was requested with a limit below `MIN_FEED_PAGE`, since such a page
/// can never get past its own cursor.
pub fn resume_entry_cursor<T: FeedPosition>(page: &[T], limit: u32) -> Result<Option<EntryId>> {
    if is_last_page(page, limit) {
        return Ok(None);
    }
    if limit < MIN_FEED_PAGE {
        return Err(Error::invalid_argument(format!(
            "cannot resume feed pages of fewer than {} entries",
            MIN_FEED_PAGE
        )));
    }
    Ok(page
        .last()
        .map(FeedPosition::entry_id)
        .filter(|id| *id != NO_CURSOR))
}

/// Drops the leading record of a resumed page if it sits at `resumed_at`.
///
/// Only the first record can repeat the previous page, so nothing past it is
/// inspected.
pub fn drop_resumed<T, K, F>(mut page: Vec<T>, resumed_at: &K, key_of: F) -> Vec<T>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    if page.first().map_or(false, |first| key_of(first) == *resumed_at) {
        page.remove(0);
    }
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphfeed_core::FollowType;

    fn entry(entry_id: EntryId) -> FeedEntry {
        FeedEntry {
            author: "alice".into(),
            permlink: format!("post-{}", entry_id),
            entry_id,
            reblog_by: None,
        }
    }

    #[test]
    fn test_effective_entry_cursor() {
        assert_eq!(effective_entry_cursor(0), u32::MAX);
        assert_eq!(effective_entry_cursor(1), 1);
        assert_eq!(effective_entry_cursor(42), 42);
        assert_eq!(effective_entry_cursor(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_successor_sorts_right_after() {
        let name = AccountName::from("bob");
        let next = successor(&name);
        assert!(next > name);
        assert!(next < AccountName::from("bob0"));
        assert!(next < AccountName::from("boba"));
        assert!(next < AccountName::from("bobby"));
        assert!(successor(&AccountName::min()) > AccountName::min());
    }

    #[test]
    fn test_resume_entry_cursor() {
        assert_eq!(resume_entry_cursor::<FeedEntry>(&[], 5), Ok(None));
        assert_eq!(resume_entry_cursor(&[entry(9), entry(8)], 2), Ok(Some(8)));
        assert_eq!(resume_entry_cursor(&[entry(1), entry(0)], 2), Ok(None));
        // Short page: nothing after it.
        assert_eq!(resume_entry_cursor(&[entry(9), entry(8)], 3), Ok(None));
    }

    #[test]
    fn test_resume_entry_cursor_rejects_single_entry_pages() {
        let err = resume_entry_cursor(&[entry(9)], 1).unwrap_err();
        assert!(err.is_invalid_argument());
        // A short single entry page is simply the end.
        assert_eq!(resume_entry_cursor::<FeedEntry>(&[], 1), Ok(None));
    }

    #[test]
    fn test_resume_follow_cursors() {
        let page = vec![
            FollowRelationship::new("bob", "alice", [FollowType::Blog]),
            FollowRelationship::new("carol", "alice", [FollowType::Blog]),
        ];
        assert_eq!(resume_followers_cursor(&page, 2), Some("carol\0".into()));
        assert_eq!(resume_following_cursor(&page, 2), Some("alice\0".into()));
        assert_eq!(resume_followers_cursor(&page, 3), None);
        assert_eq!(resume_followers_cursor(&[], 2), None);
    }

    #[test]
    fn test_resume_reputation_cursor() {
        let page = vec![AccountReputation::new("amy", 3), AccountReputation::new("ben", 0)];
        assert_eq!(resume_reputation_cursor(&page, 2), Some("ben\0".into()));
        assert_eq!(resume_reputation_cursor(&page[..1], 1), Some("amy\0".into()));
        assert_eq!(resume_reputation_cursor(&page, 10), None);
    }

    #[test]
    fn test_drop_resumed() {
        let page = vec![entry(5), entry(4), entry(3)];
        let page = drop_resumed(page, &5, |e| e.entry_id);
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].entry_id, 4);

        // A page that does not start at the cursor is left alone.
        let page = drop_resumed(page, &9, |e| e.entry_id);
        assert_eq!(page.len(), 2);

        let empty: Vec<FeedEntry> = drop_resumed(Vec::new(), &1, |e| e.entry_id);
        assert!(empty.is_empty());
    }
}
