//! Feed lookups.
//!
//! Both operations share one scan over the feed index, seeking at
//! `(account id, effective cursor)` and walking towards older entries. They
//! differ only in how much of the comment each record carries.

use super::scan::bounded_scan;
use crate::cursor::effective_entry_cursor;
use crate::limits::Quota;
use graphfeed_core::{AccountName, CommentFeedEntry, EntryId, FeedEntry, FeedObject, Result};
use graphfeed_index::{FeedKey, StateView};
use tracing::warn;

/// Lists feed entries of `account` as `(author, permlink)` references,
/// newest first, starting at `cursor` inclusive (`0` for the newest).
pub fn get_feed_entries<V: StateView + ?Sized>(
    view: &V,
    account: &AccountName,
    cursor: EntryId,
    quota: Quota,
) -> Result<Vec<FeedEntry>> {
    scan_feed(view, account, cursor, quota, |object: &FeedObject, reblog_by| {
        let comment = view.comment_ref(object.comment).map_err(|err| {
            warn!(%account, entry_id = object.entry_id, %err, "feed comment missing");
            err
        })?;
        Ok(FeedEntry {
            author: comment.author.clone(),
            permlink: comment.permlink.to_owned(),
            entry_id: object.entry_id,
            reblog_by,
        })
    })
}

/// Lists feed entries of `account` with the full comment payload, newest
/// first, starting at `cursor` inclusive (`0` for the newest).
pub fn get_feed<V: StateView + ?Sized>(
    view: &V,
    account: &AccountName,
    cursor: EntryId,
    quota: Quota,
) -> Result<Vec<CommentFeedEntry>> {
    scan_feed(view, account, cursor, quota, |object: &FeedObject, reblog_by| {
        let comment = view.comment(object.comment).map_err(|err| {
            warn!(%account, entry_id = object.entry_id, %err, "feed comment missing");
            err
        })?;
        Ok(CommentFeedEntry {
            comment: comment.clone(),
            entry_id: object.entry_id,
            reblog_by,
        })
    })
}

fn scan_feed<V, R, F>(
    view: &V,
    account: &AccountName,
    cursor: EntryId,
    quota: Quota,
    mut build: F,
) -> Result<Vec<R>>
where
    V: StateView + ?Sized,
    F: FnMut(&FeedObject, Option<AccountName>) -> Result<R>,
{
    let account_id = view.account(account)?.id;
    let seek_key = (account_id, effective_entry_cursor(cursor));

    bounded_scan(
        view.feed().seek(&seek_key),
        quota,
        |key: &FeedKey| key.0 == account_id,
        |_, object| {
            let reblog_by = match object.reblogged_by {
                Some(id) => {
                    let reblogger = view.account_by_id(id).map_err(|err| {
                        warn!(%account, entry_id = object.entry_id, %err, "feed reblogger missing");
                        err
                    })?;
                    Some(reblogger.name.clone())
                }
                None => None,
            };
            build(object, reblog_by).map(Some)
        },
    )
}
