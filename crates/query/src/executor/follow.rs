//! Follower and following lookups.

use super::scan::bounded_scan;
use crate::limits::Quota;
use graphfeed_core::{AccountName, FollowRelationship, FollowType, Result};
use graphfeed_index::{FollowKey, OrderedIndex, StateView};

/// Lists accounts following `following`, ascending by follower name,
/// starting at `start` inclusive. Only relationships holding `kind` are
/// returned.
pub fn get_followers<V: StateView + ?Sized>(
    view: &V,
    following: &AccountName,
    start: &AccountName,
    kind: FollowType,
    quota: Quota,
) -> Result<Vec<FollowRelationship>> {
    scan_follows(view.follows_by_following(), following, start, kind, quota)
}

/// Lists accounts `follower` follows, ascending by followed name, starting
/// at `start` inclusive. Only relationships holding `kind` are returned.
pub fn get_following<V: StateView + ?Sized>(
    view: &V,
    follower: &AccountName,
    start: &AccountName,
    kind: FollowType,
    quota: Quota,
) -> Result<Vec<FollowRelationship>> {
    scan_follows(view.follows_by_follower(), follower, start, kind, quota)
}

/// Both follow indices are keyed `(anchor, other)`; only the index differs.
fn scan_follows(
    index: &dyn OrderedIndex<FollowKey, FollowRelationship>,
    anchor: &AccountName,
    start: &AccountName,
    kind: FollowType,
    quota: Quota,
) -> Result<Vec<FollowRelationship>> {
    let seek_key = (anchor.clone(), start.clone());
    bounded_scan(
        index.seek(&seek_key),
        quota,
        |key: &FollowKey| key.0 == *anchor,
        |_, rel| Ok(rel.has(kind).then(|| rel.clone())),
    )
}
