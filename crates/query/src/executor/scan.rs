//! Bounded forward scan.
//!
//! Every query operation is a seek followed by one call to `bounded_scan`.
//! The scan stops on the first of:
//!
//! 1. the quota is exhausted,
//! 2. the index is exhausted,
//! 3. the scoping key changes.
//!
//! There is no skip-and-continue past a scope change.

use crate::limits::Quota;
use graphfeed_core::Result;
use tracing::trace;

/// Scans `iter` forward, feeding every in-scope entry to `visit`.
///
/// `in_scope` is checked before `visit`; the first out-of-scope key ends the
/// scan. `visit` returns `Some` to emit a record (counting against the quota)
/// or `None` to filter the entry out. An error from `visit` aborts the scan
/// and is returned without any partial result.
pub fn bounded_scan<'a, K, V, R, I, S, F>(
    iter: I,
    quota: Quota,
    in_scope: S,
    mut visit: F,
) -> Result<Vec<R>>
where
    K: 'a,
    V: 'a,
    I: Iterator<Item = (&'a K, &'a V)>,
    S: Fn(&K) -> bool,
    F: FnMut(&'a K, &'a V) -> Result<Option<R>>,
{
    let mut results = Vec::with_capacity(quota.get());
    if quota.is_zero() {
        return Ok(results);
    }

    let mut visited = 0usize;
    for (key, value) in iter {
        if !in_scope(key) {
            break;
        }
        visited += 1;

        if let Some(record) = visit(key, value)? {
            results.push(record);
            if results.len() == quota.get() {
                break;
            }
        }
    }

    trace!(visited, emitted = results.len(), "bounded scan finished");
    Ok(results)
}
