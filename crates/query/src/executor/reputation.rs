//! Reputation lookups.

use super::scan::bounded_scan;
use crate::limits::Quota;
use graphfeed_core::{AccountName, AccountReputation, Result};
use graphfeed_index::StateView;

/// Lists accounts ascending by name from `lower_bound` inclusive, each with
/// its reputation. Accounts without a reputation record report `0`.
pub fn get_account_reputations<V: StateView + ?Sized>(
    view: &V,
    lower_bound: &AccountName,
    quota: Quota,
) -> Result<Vec<AccountReputation>> {
    let reputations = view.reputations();
    bounded_scan(
        view.accounts_by_name().seek(lower_bound),
        quota,
        |_: &AccountName| true,
        |name, account| {
            let reputation = reputations
                .find(&account.id)
                .map_or(0, |record| record.reputation);
            Ok(Some(AccountReputation {
                account: name.clone(),
                reputation,
            }))
        },
    )
}
