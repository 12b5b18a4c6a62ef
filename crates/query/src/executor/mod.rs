//! Query executors.
//!
//! Each operation is a free function over a `StateView` and a validated
//! `Quota`, built on the shared `bounded_scan`.

mod feed;
mod follow;
mod reputation;
mod scan;

pub use feed::{get_feed, get_feed_entries};
pub use follow::{get_followers, get_following};
pub use reputation::get_account_reputations;
pub use scan::bounded_scan;
