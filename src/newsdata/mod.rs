//! NewsData.io client.
//!
//! Fetches the latest headlines page by page and keeps the most recent result
//! for a short while so repeated briefings don't spend API credits.

mod cache;
mod client;
mod types;

pub use self::cache::{CachedFetcher, TtlCache};
pub use self::client::{fetch_top_n, parse_page, NewsDataClient, PageSource};
pub use self::types::*;
