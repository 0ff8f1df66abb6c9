//! Type definitions for the NewsData module.

use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;
use tokio::time::Duration;

use crate::article::ArticleRecord;

pub const DEFAULT_BASE_URL: &str = "https://newsdata.io/api/1";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_COUNT: usize = 100;
pub const MAX_CALLS: usize = 8;

// Constants
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const CACHE_TTL: Duration = Duration::from_secs(900);

/// Feed categories accepted by the `latest` endpoint. `All` sends no
/// category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Category {
    All,
    World,
    Politics,
    Business,
    Technology,
    Environment,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::World => "world",
            Category::Politics => "politics",
            Category::Business => "business",
            Category::Technology => "technology",
            Category::Environment => "environment",
        }
    }

    /// The category to send as a query filter, `None` for `All`.
    pub fn as_filter(self) -> Option<Category> {
        match self {
            Category::All => None,
            category => Some(category),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to fetch. Also the cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchRequest {
    pub count: usize,
    pub language: String,
    pub category: Option<Category>,
    pub max_calls: usize,
}

impl Default for FetchRequest {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            language: DEFAULT_LANGUAGE.to_string(),
            category: None,
            max_calls: MAX_CALLS,
        }
    }
}

/// One page of the `latest` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsDataPage {
    pub status: String,
    #[serde(default)]
    pub results: Option<Vec<ArticleRecord>>,
    #[serde(default, rename = "nextPage")]
    pub next_page: Option<String>,
}
