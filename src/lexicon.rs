//! Word lists consumed by the tokenizer, signal filter and topic labeler.
//!
//! The built-in tables are exposed as constants and bundled into [`Lexicons`],
//! which components receive at construction time. A JSON document with the
//! same shape can replace any of them.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::environment::{self, EXTRA_STOP_WORDS_VAR};

/// Label used when no topic marker appears in a cluster.
pub const DEFAULT_TOPIC: &str = "Other";

pub const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "if", "then", "than", "so", "to", "of", "in", "on",
    "for", "with", "from", "by", "at", "as", "is", "are", "was", "were", "be", "been", "being",
    "this", "that", "these", "those", "it", "its", "into", "over", "under", "about", "across",
    "after", "before", "during", "between", "also", "not", "no", "can", "could", "would",
    "should", "may", "might", "will", "just", "more", "most", "much", "very", "per", "via",
];

pub const SPORTS: &[&str] = &[
    "nba", "nfl", "nhl", "mlb", "match", "game", "games", "season", "playoff", "all-star",
    "dunk", "overtime", "quarter", "finals", "championship", "wrestle", "wrestling",
    "division", "scoreboard", "wildcats", "lakers",
];

pub const LIFESTYLE_LOCAL: &[&str] = &[
    "wedding", "weddings", "horoscope", "crossword", "recipe", "recipes", "dining", "travel",
    "scenic", "waterfall", "park", "town", "county", "local", "citizen", "newsletter",
    "obituaries", "health", "scores",
];

pub const FINANCE_TICKER: &[&str] = &[
    "nyse", "nasdaq", "etf", "stock", "stocks", "shares", "bond", "bonds", "yield", "earnings",
    "ticker", "short", "interest", "price", "target",
];

/// Topic name and marker words, in precedence order.
pub const TOPIC_LEXICON: &[(&str, &[&str])] = &[
    (
        "Geopolitics & security",
        &["war", "military", "nuclear", "sanctions", "border", "defense", "attack", "navy"],
    ),
    (
        "Elections & governance",
        &["election", "vote", "parliament", "government", "president", "minister", "court", "policy"],
    ),
    (
        "Economy & markets",
        &["inflation", "gdp", "economy", "bank", "interest", "rate", "currency", "trade", "jobs", "markets"],
    ),
    (
        "Tech & AI",
        &["ai", "artificial", "chip", "cyber", "data", "software", "platform"],
    ),
    (
        "Climate & disasters",
        &["climate", "flood", "storm", "drought", "wildfire", "earthquake"],
    ),
    (
        "Public safety & crime",
        &["police", "arrest", "trial", "fraud", "shooting", "crime"],
    ),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicEntry {
    pub name: String,
    pub markers: Vec<String>,
}

impl TopicEntry {
    pub fn new(name: impl Into<String>, markers: &[&str]) -> Self {
        Self {
            name: name.into(),
            markers: to_owned_words(markers),
        }
    }
}

/// The full set of word tables used by the pipeline.
///
/// Missing keys in a JSON override fall back to the built-in table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicons {
    pub stop_words: Vec<String>,
    pub sports: Vec<String>,
    pub lifestyle_local: Vec<String>,
    pub finance_ticker: Vec<String>,
    pub topics: Vec<TopicEntry>,
}

impl Default for Lexicons {
    fn default() -> Self {
        Self {
            stop_words: to_owned_words(STOP_WORDS),
            sports: to_owned_words(SPORTS),
            lifestyle_local: to_owned_words(LIFESTYLE_LOCAL),
            finance_ticker: to_owned_words(FINANCE_TICKER),
            topics: TOPIC_LEXICON
                .iter()
                .map(|(name, markers)| TopicEntry::new(*name, markers))
                .collect(),
        }
    }
}

impl Lexicons {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse lexicon JSON")
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon file {}", path.display()))?;
        Self::from_json_str(&json)
    }

    /// Lexicons for a command-line run: the file at `path` or the built-in
    /// tables, plus any stop words listed in `NEWSBRIEF_STOP_WORDS`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let lexicons = match path {
            Some(path) => {
                info!("Loading lexicons from {}", path.display());
                Self::from_json_file(path)?
            }
            None => Self::default(),
        };
        Ok(lexicons.with_extra_stop_words(environment::get_env_var_as_vec(EXTRA_STOP_WORDS_VAR, ',')))
    }

    /// Appends stop words, skipping blanks and words already present.
    pub fn with_extra_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if !word.is_empty() && !self.stop_words.contains(&word) {
                self.stop_words.push(word);
            }
        }
        self
    }
}

fn to_owned_words(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
