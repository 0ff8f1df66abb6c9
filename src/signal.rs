//! Low-signal article detection.
//!
//! Sports results, lifestyle/local fillers and ticker-style finance blurbs
//! crowd out the storylines a briefing is meant to surface. Each of those
//! families has its own word list and overlap threshold; an article is flagged
//! as soon as one family reaches its threshold.

use std::collections::HashSet;
use std::fmt;

use crate::lexicon::Lexicons;
use crate::text::Tokenizer;

pub const SPORTS_MIN_OVERLAP: usize = 2;
pub const LIFESTYLE_MIN_OVERLAP: usize = 2;
// Ticker vocabulary overlaps with ordinary business news, hence the higher bar.
pub const FINANCE_MIN_OVERLAP: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseKind {
    Sports,
    LifestyleLocal,
    FinanceTicker,
}

impl fmt::Display for NoiseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NoiseKind::Sports => "sports",
            NoiseKind::LifestyleLocal => "lifestyle/local",
            NoiseKind::FinanceTicker => "finance-ticker",
        };
        f.write_str(name)
    }
}

/// A noise word list together with the number of distinct hits that trips it.
#[derive(Debug, Clone)]
pub struct NoiseLexicon {
    kind: NoiseKind,
    words: HashSet<String>,
    min_overlap: usize,
}

impl NoiseLexicon {
    pub fn new<I, S>(kind: NoiseKind, words: I, min_overlap: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            kind,
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
            min_overlap,
        }
    }

    pub fn kind(&self) -> NoiseKind {
        self.kind
    }

    fn matches(&self, tokens: &HashSet<String>) -> bool {
        tokens.intersection(&self.words).count() >= self.min_overlap
    }
}

#[derive(Debug, Clone)]
pub struct SignalFilter {
    tokenizer: Tokenizer,
    lexicons: Vec<NoiseLexicon>,
}

impl Default for SignalFilter {
    fn default() -> Self {
        Self::from_lexicons(Tokenizer::default(), &Lexicons::default())
    }
}

impl SignalFilter {
    /// Lexicons are checked in the order given.
    pub fn new(tokenizer: Tokenizer, lexicons: Vec<NoiseLexicon>) -> Self {
        Self { tokenizer, lexicons }
    }

    pub fn from_lexicons(tokenizer: Tokenizer, lexicons: &Lexicons) -> Self {
        Self::new(
            tokenizer,
            vec![
                NoiseLexicon::new(NoiseKind::Sports, &lexicons.sports, SPORTS_MIN_OVERLAP),
                NoiseLexicon::new(
                    NoiseKind::LifestyleLocal,
                    &lexicons.lifestyle_local,
                    LIFESTYLE_MIN_OVERLAP,
                ),
                NoiseLexicon::new(
                    NoiseKind::FinanceTicker,
                    &lexicons.finance_ticker,
                    FINANCE_MIN_OVERLAP,
                ),
            ],
        )
    }

    /// Returns the first noise family the article trips, if any.
    pub fn classify(&self, title: &str, description: &str) -> Option<NoiseKind> {
        let tokens: HashSet<String> = self
            .tokenizer
            .tokenize(&format!("{} {}", title, description))
            .into_iter()
            .collect();

        self.lexicons
            .iter()
            .find(|lexicon| lexicon.matches(&tokens))
            .map(NoiseLexicon::kind)
    }

    pub fn is_low_signal(&self, title: &str, description: &str) -> bool {
        self.classify(title, description).is_some()
    }
}
