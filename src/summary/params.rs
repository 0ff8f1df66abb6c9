use serde::{Deserialize, Serialize};

use crate::clustering::{DEFAULT_CENTROID_SIZE, DEFAULT_SIMILARITY_THRESHOLD};

/// Filtered corpora smaller than this are too thin to summarize from.
pub const DEFAULT_MIN_FILTERED_CORPUS: usize = 40;

/// Storylines named in the paragraph.
pub const DEFAULT_NARRATIVE_TOPICS: usize = 3;

/// Tunables for [`Summarizer`](super::Summarizer).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryParams {
    pub similarity_threshold: f64,
    pub min_filtered_corpus: usize,
    pub centroid_size: usize,
    pub narrative_topics: usize,
}

impl Default for SummaryParams {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            min_filtered_corpus: DEFAULT_MIN_FILTERED_CORPUS,
            centroid_size: DEFAULT_CENTROID_SIZE,
            narrative_topics: DEFAULT_NARRATIVE_TOPICS,
        }
    }
}

impl SummaryParams {
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    pub fn with_min_filtered_corpus(mut self, size: usize) -> Self {
        self.min_filtered_corpus = size;
        self
    }

    pub fn with_centroid_size(mut self, size: usize) -> Self {
        self.centroid_size = size;
        self
    }

    pub fn with_narrative_topics(mut self, topics: usize) -> Self {
        self.narrative_topics = topics;
        self
    }
}

/// Parses a similarity threshold, accepting only values in `0.0..=1.0`.
///
/// Shaped as a clap `value_parser`.
pub fn parse_threshold(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.trim().parse().map_err(|e| format!("{}", e))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{} is outside 0.0-1.0", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_threshold_bounds() {
        assert_eq!(parse_threshold("0.33"), Ok(0.33));
        assert_eq!(parse_threshold("0"), Ok(0.0));
        assert_eq!(parse_threshold("1.0"), Ok(1.0));
        assert!(parse_threshold("1.5").is_err());
        assert!(parse_threshold("-0.1").is_err());
        assert!(parse_threshold("NaN").is_err());
        assert!(parse_threshold("high").is_err());
    }
}
