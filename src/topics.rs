//! Coarse topic labels for finished clusters.

use crate::clustering::TokenFrequency;
use crate::lexicon::{Lexicons, TopicEntry, DEFAULT_TOPIC};

/// Scores token counts against an ordered table of topic marker words.
#[derive(Debug, Clone)]
pub struct TopicLabeler {
    topics: Vec<TopicEntry>,
    default_label: String,
}

impl Default for TopicLabeler {
    fn default() -> Self {
        Self::new(Lexicons::default().topics)
    }
}

impl TopicLabeler {
    /// Earlier entries win ties.
    pub fn new(topics: Vec<TopicEntry>) -> Self {
        let topics = topics
            .into_iter()
            .map(|topic| TopicEntry {
                markers: topic.markers.iter().map(|m| m.to_lowercase()).collect(),
                ..topic
            })
            .collect();
        Self {
            topics,
            default_label: DEFAULT_TOPIC.to_string(),
        }
    }

    /// Sum of the counts of a topic's marker words.
    pub fn score(topic: &TopicEntry, frequency: &TokenFrequency) -> usize {
        frequency.score(&topic.markers)
    }

    /// Best scoring topic, or the default label when no marker word occurs.
    ///
    /// Counts keep growing while clusters are built, so call this only once
    /// clustering has finished.
    pub fn label(&self, frequency: &TokenFrequency) -> &str {
        let mut best_label = self.default_label.as_str();
        let mut best_score = 0;
        for topic in &self.topics {
            let score = Self::score(topic, frequency);
            if score > best_score {
                best_score = score;
                best_label = &topic.name;
            }
        }
        best_label
    }
}
