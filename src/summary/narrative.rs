use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, info, warn};

use super::params::SummaryParams;
use super::representative::representative_title;
use crate::article::ArticleRecord;
use crate::clustering::{Cluster, ClusteringEngine};
use crate::lexicon::Lexicons;
use crate::signal::SignalFilter;
use crate::text::Tokenizer;
use crate::topics::TopicLabeler;
use crate::TARGET_PIPELINE;

pub const NO_HEADLINES: &str = "No headlines were available to summarize.";
pub const INSUFFICIENT_SIGNAL: &str = "Insufficient signal to produce a coherent summary.";
pub const OPENING_SENTENCE: &str = "The current headlines point to several parallel developments.";
pub const CLOSING_SENTENCE: &str =
    "Taken together, the feed reflects a dispersed news cycle rather than a single dominant global event.";

/// A finished cluster and the topic it was labeled with.
#[derive(Debug, Clone)]
pub struct Storyline<'a> {
    pub topic: String,
    pub cluster: Cluster<'a>,
}

/// One sentence of the briefing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BriefingLine {
    pub topic: String,
    pub headline: String,
    pub articles: usize,
}

impl fmt::Display for BriefingLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.topic, self.headline)
    }
}

/// The paragraph plus the storylines it was built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Briefing {
    pub paragraph: String,
    pub corpus_size: usize,
    pub filtered: bool,
    pub storylines: Vec<BriefingLine>,
}

impl Briefing {
    fn sentinel(message: &str, corpus_size: usize, filtered: bool) -> Self {
        Self {
            paragraph: message.to_string(),
            corpus_size,
            filtered,
            storylines: Vec::new(),
        }
    }
}

/// The records a briefing is built from.
#[derive(Debug, Clone)]
pub struct Corpus<'a> {
    pub records: Vec<&'a ArticleRecord>,
    /// Whether low-signal records were dropped.
    pub filtered: bool,
}

/// Runs the whole pipeline over one snapshot of records.
///
/// A summarizer holds only configuration; every call builds its own clusters,
/// so one instance can serve any number of independent snapshots.
#[derive(Debug, Clone)]
pub struct Summarizer {
    params: SummaryParams,
    tokenizer: Tokenizer,
    signal_filter: SignalFilter,
    engine: ClusteringEngine,
    labeler: TopicLabeler,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new(SummaryParams::default(), &Lexicons::default())
    }
}

impl Summarizer {
    pub fn new(params: SummaryParams, lexicons: &Lexicons) -> Self {
        let tokenizer = Tokenizer::new(&lexicons.stop_words);
        Self {
            signal_filter: SignalFilter::from_lexicons(tokenizer.clone(), lexicons),
            engine: ClusteringEngine::new(
                tokenizer.clone(),
                params.similarity_threshold,
                params.centroid_size,
            ),
            labeler: TopicLabeler::new(lexicons.topics.clone()),
            tokenizer,
            params,
        }
    }

    /// Clusters and labels the given records, largest storyline first.
    pub fn storylines<'a, I>(&self, records: I) -> Vec<Storyline<'a>>
    where
        I: IntoIterator<Item = &'a ArticleRecord>,
    {
        self.engine
            .cluster(records)
            .into_iter()
            .map(|cluster| Storyline {
                topic: self.labeler.label(cluster.frequency()).to_string(),
                cluster,
            })
            .collect()
    }

    /// Representative headline of a storyline.
    pub fn headline<'a>(&self, storyline: &Storyline<'a>) -> &'a str {
        representative_title(&storyline.cluster, &self.tokenizer)
    }

    /// Builds the briefing paragraph for a snapshot of records.
    pub fn build_clean_paragraph(&self, records: &[ArticleRecord]) -> String {
        self.briefing(records).paragraph
    }

    pub fn briefing(&self, records: &[ArticleRecord]) -> Briefing {
        if records.is_empty() {
            info!(target: TARGET_PIPELINE, "No records to summarize");
            return Briefing::sentinel(NO_HEADLINES, 0, false);
        }

        let corpus = self.select_corpus(records);
        let storylines = self.storylines(corpus.records.iter().copied());
        if storylines.is_empty() {
            info!(
                target: TARGET_PIPELINE,
                "No clusterable titles among {} records", corpus.records.len()
            );
            return Briefing::sentinel(INSUFFICIENT_SIGNAL, corpus.records.len(), corpus.filtered);
        }

        let lines: Vec<BriefingLine> = self
            .choose(&storylines)
            .into_iter()
            .map(|storyline| BriefingLine {
                topic: storyline.topic.clone(),
                headline: self.headline(storyline).to_string(),
                articles: storyline.cluster.len(),
            })
            .collect();

        if lines.len() < self.params.narrative_topics {
            warn!(
                target: TARGET_PIPELINE,
                "Only {} storylines available, expected {}; shortening the paragraph",
                lines.len(),
                self.params.narrative_topics
            );
        }

        Briefing {
            paragraph: compose(&lines),
            corpus_size: corpus.records.len(),
            filtered: corpus.filtered,
            storylines: lines,
        }
    }

    /// Drops low-signal records, unless too few would remain.
    pub fn select_corpus<'a>(&self, records: &'a [ArticleRecord]) -> Corpus<'a> {
        let kept: Vec<&ArticleRecord> = records
            .iter()
            .filter(|record| {
                match self
                    .signal_filter
                    .classify(record.title(), record.description())
                {
                    Some(kind) => {
                        debug!(target: TARGET_PIPELINE, "Low-signal ({}): {}", kind, record.title());
                        false
                    }
                    None => true,
                }
            })
            .collect();

        if kept.len() >= self.params.min_filtered_corpus {
            info!(
                target: TARGET_PIPELINE,
                "Using filtered corpus - kept={}, dropped={}",
                kept.len(),
                records.len() - kept.len()
            );
            Corpus {
                records: kept,
                filtered: true,
            }
        } else {
            info!(
                target: TARGET_PIPELINE,
                "Filtered corpus too small ({} < {}), using all {} records",
                kept.len(),
                self.params.min_filtered_corpus,
                records.len()
            );
            Corpus {
                records: records.iter().collect(),
                filtered: false,
            }
        }
    }

    /// Largest storylines with distinct topics; when there aren't enough
    /// distinct topics, simply the largest storylines.
    fn choose<'s, 'a>(&self, storylines: &'s [Storyline<'a>]) -> Vec<&'s Storyline<'a>> {
        let wanted = self.params.narrative_topics;
        let mut seen = HashSet::new();
        let mut chosen = Vec::with_capacity(wanted);

        for storyline in storylines {
            if chosen.len() == wanted {
                break;
            }
            if seen.insert(storyline.topic.as_str()) {
                chosen.push(storyline);
            }
        }

        if chosen.len() < wanted {
            chosen = storylines.iter().take(wanted).collect();
        }
        chosen
    }
}

fn compose(lines: &[BriefingLine]) -> String {
    let mut sentences = Vec::with_capacity(lines.len() + 2);
    sentences.push(OPENING_SENTENCE.to_string());
    sentences.extend(lines.iter().map(|line| format!("{}.", line)));
    sentences.push(CLOSING_SENTENCE.to_string());
    sentences.join(" ")
}

/// Builds the briefing paragraph with the built-in lexicons and defaults.
pub fn build_clean_paragraph(records: &[ArticleRecord]) -> String {
    Summarizer::default().build_clean_paragraph(records)
}
