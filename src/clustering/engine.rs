use std::collections::HashSet;
use tracing::{debug, trace};

use super::similarity::jaccard;
use super::types::Cluster;
use super::{DEFAULT_CENTROID_SIZE, DEFAULT_SIMILARITY_THRESHOLD};
use crate::article::ArticleRecord;
use crate::text::Tokenizer;
use crate::TARGET_PIPELINE;

/// Greedy single-pass title clustering.
///
/// Records are visited once, in order. Each title is compared with the
/// centroid of every cluster formed so far and joins the best one when the
/// similarity reaches the threshold; otherwise it seeds a new cluster. There is
/// no re-assignment, so the outcome depends on input order.
///
/// Every record is compared against every cluster, which is fine for a feed
/// snapshot of a few hundred titles but grows as records × clusters.
#[derive(Debug, Clone)]
pub struct ClusteringEngine {
    tokenizer: Tokenizer,
    threshold: f64,
    centroid_size: usize,
}

impl Default for ClusteringEngine {
    fn default() -> Self {
        Self::new(
            Tokenizer::default(),
            DEFAULT_SIMILARITY_THRESHOLD,
            DEFAULT_CENTROID_SIZE,
        )
    }
}

impl ClusteringEngine {
    pub fn new(tokenizer: Tokenizer, threshold: f64, centroid_size: usize) -> Self {
        Self {
            tokenizer,
            threshold,
            centroid_size,
        }
    }

    /// Groups records into clusters, largest first.
    ///
    /// Records with an empty title, or a title with no content words, are
    /// skipped. Clusters of equal size keep their creation order.
    pub fn cluster<'a, I>(&self, records: I) -> Vec<Cluster<'a>>
    where
        I: IntoIterator<Item = &'a ArticleRecord>,
    {
        let mut clusters: Vec<Cluster<'a>> = Vec::new();
        let mut skipped = 0;

        for record in records {
            let title = record.title().trim();
            if title.is_empty() {
                skipped += 1;
                continue;
            }
            let tokens = self.tokenizer.tokenize(title);
            if tokens.is_empty() {
                trace!(target: TARGET_PIPELINE, "No content words in title: {}", title);
                skipped += 1;
                continue;
            }

            match self.best_match(&clusters, &tokens) {
                Some((index, similarity)) if similarity >= self.threshold => {
                    trace!(
                        target: TARGET_PIPELINE,
                        "Joining cluster {} (similarity {:.3}): {}", index, similarity, title
                    );
                    clusters[index].absorb(record, &tokens);
                }
                _ => clusters.push(Cluster::seed(record, &tokens)),
            }
        }

        // Stable, so equal sizes stay in creation order.
        clusters.sort_by(|a, b| b.len().cmp(&a.len()));

        debug!(
            target: TARGET_PIPELINE,
            "Clustering finished - clusters={}, skipped={}, largest={}",
            clusters.len(),
            skipped,
            clusters.first().map(Cluster::len).unwrap_or(0)
        );

        clusters
    }

    /// Index and similarity of the most similar cluster, if any scores above
    /// zero. The earliest cluster wins a tie.
    fn best_match(&self, clusters: &[Cluster<'_>], tokens: &[String]) -> Option<(usize, f64)> {
        let token_set: HashSet<&str> = tokens.iter().map(String::as_str).collect();

        let mut best = None;
        let mut best_similarity = 0.0;
        for (index, cluster) in clusters.iter().enumerate() {
            let similarity = jaccard(&token_set, &cluster.centroid(self.centroid_size));
            if similarity > best_similarity {
                best_similarity = similarity;
                best = Some((index, similarity));
            }
        }
        best
    }
}
