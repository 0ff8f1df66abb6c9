use std::cmp::Reverse;

use crate::article::ArticleRecord;
use crate::clustering::Cluster;
use crate::text::Tokenizer;

/// Picks the member headline that best matches the cluster's vocabulary.
///
/// Each title scores the sum of the cluster counts of its own tokens. The
/// highest score wins, then the shorter title, then the earlier member.
pub fn representative_title<'a>(cluster: &Cluster<'a>, tokenizer: &Tokenizer) -> &'a str {
    let frequency = cluster.frequency();
    cluster
        .members()
        .iter()
        .copied()
        .map(ArticleRecord::title)
        .min_by_key(|title| {
            let score = frequency.score(tokenizer.tokenize(title));
            (Reverse(score), title.chars().count())
        })
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clustering::ClusteringEngine;

    fn single_cluster(titles: &[&str]) -> Vec<ArticleRecord> {
        titles.iter().map(|t| ArticleRecord::new(*t)).collect()
    }

    #[test]
    fn test_prefers_dominant_vocabulary() {
        // Counts end up tariff=3 talks=3 stall=2 geneva=2 again=1.
        let records = single_cluster(&[
            "Tariff talks stall again",
            "Tariff talks stall in Geneva",
            "Tariff talks Geneva",
        ]);
        let clusters = ClusteringEngine::default().cluster(&records);
        assert_eq!(clusters.len(), 1);
        assert_eq!(
            representative_title(&clusters[0], &Tokenizer::default()),
            "Tariff talks stall in Geneva"
        );
    }

    #[test]
    fn test_shorter_title_breaks_ties() {
        let records = single_cluster(&[
            "Storm floods coastal towns overnight!",
            "Storm floods coastal towns overnight",
        ]);
        let clusters = ClusteringEngine::default().cluster(&records);
        assert_eq!(clusters.len(), 1);
        assert_eq!(
            representative_title(&clusters[0], &Tokenizer::default()),
            "Storm floods coastal towns overnight"
        );
    }

    #[test]
    fn test_equal_titles_keep_member_order() {
        let first = ArticleRecord::new("Quake shakes capital");
        let second = ArticleRecord::new("Quake shakes capital");
        let records = vec![first, second];
        let clusters = ClusteringEngine::default().cluster(&records);
        let chosen = representative_title(&clusters[0], &Tokenizer::default());
        assert!(std::ptr::eq(chosen, records[0].title()));
    }
}
