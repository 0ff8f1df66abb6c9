use crate::article::ArticleRecord;
use crate::clustering::{Cluster, ClusteringEngine, TokenFrequency, DEFAULT_CENTROID_SIZE};
use crate::text::Tokenizer;

fn records(titles: &[&str]) -> Vec<ArticleRecord> {
    titles.iter().map(|t| ArticleRecord::new(*t)).collect()
}

fn titles<'a>(cluster: &Cluster<'a>) -> Vec<&'a str> {
    cluster.members().iter().copied().map(ArticleRecord::title).collect()
}

#[test]
fn test_similar_titles_share_a_cluster() {
    let input = records(&[
        "Ukraine ceasefire talks resume in Geneva",
        "Flood warnings issued across Bavaria",
        "Ceasefire talks resume as Ukraine pushes for deal",
        "Bavaria flood warnings extended",
    ]);
    let clusters = ClusteringEngine::default().cluster(&input);

    assert_eq!(clusters.len(), 2);
    assert_eq!(
        titles(&clusters[0]),
        vec![
            "Ukraine ceasefire talks resume in Geneva",
            "Ceasefire talks resume as Ukraine pushes for deal"
        ]
    );
    assert_eq!(
        titles(&clusters[1]),
        vec!["Flood warnings issued across Bavaria", "Bavaria flood warnings extended"]
    );
}

#[test]
fn test_every_tokenizable_record_lands_in_one_cluster() {
    let input = records(&[
        "Central bank holds interest rates",
        "",
        "   ",
        "The of and 2024",
        "Central bank signals rate cut",
        "Wildfire spreads near Athens",
        "Chip exports face new limits",
        "Athens wildfire forces evacuations",
    ]);
    let clusters = ClusteringEngine::default().cluster(&input);

    let total: usize = clusters.iter().map(|c| c.len()).sum();
    assert_eq!(total, 5);
    assert!(clusters.iter().all(|c| !c.is_empty()));

    for record in input.iter().filter(|r| !Tokenizer::default().tokenize(r.title()).is_empty()) {
        let homes = clusters
            .iter()
            .filter(|c| c.members().iter().any(|m| std::ptr::eq(*m, record)))
            .count();
        assert_eq!(homes, 1, "{}", record.title());
    }
}

#[test]
fn test_clusters_sorted_by_size_with_stable_ties() {
    let input = records(&[
        "Storm batters northern coast",
        "Election results delayed again",
        "Chip shortage hits carmakers",
        "Chip shortage hits phone makers",
        "Election results delayed in capital",
        "Chip shortage hits laptop makers",
    ]);
    let clusters = ClusteringEngine::default().cluster(&input);

    let sizes: Vec<usize> = clusters.iter().map(|c| c.len()).collect();
    assert_eq!(sizes, vec![3, 2, 1]);
    assert_eq!(clusters[0].members()[0].title(), "Chip shortage hits carmakers");
    assert!(sizes.windows(2).all(|w| w[0] >= w[1]));

    let singles = records(&["Alpha bravo charlie", "Delta echo foxtrot", "Golf hotel india"]);
    let clusters = ClusteringEngine::default().cluster(&singles);
    let order: Vec<&str> = clusters.iter().map(|c| c.members()[0].title()).collect();
    assert_eq!(order, vec!["Alpha bravo charlie", "Delta echo foxtrot", "Golf hotel india"]);
}

#[test]
fn test_tie_goes_to_earliest_cluster() {
    // Both seeds share exactly one of three tokens with the third title.
    let input = records(&[
        "Alpha bravo charlie",
        "Delta echo foxtrot",
        "Alpha delta zulu",
    ]);
    let engine = ClusteringEngine::new(Tokenizer::default(), 0.2, DEFAULT_CENTROID_SIZE);
    let clusters = engine.cluster(&input);

    assert_eq!(clusters.len(), 2);
    assert_eq!(titles(&clusters[0]), vec!["Alpha bravo charlie", "Alpha delta zulu"]);
}

#[test]
fn test_below_threshold_starts_new_cluster() {
    let input = records(&["Alpha bravo charlie", "Alpha delta zulu"]);
    let strict = ClusteringEngine::new(Tokenizer::default(), 0.5, DEFAULT_CENTROID_SIZE);
    assert_eq!(strict.cluster(&input).len(), 2);

    let loose = ClusteringEngine::new(Tokenizer::default(), 0.2, DEFAULT_CENTROID_SIZE);
    assert_eq!(loose.cluster(&input).len(), 1);
}

#[test]
fn test_short_centroid_ignores_less_frequent_tokens() {
    let input = records(&[
        "Trade talks stall geneva",
        "Trade talks resume geneva",
        "Trade talks collapse geneva",
        "Stall resume collapse",
    ]);

    // With two centroid tokens the cluster is only {trade, talks}, so the last
    // title shares nothing with it.
    let narrow = ClusteringEngine::new(Tokenizer::default(), 0.33, 2);
    let clusters = narrow.cluster(&input);
    assert_eq!(clusters.len(), 2);
    assert_eq!(titles(&clusters[1]), vec!["Stall resume collapse"]);

    let wide = ClusteringEngine::new(Tokenizer::default(), 0.33, DEFAULT_CENTROID_SIZE);
    assert_eq!(wide.cluster(&input).len(), 1);
}

#[test]
fn test_frequency_accumulates_member_titles() {
    let input = records(&[
        "Trade talks stall over tariffs",
        "Trade talks resume over tariffs",
    ]);
    let clusters = ClusteringEngine::default().cluster(&input);
    assert_eq!(clusters.len(), 1);

    let frequency = clusters[0].frequency();
    assert_eq!(frequency.count("trade"), 2);
    assert_eq!(frequency.count("tariffs"), 2);
    assert_eq!(frequency.count("stall"), 1);
    assert_eq!(frequency.count("resume"), 1);
}

#[test]
fn test_centroid_limited_to_most_frequent() {
    let frequency = TokenFrequency::from_tokens([
        "trade", "talks", "trade", "tariffs", "trade", "talks", "beijing",
    ]);
    assert_eq!(
        frequency.most_common(2),
        vec![("trade", 3), ("talks", 2)]
    );
    // Equal counts keep first-seen order.
    assert_eq!(
        frequency.most_common(4),
        vec![("trade", 3), ("talks", 2), ("tariffs", 1), ("beijing", 1)]
    );
    assert_eq!(frequency.score(["trade", "beijing", "unknown"]), 4);
}

#[test]
fn test_empty_input_yields_no_clusters() {
    let input: Vec<ArticleRecord> = Vec::new();
    assert!(ClusteringEngine::default().cluster(&input).is_empty());

    let untitled = vec![ArticleRecord::default(), ArticleRecord::new("The and of")];
    assert!(ClusteringEngine::default().cluster(&untitled).is_empty());
}
