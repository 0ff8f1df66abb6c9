use std::collections::{HashMap, HashSet};

use crate::article::ArticleRecord;

/// Token occurrence counts, remembering the order tokens were first seen.
///
/// First-seen order breaks ties in [`TokenFrequency::most_common`], which keeps
/// centroids deterministic when many tokens share a count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenFrequency {
    order: Vec<String>,
    counts: HashMap<String, usize>,
}

impl TokenFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut frequency = Self::new();
        frequency.add_tokens(tokens);
        frequency
    }

    /// Increments the count of every token, duplicates included.
    pub fn add_tokens<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            let token = token.as_ref();
            match self.counts.get_mut(token) {
                Some(count) => *count += 1,
                None => {
                    self.order.push(token.to_string());
                    self.counts.insert(token.to_string(), 1);
                }
            }
        }
    }

    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Sum of the counts of `tokens`, duplicates counted each time.
    pub fn score<I, S>(&self, tokens: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens.into_iter().map(|t| self.count(t.as_ref())).sum()
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Tokens with their counts, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.order
            .iter()
            .map(move |token| (token.as_str(), self.counts[token]))
    }

    /// The `n` highest counts, ties in first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
    }
}

/// A storyline: articles whose titles share enough vocabulary.
///
/// Members keep insertion order. The token counts cover every member title and
/// only ever grow while the cluster is being built.
#[derive(Debug, Clone)]
pub struct Cluster<'a> {
    members: Vec<&'a ArticleRecord>,
    frequency: TokenFrequency,
}

impl<'a> Cluster<'a> {
    pub(crate) fn seed(record: &'a ArticleRecord, tokens: &[String]) -> Self {
        Self {
            members: vec![record],
            frequency: TokenFrequency::from_tokens(tokens),
        }
    }

    pub(crate) fn absorb(&mut self, record: &'a ArticleRecord, tokens: &[String]) {
        self.members.push(record);
        self.frequency.add_tokens(tokens);
    }

    pub fn members(&self) -> &[&'a ArticleRecord] {
        &self.members
    }

    pub fn frequency(&self) -> &TokenFrequency {
        &self.frequency
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The `size` most frequent tokens, computed from the current counts.
    pub fn centroid(&self, size: usize) -> HashSet<&str> {
        self.frequency
            .most_common(size)
            .into_iter()
            .map(|(token, _)| token)
            .collect()
    }
}
