use std::collections::HashSet;
use std::sync::Arc;

use super::normalize;
use crate::lexicon::STOP_WORDS;

/// Splits text into content words.
///
/// A word survives when it is not a stop word, is longer than two characters
/// and is not made up entirely of digits. The stop-word set is shared between
/// clones, so handing a tokenizer to several components is cheap.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stop_words: Arc<HashSet<String>>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(STOP_WORDS.iter().copied())
    }
}

impl Tokenizer {
    pub fn new<I, S>(stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = stop_words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        Self {
            stop_words: Arc::new(stop_words),
        }
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Returns the content words of `text` in their original order.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        normalize(text)
            .split_whitespace()
            .filter(|word| self.keep(word))
            .map(str::to_string)
            .collect()
    }

    fn keep(&self, word: &str) -> bool {
        // Normalized words are ASCII, so byte length is character length.
        word.len() > 2 && !word.bytes().all(|b| b.is_ascii_digit()) && !self.is_stop_word(word)
    }
}
