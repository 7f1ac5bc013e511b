//! Keyword frequency ranking.

use std::collections::HashSet;

use indexmap::IndexMap;
use regex::Regex;

use crate::model::KeywordEntry;

use super::AnalysisOptions;

/// Ranks the most frequent words of a document.
///
/// Tokens are whole runs of ASCII letters of the configured minimum length,
/// taken from the lower-cased text; anything touching a digit or underscore
/// is not a token. Ties in frequency keep the order in which the words were
/// first seen, which is why counting goes through an [`IndexMap`].
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    token: Regex,
    stopwords: HashSet<String>,
    max_keywords: usize,
}

impl KeywordExtractor {
    /// Create an extractor from analysis options.
    pub fn new(options: &AnalysisOptions) -> Self {
        let min_letters = options.keyword_min_letters.max(1);
        let pattern = format!(r"\b[a-z]{{{},}}\b", min_letters);
        Self {
            token: Regex::new(&pattern).unwrap(),
            stopwords: options.stopwords.iter().cloned().collect(),
            max_keywords: options.max_keywords,
        }
    }

    /// Count every token in insertion order, stopwords included.
    pub fn frequencies(&self, text: &str) -> IndexMap<String, usize> {
        let lowered = text.to_lowercase();
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for token in self.token.find_iter(&lowered) {
            *counts.entry(token.as_str().to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Top keywords by descending frequency.
    pub fn extract(&self, text: &str) -> Vec<KeywordEntry> {
        let mut ranked: Vec<(String, usize)> = self
            .frequencies(text)
            .into_iter()
            .filter(|(word, _)| !self.stopwords.contains(word))
            .collect();

        // `sort_by` is stable: equal counts stay in first-seen order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        ranked
            .into_iter()
            .take(self.max_keywords)
            .map(|(word, frequency)| KeywordEntry::new(word, frequency))
            .collect()
    }

    /// Whether a word is excluded from the ranking.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(&AnalysisOptions::default())
    }
}
