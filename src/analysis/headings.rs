//! Line-based heading detection.

use regex::Regex;

use crate::model::{HeadingKind, HeadingMatch};

use super::AnalysisOptions;

/// Classifies page lines as headings.
///
/// A trimmed line is an `uppercase` heading when its character length lies
/// strictly between the configured bounds, it has at least one upper-case
/// letter and no digit, and upper-casing leaves it unchanged. Otherwise it is a `numbered` heading when it starts
/// with `<digits>[.]<space><Capital>`.
#[derive(Debug, Clone)]
pub struct HeadingDetector {
    min_chars: usize,
    max_chars: usize,
    max_headings: usize,
    numbered: Regex,
}

impl HeadingDetector {
    /// Create a detector from analysis options.
    pub fn new(options: &AnalysisOptions) -> Self {
        Self {
            min_chars: options.heading_min_chars,
            max_chars: options.heading_max_chars,
            max_headings: options.max_headings_per_page,
            numbered: Regex::new(r"^[0-9]+\.?\s+[A-Z]").unwrap(),
        }
    }

    /// Detect headings in one page of text, in document order.
    pub fn detect(&self, text: &str) -> Vec<HeadingMatch> {
        text.split('\n')
            .enumerate()
            .filter_map(|(index, raw)| {
                let line = raw.trim();
                if line.is_empty() {
                    return None;
                }
                self.classify(line)
                    .map(|kind| HeadingMatch::new(line, kind, (index + 1) as u32))
            })
            .take(self.max_headings)
            .collect()
    }

    /// Classify a single trimmed line.
    pub fn classify(&self, line: &str) -> Option<HeadingKind> {
        if self.is_uppercase_heading(line) {
            Some(HeadingKind::Uppercase)
        } else if self.numbered.is_match(line) {
            Some(HeadingKind::Numbered)
        } else {
            None
        }
    }

    fn is_uppercase_heading(&self, line: &str) -> bool {
        let len = line.chars().count();
        len > self.min_chars
            && len < self.max_chars
            && !line.chars().any(|c| c.is_ascii_digit())
            && line.chars().any(char::is_uppercase)
            && line.to_uppercase() == line
    }
}

impl Default for HeadingDetector {
    fn default() -> Self {
        Self::new(&AnalysisOptions::default())
    }
}
