//! Analysis thresholds.

/// Words never reported as keywords.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "this", "that", "with", "from", "have", "will", "they", "been", "said", "each", "which",
    "their", "about", "other", "were", "more",
];

/// Thresholds used by the heading detector, the keyword extractor and the
/// output assembler.
///
/// The defaults are the reference values; changing them changes the output
/// format contract, so they are exposed for experiments rather than tuning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Uppercase headings must be longer than this many characters
    pub heading_min_chars: usize,

    /// Uppercase headings must be shorter than this many characters
    pub heading_max_chars: usize,

    /// Headings kept per page
    pub max_headings_per_page: usize,

    /// Minimum keyword length in letters
    pub keyword_min_letters: usize,

    /// Keywords kept per document
    pub max_keywords: usize,

    /// Words excluded from keywords (lowercase)
    pub stopwords: Vec<String>,

    /// Characters of page text kept in `preview_text`
    pub preview_chars: usize,

    /// Characters of document text kept in `full_text`
    pub full_text_chars: usize,
}

impl AnalysisOptions {
    /// Create options with the reference thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-page heading cap.
    pub fn with_max_headings(mut self, max: usize) -> Self {
        self.max_headings_per_page = max;
        self
    }

    /// Set the keyword cap.
    pub fn with_max_keywords(mut self, max: usize) -> Self {
        self.max_keywords = max;
        self
    }

    /// Replace the stopword list.
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = words.into_iter().map(|w| w.into().to_lowercase()).collect();
        self
    }

    /// Set the preview length.
    pub fn with_preview_chars(mut self, chars: usize) -> Self {
        self.preview_chars = chars;
        self
    }

    /// Set the full text budget.
    pub fn with_full_text_chars(mut self, chars: usize) -> Self {
        self.full_text_chars = chars;
        self
    }
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            heading_min_chars: 3,
            heading_max_chars: 100,
            max_headings_per_page: 20,
            keyword_min_letters: 4,
            max_keywords: 10,
            stopwords: DEFAULT_STOPWORDS.iter().map(|w| w.to_string()).collect(),
            preview_chars: 200,
            full_text_chars: 10_000,
        }
    }
}
