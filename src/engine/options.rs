//! Extraction options.

/// Pages analyzed per document unless configured otherwise.
pub const DEFAULT_MAX_PAGES: u32 = 50;

/// Options controlling how pages are pulled out of a PDF engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,

    /// Only the first N pages are extracted (`None` = all pages)
    pub max_pages: Option<u32>,

    /// Normalize page text to Unicode NFC
    pub normalize_unicode: bool,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable lenient mode (substitute empty pages for failed ones).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Limit the number of pages; `0` means no limit.
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = (max_pages > 0).then_some(max_pages);
        self
    }

    /// Extract every page.
    pub fn all_pages(mut self) -> Self {
        self.max_pages = None;
        self
    }

    /// Enable or disable NFC normalization.
    pub fn with_unicode_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Whether a page falls inside the page limit.
    pub fn includes_page(&self, index: usize) -> bool {
        self.max_pages.map_or(true, |max| index < max as usize)
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Strict,
            max_pages: Some(DEFAULT_MAX_PAGES),
            normalize_unicode: true,
        }
    }
}

/// Error handling mode during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on any error
    #[default]
    Strict,
    /// Log the error and continue with empty content
    Lenient,
}
