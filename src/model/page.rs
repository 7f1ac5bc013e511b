//! Page-level types.

use serde::{Deserialize, Serialize};

/// Raw per-page material supplied by the PDF engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInput {
    /// Page number (1-indexed)
    pub page_number: u32,

    /// Extracted plain text
    pub text: String,

    /// Whether the page draws at least one image
    pub has_images: bool,
}

impl PageInput {
    /// Create a page input.
    pub fn new(page_number: u32, text: impl Into<String>, has_images: bool) -> Self {
        Self {
            page_number,
            text: text.into(),
            has_images,
        }
    }

    /// A page whose extraction failed in lenient mode.
    pub fn empty(page_number: u32) -> Self {
        Self::new(page_number, String::new(), false)
    }
}

/// How a heading line was recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingKind {
    /// All-caps line without digits
    Uppercase,
    /// Line starting with a section number, e.g. `2. Scope`
    Numbered,
}

impl HeadingKind {
    /// Wire name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            HeadingKind::Uppercase => "uppercase",
            HeadingKind::Numbered => "numbered",
        }
    }
}

impl std::fmt::Display for HeadingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A detected heading line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingMatch {
    /// Trimmed line text
    pub text: String,

    /// Detection rule that matched
    #[serde(rename = "type")]
    pub kind: HeadingKind,

    /// 1-based line number within the page text
    pub line_number: u32,
}

impl HeadingMatch {
    /// Create a heading match.
    pub fn new(text: impl Into<String>, kind: HeadingKind, line_number: u32) -> Self {
        Self {
            text: text.into(),
            kind,
            line_number,
        }
    }
}

/// Analyzed page. Built once by the analyzer and not modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Page number (1-indexed)
    pub page_number: u32,

    /// Page text as extracted
    pub text: String,

    /// Number of whitespace-separated words
    pub word_count: usize,

    /// Whether the page draws at least one image
    pub has_images: bool,

    /// Detected headings in document order
    pub headings: Vec<HeadingMatch>,
}

impl PageRecord {
    /// Number of headings detected on the page.
    pub fn heading_count(&self) -> usize {
        self.headings.len()
    }
}
