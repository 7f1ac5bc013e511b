//! The fixed-shape analysis document.

use serde::{Deserialize, Serialize};

use super::{DocumentMetadata, HeadingMatch};

/// Top-level summary of one PDF file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// File identity and metadata
    pub document_info: DocumentInfo,

    /// Aggregate and per-page statistics
    pub content_analysis: ContentAnalysis,

    /// Headings and (truncated) document text
    pub extracted_data: ExtractedData,
}

/// File identity and metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInfo {
    /// File name without directory
    pub filename: String,

    /// Time of the run, ISO-8601
    pub processing_timestamp: String,

    /// Metadata from the PDF engine
    pub metadata: DocumentMetadata,
}

/// Aggregate and per-page statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentAnalysis {
    /// Whole-document statistics
    pub structure: DocumentStructure,

    /// One summary per analyzed page
    pub pages: Vec<PageSummary>,
}

/// Whole-document statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStructure {
    pub total_words: usize,
    pub total_headings: usize,
    pub pages_with_images: usize,
    /// Most frequent words, descending frequency
    pub keywords: Vec<KeywordEntry>,
    pub average_words_per_page: usize,
}

/// A keyword and its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub word: String,
    pub frequency: usize,
}

impl KeywordEntry {
    /// Create a keyword entry.
    pub fn new(word: impl Into<String>, frequency: usize) -> Self {
        Self {
            word: word.into(),
            frequency,
        }
    }
}

/// Per-page statistics with a short text preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSummary {
    pub page_number: u32,
    pub word_count: usize,
    pub has_images: bool,
    pub heading_count: usize,
    pub preview_text: String,
}

/// Headings of all pages and the document text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedData {
    /// All headings, flattened in page order
    pub headings: Vec<HeadingMatch>,

    /// Newline-joined page text, truncated
    pub full_text: String,
}

impl AnalysisResult {
    /// Number of analyzed pages.
    pub fn page_count(&self) -> usize {
        self.content_analysis.pages.len()
    }

    /// Shortcut to the document statistics.
    pub fn structure(&self) -> &DocumentStructure {
        &self.content_analysis.structure
    }
}
