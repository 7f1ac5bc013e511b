//! Document metadata as reported by the PDF engine.

use serde::{Deserialize, Serialize};

/// Document-level metadata.
///
/// Missing info-dictionary entries are empty strings rather than `null`
/// so the JSON shape never changes between documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Document title
    pub title: String,

    /// Document author
    pub author: String,

    /// Document subject
    pub subject: String,

    /// Creator application
    pub creator: String,

    /// PDF producer
    pub producer: String,

    /// Creation date (RFC 3339 when parseable, raw PDF date otherwise)
    pub creation_date: String,

    /// Last modification date
    pub modification_date: String,

    /// Total number of pages in the file, including pages not analyzed
    pub page_count: u32,

    /// File size in bytes
    pub file_size_bytes: u64,
}

impl DocumentMetadata {
    /// Create metadata carrying only a page count.
    pub fn with_page_count(page_count: u32) -> Self {
        Self {
            page_count,
            ..Default::default()
        }
    }

    /// Set the file size.
    pub fn with_file_size(mut self, bytes: u64) -> Self {
        self.file_size_bytes = bytes;
        self
    }

    /// True when the info dictionary supplied nothing.
    pub fn is_blank(&self) -> bool {
        [
            &self.title,
            &self.author,
            &self.subject,
            &self.creator,
            &self.producer,
            &self.creation_date,
            &self.modification_date,
        ]
        .iter()
        .all(|s| s.is_empty())
    }
}
