//! Data model for document summaries.
//!
//! [`PageInput`] is what the PDF engine hands to the analyzer,
//! [`PageRecord`] is what the analyzer produces per page, and
//! [`AnalysisResult`] is the fixed-shape document written out as JSON.

mod metadata;
mod page;
mod report;

pub use metadata::DocumentMetadata;
pub use page::{HeadingKind, HeadingMatch, PageInput, PageRecord};
pub use report::{
    AnalysisResult, ContentAnalysis, DocumentInfo, DocumentStructure, ExtractedData,
    KeywordEntry, PageSummary,
};
