//! Output assembly: turns an analysis pass into the fixed-shape
//! [`AnalysisResult`].

use chrono::{DateTime, SecondsFormat, Utc};

use crate::analysis::{AnalysisOptions, ContentReport};
use crate::model::{
    AnalysisResult, ContentAnalysis, DocumentInfo, DocumentMetadata, ExtractedData, PageRecord,
    PageSummary,
};

/// Appended to previews that were cut short.
pub const ELLIPSIS: &str = "...";

/// Assemble the final result for one file.
///
/// `timestamp` is the only input not derived from the document; pass a
/// fixed value to get reproducible output.
pub fn assemble(
    filename: impl Into<String>,
    metadata: DocumentMetadata,
    report: ContentReport,
    timestamp: DateTime<Utc>,
    options: &AnalysisOptions,
) -> AnalysisResult {
    let pages: Vec<PageSummary> = report
        .pages
        .iter()
        .map(|page| summarize_page(page, options.preview_chars))
        .collect();

    let headings = report
        .pages
        .iter()
        .flat_map(|page| page.headings.iter().cloned())
        .collect();

    let full_text = report
        .pages
        .iter()
        .map(|page| page.text.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    AnalysisResult {
        document_info: DocumentInfo {
            filename: filename.into(),
            processing_timestamp: format_timestamp(timestamp),
            metadata,
        },
        content_analysis: ContentAnalysis {
            structure: report.structure,
            pages,
        },
        extracted_data: ExtractedData {
            headings,
            full_text: truncate_chars(&full_text, options.full_text_chars).to_string(),
        },
    }
}

/// Per-page summary with a preview of the page text.
pub fn summarize_page(page: &PageRecord, preview_chars: usize) -> PageSummary {
    PageSummary {
        page_number: page.page_number,
        word_count: page.word_count,
        has_images: page.has_images,
        heading_count: page.heading_count(),
        preview_text: preview(&page.text, preview_chars),
    }
}

/// First `max_chars` characters, with [`ELLIPSIS`] appended only when
/// something was cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    let head = truncate_chars(text, max_chars);
    if head.len() < text.len() {
        format!("{}{}", head, ELLIPSIS)
    } else {
        head.to_string()
    }
}

/// Longest prefix of `text` holding at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// ISO-8601 / RFC 3339 timestamp with second precision.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}
