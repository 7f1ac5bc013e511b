//! Plain text summary of an analysis result.

use std::fmt::Write;

use crate::model::AnalysisResult;

/// Headings listed in the summary before it is cut off.
const SUMMARY_HEADING_LIMIT: usize = 15;

/// Render a human-readable summary.
pub fn to_summary(result: &AnalysisResult) -> String {
    let info = &result.document_info;
    let meta = &info.metadata;
    let structure = result.structure();
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "File: {}", info.filename);
    let _ = writeln!(out, "Processed: {}", info.processing_timestamp);
    for (label, value) in [
        ("Title", &meta.title),
        ("Author", &meta.author),
        ("Subject", &meta.subject),
        ("Creator", &meta.creator),
        ("Producer", &meta.producer),
        ("Created", &meta.creation_date),
        ("Modified", &meta.modification_date),
    ] {
        if !value.is_empty() {
            let _ = writeln!(out, "{}: {}", label, value);
        }
    }
    let _ = writeln!(
        out,
        "Pages: {} ({} analyzed)",
        meta.page_count,
        result.page_count()
    );
    let _ = writeln!(out, "Size: {} bytes", meta.file_size_bytes);

    out.push('\n');
    let _ = writeln!(out, "Words: {}", structure.total_words);
    let _ = writeln!(out, "Words per page: {}", structure.average_words_per_page);
    let _ = writeln!(out, "Headings: {}", structure.total_headings);
    let _ = writeln!(out, "Pages with images: {}", structure.pages_with_images);

    if !structure.keywords.is_empty() {
        let keywords = structure
            .keywords
            .iter()
            .map(|k| format!("{} ({})", k.word, k.frequency))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "Keywords: {}", keywords);
    }

    let headings = &result.extracted_data.headings;
    if !headings.is_empty() {
        out.push('\n');
        out.push_str("Headings:\n");
        for heading in headings.iter().take(SUMMARY_HEADING_LIMIT) {
            let _ = writeln!(out, "  [{}] {}", heading.kind, heading.text);
        }
        if headings.len() > SUMMARY_HEADING_LIMIT {
            let _ = writeln!(
                out,
                "  ... {} more",
                headings.len() - SUMMARY_HEADING_LIMIT
            );
        }
    }

    out
}
