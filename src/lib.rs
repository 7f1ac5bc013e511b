//! # pdfdigest
//!
//! Structured JSON summaries of PDF documents.
//!
//! A summary holds the document metadata, per-page statistics, detected
//! headings, the most frequent keywords and a truncated copy of the text.
//! PDF parsing is delegated to [`lopdf`]; this crate analyzes the
//! extracted text and assembles a fixed-shape result.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfdigest::{analyze_file, render};
//!
//! fn main() -> pdfdigest::Result<()> {
//!     let result = analyze_file("document.pdf")?;
//!     let json = render::to_json(&result, render::JsonFormat::Pretty)?;
//!     println!("{}", json);
//!     Ok(())
//! }
//! ```
//!
//! ## Analyzing text directly
//!
//! The analyzer does not need a PDF at all:
//!
//! ```
//! use pdfdigest::{analyze_pages, DocumentMetadata, PageInput};
//!
//! let pages = vec![
//!     PageInput::new(1, "INTRODUCTION\nRust makes systems programming pleasant.", false),
//!     PageInput::new(2, "2. Results\nSystems written in Rust stay fast.", true),
//! ];
//! let result = analyze_pages("notes.pdf", DocumentMetadata::with_page_count(2), &pages);
//!
//! assert_eq!(result.structure().total_headings, 2);
//! assert_eq!(result.structure().keywords[0].word, "rust");
//! ```
//!
//! ## Features
//!
//! - **Heading detection**: all-caps and numbered section lines
//! - **Keyword ranking**: stopword-filtered word frequencies
//! - **Batch mode**: whole directories on a bounded worker pool (Rayon)
//! - **Async**: `analyze_file_async` behind the `async` feature

pub mod analysis;
pub mod assemble;
pub mod batch;
pub mod detect;
pub mod engine;
pub mod error;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use analysis::{AnalysisOptions, Analyzer, ContentReport, HeadingDetector, KeywordExtractor};
pub use batch::{BatchOptions, BatchProcessor, BatchReport};
pub use engine::{ErrorMode, ExtractOptions, Extractor, LopdfEngine, PdfEngine};
pub use error::{Error, Result};
pub use model::{
    AnalysisResult, DocumentMetadata, DocumentStructure, HeadingKind, HeadingMatch, KeywordEntry,
    PageInput, PageRecord,
};
pub use render::{to_json, to_summary, JsonFormat};

use std::io::Read;
use std::path::Path;

use chrono::Utc;

/// Analyze a PDF file with default options.
///
/// # Example
///
/// ```no_run
/// let result = pdfdigest::analyze_file("document.pdf").unwrap();
/// println!("Words: {}", result.structure().total_words);
/// ```
pub fn analyze_file<P: AsRef<Path>>(path: P) -> Result<AnalysisResult> {
    PdfDigest::new().analyze_file(path)
}

/// Analyze a PDF held in memory. `filename` is reported as-is.
pub fn analyze_bytes(filename: &str, data: &[u8]) -> Result<AnalysisResult> {
    PdfDigest::new().analyze_bytes(filename, data)
}

/// Analyze a PDF from any reader. `filename` is reported as-is.
///
/// # Example
///
/// ```no_run
/// use std::fs::File;
///
/// let file = File::open("document.pdf")?;
/// let result = pdfdigest::analyze_reader("document.pdf", file)?;
/// # Ok::<(), pdfdigest::Error>(())
/// ```
pub fn analyze_reader<R: Read>(filename: &str, reader: R) -> Result<AnalysisResult> {
    PdfDigest::new().analyze_reader(filename, reader)
}

/// Analyze already extracted pages. Never fails.
pub fn analyze_pages(
    filename: &str,
    metadata: DocumentMetadata,
    pages: &[PageInput],
) -> AnalysisResult {
    PdfDigest::new().analyze_pages(filename, metadata, pages)
}

/// Analyze a PDF file without blocking the async runtime.
///
/// The file is read with `tokio::fs`; parsing and analysis run on the
/// blocking pool.
#[cfg(feature = "async")]
pub async fn analyze_file_async<P: AsRef<Path>>(
    path: P,
    digest: PdfDigest,
) -> Result<AnalysisResult> {
    let path = path.as_ref();
    let data = tokio::fs::read(path).await?;
    let filename = file_name_of(path);

    tokio::task::spawn_blocking(move || digest.analyze_bytes(&filename, &data))
        .await
        .map_err(|e| Error::Other(format!("Analysis task failed: {}", e)))?
}

/// Builder for the extract → analyze → assemble pipeline.
///
/// # Example
///
/// ```no_run
/// use pdfdigest::PdfDigest;
///
/// let result = PdfDigest::new()
///     .lenient()
///     .with_max_pages(10)
///     .analyze_file("document.pdf")?;
/// # Ok::<(), pdfdigest::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PdfDigest {
    extract_options: ExtractOptions,
    analyzer: Analyzer,
}

impl PdfDigest {
    /// Create a pipeline with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Substitute empty pages for pages that fail to extract.
    pub fn lenient(mut self) -> Self {
        self.extract_options = self.extract_options.lenient();
        self
    }

    /// Analyze at most `max_pages` pages; `0` means all pages.
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.extract_options = self.extract_options.with_max_pages(max_pages);
        self
    }

    /// Analyze every page.
    pub fn all_pages(mut self) -> Self {
        self.extract_options = self.extract_options.all_pages();
        self
    }

    /// Replace the extraction options.
    pub fn with_extract_options(mut self, options: ExtractOptions) -> Self {
        self.extract_options = options;
        self
    }

    /// Replace the analysis thresholds.
    pub fn with_analysis_options(mut self, options: AnalysisOptions) -> Self {
        self.analyzer = Analyzer::new(options);
        self
    }

    /// Extraction options in use.
    pub fn extract_options(&self) -> &ExtractOptions {
        &self.extract_options
    }

    /// Analysis options in use.
    pub fn analysis_options(&self) -> &AnalysisOptions {
        self.analyzer.options()
    }

    /// Analyze a PDF file.
    pub fn analyze_file<P: AsRef<Path>>(&self, path: P) -> Result<AnalysisResult> {
        let path = path.as_ref();
        let engine = LopdfEngine::load_file(path)?;
        let file_size = std::fs::metadata(path)?.len();
        self.analyze_engine(&file_name_of(path), &engine, file_size)
    }

    /// Analyze a PDF held in memory.
    pub fn analyze_bytes(&self, filename: &str, data: &[u8]) -> Result<AnalysisResult> {
        let engine = LopdfEngine::load_bytes(data)?;
        self.analyze_engine(filename, &engine, data.len() as u64)
    }

    /// Analyze a PDF read to the end from `reader`.
    pub fn analyze_reader<R: Read>(
        &self,
        filename: &str,
        mut reader: R,
    ) -> Result<AnalysisResult> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        self.analyze_bytes(filename, &data)
    }

    /// Analyze a document through any [`PdfEngine`].
    pub fn analyze_engine<E: PdfEngine + ?Sized>(
        &self,
        filename: &str,
        engine: &E,
        file_size: u64,
    ) -> Result<AnalysisResult> {
        let extracted = Extractor::new(engine, &self.extract_options).extract()?;
        let metadata = extracted.metadata.with_file_size(file_size);
        Ok(self.analyze_pages(filename, metadata, &extracted.pages))
    }

    /// Analyze already extracted pages.
    pub fn analyze_pages(
        &self,
        filename: &str,
        metadata: DocumentMetadata,
        pages: &[PageInput],
    ) -> AnalysisResult {
        let report = self.analyzer.analyze(pages);
        assemble::assemble(filename, metadata, report, Utc::now(), self.analyzer.options())
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let digest = PdfDigest::new();
        assert_eq!(digest.extract_options().error_mode, ErrorMode::Strict);
        assert_eq!(digest.extract_options().max_pages, Some(50));
        assert_eq!(digest.analysis_options(), &AnalysisOptions::default());
    }

    #[test]
    fn test_builder_chained() {
        let digest = PdfDigest::new()
            .lenient()
            .with_max_pages(5)
            .with_analysis_options(AnalysisOptions::new().with_max_keywords(3));

        assert_eq!(digest.extract_options().error_mode, ErrorMode::Lenient);
        assert_eq!(digest.extract_options().max_pages, Some(5));
        assert_eq!(digest.analysis_options().max_keywords, 3);
        assert_eq!(digest.all_pages().extract_options().max_pages, None);
    }

    #[test]
    fn test_analyze_bytes_rejects_garbage() {
        assert!(matches!(
            analyze_bytes("x.pdf", b"<!DOCTYPE html><html></html>"),
            Err(Error::UnknownFormat)
        ));
        assert!(analyze_bytes("x.pdf", b"").is_err());
    }

    #[test]
    fn test_analyze_reader_rejects_garbage() {
        let reader = std::io::Cursor::new(b"GIF89a not a pdf".to_vec());
        assert!(matches!(
            analyze_reader("x.pdf", reader),
            Err(Error::UnknownFormat)
        ));
    }

    #[test]
    fn test_analyze_pages() {
        let pages = [
            PageInput::new(1, "WORD1. INTRO\nHello world", false),
            PageInput::new(2, "more text here", false),
        ];
        let result = analyze_pages("edge.pdf", DocumentMetadata::default(), &pages);
        assert!(result.extracted_data.headings.is_empty());
        assert_eq!(result.structure().total_words, 7);
        assert_eq!(result.document_info.filename, "edge.pdf");
    }

    #[test]
    fn test_file_name_of() {
        assert_eq!(file_name_of(Path::new("/tmp/in/report.pdf")), "report.pdf");
        assert_eq!(file_name_of(Path::new("/")), "");
    }
}
