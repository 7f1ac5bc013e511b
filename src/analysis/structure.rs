//! Page analysis and document-level aggregation.

use crate::model::{DocumentStructure, PageInput, PageRecord};

use super::{AnalysisOptions, HeadingDetector, KeywordExtractor};

/// Pages and statistics produced by one analysis pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentReport {
    /// Analyzed pages in input order
    pub pages: Vec<PageRecord>,
    /// Whole-document statistics
    pub structure: DocumentStructure,
}

/// Document content analyzer.
///
/// Pure and synchronous: the same pages always yield the same report, so
/// one analyzer can be shared across threads.
#[derive(Debug, Clone)]
pub struct Analyzer {
    options: AnalysisOptions,
    headings: HeadingDetector,
    keywords: KeywordExtractor,
}

impl Analyzer {
    /// Create an analyzer with the given options.
    pub fn new(options: AnalysisOptions) -> Self {
        Self {
            headings: HeadingDetector::new(&options),
            keywords: KeywordExtractor::new(&options),
            options,
        }
    }

    /// Options in use.
    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Analyze a single page.
    pub fn analyze_page(&self, page: &PageInput) -> PageRecord {
        PageRecord {
            page_number: page.page_number,
            word_count: count_words(&page.text),
            has_images: page.has_images,
            headings: self.headings.detect(&page.text),
            text: page.text.clone(),
        }
    }

    /// Analyze every page and aggregate the document statistics.
    pub fn analyze(&self, pages: &[PageInput]) -> ContentReport {
        let records: Vec<PageRecord> = pages.iter().map(|p| self.analyze_page(p)).collect();
        let structure = self.summarize(&records);
        log::debug!(
            "Analyzed {} pages: {} words, {} headings, {} keywords",
            records.len(),
            structure.total_words,
            structure.total_headings,
            structure.keywords.len()
        );
        ContentReport {
            pages: records,
            structure,
        }
    }

    /// Aggregate already analyzed pages.
    pub fn summarize(&self, pages: &[PageRecord]) -> DocumentStructure {
        let total_words: usize = pages.iter().map(|p| p.word_count).sum();
        let total_headings: usize = pages.iter().map(|p| p.heading_count()).sum();
        let pages_with_images = pages.iter().filter(|p| p.has_images).count();

        let all_text = pages
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        DocumentStructure {
            total_words,
            total_headings,
            pages_with_images,
            keywords: self.keywords.extract(&all_text),
            average_words_per_page: average_per_page(total_words, pages.len()),
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(AnalysisOptions::default())
    }
}

/// Count maximal runs of non-whitespace characters.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Rounded mean, 0 when there are no pages.
fn average_per_page(total_words: usize, page_count: usize) -> usize {
    if page_count == 0 {
        return 0;
    }
    (total_words as f64 / page_count as f64).round() as usize
}
