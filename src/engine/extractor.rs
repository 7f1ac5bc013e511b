//! Pulls metadata and page material out of a [`PdfEngine`].

use unicode_normalization::UnicodeNormalization;

use crate::error::Result;
use crate::model::{DocumentMetadata, PageInput};

use super::{ErrorMode, ExtractOptions, PdfEngine};

/// Everything the analyzer needs from one PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDocument {
    /// Document metadata (file size still 0 until the caller sets it)
    pub metadata: DocumentMetadata,
    /// Extracted pages, in document order, capped by `max_pages`
    pub pages: Vec<PageInput>,
}

/// Drives a [`PdfEngine`] according to [`ExtractOptions`].
pub struct Extractor<'a, E: PdfEngine + ?Sized> {
    engine: &'a E,
    options: &'a ExtractOptions,
}

impl<'a, E: PdfEngine + ?Sized> Extractor<'a, E> {
    /// Create an extractor over an engine.
    pub fn new(engine: &'a E, options: &'a ExtractOptions) -> Self {
        Self { engine, options }
    }

    /// Extract metadata and pages.
    pub fn extract(&self) -> Result<ExtractedDocument> {
        let metadata = self.extract_metadata()?;

        let pages = self
            .engine
            .page_numbers()
            .into_iter()
            .enumerate()
            .take_while(|(index, _)| self.options.includes_page(*index))
            .map(|(_, page_num)| self.extract_page(page_num))
            .collect::<Result<Vec<_>>>()?;

        if pages.len() < metadata.page_count as usize {
            log::debug!(
                "Extracted {} of {} pages (page limit)",
                pages.len(),
                metadata.page_count
            );
        }

        Ok(ExtractedDocument { metadata, pages })
    }

    fn extract_metadata(&self) -> Result<DocumentMetadata> {
        match self.engine.metadata() {
            Ok(metadata) => Ok(metadata),
            Err(e) if self.options.error_mode == ErrorMode::Lenient => {
                log::warn!("Failed to read metadata: {}", e);
                Ok(DocumentMetadata::with_page_count(self.engine.page_count()))
            }
            Err(e) => Err(e),
        }
    }

    /// Extract one page.
    pub fn extract_page(&self, page_num: u32) -> Result<PageInput> {
        let page = self
            .engine
            .page_text(page_num)
            .and_then(|text| Ok((text, self.engine.page_has_images(page_num)?)));

        match page {
            Ok((text, has_images)) => {
                let text = if self.options.normalize_unicode {
                    text.nfc().collect()
                } else {
                    text
                };
                log::debug!(
                    "Page {}: {} chars, images: {}",
                    page_num,
                    text.chars().count(),
                    has_images
                );
                Ok(PageInput::new(page_num, text, has_images))
            }
            Err(e) if self.options.error_mode == ErrorMode::Lenient => {
                log::warn!("Failed to process page {}: {}", page_num, e);
                Ok(PageInput::empty(page_num))
            }
            Err(e) => Err(e),
        }
    }
}
