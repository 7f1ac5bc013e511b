//! PDF engine access: loading documents and pulling out page text,
//! image flags and metadata.

mod backend;
mod extractor;
mod options;

pub use backend::{decode_pdf_string, parse_pdf_date, LopdfEngine, PdfEngine};
pub use extractor::{ExtractedDocument, Extractor};
pub use options::{ErrorMode, ExtractOptions, DEFAULT_MAX_PAGES};
