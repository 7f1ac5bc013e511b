//! Error types for pdfdigest.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pdfdigest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading, extracting or writing a document summary.
///
/// The analyzer itself never fails; every variant here originates in the
/// PDF engine, the filesystem or serialization.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input does not start with a PDF header.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The header carries a version string we do not recognise.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// The PDF engine could not parse the document structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The document is encrypted.
    #[error("Document is encrypted")]
    Encrypted,

    /// Text extraction failed for a page.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// Page number is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// Serializing the analysis result failed.
    #[error("Rendering error: {0}")]
    Render(String),

    /// Batch input directory is missing.
    #[error("Input directory not found: {}", .0.display())]
    InputDirNotFound(PathBuf),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}
