//! Tests for the async entry point.

#![cfg(feature = "async")]

mod common;

use pdfdigest::{analyze_file_async, Error, PdfDigest};

#[tokio::test]
async fn test_analyze_file_async() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("async.pdf");
    tokio::fs::write(&path, common::sample_report()).await.unwrap();

    let result = analyze_file_async(&path, PdfDigest::new()).await.unwrap();
    assert_eq!(result.document_info.filename, "async.pdf");
    assert_eq!(result.page_count(), 2);
}

#[tokio::test]
async fn test_analyze_file_async_missing() {
    let result = analyze_file_async("/no/such/file.pdf", PdfDigest::new()).await;
    assert!(matches!(result, Err(Error::Io(_))));
}
