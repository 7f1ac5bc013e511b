//! Integration tests for directory batch processing.

mod common;

use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};

use common::{build_pdf, sample_report, PageSpec};
use pdfdigest::batch::{find_pdf_files, BatchOptions, BatchProcessor, FileOutcome};
use pdfdigest::{AnalysisResult, Error, JsonFormat};

#[test]
fn test_batch_writes_one_json_per_pdf() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let out_dir = output.path().join("results");

    fs::write(input.path().join("report.pdf"), sample_report()).unwrap();
    fs::write(
        input.path().join("memo.v2.PDF"),
        build_pdf(&[PageSpec::text(&["MEMO", "short note"])], None),
    )
    .unwrap();
    fs::write(input.path().join("readme.txt"), "not a pdf").unwrap();

    let report = BatchProcessor::default()
        .run(input.path(), &out_dir)
        .unwrap();

    assert!(report.is_success());
    assert_eq!(report.processed_count(), 2);
    assert!(out_dir.join("report.json").is_file());
    assert!(out_dir.join("memo.v2.json").is_file());
    assert!(!out_dir.join("readme.json").exists());

    let json = fs::read_to_string(out_dir.join("report.json")).unwrap();
    let result: AnalysisResult = serde_json::from_str(&json).unwrap();
    assert_eq!(result.document_info.filename, "report.pdf");
    assert_eq!(result.page_count(), 2);
}

#[test]
fn test_batch_isolates_failures() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    fs::write(input.path().join("good.pdf"), sample_report()).unwrap();
    fs::write(input.path().join("broken.pdf"), "definitely not a pdf").unwrap();

    let seen = AtomicUsize::new(0);
    let report = BatchProcessor::new(BatchOptions::new().with_max_workers(2))
        .run_with_progress(input.path(), output.path(), |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

    assert_eq!(seen.load(Ordering::SeqCst), 2);
    assert_eq!(report.processed_count(), 1);
    assert_eq!(report.failed_count(), 1);
    assert!(!report.is_success());
    assert!(report.failed[0].path.ends_with("broken.pdf"));
    assert!(output.path().join("good.json").is_file());
    assert!(!output.path().join("broken.json").exists());
}

#[test]
fn test_batch_keeps_both_files_when_stems_collide() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    fs::write(input.path().join("report.pdf"), sample_report()).unwrap();
    fs::write(
        input.path().join("report.PDF"),
        build_pdf(&[PageSpec::text(&["UPPER CASE COPY"])], None),
    )
    .unwrap();

    let report = BatchProcessor::default()
        .run(input.path(), output.path())
        .unwrap();

    assert_eq!(report.processed_count(), 2);
    assert_ne!(report.written[0], report.written[1]);

    let mut on_disk: Vec<String> = fs::read_dir(output.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    on_disk.sort();
    assert_eq!(on_disk, vec!["report.json", "report.pdf.json"]);

    let lower = fs::read_to_string(output.path().join("report.pdf.json")).unwrap();
    let lower: AnalysisResult = serde_json::from_str(&lower).unwrap();
    assert_eq!(lower.document_info.filename, "report.pdf");
}

#[test]
fn test_batch_empty_directory() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    let report = BatchProcessor::default()
        .run(input.path(), output.path())
        .unwrap();
    assert_eq!(report.total(), 0);
    assert!(report.is_success());
}

#[test]
fn test_batch_missing_input_directory() {
    let output = tempfile::tempdir().unwrap();
    let missing = output.path().join("nowhere");

    let result = BatchProcessor::default().run(&missing, output.path());
    assert!(matches!(result, Err(Error::InputDirNotFound(_))));
}

#[test]
fn test_process_file_reports_outcome() {
    let input = tempfile::tempdir().unwrap();
    let path = input.path().join("single.pdf");
    fs::write(&path, sample_report()).unwrap();

    let processor = BatchProcessor::new(BatchOptions::new().with_json_format(JsonFormat::Compact));
    match processor.process_file(&path, input.path()) {
        FileOutcome::Written { output, .. } => {
            let json = fs::read_to_string(output).unwrap();
            assert!(!json.contains('\n'));
        }
        FileOutcome::Failed(failed) => panic!("unexpected failure: {}", failed.error),
    }
}

#[test]
fn test_find_pdf_files_sorted() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["b.pdf", "a.pdf", "c.txt"] {
        fs::write(dir.path().join(name), b"").unwrap();
    }
    fs::create_dir(dir.path().join("nested.pdf")).unwrap();

    let files = find_pdf_files(dir.path()).unwrap();
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["a.pdf", "b.pdf"]);
}
