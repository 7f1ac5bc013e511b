//! Directory batch processing.
//!
//! Every `*.pdf` in the input directory is analyzed on a bounded worker
//! pool and written as `<stem>.json` into the output directory. A file that
//! fails is logged and counted; it never stops the rest of the batch.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use rayon::prelude::*;

use crate::detect::has_pdf_extension;
use crate::error::{Error, Result};
use crate::render::{to_json, JsonFormat};
use crate::PdfDigest;

/// Default upper bound on concurrently processed files.
pub const DEFAULT_MAX_WORKERS: usize = 4;

/// Options for a batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Upper bound on worker threads (at least 1)
    pub max_workers: usize,

    /// Per-file pipeline configuration
    pub digest: PdfDigest,

    /// JSON layout of the written files
    pub json_format: JsonFormat,
}

impl BatchOptions {
    /// Create batch options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the worker bound.
    pub fn with_max_workers(mut self, workers: usize) -> Self {
        self.max_workers = workers.max(1);
        self
    }

    /// Set the per-file pipeline.
    pub fn with_digest(mut self, digest: PdfDigest) -> Self {
        self.digest = digest;
        self
    }

    /// Set the JSON layout.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            max_workers: DEFAULT_MAX_WORKERS,
            digest: PdfDigest::new().lenient(),
            json_format: JsonFormat::Pretty,
        }
    }
}

/// A file the batch could not process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedFile {
    pub path: PathBuf,
    pub error: String,
}

/// Outcome of one file, reported as soon as it finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Written to the given JSON path
    Written { input: PathBuf, output: PathBuf },
    /// Failed with the given message
    Failed(FailedFile),
}

/// Summary of a batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// JSON files written
    pub written: Vec<PathBuf>,
    /// Files that failed
    pub failed: Vec<FailedFile>,
    /// Wall-clock time of the run
    pub elapsed: Duration,
}

impl BatchReport {
    /// Number of files written.
    pub fn processed_count(&self) -> usize {
        self.written.len()
    }

    /// Number of files that failed.
    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    /// Files seen in total.
    pub fn total(&self) -> usize {
        self.processed_count() + self.failed_count()
    }

    /// Mean wall-clock time per file.
    pub fn average_per_file(&self) -> Duration {
        match self.total() {
            0 => Duration::ZERO,
            n => self.elapsed / n as u32,
        }
    }

    /// True when no file failed.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// List the PDF files of a directory (non-recursive), sorted by name.
pub fn find_pdf_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(Error::InputDirNotFound(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_pdf_extension(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Output path for an input file: `<output_dir>/<stem>.json`.
pub fn output_path_for(input: &Path, output_dir: &Path) -> PathBuf {
    let mut name = input.file_stem().unwrap_or_default().to_os_string();
    name.push(".json");
    output_dir.join(name)
}

/// Pair every input with its output path.
///
/// Inputs whose stems collide (`report.pdf` and `report.PDF`) would
/// overwrite each other; later inputs in sorted order fall back to their
/// full file name (`report.pdf.json`). Names are compared case-insensitively
/// so the plan also holds on case-insensitive filesystems.
pub fn plan_outputs(files: &[PathBuf], output_dir: &Path) -> Vec<(PathBuf, PathBuf)> {
    let mut taken = HashSet::new();
    files
        .iter()
        .map(|input| {
            let mut output = output_path_for(input, output_dir);
            let mut attempt = 0;
            while !taken.insert(name_key(&output)) {
                attempt += 1;
                let mut name = input.file_name().unwrap_or_default().to_os_string();
                if attempt > 1 {
                    name.push(format!("-{}", attempt));
                }
                name.push(".json");
                output = output_dir.join(name);
            }
            if attempt > 0 {
                log::warn!(
                    "Output name collision for {}; writing {}",
                    input.display(),
                    output.display()
                );
            }
            (input.clone(), output)
        })
        .collect()
}

fn name_key(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Runs the pipeline over a directory of PDFs.
pub struct BatchProcessor {
    options: BatchOptions,
}

impl BatchProcessor {
    /// Create a processor.
    pub fn new(options: BatchOptions) -> Self {
        Self { options }
    }

    /// Process every PDF in `input_dir`.
    pub fn run(&self, input_dir: &Path, output_dir: &Path) -> Result<BatchReport> {
        self.run_with_progress(input_dir, output_dir, |_| {})
    }

    /// Process every PDF in `input_dir`, calling `on_file` after each file.
    ///
    /// `on_file` runs on worker threads.
    pub fn run_with_progress<F>(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        on_file: F,
    ) -> Result<BatchReport>
    where
        F: Fn(&FileOutcome) + Sync,
    {
        let start = Instant::now();
        let files = find_pdf_files(input_dir)?;

        if files.is_empty() {
            log::warn!("No PDF files found in {}", input_dir.display());
            return Ok(BatchReport::default());
        }

        fs::create_dir_all(output_dir)?;
        log::info!("Found {} PDF files to process", files.len());

        let workers = self.options.max_workers.max(1).min(files.len());
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()
            .map_err(|e| Error::Other(format!("Failed to start worker pool: {}", e)))?;

        let plan = plan_outputs(&files, output_dir);
        let outcomes: Vec<FileOutcome> = pool.install(|| {
            plan.par_iter()
                .map(|(input, output)| {
                    let outcome = self.write_summary(input, output);
                    on_file(&outcome);
                    outcome
                })
                .collect()
        });

        let mut report = BatchReport::default();
        for outcome in outcomes {
            match outcome {
                FileOutcome::Written { output, .. } => report.written.push(output),
                FileOutcome::Failed(failed) => report.failed.push(failed),
            }
        }
        report.elapsed = start.elapsed();

        log::info!(
            "Processing complete: {} succeeded, {} failed",
            report.processed_count(),
            report.failed_count()
        );
        log::info!(
            "Total time: {:.2}s, average per file: {:.2}s",
            report.elapsed.as_secs_f64(),
            report.average_per_file().as_secs_f64()
        );

        Ok(report)
    }

    /// Analyze one file and write `<stem>.json` into `output_dir`.
    pub fn process_file(&self, input: &Path, output_dir: &Path) -> FileOutcome {
        self.write_summary(input, &output_path_for(input, output_dir))
    }

    fn write_summary(&self, input: &Path, output: &Path) -> FileOutcome {
        let start = Instant::now();
        let name = input
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        log::info!("Processing: {}", name);

        let written = self
            .options
            .digest
            .analyze_file(input)
            .and_then(|result| to_json(&result, self.options.json_format))
            .and_then(|json| fs::write(output, json).map_err(Error::from));

        match written {
            Ok(()) => {
                log::info!(
                    "Successfully processed {} in {:.2}s",
                    name,
                    start.elapsed().as_secs_f64()
                );
                FileOutcome::Written {
                    input: input.to_path_buf(),
                    output: output.to_path_buf(),
                }
            }
            Err(e) => {
                log::error!("Failed to process {}: {}", name, e);
                FileOutcome::Failed(FailedFile {
                    path: input.to_path_buf(),
                    error: e.to_string(),
                })
            }
        }
    }
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new(BatchOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_for() {
        let out = output_path_for(Path::new("/in/annual.report.pdf"), Path::new("/out"));
        assert_eq!(out, PathBuf::from("/out/annual.report.json"));
    }

    #[test]
    fn test_plan_outputs_resolves_stem_collisions() {
        let files = vec![
            PathBuf::from("/in/Report.PDF"),
            PathBuf::from("/in/notes.pdf"),
            PathBuf::from("/in/report.pdf"),
        ];
        let outputs: Vec<PathBuf> = plan_outputs(&files, Path::new("/out"))
            .into_iter()
            .map(|(_, output)| output)
            .collect();
        assert_eq!(
            outputs,
            vec![
                PathBuf::from("/out/Report.json"),
                PathBuf::from("/out/notes.json"),
                PathBuf::from("/out/report.pdf.json"),
            ]
        );
    }

    #[test]
    fn test_plan_outputs_fallback_collision() {
        let files = vec![
            PathBuf::from("/in/a.pdf"),
            PathBuf::from("/in/a.pdf.pdf"),
            PathBuf::from("/in/A.PDF"),
        ];
        let outputs: Vec<PathBuf> = plan_outputs(&files, Path::new("/out"))
            .into_iter()
            .map(|(_, output)| output)
            .collect();
        assert_eq!(
            outputs,
            vec![
                PathBuf::from("/out/a.json"),
                PathBuf::from("/out/a.pdf.json"),
                PathBuf::from("/out/A.PDF-2.json"),
            ]
        );
    }

    #[test]
    fn test_find_pdf_files_missing_dir() {
        let result = find_pdf_files("/definitely/not/here");
        assert!(matches!(result, Err(Error::InputDirNotFound(_))));
    }

    #[test]
    fn test_report_average() {
        let report = BatchReport {
            written: vec![PathBuf::from("a.json")],
            failed: vec![FailedFile {
                path: PathBuf::from("b.pdf"),
                error: "bad".into(),
            }],
            elapsed: Duration::from_secs(4),
        };
        assert_eq!(report.total(), 2);
        assert_eq!(report.average_per_file(), Duration::from_secs(2));
        assert!(!report.is_success());
        assert_eq!(BatchReport::default().average_per_file(), Duration::ZERO);
    }

    #[test]
    fn test_options_builder_clamps_workers() {
        let options = BatchOptions::new()
            .with_max_workers(0)
            .with_json_format(JsonFormat::Compact);
        assert_eq!(options.max_workers, 1);
        assert_eq!(options.json_format, JsonFormat::Compact);
    }
}
