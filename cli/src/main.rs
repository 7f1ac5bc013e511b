//! pdfdigest CLI - structured JSON summaries of PDF files

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdfdigest::batch::{BatchOptions, BatchProcessor, FileOutcome};
use pdfdigest::{JsonFormat, PdfDigest};

const DEFAULT_INPUT_DIR: &str = "/app/input";
const DEFAULT_OUTPUT_DIR: &str = "/app/output";

#[derive(Parser)]
#[command(name = "pdfdigest")]
#[command(version)]
#[command(about = "Summarize PDF files as structured JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single PDF and print or save its JSON summary
    Analyze {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Maximum pages to analyze (0 = all)
        #[arg(long, default_value_t = pdfdigest::engine::DEFAULT_MAX_PAGES)]
        max_pages: u32,

        /// Fail on the first page that cannot be extracted
        #[arg(long)]
        strict: bool,
    },

    /// Analyze every PDF in a directory, writing one JSON file per PDF
    Batch(BatchArgs),

    /// Show a readable summary of a PDF
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Maximum pages to analyze (0 = all)
        #[arg(long, default_value_t = pdfdigest::engine::DEFAULT_MAX_PAGES)]
        max_pages: u32,
    },

    /// Show version information
    Version,
}

#[derive(clap::Args)]
struct BatchArgs {
    /// Directory containing PDF files
    #[arg(short, long, value_name = "DIR", env = "PDFDIGEST_INPUT", default_value = DEFAULT_INPUT_DIR)]
    input: PathBuf,

    /// Directory receiving JSON files
    #[arg(short, long, value_name = "DIR", env = "PDFDIGEST_OUTPUT", default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Maximum files processed concurrently
    #[arg(short, long, env = "PDFDIGEST_WORKERS", default_value_t = pdfdigest::batch::DEFAULT_MAX_WORKERS)]
    workers: usize,

    /// Maximum pages to analyze per file (0 = all)
    #[arg(long, default_value_t = pdfdigest::engine::DEFAULT_MAX_PAGES)]
    max_pages: u32,

    /// Write compact JSON
    #[arg(long)]
    compact: bool,
}

impl BatchArgs {
    /// Arguments of a bare `pdfdigest batch`: clap defaults and env vars.
    fn from_env() -> Self {
        match Cli::parse_from(["pdfdigest", "batch"]).command {
            Some(Commands::Batch(args)) => args,
            _ => unreachable!("`batch` always parses to the batch command"),
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Analyze {
            input,
            output,
            compact,
            max_pages,
            strict,
        }) => cmd_analyze(&input, output.as_deref(), compact, max_pages, strict),
        Some(Commands::Batch(args)) => cmd_batch(&args),
        Some(Commands::Info { input, max_pages }) => cmd_info(&input, max_pages),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        // Without a subcommand, behave like the container entry point.
        None => cmd_batch(&BatchArgs::from_env()),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn cmd_analyze(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    max_pages: u32,
    strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut digest = PdfDigest::new().with_max_pages(max_pages);
    if !strict {
        digest = digest.lenient();
    }

    let result = digest.analyze_file(input)?;
    let json = pdfdigest::to_json(&result, json_format(compact))?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_batch(args: &BatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let files = pdfdigest::batch::find_pdf_files(&args.input)?;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let options = BatchOptions::new()
        .with_max_workers(args.workers)
        .with_digest(PdfDigest::new().lenient().with_max_pages(args.max_pages))
        .with_json_format(json_format(args.compact));

    let report = BatchProcessor::new(options).run_with_progress(
        &args.input,
        &args.output,
        |outcome| {
            if let FileOutcome::Written { input, .. } = outcome {
                pb.set_message(
                    input
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_default(),
                );
            }
            pb.inc(1);
        },
    )?;
    pb.finish_and_clear();

    if report.total() == 0 {
        println!("{}", "No PDF files found".yellow());
        return Ok(());
    }

    println!("{}", "Batch complete".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Processed".bold(), report.processed_count());
    println!("{}: {}", "Failed".bold(), report.failed_count());
    println!(
        "{}: {:.2}s",
        "Total time".bold(),
        report.elapsed.as_secs_f64()
    );
    println!(
        "{}: {:.2}s",
        "Average per file".bold(),
        report.average_per_file().as_secs_f64()
    );

    for failed in &report.failed {
        println!(
            "  {} {}: {}",
            "✗".red(),
            failed.path.display(),
            failed.error.dimmed()
        );
    }

    if report.is_success() {
        Ok(())
    } else {
        Err(format!("{} file(s) failed", report.failed_count()).into())
    }
}

fn cmd_info(input: &Path, max_pages: u32) -> Result<(), Box<dyn std::error::Error>> {
    // Lenient: show what we can even if some pages fail
    let result = PdfDigest::new()
        .lenient()
        .with_max_pages(max_pages)
        .analyze_file(input)?;

    println!("{}", "Document Summary".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    print!("{}", pdfdigest::to_summary(&result));

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pdfdigest".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Structured JSON summaries of PDF documents");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_batch_args() {
        let cli = Cli::try_parse_from([
            "pdfdigest", "batch", "--input", "in", "--output", "out", "--workers", "2",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Batch(args)) => {
                assert_eq!(args.input, PathBuf::from("in"));
                assert_eq!(args.output, PathBuf::from("out"));
                assert_eq!(args.workers, 2);
                assert_eq!(args.max_pages, 50);
            }
            _ => panic!("expected batch command"),
        }
    }

    #[test]
    fn test_default_batch_args_follow_clap_defaults() {
        let args = BatchArgs::from_env();
        let expected = |var: &str, default: &str| std::env::var(var).unwrap_or(default.into());

        assert_eq!(
            args.input,
            PathBuf::from(expected("PDFDIGEST_INPUT", DEFAULT_INPUT_DIR))
        );
        assert_eq!(
            args.output,
            PathBuf::from(expected("PDFDIGEST_OUTPUT", DEFAULT_OUTPUT_DIR))
        );
        assert_eq!(
            args.workers.to_string(),
            expected("PDFDIGEST_WORKERS", "4")
        );
        assert_eq!(args.max_pages, 50);
        assert!(!args.compact);
    }

    #[test]
    fn test_batch_args_bound_to_env() {
        let cli = Cli::command();
        let batch = cli.find_subcommand("batch").unwrap();
        let env_of = |id: &str| {
            batch
                .get_arguments()
                .find(|arg| arg.get_id() == id)
                .and_then(|arg| arg.get_env())
                .map(|env| env.to_string_lossy().to_string())
        };

        assert_eq!(env_of("input").as_deref(), Some("PDFDIGEST_INPUT"));
        assert_eq!(env_of("output").as_deref(), Some("PDFDIGEST_OUTPUT"));
        assert_eq!(env_of("workers").as_deref(), Some("PDFDIGEST_WORKERS"));
    }

    #[test]
    fn test_parse_analyze_args() {
        let cli = Cli::try_parse_from(["pdfdigest", "analyze", "doc.pdf", "--compact"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Analyze { compact: true, strict: false, .. })
        ));
    }
}
