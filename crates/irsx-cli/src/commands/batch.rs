//! Batch processing command for multiple return documents.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, warn};

use irsx_core::{
    BatchProcessor, BatchProgress, DocumentStatus, ExtractionOutcome, InMemoryStore, ProgressSink,
};

use super::load_config;
use super::output::{failure_detail, format_outcome, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern matching input files
    #[arg(required = true)]
    input: String,

    /// Output directory for per-file results
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file (default: from configuration)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,
}

/// One line of `summary.csv`.
#[derive(Debug, Serialize)]
struct SummaryRow {
    filename: String,
    status: &'static str,
    variant: String,
    organization: String,
    tax_period_start: String,
    tax_period_end: String,
    total_revenue: String,
    error: String,
}

/// Result of processing a single file.
struct FileResult {
    path: PathBuf,
    status: &'static str,
    outcome: Option<ExtractionOutcome>,
    error: Option<String>,
}

impl FileResult {
    fn from_status(name: &str, status: &DocumentStatus) -> Self {
        let path = PathBuf::from(name);
        match status {
            DocumentStatus::Processed(outcome) => Self {
                path,
                status: outcome.status(),
                error: (!outcome.is_success()).then(|| failure_detail(outcome)),
                outcome: Some(outcome.clone()),
            },
            DocumentStatus::ReadFailed(err) => Self {
                path,
                status: "read_failed",
                outcome: None,
                error: Some(err.to_string()),
            },
            DocumentStatus::StoreFailed { outcome, error } => Self {
                path,
                status: "store_failed",
                outcome: Some(outcome.clone()),
                error: Some(error.to_string()),
            },
        }
    }

    fn summary_row(&self) -> SummaryRow {
        let filename = self
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_string();

        let mut row = SummaryRow {
            filename,
            status: self.status,
            variant: String::new(),
            organization: String::new(),
            tax_period_start: String::new(),
            tax_period_end: String::new(),
            total_revenue: String::new(),
            error: self.error.clone().unwrap_or_default(),
        };

        if let Some(ExtractionOutcome::Success {
            variant,
            organization,
            return_info,
        }) = &self.outcome
        {
            row.variant = variant.to_string();
            row.organization = organization.name.clone().unwrap_or_default();
            row.tax_period_start = return_info
                .tax_period_start
                .map(|d| d.to_string())
                .unwrap_or_default();
            row.tax_period_end = return_info
                .tax_period_end
                .map(|d| d.to_string())
                .unwrap_or_default();
            row.total_revenue = return_info
                .total_revenue
                .map(|d| d.to_string())
                .unwrap_or_default();
        }

        row
    }
}

/// Drives the progress bar and collects per-file results.
struct CliSink {
    pb: ProgressBar,
    results: Vec<FileResult>,
}

impl ProgressSink for CliSink {
    fn progress(&mut self, progress: BatchProgress) {
        self.pb
            .set_message(format!("{:.0}%", progress.fraction * 100.0));
    }

    fn document(&mut self, name: &str, status: &DocumentStatus) {
        self.pb.inc(1);
        self.results.push(FileResult::from_status(name, status));
    }
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let mut files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file() && config.accepts_extension(p))
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files {msg}")?
            .progress_chars("=>-"),
    );

    let total = files.len();
    let processor = BatchProcessor::new(&config.batch);
    let mut sink = CliSink {
        pb: pb.clone(),
        results: Vec::with_capacity(total),
    };

    // Parsing is CPU-bound, keep it off the async workers.
    let (report, sink, store) = tokio::task::spawn_blocking(move || {
        let documents = files
            .into_iter()
            .map(|path| (path.display().to_string(), fs::read(&path)));
        let mut store = InMemoryStore::new();
        let report = processor.process(documents, total, &mut store, Some(&mut sink));
        report.map(|report| (report, sink, store))
    })
    .await??;

    pb.finish_with_message("Complete");

    let format = args.format.unwrap_or_else(|| config.output.format.into());
    if let Some(ref output_dir) = args.output_dir {
        let paths: Vec<&Path> = sink.results.iter().map(|r| r.path.as_path()).collect();
        let names = output_names(&paths);
        for (result, name) in sink.results.iter().zip(&names) {
            if let Some(outcome) = &result.outcome {
                write_output(output_dir, name, outcome, format, config.output.pretty)?;
            }
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &sink.results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        report.attempted,
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed ({} unrecognized, {} malformed, {} unreadable)",
        style(report.succeeded).green(),
        style(report.failed()).red(),
        report.unrecognized,
        report.malformed,
        report.read_failures
    );
    println!(
        "   {} organizations, {} return periods loaded",
        store.organization_count(),
        store.return_count()
    );

    let failed: Vec<_> = sink.results.iter().filter(|r| r.error.is_some()).collect();
    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

/// Output file stems, one per input path.
///
/// Inputs sharing a file stem are prefixed with their parent directory name,
/// and any name still taken gets a numeric suffix.
fn output_names(paths: &[&Path]) -> Vec<String> {
    let stem = |path: &Path| {
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("return")
            .to_string()
    };

    let mut counts: HashMap<String, usize> = HashMap::new();
    for path in paths {
        *counts.entry(stem(path)).or_default() += 1;
    }

    let mut taken: HashSet<String> = HashSet::new();
    paths
        .iter()
        .map(|path| {
            let base = stem(path);
            let parent = path
                .parent()
                .and_then(|d| d.file_name())
                .and_then(|s| s.to_str());

            let mut name = match parent {
                Some(parent) if counts[&base] > 1 => format!("{}_{}", parent, base),
                _ => base.clone(),
            };
            if taken.contains(&name) {
                let mut n = 2;
                while taken.contains(&format!("{}-{}", name, n)) {
                    n += 1;
                }
                name = format!("{}-{}", name, n);
            }
            taken.insert(name.clone());

            if name != base {
                warn!(
                    "Output name {} is shared, writing {} as {}",
                    base,
                    path.display(),
                    name
                );
            }
            name
        })
        .collect()
}

fn write_output(
    output_dir: &Path,
    name: &str,
    outcome: &ExtractionOutcome,
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<()> {
    let output_path = output_dir.join(format!("{}.{}", name, format.extension()));

    fs::write(&output_path, format_outcome(outcome, format, pretty)?)?;
    debug!("Wrote output to {}", output_path.display());
    Ok(())
}

fn write_summary(path: &Path, results: &[FileResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    for result in results {
        if let Err(err) = wtr.serialize(result.summary_row()) {
            warn!("Failed to write summary row for {}: {}", result.path.display(), err);
        }
    }

    wtr.flush()?;
    Ok(())
}
