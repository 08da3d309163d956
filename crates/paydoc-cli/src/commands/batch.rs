//! Batch command - extract fields from many recognized texts.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use paydoc_core::models::extraction::{ExtractionMode, OcrResponse};
use paydoc_core::{DocumentExtractor, PaymentDraft};

use super::config::load_config;
use super::{format_response, load_text, resolve_mode, respond, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern matching .txt or .json input files
    #[arg(required = true)]
    input: String,

    /// Extraction mode: id_card, bankbook or auto (default from config)
    #[arg(short, long)]
    mode: Option<String>,

    /// Output directory for per-file results
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Merge all files into one payment draft
    #[arg(long)]
    merge: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct FileResult {
    path: PathBuf,
    response: Option<OcrResponse>,
    error: Option<String>,
    processing_time_ms: u64,
}

impl FileResult {
    fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("")
    }
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;
    let mode = resolve_mode(args.mode.as_deref(), config.extraction.default_mode)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "txt" | "json")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    eprintln!(
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
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let extractor = DocumentExtractor::from_config(&config.extraction);
    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();
        let outcome = process_single_file(&path, &extractor, mode);
        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        match outcome {
            Ok(response) => {
                results.push(FileResult {
                    path,
                    response: Some(response),
                    error: None,
                    processing_time_ms,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(FileResult {
                        path,
                        response: None,
                        error: Some(error_msg),
                        processing_time_ms,
                    });
                } else {
                    pb.abandon();
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    if let Some(output_dir) = &args.output_dir {
        for result in &results {
            if let Some(response) = &result.response {
                write_file_output(output_dir, &result.path, response, args.format)?;
            }
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        eprintln!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    if args.merge {
        let draft = merge_results(&results);
        let json = serde_json::to_string_pretty(&draft)?;

        match &args.output_dir {
            Some(output_dir) => {
                let draft_path = output_dir.join("draft.json");
                fs::write(&draft_path, json)?;
                eprintln!(
                    "{} Draft written to {}",
                    style("✓").green(),
                    draft_path.display()
                );
            }
            None => println!("{}", json),
        }

        if let Some(summary) = draft.error_summary() {
            eprintln!("{} {}", style("⚠").yellow(), summary);
        }
    }

    let failed = results.iter().filter(|r| r.error.is_some()).count();

    eprintln!();
    eprintln!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    eprintln!(
        "   {} successful, {} failed",
        style(results.len() - failed).green(),
        style(failed).red()
    );

    if failed > 0 {
        eprintln!();
        eprintln!("{}", style("Failed files:").red());
        for result in results.iter().filter(|r| r.error.is_some()) {
            eprintln!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn process_single_file(
    path: &Path,
    extractor: &DocumentExtractor,
    mode: ExtractionMode,
) -> anyhow::Result<OcrResponse> {
    let text = load_text(Some(path))?;
    let response = respond(extractor, text.as_deref(), mode);

    debug!(
        "{}: {} fields, {} warnings",
        path.display(),
        response.result.field_count(),
        response.result.warnings.len()
    );

    Ok(response)
}

fn write_file_output(
    output_dir: &Path,
    input: &Path,
    response: &OcrResponse,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");

    let output_path = output_dir.join(format!("{}.{}", stem, format.extension()));
    fs::write(&output_path, format_response(response, format)?)?;
    debug!("Wrote output to {}", output_path.display());

    Ok(())
}

/// Fold every file into one draft, in file order.
fn merge_results(results: &[FileResult]) -> PaymentDraft {
    let mut draft = PaymentDraft::new();

    for result in results {
        let name = result.file_name();
        match (&result.response, &result.error) {
            (Some(response), _) => {
                let path = result.path.to_string_lossy();
                draft.apply(name, Some(path.as_ref()), response);
            }
            (None, Some(error)) => draft.record_failure(format!("{}: {}", name, error)),
            (None, None) => {}
        }
    }

    draft
}

fn write_summary(path: &Path, results: &[FileResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "resident_number",
        "bank_name",
        "account_number",
        "business_registration_number",
        "warnings",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let time = result.processing_time_ms.to_string();

        match &result.response {
            Some(response) => {
                let fields = &response.result;
                let status = if response.error.is_some() { "unreadable" } else { "success" };
                wtr.write_record([
                    result.file_name(),
                    status,
                    fields.resident_number.as_deref().unwrap_or(""),
                    fields.bank_name.as_deref().unwrap_or(""),
                    fields.account_number.as_deref().unwrap_or(""),
                    fields.business_registration_number.as_deref().unwrap_or(""),
                    &fields.warnings.join("; "),
                    &time,
                    response.error.as_deref().unwrap_or(""),
                ])?;
            }
            None => {
                wtr.write_record([
                    result.file_name(),
                    "error",
                    "",
                    "",
                    "",
                    "",
                    "",
                    &time,
                    result.error.as_deref().unwrap_or(""),
                ])?;
            }
        }
    }

    wtr.flush()?;
    Ok(())
}
