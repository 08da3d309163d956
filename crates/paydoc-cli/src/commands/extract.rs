//! Extract command - pull payment fields out of a single recognized text.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use paydoc_core::DocumentExtractor;

use super::config::load_config;
use super::{format_response, load_text, mask_response, resolve_mode, respond, OutputFormat};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input file: plain text, or a saved recognition response (.json).
    /// Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Extraction mode: id_card, bankbook or auto (default from config)
    #[arg(short, long)]
    mode: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Mask resident and account numbers in the output
    #[arg(long)]
    mask: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let mode = resolve_mode(args.mode.as_deref(), config.extraction.default_mode)?;

    match &args.input {
        Some(path) => info!("Extracting {} fields from {}", mode, path.display()),
        None => info!("Extracting {} fields from stdin", mode),
    }

    let text = load_text(args.input.as_deref())?;
    let extractor = DocumentExtractor::from_config(&config.extraction);
    let mut response = respond(&extractor, text.as_deref(), mode);

    if args.mask {
        response = mask_response(&response);
    }

    for warning in &response.result.warnings {
        eprintln!("{} {}", style("⚠").yellow(), warning);
    }

    let output = format_response(&response, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output.trim_end());
    }

    Ok(())
}
