//! CLI subcommands and the input/output helpers they share.

pub mod banks;
pub mod batch;
pub mod config;
pub mod extract;

use std::fs;
use std::io::Read;
use std::path::Path;

use paydoc_core::models::extraction::{ExtractionMode, OcrResponse};
use paydoc_core::ocr::Recognition;
use paydoc_core::preview::{mask_account, mask_resident};
use paydoc_core::DocumentExtractor;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

/// Resolve the mode named on the command line, falling back to `default`.
pub fn resolve_mode(
    mode: Option<&str>,
    default: ExtractionMode,
) -> anyhow::Result<ExtractionMode> {
    match mode {
        Some(mode) => Ok(mode.parse()?),
        None => Ok(default),
    }
}

/// Read recognized text from a file, or from stdin when `path` is `None`.
///
/// `.json` files hold a saved recognition response; anything else is plain
/// text. Returns `None` when there is no readable text.
pub fn load_text(path: Option<&Path>) -> anyhow::Result<Option<String>> {
    let text = match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }

            let content = fs::read_to_string(path)?;
            let is_json = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("json"));

            if is_json {
                let recognition: Recognition = serde_json::from_str(&content)
                    .map_err(|e| anyhow::anyhow!("Invalid recognition file {}: {}", path.display(), e))?;
                recognition.full_text().map(str::to_string)
            } else {
                Some(content)
            }
        }
        None => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            Some(content)
        }
    };

    Ok(text.filter(|t| !t.trim().is_empty()))
}

/// Run the extractor, or report an unreadable input.
pub fn respond(
    extractor: &DocumentExtractor,
    text: Option<&str>,
    mode: ExtractionMode,
) -> OcrResponse {
    match text {
        Some(text) => OcrResponse::extracted(extractor.extract(text, mode)),
        None => OcrResponse::unreadable(),
    }
}

/// Replace the resident and account numbers with their masked previews.
pub fn mask_response(response: &OcrResponse) -> OcrResponse {
    let mut masked = response.clone();
    masked.result.resident_number = masked.result.resident_number.as_deref().map(mask_resident);
    masked.result.account_number = masked.result.account_number.as_deref().map(mask_account);
    masked
}

pub fn format_response(response: &OcrResponse, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(response)?),
        OutputFormat::Csv => format_csv(response),
        OutputFormat::Text => Ok(format_text(response)),
    }
}

fn format_csv(response: &OcrResponse) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    let result = &response.result;

    wtr.write_record([
        "resident_number",
        "bank_name",
        "account_number",
        "business_registration_number",
        "warnings",
        "error",
    ])?;

    wtr.write_record([
        result.resident_number.as_deref().unwrap_or(""),
        result.bank_name.as_deref().unwrap_or(""),
        result.account_number.as_deref().unwrap_or(""),
        result.business_registration_number.as_deref().unwrap_or(""),
        &result.warnings.join("; "),
        response.error.as_deref().unwrap_or(""),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(response: &OcrResponse) -> String {
    let mut output = String::new();
    let result = &response.result;

    if let Some(error) = &response.error {
        output.push_str(&format!("Error: {}\n", error));
        return output;
    }

    let fields = [
        ("Resident number", &result.resident_number),
        ("Bank", &result.bank_name),
        ("Account number", &result.account_number),
        ("Business registration number", &result.business_registration_number),
    ];

    for (label, value) in fields {
        output.push_str(&format!("{}: {}\n", label, value.as_deref().unwrap_or("-")));
    }

    if !result.warnings.is_empty() {
        output.push_str("\nWarnings:\n");
        for warning in &result.warnings {
            output.push_str(&format!("  - {}\n", warning));
        }
    }

    output
}
