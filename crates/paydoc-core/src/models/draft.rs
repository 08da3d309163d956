//! Payment draft assembled from one or more OCR responses.
//!
//! Several images (identity card, bankbook, certificate) are usually
//! uploaded for a single payment. Each response only fills fields that are
//! still empty, so the first image that yields a value wins and anything a
//! person already typed is never overwritten.

use serde::{Deserialize, Serialize};

use super::extraction::OcrResponse;
use crate::extract::rules::bank::is_known_bank;

/// Payment fields collected from OCR responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resident_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_registration_number: Option<String>,

    /// Stored path of the image the resident number came from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_card_image: Option<String>,

    /// Stored path of the image the bank details came from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bankbook_image: Option<String>,

    /// Warnings, each prefixed with the name of the file that raised it.
    pub warnings: Vec<String>,

    /// Per-file failures.
    pub errors: Vec<String>,
}

impl PaymentDraft {
    /// Create an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one response into the draft.
    ///
    /// `source` names the uploaded file in warnings; `image_path` is where
    /// the image was stored, if anywhere.
    pub fn apply(&mut self, source: &str, image_path: Option<&str>, response: &OcrResponse) {
        let result = &response.result;

        fill(&mut self.resident_number, result.resident_number.as_deref());
        fill(&mut self.bank_name, result.bank_name.as_deref());
        fill(&mut self.account_number, result.account_number.as_deref());
        fill(
            &mut self.business_registration_number,
            result.business_registration_number.as_deref(),
        );

        if let Some(path) = image_path {
            if result.resident_number.is_some() {
                fill(&mut self.id_card_image, Some(path));
            }
            if result.bank_name.is_some() || result.account_number.is_some() {
                fill(&mut self.bankbook_image, Some(path));
            }
        }

        if let Some(error) = &response.error {
            self.errors.push(error.clone());
        }

        self.warnings
            .extend(result.warnings.iter().map(|w| format!("{}: {}", source, w)));
    }

    /// Record a file that could not be processed at all.
    pub fn record_failure(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// True when the bank name is not one of the offered bank choices and
    /// has to be entered as free text.
    pub fn uses_custom_bank(&self) -> bool {
        self.bank_name.as_deref().is_some_and(|name| !is_known_bank(name))
    }

    /// Single-line error summary: the first error plus how many more.
    pub fn error_summary(&self) -> Option<String> {
        let first = self.errors.first()?;
        if self.errors.len() > 1 {
            Some(format!("{} 외 {}건", first, self.errors.len() - 1))
        } else {
            Some(first.clone())
        }
    }
}

fn fill(slot: &mut Option<String>, value: Option<&str>) {
    if slot.as_deref().is_none_or(str::is_empty) {
        if let Some(value) = value {
            *slot = Some(value.to_string());
        }
    }
}
