//! Extraction request modes and result records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModeError;

/// Which extractors to run over a recognized text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMode {
    /// Identity card: resident-registration number only.
    IdCard,
    /// Bankbook: bank name and account number.
    Bankbook,
    /// Unknown document type: every extractor plus disambiguation and warnings.
    #[default]
    Auto,
}

impl ExtractionMode {
    /// All supported modes.
    pub const ALL: [ExtractionMode; 3] = [Self::IdCard, Self::Bankbook, Self::Auto];

    /// The wire name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IdCard => "id_card",
            Self::Bankbook => "bankbook",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for ExtractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtractionMode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id_card" => Ok(Self::IdCard),
            "bankbook" => Ok(Self::Bankbook),
            "auto" => Ok(Self::Auto),
            other => Err(ModeError(other.to_string())),
        }
    }
}

/// Structured payment fields recovered from one recognized text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Resident-registration number, `NNNNNN-NNNNNNN`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resident_number: Option<String>,

    /// Canonical bank name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,

    /// Account number, digits only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,

    /// Business-registration number, `NNN-NN-NNNNN`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_registration_number: Option<String>,

    /// Advisory warnings for human review.
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl ExtractionResult {
    /// True when no field was recovered.
    pub fn is_empty(&self) -> bool {
        self.resident_number.is_none()
            && self.bank_name.is_none()
            && self.account_number.is_none()
            && self.business_registration_number.is_none()
    }

    /// Number of populated fields.
    pub fn field_count(&self) -> usize {
        [
            self.resident_number.is_some(),
            self.bank_name.is_some(),
            self.account_number.is_some(),
            self.business_registration_number.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }
}

/// Response returned to the uploader for one image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrResponse {
    /// Fields extracted from the image text.
    #[serde(flatten)]
    pub result: ExtractionResult,

    /// User-facing message when the image could not be read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OcrResponse {
    /// Message used when recognition returned no text.
    pub const NO_TEXT_FOUND: &'static str = "이미지에서 텍스트를 찾을 수 없습니다.";

    /// Response for an image whose text was recognized.
    pub fn extracted(result: ExtractionResult) -> Self {
        Self { result, error: None }
    }

    /// Response for an image without any recognizable text.
    pub fn unreadable() -> Self {
        Self {
            result: ExtractionResult::default(),
            error: Some(Self::NO_TEXT_FOUND.to_string()),
        }
    }
}
