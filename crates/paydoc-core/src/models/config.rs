//! Configuration structures for the extraction pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::extraction::ExtractionMode;
use crate::error::{PaydocError, Result};

/// Main configuration for paydoc.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaydocConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Upload acceptance configuration.
    pub upload: UploadConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Mode used when the caller does not name one.
    pub default_mode: ExtractionMode,

    /// Characters after a registration-number label searched for the
    /// business-registration number.
    pub label_window: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            default_mode: ExtractionMode::Auto,
            label_window: 120,
        }
    }
}

/// Upload acceptance configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Largest accepted image, in bytes.
    pub max_image_bytes: usize,

    /// Required prefix of the upload content type.
    pub allowed_mime_prefix: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_image_bytes: 20 * 1024 * 1024,
            allowed_mime_prefix: "image/".to_string(),
        }
    }
}

impl PaydocConfig {
    /// Load configuration from a JSON file.
    ///
    /// A file that is not valid configuration is a `Config` error naming the
    /// file; a file that cannot be read is an `Io` error.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| PaydocError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
