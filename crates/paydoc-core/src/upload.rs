//! Acceptance checks for uploaded images.

use crate::error::UploadError;
use crate::models::config::UploadConfig;
use crate::models::extraction::ExtractionMode;

/// An image sent for recognition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// Original file name.
    pub file_name: String,
    /// Declared content type, e.g. `image/jpeg`.
    pub content_type: String,
    /// Encoded image bytes.
    pub data: Vec<u8>,
}

impl ImageUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            data,
        }
    }
}

/// Check an upload request and return the extraction mode it asked for.
///
/// Checks run in order: mode, presence, content type, size.
pub fn validate_upload(
    config: &UploadConfig,
    mode: &str,
    upload: Option<&ImageUpload>,
) -> Result<ExtractionMode, UploadError> {
    let mode: ExtractionMode = mode.parse()?;

    let upload = match upload {
        Some(upload) if !upload.data.is_empty() => upload,
        _ => return Err(UploadError::MissingImage),
    };

    if !upload.content_type.starts_with(&config.allowed_mime_prefix) {
        return Err(UploadError::NotAnImage(upload.content_type.clone()));
    }

    if upload.data.len() > config.max_image_bytes {
        return Err(UploadError::TooLarge {
            size: upload.data.len(),
            limit: config.max_image_bytes,
        });
    }

    Ok(mode)
}
