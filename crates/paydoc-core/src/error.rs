//! Error types for the paydoc-core library.
//!
//! Field extraction itself never fails: a missing field is an absent value
//! and an implausible one is a warning. The errors below belong to the
//! layer around the extractor (uploads, recognition, configuration).

use thiserror::Error;

/// Main error type for the paydoc library.
#[derive(Error, Debug)]
pub enum PaydocError {
    /// The uploaded image was rejected before recognition.
    #[error("upload rejected: {0}")]
    Upload(#[from] UploadError),

    /// The recognition service failed.
    #[error("recognition error: {0}")]
    Recognition(#[from] RecognitionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// An extraction mode string that is not one of the supported modes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported extraction mode: {0:?} (expected id_card, bankbook or auto)")]
pub struct ModeError(pub String);

/// Reasons an uploaded image is refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// The requested mode is not supported.
    #[error(transparent)]
    Mode(#[from] ModeError),

    /// No image data was sent.
    #[error("no image was provided")]
    MissingImage,

    /// The content type is not an image type.
    #[error("only image files can be uploaded (got {0:?})")]
    NotAnImage(String),

    /// The image is larger than the configured limit.
    #[error("image is too large: {size} bytes (limit {limit} bytes)")]
    TooLarge { size: usize, limit: usize },
}

/// Errors reported by a text recognition backend.
#[derive(Error, Debug)]
pub enum RecognitionError {
    /// The backend could not be reached or timed out.
    #[error("recognition service unavailable: {0}")]
    Unavailable(String),

    /// The backend answered with something that could not be interpreted.
    #[error("invalid recognition response: {0}")]
    InvalidResponse(String),

    /// Credentials or other backend settings are missing or malformed.
    #[error("recognition service is not configured: {0}")]
    NotConfigured(String),
}

/// Result type for the paydoc library.
pub type Result<T> = std::result::Result<T, PaydocError>;
