//! Data models shared by the extractor, the service layer and the front ends.

pub mod config;
pub mod draft;
pub mod extraction;

pub use config::{ExtractionConfig, PaydocConfig, UploadConfig};
pub use draft::PaymentDraft;
pub use extraction::{ExtractionMode, ExtractionResult, OcrResponse};
