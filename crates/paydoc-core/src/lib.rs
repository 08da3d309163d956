//! Core library for Korean payment-document field extraction.
//!
//! This crate provides:
//! - Field extraction from recognized text (resident registration number,
//!   bank name, bank account number, business registration number)
//! - Cross-field disambiguation and account-length validation
//! - Upload checks and a service around an external text recognizer
//! - Payment draft merging and masked previews

pub mod error;
pub mod extract;
pub mod models;
pub mod ocr;
pub mod preview;
pub mod service;
pub mod upload;

pub use error::{ModeError, PaydocError, RecognitionError, Result, UploadError};
pub use extract::rules::{
    extract_account_number, extract_bank_name, extract_business_number,
    extract_resident_number, is_known_bank,
};
pub use extract::{DocumentExtractor, ExtractionMatch, FieldExtractor};
pub use models::{ExtractionMode, ExtractionResult, OcrResponse, PaydocConfig, PaymentDraft};
pub use ocr::{Recognition, TextAnnotation, TextRecognizer};
pub use preview::{mask_account, mask_resident};
pub use service::OcrService;
pub use upload::{validate_upload, ImageUpload};
