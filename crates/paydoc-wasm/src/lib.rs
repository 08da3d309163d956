//! WASM bindings for Korean payment-document field extraction.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js.
//! Text recognition happens elsewhere; these functions take its output.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use paydoc_core::extract::rules::{account_length_warning, CANONICAL_BANKS};
use paydoc_core::models::extraction::{ExtractionMode, OcrResponse};
use paydoc_core::ocr::Recognition;
use paydoc_core::DocumentExtractor;

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn parse_mode(mode: &str) -> Result<ExtractionMode, JsValue> {
    mode.parse().map_err(|e: paydoc_core::ModeError| JsValue::from_str(&e.to_string()))
}

// Plain objects rather than `Map`s, since the response is a flattened map.
fn to_js(response: &OcrResponse) -> Result<JsValue, JsValue> {
    response
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Extract payment fields from recognized text.
///
/// `mode` is one of `id_card`, `bankbook` or `auto`. Returns an object with
/// `residentNumber`, `bankName`, `accountNumber`,
/// `businessRegistrationNumber` (each omitted when not found) and
/// `warnings`.
#[wasm_bindgen]
pub fn extract(text: &str, mode: &str) -> Result<JsValue, JsValue> {
    let mode = parse_mode(mode)?;
    to_js(&OcrResponse::extracted(DocumentExtractor::new().extract(text, mode)))
}

/// Warning for an account number whose digit count does not fit the bank,
/// or `undefined` when it fits or the bank has no rule.
#[wasm_bindgen]
pub fn validate_account_length(bank: &str, account: &str) -> Option<String> {
    account_length_warning(bank, account)
}

/// Masked account number preview (`****1234`).
#[wasm_bindgen]
pub fn mask_account(account: &str) -> String {
    paydoc_core::preview::mask_account(account)
}

/// Masked resident number preview (`900101-*******`).
#[wasm_bindgen]
pub fn mask_resident(resident: &str) -> String {
    paydoc_core::preview::mask_resident(resident)
}

/// Whether `bank` is one of the fixed bank choices.
#[wasm_bindgen]
pub fn is_known_bank(bank: &str) -> bool {
    paydoc_core::is_known_bank(bank)
}

/// The fixed bank choices, in display order.
#[wasm_bindgen]
pub fn bank_names() -> Vec<String> {
    CANONICAL_BANKS.iter().map(|b| b.to_string()).collect()
}

/// Payment field extractor class for browser use.
#[wasm_bindgen]
pub struct PaymentExtractor {
    extractor: DocumentExtractor,
}

#[wasm_bindgen]
impl PaymentExtractor {
    /// Create a new extractor.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            extractor: DocumentExtractor::new(),
        }
    }

    /// Set how many characters after a registration-number label are
    /// searched for the business-registration number.
    #[wasm_bindgen]
    pub fn set_label_window(&mut self, chars: usize) {
        self.extractor = DocumentExtractor::new().with_label_window(chars);
    }

    /// Extract fields from recognized text.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str, mode: &str) -> Result<JsValue, JsValue> {
        let mode = parse_mode(mode)?;
        to_js(&OcrResponse::extracted(self.extractor.extract(text, mode)))
    }

    /// Extract fields from a recognition service response (JSON with an
    /// `annotations` array). An image without text yields an `error`
    /// message and no fields.
    #[wasm_bindgen]
    pub fn extract_recognition(&self, json: &str, mode: &str) -> Result<JsValue, JsValue> {
        let mode = parse_mode(mode)?;
        let recognition: Recognition =
            serde_json::from_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;

        let response = match recognition.full_text() {
            Some(text) => OcrResponse::extracted(self.extractor.extract(text, mode)),
            None => OcrResponse::unreadable(),
        };

        to_js(&response)
    }
}

impl Default for PaymentExtractor {
    fn default() -> Self {
        Self::new()
    }
}
