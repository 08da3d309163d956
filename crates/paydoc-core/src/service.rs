//! Upload-to-response OCR service.

use tracing::{debug, info, warn};

use crate::error::{Result, UploadError};
use crate::extract::DocumentExtractor;
use crate::models::config::{PaydocConfig, UploadConfig};
use crate::models::extraction::{ExtractionMode, OcrResponse};
use crate::ocr::TextRecognizer;
use crate::upload::{validate_upload, ImageUpload};

/// Validates an upload, sends it to a recognizer and extracts payment fields.
pub struct OcrService<R: TextRecognizer> {
    recognizer: R,
    extractor: DocumentExtractor,
    upload: UploadConfig,
}

impl<R: TextRecognizer> OcrService<R> {
    /// Create a service with default settings.
    pub fn new(recognizer: R) -> Self {
        Self {
            recognizer,
            extractor: DocumentExtractor::new(),
            upload: UploadConfig::default(),
        }
    }

    /// Create a service from configuration.
    pub fn from_config(recognizer: R, config: &PaydocConfig) -> Self {
        Self {
            recognizer,
            extractor: DocumentExtractor::from_config(&config.extraction),
            upload: config.upload.clone(),
        }
    }

    /// Process one upload request.
    ///
    /// A rejected upload or a failing recognizer is an error. An image
    /// without readable text is not: it yields a response carrying a
    /// user-facing message and no fields.
    pub fn process(&self, mode: &str, upload: Option<&ImageUpload>) -> Result<OcrResponse> {
        let mode = validate_upload(&self.upload, mode, upload)?;
        let upload = upload.ok_or(UploadError::MissingImage)?;

        info!(
            "Recognizing {} ({} bytes) with {}",
            upload.file_name,
            upload.data.len(),
            self.recognizer.name()
        );

        let recognition = self.recognizer.recognize(&upload.data)?;
        debug!("Recognizer returned {} annotations", recognition.annotations.len());

        match recognition.full_text() {
            Some(text) => Ok(self.process_text(text, mode)),
            None => {
                warn!("No text found in {}", upload.file_name);
                Ok(OcrResponse::unreadable())
            }
        }
    }

    /// Extract fields from text that has already been recognized.
    pub fn process_text(&self, text: &str, mode: ExtractionMode) -> OcrResponse {
        OcrResponse::extracted(self.extractor.extract(text, mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PaydocError, RecognitionError};
    use crate::ocr::{Recognition, TextAnnotation};
    use pretty_assertions::assert_eq;

    struct FixedRecognizer(Option<&'static str>);

    impl TextRecognizer for FixedRecognizer {
        fn name(&self) -> &str {
            "fixed"
        }

        fn recognize(&self, _image: &[u8]) -> std::result::Result<Recognition, RecognitionError> {
            match self.0 {
                Some(text) => Ok(Recognition {
                    annotations: vec![TextAnnotation::new(text), TextAnnotation::new("ignored")],
                }),
                None => Ok(Recognition::default()),
            }
        }
    }

    struct DownRecognizer;

    impl TextRecognizer for DownRecognizer {
        fn name(&self) -> &str {
            "down"
        }

        fn recognize(&self, _image: &[u8]) -> std::result::Result<Recognition, RecognitionError> {
            Err(RecognitionError::Unavailable("timed out".to_string()))
        }
    }

    fn upload() -> ImageUpload {
        ImageUpload::new("bankbook.png", "image/png", vec![0x89, 0x50, 0x4e, 0x47])
    }

    #[test]
    fn test_process_auto() {
        let service = OcrService::new(FixedRecognizer(Some(
            "국민은행\n계좌번호 110123456789\n생년월일 900101-1234567",
        )));

        let response = service.process("auto", Some(&upload())).unwrap();
        assert_eq!(response.error, None);
        assert_eq!(response.result.bank_name.as_deref(), Some("국민은행"));
        assert_eq!(response.result.account_number.as_deref(), Some("110123456789"));
        assert_eq!(response.result.resident_number.as_deref(), Some("900101-1234567"));
        assert!(response.result.warnings.is_empty());
    }

    #[test]
    fn test_process_id_card_mode() {
        let service = OcrService::new(FixedRecognizer(Some("국민은행 900101-1234567")));

        let response = service.process("id_card", Some(&upload())).unwrap();
        assert_eq!(response.result.resident_number.as_deref(), Some("900101-1234567"));
        assert_eq!(response.result.bank_name, None);
    }

    #[test]
    fn test_unreadable_image() {
        let service = OcrService::new(FixedRecognizer(None));

        let response = service.process("bankbook", Some(&upload())).unwrap();
        assert_eq!(response, OcrResponse::unreadable());
    }

    #[test]
    fn test_rejected_upload() {
        let service = OcrService::new(FixedRecognizer(Some("국민은행")));
        let text_file = ImageUpload::new("a.txt", "text/plain", vec![1]);

        match service.process("auto", Some(&text_file)) {
            Err(PaydocError::Upload(UploadError::NotAnImage(mime))) => assert_eq!(mime, "text/plain"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_recognizer_failure_propagates() {
        let service = OcrService::new(DownRecognizer);

        assert!(matches!(
            service.process("auto", Some(&upload())),
            Err(PaydocError::Recognition(RecognitionError::Unavailable(_)))
        ));
    }

    #[test]
    fn test_upload_limit_from_config() {
        let mut config = PaydocConfig::default();
        config.upload.max_image_bytes = 2;
        let service = OcrService::from_config(FixedRecognizer(Some("국민은행")), &config);

        assert!(matches!(
            service.process("auto", Some(&upload())),
            Err(PaydocError::Upload(UploadError::TooLarge { size: 4, limit: 2 }))
        ));
    }
}
