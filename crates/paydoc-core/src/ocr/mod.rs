//! Text recognition seam.
//!
//! Recognition itself is done by an external service. This module defines
//! the shape of what such a service returns and the trait a client
//! implements so the rest of the pipeline does not depend on any vendor.

use serde::{Deserialize, Serialize};

use crate::error::RecognitionError;

/// One block of text reported by the recognition service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextAnnotation {
    /// Recognized text content.
    pub description: String,

    /// Detected language, if reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl TextAnnotation {
    /// Annotation with text only.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Default::default()
        }
    }
}

/// Result of recognizing one image.
///
/// The first annotation holds the full text of the image; the following
/// ones are individual words or blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recognition {
    /// Annotations in the order the service reported them.
    pub annotations: Vec<TextAnnotation>,
}

impl Recognition {
    /// Recognition holding a single full-text annotation.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            annotations: vec![TextAnnotation::new(text)],
        }
    }

    /// Full text of the image, or `None` when nothing readable was found.
    pub fn full_text(&self) -> Option<&str> {
        self.annotations
            .first()
            .map(|a| a.description.as_str())
            .filter(|text| !text.trim().is_empty())
    }
}

/// A client of a text recognition service.
pub trait TextRecognizer {
    /// Name of the backend, for logs.
    fn name(&self) -> &str;

    /// Recognize the text in an encoded image.
    fn recognize(&self, image: &[u8]) -> Result<Recognition, RecognitionError>;
}
