//! Business-registration number extraction.
//!
//! A business-registration number (`NNN-NN-NNNNN`) has the same shape as
//! many account numbers, so this extractor only fires when the text says it
//! is a business-registration certificate or number.

use super::patterns::{
    BUSINESS_COMPACT, BUSINESS_HINT, BUSINESS_HYPHENATED, DIGIT_RUN, REGISTRATION_LABEL,
};
use super::{ExtractionMatch, FieldExtractor};

/// Default number of characters searched after a registration-number label.
pub const DEFAULT_LABEL_WINDOW: usize = 120;

/// Business-registration number extractor.
#[derive(Debug, Clone, Copy)]
pub struct BusinessNumberExtractor {
    label_window: usize,
}

impl BusinessNumberExtractor {
    /// Create a new business-number extractor.
    pub fn new() -> Self {
        Self {
            label_window: DEFAULT_LABEL_WINDOW,
        }
    }

    /// Set how many characters after the label are searched first.
    pub fn with_label_window(mut self, chars: usize) -> Self {
        self.label_window = chars;
        self
    }

    fn labeled_candidates(&self, text: &str) -> Vec<ExtractionMatch<String>> {
        let mut results = Vec::new();

        let Some(label) = REGISTRATION_LABEL.find(text) else {
            return results;
        };

        let offset = label.start();
        let window = char_window(text, offset, self.label_window);

        if let Some(caps) = BUSINESS_HYPHENATED.captures(window) {
            let full_match = caps.get(0).unwrap();
            results.push(
                ExtractionMatch::new(
                    format!("{}-{}-{}", &caps[1], &caps[2], &caps[3]),
                    full_match.as_str(),
                )
                .with_position(offset + full_match.start(), offset + full_match.end()),
            );
        }

        if let Some(m) = BUSINESS_COMPACT.find(window) {
            results.push(
                ExtractionMatch::new(format_business_number(m.as_str()), m.as_str())
                    .with_position(offset + m.start(), offset + m.end()),
            );
        }

        results
    }

    fn fallback_candidates(&self, text: &str) -> Vec<ExtractionMatch<String>> {
        let mut results = Vec::new();

        if let Some(caps) = BUSINESS_HYPHENATED.captures(text) {
            let full_match = caps.get(0).unwrap();
            results.push(
                ExtractionMatch::new(
                    format!("{}-{}-{}", &caps[1], &caps[2], &caps[3]),
                    full_match.as_str(),
                )
                .with_position(full_match.start(), full_match.end()),
            );
        }

        // Unlabeled compact numbers must stand alone, not be part of a word
        let isolated = DIGIT_RUN.find_iter(text).find(|m| {
            m.as_str().len() == 10
                && !text[..m.start()].chars().next_back().is_some_and(is_word_char)
                && !text[m.end()..].chars().next().is_some_and(is_word_char)
        });
        if let Some(m) = isolated {
            results.push(
                ExtractionMatch::new(format_business_number(m.as_str()), m.as_str())
                    .with_position(m.start(), m.end()),
            );
        }

        results
    }
}

impl Default for BusinessNumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for BusinessNumberExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    /// Label-anchored candidates first, then candidates from the whole text.
    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        if !has_business_context(text) {
            return Vec::new();
        }

        let mut results: Vec<Self::Output> = Vec::new();
        for candidate in self
            .labeled_candidates(text)
            .into_iter()
            .chain(self.fallback_candidates(text))
        {
            if !results.iter().any(|r| r.value == candidate.value) {
                results.push(candidate);
            }
        }

        results
    }
}

/// Whether the text presents itself as a business-registration document.
pub fn has_business_context(text: &str) -> bool {
    BUSINESS_HINT.is_match(text)
}

/// Extract a business-registration number from text, as `NNN-NN-NNNNN`.
pub fn extract_business_number(text: &str) -> Option<String> {
    BusinessNumberExtractor::new().extract(text).map(|m| m.value)
}

/// Format ten digits as `NNN-NN-NNNNN`; anything else is returned unchanged.
pub fn format_business_number(number: &str) -> String {
    let digits = super::digits_only(number);

    if digits.len() != 10 {
        return number.to_string();
    }

    format!("{}-{}-{}", &digits[0..3], &digits[3..5], &digits[5..10])
}

/// At most `chars` characters of `text` starting at byte offset `start`.
fn char_window(text: &str, start: usize, chars: usize) -> &str {
    let rest = &text[start..];
    let end = rest
        .char_indices()
        .nth(chars)
        .map(|(i, _)| i)
        .unwrap_or(rest.len());
    &rest[..end]
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_labeled_hyphenated() {
        let text = "사업자등록증\n등록번호 : 123-45-67890\n상호 : 주식회사 예시";
        assert_eq!(extract_business_number(text), Some("123-45-67890".to_string()));
    }

    #[test]
    fn test_labeled_with_spaced_hyphens() {
        let text = "사업자 등록번호 123 - 45 - 67890";
        assert_eq!(extract_business_number(text), Some("123-45-67890".to_string()));
    }

    #[test]
    fn test_labeled_compact() {
        let text = "사업자등록번호: 1234567890";
        assert_eq!(extract_business_number(text), Some("123-45-67890".to_string()));
    }

    #[test]
    fn test_requires_business_context() {
        assert_eq!(extract_business_number("123-45-67890"), None);
        assert_eq!(extract_business_number("등록번호 123-45-67890"), None);
        assert_eq!(extract_business_number("주민등록번호 900101-1234567"), None);
    }

    #[test]
    fn test_label_window_limits_anchored_search() {
        let filler = "가".repeat(130);
        let text = format!("111-22-33333 사업자등록번호{filler}999-88-77777");

        // Nothing within the window, so the whole-text fallback takes the first number
        assert_eq!(extract_business_number(&text), Some("111-22-33333".to_string()));

        let wide = BusinessNumberExtractor::new().with_label_window(200);
        assert_eq!(wide.extract(&text).map(|m| m.value), Some("999-88-77777".to_string()));
    }

    #[test]
    fn test_window_preferred_over_earlier_number() {
        let text = "문서번호 555-66-77777\n사업자등록증\n등록번호 123-45-67890";
        assert_eq!(extract_business_number(text), Some("123-45-67890".to_string()));
    }

    #[test]
    fn test_fallback_without_label_position() {
        // The hint has no "등록번호" label, so the whole text is searched
        let text = "사업자등록증 사본\n번호 987-65-43210";
        assert_eq!(extract_business_number(text), Some("987-65-43210".to_string()));
    }

    #[test]
    fn test_fallback_compact_must_be_isolated() {
        assert_eq!(
            extract_business_number("사업자등록증\nNo.1234567890"),
            Some("123-45-67890".to_string())
        );
        assert_eq!(extract_business_number("사업자등록증\nA1234567890"), None);
        assert_eq!(extract_business_number("사업자등록증\n12345678901"), None);
    }

    #[test]
    fn test_extract_all_deduplicates() {
        let text = "사업자등록증\n등록번호 123-45-67890\n 기타 987-65-43210";
        let values: Vec<String> = BusinessNumberExtractor::new()
            .extract_all(text)
            .into_iter()
            .map(|m| m.value)
            .collect();
        assert_eq!(values, vec!["123-45-67890".to_string()]);
    }

    #[test]
    fn test_format_business_number() {
        assert_eq!(format_business_number("1234567890"), "123-45-67890");
        assert_eq!(format_business_number("123-45-67890"), "123-45-67890");
        assert_eq!(format_business_number("12345"), "12345");
    }

    #[test]
    fn test_char_window_respects_char_boundaries() {
        assert_eq!(char_window("가나다라", 3, 2), "나다");
        assert_eq!(char_window("abc", 1, 10), "bc");
    }
}
