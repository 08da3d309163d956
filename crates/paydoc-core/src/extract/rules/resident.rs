//! Resident-registration number extraction.
//!
//! Recognized text is noisy, so no checksum or birth-date check is done
//! here: any six digits followed by seven digits are accepted, either
//! around a hyphen or separated by whitespace.

use super::patterns::{RESIDENT_HYPHENATED, RESIDENT_SPACED};
use super::{ExtractionMatch, FieldExtractor};

/// Resident-registration number extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResidentNumberExtractor;

impl ResidentNumberExtractor {
    /// Create a new resident-number extractor.
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for ResidentNumberExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results: Vec<Self::Output> = Vec::new();

        // Hyphenated shapes are preferred over whitespace-separated ones
        for pattern in [&*RESIDENT_HYPHENATED, &*RESIDENT_SPACED] {
            for caps in pattern.captures_iter(text) {
                let number = format!("{}-{}", &caps[1], &caps[2]);

                if results.iter().any(|r| r.value == number) {
                    continue;
                }

                let full_match = caps.get(0).unwrap();
                results.push(
                    ExtractionMatch::new(number, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                );
            }
        }

        results
    }
}

/// Extract a resident-registration number from text, as `NNNNNN-NNNNNNN`.
pub fn extract_resident_number(text: &str) -> Option<String> {
    ResidentNumberExtractor::new().extract(text).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_hyphenated() {
        let text = "주민등록증\n홍길동\n900101-1234567\n서울특별시";
        assert_eq!(extract_resident_number(text), Some("900101-1234567".to_string()));
    }

    #[test]
    fn test_extract_hyphen_with_spaces() {
        assert_eq!(
            extract_resident_number("번호 900101 - 1234567"),
            Some("900101-1234567".to_string())
        );
    }

    #[test]
    fn test_extract_space_separated() {
        assert_eq!(
            extract_resident_number("생년월일 900101 1234567"),
            Some("900101-1234567".to_string())
        );
        assert_eq!(
            extract_resident_number("900101\n1234567"),
            Some("900101-1234567".to_string())
        );
    }

    #[test]
    fn test_hyphenated_wins_over_earlier_spaced() {
        let text = "111111 2222222 다음 333333-4444444";
        assert_eq!(extract_resident_number(text), Some("333333-4444444".to_string()));
    }

    #[test]
    fn test_first_match_only() {
        let text = "900101-1234567 / 850505-2345678";
        let all = ResidentNumberExtractor::new().extract_all(text);
        assert_eq!(all.len(), 2);
        assert_eq!(extract_resident_number(text), Some("900101-1234567".to_string()));
    }

    #[test]
    fn test_no_date_validation() {
        // Month 13 is accepted as-is
        assert_eq!(
            extract_resident_number("991340-1234567"),
            Some("991340-1234567".to_string())
        );
    }

    #[test]
    fn test_embedded_in_longer_run() {
        assert_eq!(
            extract_resident_number("1234567-1234567"),
            Some("234567-1234567".to_string())
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(extract_resident_number("12345-1234567"), None);
        assert_eq!(extract_resident_number("123456-123456"), None);
        assert_eq!(extract_resident_number("국민은행 110123456789"), None);
        assert_eq!(extract_resident_number(""), None);
    }

    #[test]
    fn test_position() {
        let m = ResidentNumberExtractor::new().extract("RRN 900101-1234567").unwrap();
        assert_eq!(m.position, Some((4, 18)));
        assert_eq!(m.source, "900101-1234567");
    }
}
