//! Mode-driven extraction pipeline.

use tracing::{debug, info};

use crate::models::config::ExtractionConfig;
use crate::models::extraction::{ExtractionMode, ExtractionResult};

use super::rules::{
    account::AccountNumberExtractor,
    bank::BankNameExtractor,
    business::{has_business_context, BusinessNumberExtractor},
    digits_only,
    resident::ResidentNumberExtractor,
    validation::validate,
    FieldExtractor,
};

/// Runs the field extractors that a mode asks for over one recognized text.
///
/// The extractor holds no per-call state; the same instance can serve any
/// number of texts, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct DocumentExtractor {
    resident: ResidentNumberExtractor,
    account: AccountNumberExtractor,
    bank: BankNameExtractor,
    business: BusinessNumberExtractor,
}

impl DocumentExtractor {
    /// Create a new extractor with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor from configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new().with_label_window(config.label_window)
    }

    /// Set the business-registration label window, in characters.
    pub fn with_label_window(mut self, chars: usize) -> Self {
        self.business = self.business.with_label_window(chars);
        self
    }

    /// Extract payment fields from `text`.
    pub fn extract(&self, text: &str, mode: ExtractionMode) -> ExtractionResult {
        info!("Extracting {} fields from {} characters of text", mode, text.chars().count());

        let result = match mode {
            ExtractionMode::IdCard => self.extract_id_card(text),
            ExtractionMode::Bankbook => self.extract_bankbook(text),
            ExtractionMode::Auto => self.extract_auto(text),
        };

        debug!(
            "Extracted {} fields with {} warnings",
            result.field_count(),
            result.warnings.len()
        );

        result
    }

    fn extract_id_card(&self, text: &str) -> ExtractionResult {
        ExtractionResult {
            resident_number: self.resident.extract(text).map(|m| m.value),
            ..Default::default()
        }
    }

    fn extract_bankbook(&self, text: &str) -> ExtractionResult {
        ExtractionResult {
            bank_name: self.bank.extract(text).map(|m| m.value),
            account_number: self.account.extract(text).map(|m| strip_hyphens(&m.value)),
            ..Default::default()
        }
    }

    fn extract_auto(&self, text: &str) -> ExtractionResult {
        let resident_number = self.resident.extract(text).map(|m| m.value);
        let bank_name = self.bank.extract(text).map(|m| m.value);
        let business_registration_number = self.business.extract(text).map(|m| m.value);
        let account_number = self.account.extract(text).map(|m| m.value);

        let account_number = disambiguate_account(
            account_number,
            business_registration_number.as_deref(),
            bank_name.as_deref(),
            has_business_context(text),
        )
        .map(|account| strip_hyphens(&account));

        let mut result = ExtractionResult {
            resident_number,
            bank_name,
            account_number,
            business_registration_number,
            warnings: Vec::new(),
        };
        result.warnings = validate(&result);

        result
    }
}

/// Drop an account number that is really the business-registration number.
///
/// The account candidate is discarded when its digits equal the business
/// number's digits, or when the text is a business-registration document
/// and no bank is named anywhere in it.
pub fn disambiguate_account(
    account: Option<String>,
    business_number: Option<&str>,
    bank_name: Option<&str>,
    business_context: bool,
) -> Option<String> {
    let account = account?;

    if let Some(business) = business_number {
        let business_digits = digits_only(business);
        if !business_digits.is_empty() && business_digits == digits_only(&account) {
            debug!("Dropping account candidate equal to the business-registration number");
            return None;
        }
    }

    if business_context && bank_name.is_none() {
        debug!("Dropping account candidate from a business document without a bank name");
        return None;
    }

    Some(account)
}

/// Remove the hyphens an account number was printed with.
pub fn strip_hyphens(value: &str) -> String {
    value.replace('-', "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BANKBOOK: &str = "국민은행\n계좌번호 110123456789\n생년월일 900101-1234567";

    #[test]
    fn test_auto_end_to_end() {
        let result = DocumentExtractor::new().extract(BANKBOOK, ExtractionMode::Auto);

        assert_eq!(
            result,
            ExtractionResult {
                resident_number: Some("900101-1234567".to_string()),
                bank_name: Some("국민은행".to_string()),
                account_number: Some("110123456789".to_string()),
                business_registration_number: None,
                warnings: Vec::new(),
            }
        );
    }

    #[test]
    fn test_id_card_mode_runs_only_resident_extractor() {
        let result = DocumentExtractor::new().extract(BANKBOOK, ExtractionMode::IdCard);

        assert_eq!(result.resident_number.as_deref(), Some("900101-1234567"));
        assert_eq!(result.bank_name, None);
        assert_eq!(result.account_number, None);
        assert_eq!(result.business_registration_number, None);
    }

    #[test]
    fn test_bankbook_mode_strips_hyphens_without_warnings() {
        let text = "IBK기업은행 123-456789-01234 가나다 1234567890123";
        let result = DocumentExtractor::new().extract(text, ExtractionMode::Bankbook);

        assert_eq!(result.bank_name.as_deref(), Some("기업은행"));
        assert_eq!(result.account_number.as_deref(), Some("12345678901234"));
        assert_eq!(result.resident_number, None);

        // 13 digits would warn for 기업은행 in auto mode, but bankbook mode never validates
        let result = DocumentExtractor::new().extract("기업은행 1234567890123", ExtractionMode::Bankbook);
        assert_eq!(result.account_number.as_deref(), Some("1234567890123"));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_auto_warns_on_account_length() {
        let result =
            DocumentExtractor::new().extract("기업은행 1234567890123", ExtractionMode::Auto);

        assert_eq!(
            result.warnings,
            vec!["기업은행 계좌번호는 10/11/12/14자리입니다. (현재 13자리)".to_string()]
        );
    }

    #[test]
    fn test_auto_drops_account_equal_to_business_number() {
        let text = "사업자등록증\n등록번호 : 123-45-67890\n국민은행 거래";
        let result = DocumentExtractor::new().extract(text, ExtractionMode::Auto);

        assert_eq!(result.business_registration_number.as_deref(), Some("123-45-67890"));
        assert_eq!(result.bank_name.as_deref(), Some("국민은행"));
        assert_eq!(result.account_number, None);
    }

    #[test]
    fn test_auto_drops_account_in_business_document_without_bank() {
        let text = "사업자등록증\n등록번호 123-45-67890\n전화 0212345678901";
        let result = DocumentExtractor::new().extract(text, ExtractionMode::Auto);

        assert_eq!(result.business_registration_number.as_deref(), Some("123-45-67890"));
        assert_eq!(result.account_number, None);
    }

    #[test]
    fn test_bare_registration_label_is_not_business_context() {
        // 주민등록번호 contains 등록번호 but is not a business document
        let text = "주민등록증 주민등록번호 900101-1234567 1101234567890";
        let result = DocumentExtractor::new().extract(text, ExtractionMode::Auto);

        assert_eq!(result.resident_number.as_deref(), Some("900101-1234567"));
        assert_eq!(result.business_registration_number, None);
        assert_eq!(result.bank_name, None);
        assert_eq!(result.account_number.as_deref(), Some("1101234567890"));
    }

    #[test]
    fn test_auto_keeps_distinct_account_with_bank() {
        let text = "사업자등록증\n등록번호 123-45-67890\n신한은행 110-123-456789";
        let result = DocumentExtractor::new().extract(text, ExtractionMode::Auto);

        assert_eq!(result.business_registration_number.as_deref(), Some("123-45-67890"));
        assert_eq!(result.bank_name.as_deref(), Some("신한은행"));
        assert_eq!(result.account_number.as_deref(), Some("110123456789"));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let extractor = DocumentExtractor::new();
        let text = "사업자등록증 등록번호 1234567890 우리은행 1002-123-456789 900101 1234567";

        for mode in ExtractionMode::ALL {
            let first = serde_json::to_string(&extractor.extract(text, mode)).unwrap();
            let second = serde_json::to_string(&extractor.extract(text, mode)).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_empty_text() {
        let result = DocumentExtractor::new().extract("", ExtractionMode::Auto);
        assert!(result.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_disambiguate_account() {
        let account = Some("123-45-67890".to_string());
        assert_eq!(
            disambiguate_account(account.clone(), Some("123-45-67890"), Some("국민은행"), true),
            None
        );
        assert_eq!(
            disambiguate_account(account.clone(), None, None, true),
            None
        );
        assert_eq!(
            disambiguate_account(account.clone(), Some("999-88-77777"), Some("국민은행"), true),
            account
        );
        assert_eq!(disambiguate_account(account.clone(), None, None, false), account);
        assert_eq!(disambiguate_account(None, Some("123-45-67890"), None, true), None);
    }

    #[test]
    fn test_label_window_from_config() {
        let config = ExtractionConfig {
            label_window: 5,
            ..Default::default()
        };
        let extractor = DocumentExtractor::from_config(&config);
        let text = "555-66-77777 사업자등록번호 : 123-45-67890";
        let result = extractor.extract(text, ExtractionMode::Auto);

        assert_eq!(result.business_registration_number.as_deref(), Some("555-66-77777"));
    }
}
