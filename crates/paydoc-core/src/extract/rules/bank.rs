//! Bank name extraction and bank reference tables.

use std::collections::HashMap;

use lazy_static::lazy_static;

use super::{ExtractionMatch, FieldExtractor};

/// Keyword to canonical bank name, in lookup order.
///
/// Lookup is a case-insensitive substring test and the first keyword found
/// in the text wins, so the order decides the result when a text mentions
/// more than one bank.
pub const BANK_NAME_ALIASES: &[(&str, &str)] = &[
    ("국민", "국민은행"),
    ("KB", "국민은행"),
    ("신한", "신한은행"),
    ("우리", "우리은행"),
    ("하나", "하나은행"),
    ("NH", "농협은행"),
    ("농협", "농협은행"),
    ("기업", "기업은행"),
    ("IBK", "기업은행"),
    ("카카오뱅크", "카카오뱅크"),
    ("토스뱅크", "토스뱅크"),
    ("케이뱅크", "케이뱅크"),
    ("SC", "SC제일은행"),
    ("제일", "SC제일은행"),
    ("씨티", "씨티은행"),
    ("KDB", "산업은행"),
    ("산업", "산업은행"),
    ("수협", "수협은행"),
    ("iM뱅크", "iM뱅크"),
    ("DGB", "대구은행"),
    ("대구", "대구은행"),
    ("부산", "부산은행"),
    ("광주", "광주은행"),
    ("제주", "제주은행"),
    ("새마을", "새마을금고"),
    ("우체국", "우체국"),
    ("신협", "신협"),
    ("산림조합", "산림조합"),
    ("저축은행", "저축은행"),
];

/// Bank names offered as fixed choices. Anything else is a free-text bank.
pub const CANONICAL_BANKS: &[&str] = &[
    "국민은행",
    "신한은행",
    "우리은행",
    "하나은행",
    "농협은행",
    "기업은행",
    "카카오뱅크",
    "토스뱅크",
    "케이뱅크",
    "SC제일은행",
    "씨티은행",
    "산업은행",
    "수협은행",
    "iM뱅크",
    "대구은행",
    "부산은행",
    "광주은행",
    "제주은행",
    "새마을금고",
    "신협",
    "저축은행",
    "산림조합",
    "우체국",
];

/// Valid account number digit counts per bank.
pub const BANK_ACCOUNT_LENGTHS: &[(&str, &[usize])] = &[
    ("산업은행", &[11, 14]),
    ("기업은행", &[10, 11, 12, 14]),
    ("국민은행", &[9, 10, 12, 14]),
    ("수협은행", &[11, 12, 14]),
    ("농협은행", &[13, 14]),
    ("우리은행", &[11, 12, 13, 14]),
    ("SC제일은행", &[11, 14]),
    ("씨티은행", &[10, 11, 12, 13]),
    ("iM뱅크", &[11, 12, 13, 14]),
    ("부산은행", &[12, 13]),
    ("광주은행", &[12, 13]),
    ("제주은행", &[10, 12]),
    ("새마을금고", &[13, 14]),
    ("신협", &[12, 13]),
    ("저축은행", &[11, 14]),
    ("산림조합", &[11, 12, 13]),
    ("우체국", &[12, 13, 14]),
    ("하나은행", &[11, 12, 14]),
    ("신한은행", &[11, 12, 13, 14]),
    ("케이뱅크", &[12]),
    ("카카오뱅크", &[13]),
    ("토스뱅크", &[12, 14]),
];

/// Formal or former bank names mapped to their key in [`BANK_ACCOUNT_LENGTHS`].
pub const BANK_LENGTH_ALIASES: &[(&str, &str)] = &[
    ("대구은행", "iM뱅크"),
    ("DGB대구은행", "iM뱅크"),
    ("한국산업은행", "산업은행"),
    ("KDB산업은행", "산업은행"),
    ("IBK기업은행", "기업은행"),
    ("중소기업은행", "기업은행"),
    ("KB국민은행", "국민은행"),
    ("NH농협은행", "농협은행"),
    ("한국씨티은행", "씨티은행"),
    ("KEB하나은행", "하나은행"),
    ("한국스탠다드차타드은행", "SC제일은행"),
    ("우체국예금", "우체국"),
    ("산림조합중앙회", "산림조합"),
];

lazy_static! {
    static ref UPPERCASE_ALIASES: Vec<(String, &'static str)> = BANK_NAME_ALIASES
        .iter()
        .map(|(keyword, bank)| (keyword.to_uppercase(), *bank))
        .collect();

    static ref LENGTHS_BY_BANK: HashMap<&'static str, &'static [usize]> =
        BANK_ACCOUNT_LENGTHS.iter().copied().collect();

    static ref LENGTH_KEYS: HashMap<&'static str, &'static str> =
        BANK_LENGTH_ALIASES.iter().copied().collect();
}

/// Bank name extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct BankNameExtractor;

impl BankNameExtractor {
    /// Create a new bank-name extractor.
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for BankNameExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let upper = text.to_uppercase();

        UPPERCASE_ALIASES
            .iter()
            .find(|(keyword, _)| upper.contains(keyword.as_str()))
            .map(|(keyword, bank)| ExtractionMatch::new(bank.to_string(), keyword.as_str()))
    }

    /// Every distinct bank mentioned, in lookup order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let upper = text.to_uppercase();
        let mut results: Vec<Self::Output> = Vec::new();

        for (keyword, bank) in UPPERCASE_ALIASES.iter() {
            if !upper.contains(keyword.as_str()) || results.iter().any(|r| r.value == *bank) {
                continue;
            }
            results.push(ExtractionMatch::new(bank.to_string(), keyword.as_str()));
        }

        results
    }
}

/// Extract the canonical bank name mentioned in text.
pub fn extract_bank_name(text: &str) -> Option<String> {
    BankNameExtractor::new().extract(text).map(|m| m.value)
}

/// Whether `name` is one of the fixed bank choices.
pub fn is_known_bank(name: &str) -> bool {
    CANONICAL_BANKS.contains(&name)
}

/// Key used for `bank` in the account length table.
pub fn length_table_key(bank: &str) -> &str {
    LENGTH_KEYS.get(bank).copied().unwrap_or(bank)
}

/// Allowed account digit counts for a bank, if the bank has a rule.
pub fn allowed_account_lengths(bank: &str) -> Option<&'static [usize]> {
    LENGTHS_BY_BANK.get(length_table_key(bank)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_bank_name() {
        assert_eq!(
            extract_bank_name("국민은행 123-456-7890"),
            Some("국민은행".to_string())
        );
        assert_eq!(extract_bank_name("카카오뱅크 3333-01-1234567"), Some("카카오뱅크".to_string()));
        assert_eq!(extract_bank_name("iM뱅크 통장"), Some("iM뱅크".to_string()));
        assert_eq!(extract_bank_name("부산은행"), Some("부산은행".to_string()));
    }

    #[test]
    fn test_case_insensitive_abbreviations() {
        assert_eq!(extract_bank_name("ibk 통장사본"), Some("기업은행".to_string()));
        assert_eq!(extract_bank_name("Kb star"), Some("국민은행".to_string()));
        assert_eq!(extract_bank_name("nh bank"), Some("농협은행".to_string()));
        assert_eq!(extract_bank_name("DGB 통장"), Some("대구은행".to_string()));
    }

    #[test]
    fn test_declaration_order_decides_ambiguous_text() {
        // Both banks appear; 신한 is declared before 우리
        let text = "우리은행에서 신한은행으로 이체";
        assert_eq!(extract_bank_name(text), Some("신한은행".to_string()));

        let all = BankNameExtractor::new().extract_all(text);
        let names: Vec<&str> = all.iter().map(|m| m.value.as_str()).collect();
        assert_eq!(names, vec!["신한은행", "우리은행"]);
    }

    #[test]
    fn test_extract_all_deduplicates() {
        let all = BankNameExtractor::new().extract_all("KB국민은행");
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].value, "국민은행");
        assert_eq!(all[0].source, "국민");
    }

    #[test]
    fn test_no_bank() {
        assert_eq!(extract_bank_name("홍길동 900101-1234567"), None);
        assert_eq!(extract_bank_name(""), None);
    }

    #[test]
    fn test_alias_targets_are_canonical() {
        for (_, bank) in BANK_NAME_ALIASES {
            assert!(is_known_bank(bank), "{bank} is not a canonical bank");
        }
        for (_, key) in BANK_LENGTH_ALIASES {
            assert!(allowed_account_lengths(key).is_some(), "{key} has no length rule");
        }
    }

    #[test]
    fn test_allowed_account_lengths() {
        assert_eq!(allowed_account_lengths("기업은행"), Some(&[10, 11, 12, 14][..]));
        assert_eq!(allowed_account_lengths("대구은행"), Some(&[11, 12, 13, 14][..]));
        assert_eq!(allowed_account_lengths("한국산업은행"), Some(&[11, 14][..]));
        assert_eq!(allowed_account_lengths("Deutsche Bank"), None);
    }

    #[test]
    fn test_length_table_key() {
        assert_eq!(length_table_key("대구은행"), "iM뱅크");
        assert_eq!(length_table_key("국민은행"), "국민은행");
        assert_eq!(length_table_key("없는은행"), "없는은행");
    }
}
