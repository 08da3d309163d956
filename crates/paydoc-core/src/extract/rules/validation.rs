//! Plausibility checks that produce advisory warnings.
//!
//! Nothing here rejects a value. Warnings are shown to a person who decides
//! whether the extracted number needs fixing.

use super::bank::allowed_account_lengths;
use super::digits_only;
use crate::models::extraction::ExtractionResult;

/// Digits in a resident-registration number.
pub const RESIDENT_NUMBER_DIGITS: usize = 13;

/// Collect warnings for every populated field of a result.
pub fn validate(result: &ExtractionResult) -> Vec<String> {
    let mut warnings = Vec::new();

    if let Some(resident) = &result.resident_number {
        warnings.extend(resident_number_warning(resident));
    }

    if let (Some(bank), Some(account)) = (&result.bank_name, &result.account_number) {
        warnings.extend(account_length_warning(bank, account));
    }

    warnings
}

/// Warn when a resident number does not have 13 digits.
pub fn resident_number_warning(resident: &str) -> Option<String> {
    let count = digits_only(resident).len();
    if count == RESIDENT_NUMBER_DIGITS {
        return None;
    }

    Some(format!(
        "주민등록번호는 {}자리입니다. (현재 {}자리)",
        RESIDENT_NUMBER_DIGITS, count
    ))
}

/// Warn when an account number has a digit count the bank does not issue.
///
/// Banks without a length rule, and accounts without digits, never warn.
pub fn account_length_warning(bank: &str, account: &str) -> Option<String> {
    let allowed = allowed_account_lengths(bank)?;
    let count = digits_only(account).len();

    if count == 0 || allowed.contains(&count) {
        return None;
    }

    let lengths = allowed
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("/");

    Some(format!(
        "{} 계좌번호는 {}자리입니다. (현재 {}자리)",
        bank, lengths, count
    ))
}
