//! Masked previews of sensitive numbers for display.

use crate::extract::rules::digits_only;

/// Show only the last four digits of an account number.
pub fn mask_account(value: &str) -> String {
    let digits = digits_only(value);
    if digits.len() <= 4 {
        return digits;
    }
    format!("****{}", &digits[digits.len() - 4..])
}

/// Show only the birth-date part of a resident registration number.
pub fn mask_resident(value: &str) -> String {
    let digits = digits_only(value);
    if digits.len() < 7 {
        return digits;
    }
    format!("{}-*******", &digits[..6])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_mask_account() {
        assert_eq!(mask_account("110-123-456789"), "****6789");
        assert_eq!(mask_account("1234"), "1234");
        assert_eq!(mask_account("12-3"), "123");
        assert_eq!(mask_account(""), "");
    }

    #[test]
    fn test_mask_resident() {
        assert_eq!(mask_resident("900101-1234567"), "900101-*******");
        assert_eq!(mask_resident("9001011"), "900101-*******");
        assert_eq!(mask_resident("900101"), "900101");
        assert_eq!(mask_resident("abc"), "");
    }
}
