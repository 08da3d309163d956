//! Common regex patterns for payment document extraction.
//!
//! Digits are matched with `[0-9]` rather than `\d` so that only ASCII
//! digits count; recognized text may contain other numeral scripts.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Resident-registration number (YYMMDD-NNNNNNN)
    pub static ref RESIDENT_HYPHENATED: Regex = Regex::new(
        r"([0-9]{6})\s*-\s*([0-9]{7})"
    ).unwrap();

    pub static ref RESIDENT_SPACED: Regex = Regex::new(
        r"([0-9]{6})\s+([0-9]{7})"
    ).unwrap();

    // Bank account numbers
    pub static ref ACCOUNT_HYPHENATED: Regex = Regex::new(
        r"[0-9]{3,4}-[0-9]{2,6}-[0-9]{4,8}"
    ).unwrap();

    pub static ref ACCOUNT_BARE: Regex = Regex::new(
        r"[0-9]{10,14}"
    ).unwrap();

    // Business registration certificate / number
    pub static ref BUSINESS_HINT: Regex = Regex::new(
        r"사업자\s*등록\s*(?:증|번호)"
    ).unwrap();

    pub static ref REGISTRATION_LABEL: Regex = Regex::new(
        r"등록\s*번호"
    ).unwrap();

    pub static ref BUSINESS_HYPHENATED: Regex = Regex::new(
        r"([0-9]{3})\s*-\s*([0-9]{2})\s*-\s*([0-9]{5})"
    ).unwrap();

    pub static ref BUSINESS_COMPACT: Regex = Regex::new(
        r"[0-9]{10}"
    ).unwrap();

    pub static ref DIGIT_RUN: Regex = Regex::new(
        r"[0-9]+"
    ).unwrap();
}
