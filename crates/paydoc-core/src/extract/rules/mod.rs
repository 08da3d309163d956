//! Rule-based field extractors for Korean payment documents.

pub mod account;
pub mod bank;
pub mod business;
pub mod patterns;
pub mod resident;
pub mod validation;

pub use account::{extract_account_number, AccountNumberExtractor};
pub use bank::{
    allowed_account_lengths, extract_bank_name, is_known_bank, length_table_key,
    BankNameExtractor, BANK_ACCOUNT_LENGTHS, BANK_LENGTH_ALIASES, BANK_NAME_ALIASES,
    CANONICAL_BANKS,
};
pub use business::{
    extract_business_number, format_business_number, has_business_context,
    BusinessNumberExtractor,
};
pub use resident::{extract_resident_number, ResidentNumberExtractor};
pub use validation::{account_length_warning, resident_number_warning, validate};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the preferred value of the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract every candidate for the field, in preference order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A value found in the text together with where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Extracted (normalized) value.
    pub value: T,
    /// Byte range in the source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}

/// Keep only the ASCII digits of a value.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}
