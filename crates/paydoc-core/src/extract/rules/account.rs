//! Bank account number extraction.

use super::patterns::{ACCOUNT_BARE, ACCOUNT_HYPHENATED};
use super::{ExtractionMatch, FieldExtractor};

/// Bank account number extractor.
///
/// Candidates are hyphen-grouped numbers (`3-4`, `2-6`, `4-8` digits) and
/// bare runs of 10 to 14 digits. The longest candidate is taken as the
/// account number, since shorter ones are more often partial reads or
/// unrelated numbers. Values keep their hyphens; callers strip them.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountNumberExtractor;

impl AccountNumberExtractor {
    /// Create a new account-number extractor.
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for AccountNumberExtractor {
    type Output = ExtractionMatch<String>;

    /// Longest candidate; the first one found wins ties.
    fn extract(&self, text: &str) -> Option<Self::Output> {
        let mut best: Option<Self::Output> = None;

        for candidate in self.extract_all(text) {
            let longer = best
                .as_ref()
                .is_none_or(|b| candidate.value.len() > b.value.len());
            if longer {
                best = Some(candidate);
            }
        }

        best
    }

    /// Hyphenated candidates first, then bare digit runs, each in text order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        [&*ACCOUNT_HYPHENATED, &*ACCOUNT_BARE]
            .into_iter()
            .flat_map(|pattern| pattern.find_iter(text))
            .map(|m| {
                ExtractionMatch::new(m.as_str().to_string(), m.as_str())
                    .with_position(m.start(), m.end())
            })
            .collect()
    }
}

/// Extract the most plausible account number from text (hyphens kept).
pub fn extract_account_number(text: &str) -> Option<String> {
    AccountNumberExtractor::new().extract(text).map(|m| m.value)
}
