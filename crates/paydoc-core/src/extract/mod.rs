//! Payment field extraction module.

mod pipeline;
pub mod rules;

pub use pipeline::{disambiguate_account, strip_hyphens, DocumentExtractor};
pub use rules::{ExtractionMatch, FieldExtractor};
