//! Tax amount extraction.

use rust_decimal::Decimal;

use super::amount::parse_amount;
use super::patterns::TAX_LABELED;
use super::{weight, ExtractionMatch, FieldExtractor};

/// Labeled tax extractor (tax/GST/VAT/CGST/SGST markers).
pub struct TaxExtractor;

impl TaxExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TaxExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for TaxExtractor {
    type Output = ExtractionMatch<Decimal>;

    /// First match wins.
    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        TAX_LABELED
            .captures_iter(text)
            .filter_map(|caps| {
                let value = parse_amount(&caps[1])?;
                let full_match = caps.get(0).unwrap();
                Some(ExtractionMatch::new(value, weight::TAX, full_match.as_str()))
            })
            .collect()
    }
}

/// Extract the first labeled tax amount.
pub fn extract_tax(text: &str) -> Option<ExtractionMatch<Decimal>> {
    TaxExtractor::new().extract(text)
}
