//! Total amount extraction.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::patterns::{AMOUNT_BARE, AMOUNT_LABELED};
use super::{weight, ExtractionMatch, FieldExtractor};

/// Bare numbers outside this open range are OCR noise, short codes or dates,
/// not plausible receipt totals.
const FALLBACK_MIN: u32 = 10;
const FALLBACK_MAX: u32 = 100_000;

/// Labeled amount extractor.
pub struct AmountExtractor;

impl AmountExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = ExtractionMatch<Decimal>;

    /// The *last* labeled match wins: receipts list subtotals first and the
    /// grand total near the end, and the intermediate lines often reuse the
    /// same label words.
    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().last()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        AMOUNT_LABELED
            .captures_iter(text)
            .filter_map(|caps| {
                let value = parse_amount(&caps[1])?;
                let full_match = caps.get(0).unwrap();
                Some(ExtractionMatch::new(
                    value,
                    weight::AMOUNT_LABELED,
                    full_match.as_str(),
                ))
            })
            .collect()
    }
}

/// Extract the receipt total.
///
/// Tries the labeled pattern first; if no label survived OCR, falls back to
/// the largest bare number in the plausible range, at a lower weight.
pub fn extract_amount(text: &str) -> Option<ExtractionMatch<Decimal>> {
    if let Some(labeled) = AmountExtractor::new().extract(text) {
        return Some(labeled);
    }

    fallback_amount(text)
}

/// Largest bare number that looks like a money value: either `digits.dd` or a
/// run of at least three digits, with a plausibility range filter.
fn fallback_amount(text: &str) -> Option<ExtractionMatch<Decimal>> {
    let min = Decimal::from(FALLBACK_MIN);
    let max = Decimal::from(FALLBACK_MAX);

    AMOUNT_BARE
        .find_iter(text)
        .filter_map(|m| {
            let value = parse_amount(m.as_str())?;
            (value > min && value < max)
                .then(|| ExtractionMatch::new(value, weight::AMOUNT_FALLBACK, m.as_str()))
        })
        .max_by(|a, b| a.value.cmp(&b.value))
}

/// Parse a matched numeric token, stripping thousands-separator commas.
///
/// The patterns restrict the token to digits, commas and a decimal point, so
/// this only returns `None` for tokens no pattern can produce.
pub(crate) fn parse_amount(token: &str) -> Option<Decimal> {
    Decimal::from_str(&token.replace(',', "")).ok()
}
