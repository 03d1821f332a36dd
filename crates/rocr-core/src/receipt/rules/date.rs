//! Date token extraction.
//!
//! Dates are reported verbatim as they appeared in the text. The patterns
//! check shape only - `99/99/2024` passes - because downstream screens let
//! the user correct the field, and rejecting a misread date would throw away
//! the evidence they correct it from.

use super::patterns::{DATE_DMY, DATE_YMD};
use super::{weight, ExtractionMatch, FieldExtractor};

/// Date token extractor.
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = ExtractionMatch<String>;

    /// First match in the text wins.
    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results: Vec<(usize, ExtractionMatch<String>)> = Vec::new();

        for m in DATE_DMY.find_iter(text) {
            results.push((
                m.start(),
                ExtractionMatch::new(m.as_str().to_string(), weight::DATE, m.as_str()),
            ));
        }

        for m in DATE_YMD.find_iter(text) {
            // Both shapes can fire on overlapping text; keep one per position.
            if results.iter().any(|(start, _)| *start == m.start()) {
                continue;
            }
            results.push((
                m.start(),
                ExtractionMatch::new(m.as_str().to_string(), weight::DATE, m.as_str()),
            ));
        }

        results.sort_by_key(|(start, _)| *start);
        results.into_iter().map(|(_, m)| m).collect()
    }
}

/// Extract the first date-shaped token, verbatim.
pub fn extract_date(text: &str) -> Option<ExtractionMatch<String>> {
    DateExtractor::new().extract(text)
}
