//! Line item extraction.

use super::patterns::LINE_ITEM;
use super::{ExtractionMatch, FieldExtractor};

/// Line item extractor: name/price pairs in order of appearance.
pub struct ItemExtractor;

impl ItemExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ItemExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for ItemExtractor {
    type Output = ExtractionMatch<(String, String)>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        LINE_ITEM
            .captures_iter(text)
            .map(|caps| {
                let name = caps[1].trim().to_string();
                let price = caps[2].to_string();
                let full_match = caps.get(0).unwrap();
                // Weight is contributed once per receipt, not per item; the
                // parser adds it when the collected list is non-empty.
                ExtractionMatch::new((name, price), 0, full_match.as_str())
            })
            .collect()
    }
}

/// Extract line items as `"<name> - <price>"` strings, in text order.
pub fn extract_items(text: &str) -> Vec<String> {
    ItemExtractor::new()
        .extract_all(text)
        .into_iter()
        .map(|m| format!("{} - {}", m.value.0, m.value.1))
        .collect()
}
