//! Heuristic receipt parser combining the per-field extraction rules.

use tracing::{debug, info};

use crate::models::receipt::ExtractedData;

use super::rules::{
    amount::extract_amount, date::extract_date, items::extract_items,
    merchant::extract_merchant, payment::extract_payment_method, tax::extract_tax, weight,
    MAX_CONFIDENCE,
};

/// Result of receipt extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted receipt data.
    pub data: ExtractedData,
    /// Advisory notes about fields that could not be extracted.
    pub warnings: Vec<String>,
}

/// Trait for receipt parsing.
pub trait ReceiptParser {
    /// Parse cleaned receipt text into structured data.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Heuristic parser: six independent pattern passes over the same text, each
/// adding a fixed weight to the confidence score when it finds its field.
///
/// Passes share no cursor state, so their order only matters for the score
/// bookkeeping; each pass applies its own tie-break (last labeled amount,
/// first everything else) against the full text.
pub struct HeuristicReceiptParser;

impl HeuristicReceiptParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }
}

impl Default for HeuristicReceiptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ReceiptParser for HeuristicReceiptParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        let mut warnings = Vec::new();
        let mut confidence: u32 = 0;
        let mut data = ExtractedData::default();

        info!("extracting receipt fields from {} characters of text", text.len());

        match extract_amount(text) {
            Some(m) => {
                debug!(source = %m.source, "amount matched");
                data.amount = Some(m.value);
                confidence += u32::from(m.weight);
            }
            None => warnings.push("could not extract total amount".to_string()),
        }

        if let Some(m) = extract_date(text) {
            debug!(source = %m.source, "date matched");
            data.date = Some(m.value);
            confidence += u32::from(m.weight);
        }

        match extract_merchant(text) {
            Some(m) => {
                debug!(source = %m.source, "merchant matched");
                data.merchant = Some(m.value);
                confidence += u32::from(m.weight);
            }
            None => warnings.push("could not extract merchant name".to_string()),
        }

        let items = extract_items(text);
        if !items.is_empty() {
            debug!(count = items.len(), "line items matched");
            data.items = Some(items);
            confidence += u32::from(weight::ITEMS);
        }

        if let Some(m) = extract_tax(text) {
            debug!(source = %m.source, "tax matched");
            data.tax = Some(m.value);
            confidence += u32::from(m.weight);
        }

        if let Some(m) = extract_payment_method(text) {
            debug!(source = %m.source, "payment method matched");
            data.payment_method = Some(m.value);
            confidence += u32::from(m.weight);
        }

        data.confidence = confidence.min(u32::from(MAX_CONFIDENCE)) as u8;

        debug!(confidence = data.confidence, "extraction finished");

        ExtractionResult { data, warnings }
    }
}

/// Extract structured receipt data from cleaned OCR text.
///
/// Never fails: text with no recognizable fields yields a record with every
/// optional field absent and a confidence of zero. Callers are expected to
/// run [`crate::text::clean_ocr_text`] first; the extractor does not enforce
/// this.
pub fn extract_data_from_text(text: &str) -> ExtractedData {
    HeuristicReceiptParser::new().parse(text).data
}
