//! WASM bindings for receipt OCR field extraction.
//!
//! This crate exposes the cleanup + extraction pipeline to the browser host
//! application, which runs the OCR engine on the captured image and hands the
//! raw text over the boundary.

use wasm_bindgen::prelude::*;

use rocr_core::receipt::{HeuristicReceiptParser, ReceiptParser};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Clean raw OCR text into the single-line form the extractor expects.
#[wasm_bindgen]
pub fn clean_ocr_text(raw_text: &str) -> String {
    rocr_core::text::clean_ocr_text(raw_text)
}

/// Extract structured receipt data from cleaned OCR text.
///
/// Returns the record as a plain JS object; absent fields are omitted.
#[wasm_bindgen]
pub fn extract_data_from_text(cleaned_text: &str) -> Result<JsValue, JsValue> {
    let data = rocr_core::receipt::extract_data_from_text(cleaned_text);
    serde_wasm_bindgen::to_value(&data).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Receipt scanner class for browser use: cleanup, extraction and the
/// usability check in one object.
#[wasm_bindgen]
pub struct ReceiptScanner {
    parser: HeuristicReceiptParser,
}

#[wasm_bindgen]
impl ReceiptScanner {
    /// Create a new scanner.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            parser: HeuristicReceiptParser::new(),
        }
    }

    /// Clean raw OCR text and extract receipt data in one call.
    #[wasm_bindgen]
    pub fn scan(&self, raw_text: &str) -> Result<JsValue, JsValue> {
        let cleaned = rocr_core::text::clean_ocr_text(raw_text);
        let result = self.parser.parse(&cleaned);
        serde_wasm_bindgen::to_value(&result.data).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Like `scan`, but also returns the advisory warnings.
    #[wasm_bindgen]
    pub fn scan_with_warnings(&self, raw_text: &str) -> Result<JsValue, JsValue> {
        let cleaned = rocr_core::text::clean_ocr_text(raw_text);
        let result = self.parser.parse(&cleaned);

        #[derive(serde::Serialize)]
        struct ScanResult {
            data: rocr_core::ExtractedData,
            warnings: Vec<String>,
        }

        let output = ScanResult {
            data: result.data,
            warnings: result.warnings,
        };

        serde_wasm_bindgen::to_value(&output).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Whether cleaned text extracts to a record usable without review.
    #[wasm_bindgen]
    pub fn is_usable(&self, cleaned_text: &str) -> bool {
        self.parser.parse(cleaned_text).data.is_usable()
    }
}

impl Default for ReceiptScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_clean_ocr_text() {
        assert_eq!(clean_ocr_text("Total:\n\n  ₹450.00"), "Total: ₹450.00");
    }

    #[wasm_bindgen_test]
    fn test_extract_returns_object() {
        let value = extract_data_from_text("Total: 450.00").unwrap();
        assert!(value.is_object());
    }

    #[wasm_bindgen_test]
    fn test_scanner_usability() {
        let scanner = ReceiptScanner::new();
        assert!(scanner.is_usable("Store: Acme Mart Total: 450.00"));
        assert!(!scanner.is_usable("nothing useful"));
    }
}
