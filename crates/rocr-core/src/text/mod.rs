//! Cleanup of raw OCR output before field extraction.

mod normalizer;

pub use normalizer::clean_ocr_text;
