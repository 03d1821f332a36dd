//! Core library for receipt OCR processing.
//!
//! This crate provides:
//! - OCR text cleanup (whitespace collapse, character allow-list)
//! - Receipt field extraction (amount, date, merchant, items, tax, payment)
//! - A heuristic confidence score for the extracted record
//!
//! The OCR engine itself (image to text) is an external collaborator; callers
//! feed its raw output through [`clean_ocr_text`] and then
//! [`extract_data_from_text`].

pub mod models;
pub mod receipt;
pub mod text;

pub use models::receipt::{ExtractedData, PaymentMethod};
pub use receipt::{extract_data_from_text, ExtractionResult, HeuristicReceiptParser, ReceiptParser};
pub use text::clean_ocr_text;
