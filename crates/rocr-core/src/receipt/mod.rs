//! Receipt field extraction module.

mod parser;
pub mod rules;

pub use parser::{extract_data_from_text, ExtractionResult, HeuristicReceiptParser, ReceiptParser};
