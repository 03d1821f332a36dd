//! Data models for extracted receipt records.

pub mod receipt;

pub use receipt::{ExtractedData, PaymentMethod};
