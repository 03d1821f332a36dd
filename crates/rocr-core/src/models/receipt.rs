//! Receipt data model produced by the extraction pipeline.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Structured data extracted from a single receipt.
///
/// Every field except `confidence` is optional: a pass that finds no match
/// leaves its field absent rather than filling in a zero value. The record is
/// created fresh per extraction call and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedData {
    /// Total / grand total of the receipt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,

    /// Date token exactly as it appeared in the text (not normalized to a
    /// calendar date).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Best-guess store/business name, trimmed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant: Option<String>,

    /// Line items formatted as `"<name> - <price>"`, in order of appearance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,

    /// Tax amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<Decimal>,

    /// How the receipt was paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,

    /// Heuristic extraction confidence, 0-100.
    pub confidence: u8,
}

/// Minimum confidence (exclusive) for a record to be considered usable.
pub const USABLE_MIN_CONFIDENCE: u8 = 30;

impl ExtractedData {
    /// Whether the record is good enough to present without manual review.
    ///
    /// Requires a positive amount and a confidence strictly above
    /// [`USABLE_MIN_CONFIDENCE`]. Advisory only: extraction always returns its
    /// best effort, and callers may still surface an unusable record for
    /// manual correction.
    pub fn is_usable(&self) -> bool {
        self.amount.is_some_and(|a| a > Decimal::ZERO) && self.confidence > USABLE_MIN_CONFIDENCE
    }
}

/// Payment methods recognized on receipts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
    Credit,
    Debit,
    Upi,
    #[serde(rename = "net banking")]
    NetBanking,
}

impl PaymentMethod {
    /// Parse a captured payment token. Inner whitespace is collapsed so both
    /// `"net banking"` and `"net  banking"` resolve.
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized = s.to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ");

        match normalized.as_str() {
            "cash" => Some(PaymentMethod::Cash),
            "card" => Some(PaymentMethod::Card),
            "credit" => Some(PaymentMethod::Credit),
            "debit" => Some(PaymentMethod::Debit),
            "upi" => Some(PaymentMethod::Upi),
            "net banking" => Some(PaymentMethod::NetBanking),
            _ => None,
        }
    }

    /// The lowercase wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::Credit => "credit",
            PaymentMethod::Debit => "debit",
            PaymentMethod::Upi => "upi",
            PaymentMethod::NetBanking => "net banking",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_usable_requires_amount_and_confidence() {
        let mut data = ExtractedData {
            amount: Some(Decimal::from(50)),
            confidence: 35,
            ..Default::default()
        };
        assert!(data.is_usable());

        // Threshold is strict
        data.confidence = 30;
        assert!(!data.is_usable());

        data.confidence = 35;
        data.amount = None;
        assert!(!data.is_usable());

        data.amount = Some(Decimal::ZERO);
        assert!(!data.is_usable());
    }

    #[test]
    fn test_payment_method_from_str() {
        assert_eq!(PaymentMethod::from_str("Card"), Some(PaymentMethod::Card));
        assert_eq!(PaymentMethod::from_str("CASH"), Some(PaymentMethod::Cash));
        assert_eq!(
            PaymentMethod::from_str("Net  Banking"),
            Some(PaymentMethod::NetBanking)
        );
        assert_eq!(PaymentMethod::from_str("cheque"), None);
    }

    #[test]
    fn test_payment_method_display() {
        assert_eq!(PaymentMethod::NetBanking.to_string(), "net banking");
        assert_eq!(PaymentMethod::Upi.to_string(), "upi");
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let data = ExtractedData {
            amount: Some(Decimal::from_str("28.00").unwrap()),
            payment_method: Some(PaymentMethod::Card),
            confidence: 40,
            ..Default::default()
        };

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["payment_method"], "card");
        assert_eq!(json["confidence"], 40);
        assert!(json.get("date").is_none());
        assert!(json.get("merchant").is_none());
        assert!(json.get("items").is_none());
        assert!(json.get("tax").is_none());
    }
}
