//! Payment method extraction.

use crate::models::receipt::PaymentMethod;

use super::patterns::PAYMENT_LABELED;
use super::{weight, ExtractionMatch, FieldExtractor};

/// Labeled payment-method extractor with a closed token vocabulary.
pub struct PaymentExtractor;

impl PaymentExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PaymentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PaymentExtractor {
    type Output = ExtractionMatch<PaymentMethod>;

    /// First match wins.
    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        PAYMENT_LABELED
            .captures_iter(text)
            .filter_map(|caps| {
                // The capture is restricted to the vocabulary, so this only
                // filters out nothing in practice.
                let method = PaymentMethod::from_str(&caps[1])?;
                let full_match = caps.get(0).unwrap();
                Some(ExtractionMatch::new(
                    method,
                    weight::PAYMENT_METHOD,
                    full_match.as_str(),
                ))
            })
            .collect()
    }
}

/// Extract the first labeled payment method, lower-cased.
pub fn extract_payment_method(text: &str) -> Option<ExtractionMatch<PaymentMethod>> {
    PaymentExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_paid_by() {
        let result = extract_payment_method("Paid by Card").unwrap();
        assert_eq!(result.value, PaymentMethod::Card);
        assert_eq!(result.weight, weight::PAYMENT_METHOD);
    }

    #[test]
    fn test_capture_is_lowercased() {
        assert_eq!(
            extract_payment_method("PAYMENT: UPI").unwrap().value,
            PaymentMethod::Upi
        );
        assert_eq!(
            extract_payment_method("paid by Net Banking").unwrap().value,
            PaymentMethod::NetBanking
        );
    }

    #[test]
    fn test_first_match_wins() {
        let result = extract_payment_method("paid by cash payment card").unwrap();
        assert_eq!(result.value, PaymentMethod::Cash);
    }

    #[test]
    fn test_unknown_method_rejected_by_pattern() {
        assert!(extract_payment_method("paid by cheque").is_none());
        assert!(extract_payment_method("").is_none());
    }
}
