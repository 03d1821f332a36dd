//! Regex table for receipt field extraction.
//!
//! The label patterns are deliberately unanchored: OCR output has no reliable
//! line structure left after cleanup, so a label token is accepted wherever it
//! appears. That trades some false positives (a label word mid-sentence) for
//! recall on noisy scans.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Amount patterns. The labeled form accepts any of the usual total
    // markers; the bare form is the fallback when no marker survived OCR.
    pub static ref AMOUNT_LABELED: Regex = Regex::new(
        r"(?i)(?:total|amount|sum|due|pay|rs\.?|₹|inr|grand\s+total|balance|bill)[\s:]*(\d[\d,]*(?:\.\d+)?)"
    ).unwrap();

    pub static ref AMOUNT_BARE: Regex = Regex::new(
        r"\b(?:\d+\.\d{2}|\d{3,})\b"
    ).unwrap();

    // Date patterns: day-month-year with 2- or 4-digit year, or ISO-like
    // year-month-day. Shape only; values are kept verbatim.
    pub static ref DATE_DMY: Regex = Regex::new(
        r"\b\d{1,2}[./\-]\d{1,2}[./\-](?:\d{4}|\d{2})\b"
    ).unwrap();

    pub static ref DATE_YMD: Regex = Regex::new(
        r"\b\d{4}[./\-]\d{1,2}[./\-]\d{1,2}\b"
    ).unwrap();

    // Merchant patterns: a labeled name, then two business-name heuristics.
    pub static ref MERCHANT_LABELED: Regex = Regex::new(
        r"(?i)(?:from|merchant|store|shop|restaurant|company|vendor|business)[\s:]*([A-Za-z][A-Za-z\s&.']*)"
    ).unwrap();

    pub static ref MERCHANT_SUFFIXED: Regex = Regex::new(
        r"((?:[A-Z][a-z']+\s+)+(?i:store|shop|restaurant|market|mall))\b"
    ).unwrap();

    pub static ref MERCHANT_CORPORATE: Regex = Regex::new(
        r"([A-Z][A-Z'&.\s]*(?:LTD|INC|LLC|CO|CORP))\b"
    ).unwrap();

    // Line items: a run of letters/spaces followed by a price token.
    pub static ref LINE_ITEM: Regex = Regex::new(
        r"([A-Za-z][A-Za-z\s]*)\s+(\d[\d,]*(?:\.\d+)?)"
    ).unwrap();

    // Tax, any of the common Indian/VAT markers.
    pub static ref TAX_LABELED: Regex = Regex::new(
        r"(?i)(?:tax|gst|vat|cgst|sgst)[\s:]*(\d[\d,]*(?:\.\d+)?)"
    ).unwrap();

    // Payment method with a closed token vocabulary.
    pub static ref PAYMENT_LABELED: Regex = Regex::new(
        r"(?i)(?:paid\s+by|payment|method)[\s:]*(cash|card|credit|debit|upi|net\s+banking)"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_labeled_accepts_currency_markers() {
        assert!(AMOUNT_LABELED.is_match("Total: 450.00"));
        assert!(AMOUNT_LABELED.is_match("₹ 28.00"));
        assert!(AMOUNT_LABELED.is_match("Rs. 1,200"));
        assert!(AMOUNT_LABELED.is_match("grand total 99"));
        assert!(!AMOUNT_LABELED.is_match("no numbers here"));
    }

    #[test]
    fn test_date_shapes() {
        assert!(DATE_DMY.is_match("12/05/2024"));
        assert!(DATE_DMY.is_match("1-2-24"));
        assert!(DATE_YMD.is_match("2024.05.12"));
        assert!(!DATE_DMY.is_match("12/05/202"));
    }

    #[test]
    fn test_merchant_heuristics() {
        assert!(MERCHANT_SUFFIXED.is_match("Fresh Food Market"));
        assert!(!MERCHANT_SUFFIXED.is_match("market"));
        assert!(MERCHANT_CORPORATE.is_match("ACME TRADING CO"));
        assert!(MERCHANT_CORPORATE.is_match("JOE'S MARKET INC"));
    }

    #[test]
    fn test_payment_vocabulary_is_closed() {
        assert!(PAYMENT_LABELED.is_match("Paid by UPI"));
        assert!(PAYMENT_LABELED.is_match("payment: net banking"));
        assert!(!PAYMENT_LABELED.is_match("Paid by cheque"));
    }
}
