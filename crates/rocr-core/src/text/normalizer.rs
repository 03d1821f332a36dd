//! OCR text normalizer.
//!
//! OCR engines emit line breaks, repeated spaces and stray symbols that trip
//! up the extraction patterns. [`clean_ocr_text`] folds any input down to a
//! single line containing only the characters the patterns expect.

/// Characters that survive cleanup: word characters, space, and the small
/// punctuation set the extraction patterns rely on.
fn is_allowed(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || matches!(c, '.' | ',' | '-' | '/' | '₹' | ':')
}

/// Clean raw OCR text into a single normalized line.
///
/// Whitespace of any kind (including newlines and carriage returns) collapses
/// to a single space, characters outside the allow-list are removed, and the
/// result is trimmed. Total over any input; the empty string maps to itself.
///
/// The collapse is interleaved with the strip so that a removed character
/// sitting between two spaces cannot leave a double space behind:
/// `"Total:\n\n  ₹450.00"` becomes `"Total: ₹450.00"`.
pub fn clean_ocr_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;

    for c in raw.chars() {
        if c.is_whitespace() {
            pending_space = !out.is_empty();
        } else if is_allowed(c) {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(c);
        }
        // Disallowed characters vanish without a replacement; a pending
        // space stays pending until the next kept character.
    }

    out
}
