//! Numeric literal recognition
//!
//! Mirrors the browser's string-to-number conversion, so a value accepted
//! here is exactly a value the page itself would not consider `NaN`.

use once_cell::sync::Lazy;
use regex::Regex;

/// Signed decimal literal, optionally with fraction and exponent, or `Infinity`.
static DECIMAL_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)$")
        .expect("decimal literal pattern is valid")
});

/// Unsigned hex, octal or binary integer literal.
static RADIX_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^0(?:[xX][0-9a-fA-F]+|[oO][0-7]+|[bB][01]+)$")
        .expect("radix literal pattern is valid")
});

/// Whitespace and line terminators stripped before conversion.
fn is_number_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

/// Returns true when `value` converts to a number (anything but `NaN`).
///
/// A blank or whitespace-only string converts to zero and is therefore
/// numeric; emptiness is a separate check in the validator.
pub fn is_numeric_literal(value: &str) -> bool {
    let trimmed = value.trim_matches(is_number_whitespace);

    if trimmed.is_empty() {
        return true;
    }

    DECIMAL_LITERAL.is_match(trimmed) || RADIX_LITERAL.is_match(trimmed)
}
