/// Free-text amount parsing.
///
/// The engine only accepts a validated `Amount`; everything messy about
/// user input lives here: currency symbols, thousands separators, Unicode
/// lookalikes for minus and space, and the two-decimal-place precision
/// limit. A parse failure never reaches the engine.
use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::config::constants::{FRACTIONAL_DIGITS, MAX_INPUT_LENGTH};
use crate::engine::{Amount, Sign};
use crate::error::{ConversionError, Result};

lazy_static! {
    /// A signed decimal: optional minus, integer digits, optional fraction.
    /// Precision is checked separately so it can get its own error.
    static ref AMOUNT_REGEX: Regex = Regex::new(r"^(-)?(\d+)(?:\.(\d*))?$").unwrap();
}

/// Parse sanitized or raw user text into a validated `Amount`.
///
/// Accepts forms like `"123.45"`, `"$1,234.56"`, `" -7 "` and `"1.5"`
/// (right-padded to two fractional digits). Rejects blank input, text that
/// is not a signed decimal, and more than two digits after the point —
/// extra precision is an error, never silently truncated.
pub fn parse_amount(text: &str) -> Result<Amount> {
    if text.trim().is_empty() {
        return Err(ConversionError::EmptyInput);
    }
    if text.chars().count() > MAX_INPUT_LENGTH {
        let prefix: String = text.chars().take(32).collect();
        return Err(ConversionError::MalformedAmount(format!("{}...", prefix)));
    }

    let cleaned = sanitize(text);
    let caps = AMOUNT_REGEX
        .captures(&cleaned)
        .ok_or_else(|| ConversionError::MalformedAmount(text.trim().to_string()))?;

    let sign = if caps.get(1).is_some() {
        Sign::Negative
    } else {
        Sign::Positive
    };
    let integer_digits = caps.get(2).map(|m| m.as_str()).unwrap_or("");
    let fraction = caps.get(3).map(|m| m.as_str()).unwrap_or("");

    if fraction.len() > FRACTIONAL_DIGITS {
        return Err(ConversionError::UnsupportedPrecision {
            places: fraction.len(),
        });
    }
    let fractional_digits = format!("{:0<width$}", fraction, width = FRACTIONAL_DIGITS);

    Amount::new(sign, integer_digits, &fractional_digits)
}

/// Fold Unicode lookalikes and strip formatting characters.
///
/// Handles:
/// - Unicode minus and en/em dashes -> ASCII hyphen
/// - currency symbol, commas and underscores -> removed
/// - all whitespace (including non-breaking) -> removed
/// - soft hyphens -> removed
fn sanitize(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());

    for ch in text.nfc() {
        match ch {
            '\u{2212}' | '\u{2013}' | '\u{2014}' => cleaned.push('-'),
            '$' | ',' | '_' => {}
            '\u{00AD}' => {}
            ch if ch.is_whitespace() => {}
            _ => cleaned.push(ch),
        }
    }

    cleaned
}
