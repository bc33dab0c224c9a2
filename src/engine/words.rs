use super::amount::Amount;
use super::lexicon::{self, ONES, TEENS, TENS};
use super::periods::{segment_periods, Period};
use crate::error::{ConversionError, Result};

/// Convert one three-digit period into word tokens.
///
/// Produces only the period's own words; scale names and currency nouns
/// are attached by the callers. An all-zero period yields no tokens: the
/// `ZERO` fallback belongs to the whole number, not to a single group.
fn period_words(period: &Period) -> Vec<String> {
    let mut words = Vec::new();

    let hundreds = period.hundreds() as usize;
    let tens = period.tens() as usize;
    let ones = period.ones() as usize;

    if hundreds != 0 {
        words.push(ONES[hundreds].to_string());
        words.push("HUNDRED".to_string());
        if tens != 0 || ones != 0 {
            words.push("AND".to_string());
        }
    }

    if tens == 1 {
        // The teens have unique words for every ones digit, 10 through 19.
        words.push(TEENS[ones].to_string());
    } else if tens >= 2 {
        if ones != 0 {
            words.push(format!("{}-{}", TENS[tens], ONES[ones]));
        } else {
            words.push(TENS[tens].to_string());
        }
    } else if ones != 0 {
        words.push(ONES[ones].to_string());
    }

    words
}

/// Scale name for a period position.
///
/// Position 1 has no name; positions past the lexicon fail closed as a
/// magnitude overflow (unreachable while the segmenter's ceiling matches
/// the scale table).
fn scale_suffix(position: usize) -> Result<Option<&'static str>> {
    if position == 1 {
        return Ok(None);
    }
    match lexicon::scale_name(position) {
        Some(name) => Ok(Some(name)),
        None => Err(ConversionError::MagnitudeOverflow {
            digits: position * 3,
        }),
    }
}

/// Convert a whole digit string (integer or fractional part) into words.
///
/// Falls back to a single `ZERO` token when no period contributes any
/// significant digit. An all-zero middle group contributes neither words
/// nor its scale name.
fn number_words(digit_string: &str) -> Result<Vec<String>> {
    let periods = segment_periods(digit_string)?;
    let mut words = Vec::new();

    for period in &periods {
        let tokens = period_words(period);
        if tokens.is_empty() {
            continue;
        }
        words.extend(tokens);
        if let Some(scale) = scale_suffix(period.position())? {
            words.push(scale.to_string());
        }
    }

    if words.is_empty() {
        words.push("ZERO".to_string());
    }

    Ok(words)
}

/// Singular noun only when the part spells exactly `ONE`.
fn currency_noun<'a>(words: &[String], singular: &'a str, plural: &'a str) -> &'a str {
    if words.len() == 1 && words[0] == "ONE" {
        singular
    } else {
        plural
    }
}

/// Spell out a validated amount in uppercase English,
/// e.g. `1000000000.01` becomes `"ONE BILLION DOLLARS AND ONE CENT"`.
///
/// Fails with `MagnitudeOverflow` when the integer part has more digits
/// than the engine supports, before any words are generated; a failed
/// conversion never returns a partial string.
pub fn convert_amount_to_words(amount: &Amount) -> Result<String> {
    let dollar_words = number_words(amount.integer_digits())?;
    let cent_words = number_words(amount.fractional_digits())?;

    let mut words: Vec<String> = Vec::new();
    if amount.is_negative() {
        words.push("NEGATIVE".to_string());
    }
    let dollar_noun = currency_noun(&dollar_words, "DOLLAR", "DOLLARS");
    words.extend(dollar_words);
    words.push(dollar_noun.to_string());
    words.push("AND".to_string());
    let cent_noun = currency_noun(&cent_words, "CENT", "CENTS");
    words.extend(cent_words);
    words.push(cent_noun.to_string());

    Ok(words.join(" "))
}
