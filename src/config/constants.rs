/// Maximum number of integer digits the engine supports.
///
/// Nine periods of three digits each, so amounts up to 999 septillion.
/// The scale-name table in `engine::lexicon` covers exactly this range;
/// the two must stay in sync.
pub const MAX_SUPPORTED_DIGITS: usize = 27;

/// Number of digits in the fractional (cents) part of every amount.
pub const FRACTIONAL_DIGITS: usize = 2;

/// Maximum accepted length for raw amount text, before parsing.
///
/// Generous compared to the 27-digit engine ceiling even with a currency
/// symbol and thousands separators; anything longer is rejected before the
/// regex sees it.
pub const MAX_INPUT_LENGTH: usize = 128;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::lexicon::MAX_PERIOD_POSITION;

    #[test]
    fn test_digit_ceiling_matches_scale_table() {
        assert_eq!(MAX_SUPPORTED_DIGITS, MAX_PERIOD_POSITION * 3);
    }

    #[test]
    fn test_input_length_covers_engine_ceiling() {
        // 27 digits, a sign, a point, cents and separators must all fit.
        assert!(MAX_INPUT_LENGTH > MAX_SUPPORTED_DIGITS + FRACTIONAL_DIGITS + 16);
    }
}
