use crate::config::constants::FRACTIONAL_DIGITS;
use crate::error::{ConversionError, Result};

/// Sign of a monetary amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

/// A validated signed decimal amount, held as exact digit strings.
///
/// The fractional part is always exactly two digits; callers must reject
/// or pad input before constructing an `Amount`. There is no binary
/// floating point anywhere on this path, so `.00`/`.01` boundaries are
/// exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amount {
    sign: Sign,
    integer_digits: String,
    fractional_digits: String,
}

impl Amount {
    /// Build an amount from pre-split digit strings.
    ///
    /// Redundant leading zeros on the integer part are normalized away
    /// (keeping a single `"0"` for a zero magnitude), and an all-zero
    /// magnitude is always positive: there is no negative zero.
    pub fn new(sign: Sign, integer_digits: &str, fractional_digits: &str) -> Result<Self> {
        if integer_digits.is_empty() || !integer_digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConversionError::MalformedAmount(integer_digits.to_string()));
        }
        if fractional_digits.len() != FRACTIONAL_DIGITS
            || !fractional_digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ConversionError::MalformedAmount(fractional_digits.to_string()));
        }

        let trimmed = integer_digits.trim_start_matches('0');
        let integer_digits = if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        };

        let is_zero = integer_digits == "0" && fractional_digits.bytes().all(|b| b == b'0');
        let sign = if is_zero { Sign::Positive } else { sign };

        Ok(Amount {
            sign,
            integer_digits,
            fractional_digits: fractional_digits.to_string(),
        })
    }

    /// Build an amount from a signed number of cents, exactly.
    pub fn from_cents(cents: i128) -> Self {
        let sign = if cents < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        let magnitude = cents.unsigned_abs();

        Amount {
            sign,
            integer_digits: (magnitude / 100).to_string(),
            fractional_digits: format!("{:02}", magnitude % 100),
        }
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Integer-part digits, most significant first, no sign or separators.
    pub fn integer_digits(&self) -> &str {
        &self.integer_digits
    }

    /// Fractional-part digits, always exactly two.
    pub fn fractional_digits(&self) -> &str {
        &self.fractional_digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents_zero() {
        let amount = Amount::from_cents(0);
        assert_eq!(amount.integer_digits(), "0");
        assert_eq!(amount.fractional_digits(), "00");
        assert!(!amount.is_negative());
    }

    #[test]
    fn test_from_cents_splits_dollars_and_cents() {
        let amount = Amount::from_cents(12_345);
        assert_eq!(amount.integer_digits(), "123");
        assert_eq!(amount.fractional_digits(), "45");
    }

    #[test]
    fn test_from_cents_pads_fractional_part() {
        let amount = Amount::from_cents(5_700);
        assert_eq!(amount.integer_digits(), "57");
        assert_eq!(amount.fractional_digits(), "00");

        let amount = Amount::from_cents(5_701);
        assert_eq!(amount.fractional_digits(), "01");
    }

    #[test]
    fn test_from_cents_negative() {
        let amount = Amount::from_cents(-12_345);
        assert!(amount.is_negative());
        assert_eq!(amount.integer_digits(), "123");
        assert_eq!(amount.fractional_digits(), "45");
    }

    #[test]
    fn test_from_cents_negative_zero_is_positive() {
        let amount = Amount::from_cents(-0);
        assert!(!amount.is_negative());
    }

    #[test]
    fn test_from_cents_sub_dollar() {
        let amount = Amount::from_cents(7);
        assert_eq!(amount.integer_digits(), "0");
        assert_eq!(amount.fractional_digits(), "07");
    }

    #[test]
    fn test_new_trims_leading_zeros() {
        let amount = Amount::new(Sign::Positive, "007", "50").unwrap();
        assert_eq!(amount.integer_digits(), "7");
    }

    #[test]
    fn test_new_keeps_single_zero() {
        let amount = Amount::new(Sign::Positive, "000", "00").unwrap();
        assert_eq!(amount.integer_digits(), "0");
    }

    #[test]
    fn test_new_negative_zero_normalizes_to_positive() {
        let amount = Amount::new(Sign::Negative, "0", "00").unwrap();
        assert!(!amount.is_negative());
    }

    #[test]
    fn test_new_negative_cents_only_keeps_sign() {
        let amount = Amount::new(Sign::Negative, "0", "01").unwrap();
        assert!(amount.is_negative());
    }

    #[test]
    fn test_new_rejects_non_digit_integer_part() {
        let result = Amount::new(Sign::Positive, "12a", "00");
        assert!(matches!(result, Err(ConversionError::MalformedAmount(_))));
    }

    #[test]
    fn test_new_rejects_empty_integer_part() {
        let result = Amount::new(Sign::Positive, "", "00");
        assert!(matches!(result, Err(ConversionError::MalformedAmount(_))));
    }

    #[test]
    fn test_new_rejects_wrong_fractional_length() {
        assert!(Amount::new(Sign::Positive, "1", "0").is_err());
        assert!(Amount::new(Sign::Positive, "1", "000").is_err());
    }

    #[test]
    fn test_new_rejects_non_digit_fractional_part() {
        assert!(Amount::new(Sign::Positive, "1", "x0").is_err());
    }
}
