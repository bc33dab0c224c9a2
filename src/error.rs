use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::fmt;

use crate::config::constants::{FRACTIONAL_DIGITS, MAX_SUPPORTED_DIGITS};

/// Errors produced while parsing or converting an amount.
///
/// `MagnitudeOverflow` is the engine's only failure; the remaining
/// variants belong to the caller-side text parsing and never come out of
/// the engine itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    // Engine errors
    MagnitudeOverflow { digits: usize },

    // Input parsing errors
    EmptyInput,
    MalformedAmount(String),
    UnsupportedPrecision { places: usize },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::MagnitudeOverflow { digits } => write!(
                f,
                "Amount has {} integer digits; only amounts with up to {} are supported",
                digits, MAX_SUPPORTED_DIGITS
            ),
            ConversionError::EmptyInput => write!(f, "Amount cannot be empty"),
            ConversionError::MalformedAmount(input) => {
                write!(f, "Not a valid decimal amount: {:?}", input)
            }
            ConversionError::UnsupportedPrecision { places } => write!(
                f,
                "Amounts are limited to {} decimal places, got {}",
                FRACTIONAL_DIGITS, places
            ),
        }
    }
}

impl std::error::Error for ConversionError {}

// Axum integration
impl IntoResponse for ConversionError {
    fn into_response(self) -> Response {
        // Every variant is an input problem; there is nothing internal to hide.
        let status = StatusCode::BAD_REQUEST;

        (
            status,
            axum::Json(serde_json::json!({
                "status": "error",
                "error": self.to_string()
            })),
        )
            .into_response()
    }
}

pub type Result<T> = std::result::Result<T, ConversionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_overflow_message_names_both_counts() {
        let err = ConversionError::MagnitudeOverflow { digits: 28 };
        let msg = err.to_string();
        assert!(msg.contains("28"));
        assert!(msg.contains(&MAX_SUPPORTED_DIGITS.to_string()));
    }

    #[test]
    fn test_malformed_amount_message_echoes_input() {
        let err = ConversionError::MalformedAmount("12.3.4".to_string());
        assert!(err.to_string().contains("12.3.4"));
    }

    #[test]
    fn test_unsupported_precision_message() {
        let err = ConversionError::UnsupportedPrecision { places: 3 };
        let msg = err.to_string();
        assert!(msg.contains("3"));
        assert!(msg.contains("2 decimal places"));
    }

    #[test]
    fn test_empty_input_message() {
        assert_eq!(
            ConversionError::EmptyInput.to_string(),
            "Amount cannot be empty"
        );
    }
}
