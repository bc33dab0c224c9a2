use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    pub amount: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_request_deserialization() {
        let json = r#"{"amount": "123.45"}"#;

        let req: ConvertRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.amount, "123.45");
    }

    #[test]
    fn test_convert_request_missing_amount_fails() {
        let json = r#"{}"#;

        let result: Result<ConvertRequest, _> = serde_json::from_str(json);

        assert!(result.is_err());
    }

    #[test]
    fn test_convert_request_extra_fields_ignored() {
        let json = r#"{
            "amount": "7",
            "unknown_field": "ignored",
            "another_field": 123
        }"#;

        let req: ConvertRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.amount, "7");
    }

    #[test]
    fn test_convert_request_amount_is_free_text() {
        // Validation happens in text_input, not during deserialization.
        let json = r#"{"amount": "not a number"}"#;

        let req: ConvertRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.amount, "not a number");
    }

    #[test]
    fn test_convert_request_unicode_amount() {
        let json = r#"{"amount": "−42.00"}"#;

        let req: ConvertRequest = serde_json::from_str(json).unwrap();

        assert!(req.amount.contains('\u{2212}'));
    }
}
