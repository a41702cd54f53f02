//! Input handling helpers for the parameter form.
//!
//! The engine itself never rejects anything; the form is the only place a
//! blocking validation message exists, and only for the device model.

/// The device model is the one required field. Returns the trimmed value
/// or the blocking message shown under the input.
pub fn validate_device_model(input: &str) -> Result<String, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err("System requires hardware model signature.".to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

/// Parse the DPI field. Anything unparsable collapses to 0, which the
/// engine treats as "unset" and substitutes with the standard density.
pub fn parse_dpi(input: &str) -> i32 {
    input.trim().parse::<i32>().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_model_must_not_be_blank() {
        assert!(validate_device_model("").is_err());
        assert!(validate_device_model("   ").is_err());
        assert_eq!(
            validate_device_model(" ROG PHONE 8 PRO ").unwrap(),
            "ROG PHONE 8 PRO"
        );
    }

    #[test]
    fn dpi_parsing_defaults_to_unset() {
        assert_eq!(parse_dpi("440"), 440);
        assert_eq!(parse_dpi(" 880 "), 880);
        assert_eq!(parse_dpi(""), 0);
        assert_eq!(parse_dpi("abc"), 0);
        // Negative input survives parsing; the engine defaults it away.
        assert_eq!(parse_dpi("-5"), -5);
    }
}
