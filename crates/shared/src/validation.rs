//! Common validation utilities.

use validator::ValidationError;

/// Maximum length of an artist or campaign identifier.
pub const MAX_IDENTIFIER_LENGTH: usize = 64;

lazy_static::lazy_static! {
    /// Identifiers are opaque keys such as `artist1`, `sales2` or `camp-3`.
    pub static ref IDENTIFIER_REGEX: regex::Regex =
        regex::Regex::new(r"^[A-Za-z0-9_-]{1,64}$").unwrap();

    /// Day windows are short positive integers (`7`, `30`, `90`).
    pub static ref DAYS_REGEX: regex::Regex = regex::Regex::new(r"^[0-9]{1,3}$").unwrap();
}

/// Validates that an artist or campaign identifier is well-formed.
///
/// An empty value selects the default and is accepted.
pub fn validate_identifier(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || IDENTIFIER_REGEX.is_match(value) {
        Ok(())
    } else {
        let mut err = ValidationError::new("identifier_format");
        err.message = Some(
            "Identifier must be 1-64 characters of letters, digits, '-' or '_'".into(),
        );
        Err(err)
    }
}

/// Validates that a day window is a short decimal number. Empty selects the default.
pub fn validate_days(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || DAYS_REGEX.is_match(value) {
        Ok(())
    } else {
        let mut err = ValidationError::new("days_format");
        err.message = Some("Days must be a number between 0 and 999".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("artist1").is_ok());
        assert!(validate_identifier("all").is_ok());
        assert!(validate_identifier("sales_2").is_ok());
        assert!(validate_identifier("camp-3").is_ok());
        assert!(validate_identifier("").is_ok());
        assert!(validate_identifier("artist 1").is_err());
        assert!(validate_identifier("../etc").is_err());
    }

    #[test]
    fn test_validate_identifier_max_length() {
        let ok = "a".repeat(MAX_IDENTIFIER_LENGTH);
        let too_long = "a".repeat(MAX_IDENTIFIER_LENGTH + 1);
        assert!(validate_identifier(&ok).is_ok());
        assert!(validate_identifier(&too_long).is_err());
    }

    #[test]
    fn test_validate_identifier_error_message() {
        let err = validate_identifier("bad id").unwrap_err();
        assert_eq!(err.code, "identifier_format");
        assert!(err.message.unwrap().to_string().contains("1-64 characters"));
    }

    #[test]
    fn test_validate_days() {
        assert!(validate_days("7").is_ok());
        assert!(validate_days("30").is_ok());
        assert!(validate_days("365").is_ok());
        assert!(validate_days("1000").is_err());
        assert!(validate_days("-7").is_err());
        assert!(validate_days("week").is_err());
        assert!(validate_days("").is_ok());
    }
}
