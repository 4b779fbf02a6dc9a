//! Password strength rule.
//!
//! Empty input passes: presence is a separate rule handled by the
//! request layer. The rule reports a single combined violation rather
//! than one per broken requirement.

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::config::MIN_PASSWORD_LENGTH;

/// Violation code attached to the field
pub const PASSWORD_STRENGTH_CODE: &str = "password_strength";

/// Canonical message, translated at presentation time
pub const PASSWORD_STRENGTH_MESSAGE: &str = "The password must be at least 8 characters long and \
     contain an uppercase letter, a lowercase letter, a digit and a special character.";

static HAS_UPPERCASE: Lazy<Regex> = Lazy::new(|| Regex::new("[A-Z]").expect("valid regex"));
static HAS_LOWERCASE: Lazy<Regex> = Lazy::new(|| Regex::new("[a-z]").expect("valid regex"));
static HAS_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new("[0-9]").expect("valid regex"));
static HAS_SPECIAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[!@#$%^&*(),.?":{}|<>]"#).expect("valid regex"));

/// Check a candidate password against the combined strength rule.
///
/// Valid iff the candidate is empty, or has at least 8 characters with
/// at least one uppercase letter, one lowercase letter, one digit and
/// one special character. Pure and deterministic.
pub fn password_strength(candidate: &str) -> Result<(), ValidationError> {
    if candidate.is_empty() {
        return Ok(());
    }

    let strong = candidate.chars().count() >= MIN_PASSWORD_LENGTH as usize
        && HAS_UPPERCASE.is_match(candidate)
        && HAS_LOWERCASE.is_match(candidate)
        && HAS_DIGIT.is_match(candidate)
        && HAS_SPECIAL.is_match(candidate);

    if strong {
        Ok(())
    } else {
        let mut err = ValidationError::new(PASSWORD_STRENGTH_CODE);
        err.message = Some(PASSWORD_STRENGTH_MESSAGE.into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        assert!(password_strength("Abcdef1!").is_ok());
    }

    #[test]
    fn test_empty_is_not_this_rules_concern() {
        assert!(password_strength("").is_ok());
    }

    #[test]
    fn test_short_passwords_rejected() {
        for candidate in ["a", "Ab1!", "Abcde1!"] {
            assert!(password_strength(candidate).is_err(), "{}", candidate);
        }
    }

    #[test]
    fn test_missing_uppercase_and_special() {
        assert!(password_strength("abcdefg1").is_err());
    }

    #[test]
    fn test_missing_digit() {
        assert!(password_strength("Abcdefg!").is_err());
    }

    #[test]
    fn test_missing_lowercase() {
        assert!(password_strength("ABCDEF1!").is_err());
    }

    #[test]
    fn test_each_special_character_counts() {
        for c in "!@#$%^&*(),.?\":{}|<>".chars() {
            let candidate = format!("Abcdef1{}", c);
            assert!(password_strength(&candidate).is_ok(), "{}", candidate);
        }
    }

    #[test]
    fn test_deterministic() {
        let first = password_strength("abcdefg1").is_ok();
        let second = password_strength("abcdefg1").is_ok();
        assert_eq!(first, second);
    }

    #[test]
    fn test_violation_carries_single_combined_message() {
        let err = password_strength("weak").unwrap_err();
        assert_eq!(err.code, PASSWORD_STRENGTH_CODE);
        assert_eq!(err.message.as_deref(), Some(PASSWORD_STRENGTH_MESSAGE));
    }
}
