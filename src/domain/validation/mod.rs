//! Custom validation rules.
//!
//! Each rule is a plain function returning `Result<(), ValidationError>`
//! so it plugs into the `validator` derive as well as direct calls. A
//! violation carries a stable code, a canonical English message template
//! and named substitution parameters; localization happens at
//! presentation time (`crate::i18n`).

mod medication_name;
mod password_strength;

use validator::ValidationError;

use crate::config::REGISTRABLE_ROLES;

pub use medication_name::{
    medication_exists, MEDICATION_NOT_FOUND_CODE, MEDICATION_NOT_FOUND_MESSAGE,
};
pub use password_strength::{
    password_strength, PASSWORD_STRENGTH_CODE, PASSWORD_STRENGTH_MESSAGE,
};

/// Canonical message for the registrable-role rule.
pub const INVALID_ROLE_MESSAGE: &str = "This is not a valid account type.";

/// Accept only roles that may be chosen at registration.
pub fn registrable_role(candidate: &str) -> Result<(), ValidationError> {
    if REGISTRABLE_ROLES.contains(&candidate) {
        Ok(())
    } else {
        let mut err = ValidationError::new("invalid_role");
        err.message = Some(INVALID_ROLE_MESSAGE.into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registrable_roles_accepted() {
        for role in ["patient", "doctor", "pharmacist"] {
            assert!(registrable_role(role).is_ok());
        }
    }

    #[test]
    fn test_admin_not_registrable() {
        assert!(registrable_role("admin").is_err());
    }
}
