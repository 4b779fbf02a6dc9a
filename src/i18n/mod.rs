//! Localization of validation messages.
//!
//! Catalogs map canonical English message templates to localized
//! strings; `{{ name }}` placeholders are substituted at presentation
//! time from the violation's parameters. Catalogs are data only, the
//! logic here is resolution and substitution.

mod fr;

use std::borrow::Cow;
use std::collections::HashMap;

use serde_json::Value;
use validator::ValidationError;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    /// Pick a locale from an `Accept-Language` header value.
    ///
    /// Only the first language tag is considered; quality values are
    /// ignored.
    pub fn from_accept_language(header: Option<&str>) -> Self {
        match header {
            Some(value) if value.trim_start().to_ascii_lowercase().starts_with("fr") => Locale::Fr,
            _ => Locale::En,
        }
    }
}

/// Render a violation as a localized, parameter-substituted message.
///
/// The violation's canonical English message is the catalog key; keys
/// missing from the catalog fall back to the English template itself.
pub fn localize(locale: Locale, violation: &ValidationError) -> String {
    let key = violation
        .message
        .as_deref()
        .unwrap_or_else(|| violation.code.as_ref());
    let template = lookup(locale, key).unwrap_or(key);
    substitute(template, &violation.params)
}

/// Resolve a message key against a locale catalog.
pub fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    match locale {
        Locale::Fr => fr::CATALOG.get(key).copied(),
        Locale::En => None,
    }
}

fn substitute(template: &str, params: &HashMap<Cow<'static, str>, Value>) -> String {
    let mut message = template.to_string();
    for (name, value) in params {
        let placeholder = format!("{{{{ {} }}}}", name);
        let rendered = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        message = message.replace(&placeholder, &rendered);
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::{
        MEDICATION_NOT_FOUND_MESSAGE, PASSWORD_STRENGTH_MESSAGE,
    };

    fn violation_with_param(message: &'static str, name: &'static str, value: &str) -> ValidationError {
        let mut err = ValidationError::new("test");
        err.message = Some(message.into());
        err.add_param(name.into(), &value);
        err
    }

    #[test]
    fn test_locale_from_accept_language() {
        assert_eq!(
            Locale::from_accept_language(Some("fr-FR,fr;q=0.9,en;q=0.8")),
            Locale::Fr
        );
        assert_eq!(Locale::from_accept_language(Some("en-US,en;q=0.9")), Locale::En);
        assert_eq!(Locale::from_accept_language(None), Locale::En);
    }

    #[test]
    fn test_french_catalog_covers_validation_messages() {
        assert!(lookup(Locale::Fr, PASSWORD_STRENGTH_MESSAGE).is_some());
        assert!(lookup(Locale::Fr, MEDICATION_NOT_FOUND_MESSAGE).is_some());
    }

    #[test]
    fn test_substitution_echoes_submitted_value() {
        let violation =
            violation_with_param(MEDICATION_NOT_FOUND_MESSAGE, "medicament", "Xyzzyplex");

        let french = localize(Locale::Fr, &violation);
        assert!(french.contains("Xyzzyplex"), "{}", french);
        assert!(french.contains("n'existe pas"), "{}", french);

        let english = localize(Locale::En, &violation);
        assert!(english.contains("Xyzzyplex"), "{}", english);
    }

    #[test]
    fn test_unknown_key_falls_back_to_english_template() {
        let violation = violation_with_param("Totally unknown {{ thing }}.", "thing", "x");
        assert_eq!(localize(Locale::Fr, &violation), "Totally unknown x.");
    }

    #[test]
    fn test_numeric_parameters_render_unquoted() {
        let mut err = ValidationError::new("test");
        err.message = Some("At least {{ limit }} characters.".into());
        err.add_param("limit".into(), &8);
        assert_eq!(localize(Locale::En, &err), "At least 8 characters.");
    }
}
