//! Validation rule integration tests.
//!
//! These tests use handwritten lookup stubs so no network or database
//! connection is required.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use pharma_portal::domain::validation::{
    medication_exists, password_strength, MEDICATION_NOT_FOUND_CODE,
};
use pharma_portal::domain::{Medication, MedicationLookup};
use pharma_portal::errors::{AppError, AppResult};
use pharma_portal::i18n::{localize, Locale};

// =============================================================================
// Lookup stubs
// =============================================================================

/// Lookup stub returning a fixed result set and counting invocations
struct StubLookup {
    results: Vec<Medication>,
    calls: AtomicUsize,
}

impl StubLookup {
    fn returning(results: Vec<Medication>) -> Self {
        Self {
            results,
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MedicationLookup for StubLookup {
    async fn search(&self, _name: &str) -> AppResult<Vec<Medication>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.results.clone())
    }
}

/// Lookup stub that always fails with a service fault
struct FaultyLookup;

#[async_trait]
impl MedicationLookup for FaultyLookup {
    async fn search(&self, _name: &str) -> AppResult<Vec<Medication>> {
        Err(AppError::internal("drug database unreachable"))
    }
}

fn aspirin() -> Medication {
    Medication {
        cis: "62170486".to_string(),
        name: "ASPIRINE UPSA 325 mg, gélule".to_string(),
        form: Some("gélule".to_string()),
    }
}

// =============================================================================
// Password strength
// =============================================================================

#[test]
fn password_shorter_than_eight_characters_is_invalid() {
    for candidate in ["A1!b", "Abc1!", "Abcde1!"] {
        assert!(password_strength(candidate).is_err(), "{}", candidate);
    }
}

#[test]
fn password_with_all_required_classes_is_valid() {
    assert!(password_strength("Abcdef1!").is_ok());
    assert!(password_strength("Ordonnance123!").is_ok());
}

#[test]
fn password_missing_a_class_is_invalid() {
    // no uppercase, no special
    assert!(password_strength("abcdefg1").is_err());
}

#[test]
fn empty_password_is_not_this_rules_concern() {
    assert!(password_strength("").is_ok());
}

#[test]
fn password_check_is_idempotent() {
    for candidate in ["Abcdef1!", "abcdefg1", ""] {
        let first = password_strength(candidate).is_ok();
        let second = password_strength(candidate).is_ok();
        assert_eq!(first, second, "{}", candidate);
    }
}

// =============================================================================
// Medication name
// =============================================================================

#[tokio::test]
async fn known_medication_is_valid() {
    let lookup = StubLookup::returning(vec![aspirin()]);

    let outcome = medication_exists("Aspirin", &lookup).await.unwrap();
    assert!(outcome.is_ok());
    assert_eq!(lookup.call_count(), 1);
}

#[tokio::test]
async fn unknown_medication_is_invalid_and_message_echoes_input() {
    let lookup = StubLookup::returning(Vec::new());

    let outcome = medication_exists("Xyzzyplex", &lookup).await.unwrap();
    let violation = outcome.unwrap_err();
    assert_eq!(violation.code, MEDICATION_NOT_FOUND_CODE);

    let english = localize(Locale::En, &violation);
    assert!(english.contains("Xyzzyplex"), "{}", english);

    let french = localize(Locale::Fr, &violation);
    assert!(french.contains("Xyzzyplex"), "{}", french);
    assert!(french.contains("n'existe pas"), "{}", french);
}

#[tokio::test]
async fn lookup_fault_propagates_instead_of_becoming_an_outcome() {
    let result = medication_exists("Aspirin", &FaultyLookup).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn empty_input_is_valid_and_lookup_is_not_invoked() {
    let lookup = StubLookup::returning(Vec::new());

    let outcome = medication_exists("", &lookup).await.unwrap();
    assert!(outcome.is_ok());
    assert_eq!(lookup.call_count(), 0);

    // Valid even when the lookup would fault
    let outcome = medication_exists("", &FaultyLookup).await.unwrap();
    assert!(outcome.is_ok());
}
