//! Medication-name rule backed by the drug-database lookup.

use validator::ValidationError;

use crate::domain::medication::MedicationLookup;
use crate::errors::AppResult;

/// Violation code attached to the field
pub const MEDICATION_NOT_FOUND_CODE: &str = "medication_not_found";

/// Canonical message; `{{ medicament }}` is replaced with the submitted
/// value so localized messages can echo the user's input
pub const MEDICATION_NOT_FOUND_MESSAGE: &str =
    "The medication \"{{ medicament }}\" does not exist in the medication database.";

/// Check that a submitted medication name exists in the drug database.
///
/// Empty input is valid and the lookup service is not invoked. The
/// outer `Result` is reserved for lookup faults (service unreachable),
/// which must not be conflated with a "not found" outcome: an unknown
/// name is reported as `Ok(Err(violation))`. Results are never cached;
/// every call performs a fresh lookup.
pub async fn medication_exists(
    candidate: &str,
    lookup: &dyn MedicationLookup,
) -> AppResult<Result<(), ValidationError>> {
    if candidate.is_empty() {
        return Ok(Ok(()));
    }

    let matches = lookup.search(candidate).await?;
    if matches.is_empty() {
        Ok(Err(violation(candidate)))
    } else {
        Ok(Ok(()))
    }
}

fn violation(candidate: &str) -> ValidationError {
    let mut err = ValidationError::new(MEDICATION_NOT_FOUND_CODE);
    err.message = Some(MEDICATION_NOT_FOUND_MESSAGE.into());
    err.add_param("medicament".into(), &candidate);
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::medication::{Medication, MockMedicationLookup};
    use crate::errors::AppError;

    fn aspirin() -> Medication {
        Medication {
            cis: "62170486".to_string(),
            name: "ASPIRINE UPSA 325 mg, gélule".to_string(),
            form: Some("gélule".to_string()),
        }
    }

    #[tokio::test]
    async fn test_known_medication_is_valid() {
        let mut lookup = MockMedicationLookup::new();
        lookup
            .expect_search()
            .returning(|_| Ok(vec![aspirin()]));

        let outcome = medication_exists("Aspirin", &lookup).await.unwrap();
        assert!(outcome.is_ok());
    }

    #[tokio::test]
    async fn test_unknown_medication_is_invalid() {
        let mut lookup = MockMedicationLookup::new();
        lookup.expect_search().returning(|_| Ok(Vec::new()));

        let outcome = medication_exists("Xyzzyplex", &lookup).await.unwrap();
        let violation = outcome.unwrap_err();

        assert_eq!(violation.code, MEDICATION_NOT_FOUND_CODE);
        assert_eq!(
            violation.params.get("medicament").and_then(|v| v.as_str()),
            Some("Xyzzyplex")
        );
    }

    #[tokio::test]
    async fn test_lookup_fault_propagates() {
        let mut lookup = MockMedicationLookup::new();
        lookup
            .expect_search()
            .returning(|_| Err(AppError::internal("drug database unreachable")));

        let result = medication_exists("Aspirin", &lookup).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_empty_input_skips_lookup() {
        let mut lookup = MockMedicationLookup::new();
        lookup.expect_search().never();

        let outcome = medication_exists("", &lookup).await.unwrap();
        assert!(outcome.is_ok());
    }

    #[tokio::test]
    async fn test_fresh_lookup_per_call() {
        let mut lookup = MockMedicationLookup::new();
        lookup
            .expect_search()
            .times(2)
            .returning(|_| Ok(vec![aspirin()]));

        medication_exists("Aspirin", &lookup).await.unwrap().unwrap();
        medication_exists("Aspirin", &lookup).await.unwrap().unwrap();
    }
}
