//! Medication domain types and the drug-database lookup port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// A record of the public drug database.
///
/// Field names mirror the upstream API so records pass through the
/// portal unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Medication {
    /// CIS code (Code Identifiant de Spécialité)
    #[schema(example = "62170486")]
    pub cis: String,
    /// Marketed denomination
    #[serde(rename = "denomination")]
    #[schema(example = "ASPIRINE UPSA 325 mg, gélule")]
    pub name: String,
    /// Pharmaceutical form, when the database provides one
    #[serde(
        rename = "formePharmaceutique",
        skip_serializing_if = "Option::is_none",
        default
    )]
    #[schema(example = "gélule")]
    pub form: Option<String>,
}

/// Lookup port over the external drug database.
///
/// One operation, synchronous from the caller's point of view; a
/// transport or service failure surfaces as an `AppError`, never as an
/// empty result set.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MedicationLookup: Send + Sync {
    /// Search medications by (partial) name.
    async fn search(&self, name: &str) -> AppResult<Vec<Medication>>;
}
