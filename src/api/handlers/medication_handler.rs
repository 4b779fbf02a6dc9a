//! Medication handlers.
//!
//! The check endpoint reports a validation outcome, not an error: an
//! unknown medication is a 200 with `valid: false` and a localized
//! message. Only a drug-database fault fails the request (502).

use axum::{
    extract::{Query, State},
    http::{header::ACCEPT_LANGUAGE, HeaderMap},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::api::AppState;
use crate::domain::validation::medication_exists;
use crate::domain::Medication;
use crate::errors::AppResult;
use crate::i18n::{self, Locale};

/// Medication-name validation request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckMedicationRequest {
    /// Submitted medication name (empty passes; presence is a separate rule)
    #[serde(default)]
    #[schema(example = "Doliprane")]
    pub name: String,
}

/// Validation outcome for a single field.
///
/// `message` is only attached when the value is invalid.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationOutcome {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Medication search query
#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchParams {
    /// Name fragment forwarded to the drug database
    pub query: String,
}

/// Create medication routes
pub fn medication_routes() -> Router<AppState> {
    Router::new()
        .route("/check", post(check))
        .route("/search", get(search))
}

/// Validate a medication name against the drug database
#[utoipa::path(
    post,
    path = "/medications/check",
    tag = "Medications",
    request_body = CheckMedicationRequest,
    responses(
        (status = 200, description = "Validation outcome", body = ValidationOutcome),
        (status = 502, description = "Drug database unreachable")
    )
)]
pub async fn check(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CheckMedicationRequest>,
) -> AppResult<Json<ValidationOutcome>> {
    let locale = Locale::from_accept_language(
        headers.get(ACCEPT_LANGUAGE).and_then(|h| h.to_str().ok()),
    );

    let outcome = medication_exists(&payload.name, state.lookup.as_ref()).await?;

    let response = match outcome {
        Ok(()) => ValidationOutcome {
            valid: true,
            message: None,
        },
        Err(violation) => ValidationOutcome {
            valid: false,
            message: Some(i18n::localize(locale, &violation)),
        },
    };

    Ok(Json(response))
}

/// Search the drug database by name
#[utoipa::path(
    get,
    path = "/medications/search",
    tag = "Medications",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching medications", body = [Medication]),
        (status = 502, description = "Drug database unreachable")
    )
)]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Medication>>> {
    let medications = state.lookup.search(&params.query).await?;
    Ok(Json(medications))
}
