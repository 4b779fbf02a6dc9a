//! Account handlers (authenticated).

use axum::{extract::State, response::Json, routing::put, Extension, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::errors::AppResult;
use crate::types::MessageResponse;

/// Password change request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ChangePasswordRequest {
    /// Current password, verified before any change
    #[schema(example = "Ancien123!")]
    pub current_password: String,
    /// New password (checked against the combined strength rule)
    #[validate(custom(function = crate::domain::validation::password_strength))]
    #[schema(example = "Nouveau123!", min_length = 8)]
    pub new_password: String,
}

/// Create account routes
pub fn account_routes() -> Router<AppState> {
    Router::new().route("/password", put(change_password))
}

/// Change the current user's password
#[utoipa::path(
    put,
    path = "/account/password",
    tag = "Account",
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password updated"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Wrong current password or missing token")
    ),
    security(("bearer_auth" = []))
)]
pub async fn change_password(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<ChangePasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .accounts
        .change_password(
            current_user.id,
            payload.current_password,
            payload.new_password,
        )
        .await?;

    Ok(Json(MessageResponse::new("Password updated")))
}
