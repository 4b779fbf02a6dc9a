//! Authentication handlers.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::ROLE_PATIENT;
use crate::domain::{UserResponse, UserRole};
use crate::errors::AppResult;
use crate::services::TokenResponse;
use crate::types::Created;

/// User registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// User email address
    #[validate(email(message = "This value is not a valid email address."))]
    #[schema(example = "marie.dupont@example.com")]
    pub email: String,
    /// User password (checked against the combined strength rule)
    #[validate(custom(function = crate::domain::validation::password_strength))]
    #[schema(example = "Ordonnance123!", min_length = 8)]
    pub password: String,
    /// User display name
    #[validate(length(min = 1, message = "This value should not be blank."))]
    #[schema(example = "Marie Dupont")]
    pub name: String,
    /// Account type: patient, doctor or pharmacist
    #[validate(custom(function = crate::domain::validation::registrable_role))]
    #[serde(default = "default_account_type")]
    #[schema(example = "patient")]
    pub account_type: String,
}

fn default_account_type() -> String {
    ROLE_PATIENT.to_string()
}

/// User login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// User email address
    #[validate(email(message = "This value is not a valid email address."))]
    #[schema(example = "marie.dupont@example.com")]
    pub email: String,
    /// User password
    #[schema(example = "Ordonnance123!")]
    pub password: String,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "User already exists")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<Created<UserResponse>> {
    let user = state
        .auth_service
        .register(
            payload.email,
            payload.password,
            payload.name,
            UserRole::from(payload.account_type.as_str()),
        )
        .await?;

    Ok(Created(UserResponse::from(user)))
}

/// Login and get JWT token
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let token = state
        .auth_service
        .login(payload.email, payload.password)
        .await?;

    Ok(Json(token))
}
