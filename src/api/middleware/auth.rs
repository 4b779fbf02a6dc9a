//! JWT authentication middleware.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::domain::UserRole;
use crate::errors::AppError;

/// Authenticated user extracted from JWT token
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: Uuid,
    pub email: String,
    pub role: UserRole,
}

/// Authenticated user when the route also renders for anonymous
/// visitors. `None` means no (valid) token was presented.
#[derive(Clone, Debug)]
pub struct OptionalUser(pub Option<CurrentUser>);

fn bearer_user(state: &AppState, request: &Request) -> Result<CurrentUser, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = auth_header
        .strip_prefix(BEARER_TOKEN_PREFIX)
        .ok_or(AppError::Unauthorized)?;

    let claims = state.auth_service.verify_token(token)?;

    Ok(CurrentUser {
        id: claims.sub,
        email: claims.email,
        role: claims.role.as_str().into(),
    })
}

/// JWT authentication middleware.
///
/// Extracts and validates the JWT token from the Authorization header,
/// then injects the CurrentUser into the request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let current_user = bearer_user(&state, &request)?;
    request.extensions_mut().insert(current_user);

    Ok(next.run(request).await)
}

/// Optional-auth variant: injects `OptionalUser` and never rejects.
///
/// Routes that build a view context for anonymous and authenticated
/// visitors alike use this instead of `auth_middleware`.
pub async fn optional_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let user = bearer_user(&state, &request).ok();
    request.extensions_mut().insert(OptionalUser(user));

    next.run(request).await
}
