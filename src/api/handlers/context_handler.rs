//! View-context handler.

use axum::{extract::State, response::Json, routing::get, Extension, Router};

use crate::api::middleware::OptionalUser;
use crate::api::{AppState, ViewContext};
use crate::errors::AppResult;

/// Create context routes
pub fn context_routes() -> Router<AppState> {
    Router::new().route("/me", get(me))
}

/// Get the view context for the requesting user
#[utoipa::path(
    get,
    path = "/me",
    tag = "Context",
    responses(
        (status = 200, description = "Per-request view context", body = ViewContext)
    ),
    security((), ("bearer_auth" = []))
)]
pub async fn me(
    State(state): State<AppState>,
    Extension(OptionalUser(user)): Extension<OptionalUser>,
) -> AppResult<Json<ViewContext>> {
    let context = ViewContext::build(user.as_ref(), state.accounts.as_ref()).await?;
    Ok(Json(context))
}
