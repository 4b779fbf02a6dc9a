//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::context::{SessionUser, ViewContext};
use crate::api::handlers::{account_handler, auth_handler, context_handler, medication_handler};
use crate::domain::{Medication, UserResponse, UserRole};
use crate::services::TokenResponse;

/// OpenAPI documentation for the Pharma Portal API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pharma Portal API",
        version = "0.1.0",
        description = "Pharmacy portal API with medication and password validation",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
        contact(name = "API Support", email = "support@example.com")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server"),
        (url = "https://api.example.com", description = "Production server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::register,
        auth_handler::login,
        // Account endpoints
        account_handler::change_password,
        // Medication endpoints
        medication_handler::check,
        medication_handler::search,
        // Context endpoint
        context_handler::me,
    ),
    components(
        schemas(
            // Domain types
            UserRole,
            UserResponse,
            Medication,
            // Auth types
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            TokenResponse,
            // Account types
            account_handler::ChangePasswordRequest,
            // Medication types
            medication_handler::CheckMedicationRequest,
            medication_handler::ValidationOutcome,
            // Context types
            SessionUser,
            ViewContext,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "User registration and login"),
        (name = "Account", description = "Authenticated account operations"),
        (name = "Medications", description = "Medication validation and search"),
        (name = "Context", description = "Per-request view context")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /auth/login"))
                        .build(),
                ),
            );
        }
    }
}
