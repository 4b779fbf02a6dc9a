//! API layer - HTTP handlers and middleware
//!
//! This module contains all HTTP-related concerns:
//! - Request handlers
//! - Middleware (authentication, logging)
//! - Custom extractors
//! - Per-request view context
//! - Route definitions

pub mod context;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use context::ViewContext;
pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
