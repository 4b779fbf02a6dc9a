//! HTTP request handlers.

pub mod account_handler;
pub mod auth_handler;
pub mod context_handler;
pub mod medication_handler;

pub use account_handler::account_routes;
pub use auth_handler::auth_routes;
pub use context_handler::context_routes;
pub use medication_handler::medication_routes;
