//! Pharma Portal - Pharmacy portal API
//!
//! An Axum REST API for a pharmacy portal: account registration and
//! login with password-strength checking, medication-name validation
//! against the public drug database, localized validation messages,
//! and an explicit per-request view context.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and validation rules
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (database, drug-database client)
//! - **i18n**: Localization of validation messages
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Reset the database and seed fixture accounts
//! cargo run -- fixtures
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod i18n;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{AppState, ViewContext};
pub use config::Config;
pub use domain::{Medication, MedicationLookup, Password, User, UserRole};
pub use errors::{AppError, AppResult};
