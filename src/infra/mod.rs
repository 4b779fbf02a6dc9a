//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection, migrations and repositories
//! - The drug-database lookup client
//! - Test-database bootstrap fixtures

pub mod db;
pub mod lookup;
pub mod repositories;

pub use db::{Database, Migrator};
pub use lookup::DrugDatabaseClient;
pub use repositories::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
