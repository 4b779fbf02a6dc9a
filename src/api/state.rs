//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::domain::MedicationLookup;
use crate::errors::AppResult;
use crate::infra::{Database, DrugDatabaseClient, UserRepository, UserStore};
use crate::services::{AccountManager, AccountService, AuthService, Authenticator};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Account service
    pub accounts: Arc<dyn AccountService>,
    /// Drug-database lookup
    pub lookup: Arc<dyn MedicationLookup>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from database connection and config.
    pub fn from_config(database: Arc<Database>, config: Config) -> AppResult<Self> {
        let users: Arc<dyn UserRepository> = Arc::new(UserStore::new(database.get_connection()));
        let lookup = Arc::new(DrugDatabaseClient::from_config(&config)?);

        Ok(Self {
            auth_service: Arc::new(Authenticator::new(users.clone(), config)),
            accounts: Arc::new(AccountManager::new(users)),
            lookup,
            database,
        })
    }

    /// Create new application state with manually injected services.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        accounts: Arc<dyn AccountService>,
        lookup: Arc<dyn MedicationLookup>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            auth_service,
            accounts,
            lookup,
            database,
        }
    }
}
