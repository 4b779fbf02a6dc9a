//! Fixtures command - Test-database bootstrap.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::db::fixtures;
use crate::infra::Database;

/// Execute the fixtures command
pub async fn execute(config: Config) -> AppResult<()> {
    tracing::warn!("Resetting database and seeding fixture accounts...");

    let db = Database::connect_without_migrations(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    fixtures::load(db.connection()).await?;

    tracing::info!("Fixtures loaded successfully");
    Ok(())
}
