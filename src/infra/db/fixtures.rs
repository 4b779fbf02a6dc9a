//! Test-database bootstrap.
//!
//! Resets the schema and seeds one account per role category with known
//! credentials, for integration environments and manual testing.

use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use sea_orm_migration::MigratorTrait;
use uuid::Uuid;

use super::migrations::Migrator;
use crate::config::{ROLE_ADMIN, ROLE_DOCTOR, ROLE_PATIENT, ROLE_PHARMACIST};
use crate::domain::Password;
use crate::errors::AppResult;
use crate::infra::repositories::entities::user::ActiveModel;

/// A seeded account with a known plain-text password.
pub struct FixtureAccount {
    pub email: &'static str,
    pub password: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

/// One account per role category.
pub const FIXTURE_ACCOUNTS: &[FixtureAccount] = &[
    FixtureAccount {
        email: "patient@example.com",
        password: "Patient123!",
        name: "Marie Dupont",
        role: ROLE_PATIENT,
    },
    FixtureAccount {
        email: "doctor@example.com",
        password: "Docteur123!",
        name: "Dr Jean Martin",
        role: ROLE_DOCTOR,
    },
    FixtureAccount {
        email: "pharmacist@example.com",
        password: "Pharmacien123!",
        name: "Claire Bernard",
        role: ROLE_PHARMACIST,
    },
    FixtureAccount {
        email: "admin@example.com",
        password: "Administre123!",
        name: "Admin",
        role: ROLE_ADMIN,
    },
];

/// Reset the schema and seed the fixture accounts.
///
/// Destructive: drops and recreates all tables before seeding.
pub async fn load(db: &DatabaseConnection) -> AppResult<()> {
    Migrator::fresh(db).await?;

    for account in FIXTURE_ACCOUNTS {
        let now = chrono::Utc::now();
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(account.email.to_string()),
            password_hash: Set(Password::new(account.password)?.into_string()),
            name: Set(account.name.to_string()),
            role: Set(account.role.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };
        active.insert(db).await?;

        tracing::info!(email = account.email, role = account.role, "Seeded fixture account");
    }

    Ok(())
}
