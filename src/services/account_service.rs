//! Account service - Profile access and password changes.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Account service trait for dependency injection.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Load the profile backing the current user
    async fn get_profile(&self, id: Uuid) -> AppResult<User>;

    /// Change a user's password after verifying the current one
    async fn change_password(
        &self,
        id: Uuid,
        current_password: String,
        new_password: String,
    ) -> AppResult<()>;
}

/// Concrete implementation of AccountService.
pub struct AccountManager {
    users: Arc<dyn UserRepository>,
}

impl AccountManager {
    /// Create new account service instance
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl AccountService for AccountManager {
    async fn get_profile(&self, id: Uuid) -> AppResult<User> {
        self.users.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    async fn change_password(
        &self,
        id: Uuid,
        current_password: String,
        new_password: String,
    ) -> AppResult<()> {
        let user = self.users.find_by_id(id).await?.ok_or(AppError::NotFound)?;

        let stored = Password::from_hash(user.password_hash);
        if !stored.verify(&current_password) {
            return Err(AppError::InvalidCredentials);
        }

        let password_hash = Password::new(&new_password)?.into_string();
        self.users.update_password(id, password_hash).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserRole;
    use crate::infra::MockUserRepository;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn stored_user(id: Uuid, password: &str) -> User {
        User {
            id,
            email: "patient@example.com".to_string(),
            password_hash: Password::new(password).unwrap().into_string(),
            name: "Marie Dupont".to_string(),
            role: UserRole::Patient,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_get_profile_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = AccountManager::new(Arc::new(repo));
        let result = service.get_profile(Uuid::new_v4()).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn test_change_password_success() {
        let user_id = Uuid::new_v4();

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(user_id))
            .returning(move |id| Ok(Some(stored_user(id, "Ancien123!"))));
        repo.expect_update_password()
            .with(eq(user_id), mockall::predicate::always())
            .returning(|_, _| Ok(()));

        let service = AccountManager::new(Arc::new(repo));
        let result = service
            .change_password(user_id, "Ancien123!".to_string(), "Nouveau123!".to_string())
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_change_password_rejects_wrong_current() {
        let user_id = Uuid::new_v4();

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(move |id| Ok(Some(stored_user(id, "Ancien123!"))));
        repo.expect_update_password().never();

        let service = AccountManager::new(Arc::new(repo));
        let result = service
            .change_password(user_id, "Mauvais123!".to_string(), "Nouveau123!".to_string())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
    }
}
