//! Per-request view context.
//!
//! Replaces the ambient "template globals" injection point: handlers
//! build the context explicitly from the request's authenticated user
//! and hand it to rendering, so nothing reaches into global state.

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::middleware::CurrentUser;
use crate::domain::{UserResponse, UserRole};
use crate::errors::{AppError, AppResult};
use crate::services::AccountService;

/// Session identity carried by the token
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
    pub role: UserRole,
}

/// Everything a view needs to know about the requesting user.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ViewContext {
    /// Session identity, None for anonymous visitors
    pub current_user: Option<SessionUser>,
    pub current_user_id: Option<Uuid>,
    pub current_user_type: Option<UserRole>,
    /// Profile entity backing the session user, when one still exists
    pub current_user_entity: Option<UserResponse>,
    pub is_authenticated: bool,
    pub is_patient: bool,
    pub is_doctor: bool,
    pub is_pharmacist: bool,
}

impl ViewContext {
    /// Context for an unauthenticated request.
    pub fn anonymous() -> Self {
        Self {
            current_user: None,
            current_user_id: None,
            current_user_type: None,
            current_user_entity: None,
            is_authenticated: false,
            is_patient: false,
            is_doctor: false,
            is_pharmacist: false,
        }
    }

    /// Build the context for the given request user.
    ///
    /// The profile entity may be gone (account removed after the token
    /// was issued); the context then stays authenticated with a null
    /// entity rather than failing the request.
    pub async fn build(
        user: Option<&CurrentUser>,
        accounts: &dyn AccountService,
    ) -> AppResult<Self> {
        let Some(user) = user else {
            return Ok(Self::anonymous());
        };

        let entity = match accounts.get_profile(user.id).await {
            Ok(profile) => Some(UserResponse::from(profile)),
            Err(AppError::NotFound) => None,
            Err(e) => return Err(e),
        };

        Ok(Self {
            current_user: Some(SessionUser {
                id: user.id,
                email: user.email.clone(),
                role: user.role,
            }),
            current_user_id: Some(user.id),
            current_user_type: Some(user.role),
            current_user_entity: entity,
            is_authenticated: true,
            is_patient: user.role.is_patient(),
            is_doctor: user.role.is_doctor(),
            is_pharmacist: user.role.is_pharmacist(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Password, User};
    use crate::infra::MockUserRepository;
    use crate::services::AccountManager;
    use chrono::Utc;
    use std::sync::Arc;

    fn current_user(role: UserRole) -> CurrentUser {
        CurrentUser {
            id: Uuid::new_v4(),
            email: "doctor@example.com".to_string(),
            role,
        }
    }

    #[tokio::test]
    async fn test_anonymous_context() {
        let repo = MockUserRepository::new();
        let accounts = AccountManager::new(Arc::new(repo));

        let context = ViewContext::build(None, &accounts).await.unwrap();

        assert!(!context.is_authenticated);
        assert!(context.current_user.is_none());
        assert!(context.current_user_entity.is_none());
    }

    #[tokio::test]
    async fn test_authenticated_context_sets_role_flags() {
        let user = current_user(UserRole::Doctor);
        let user_id = user.id;

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(move |id| {
            Ok(Some(User {
                id,
                email: "doctor@example.com".to_string(),
                password_hash: Password::new("Docteur123!").unwrap().into_string(),
                name: "Dr Jean Martin".to_string(),
                role: UserRole::Doctor,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            }))
        });
        let accounts = AccountManager::new(Arc::new(repo));

        let context = ViewContext::build(Some(&user), &accounts).await.unwrap();

        assert!(context.is_authenticated);
        assert_eq!(context.current_user_id, Some(user_id));
        assert_eq!(context.current_user_type, Some(UserRole::Doctor));
        assert!(context.is_doctor);
        assert!(!context.is_patient);
        assert!(!context.is_pharmacist);
        assert!(context.current_user_entity.is_some());
    }

    #[tokio::test]
    async fn test_missing_entity_keeps_context_authenticated() {
        let user = current_user(UserRole::Patient);

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        let accounts = AccountManager::new(Arc::new(repo));

        let context = ViewContext::build(Some(&user), &accounts).await.unwrap();

        assert!(context.is_authenticated);
        assert!(context.current_user_entity.is_none());
    }
}
