//! View context integration tests.
//!
//! These tests use a handwritten account-service stub so no database
//! connection is required.

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use pharma_portal::api::middleware::CurrentUser;
use pharma_portal::api::ViewContext;
use pharma_portal::domain::{User, UserRole};
use pharma_portal::errors::{AppError, AppResult};
use pharma_portal::services::AccountService;

/// Account service stub backed by an optional profile
struct StubAccountService {
    profile: Option<User>,
}

#[async_trait]
impl AccountService for StubAccountService {
    async fn get_profile(&self, _id: Uuid) -> AppResult<User> {
        self.profile.clone().ok_or(AppError::NotFound)
    }

    async fn change_password(
        &self,
        _id: Uuid,
        _current_password: String,
        _new_password: String,
    ) -> AppResult<()> {
        Err(AppError::internal("not supported in stub"))
    }
}

fn profile(id: Uuid, role: UserRole) -> User {
    User {
        id,
        email: format!("{}@example.com", role),
        password_hash: "hashed".to_string(),
        name: "Test User".to_string(),
        role,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn session_user(id: Uuid, role: UserRole) -> CurrentUser {
    CurrentUser {
        id,
        email: format!("{}@example.com", role),
        role,
    }
}

#[tokio::test]
async fn anonymous_request_gets_empty_context() {
    let accounts = StubAccountService { profile: None };

    let context = ViewContext::build(None, &accounts).await.unwrap();

    assert!(!context.is_authenticated);
    assert!(context.current_user.is_none());
    assert!(context.current_user_id.is_none());
    assert!(context.current_user_type.is_none());
    assert!(context.current_user_entity.is_none());
    assert!(!context.is_patient && !context.is_doctor && !context.is_pharmacist);
}

#[tokio::test]
async fn each_role_category_sets_exactly_its_flag() {
    for role in [UserRole::Patient, UserRole::Doctor, UserRole::Pharmacist] {
        let id = Uuid::new_v4();
        let accounts = StubAccountService {
            profile: Some(profile(id, role)),
        };

        let user = session_user(id, role);
        let context = ViewContext::build(Some(&user), &accounts).await.unwrap();

        assert!(context.is_authenticated);
        assert_eq!(context.current_user_id, Some(id));
        assert_eq!(context.current_user_type, Some(role));
        assert_eq!(context.is_patient, role == UserRole::Patient);
        assert_eq!(context.is_doctor, role == UserRole::Doctor);
        assert_eq!(context.is_pharmacist, role == UserRole::Pharmacist);
    }
}

#[tokio::test]
async fn entity_is_loaded_from_the_account_service() {
    let id = Uuid::new_v4();
    let accounts = StubAccountService {
        profile: Some(profile(id, UserRole::Pharmacist)),
    };

    let user = session_user(id, UserRole::Pharmacist);
    let context = ViewContext::build(Some(&user), &accounts).await.unwrap();

    let entity = context.current_user_entity.expect("entity should be loaded");
    assert_eq!(entity.id, id);
    assert_eq!(entity.role, "pharmacist");
}

#[tokio::test]
async fn missing_entity_does_not_fail_the_request() {
    let id = Uuid::new_v4();
    let accounts = StubAccountService { profile: None };

    let user = session_user(id, UserRole::Patient);
    let context = ViewContext::build(Some(&user), &accounts).await.unwrap();

    assert!(context.is_authenticated);
    assert!(context.current_user_entity.is_none());
}
