use std::sync::Arc;

use uuid::Uuid;

use crate::dto::auth_dto::{AuthResponse, LoginPayload, RegisterPayload};
use crate::error::{Error, Result};
use crate::models::user::{NewUser, User};
use crate::repositories::UserRepository;
use crate::utils::crypto::{hash_password, validate_password_strength, verify_password};
use crate::utils::token::TokenIssuer;

const INVALID_CREDENTIALS: &str = "invalid email or password";

#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    tokens: TokenIssuer,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, tokens: TokenIssuer) -> Self {
        Self { users, tokens }
    }

    pub async fn register(&self, payload: RegisterPayload) -> Result<AuthResponse> {
        validate_password_strength(&payload.password)?;

        let email = payload.email.trim().to_lowercase();
        if self.users.email_exists(&email).await? {
            return Err(Error::Conflict("email already registered".to_string()));
        }

        let user = self
            .users
            .create(NewUser {
                email,
                password_hash: hash_password(&payload.password)?,
                role: payload.role,
            })
            .await?;
        tracing::info!(user_id = %user.id, role = %user.role, "user registered");

        let token = self.tokens.issue(user.id, &user.email, user.role)?;
        Ok(AuthResponse { token, user })
    }

    pub async fn login(&self, payload: LoginPayload) -> Result<AuthResponse> {
        let email = payload.email.trim().to_lowercase();
        let Some(user) = self.users.get_by_email(&email).await? else {
            return Err(Error::Unauthorized(INVALID_CREDENTIALS.to_string()));
        };

        if !verify_password(&payload.password, &user.password_hash)? {
            return Err(Error::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        let token = self.tokens.issue(user.id, &user.email, user.role)?;
        Ok(AuthResponse { token, user })
    }

    pub async fn current_user(&self, user_id: Uuid) -> Result<User> {
        self.users
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| Error::not_found("user"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::Role;
    use crate::repositories::MockUserRepository;
    use crate::services::test_support;

    fn service(users: MockUserRepository) -> AuthService {
        AuthService::new(Arc::new(users), TokenIssuer::new("test-secret", 1))
    }

    #[tokio::test]
    async fn register_rejects_weak_password_before_touching_storage() {
        let users = MockUserRepository::new();
        let err = service(users)
            .register(RegisterPayload {
                email: "a@b.test".into(),
                password: "alllowercase1".into(),
                role: Role::JobSeeker,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn register_conflicts_on_existing_email() {
        let mut users = MockUserRepository::new();
        users.expect_email_exists().returning(|_| Ok(true));
        let err = service(users)
            .register(RegisterPayload {
                email: "Taken@B.test".into(),
                password: "Secret123".into(),
                role: Role::Employer,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
    }

    #[tokio::test]
    async fn register_stores_hash_and_returns_token() {
        let mut users = MockUserRepository::new();
        users
            .expect_email_exists()
            .withf(|email| email == "new@b.test")
            .returning(|_| Ok(false));
        users.expect_create().returning(|new_user| {
            assert_ne!(new_user.password_hash, "Secret123");
            let mut user = test_support::user(new_user.role);
            user.email = new_user.email;
            user.password_hash = new_user.password_hash;
            Ok(user)
        });

        let response = service(users)
            .register(RegisterPayload {
                email: " New@B.test ".into(),
                password: "Secret123".into(),
                role: Role::JobSeeker,
            })
            .await
            .unwrap();
        assert_eq!(response.user.email, "new@b.test");
        assert!(!response.token.is_empty());
    }

    #[tokio::test]
    async fn login_with_wrong_password_is_unauthorized() {
        let mut users = MockUserRepository::new();
        users.expect_get_by_email().returning(|_| {
            let mut user = test_support::user(Role::JobSeeker);
            user.password_hash = hash_password("Secret123").unwrap();
            Ok(Some(user))
        });
        let err = service(users)
            .login(LoginPayload {
                email: "someone@example.com".into(),
                password: "Wrong1234".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Unauthorized(ref msg) if msg == INVALID_CREDENTIALS));
    }

    #[tokio::test]
    async fn login_with_unknown_email_is_unauthorized() {
        let mut users = MockUserRepository::new();
        users.expect_get_by_email().returning(|_| Ok(None));
        let err = service(users)
            .login(LoginPayload {
                email: "ghost@example.com".into(),
                password: "Secret123".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Unauthorized(_)));
    }
}
