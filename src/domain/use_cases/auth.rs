use validator::Validate;

use crate::auth::password::{hash_password, verify_password};
use crate::entities::identity::{IdentityInsert, IdentitySummary, LoginRequest};
use crate::entities::token::AuthSession;
use crate::errors::{AppError, AuthError};
use crate::interfaces::repositories::identity::IdentityRepository;
use crate::repositories::token::TokenServiceRepository;

pub struct AuthHandler<R, T>
where
    R: IdentityRepository,
    T: TokenServiceRepository,
{
    pub identity_repo: R,
    pub token_service: T,
}

impl<R, T> AuthHandler<R, T>
where
    R: IdentityRepository,
    T: TokenServiceRepository,
{
    pub fn new(identity_repo: R, token_service: T) -> Self {
        AuthHandler {
            identity_repo,
            token_service,
        }
    }

    /// Validates credentials and issues a session token. Unknown usernames
    /// and wrong passwords fail identically.
    pub async fn login(&self, request: LoginRequest) -> Result<AuthSession, AuthError> {
        request.validate()?;

        let identity = self
            .identity_repo
            .get_identity_by_username(&request.username)
            .await
            .map_err(|_e| AuthError::InvalidCredentials)?
            .ok_or(AuthError::InvalidCredentials)?;

        let is_password_valid = verify_password(&request.password, &identity.password_hash)
            .map_err(|_| AuthError::InvalidCredentials)?;
        if !is_password_valid {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.token_service.create_jwt(&identity).map_err(|e| {
            tracing::warn!("Failed to create JWT: {}", e);
            AuthError::TokenCreation
        })?;

        tracing::info!("Admin logged in successfully");
        Ok(AuthSession {
            token,
            user: IdentitySummary::from(&identity),
        })
    }

    /// Seeds the configured admin identity once, when the table is empty.
    /// Runs at startup only, so the count check needs no locking.
    pub async fn bootstrap_default_admin(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(), AppError> {
        if self.identity_repo.count_identities().await? > 0 {
            return Ok(());
        }

        let password_hash = hash_password(password)?;
        let insert = IdentityInsert {
            username: username.to_string(),
            password_hash,
        };
        self.identity_repo.create_identity(&insert).await?;

        tracing::info!(username, "Created initial admin identity");
        Ok(())
    }
}
