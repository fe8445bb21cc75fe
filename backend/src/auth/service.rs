//! Core business logic for the authentication system.

use crate::auth::models::AuthRequest;
use crate::database::is_unique_violation;
use crate::database::models::CreateUser;
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::user_repository::UserRepository;
use crate::utils::jwt::JwtUtils;
use crate::utils::password::{hash_password_blocking, verify_password_blocking};
use sqlx::SqlitePool;
use tracing::{error, info, warn};
use validator::Validate;

const CREDENTIALS_TAKEN: &str = "Credentials taken";
const CREDENTIALS_INCORRECT: &str = "Credentials incorrect";

/// Authentication service for handling signup, signin and token issuance
pub struct AuthService<'a> {
    pool: &'a SqlitePool,
    jwt_utils: &'a JwtUtils,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService instance
    pub fn new(pool: &'a SqlitePool, jwt_utils: &'a JwtUtils) -> Self {
        AuthService { pool, jwt_utils }
    }

    /// Register a new user.
    ///
    /// # Errors
    /// - `Forbidden("Credentials taken")` when the email is already registered
    /// - `InternalError` for any other persistence failure
    pub async fn signup(&self, request: AuthRequest) -> ServiceResult<()> {
        if let Err(validation_errors) = request.validate() {
            return Err(ServiceError::from_validation(&validation_errors));
        }

        let password_hash = hash_password_blocking(request.password).await?;

        let repo = UserRepository::new(self.pool);
        let user = repo
            .create_user(CreateUser {
                email: request.email,
                password_hash,
            })
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    ServiceError::forbidden(CREDENTIALS_TAKEN)
                } else {
                    error!("Failed to create user: {}", e);
                    ServiceError::internal_error("An internal server error occurred")
                }
            })?;

        info!("User {} signed up", user.id);
        Ok(())
    }

    /// Check credentials and mint a session token.
    ///
    /// Unknown email and wrong password fail identically, and both run one
    /// password verification.
    pub async fn signin(&self, request: AuthRequest) -> ServiceResult<String> {
        if let Err(validation_errors) = request.validate() {
            return Err(ServiceError::from_validation(&validation_errors));
        }

        let repo = UserRepository::new(self.pool);
        let user = repo.get_user_by_email(&request.email).await?;

        let stored_hash = user.as_ref().map(|u| u.password_hash.clone());
        let verified = verify_password_blocking(request.password, stored_hash).await?;

        let user = match user {
            Some(user) if verified => user,
            _ => {
                warn!("Rejected signin attempt");
                return Err(ServiceError::forbidden(CREDENTIALS_INCORRECT));
            }
        };

        let token = self.jwt_utils.generate_token(user.id, &user.email)?;

        info!("User {} signed in", user.id);
        Ok(token)
    }
}
