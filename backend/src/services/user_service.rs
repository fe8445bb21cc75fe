//! User business logic service.
//!
//! Handles profile reads and edits. The acting user's id always comes from a
//! verified session, so there is no path to edit somebody else's profile.

use crate::database::is_unique_violation;
use crate::database::models::{EditUser, User, UserDto};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::user_repository::UserRepository;
use sqlx::SqlitePool;
use tracing::{error, info};
use validator::Validate;

pub struct UserService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Lists users, optionally filtered by exact nickname.
    ///
    /// Password hashes are stripped from every returned record.
    pub async fn get_users(&self, nickname: Option<&str>) -> ServiceResult<Vec<UserDto>> {
        let repo = UserRepository::new(self.pool);
        let users = repo.get_users(nickname).await?;
        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Applies a partial profile update to the given user.
    ///
    /// # Errors
    /// Returns `ServiceError` for:
    /// - Validation failures
    /// - An email already registered to another user (`Forbidden`)
    /// - A user that no longer exists (`NotFound`)
    pub async fn edit_user(&self, user_id: i64, changes: EditUser) -> ServiceResult<UserDto> {
        if let Err(validation_errors) = changes.validate() {
            return Err(ServiceError::from_validation(&validation_errors));
        }

        let repo = UserRepository::new(self.pool);
        let user = match repo.update_user(user_id, changes).await {
            Ok(user) => user.ok_or_else(|| ServiceError::not_found("User", user_id))?,
            Err(e) if is_unique_violation(&e) => {
                return Err(ServiceError::forbidden("Credentials taken"));
            }
            Err(e) => {
                error!("Failed to update user {}: {}", user_id, e);
                return Err(ServiceError::Database { source: e });
            }
        };

        info!("User {} updated their profile", user.id);
        Ok(UserDto::from(user))
    }

    /// Retrieves a user by ID with existence verification.
    ///
    /// # Errors
    /// Returns `ServiceError::NotFound` if user doesn't exist
    pub async fn get_user_required(&self, id: i64) -> ServiceResult<User> {
        let repo = UserRepository::new(self.pool);
        let user = repo
            .get_user_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id))?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::CreateUser;
    use crate::database::test_support::memory_database;

    async fn seed(pool: &SqlitePool, email: &str) -> User {
        UserRepository::new(pool)
            .create_user(CreateUser {
                email: email.to_string(),
                password_hash: "$argon2id$secret".to_string(),
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_edit_user_partial() {
        let db = memory_database().await;
        let user = seed(db.pool(), "test@email.com").await;
        let service = UserService::new(db.pool());

        service
            .edit_user(
                user.id,
                EditUser {
                    last_name: Some("Doe".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let dto = service
            .edit_user(
                user.id,
                EditUser {
                    first_name: Some("ohoh".to_string()),
                    email: Some("test@testtest.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(dto.first_name.as_deref(), Some("ohoh"));
        assert_eq!(dto.email, "test@testtest.com");
        assert_eq!(dto.last_name.as_deref(), Some("Doe"));
        assert!(dto.nickname.is_none());
    }

    #[tokio::test]
    async fn test_edit_user_rejects_taken_email() {
        let db = memory_database().await;
        seed(db.pool(), "taken@email.com").await;
        let user = seed(db.pool(), "me@email.com").await;
        let service = UserService::new(db.pool());

        let result = service
            .edit_user(
                user.id,
                EditUser {
                    email: Some("taken@email.com".to_string()),
                    ..Default::default()
                },
            )
            .await;

        match result {
            Err(ServiceError::Forbidden { message }) => assert_eq!(message, "Credentials taken"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_edit_user_validates_email() {
        let db = memory_database().await;
        let user = seed(db.pool(), "me@email.com").await;
        let service = UserService::new(db.pool());

        let result = service
            .edit_user(
                user.id,
                EditUser {
                    email: Some("not-an-email".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(ServiceError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_get_users_never_exposes_hash() {
        let db = memory_database().await;
        seed(db.pool(), "a@email.com").await;
        seed(db.pool(), "b@email.com").await;
        let service = UserService::new(db.pool());

        let users = service.get_users(None).await.unwrap();
        assert_eq!(users.len(), 2);

        let json = serde_json::to_value(&users).unwrap();
        for user in json.as_array().unwrap() {
            let object = user.as_object().unwrap();
            assert!(!object.contains_key("passwordHash"));
            assert!(!object.contains_key("password_hash"));
            assert!(!object.contains_key("hash"));
        }
    }

    #[tokio::test]
    async fn test_get_user_required_missing() {
        let db = memory_database().await;
        let service = UserService::new(db.pool());
        assert!(matches!(
            service.get_user_required(404).await,
            Err(ServiceError::NotFound { .. })
        ));
    }
}
