//! Database repository for user management operations.
//!
//! Provides create, lookup, listing and partial-update operations for users.

use crate::database::models::{CreateUser, EditUser, User};
use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;

const USER_COLUMNS: &str =
    "id, email, password_hash, first_name, last_name, nickname, created_at, updated_at";

/// Repository for user database operations.
///
/// Handles all persistence operations for the User entity.
pub struct UserRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates a new user in the database.
    ///
    /// # Arguments
    /// * `user` - CreateUser containing the email and password hash
    ///
    /// # Returns
    /// The newly created User. Fails with a unique violation when the email
    /// is already registered.
    pub async fn create_user(&self, user: CreateUser) -> Result<User> {
        let now = Utc::now();
        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (email, password_hash, created_at, updated_at)
             VALUES (?, ?, ?, ?)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(user.email)
        .bind(user.password_hash)
        .bind(now)
        .bind(now)
        .fetch_one(self.pool)
        .await?;

        Ok(user)
    }

    /// Retrieves a user by their unique identifier.
    ///
    /// # Returns
    /// `Some(User)` if found, `None` otherwise
    pub async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Retrieves a user by their email.
    ///
    /// # Returns
    /// `Some(User)` if found, `None` otherwise
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = ?"
        ))
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Lists users, optionally restricted to an exact nickname.
    pub async fn get_users(&self, nickname: Option<&str>) -> Result<Vec<User>> {
        let users = match nickname {
            Some(nickname) => {
                sqlx::query_as::<_, User>(&format!(
                    "SELECT {USER_COLUMNS} FROM users WHERE nickname = ? ORDER BY id"
                ))
                .bind(nickname)
                .fetch_all(self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, User>(&format!(
                    "SELECT {USER_COLUMNS} FROM users ORDER BY id"
                ))
                .fetch_all(self.pool)
                .await?
            }
        };

        Ok(users)
    }

    /// Applies a partial update to a user.
    ///
    /// # Returns
    /// The updated User, or `None` if no user has this id
    pub async fn update_user(&self, id: i64, changes: EditUser) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET
                email = COALESCE(?, email),
                first_name = COALESCE(?, first_name),
                last_name = COALESCE(?, last_name),
                nickname = COALESCE(?, nickname),
                updated_at = ?
             WHERE id = ?
             RETURNING {USER_COLUMNS}"
        ))
        .bind(changes.email)
        .bind(changes.first_name)
        .bind(changes.last_name)
        .bind(changes.nickname)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Counts users registered with this email.
    #[cfg(test)]
    pub async fn count_by_email(&self, email: &str) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{is_unique_violation, test_support::memory_database};

    fn new_user(email: &str) -> CreateUser {
        CreateUser {
            email: email.to_string(),
            password_hash: "hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_lookup() {
        let db = memory_database().await;
        let repo = UserRepository::new(db.pool());

        let created = repo.create_user(new_user("a@test.com")).await.unwrap();
        assert_eq!(created.email, "a@test.com");
        assert!(created.first_name.is_none());

        let by_id = repo.get_user_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(by_id.email, created.email);

        let by_email = repo.get_user_by_email("a@test.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, created.id);

        assert!(repo.get_user_by_email("missing@test.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_unique_violation() {
        let db = memory_database().await;
        let repo = UserRepository::new(db.pool());

        repo.create_user(new_user("dup@test.com")).await.unwrap();
        let err = repo.create_user(new_user("dup@test.com")).await.unwrap_err();

        assert!(is_unique_violation(&err));
        assert_eq!(repo.count_by_email("dup@test.com").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_partial_update_keeps_other_fields() {
        let db = memory_database().await;
        let repo = UserRepository::new(db.pool());
        let user = repo.create_user(new_user("p@test.com")).await.unwrap();

        repo.update_user(
            user.id,
            EditUser {
                last_name: Some("Smith".to_string()),
                nickname: Some("smithy".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let updated = repo
            .update_user(
                user.id,
                EditUser {
                    first_name: Some("ohoh".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.first_name.as_deref(), Some("ohoh"));
        assert_eq!(updated.last_name.as_deref(), Some("Smith"));
        assert_eq!(updated.nickname.as_deref(), Some("smithy"));
        assert_eq!(updated.email, "p@test.com");

        assert!(repo.update_user(9999, EditUser::default()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_nickname_filter() {
        let db = memory_database().await;
        let repo = UserRepository::new(db.pool());

        let a = repo.create_user(new_user("a@test.com")).await.unwrap();
        repo.create_user(new_user("b@test.com")).await.unwrap();
        repo.update_user(
            a.id,
            EditUser {
                nickname: Some("neo".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(repo.get_users(None).await.unwrap().len(), 2);

        let filtered = repo.get_users(Some("neo")).await.unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, a.id);

        assert!(repo.get_users(Some("trinity")).await.unwrap().is_empty());
    }
}
