//! Bookmark business logic service.
//!
//! All operations take the acting user's id as their first argument and pass
//! it down to the repository, which folds ownership into the lookup itself.
//! A bookmark that belongs to someone else is reported as not found.

use crate::database::models::{Bookmark, CreateBookmark, EditBookmark};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::bookmark_repository::BookmarkRepository;
use sqlx::SqlitePool;
use tracing::info;
use validator::Validate;

/// Service layer for bookmark operations.
pub struct BookmarkService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
}

impl<'a> BookmarkService<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_bookmarks(&self, user_id: i64) -> ServiceResult<Vec<Bookmark>> {
        let repo = BookmarkRepository::new(self.pool);
        Ok(repo.get_bookmarks_by_user(user_id).await?)
    }

    pub async fn get_bookmark_by_id(
        &self,
        user_id: i64,
        bookmark_id: i64,
    ) -> ServiceResult<Bookmark> {
        let repo = BookmarkRepository::new(self.pool);
        repo.get_bookmark_for_user(user_id, bookmark_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Bookmark", bookmark_id))
    }

    pub async fn create_bookmark(
        &self,
        user_id: i64,
        bookmark: CreateBookmark,
    ) -> ServiceResult<Bookmark> {
        if let Err(validation_errors) = bookmark.validate() {
            return Err(ServiceError::from_validation(&validation_errors));
        }

        let repo = BookmarkRepository::new(self.pool);
        let bookmark = repo.create_bookmark(user_id, bookmark).await?;

        info!("User {} created bookmark {}", user_id, bookmark.id);
        Ok(bookmark)
    }

    pub async fn edit_bookmark_by_id(
        &self,
        user_id: i64,
        bookmark_id: i64,
        changes: EditBookmark,
    ) -> ServiceResult<Bookmark> {
        if let Err(validation_errors) = changes.validate() {
            return Err(ServiceError::from_validation(&validation_errors));
        }

        let repo = BookmarkRepository::new(self.pool);
        repo.update_bookmark_for_user(user_id, bookmark_id, changes)
            .await?
            .ok_or_else(|| ServiceError::not_found("Bookmark", bookmark_id))
    }

    pub async fn delete_bookmark_by_id(&self, user_id: i64, bookmark_id: i64) -> ServiceResult<()> {
        let repo = BookmarkRepository::new(self.pool);
        if !repo.delete_bookmark_for_user(user_id, bookmark_id).await? {
            return Err(ServiceError::not_found("Bookmark", bookmark_id));
        }

        info!("User {} deleted bookmark {}", user_id, bookmark_id);
        Ok(())
    }
}
