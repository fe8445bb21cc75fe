//! Database repository for bookmark operations.
//!
//! Every query that addresses a single bookmark filters on both the bookmark
//! id and the owner id, so a row owned by someone else is indistinguishable
//! from a missing one.

use crate::database::models::{Bookmark, CreateBookmark, EditBookmark};
use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;

const BOOKMARK_COLUMNS: &str = "id, user_id, title, link, description, created_at, updated_at";

/// Repository for bookmark database operations.
pub struct BookmarkRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> BookmarkRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates a bookmark owned by `user_id`.
    pub async fn create_bookmark(
        &self,
        user_id: i64,
        bookmark: CreateBookmark,
    ) -> Result<Bookmark> {
        let now = Utc::now();
        let bookmark = sqlx::query_as::<_, Bookmark>(&format!(
            "INSERT INTO bookmarks (user_id, title, link, description, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING {BOOKMARK_COLUMNS}"
        ))
        .bind(user_id)
        .bind(bookmark.title)
        .bind(bookmark.link)
        .bind(bookmark.description)
        .bind(now)
        .bind(now)
        .fetch_one(self.pool)
        .await?;

        Ok(bookmark)
    }

    /// Lists every bookmark owned by `user_id`.
    pub async fn get_bookmarks_by_user(&self, user_id: i64) -> Result<Vec<Bookmark>> {
        let bookmarks = sqlx::query_as::<_, Bookmark>(&format!(
            "SELECT {BOOKMARK_COLUMNS} FROM bookmarks WHERE user_id = ? ORDER BY id"
        ))
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(bookmarks)
    }

    /// Retrieves a bookmark by id, scoped to its owner.
    ///
    /// # Returns
    /// `Some(Bookmark)` if it exists and belongs to `user_id`, `None` otherwise
    pub async fn get_bookmark_for_user(
        &self,
        user_id: i64,
        bookmark_id: i64,
    ) -> Result<Option<Bookmark>> {
        let bookmark = sqlx::query_as::<_, Bookmark>(&format!(
            "SELECT {BOOKMARK_COLUMNS} FROM bookmarks WHERE id = ? AND user_id = ?"
        ))
        .bind(bookmark_id)
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(bookmark)
    }

    /// Applies a partial update to an owned bookmark.
    ///
    /// # Returns
    /// The updated Bookmark, or `None` if it is absent or owned by someone else
    pub async fn update_bookmark_for_user(
        &self,
        user_id: i64,
        bookmark_id: i64,
        changes: EditBookmark,
    ) -> Result<Option<Bookmark>> {
        let bookmark = sqlx::query_as::<_, Bookmark>(&format!(
            "UPDATE bookmarks SET
                title = COALESCE(?, title),
                link = COALESCE(?, link),
                description = COALESCE(?, description),
                updated_at = ?
             WHERE id = ? AND user_id = ?
             RETURNING {BOOKMARK_COLUMNS}"
        ))
        .bind(changes.title)
        .bind(changes.link)
        .bind(changes.description)
        .bind(Utc::now())
        .bind(bookmark_id)
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(bookmark)
    }

    /// Deletes an owned bookmark.
    ///
    /// # Returns
    /// `true` if a row was removed
    pub async fn delete_bookmark_for_user(&self, user_id: i64, bookmark_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE id = ? AND user_id = ?")
            .bind(bookmark_id)
            .bind(user_id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
