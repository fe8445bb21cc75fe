//! Handler functions for bookmark API endpoints.
//!
//! The owner id always comes from the session user, never from the request.

use crate::api::common::{ApiResult, ValidatedJson, ValidatedPath, service_error_to_http};
use crate::database::models::{Bookmark, CreateBookmark, EditBookmark, User};
use crate::services::bookmark_service::BookmarkService;
use axum::{
    extract::{Extension, Json},
    http::StatusCode,
};
use sqlx::SqlitePool;

#[axum::debug_handler]
pub async fn get_bookmarks(
    Extension(pool): Extension<SqlitePool>,
    Extension(user): Extension<User>,
) -> ApiResult<Json<Vec<Bookmark>>> {
    let service = BookmarkService::new(&pool);
    let bookmarks = service
        .get_bookmarks(user.id)
        .await
        .map_err(service_error_to_http)?;

    Ok(Json(bookmarks))
}

#[axum::debug_handler]
pub async fn get_bookmark_by_id(
    Extension(pool): Extension<SqlitePool>,
    Extension(user): Extension<User>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> ApiResult<Json<Bookmark>> {
    let service = BookmarkService::new(&pool);
    let bookmark = service
        .get_bookmark_by_id(user.id, id)
        .await
        .map_err(service_error_to_http)?;

    Ok(Json(bookmark))
}

#[axum::debug_handler]
pub async fn create_bookmark(
    Extension(pool): Extension<SqlitePool>,
    Extension(user): Extension<User>,
    ValidatedJson(payload): ValidatedJson<CreateBookmark>,
) -> ApiResult<(StatusCode, Json<Bookmark>)> {
    let service = BookmarkService::new(&pool);

    match service.create_bookmark(user.id, payload).await {
        Ok(bookmark) => Ok((StatusCode::CREATED, Json(bookmark))),
        Err(error) => Err(service_error_to_http(error)),
    }
}

#[axum::debug_handler]
pub async fn edit_bookmark_by_id(
    Extension(pool): Extension<SqlitePool>,
    Extension(user): Extension<User>,
    ValidatedPath(id): ValidatedPath<i64>,
    ValidatedJson(payload): ValidatedJson<EditBookmark>,
) -> ApiResult<Json<Bookmark>> {
    let service = BookmarkService::new(&pool);
    let bookmark = service
        .edit_bookmark_by_id(user.id, id, payload)
        .await
        .map_err(service_error_to_http)?;

    Ok(Json(bookmark))
}

#[axum::debug_handler]
pub async fn delete_bookmark_by_id(
    Extension(pool): Extension<SqlitePool>,
    Extension(user): Extension<User>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> ApiResult<StatusCode> {
    let service = BookmarkService::new(&pool);
    service
        .delete_bookmark_by_id(user.id, id)
        .await
        .map_err(service_error_to_http)?;

    Ok(StatusCode::NO_CONTENT)
}
