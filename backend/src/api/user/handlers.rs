//! Handler functions for user profile API endpoints.
//!
//! These functions read the user loaded by the session middleware, interact
//! with `UserService`, and return hash-free `UserDto` values.

use crate::api::common::{ApiResult, ValidatedJson, service_error_to_http};
use crate::database::models::{EditUser, User, UserDto, UserFilter};
use crate::services::user_service::UserService;
use axum::extract::{Extension, Json, Query};
use sqlx::SqlitePool;

/// Returns the authenticated user.
#[axum::debug_handler]
pub async fn get_me(Extension(user): Extension<User>) -> Json<UserDto> {
    Json(UserDto::from(user))
}

/// Lists users, optionally filtered by `?nickname=`.
#[axum::debug_handler]
pub async fn get_users(
    Extension(pool): Extension<SqlitePool>,
    Query(filter): Query<UserFilter>,
) -> ApiResult<Json<Vec<UserDto>>> {
    let user_service = UserService::new(&pool);
    let users = user_service
        .get_users(filter.nickname())
        .await
        .map_err(service_error_to_http)?;

    Ok(Json(users))
}

/// Applies a partial update to the authenticated user's profile.
#[axum::debug_handler]
pub async fn edit_user(
    Extension(pool): Extension<SqlitePool>,
    Extension(user): Extension<User>,
    ValidatedJson(payload): ValidatedJson<EditUser>,
) -> ApiResult<Json<UserDto>> {
    tracing::info!("Editing profile for user: {}", user.id);

    let user_service = UserService::new(&pool);
    match user_service.edit_user(user.id, payload).await {
        Ok(user) => Ok(Json(user)),
        Err(error) => Err(service_error_to_http(error)),
    }
}
