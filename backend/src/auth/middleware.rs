//! Middleware for protecting authenticated routes.
//!
//! The session token travels in the `jwt` cookie. A request reaches a guarded
//! handler only after the token verifies and its subject still exists in the
//! store; the loaded `User` is then available as `Extension<User>`.

use crate::api::common::{ApiError, service_error_to_http};
use crate::auth::models::SESSION_COOKIE;
use crate::database::models::User;
use crate::errors::{ServiceError, ServiceResult};
use crate::services::user_service::UserService;
use crate::utils::jwt::JwtUtils;
use axum::{
    extract::{Extension, Request},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::warn;

/// Resolves the caller from the request cookies.
///
/// Exactly one store lookup happens once the token itself is valid.
pub async fn authenticate(
    pool: &SqlitePool,
    jwt_utils: &JwtUtils,
    jar: &CookieJar,
) -> ServiceResult<User> {
    let token = jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ServiceError::unauthenticated("Missing session cookie"))?;

    let claims = jwt_utils.validate_token(token)?;

    match UserService::new(pool).get_user_required(claims.user_id()).await {
        Ok(user) => Ok(user),
        Err(ServiceError::NotFound { .. }) => {
            Err(ServiceError::unauthenticated("Session user no longer exists"))
        }
        Err(e) => Err(e),
    }
}

/// Session cookie authentication middleware
pub async fn jwt_auth(
    Extension(pool): Extension<SqlitePool>,
    Extension(jwt_utils): Extension<Arc<JwtUtils>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    match authenticate(&pool, &jwt_utils, &jar).await {
        Ok(user) => {
            request.extensions_mut().insert(user);
            Ok(next.run(request).await)
        }
        Err(e) => {
            if let ServiceError::Unauthenticated { message } = &e {
                warn!("Rejected request to {}: {}", request.uri().path(), message);
            }
            Err(service_error_to_http(e))
        }
    }
}
