//! Handler functions for authentication-related API endpoints.
//!
//! These functions process incoming HTTP requests for signup, signin and
//! signout, hand validated input to `auth::service`, and manage the session
//! cookie on the response.

use crate::api::common::{ApiResult, ValidatedJson, service_error_to_http};
use crate::auth::models::*;
use crate::auth::service::AuthService;
use crate::utils::jwt::JwtUtils;
use axum::{extract::Extension, http::StatusCode, response::Json as ResponseJson};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use sqlx::SqlitePool;
use std::sync::Arc;

/// Handle user signup request
#[axum::debug_handler]
pub async fn signup(
    Extension(pool): Extension<SqlitePool>,
    Extension(jwt_utils): Extension<Arc<JwtUtils>>,
    ValidatedJson(payload): ValidatedJson<AuthRequest>,
) -> ApiResult<(StatusCode, ResponseJson<MessageResponse>)> {
    let auth_service = AuthService::new(&pool, &jwt_utils);

    match auth_service.signup(payload).await {
        Ok(()) => Ok((
            StatusCode::CREATED,
            ResponseJson(MessageResponse::new("Signup successful")),
        )),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Handle user signin request; sets the HTTP-only session cookie
#[axum::debug_handler]
pub async fn signin(
    Extension(pool): Extension<SqlitePool>,
    Extension(jwt_utils): Extension<Arc<JwtUtils>>,
    jar: CookieJar,
    ValidatedJson(payload): ValidatedJson<AuthRequest>,
) -> ApiResult<(CookieJar, ResponseJson<MessageResponse>)> {
    let auth_service = AuthService::new(&pool, &jwt_utils);

    let token = auth_service
        .signin(payload)
        .await
        .map_err(service_error_to_http)?;

    let mut cookie = Cookie::new(SESSION_COOKIE, token);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);

    Ok((
        jar.add(cookie),
        ResponseJson(MessageResponse::new("Signin successful")),
    ))
}

/// Handle signout request by expiring the session cookie
#[axum::debug_handler]
pub async fn signout(jar: CookieJar) -> (CookieJar, ResponseJson<MessageResponse>) {
    // Sent unconditionally; `CookieJar::remove` skips cookies the request lacked.
    let mut cookie = Cookie::new(SESSION_COOKIE, "");
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.make_removal();

    (
        jar.add(cookie),
        ResponseJson(MessageResponse::new("Signout successful")),
    )
}
