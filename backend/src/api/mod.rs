//! Central module for organizing the application's HTTP API.
//!
//! This module assembles the top-level router: the unguarded `/auth` routes,
//! the guarded `/users` and `/bookmarks` routers, and the shared extensions
//! (connection pool, token utilities) every handler relies on.

pub mod bookmark;
pub mod common;
pub mod user;


use crate::auth;
use crate::utils::jwt::JwtUtils;
use axum::{Extension, Json, Router, routing::get};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Builds the application router.
pub fn router(pool: SqlitePool, jwt_utils: Arc<JwtUtils>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .nest("/auth", auth::routes::auth_router())
        .nest("/users", user::routes::user_router())
        .nest("/bookmarks", bookmark::routes::bookmark_router())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(jwt_utils))
        .layer(Extension(pool))
}

async fn root_handler() -> Json<Value> {
    Json(json!({
        "service": "Bookmarks Backend",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
