//! Defines the HTTP routes for user profiles.

use super::handlers::{edit_user, get_me, get_users};
use crate::auth::middleware::jwt_auth;
use axum::{Router, middleware, routing::get};

pub fn user_router() -> Router {
    Router::new()
        .route("/me", get(get_me))
        .route("/", get(get_users).patch(edit_user))
        .route_layer(middleware::from_fn(jwt_auth))
}
