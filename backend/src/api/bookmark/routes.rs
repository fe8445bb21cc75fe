//! Defines the HTTP routes for bookmarks.

use super::handlers::{
    create_bookmark, delete_bookmark_by_id, edit_bookmark_by_id, get_bookmark_by_id,
    get_bookmarks,
};
use crate::auth::middleware::jwt_auth;
use axum::{Router, middleware, routing::get};

pub fn bookmark_router() -> Router {
    Router::new()
        .route("/", get(get_bookmarks).post(create_bookmark))
        .route(
            "/{id}",
            get(get_bookmark_by_id)
                .patch(edit_bookmark_by_id)
                .delete(delete_bookmark_by_id),
        )
        .route_layer(middleware::from_fn(jwt_auth))
}
