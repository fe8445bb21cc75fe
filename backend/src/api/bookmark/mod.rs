//! Module for bookmark API endpoints.
//!
//! Every endpoint is scoped to the authenticated caller's own bookmarks.

pub mod handlers;
pub mod routes;
