//! Module for user profile API endpoints.
//!
//! Covers reading the caller's own profile, listing users and partial
//! profile edits.

pub mod handlers;
pub mod routes;
