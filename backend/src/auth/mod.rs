//! Authentication module for user accounts, sessions, and access control.
//!
//! This module provides signup and signin, session cookie issuance, and the
//! middleware that guards every other route.

pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;
