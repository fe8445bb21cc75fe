//! Shared helpers: session token signing and password hashing.

pub mod jwt;
pub mod password;
