//! Data structures for authentication requests and responses.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "jwt";

/// Signup and signin payload
///
/// Absent fields default to empty so `validator` reports them per field.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AuthRequest {
    #[serde(default)]
    #[validate(
        email(message = "Must be a valid email"),
        length(max = 255, message = "Email too long")
    )]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Plain acknowledgment body
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
