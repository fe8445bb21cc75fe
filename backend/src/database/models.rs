//! Rust structs that represent database table mappings.
//!
//! These models define the structure of data as it is stored in and retrieved
//! from the database, alongside the input shapes used to create and update
//! rows. Outward-facing representations live next to them so the password
//! hash never leaves this layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A registered user, exactly as stored.
///
/// Deliberately not `Serialize`: convert to [`UserDto`] before responding.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub nickname: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public view of a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub nickname: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            nickname: user.nickname,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
}

/// Partial profile update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EditUser {
    #[validate(
        email(message = "Must be a valid email"),
        length(max = 255, message = "Email too long")
    )]
    pub email: Option<String>,

    #[validate(length(max = 255, message = "First name too long"))]
    pub first_name: Option<String>,

    #[validate(length(max = 255, message = "Last name too long"))]
    pub last_name: Option<String>,

    #[validate(length(max = 255, message = "Nickname too long"))]
    pub nickname: Option<String>,
}

/// Query string accepted by the user listing.
#[derive(Debug, Default, Deserialize)]
pub struct UserFilter {
    pub nickname: Option<String>,
}

impl UserFilter {
    /// The nickname to match, ignoring an empty parameter.
    pub fn nickname(&self) -> Option<&str> {
        self.nickname.as_deref().filter(|n| !n.is_empty())
    }
}

/// A saved link. Serialized as-is; it carries nothing secret.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub link: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBookmark {
    #[serde(default)]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Link is required"))]
    pub link: String,

    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct EditBookmark {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Link must not be empty"))]
    pub link: Option<String>,

    pub description: Option<String>,
}
