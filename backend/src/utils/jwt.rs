//! JWT token utilities for session authentication.
//!
//! Provides token creation, validation, and claims management. A token is
//! self-contained: it carries the user id and email, is signed with the
//! process-wide secret and expires fifteen minutes after issuance.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{ServiceError, ServiceResult};

/// Lifetime of a session token.
pub const SESSION_TTL_MINUTES: i64 = 15;

/// JWT Claims structure carried by the session cookie
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    /// User ID
    pub sub: i64,
    /// User email at the time of issuance
    pub email: String,
    /// Token issued at timestamp
    pub iat: i64,
    /// Token expiration timestamp
    pub exp: i64,
}

impl Claims {
    pub fn user_id(&self) -> i64 {
        self.sub
    }
}

/// JWT token utility for creating and validating tokens
pub struct JwtUtils {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtUtils {
    /// Create a new JwtUtils instance from the configured signing secret
    pub fn new(secret: &str) -> Self {
        let encoding_key = EncodingKey::from_secret(secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        JwtUtils {
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Generate a session token for the given user
    pub fn generate_token(&self, user_id: i64, email: &str) -> ServiceResult<String> {
        self.generate_token_at(user_id, email, Utc::now())
    }

    fn generate_token_at(
        &self,
        user_id: i64,
        email: &str,
        issued_at: DateTime<Utc>,
    ) -> ServiceResult<String> {
        let exp = issued_at + Duration::minutes(SESSION_TTL_MINUTES);

        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            iat: issued_at.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| ServiceError::internal_error(format!("Token generation failed: {}", e)))
    }

    /// Validate and decode a session token.
    ///
    /// Bad signatures, expired tokens and malformed input all come back as
    /// `ServiceError::Unauthenticated`.
    pub fn validate_token(&self, token: &str) -> ServiceResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| {
                debug!("Token validation failed: {}", e);
                ServiceError::unauthenticated("Invalid or expired session")
            })
    }
}
