//! Error handling utilities for API responses.
//!
//! Provides the structured error body and the conversion between service-layer
//! errors and HTTP responses. Includes:
//! - Standard error response format
//! - ServiceError to HTTP status code mapping
//! - A JSON extractor that validates the body before any handler runs
//! - A path extractor whose rejections use the same error body
//!
//! # Response Format
//! All errors return consistent JSON responses containing:
//! - `message`: Human-readable, user-safe message
//! - `error.errorType`: Machine-readable error category
//! - `error.details`: Optional field-specific validation errors
//!
//! # Error Handling Flow
//! 1. Malformed or invalid bodies are rejected by `ValidatedJson` with a 400
//! 2. Service layer returns domain-specific `ServiceError`
//! 3. `service_error_to_http` converts it to the matching status and body,
//!    logging internal failures server-side only

use crate::errors::ServiceError;
use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Path, Request,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, request::Parts},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use validator::Validate;

/// Error body returned by every failing endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    /// Human-readable message
    pub message: String,
    /// Error details
    pub error: ErrorDetails,
    /// Response timestamp
    pub timestamp: String,
}

/// Error details for failed requests
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetails {
    /// Machine-readable error type identifier
    pub error_type: String,
    /// Field-specific validation errors when applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-specific validation error details
#[derive(Debug, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the field with validation error
    pub field: String,
    /// Description of the validation failure
    pub message: String,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);
pub type ApiResult<T> = Result<T, ApiError>;

impl ErrorResponse {
    pub fn new(
        message: impl Into<String>,
        error_type: impl Into<String>,
        details: Option<Vec<FieldError>>,
    ) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: ErrorDetails {
                error_type: error_type.into(),
                details,
            },
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Builds an error response tuple
pub fn error_response(
    status: StatusCode,
    message: impl Into<String>,
    error_type: &str,
    details: Option<Vec<FieldError>>,
) -> ApiError {
    (status, Json(ErrorResponse::new(message, error_type, details)))
}

/// Converts ServiceError to appropriate HTTP response with standard format
pub fn service_error_to_http(error: ServiceError) -> ApiError {
    let (status, error_type, message) = match error {
        ServiceError::Validation { message } => {
            (StatusCode::BAD_REQUEST, "validation_error", message)
        }
        ServiceError::Forbidden { message } => (StatusCode::FORBIDDEN, "forbidden", message),
        ServiceError::Unauthenticated { .. } => (
            StatusCode::UNAUTHORIZED,
            "unauthorized",
            "Unauthorized".to_string(),
        ),
        ServiceError::NotFound { entity, identifier } => (
            StatusCode::NOT_FOUND,
            "not_found",
            format!("{} '{}' not found", entity, identifier),
        ),
        ServiceError::Database { source } => {
            tracing::error!("Database error: {}", source);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "Internal server error".to_string(),
            )
        }
        ServiceError::InternalError { message } => {
            tracing::error!("Internal error: {}", message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "Internal server error".to_string(),
            )
        }
    };

    error_response(status, message, error_type, None)
}

/// Formats validator::ValidationErrors into field-specific error details
pub fn validation_errors_to_field_errors(errors: &validator::ValidationErrors) -> Vec<FieldError> {
    let mut field_errors: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: field.to_string(),
                message: error
                    .message
                    .as_ref()
                    .unwrap_or(&"Invalid value".into())
                    .to_string(),
            })
        })
        .collect();
    field_errors.sort_by(|a, b| a.field.cmp(&b.field));
    field_errors
}

/// Helper to create validation error response
pub fn validation_error_response(errors: &validator::ValidationErrors) -> ApiError {
    let field_errors = validation_errors_to_field_errors(errors);
    error_response(
        StatusCode::BAD_REQUEST,
        "Validation failed",
        "validation_error",
        Some(field_errors),
    )
}

/// JSON body extractor that runs `validator` rules.
///
/// Every rejection, including a missing body or missing fields, is a 400.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                error_response(
                    StatusCode::BAD_REQUEST,
                    rejection.body_text(),
                    "invalid_body",
                    None,
                )
            })?;

        value
            .validate()
            .map_err(|errors| validation_error_response(&errors))?;

        Ok(ValidatedJson(value))
    }
}

/// Path extractor answering unparsable segments with the standard error body.
pub struct ValidatedPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: PathRejection| {
                error_response(
                    StatusCode::BAD_REQUEST,
                    rejection.body_text(),
                    "invalid_path",
                    None,
                )
            })?;

        Ok(ValidatedPath(value))
    }
}
