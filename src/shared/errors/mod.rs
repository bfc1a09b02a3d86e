//! Error Types
//!
//! Layered error types with a single translation point into HTTP responses.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::infrastructure::driving_adapters::api_rest::middleware::current_request_id;

/// Domain-level errors representing business rule violations
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("CURP cannot be changed (stored {stored}, supplied {supplied})")]
    CurpImmutable { stored: String, supplied: String },

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The row vanished between lookup and write
    #[error("Driver not found with CURP: {0}")]
    NotFound(String),

    #[error("Duplicate key: {0}")]
    Duplicate(String),

    #[error("Data mapping error: {0}")]
    Mapping(String),
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("{resource} not found with CURP: {curp}")]
    NotFound { resource: &'static str, curp: String },

    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError {
    /// Shorthand for a missing driver
    #[must_use]
    pub fn driver_not_found(curp: impl Into<String>) -> Self {
        Self::NotFound {
            resource: "Driver",
            curp: curp.into(),
        }
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Domain(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } | Self::Repository(RepositoryError::NotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            Self::Conflict(_) | Self::Repository(RepositoryError::Duplicate(_)) => StatusCode::CONFLICT,
            Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound { .. } | Self::Repository(RepositoryError::NotFound(_)) => "NOT_FOUND",
            Self::Conflict(_) | Self::Repository(RepositoryError::Duplicate(_)) => "CONFLICT",
            Self::Domain(DomainError::CurpImmutable { .. }) => "CURP_IMMUTABLE",
            Self::Domain(DomainError::InvalidValue(_)) => "BAD_REQUEST",
            Self::Repository(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<validator::ValidationErrors> for UseCaseError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message.as_ref().map_or("invalid", |m| m.as_ref())
                    )
                })
            })
            .collect();
        // field_errors() is backed by a HashMap
        messages.sort();
        UseCaseError::Validation(messages)
    }
}

/// API error translated into an HTTP response
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    /// A use case failure annotated with the operation that was running
    #[error("{context}: {source}")]
    Operation {
        context: String,
        #[source]
        source: UseCaseError,
    },

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("{0}")]
    RouteNotFound(String),

    #[error("{0}")]
    MethodNotAllowed(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Attach operation context (e.g. "create the driver") to a use case error
    #[must_use]
    pub fn during(context: impl Into<String>, source: UseCaseError) -> Self {
        Self::Operation {
            context: context.into(),
            source,
        }
    }

    /// Reject a request body that could not be read as JSON
    #[must_use]
    pub fn malformed_body(context: &str, rejection: &JsonRejection) -> Self {
        Self::BadRequest(format!(
            "Bad request while trying to {context}: {}",
            rejection.body_text()
        ))
    }

    /// HTTP status code this error translates to
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::UseCase(err) | Self::Operation { source: err, .. } => err.status_code(),
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::RouteNotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub timestamp: String,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level error for validation errors
#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

fn validation_details(err: &UseCaseError) -> Option<Vec<FieldError>> {
    match err {
        UseCaseError::Validation(errors) => Some(
            errors
                .iter()
                .map(|e| {
                    let (field, message) = e.split_once(": ").unwrap_or(("", e.as_str()));
                    FieldError {
                        field: field.to_string(),
                        message: message.to_string(),
                    }
                })
                .collect(),
        ),
        _ => None,
    }
}

/// Message for a use case error raised while `context` was running
fn contextual_message(context: &str, err: &UseCaseError) -> String {
    let status = err.status_code();
    if status == StatusCode::BAD_REQUEST {
        format!("Bad request while trying to {context}: {err}")
    } else if status.is_server_error() {
        format!("Internal server error while trying to {context}: {err}")
    } else {
        err.to_string()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
        }

        let (code, message, details) = match &self {
            ApiError::UseCase(uc_error) => (
                uc_error.error_code().to_string(),
                uc_error.to_string(),
                validation_details(uc_error),
            ),
            ApiError::Operation { context, source } => (
                source.error_code().to_string(),
                contextual_message(context, source),
                validation_details(source),
            ),
            ApiError::BadRequest(msg) => ("BAD_REQUEST".to_string(), msg.clone(), None),
            ApiError::RouteNotFound(msg) => ("NOT_FOUND".to_string(), msg.clone(), None),
            ApiError::MethodNotAllowed(msg) => ("METHOD_NOT_ALLOWED".to_string(), msg.clone(), None),
            ApiError::Internal(_) => (
                "INTERNAL_ERROR".to_string(),
                "An unexpected error occurred".to_string(),
                None,
            ),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code,
                message,
                details,
            },
            request_id: current_request_id().map(|id| id.0),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(body)).into_response()
    }
}
