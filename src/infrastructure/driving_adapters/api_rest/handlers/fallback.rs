//! Fallback Handlers
//!
//! Uniform error bodies for requests that match no route, or match a path
//! with the wrong method.

use axum::extract::OriginalUri;
use axum::http::Method;

use crate::shared::errors::ApiError;

/// Router-wide fallback for unknown paths
pub async fn not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    tracing::debug!(path = %uri.path(), "No route matched");
    ApiError::RouteNotFound(format!("Endpoint {} not found", uri.path()))
}

/// Per-route fallback for known paths hit with an unsupported method
pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    tracing::debug!(%method, path = %uri.path(), "Method not allowed");
    ApiError::MethodNotAllowed(format!(
        "Method {method} is not allowed for {}",
        uri.path()
    ))
}
