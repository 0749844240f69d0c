//! API error types mapped to HTTP status codes.
//!
//! Each [`ApiError`] variant maps to a specific HTTP status code and produces
//! a JSON response body `{"error": "message"}`.

use crate::chat::ChatError;
use crate::retrieve::RetrieveError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type that implements `IntoResponse`.
///
/// Each variant maps to an HTTP status code:
/// - `BadRequest` → 400
/// - `Upstream` → 502 (a collaborator — oracle or chat API — failed)
/// - `Internal` → 500
///
/// An applicant id missing from the resume table is handled as a per-item
/// skip during selection, so no route produces a 404.
#[derive(Debug)]
pub enum ApiError {
    /// Invalid request parameters (400).
    BadRequest(String),
    /// An external collaborator failed or was unreachable (502).
    Upstream(String),
    /// Unexpected server error (500).
    Internal(String),
}

impl From<RetrieveError> for ApiError {
    fn from(err: RetrieveError) -> Self {
        match err {
            RetrieveError::EmptySubquestions => ApiError::BadRequest(err.to_string()),
            RetrieveError::Oracle(_) => ApiError::Upstream(err.to_string()),
        }
    }
}

impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        match err {
            // A well-formed but empty model response is the service's
            // failure to produce a result, not a gateway problem.
            ChatError::EmptyOutput => ApiError::Internal("Failed to generate output".into()),
            ChatError::Http(_) | ChatError::Api { .. } => ApiError::Upstream(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        let body = axum::Json(json!({ "error": message }));
        (status, body).into_response()
    }
}
