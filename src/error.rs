//! Error types for the result proxy
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Proxy Error Enum ==
/// Unified error type for the result proxy.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// Malformed lookup input (bad registration number)
    #[error("Invalid request: {0}")]
    InvalidInput(String),

    /// Request used an HTTP method other than GET/OPTIONS
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Upstream fetch failed (network error, timeout, unexpected failure)
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        ProxyError::Upstream(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProxyError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ProxyError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ProxyError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        if matches!(self, ProxyError::MethodNotAllowed) {
            // Callers probing with the wrong verb get told what is supported.
            (status, [(header::ALLOW, "GET, OPTIONS")], body).into_response()
        } else {
            (status, body).into_response()
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the result proxy.
pub type Result<T> = std::result::Result<T, ProxyError>;
