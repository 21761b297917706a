//! Application error types with HTTP status code mapping.
//!
//! [`AppError`] is the central error type for the service. Each variant
//! maps to a specific HTTP status code and a JSON body of the form
//! `{ "error": "<message>" }`.

use axum::http::header::RETRY_AFTER;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Message returned to clients in place of store and internal failures.
pub const GENERIC_SERVER_ERROR: &str = "Internal server error";

/// JSON error response body.
///
/// ```json
/// { "error": "First and last name required" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// | Variant       | HTTP Status                | Client message        |
/// |---------------|----------------------------|-----------------------|
/// | `Validation`  | 400 Bad Request            | the validation message|
/// | `Store`       | 500 Internal Server Error  | generic               |
/// | `Fetch`       | 502 Bad Gateway            | the fetch message     |
/// | `RateLimited` | 429 Too Many Requests      | throttling notice     |
/// | `Internal`    | 500 Internal Server Error  | generic               |
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request input was missing, blank, or malformed.
    #[error("{0}")]
    Validation(String),

    /// The name store failed to insert or select.
    #[error("store error: {0}")]
    Store(String),

    /// The external astronomy endpoint could not be reached or answered
    /// with an unusable response.
    #[error("{0}")]
    Fetch(String),

    /// The external astronomy endpoint is throttling our credential.
    #[error("astronomy service rate limit reached, try again later")]
    RateLimited {
        /// Seconds until the upstream allows another request, if it said.
        retry_after_secs: Option<u64>,
    },

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Fetch(_) => StatusCode::BAD_GATEWAY,
            Self::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
        }
    }

    /// Returns the message safe to show to a client.
    ///
    /// Store and internal failures are replaced by a generic message; the
    /// detail only goes to the server log.
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::Store(_) | Self::Internal(_) => GENERIC_SERVER_ERROR.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        Self::Store(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            Self::Store(detail) => tracing::error!(error = %detail, "store failure"),
            Self::Internal(detail) => tracing::error!(error = %detail, "internal failure"),
            Self::Fetch(detail) => tracing::warn!(error = %detail, "astronomy fetch failed"),
            Self::RateLimited { retry_after_secs } => {
                tracing::warn!(?retry_after_secs, "astronomy endpoint rate limited");
            }
            Self::Validation(_) => {}
        }

        let status = self.status_code();
        let retry_after = match &self {
            Self::RateLimited {
                retry_after_secs: Some(secs),
            } => Some(*secs),
            _ => None,
        };
        let body = ErrorResponse {
            error: self.client_message(),
        };

        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        if let Some(secs) = retry_after {
            response
                .headers_mut()
                .insert(RETRY_AFTER, HeaderValue::from(secs));
        }
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body read failed");
        };
        let Ok(value) = serde_json::from_slice(&bytes) else {
            panic!("body is not json");
        };
        value
    }

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(
            AppError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Store("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Fetch("x".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::RateLimited {
                retry_after_secs: None
            }
            .status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
    }

    #[tokio::test]
    async fn validation_message_reaches_client() {
        let response =
            AppError::Validation("First and last name required".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(
            body.get("error").and_then(serde_json::Value::as_str),
            Some("First and last name required")
        );
    }

    #[tokio::test]
    async fn store_detail_is_hidden_from_client() {
        let response =
            AppError::Store("relation \"names\" does not exist".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(
            body.get("error").and_then(serde_json::Value::as_str),
            Some(GENERIC_SERVER_ERROR)
        );
    }

    #[test]
    fn rate_limited_sets_retry_after() {
        let response = AppError::RateLimited {
            retry_after_secs: Some(120),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        let header = response.headers().get(RETRY_AFTER);
        assert_eq!(header.and_then(|v| v.to_str().ok()), Some("120"));
    }

    #[test]
    fn rate_limited_without_hint_has_no_header() {
        let response = AppError::RateLimited {
            retry_after_secs: None,
        }
        .into_response();
        assert!(response.headers().get(RETRY_AFTER).is_none());
    }
}
