//! Error types for the token service.
//!
//! Key validation failures are client errors and map to HTTP 400 with a
//! fixed message. Anything else maps to 500 without exposing details.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Message returned for every admin key failure.
pub const INVALID_ADMIN_KEY_MESSAGE: &str = "Invalid Admin API Key";

/// Message returned for any server-side failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal error";

// Error codes for logs and metrics
pub const TOKEN_INVALID_KEY_FORMAT: &str = "TOKEN_INVALID_KEY_FORMAT";
pub const TOKEN_INVALID_SECRET_ENCODING: &str = "TOKEN_INVALID_SECRET_ENCODING";
pub const TOKEN_JWT_ENCODING: &str = "TOKEN_JWT_ENCODING";
pub const TOKEN_JWT_DECODING: &str = "TOKEN_JWT_DECODING";
pub const TOKEN_CONFIG: &str = "TOKEN_CONFIG";
pub const TOKEN_MISSING_FIELDS: &str = "TOKEN_MISSING_FIELDS";

#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Key is empty or has no `:` separator.
    #[error("Admin API key must have the form <id>:<hex secret>")]
    InvalidKeyFormat,

    /// Secret part is not valid, non-empty hex.
    #[error("Admin API key secret is not valid hexadecimal")]
    InvalidSecretEncoding,

    #[error("JWT encoding error: {0}")]
    JwtEncoding(String),

    #[error("JWT decoding error: {0}")]
    JwtDecoding(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl TokenError {
    /// Creates a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Stable code for logs and metric labels.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidKeyFormat => TOKEN_INVALID_KEY_FORMAT,
            Self::InvalidSecretEncoding => TOKEN_INVALID_SECRET_ENCODING,
            Self::JwtEncoding(_) => TOKEN_JWT_ENCODING,
            Self::JwtDecoding(_) => TOKEN_JWT_DECODING,
            Self::Config(_) => TOKEN_CONFIG,
        }
    }

    /// True when the caller (or the deployed key) is at fault.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidKeyFormat | Self::InvalidSecretEncoding)
    }

    /// HTTP status for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    /// Message safe to return to clients.
    ///
    /// Both key failures collapse to the same message.
    #[must_use]
    pub const fn public_message(&self) -> &'static str {
        if self.is_client_error() {
            INVALID_ADMIN_KEY_MESSAGE
        } else {
            INTERNAL_ERROR_MESSAGE
        }
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        TokenError::JwtEncoding(err.to_string())
    }
}

impl IntoResponse for TokenError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.public_message() });
        (self.status_code(), Json(body)).into_response()
    }
}
