use std::fmt::Display;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

/// Application-wide error type
///
/// Every variant is terminal for the request it occurred in and is
/// answered with a plain-text 500 so that Pub/Sub redelivers the message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed envelope or log entry
    #[error("Cannot get message {raw} {reason}")]
    Decode { raw: String, reason: String },
    /// Malformed structured payload
    #[error("Cannot get payload {reason} ({raw})")]
    Extraction { raw: String, reason: String },
    /// Transport failure or non-ok webhook answer
    #[error("{0}")]
    Forwarding(String),
}

impl AppError {
    /// Error message, used verbatim as the response body
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Error code, only used for logging
    pub fn error_code(&self) -> String {
        match self {
            AppError::Decode { .. } => "RELAY_DECODE",
            AppError::Extraction { .. } => "RELAY_PAYLOAD",
            AppError::Forwarding(_) => "RELAY_FORWARD",
        }
        .to_string()
    }

    /// HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Decode { .. } | AppError::Extraction { .. } | AppError::Forwarding(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        error!(error_code = %self.error_code(), "{}", message);

        (status, message).into_response()
    }
}

/// Convenience constructors
impl AppError {
    pub fn decode(raw: &[u8], reason: impl Display) -> Self {
        AppError::Decode {
            raw: String::from_utf8_lossy(raw).into_owned(),
            reason: reason.to_string(),
        }
    }

    pub fn extraction(raw: impl Into<String>, reason: impl Display) -> Self {
        AppError::Extraction {
            raw: raw.into(),
            reason: reason.to_string(),
        }
    }

    pub fn forwarding(msg: impl Into<String>) -> Self {
        AppError::Forwarding(msg.into())
    }
}
