//! Errors raised by the data gateway.

use thiserror::Error;

use super::{ErrorCategory, ValidationError};
use crate::traits::HttpError;

/// Result alias for gateway operations.
pub type GatewayResult<T> = std::result::Result<T, GatewayError>;

/// Everything that can go wrong between the client and the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// Rejected before any request was made.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Non-success response (`status` set) or transport failure (`status` unset).
    #[error("fetch failed: {}", describe_fetch(.status, .message))]
    Fetch {
        status: Option<u16>,
        message: Option<String>,
    },

    /// Detail requested for an id the store does not know.
    #[error("learning not found: {id}")]
    NotFound { id: String },

    /// A success response whose body could not be decoded.
    #[error("invalid response body: {message}")]
    Decode { message: String },
}

fn describe_fetch(status: &Option<u16>, message: &Option<String>) -> String {
    match (status, message) {
        (Some(status), Some(message)) => format!("HTTP {} {}", status, message),
        (Some(status), None) => format!("HTTP {}", status),
        (None, Some(message)) => message.clone(),
        (None, None) => "unknown error".to_string(),
    }
}

impl GatewayError {
    /// A non-success response, with the server's message if it sent one.
    pub fn fetch(status: Option<u16>, message: Option<String>) -> Self {
        Self::Fetch { status, message }
    }

    /// A transport-level failure (no response at all).
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Fetch {
            status: None,
            message: Some(message.into()),
        }
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            GatewayError::Validation(_) => ErrorCategory::User,
            GatewayError::Fetch { status: None, .. } => ErrorCategory::Network,
            GatewayError::Fetch { .. } | GatewayError::NotFound { .. } => ErrorCategory::Server,
            GatewayError::Decode { .. } => ErrorCategory::Client,
        }
    }

    /// Text for the toast shown to the user.
    ///
    /// Prefers the message the store sent; falls back to `fallback` when
    /// there is nothing better to say.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            GatewayError::Validation(err) => err.user_message().to_string(),
            GatewayError::Fetch {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            GatewayError::NotFound { .. } => "Learning not found".to_string(),
            _ => fallback.to_string(),
        }
    }
}

impl From<HttpError> for GatewayError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::ServerError { status, message } => Self::Fetch {
                status: Some(status),
                message: Some(message),
            },
            other => Self::transport(other.to_string()),
        }
    }
}
