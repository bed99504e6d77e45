//! Error types for the classifier service
//!
//! Classification itself cannot fail. These errors come from the boundary:
//! input validation, configuration loading and the HTTP service.

use serde::Serialize;
use thiserror::Error;

/// Maximum length of an error message sent to clients
const MAX_ERROR_MESSAGE_LEN: usize = 500;

/// Main error type for classifier service operations
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Server error: {message}")]
    Server { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Machine-readable error code carried in HTTP error bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidInput,
    ConfigError,
    ServerError,
    IoError,
}

/// Error payload returned to clients
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetails {
    pub code: ErrorCode,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetails,
}

impl ClassifierError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ClassifierError::InvalidInput { .. } => ErrorCode::InvalidInput,
            ClassifierError::Config(_) => ErrorCode::ConfigError,
            ClassifierError::Server { .. } => ErrorCode::ServerError,
            ClassifierError::Io(_) => ErrorCode::IoError,
        }
    }

    /// Convert to the client-facing error body
    pub fn to_error_body(&self) -> ErrorBody {
        let message = match self {
            ClassifierError::InvalidInput { message } | ClassifierError::Server { message } => {
                message.clone()
            }
            other => other.to_string(),
        };

        ErrorBody {
            error: ErrorDetails {
                code: self.code(),
                message: truncate_message(&message),
            },
        }
    }

    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create server error
    pub fn server_error<S: Into<String>>(message: S) -> Self {
        Self::Server {
            message: message.into(),
        }
    }
}

/// Keep total length <= 500 bytes, cutting on a char boundary
fn truncate_message(message: &str) -> String {
    if message.len() <= MAX_ERROR_MESSAGE_LEN {
        return message.to_string();
    }

    let truncate_suffix = "...[truncated]";
    let mut cut = MAX_ERROR_MESSAGE_LEN - truncate_suffix.len();
    while !message.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}{}", &message[..cut], truncate_suffix)
}

/// Result type for classifier service operations
pub type ClassifierResult<T> = Result<T, ClassifierError>;
