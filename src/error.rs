use std::fmt;

use serde_json::Value as JsonValue;
use thiserror::Error;
use tracing::{error, warn};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Validation,
    Config,
    Serialization,
    Io,
    Unknown,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Validation => "VALIDATION_FAILED",
            ErrorCode::Config => "INVALID_CONFIG",
            ErrorCode::Serialization => "SERIALIZATION_FAILED",
            ErrorCode::Io => "IO_FAILED",
            ErrorCode::Unknown => "UNKNOWN_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation failed: {message}")]
    Validation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        details: Option<JsonValue>,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        let message = message.into();
        warn!(target: "app::validation", %message, "validation error");
        AppError::Validation {
            message,
            source: None,
            details: None,
        }
    }

    pub fn validation_with_details(message: impl Into<String>, details: JsonValue) -> Self {
        let message = message.into();
        warn!(target: "app::validation", %message, details = %details, "validation error with details");
        AppError::Validation {
            message,
            source: None,
            details: Some(details),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        let message = message.into();
        warn!(target: "app::config", %message, "configuration error");
        AppError::Config(message)
    }

    pub fn other(message: impl Into<String>) -> Self {
        let message = message.into();
        error!(target: "app::other", %message, "other error");
        AppError::Other(message)
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { .. } => ErrorCode::Validation,
            AppError::Config(_) => ErrorCode::Config,
            AppError::Serialization(_) | AppError::Yaml(_) => ErrorCode::Serialization,
            AppError::Io(_) => ErrorCode::Io,
            AppError::Other(_) => ErrorCode::Unknown,
        }
    }

    pub fn details(&self) -> Option<&JsonValue> {
        match self {
            AppError::Validation { details, .. } => details.as_ref(),
            _ => None,
        }
    }
}
