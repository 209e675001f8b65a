use crate::envelope::FailureEnvelope;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use classifier::ClassifierError;
use std::path::PathBuf;
use thiserror::Error;
use tracing::error;

/// Result type alias for server startup and configuration
pub type Result<T> = std::result::Result<T, ServerError>;

/// Errors raised while configuring or starting the server
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Configuration file already exists: {path}")]
    ConfigExists { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },
}

impl ServerError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Get a user-friendly message for command line display
    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigNotFound { path } => format!(
                "Configuration file not found at {}. Run `bfhl init` to create one",
                path.display()
            ),
            Self::ConfigExists { path } => format!(
                "{} already exists. Use --force to overwrite it",
                path.display()
            ),
            Self::Bind { address, source } => {
                format!("Could not listen on {address}: {source}. Is the port already in use?")
            }
            _ => self.to_string(),
        }
    }
}

/// Errors reported to HTTP clients inside the failure envelope
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Route not found: {0}")]
    NotFound(String),

    #[error("Method {method} not allowed on {path}")]
    MethodNotAllowed { method: String, path: String },

    /// Detail is logged, never sent to the client
    #[error("Internal Server Error")]
    Internal(String),
}

impl ApiError {
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn internal<S: Into<String>>(detail: S) -> Self {
        Self::Internal(detail.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ClassifierError> for ApiError {
    fn from(err: ClassifierError) -> Self {
        Self::InvalidInput(err.user_message())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(detail) = &self {
            error!(%detail, "Request failed with an internal error");
        }

        let body = FailureEnvelope::new(self.to_string());
        (self.status_code(), Json(body)).into_response()
    }
}
