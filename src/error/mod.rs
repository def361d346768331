//! Error handling for the NewsCheck client
//!
//! This module provides the error system shared by the client and the
//! page flows:
//! - Categorizes errors by kind (network, timeout, parsing, etc.)
//! - Adds request context to errors for better debugging
//! - Maps backend error responses to normalized variants
//! - Provides a convenient Result type alias

use std::fmt;
use thiserror::Error;

pub mod mapping;

/// Result type for NewsCheck client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Main error type for the NewsCheck client
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network or connection errors
    #[error("Network error: {0}")]
    Network(String),

    /// Timeout errors
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// Response parsing errors
    #[error("Parsing error: {0}")]
    Parsing(String),

    /// Request validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Backend-reported errors
    #[error("Service error: {0}")]
    Service(String),

    /// Unexpected or internal errors
    #[error("Internal error: {0}")]
    Internal(String),

    /// Errors with additional context
    #[error("{inner}")]
    WithContext {
        inner: Box<ClientError>,
        context: ErrorContext,
    },
}

impl ClientError {
    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        ClientError::Network(message.into())
    }

    /// Create a timeout error
    pub fn timeout(message: impl Into<String>) -> Self {
        ClientError::Timeout(message.into())
    }

    /// Create a parsing error
    pub fn parsing(message: impl Into<String>) -> Self {
        ClientError::Parsing(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        ClientError::Validation(message.into())
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        ClientError::Configuration(message.into())
    }

    /// Create a backend service error
    pub fn service(message: impl Into<String>) -> Self {
        ClientError::Service(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        ClientError::Internal(message.into())
    }

    /// Add context to an existing error
    pub fn with_context(self, context: ErrorContext) -> Self {
        ClientError::WithContext {
            inner: Box::new(self),
            context,
        }
    }

    /// Add a single endpoint value as context to an existing error
    pub fn with_endpoint(self, endpoint: impl Into<String>) -> Self {
        self.with_context(ErrorContext::for_endpoint(endpoint))
    }

    /// Get the HTTP status code if available
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::WithContext { context, .. } => context.status_code,
            _ => None,
        }
    }

    /// Get the endpoint the failing request targeted, if recorded
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            ClientError::WithContext { context, .. } => context.endpoint.as_deref(),
            _ => None,
        }
    }

    /// Check if this error is a timeout, looking through any context wrapper
    pub fn is_timeout(&self) -> bool {
        match self {
            ClientError::Timeout(_) => true,
            ClientError::WithContext { inner, .. } => inner.is_timeout(),
            _ => false,
        }
    }

    /// Check if this is a retryable error.
    ///
    /// The page flows are single-shot and never retry; this classification
    /// exists for embedders that schedule their own follow-up attempts.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Network(_) => true,
            ClientError::Timeout(_) => true,
            ClientError::WithContext { inner, .. } => inner.is_retryable(),
            _ => false,
        }
    }
}

/// Error context information
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// Endpoint the request targeted (e.g. "predict")
    pub endpoint: Option<String>,

    /// Request timestamp
    pub timestamp: Option<chrono::DateTime<chrono::Utc>>,

    /// HTTP status code if applicable
    pub status_code: Option<u16>,

    /// Request ID for log correlation
    pub request_id: Option<String>,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            endpoint: None,
            timestamp: Some(chrono::Utc::now()),
            status_code: None,
            request_id: None,
        }
    }
}

impl ErrorContext {
    /// Create a new error context
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new error context for a specific endpoint
    pub fn for_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: Some(endpoint.into()),
            ..Self::default()
        }
    }

    /// Add an HTTP status code
    pub fn status_code(mut self, code: u16) -> Self {
        self.status_code = Some(code);
        self
    }

    /// Add a request ID
    pub fn request_id(mut self, id: impl fmt::Display) -> Self {
        self.request_id = Some(id.to_string());
        self
    }
}

/// Convert reqwest errors to ClientError
impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        let mut context = ErrorContext::new();
        if let Some(url) = err.url() {
            context.endpoint = Some(url.path().trim_start_matches('/').to_string());
        }

        let client_error = if err.is_timeout() {
            ClientError::timeout(format!("Request timed out: {}", err))
        } else if err.is_connect() {
            ClientError::network(format!("Connection error: {}", err))
        } else if err.is_request() {
            ClientError::validation(format!("Invalid request: {}", err))
        } else if err.is_redirect() {
            ClientError::network(format!("Too many redirects: {}", err))
        } else if err.is_decode() {
            ClientError::parsing(format!("Response decode error: {}", err))
        } else {
            ClientError::internal(format!("HTTP client error: {}", err))
        };

        if let Some(status) = err.status() {
            client_error.with_context(context.status_code(status.as_u16()))
        } else {
            client_error.with_context(context)
        }
    }
}

/// Convert serde_json errors to ClientError
impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::parsing(format!("JSON error: {}", err))
    }
}
