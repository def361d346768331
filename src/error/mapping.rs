//! Error mapping for backend responses
//!
//! This module converts non-success HTTP responses from the detection
//! backend to our normalized ClientError type. The backend usually answers
//! with JSON, but error pages may come back as HTML, so both shapes are
//! tolerated.

use reqwest::StatusCode;
use serde_json::Value;

use super::{ClientError, ErrorContext};

/// Map an HTTP error response to a ClientError
pub fn map_http_error(status: StatusCode, body: &str, context: &mut ErrorContext) -> ClientError {
    context.status_code = Some(status.as_u16());

    let message = match serde_json::from_str::<Value>(body) {
        Ok(json) => json
            .get("error")
            .or_else(|| json.get("message"))
            .and_then(|m| m.as_str())
            .map(|m| m.to_string())
            .unwrap_or_else(|| summarize_body(status, body)),
        Err(_) => summarize_body(status, body),
    };

    match status {
        StatusCode::BAD_REQUEST => ClientError::validation(message),
        StatusCode::NOT_FOUND => ClientError::service(format!("Resource not found: {}", message)),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => ClientError::timeout(message),
        s if s.is_server_error() => ClientError::service(message),
        _ => ClientError::service(message),
    }
}

/// Determine if an HTTP status code indicates a retryable error
pub fn is_retryable_status(status: StatusCode) -> bool {
    matches!(status.as_u16(), 408 | 429 | 500 | 502 | 503 | 504)
}

fn summarize_body(status: StatusCode, body: &str) -> String {
    if body.is_empty() {
        status.to_string()
    } else if body.len() > 100 {
        format!("{}: {:.100}...", status, body)
    } else {
        format!("{}: {}", status, body)
    }
}
