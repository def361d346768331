//! Shared HTTP plumbing for the backend client

use std::time::Duration;

use reqwest::{header, Client};

use crate::error::{mapping, ClientError, ErrorContext, Result};

/// Default user agent string
const DEFAULT_USER_AGENT: &str = "NewsCheck/0.1.0 (client-sdk)";

/// Build a standard HTTP client with default settings.
///
/// The backend scopes guide state to a session cookie, so the client keeps
/// a cookie store across requests.
pub(crate) fn build_http_client(user_agent: Option<&str>, timeout: Duration) -> Result<Client> {
    let mut headers = header::HeaderMap::new();
    let ua = user_agent.unwrap_or(DEFAULT_USER_AGENT);

    headers.insert(
        header::USER_AGENT,
        header::HeaderValue::from_str(ua)
            .map_err(|e| ClientError::configuration(format!("Invalid user agent: {}", e)))?,
    );

    let client = Client::builder()
        .default_headers(headers)
        .timeout(timeout)
        .gzip(true)
        .cookie_store(true)
        .build()
        .map_err(|e| ClientError::configuration(format!("Failed to build HTTP client: {}", e)))?;

    Ok(client)
}

/// Parse an error response from the backend
pub(crate) async fn parse_error_response(endpoint: &str, response: reqwest::Response) -> ClientError {
    let status = response.status();
    let mut context = ErrorContext::for_endpoint(endpoint).status_code(status.as_u16());

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => format!("Failed to read error response: {}", e),
    };

    mapping::map_http_error(status, &body, &mut context).with_context(context)
}
