//! Typed client for the detection backend
//!
//! `DetectorClient` speaks to the two endpoints the detection page uses:
//! `POST /predict`, which receives the news form as multipart form data,
//! and `POST /confirm_guide`, which is a body-less acknowledgment of the
//! onboarding guide.
//!
//! Both operations are single-shot: no retries and no cancellation. The
//! configured timeout is the only way a hung request resolves.

mod http;
mod models;
pub use models::*;

use async_trait::async_trait;
use log::{debug, warn};
use uuid::Uuid;

use crate::config::{BackendConfig, DEFAULT_PROVIDER};
use crate::error::{ClientError, Result};

/// The backend operations the page flows consume.
///
/// This is the seam between the flows and the transport; tests substitute
/// a mock implementation here.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DetectorApi: Send + Sync {
    /// Submit the news form fields for classification
    async fn predict(&self, submission: Submission) -> Result<PredictResponse>;

    /// Acknowledge the onboarding guide
    async fn confirm_guide(&self) -> Result<ConfirmGuideResponse>;
}

/// reqwest-backed client for the detection backend
pub struct DetectorClient {
    /// HTTP client
    http_client: reqwest::Client,

    /// Configuration
    config: BackendConfig,
}

impl DetectorClient {
    /// Create a client from environment configuration, falling back to the
    /// built-in defaults when nothing is set
    pub fn from_env() -> Result<Self> {
        let config = BackendConfig::from_provider(&**DEFAULT_PROVIDER).unwrap_or_else(|e| {
            warn!("Failed to load backend config from environment ({}), using defaults", e);
            BackendConfig::default()
        });

        Self::new_with_config(config)
    }

    /// Create a client with an explicit configuration
    pub fn new_with_config(config: BackendConfig) -> Result<Self> {
        config.validate()?;
        let http_client = http::build_http_client(config.user_agent.as_deref(), config.timeout())?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Create a new builder for the client
    pub fn builder() -> DetectorClientBuilder {
        DetectorClientBuilder::default()
    }

    /// The configured backend base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), endpoint)
    }
}

#[async_trait]
impl DetectorApi for DetectorClient {
    async fn predict(&self, submission: Submission) -> Result<PredictResponse> {
        let url = self.endpoint_url("predict");
        let request_id = Uuid::new_v4();
        debug!(
            "predict request {}: POST {} with {} form fields",
            request_id,
            url,
            submission.fields().len()
        );

        let mut form = reqwest::multipart::Form::new();
        for (name, value) in submission.fields() {
            form = form.text(name.clone(), value.clone());
        }

        let response = self.http_client.post(&url).multipart(form).send().await?;
        let status = response.status();

        if status.is_success() {
            let parsed = response.json::<PredictResponse>().await.map_err(|e| {
                ClientError::parsing(format!("Failed to parse predict response: {}", e))
                    .with_endpoint("predict")
            })?;
            debug!("predict request {} completed, status {:?}", request_id, parsed.status);
            Ok(parsed)
        } else {
            let error = http::parse_error_response("predict", response).await;
            warn!("predict request {} failed: {}", request_id, error);
            Err(error)
        }
    }

    async fn confirm_guide(&self) -> Result<ConfirmGuideResponse> {
        let url = self.endpoint_url("confirm_guide");
        let request_id = Uuid::new_v4();
        debug!("confirm_guide request {}: POST {} (empty body)", request_id, url);

        let response = self.http_client.post(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            let parsed = response.json::<ConfirmGuideResponse>().await.map_err(|e| {
                ClientError::parsing(format!("Failed to parse confirm_guide response: {}", e))
                    .with_endpoint("confirm_guide")
            })?;
            debug!(
                "confirm_guide request {} completed, status {:?}",
                request_id, parsed.status
            );
            Ok(parsed)
        } else {
            let error = http::parse_error_response("confirm_guide", response).await;
            warn!("confirm_guide request {} failed: {}", request_id, error);
            Err(error)
        }
    }
}

/// Builder for the detector client
#[derive(Debug, Default)]
pub struct DetectorClientBuilder {
    /// Base URL override
    base_url: Option<String>,

    /// Request timeout override
    timeout_seconds: Option<u64>,

    /// User agent override
    user_agent: Option<String>,
}

impl DetectorClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend base URL
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout in seconds
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<DetectorClient> {
        // Environment configuration first, explicit overrides on top
        let mut config = BackendConfig::from_provider(&**DEFAULT_PROVIDER).unwrap_or_default();

        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }

        if let Some(timeout) = self.timeout_seconds {
            config.timeout_seconds = timeout;
        }

        if let Some(user_agent) = self.user_agent {
            config.user_agent = Some(user_agent);
        }

        DetectorClient::new_with_config(config)
    }
}
