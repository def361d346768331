//! # NewsCheck client SDK
//!
//! A typed client for the NewsCheck news-detection backend, covering the
//! two interactions the detection page performs:
//!
//! - **Submission flow**: forward the news form to `POST /predict` and
//!   report the outcome to the user.
//! - **Guide confirmation flow**: acknowledge the onboarding guide via
//!   `POST /confirm_guide` and dismiss the guide modal on confirmed
//!   success.
//!
//! ## Architecture
//!
//! The crate is designed around the following abstractions:
//!
//! - `DetectorApi`: the backend operations, as a mockable trait
//! - `DetectorClient`: the reqwest-backed implementation
//! - `PageView`: the single view-update continuation the flows drive
//! - `run_submission_flow` / `run_confirmation_flow`: the flows themselves,
//!   each a single-shot cycle with an explicit `FlowOutcome`
//! - `ClientError`: normalized error handling with request context

// Re-export the backend client
pub mod client;
pub use client::{
    ConfirmGuideResponse, ConfirmStatus, DetectorApi, DetectorClient, DetectorClientBuilder,
    PredictResponse, Submission,
};

// Re-export configuration management
pub mod config;
pub use config::{BackendConfig, ConfigProvider, ConfigProviderExt};

// Re-export error handling
pub mod error;
pub use error::{ClientError, ErrorContext, Result};

// Re-export the page flows
pub mod flows;
pub use flows::{
    run_confirmation_flow, run_submission_flow, FlowOutcome, PLACEHOLDER_NOTICE, RETRY_NOTICE,
};

// Re-export the typed page bindings
pub mod view;
pub use view::{ConfirmControl, LoggingView, PageBindings, PageView, RecordingView, Visibility};

#[cfg(test)]
mod tests;

/// Create a new default client builder
pub fn client() -> DetectorClientBuilder {
    DetectorClientBuilder::new()
}
