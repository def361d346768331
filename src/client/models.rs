//! Data models for the detection backend API
//!
//! Request and response shapes for the two endpoints the detection page
//! talks to.

use serde::Deserialize;

/// Form fields gathered from the news submission form at submit time.
///
/// Field names are dictated by the page markup, not validated here;
/// `news_text` carries the article body on the current page. An empty
/// submission is legal and is still sent to the backend.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    fields: Vec<(String, String)>,
}

impl Submission {
    /// Create an empty submission
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor for the single-field news form
    pub fn news_text(text: impl Into<String>) -> Self {
        Self::new().field("news_text", text)
    }

    /// Add a form field. Repeated names are kept in insertion order,
    /// matching a browser form post.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// The collected fields, in insertion order
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Whether no fields have been collected
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Response to `POST /predict`.
///
/// The page does not render these fields yet; the submission flow shows a
/// fixed placeholder notice instead. All fields are optional so any JSON
/// object the backend returns parses cleanly.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictResponse {
    /// Backend-reported status, e.g. "success"
    #[serde(default)]
    pub status: Option<String>,

    /// Human-readable message
    #[serde(default)]
    pub message: Option<String>,
}

/// Response to `POST /confirm_guide`
#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmGuideResponse {
    /// Confirmation status reported by the backend
    pub status: ConfirmStatus,
}

/// Guide confirmation status.
///
/// Only the `"success"` sentinel dismisses the guide modal; any other
/// value is carried through but ignored by the confirmation flow.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ConfirmStatus {
    /// The backend recorded the confirmation
    Success,
    /// Any other status value
    Other(String),
}

impl ConfirmStatus {
    /// Whether this is the success sentinel
    pub fn is_success(&self) -> bool {
        matches!(self, ConfirmStatus::Success)
    }
}

impl From<String> for ConfirmStatus {
    fn from(value: String) -> Self {
        if value == "success" {
            ConfirmStatus::Success
        } else {
            ConfirmStatus::Other(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_field_order() {
        let submission = Submission::new()
            .field("news_text", "some article")
            .field("source", "unknown");

        assert_eq!(submission.fields().len(), 2);
        assert_eq!(submission.fields()[0].0, "news_text");
        assert_eq!(submission.fields()[1].1, "unknown");
        assert!(!submission.is_empty());
        assert!(Submission::new().is_empty());
    }

    #[test]
    fn test_confirm_status_sentinel() {
        assert_eq!(ConfirmStatus::from("success".to_string()), ConfirmStatus::Success);
        assert_eq!(
            ConfirmStatus::from("pending".to_string()),
            ConfirmStatus::Other("pending".to_string())
        );
        assert!(ConfirmStatus::Success.is_success());
        assert!(!ConfirmStatus::Other("done".to_string()).is_success());
    }
}
