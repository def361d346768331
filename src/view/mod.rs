//! Typed page bindings
//!
//! The detection page is driven through typed handles instead of runtime
//! identifier lookups: controls that may be absent are explicit `Option`s,
//! and every DOM update the flows perform goes through the `PageView`
//! trait, so embedders decide how notices and visibility changes are
//! rendered.

use std::sync::Mutex;

use log::info;

/// Visibility of a page element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Element is shown
    Visible,
    /// Element is hidden (display: none on the page)
    Hidden,
}

/// The single update continuation the flows drive.
///
/// Implementations render user-facing notices and toggle the guide modal.
pub trait PageView: Send + Sync {
    /// Present a notice to the user
    fn show_notice(&self, notice: &str);

    /// Set the guide modal's visibility
    fn set_guide_visibility(&self, visibility: Visibility);
}

/// Log-backed view for headless embedders
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingView;

impl PageView for LoggingView {
    fn show_notice(&self, notice: &str) {
        info!("notice: {}", notice);
    }

    fn set_guide_visibility(&self, visibility: Visibility) {
        info!("guide modal -> {:?}", visibility);
    }
}

/// In-memory view that records every update it receives.
///
/// Useful for tests and for embedders that render asynchronously.
#[derive(Debug, Default)]
pub struct RecordingView {
    notices: Mutex<Vec<String>>,
    guide_visibility: Mutex<Option<Visibility>>,
}

impl RecordingView {
    /// Create a new empty recording view
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices shown so far, in order
    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }

    /// The last guide visibility set, if any
    pub fn guide_visibility(&self) -> Option<Visibility> {
        *self.guide_visibility.lock().unwrap()
    }
}

impl PageView for RecordingView {
    fn show_notice(&self, notice: &str) {
        self.notices.lock().unwrap().push(notice.to_string());
    }

    fn set_guide_visibility(&self, visibility: Visibility) {
        *self.guide_visibility.lock().unwrap() = Some(visibility);
    }
}

/// Handle for the guide confirmation control.
///
/// The control only exists on pages still showing the onboarding guide;
/// bindings carry it as an `Option` so its absence is a typed state, not a
/// silent runtime no-op.
#[derive(Debug, Clone)]
pub struct ConfirmControl {
    id: String,
}

impl ConfirmControl {
    /// Bind a confirmation control by its page identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// The page identifier this control was bound to
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Typed bindings for the detection page controls
#[derive(Debug, Clone, Default)]
pub struct PageBindings {
    confirm_control: Option<ConfirmControl>,
}

impl PageBindings {
    /// Bindings for a page without the confirmation control
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the guide confirmation control
    pub fn with_confirm_control(mut self, control: ConfirmControl) -> Self {
        self.confirm_control = Some(control);
        self
    }

    /// The confirmation control, if the page has one
    pub fn confirm_control(&self) -> Option<&ConfirmControl> {
        self.confirm_control.as_ref()
    }
}
