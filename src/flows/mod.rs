//! The page interaction flows
//!
//! Two independent flows, both single-shot request/response cycles ending
//! in a view update:
//!
//! - the submission flow forwards the news form to `/predict` and reports
//!   the outcome to the user;
//! - the confirmation flow acknowledges the onboarding guide via
//!   `/confirm_guide` and hides the guide modal on confirmed success.
//!
//! The flows share no state, so requests from both may be in flight at the
//! same time without coordination. Every terminal state is an explicit
//! `FlowOutcome` branch, including timeouts.

use log::{debug, error, warn};

use crate::client::{DetectorApi, Submission};
use crate::view::{ConfirmControl, PageView, Visibility};

/// Fixed notice shown for any successful predict response. Real result
/// rendering is not specified yet.
pub const PLACEHOLDER_NOTICE: &str = "Detection is not implemented yet";

/// Generic notice shown when the submission flow fails
pub const RETRY_NOTICE: &str = "Something went wrong, please try again later";

/// Terminal outcome of a flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    /// The request completed and the view was updated accordingly
    Completed,
    /// The request failed
    Failed,
    /// The request hit the configured timeout
    TimedOut,
    /// The flow did not run (its control is absent from the page)
    Skipped,
}

/// Run the news submission flow.
///
/// The flow consumes the submission snapshot and performs the request
/// itself, so there is no native form navigation to suppress; this holds
/// for every submission, including an empty one. On success the user sees
/// the placeholder notice regardless of the response content; on failure
/// they see the retry notice and the diagnostic goes to the log.
pub async fn run_submission_flow<A, V>(api: &A, view: &V, submission: Submission) -> FlowOutcome
where
    A: DetectorApi + ?Sized,
    V: PageView + ?Sized,
{
    debug!("submitting news form ({} fields)", submission.fields().len());

    match api.predict(submission).await {
        Ok(_response) => {
            // Response fields are parsed but not rendered yet
            view.show_notice(PLACEHOLDER_NOTICE);
            FlowOutcome::Completed
        }
        Err(err) if err.is_timeout() => {
            warn!("predict request timed out: {}", err);
            view.show_notice(RETRY_NOTICE);
            FlowOutcome::TimedOut
        }
        Err(err) => {
            error!("predict request failed: {}", err);
            view.show_notice(RETRY_NOTICE);
            FlowOutcome::Failed
        }
    }
}

/// Run the guide confirmation flow.
///
/// Pages without the confirmation control skip the flow entirely and no
/// request is sent. The guide modal is hidden only when the backend
/// reports the success sentinel; any other status leaves the view
/// untouched. Failures stay invisible to the user but are logged for
/// operators.
pub async fn run_confirmation_flow<A, V>(
    api: &A,
    view: &V,
    control: Option<&ConfirmControl>,
) -> FlowOutcome
where
    A: DetectorApi + ?Sized,
    V: PageView + ?Sized,
{
    let Some(control) = control else {
        debug!("no confirmation control bound, skipping guide confirmation");
        return FlowOutcome::Skipped;
    };

    debug!("confirming guide via control '{}'", control.id());

    match api.confirm_guide().await {
        Ok(response) if response.status.is_success() => {
            view.set_guide_visibility(Visibility::Hidden);
            FlowOutcome::Completed
        }
        Ok(response) => {
            debug!("guide not confirmed (status {:?}), leaving modal as is", response.status);
            FlowOutcome::Completed
        }
        Err(err) if err.is_timeout() => {
            warn!("confirm_guide request timed out: {}", err);
            FlowOutcome::TimedOut
        }
        Err(err) => {
            warn!("confirm_guide request failed: {}", err);
            FlowOutcome::Failed
        }
    }
}
