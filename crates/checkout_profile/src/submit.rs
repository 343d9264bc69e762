//! Submission flow.
//!
//! ```text
//!   Editing --submit (invalid)--> Editing        all fields blurred, no call
//!   Editing --submit (valid)----> Submitting     both calls issued together
//!   Submitting --both succeed---> Editing        + navigate to next step
//!   Submitting --any failure----> Editing        + submit_failed banner
//! ```
//!
//! `run_submission` waits for both calls (join, not race) before deciding,
//! and a failure of either one fails the whole attempt.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::SubmitError;
use crate::services::{
    PreferencesService, PreferencesUpdate, ProfileService, ProfileUpdate, UpdateResponse,
};

/// Correlates a submission with its result. Unique per form session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmitTicket(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Editing,
    Submitting(SubmitTicket),
}

impl SubmitPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitPhase::Submitting(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    pub profile: ProfileUpdate,
    pub preferences: PreferencesUpdate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded,
    Failed(SubmitError),
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Succeeded)
    }
}

fn call_ok(call: &str, reply: &Result<UpdateResponse, SubmitError>) -> bool {
    match reply {
        Ok(UpdateResponse { success: true }) => true,
        Ok(UpdateResponse { success: false }) => {
            warn!(call, "remote call reported failure");
            false
        }
        Err(e) => {
            warn!(call, error = %e, "remote call errored");
            false
        }
    }
}

/// Fold both replies into one outcome.
pub fn reconcile(
    profile: Result<UpdateResponse, SubmitError>,
    preferences: Result<UpdateResponse, SubmitError>,
) -> SubmitOutcome {
    let profile_ok = call_ok("set_profile", &profile);
    let preferences_ok = call_ok("set_preferences", &preferences);
    if profile_ok && preferences_ok {
        SubmitOutcome::Succeeded
    } else {
        SubmitOutcome::Failed(SubmitError::SubmitFailed {
            profile_ok,
            preferences_ok,
        })
    }
}

/// Issue both remote calls concurrently and wait for the slower one.
pub async fn run_submission(
    profile: &dyn ProfileService,
    preferences: &dyn PreferencesService,
    request: SubmitRequest,
) -> SubmitOutcome {
    info!("submitting profile and preferences");
    let (p, q) = tokio::join!(
        profile.set_profile(request.profile),
        preferences.set_preferences(request.preferences)
    );
    let outcome = reconcile(p, q);
    info!(success = outcome.is_success(), "submission finished");
    outcome
}
