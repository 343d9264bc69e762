/*!
Submit executor.

Runs the `Effect::Submit` work off the caller: each request is spawned on the
Tokio runtime, `run_submission` joins both remote calls, and the outcome is
sent back as `FormEvent::SubmitFinished` on the event channel.

Guarantees:
- In-flight submissions are never cancelled.
- If the receiving form session is gone (receiver dropped), the result is
  discarded; nothing is written anywhere.
- `SubmitExecutor` is `Clone` (clones two `Arc`s and the sender).
*/

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::effects::FormEvent;
use crate::services::{PreferencesService, ProfileService};
use crate::submit::{SubmitRequest, SubmitTicket, run_submission};

#[derive(Clone)]
pub struct SubmitExecutor {
    profile: Arc<dyn ProfileService>,
    preferences: Arc<dyn PreferencesService>,
    event_tx: mpsc::UnboundedSender<FormEvent>,
}

impl SubmitExecutor {
    pub fn new(
        profile: Arc<dyn ProfileService>,
        preferences: Arc<dyn PreferencesService>,
        event_tx: mpsc::UnboundedSender<FormEvent>,
    ) -> Self {
        Self {
            profile,
            preferences,
            event_tx,
        }
    }

    /// Create an executor together with the receiving end of its event channel.
    pub fn with_channel(
        profile: Arc<dyn ProfileService>,
        preferences: Arc<dyn PreferencesService>,
    ) -> (Self, mpsc::UnboundedReceiver<FormEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(profile, preferences, tx), rx)
    }

    /// Schedule a submission. Must be called inside a Tokio runtime.
    pub fn spawn(&self, ticket: SubmitTicket, request: SubmitRequest) -> JoinHandle<()> {
        let profile = Arc::clone(&self.profile);
        let preferences = Arc::clone(&self.preferences);
        let tx = self.event_tx.clone();
        info!(ticket = ticket.0, "submission scheduled");
        tokio::spawn(async move {
            let outcome = run_submission(profile.as_ref(), preferences.as_ref(), request).await;
            if tx
                .send(FormEvent::SubmitFinished { ticket, outcome })
                .is_err()
            {
                debug!(ticket = ticket.0, "form session closed; submit result dropped");
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{
        LoopbackScript, LoopbackServices, PreferencesUpdate, ProfileUpdate, RemoteBehavior,
    };
    use crate::state::ProfileValues;
    use crate::submit::SubmitOutcome;

    fn request() -> SubmitRequest {
        SubmitRequest {
            profile: ProfileUpdate {
                values: ProfileValues::default(),
                email: None,
                persist_info: false,
            },
            preferences: PreferencesUpdate {
                opt_in_newsletter: false,
            },
        }
    }

    fn executor(
        script: LoopbackScript,
    ) -> (
        SubmitExecutor,
        mpsc::UnboundedReceiver<FormEvent>,
        Arc<LoopbackServices>,
    ) {
        let services = Arc::new(LoopbackServices::new(script));
        let (exec, rx) = SubmitExecutor::with_channel(services.clone(), services.clone());
        (exec, rx, services)
    }

    #[tokio::test]
    async fn reports_outcome_with_ticket() {
        let (exec, mut rx, _services) = executor(LoopbackScript {
            profile: RemoteBehavior::Reject,
            ..Default::default()
        });
        exec.spawn(SubmitTicket(7), request());
        let event = rx.recv().await.expect("event");
        match event {
            FormEvent::SubmitFinished { ticket, outcome } => {
                assert_eq!(ticket, SubmitTicket(7));
                assert!(matches!(outcome, SubmitOutcome::Failed(_)));
            }
        }
    }

    #[tokio::test]
    async fn dropped_receiver_discards_result() {
        let (exec, rx, services) = executor(LoopbackScript {
            profile_delay_ms: 10,
            ..Default::default()
        });
        let handle = exec.spawn(SubmitTicket(1), request());
        drop(rx);
        handle.await.expect("task completes without panicking");
        // the call itself was not abandoned
        assert_eq!(services.profile_calls().len(), 1);
    }
}
