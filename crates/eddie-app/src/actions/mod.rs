//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::message::Message;
use crate::sink::SubmissionSink;
use crate::UpdateAction;
use eddie_core::{Submission, SubmissionId};

/// Owns the one-shot delivery timer.
///
/// At most one timer is outstanding. Scheduling again, [`cancel`] and drop
/// all abort the previous one.
///
/// [`cancel`]: SubmissionScheduler::cancel
#[derive(Debug, Default)]
pub struct SubmissionScheduler {
    pending: Option<(SubmissionId, JoinHandle<()>)>,
}

impl SubmissionScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send `SubmissionDelayElapsed { id }` after `delay`
    pub fn schedule(&mut self, id: SubmissionId, delay: Duration, msg_tx: mpsc::Sender<Message>) {
        self.cancel();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if msg_tx
                .send(Message::SubmissionDelayElapsed { id })
                .await
                .is_err()
            {
                debug!("Delay for submission {} elapsed after shutdown", id);
            }
        });
        debug!("Scheduled submission {} in {:?}", id, delay);
        self.pending = Some((id, handle));
    }

    /// Abort the outstanding timer, if any
    pub fn cancel(&mut self) {
        if let Some((id, handle)) = self.pending.take() {
            if !handle.is_finished() {
                handle.abort();
                debug!("Cancelled pending submission {}", id);
            }
        }
    }

    /// Submission whose timer has not fired yet
    pub fn pending_id(&self) -> Option<SubmissionId> {
        self.pending
            .as_ref()
            .filter(|(_, handle)| !handle.is_finished())
            .map(|(id, _)| *id)
    }
}

impl Drop for SubmissionScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Execute an action, spawning background tasks where needed
pub fn handle_action<S>(
    action: UpdateAction,
    msg_tx: &mpsc::Sender<Message>,
    sink: &Arc<S>,
    scheduler: &mut SubmissionScheduler,
) where
    S: SubmissionSink + Sync + 'static,
{
    match action {
        UpdateAction::ScheduleSubmission { id, delay } => {
            scheduler.schedule(id, delay, msg_tx.clone());
        }

        UpdateAction::DeliverSubmission(submission) => {
            spawn_delivery(submission, msg_tx.clone(), Arc::clone(sink));
        }

        UpdateAction::CancelPendingSubmission => {
            scheduler.cancel();
        }
    }
}

/// Hand a submission to the sink and report the outcome back to the loop
fn spawn_delivery<S>(submission: Submission, msg_tx: mpsc::Sender<Message>, sink: Arc<S>)
where
    S: SubmissionSink + Sync + 'static,
{
    tokio::spawn(async move {
        let id = submission.id;
        let message = match sink.deliver(submission).await {
            Ok(()) => Message::SubmissionDelivered { id },
            Err(e) => {
                warn!("Sink '{}' failed for submission {}: {}", sink.name(), id, e);
                Message::SubmissionDeliveryFailed {
                    id,
                    error: e.to_string(),
                }
            }
        };
        let _ = msg_tx.send(message).await;
    });
}
