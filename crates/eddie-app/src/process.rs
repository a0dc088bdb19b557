//! Message processing
//!
//! Runs messages through the TEA update function and hands the resulting
//! actions to the action handlers.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::actions::{handle_action, SubmissionScheduler};
use crate::handler;
use crate::message::Message;
use crate::sink::SubmissionSink;
use crate::state::AppState;

/// Process a message and every follow-up message it produces
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    sink: &Arc<S>,
    scheduler: &mut SubmissionScheduler,
) where
    S: SubmissionSink + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx, sink, scheduler);
        }

        msg = result.message;
    }
}
