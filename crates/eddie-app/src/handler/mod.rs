//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per UI mode
//! - `navigation`: Scrolling and anchor navigation
//! - `form`: Contact form editing and submission

pub(crate) mod form;
pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use std::time::Duration;

use crate::message::Message;
use eddie_core::{Submission, SubmissionId};

pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Start the one-shot delivery timer for a submission.
    ///
    /// Replaces any timer still outstanding; at most one is ever pending.
    ScheduleSubmission { id: SubmissionId, delay: Duration },

    /// Hand an accepted submission to the configured sink
    DeliverSubmission(Submission),

    /// Abort the outstanding delivery timer (quit/teardown)
    CancelPendingSubmission,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
