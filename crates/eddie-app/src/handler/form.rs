//! Contact form handlers
//!
//! Every status change goes through [`ContactForm::dispatch`]; these handlers
//! translate its effects into UI feedback and event loop actions.

use crate::state::{AppState, FormFocus, Notice, UiMode};
use eddie_core::content::REQUIRED_FIELD_HINT;
use eddie_core::{FieldName, FormEffect, FormEvent, SubmissionId};
use tracing::{info, warn};

use super::{UpdateAction, UpdateResult};

// ─────────────────────────────────────────────────────────────────────────────
// Focus
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_enter_form(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Form;
    UpdateResult::none()
}

pub fn handle_leave_form(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Browse;
    UpdateResult::none()
}

pub fn handle_focus_next(state: &mut AppState) -> UpdateResult {
    state.form_focus = state.form_focus.next();
    UpdateResult::none()
}

pub fn handle_focus_previous(state: &mut AppState) -> UpdateResult {
    state.form_focus = state.form_focus.previous();
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Editing
// ─────────────────────────────────────────────────────────────────────────────

fn edit_focused(state: &mut AppState, edit: impl FnOnce(&mut String)) -> UpdateResult {
    let Some(field) = state.form_focus.field() else {
        return UpdateResult::none();
    };
    let mut value = state.form.value(field).to_string();
    edit(&mut value);
    if state.invalid_field == Some(field) && !value.is_empty() {
        state.invalid_field = None;
        state.notice = None;
    }
    apply(state, FormEvent::Edit { field, value })
}

pub fn handle_input(state: &mut AppState, c: char) -> UpdateResult {
    edit_focused(state, |value| value.push(c))
}

pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    edit_focused(state, |value| {
        value.pop();
    })
}

pub fn handle_clear_field(state: &mut AppState) -> UpdateResult {
    edit_focused(state, String::clear)
}

// ─────────────────────────────────────────────────────────────────────────────
// Submission
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    apply(state, FormEvent::Submit)
}

pub fn handle_delay_elapsed(state: &mut AppState, id: SubmissionId) -> UpdateResult {
    apply(state, FormEvent::DelayElapsed { id })
}

pub fn handle_reset(state: &mut AppState) -> UpdateResult {
    let result = apply(state, FormEvent::Reset);
    if state.form.status().is_idle() {
        state.form_focus = FormFocus::Field(FieldName::Intent);
        state.notice = None;
    }
    result
}

pub fn handle_delivered(_state: &mut AppState, id: SubmissionId) -> UpdateResult {
    info!("Submission {} delivered", id);
    UpdateResult::none()
}

/// The sent panel stays up; the failure is only reported
pub fn handle_delivery_failed(
    state: &mut AppState,
    id: SubmissionId,
    error: String,
) -> UpdateResult {
    warn!("Submission {} was not delivered: {}", id, error);
    state.set_notice(Notice::error(format!("Transmission {id} failed: {error}")));
    UpdateResult::none()
}

/// Run an event through the form state machine and map its effect
fn apply(state: &mut AppState, event: FormEvent) -> UpdateResult {
    let before = state.form.status();
    let effect = state.form.dispatch(event);
    let after = state.form.status();
    if before != after {
        info!("Contact form {} -> {}", before, after);
    }

    match effect {
        None => UpdateResult::none(),
        Some(FormEffect::ScheduleDelivery { id, delay }) => {
            state.invalid_field = None;
            state.notice = None;
            UpdateResult::action(UpdateAction::ScheduleSubmission { id, delay })
        }
        Some(FormEffect::Deliver(submission)) => {
            UpdateResult::action(UpdateAction::DeliverSubmission(submission))
        }
        Some(FormEffect::Rejected { missing }) => {
            state.ui_mode = UiMode::Form;
            state.form_focus = FormFocus::Field(missing);
            state.invalid_field = Some(missing);
            state.set_notice(Notice::info(format!(
                "{}: {}",
                missing.label(),
                REQUIRED_FIELD_HINT
            )));
            UpdateResult::none()
        }
    }
}
