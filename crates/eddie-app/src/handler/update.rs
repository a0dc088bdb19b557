//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{form, keys::handle_key, navigation, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.quit();
            UpdateResult::action(UpdateAction::CancelPendingSubmission)
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.page.tick();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Scroll & Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => navigation::handle_scroll_up(state),
        Message::ScrollDown => navigation::handle_scroll_down(state),
        Message::PageUp => navigation::handle_page_up(state),
        Message::PageDown => navigation::handle_page_down(state),
        Message::ScrollToTop => navigation::handle_scroll_to_top(state),
        Message::ScrollToBottom => navigation::handle_scroll_to_bottom(state),
        Message::NavigateTo(id) => navigation::handle_navigate_to(state, &id),
        Message::FollowNavLink(index) => navigation::handle_follow_nav_link(state, index),

        // ─────────────────────────────────────────────────────────
        // Contact Form Messages
        // ─────────────────────────────────────────────────────────
        Message::EnterForm => form::handle_enter_form(state),
        Message::LeaveForm => form::handle_leave_form(state),
        Message::FocusNext => form::handle_focus_next(state),
        Message::FocusPrevious => form::handle_focus_previous(state),
        Message::FormInput(c) => form::handle_input(state, c),
        Message::FormBackspace => form::handle_backspace(state),
        Message::FormNewline => form::handle_input(state, '\n'),
        Message::FormClearField => form::handle_clear_field(state),
        Message::SubmitForm => form::handle_submit(state),
        Message::SubmissionDelayElapsed { id } => form::handle_delay_elapsed(state, id),
        Message::ResetForm => form::handle_reset(state),
        Message::SubmissionDelivered { id } => form::handle_delivered(state, id),
        Message::SubmissionDeliveryFailed { id, error } => {
            form::handle_delivery_failed(state, id, error)
        }

        Message::DismissNotice => {
            state.notice = None;
            UpdateResult::none()
        }
    }
}
