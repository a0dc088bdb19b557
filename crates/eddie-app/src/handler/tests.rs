//! Tests for the update function and key handlers

use std::collections::HashMap;

use super::*;
use crate::input_key::InputKey;
use crate::state::{AppState, FormFocus, NoticeLevel, UiMode};
use eddie_core::{Anchor, FieldName, SubmissionStatus, SUBMISSION_DELAY};

/// State with a laid-out page, as after the first render
fn laid_out_state() -> AppState {
    let mut state = AppState::new();
    state.page.smooth_scroll = false;
    state.page.update_content_size(300, 40);
    state.page.set_anchors(HashMap::from([
        (Anchor::WhatIDo, 30),
        (Anchor::HowIWork, 60),
        (Anchor::Systems, 120),
        (Anchor::Contact, 240),
    ]));
    state
}

fn form_state(intent: &str, failure: &str, reality: &str) -> AppState {
    let mut state = laid_out_state();
    update(&mut state, Message::EnterForm);
    for (field, text) in FieldName::ALL.into_iter().zip([intent, failure, reality]) {
        state.form_focus = FormFocus::Field(field);
        for c in text.chars() {
            update(&mut state, Message::FormInput(c));
        }
    }
    state.form_focus = FormFocus::SubmitButton;
    state
}

/// Run key -> message -> update, returning the final result
fn press(state: &mut AppState, key: InputKey) -> UpdateResult {
    let mut result = update(state, Message::Key(key));
    while let Some(msg) = result.message.take() {
        result = update(state, msg);
    }
    result
}

// ─────────────────────────────────────────────────────────────────────────────
// Key mapping
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_browse_keys() {
    let state = AppState::new();
    assert_eq!(handle_key(&state, InputKey::Char('q')), Some(Message::Quit));
    assert_eq!(handle_key(&state, InputKey::CharCtrl('c')), Some(Message::Quit));
    assert_eq!(handle_key(&state, InputKey::Char('j')), Some(Message::ScrollDown));
    assert_eq!(handle_key(&state, InputKey::Up), Some(Message::ScrollUp));
    assert_eq!(handle_key(&state, InputKey::Char(' ')), Some(Message::PageDown));
    assert_eq!(handle_key(&state, InputKey::Char('G')), Some(Message::ScrollToBottom));
    assert_eq!(handle_key(&state, InputKey::Char('3')), Some(Message::FollowNavLink(2)));
    assert_eq!(
        handle_key(&state, InputKey::Char('c')),
        Some(Message::NavigateTo("contact".into()))
    );
    assert_eq!(
        handle_key(&state, InputKey::Tab),
        Some(Message::NavigateTo("contact".into()))
    );
    assert_eq!(handle_key(&state, InputKey::Esc), Some(Message::Quit));
    assert_eq!(handle_key(&state, InputKey::Char('z')), None);
}

#[test]
fn test_esc_dismisses_notice_before_quitting() {
    let mut state = form_state("", "", "");
    update(&mut state, Message::SubmitForm);
    press(&mut state, InputKey::Esc);
    assert_eq!(state.ui_mode, UiMode::Browse);
    assert!(state.notice.is_some());

    press(&mut state, InputKey::Esc);
    assert!(state.notice.is_none());
    assert!(!state.should_quit());

    press(&mut state, InputKey::Esc);
    assert!(state.should_quit());
}

#[test]
fn test_form_keys_edit_focused_field() {
    let mut state = AppState::new();
    state.ui_mode = UiMode::Form;
    assert_eq!(handle_key(&state, InputKey::Char('q')), Some(Message::FormInput('q')));
    assert_eq!(handle_key(&state, InputKey::Enter), Some(Message::FormNewline));
    assert_eq!(handle_key(&state, InputKey::Backspace), Some(Message::FormBackspace));
    assert_eq!(handle_key(&state, InputKey::Tab), Some(Message::FocusNext));
    assert_eq!(handle_key(&state, InputKey::Esc), Some(Message::LeaveForm));
    assert_eq!(handle_key(&state, InputKey::CharCtrl('s')), Some(Message::SubmitForm));

    state.form_focus = FormFocus::SubmitButton;
    assert_eq!(handle_key(&state, InputKey::Enter), Some(Message::SubmitForm));
    assert_eq!(handle_key(&state, InputKey::Char('x')), None);
}

#[test]
fn test_sent_panel_only_offers_reset() {
    let mut state = form_state("a", "b", "c");
    let id = match update(&mut state, Message::SubmitForm).action {
        Some(UpdateAction::ScheduleSubmission { id, .. }) => id,
        other => panic!("expected ScheduleSubmission, got {other:?}"),
    };
    update(&mut state, Message::SubmissionDelayElapsed { id });
    assert_eq!(state.form.status(), SubmissionStatus::Sent);

    assert_eq!(handle_key(&state, InputKey::Char('a')), None);
    assert_eq!(handle_key(&state, InputKey::Char('r')), Some(Message::ResetForm));
    assert_eq!(handle_key(&state, InputKey::Enter), Some(Message::ResetForm));
}

// ─────────────────────────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_navigate_to_unknown_anchor_leaves_offset() {
    let mut state = laid_out_state();
    update(&mut state, Message::ScrollDown);
    update(&mut state, Message::ScrollDown);

    let result = update(&mut state, Message::NavigateTo("does-not-exist".into()));

    assert!(result.message.is_none());
    assert!(result.action.is_none());
    assert_eq!(state.page.offset, 2);
    assert_eq!(state.ui_mode, UiMode::Browse);
}

#[test]
fn test_nav_link_scrolls_to_section() {
    let mut state = laid_out_state();
    press(&mut state, InputKey::Char('2'));
    assert_eq!(state.page.offset, 60);
    assert_eq!(state.ui_mode, UiMode::Browse);

    // Out of range link index is ignored
    update(&mut state, Message::FollowNavLink(9));
    assert_eq!(state.page.offset, 60);
}

#[test]
fn test_tab_scrolls_form_into_view() {
    let mut state = laid_out_state();

    press(&mut state, InputKey::Tab);

    assert_eq!(state.page.offset, 240);
    assert_eq!(state.ui_mode, UiMode::Form);
    assert_eq!(state.focused_field(), Some(FieldName::Intent));
}

#[test]
fn test_call_to_action_focuses_first_field() {
    let mut state = laid_out_state();
    state.form_focus = FormFocus::SubmitButton;

    press(&mut state, InputKey::Enter);

    assert_eq!(state.page.offset, 240);
    assert_eq!(state.ui_mode, UiMode::Form);
    assert_eq!(state.focused_field(), Some(FieldName::Intent));
}

#[test]
fn test_tick_advances_smooth_scroll() {
    let mut state = laid_out_state();
    state.page.smooth_scroll = true;
    update(&mut state, Message::NavigateTo("systems".into()));
    assert_eq!(state.page.offset, 0);

    for _ in 0..crate::page_view_state::SMOOTH_SCROLL_TICKS {
        update(&mut state, Message::Tick);
    }
    assert_eq!(state.page.offset, 120);
}

// ─────────────────────────────────────────────────────────────────────────────
// Form editing
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_typing_edits_only_focused_field() {
    let mut state = laid_out_state();
    update(&mut state, Message::NavigateTo("contact".into()));
    press(&mut state, InputKey::Char('h'));
    press(&mut state, InputKey::Char('i'));
    press(&mut state, InputKey::Enter);
    press(&mut state, InputKey::Char('!'));
    press(&mut state, InputKey::Backspace);

    assert_eq!(state.form.value(FieldName::Intent), "hi\n");
    assert_eq!(state.form.value(FieldName::Failure), "");

    update(&mut state, Message::FormClearField);
    assert_eq!(state.form.value(FieldName::Intent), "");
}

#[test]
fn test_input_on_submit_button_is_ignored() {
    let mut state = form_state("a", "b", "c");
    update(&mut state, Message::FormInput('z'));
    assert_eq!(state.form.value(FieldName::Reality), "c");
}

// ─────────────────────────────────────────────────────────────────────────────
// Submission
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_submit_schedules_delivery() {
    let mut state = form_state("build a router", "loses packets", "2 weeks, $5k");

    let result = update(&mut state, Message::SubmitForm);

    assert_eq!(state.form.status(), SubmissionStatus::Sending);
    match result.action {
        Some(UpdateAction::ScheduleSubmission { delay, .. }) => {
            assert_eq!(delay, SUBMISSION_DELAY)
        }
        other => panic!("expected ScheduleSubmission, got {other:?}"),
    }
}

#[test]
fn test_rejected_submit_focuses_missing_field() {
    let mut state = form_state("a", "", "c");

    let result = update(&mut state, Message::SubmitForm);

    assert!(result.action.is_none());
    assert_eq!(state.form.status(), SubmissionStatus::Idle);
    assert_eq!(state.form_focus, FormFocus::Field(FieldName::Failure));
    assert_eq!(state.invalid_field, Some(FieldName::Failure));
    let notice = state.notice.as_ref().expect("notice");
    assert_eq!(notice.level, NoticeLevel::Info);
    assert!(notice.text.contains("Please fill out this field."));

    // Typing into the flagged field clears the flag and its notice
    update(&mut state, Message::FormInput('x'));
    assert_eq!(state.invalid_field, None);
    assert!(state.notice.is_none());
}

#[test]
fn test_submit_while_sending_has_no_action() {
    let mut state = form_state("a", "b", "c");
    update(&mut state, Message::SubmitForm);

    let result = update(&mut state, Message::SubmitForm);
    assert!(result.action.is_none());
    assert_eq!(state.form.status(), SubmissionStatus::Sending);
}

#[test]
fn test_delay_elapsed_requests_delivery() {
    let mut state = form_state("a", "b", "c");
    let Some(UpdateAction::ScheduleSubmission { id, .. }) =
        update(&mut state, Message::SubmitForm).action
    else {
        panic!("expected ScheduleSubmission");
    };

    let result = update(&mut state, Message::SubmissionDelayElapsed { id });
    match result.action {
        Some(UpdateAction::DeliverSubmission(submission)) => {
            assert_eq!(submission.id, id);
            assert_eq!(submission.fields.intent, "a");
        }
        other => panic!("expected DeliverSubmission, got {other:?}"),
    }
    assert_eq!(state.form.status(), SubmissionStatus::Sent);
}

#[test]
fn test_reset_returns_focus_to_first_field() {
    let mut state = form_state("a", "b", "c");
    let Some(UpdateAction::ScheduleSubmission { id, .. }) =
        update(&mut state, Message::SubmitForm).action
    else {
        panic!("expected ScheduleSubmission");
    };
    update(&mut state, Message::SubmissionDelayElapsed { id });

    update(&mut state, Message::ResetForm);
    assert_eq!(state.form.status(), SubmissionStatus::Idle);
    assert_eq!(state.form_focus, FormFocus::Field(FieldName::Intent));
    assert_eq!(state.form.value(FieldName::Reality), "c");
}

#[test]
fn test_reset_clears_delivery_failure() {
    let mut state = form_state("a", "b", "c");
    let Some(UpdateAction::ScheduleSubmission { id, .. }) =
        update(&mut state, Message::SubmitForm).action
    else {
        panic!("expected ScheduleSubmission");
    };
    update(&mut state, Message::SubmissionDelayElapsed { id });
    update(
        &mut state,
        Message::SubmissionDeliveryFailed {
            id,
            error: "offline".into(),
        },
    );
    let notice = state.notice.as_ref().expect("notice");
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.text.contains("offline"));

    update(&mut state, Message::ResetForm);
    assert_eq!(state.form.status(), SubmissionStatus::Idle);
    assert!(state.notice.is_none());
}

#[test]
fn test_quit_cancels_pending_submission() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::Quit);
    assert!(state.should_quit());
    assert_eq!(result.action, Some(UpdateAction::CancelPendingSubmission));
}

#[test]
fn test_dismiss_notice() {
    let mut state = form_state("", "", "");
    update(&mut state, Message::SubmitForm);
    assert!(state.notice.is_some());
    update(&mut state, Message::DismissNotice);
    assert!(state.notice.is_none());
}
