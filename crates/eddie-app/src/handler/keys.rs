//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, FormFocus, UiMode};
use eddie_core::Anchor;

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Browse => handle_key_browse(state, key),
        UiMode::Form => handle_key_form(state, key),
    }
}

/// Handle key events while reading the page
fn handle_key_browse(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Esc first clears a notice covering the key hints
        InputKey::Esc if state.notice.is_some() => Some(Message::DismissNotice),
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // ─────────────────────────────────────────────────────────
        // Scrolling
        // ─────────────────────────────────────────────────────────
        InputKey::Char('j') | InputKey::Down => Some(Message::ScrollDown),
        InputKey::Char('k') | InputKey::Up => Some(Message::ScrollUp),
        InputKey::Char(' ') | InputKey::PageDown | InputKey::CharCtrl('d') => {
            Some(Message::PageDown)
        }
        InputKey::Char('b') | InputKey::PageUp | InputKey::CharCtrl('u') => Some(Message::PageUp),
        InputKey::Char('g') | InputKey::Home => Some(Message::ScrollToTop),
        InputKey::Char('G') | InputKey::End => Some(Message::ScrollToBottom),

        // ─────────────────────────────────────────────────────────
        // Header links (1-4) and the hero call to action
        // ─────────────────────────────────────────────────────────
        InputKey::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            Some(Message::FollowNavLink(index))
        }
        InputKey::Char('c') | InputKey::Enter => {
            Some(Message::NavigateTo(Anchor::Contact.id().to_string()))
        }
        InputKey::Tab => Some(Message::NavigateTo(Anchor::Contact.id().to_string())),

        _ => None,
    }
}

/// Handle key events while the contact form has focus
fn handle_key_form(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::Esc => return Some(Message::LeaveForm),
        InputKey::PageDown => return Some(Message::PageDown),
        InputKey::PageUp => return Some(Message::PageUp),
        _ => {}
    }

    // The sent panel replaces the inputs; only reset is offered
    if state.form.status().is_sent() {
        return match key {
            InputKey::Enter | InputKey::Char('r') => Some(Message::ResetForm),
            _ => None,
        };
    }

    match key {
        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrevious),
        InputKey::CharCtrl('s') => Some(Message::SubmitForm),

        _ => match state.form_focus {
            FormFocus::SubmitButton => match key {
                InputKey::Enter | InputKey::Char(' ') => Some(Message::SubmitForm),
                InputKey::Up => Some(Message::FocusPrevious),
                _ => None,
            },
            FormFocus::Field(_) => handle_key_field(key),
        },
    }
}

/// Text editing inside a focused field
fn handle_key_field(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c) => Some(Message::FormInput(c)),
        InputKey::Enter => Some(Message::FormNewline),
        InputKey::Backspace => Some(Message::FormBackspace),
        InputKey::CharCtrl('u') => Some(Message::FormClearField),
        InputKey::Down => Some(Message::FocusNext),
        InputKey::Up => Some(Message::FocusPrevious),
        _ => None,
    }
}
