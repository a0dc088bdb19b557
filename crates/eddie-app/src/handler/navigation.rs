//! Scroll and anchor navigation handlers

use crate::state::{AppState, FormFocus, UiMode};
use eddie_core::{Anchor, FieldName, NAV_LINKS};
use tracing::debug;

use super::UpdateResult;

pub fn handle_scroll_up(state: &mut AppState) -> UpdateResult {
    state.page.scroll_up(1);
    UpdateResult::none()
}

pub fn handle_scroll_down(state: &mut AppState) -> UpdateResult {
    state.page.scroll_down(1);
    UpdateResult::none()
}

pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    state.page.page_up();
    UpdateResult::none()
}

pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    state.page.page_down();
    UpdateResult::none()
}

pub fn handle_scroll_to_top(state: &mut AppState) -> UpdateResult {
    state.page.scroll_to_top();
    UpdateResult::none()
}

pub fn handle_scroll_to_bottom(state: &mut AppState) -> UpdateResult {
    state.page.scroll_to_bottom();
    UpdateResult::none()
}

/// Scroll to an anchor; landing on the contact section focuses the first field
pub fn handle_navigate_to(state: &mut AppState, id: &str) -> UpdateResult {
    if state.page.navigate_to(id) == Some(Anchor::Contact) {
        state.ui_mode = UiMode::Form;
        state.form_focus = FormFocus::Field(FieldName::Intent);
    }
    UpdateResult::none()
}

pub fn handle_follow_nav_link(state: &mut AppState, index: usize) -> UpdateResult {
    match NAV_LINKS.get(index) {
        Some(link) => {
            debug!("Following nav link '{}'", link.label);
            handle_navigate_to(state, link.anchor.id())
        }
        None => UpdateResult::none(),
    }
}
