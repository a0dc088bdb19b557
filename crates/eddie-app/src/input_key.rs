//! Key input independent of the terminal library.
//!
//! The TUI converts crossterm key events into [`InputKey`] at its boundary so
//! the handlers in this crate never see crossterm types.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character
    Char(char),
    /// Character with Ctrl held (Ctrl+c, Ctrl+s, ...)
    CharCtrl(char),

    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
}

impl InputKey {
    /// Whether the key produces text inside a form field
    pub fn is_text(&self) -> bool {
        matches!(self, InputKey::Char(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_and_plain_chars_differ() {
        assert_ne!(InputKey::CharCtrl('s'), InputKey::Char('s'));
        assert!(InputKey::Char('s').is_text());
        assert!(!InputKey::CharCtrl('s').is_text());
        assert!(!InputKey::Enter.is_text());
    }
}
