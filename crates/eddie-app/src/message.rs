//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use eddie_core::SubmissionId;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for animations (smooth scroll)
    Tick,

    /// Leave the page
    Quit,

    // ─────────────────────────────────────────────────────────
    // Page Scrolling
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,

    // ─────────────────────────────────────────────────────────
    // Anchor Navigation
    // ─────────────────────────────────────────────────────────
    /// Scroll to an anchor by identifier (`"systems"`, `"#contact"`, ...)
    NavigateTo(String),

    /// Follow the header link at this index
    FollowNavLink(usize),

    // ─────────────────────────────────────────────────────────
    // Contact Form Editing
    // ─────────────────────────────────────────────────────────
    /// Move keyboard focus into the contact form
    EnterForm,
    /// Return keyboard focus to page scrolling
    LeaveForm,
    FocusNext,
    FocusPrevious,
    /// Append a character to the focused field
    FormInput(char),
    FormBackspace,
    FormNewline,
    FormClearField,

    // ─────────────────────────────────────────────────────────
    // Contact Form Submission
    // ─────────────────────────────────────────────────────────
    SubmitForm,
    /// The 1500 ms delivery delay for `id` ran out
    SubmissionDelayElapsed { id: SubmissionId },
    /// Back to an empty-status form after the sent panel
    ResetForm,
    /// The sink accepted the submission
    SubmissionDelivered { id: SubmissionId },
    /// The sink rejected the submission; status stays `Sent`
    SubmissionDeliveryFailed { id: SubmissionId, error: String },

    DismissNotice,
}
