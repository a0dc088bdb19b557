//! Application state (Model in TEA pattern)

use eddie_core::{Catalog, ContactForm, FieldName};

use crate::config::Settings;
use crate::page_view_state::PageViewState;

/// Where keyboard input goes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UiMode {
    /// Keys scroll and navigate the page
    #[default]
    Browse,
    /// Keys edit the contact form
    Form,
}

/// Focusable controls inside the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(FieldName),
    SubmitButton,
}

impl Default for FormFocus {
    fn default() -> Self {
        FormFocus::Field(FieldName::Intent)
    }
}

impl FormFocus {
    /// Tab order: the three fields, then the submit button
    pub fn next(self) -> Self {
        match self {
            FormFocus::Field(FieldName::Reality) => FormFocus::SubmitButton,
            FormFocus::Field(field) => FormFocus::Field(field.next()),
            FormFocus::SubmitButton => FormFocus::Field(FieldName::Intent),
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FormFocus::Field(FieldName::Intent) => FormFocus::SubmitButton,
            FormFocus::Field(field) => FormFocus::Field(field.prev()),
            FormFocus::SubmitButton => FormFocus::Field(FieldName::Reality),
        }
    }

    pub fn field(self) -> Option<FieldName> {
        match self {
            FormFocus::Field(field) => Some(field),
            FormFocus::SubmitButton => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// One-line message shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub ui_mode: UiMode,

    /// Scroll position and anchor rows of the composed page
    pub page: PageViewState,

    pub form: ContactForm,

    pub form_focus: FormFocus,

    /// Field flagged by the last rejected submit
    pub invalid_field: Option<FieldName>,

    pub notice: Option<Notice>,

    /// Systems listing shown in the Systems Index
    pub catalog: Catalog,

    pub settings: Settings,

    quitting: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default(), Catalog::builtin())
    }

    pub fn with_settings(settings: Settings, catalog: Catalog) -> Self {
        Self {
            ui_mode: UiMode::Browse,
            page: PageViewState::new(settings.ui.smooth_scroll),
            form: ContactForm::new(),
            form_focus: FormFocus::default(),
            invalid_field: None,
            notice: None,
            catalog,
            settings,
            quitting: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    pub fn quit(&mut self) {
        self.quitting = true;
    }

    /// Field currently receiving text, if any
    pub fn focused_field(&self) -> Option<FieldName> {
        match self.ui_mode {
            UiMode::Form => self.form_focus.field(),
            UiMode::Browse => None,
        }
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }
}
