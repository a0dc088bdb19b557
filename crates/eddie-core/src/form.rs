//! Contact form submission state machine.
//!
//! The form moves `Idle -> Sending -> Sent -> Idle`. [`reduce`] is a pure
//! function; timers and delivery are described by the returned [`FormEffect`]
//! and carried out by the caller.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Time between accepting a submission and confirming it
pub const SUBMISSION_DELAY: Duration = Duration::from_millis(1500);

/// Submission lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Sent,
}

impl SubmissionStatus {
    pub fn is_idle(self) -> bool {
        matches!(self, SubmissionStatus::Idle)
    }

    pub fn is_sending(self) -> bool {
        matches!(self, SubmissionStatus::Sending)
    }

    pub fn is_sent(self) -> bool {
        matches!(self, SubmissionStatus::Sent)
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Sending => "sending",
            SubmissionStatus::Sent => "sent",
        };
        f.write_str(label)
    }
}

/// The three free-text inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Intent,
    Failure,
    Reality,
}

impl FieldName {
    /// Tab order
    pub const ALL: [FieldName; 3] = [FieldName::Intent, FieldName::Failure, FieldName::Reality];

    pub fn label(self) -> &'static str {
        match self {
            FieldName::Intent => "Ambiguous Intent (The Project)",
            FieldName::Failure => "Failure State (The Stakes)",
            FieldName::Reality => "Constraints (Time and Budget)",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FieldName::Intent => "Describe the system...",
            FieldName::Failure => "What happens if it fails?",
            FieldName::Reality => "Deadlines / Hard limits",
        }
    }

    /// Visible rows of the input box
    pub fn rows(self) -> u16 {
        match self {
            FieldName::Intent => 3,
            FieldName::Failure | FieldName::Reality => 2,
        }
    }

    pub fn next(self) -> FieldName {
        match self {
            FieldName::Intent => FieldName::Failure,
            FieldName::Failure => FieldName::Reality,
            FieldName::Reality => FieldName::Intent,
        }
    }

    pub fn prev(self) -> FieldName {
        match self {
            FieldName::Intent => FieldName::Reality,
            FieldName::Failure => FieldName::Intent,
            FieldName::Reality => FieldName::Failure,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldName::Intent => "intent",
            FieldName::Failure => "failure",
            FieldName::Reality => "reality",
        };
        f.write_str(name)
    }
}

/// Field values. Whitespace counts as content; only empty strings are missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub intent: String,
    pub failure: String,
    pub reality: String,
}

impl ContactFields {
    pub fn new(
        intent: impl Into<String>,
        failure: impl Into<String>,
        reality: impl Into<String>,
    ) -> Self {
        Self {
            intent: intent.into(),
            failure: failure.into(),
            reality: reality.into(),
        }
    }

    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Intent => &self.intent,
            FieldName::Failure => &self.failure,
            FieldName::Reality => &self.reality,
        }
    }

    pub fn get_mut(&mut self, field: FieldName) -> &mut String {
        match field {
            FieldName::Intent => &mut self.intent,
            FieldName::Failure => &mut self.failure,
            FieldName::Reality => &mut self.reality,
        }
    }

    /// First empty field in tab order
    pub fn first_missing(&self) -> Option<FieldName> {
        FieldName::ALL
            .into_iter()
            .find(|field| self.get(*field).is_empty())
    }

    pub fn is_complete(&self) -> bool {
        self.first_missing().is_none()
    }
}

/// Identifies one accepted submission so late timer messages can be matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubmissionId(u64);

impl SubmissionId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Payload handed to the submission sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub id: SubmissionId,
    #[serde(flatten)]
    pub fields: ContactFields,
}

/// Inputs to the form state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Replace a field's value
    Edit { field: FieldName, value: String },
    Submit,
    /// The delivery delay for `id` ran out
    DelayElapsed { id: SubmissionId },
    Reset,
}

/// Work the caller must carry out after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEffect {
    /// Start a one-shot timer that reports back with `DelayElapsed { id }`
    ScheduleDelivery { id: SubmissionId, delay: Duration },
    /// Hand the submission to the sink, once
    Deliver(Submission),
    /// Submit was refused because `missing` is empty
    Rejected { missing: FieldName },
}

/// Form model
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    status: SubmissionStatus,
    /// Snapshot taken at submit time, set exactly while `status == Sending`
    pending: Option<Submission>,
    last_id: u64,
}

/// Result of [`reduce`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub form: ContactForm,
    pub effect: Option<FormEffect>,
}

impl Transition {
    fn stay(form: ContactForm) -> Self {
        Self { form, effect: None }
    }

    fn with(form: ContactForm, effect: FormEffect) -> Self {
        Self {
            form,
            effect: Some(effect),
        }
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(fields: ContactFields) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn value(&self, field: FieldName) -> &str {
        self.fields.get(field)
    }

    /// Submission waiting on its timer
    pub fn pending(&self) -> Option<SubmissionId> {
        self.pending.as_ref().map(|submission| submission.id)
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        self.status.is_idle()
    }

    /// Apply an event in place and return the effect to run
    pub fn dispatch(&mut self, event: FormEvent) -> Option<FormEffect> {
        let transition = reduce(std::mem::take(self), event);
        *self = transition.form;
        transition.effect
    }
}

/// Pure transition function of the contact form
pub fn reduce(mut form: ContactForm, event: FormEvent) -> Transition {
    match event {
        FormEvent::Edit { field, value } => {
            *form.fields.get_mut(field) = value;
            Transition::stay(form)
        }

        FormEvent::Submit => {
            if !form.status.is_idle() {
                return Transition::stay(form);
            }
            if let Some(missing) = form.fields.first_missing() {
                return Transition::with(form, FormEffect::Rejected { missing });
            }
            form.last_id += 1;
            let id = SubmissionId(form.last_id);
            form.status = SubmissionStatus::Sending;
            form.pending = Some(Submission {
                id,
                fields: form.fields.clone(),
            });
            Transition::with(
                form,
                FormEffect::ScheduleDelivery {
                    id,
                    delay: SUBMISSION_DELAY,
                },
            )
        }

        FormEvent::DelayElapsed { id } => {
            let submission = match form.pending.take() {
                Some(submission) if submission.id == id => submission,
                other => {
                    form.pending = other;
                    return Transition::stay(form);
                }
            };
            form.status = SubmissionStatus::Sent;
            Transition::with(form, FormEffect::Deliver(submission))
        }

        FormEvent::Reset => {
            if form.status.is_sent() {
                form.status = SubmissionStatus::Idle;
            }
            Transition::stay(form)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm::with_fields(ContactFields::new(
            "build a router",
            "loses packets",
            "2 weeks, $5k",
        ))
    }

    fn scheduled_id(effect: Option<FormEffect>) -> SubmissionId {
        match effect {
            Some(FormEffect::ScheduleDelivery { id, delay }) => {
                assert_eq!(delay, SUBMISSION_DELAY);
                id
            }
            other => panic!("expected ScheduleDelivery, got {other:?}"),
        }
    }

    #[test]
    fn test_initial_state_is_idle_and_empty() {
        let form = ContactForm::new();
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.fields(), &ContactFields::default());
        assert!(form.pending().is_none());
        assert!(form.can_submit());
    }

    #[test]
    fn test_submit_with_any_empty_field_stays_idle() {
        for missing in FieldName::ALL {
            let mut form = filled_form();
            form.dispatch(FormEvent::Edit {
                field: missing,
                value: String::new(),
            });

            let effect = form.dispatch(FormEvent::Submit);

            assert_eq!(effect, Some(FormEffect::Rejected { missing }));
            assert_eq!(form.status(), SubmissionStatus::Idle);
            assert!(form.pending().is_none());
        }
    }

    #[test]
    fn test_rejection_names_first_empty_field() {
        let mut form = ContactForm::new();
        form.dispatch(FormEvent::Edit {
            field: FieldName::Intent,
            value: "x".into(),
        });
        assert_eq!(
            form.dispatch(FormEvent::Submit),
            Some(FormEffect::Rejected {
                missing: FieldName::Failure
            })
        );
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        let mut form = ContactForm::with_fields(ContactFields::new(" ", "\n", "\t"));
        let id = scheduled_id(form.dispatch(FormEvent::Submit));
        assert_eq!(form.pending(), Some(id));
    }

    #[test]
    fn test_submit_moves_to_sending_and_schedules_once() {
        let mut form = filled_form();
        let id = scheduled_id(form.dispatch(FormEvent::Submit));

        assert_eq!(form.status(), SubmissionStatus::Sending);
        assert_eq!(form.pending(), Some(id));
        assert!(!form.can_submit());
    }

    #[test]
    fn test_submit_while_sending_is_noop() {
        let mut form = filled_form();
        let id = scheduled_id(form.dispatch(FormEvent::Submit));
        let before = form.clone();

        assert_eq!(form.dispatch(FormEvent::Submit), None);
        assert_eq!(form, before);
        assert_eq!(form.pending(), Some(id));
    }

    #[test]
    fn test_delay_elapsed_delivers_exactly_once() {
        let mut form = filled_form();
        let id = scheduled_id(form.dispatch(FormEvent::Submit));

        let effect = form.dispatch(FormEvent::DelayElapsed { id });
        assert_eq!(
            effect,
            Some(FormEffect::Deliver(Submission {
                id,
                fields: ContactFields::new("build a router", "loses packets", "2 weeks, $5k"),
            }))
        );
        assert_eq!(form.status(), SubmissionStatus::Sent);
        assert!(form.pending().is_none());

        // A duplicate timer message does nothing
        assert_eq!(form.dispatch(FormEvent::DelayElapsed { id }), None);
        assert_eq!(form.status(), SubmissionStatus::Sent);
    }

    #[test]
    fn test_stale_delay_is_ignored() {
        let mut form = filled_form();
        let id = scheduled_id(form.dispatch(FormEvent::Submit));
        let stale = SubmissionId::new(id.value() + 41);

        assert_eq!(form.dispatch(FormEvent::DelayElapsed { id: stale }), None);
        assert_eq!(form.status(), SubmissionStatus::Sending);
    }

    #[test]
    fn test_delay_elapsed_while_idle_is_ignored() {
        let mut form = filled_form();
        let effect = form.dispatch(FormEvent::DelayElapsed {
            id: SubmissionId::new(1),
        });
        assert_eq!(effect, None);
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_submit_while_sent_is_noop() {
        let mut form = filled_form();
        let id = scheduled_id(form.dispatch(FormEvent::Submit));
        form.dispatch(FormEvent::DelayElapsed { id });

        assert_eq!(form.dispatch(FormEvent::Submit), None);
        assert_eq!(form.status(), SubmissionStatus::Sent);
    }

    #[test]
    fn test_reset_returns_to_idle_and_keeps_fields() {
        let mut form = filled_form();
        let id = scheduled_id(form.dispatch(FormEvent::Submit));
        form.dispatch(FormEvent::DelayElapsed { id });

        assert_eq!(form.dispatch(FormEvent::Reset), None);
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.value(FieldName::Intent), "build a router");
    }

    #[test]
    fn test_second_cycle_after_reset_uses_new_id() {
        let mut form = filled_form();
        let first = scheduled_id(form.dispatch(FormEvent::Submit));
        form.dispatch(FormEvent::DelayElapsed { id: first });
        form.dispatch(FormEvent::Reset);

        let second = scheduled_id(form.dispatch(FormEvent::Submit));
        assert_ne!(first, second);

        // The first cycle's id can no longer complete the second one
        assert_eq!(form.dispatch(FormEvent::DelayElapsed { id: first }), None);
        assert!(matches!(
            form.dispatch(FormEvent::DelayElapsed { id: second }),
            Some(FormEffect::Deliver(_))
        ));
        assert_eq!(form.status(), SubmissionStatus::Sent);
    }

    #[test]
    fn test_reset_outside_sent_is_noop() {
        let mut form = filled_form();
        form.dispatch(FormEvent::Reset);
        assert_eq!(form.status(), SubmissionStatus::Idle);

        form.dispatch(FormEvent::Submit);
        form.dispatch(FormEvent::Reset);
        assert_eq!(form.status(), SubmissionStatus::Sending);
    }

    #[test]
    fn test_edit_is_legal_in_every_status() {
        let mut form = filled_form();
        let id = scheduled_id(form.dispatch(FormEvent::Submit));
        form.dispatch(FormEvent::Edit {
            field: FieldName::Reality,
            value: "3 weeks".into(),
        });
        assert_eq!(form.value(FieldName::Reality), "3 weeks");

        // Delivery carries the values captured at submit time
        match form.dispatch(FormEvent::DelayElapsed { id }) {
            Some(FormEffect::Deliver(submission)) => {
                assert_eq!(submission.fields.reality, "2 weeks, $5k")
            }
            other => panic!("expected Deliver, got {other:?}"),
        }
    }

    #[test]
    fn test_reduce_is_pure() {
        let form = filled_form();
        let first = reduce(form.clone(), FormEvent::Submit);
        let second = reduce(form, FormEvent::Submit);
        assert_eq!(first, second);
    }

    #[test]
    fn test_submission_serializes_flat() {
        let submission = Submission {
            id: SubmissionId::new(3),
            fields: ContactFields::new("a", "b", "c"),
        };
        let json = serde_json::to_string(&submission).unwrap();
        assert_eq!(json, r#"{"id":3,"intent":"a","failure":"b","reality":"c"}"#);
    }

    #[test]
    fn test_field_cycle() {
        assert_eq!(FieldName::Intent.next(), FieldName::Failure);
        assert_eq!(FieldName::Reality.next(), FieldName::Intent);
        assert_eq!(FieldName::Intent.prev(), FieldName::Reality);
    }
}
