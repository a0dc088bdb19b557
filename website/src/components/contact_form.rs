//! Contact form driven by the shared form reducer.
//!
//! The delivery delay is a browser timeout. Its handle is cleared when the
//! component is torn down so nothing fires afterwards.

use eddie_core::content::{
    RESET_LABEL, REQUIRED_FIELD_HINT, SENDING_LABEL, SENT_BODY, SENT_HEADLINE, SUBMIT_LABEL,
};
use eddie_core::{ContactForm, FieldName, FormEffect, FormEvent, Submission};
use leptos::prelude::*;

use crate::scroll::focus_element;

/// DOM id of a field's textarea
pub fn field_id(field: FieldName) -> &'static str {
    match field {
        FieldName::Intent => "contact-intent",
        FieldName::Failure => "contact-failure",
        FieldName::Reality => "contact-reality",
    }
}

fn label_class(field: FieldName) -> &'static str {
    match field {
        FieldName::Intent => "block text-xs uppercase tracking-widest text-green-500 mb-2",
        FieldName::Failure => "block text-xs uppercase tracking-widest text-red-500 mb-2",
        FieldName::Reality => "block text-xs uppercase tracking-widest text-white mb-2",
    }
}

/// Stand-in for a transport: the submission is recorded in the console log
fn deliver(submission: &Submission) {
    log::info!(
        "Contact submission {}: intent={:?} failure={:?} reality={:?}",
        submission.id,
        submission.fields.intent,
        submission.fields.failure,
        submission.fields.reality
    );
}

#[component]
pub fn ContactFormPanel() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let invalid = RwSignal::new(None::<FieldName>);
    let timer = StoredValue::new(None::<TimeoutHandle>);

    on_cleanup(move || {
        if let Some(handle) = timer.get_value() {
            handle.clear();
        }
    });

    let dispatch = move |event: FormEvent| form.try_update(|f| f.dispatch(event)).flatten();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match dispatch(FormEvent::Submit) {
            Some(FormEffect::ScheduleDelivery { id, delay }) => {
                invalid.set(None);
                let handle = set_timeout_with_handle(
                    move || {
                        timer.set_value(None);
                        if let Some(FormEffect::Deliver(submission)) =
                            dispatch(FormEvent::DelayElapsed { id })
                        {
                            deliver(&submission);
                        }
                    },
                    delay,
                );
                match handle {
                    Ok(handle) => timer.set_value(Some(handle)),
                    Err(e) => log::error!("Failed to schedule submission {id}: {e:?}"),
                }
            }
            Some(FormEffect::Rejected { missing }) => {
                invalid.set(Some(missing));
                focus_element(field_id(missing));
            }
            _ => {}
        }
    };

    let sent = move || form.with(|f| f.status().is_sent());

    view! {
        <Show
            when=sent
            fallback=move || view! {
                <form class="space-y-6" on:submit=on_submit novalidate>
                    {FieldName::ALL.into_iter().map(|field| view! {
                        <Field field form invalid />
                    }).collect_view()}

                    <button
                        type="submit"
                        class="w-full py-4 bg-white text-black font-bold tracking-widest hover:bg-green-500 transition-colors disabled:bg-gray-700 disabled:text-gray-400 disabled:cursor-wait"
                        disabled=move || !form.with(|f| f.can_submit())
                    >
                        {move || if form.with(|f| f.status().is_sending()) {
                            SENDING_LABEL
                        } else {
                            SUBMIT_LABEL
                        }}
                    </button>
                </form>
            }
        >
            <div class="border border-green-500 bg-green-950/10 p-12 text-center space-y-4">
                <p class="text-green-500 font-bold tracking-widest">{SENT_HEADLINE}</p>
                <p class="text-gray-400">{SENT_BODY}</p>
                <button
                    class="text-xs text-gray-500 hover:text-white tracking-widest"
                    on:click=move |_| {
                        dispatch(FormEvent::Reset);
                    }
                >
                    {RESET_LABEL}
                </button>
            </div>
        </Show>
    }
}

#[component]
fn Field(
    field: FieldName,
    form: RwSignal<ContactForm>,
    invalid: RwSignal<Option<FieldName>>,
) -> impl IntoView {
    let is_invalid = move || invalid.get() == Some(field);
    let textarea_class = move || {
        if is_invalid() {
            "w-full bg-black border border-red-500 p-4 text-white focus:outline-none"
        } else {
            "w-full bg-black border border-gray-800 p-4 text-white focus:outline-none focus:border-gray-500"
        }
    };

    view! {
        <div>
            <label for=field_id(field) class=label_class(field)>{field.label()}</label>
            <textarea
                id=field_id(field)
                rows=field.rows().to_string()
                required
                class=textarea_class
                placeholder=field.placeholder()
                prop:value=move || form.with(|f| f.value(field).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| {
                        f.dispatch(FormEvent::Edit { field, value });
                    });
                    if is_invalid() {
                        invalid.set(None);
                    }
                }
            ></textarea>
            <Show when=is_invalid>
                <p class="mt-1 text-xs text-red-500">"! "{REQUIRED_FIELD_HINT}</p>
            </Show>
        </div>
    }
}
