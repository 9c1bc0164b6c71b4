//! Quote-request form.
//!
//! Binds the form controller to the inputs and drives one submission at
//! a time through the transport. The delivery task is owned by this
//! component's scope, so unmounting cancels it and the late outcome is
//! discarded instead of landing on unmounted state.

use dioxus::prelude::*;
use eminent_core::{
    deliver, QuoteField, QuoteFormController, SimulatedTransport, SiteError, SubmissionState,
    SUBMIT_TIMEOUT, SUCCESS_DISPLAY,
};

use crate::context::{use_toast_ids, use_toasts, ToastSink};

#[component]
pub fn QuoteForm() -> Element {
    let toasts = use_toasts();
    let toast_ids = use_toast_ids();
    let mut form: Signal<QuoteFormController<ToastSink>> =
        use_signal(move || QuoteFormController::new(ToastSink::new(toasts, toast_ids)));

    // Placeholder delivery backend; integrators supply the real one
    let transport = use_hook(SimulatedTransport::default);

    let mut inline_error: Signal<Option<String>> = use_signal(|| None);

    let state = form.read().state();
    let request = form.read().request().clone();

    let on_submit = move |e: FormEvent| {
        e.prevent_default();

        let begun = form.write().begin_submit();
        match begun {
            // A second submit while one is in flight is ignored, not queued
            Err(SiteError::AlreadySubmitting) => {}
            Err(err) => inline_error.set(Some(err.to_string())),
            Ok(pending) => {
                inline_error.set(None);
                let transport = transport.clone();
                spawn(async move {
                    let outcome = deliver(&transport, SUBMIT_TIMEOUT, &pending.payload).await;
                    form.write().complete(pending.epoch, outcome);

                    // Display timer back to idle; a newer submission bumps
                    // the epoch and cancels this acknowledge
                    if form.peek().state() == SubmissionState::Succeeded {
                        tokio::time::sleep(SUCCESS_DISPLAY).await;
                        form.write().acknowledge(pending.epoch);
                    }
                });
            }
        }
    };

    let button_label = match state {
        SubmissionState::Submitting => "Submitting...",
        SubmissionState::Succeeded => "Submitted \u{2713}",
        _ => "Submit Quote Request",
    };

    rsx! {
        div { class: "quote-form-panel", id: "quote-form",
            h3 { class: "quote-form-title", "Request a Quote" }

            form { class: "quote-form", onsubmit: on_submit,
                div { class: "form-grid",
                    div { class: "form-field",
                        label { r#for: "name", "Full Name" }
                        input {
                            id: "name",
                            class: "input",
                            placeholder: "John Smith",
                            value: "{request.name}",
                            oninput: move |e| form.write().update_field(QuoteField::Name, e.value()),
                        }
                    }
                    div { class: "form-field",
                        label { r#for: "email", "Email Address" }
                        input {
                            id: "email",
                            class: "input",
                            r#type: "email",
                            placeholder: "john@company.com",
                            value: "{request.email}",
                            oninput: move |e| form.write().update_field(QuoteField::Email, e.value()),
                        }
                    }
                    div { class: "form-field",
                        label { r#for: "company", "Company Name" }
                        input {
                            id: "company",
                            class: "input",
                            placeholder: "Company Ltd.",
                            value: "{request.company}",
                            oninput: move |e| form.write().update_field(QuoteField::Company, e.value()),
                        }
                    }
                    div { class: "form-field",
                        label { r#for: "phone", "Phone Number" }
                        input {
                            id: "phone",
                            class: "input",
                            placeholder: "+27 00 000 0000",
                            value: "{request.phone}",
                            oninput: move |e| form.write().update_field(QuoteField::Phone, e.value()),
                        }
                    }
                }

                div { class: "form-field",
                    label { r#for: "message", "Tell us about your logistics needs" }
                    textarea {
                        id: "message",
                        class: "input message-textarea",
                        placeholder: "Please describe your logistics requirements, including cargo type, destinations, frequency, etc.",
                        rows: 5,
                        value: "{request.message}",
                        oninput: move |e| form.write().update_field(QuoteField::Message, e.value()),
                    }
                }

                if let Some(error) = inline_error() {
                    p { class: "form-error", "{error}" }
                }

                button {
                    class: "btn btn-primary btn-block",
                    r#type: "submit",
                    disabled: state.is_submitting(),
                    "{button_label}"
                }
            }
        }
    }
}
