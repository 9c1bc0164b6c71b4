//! Toast notifications.
//!
//! Renders the shared toast list and prunes entries after their display
//! window. Toasts can also be dismissed by hand.

use dioxus::prelude::*;
use eminent_core::Severity;

use crate::context::{use_toasts, TOAST_DURATION};

#[component]
pub fn ToastHost() -> Element {
    let mut toasts = use_toasts();

    // Sweep expired toasts. The loop lives as long as this component.
    use_future(move || async move {
        loop {
            tokio::time::sleep(std::time::Duration::from_millis(500)).await;
            let now = std::time::Instant::now();
            let has_expired = toasts
                .peek()
                .iter()
                .any(|t| now.duration_since(t.born) >= TOAST_DURATION);
            if has_expired {
                toasts
                    .write()
                    .retain(|t| now.duration_since(t.born) < TOAST_DURATION);
            }
        }
    });

    rsx! {
        div { class: "toast-host",
            for toast in toasts.read().iter().cloned() {
                div {
                    key: "{toast.id}",
                    class: if toast.note.severity == Severity::Destructive {
                        "toast toast-destructive"
                    } else {
                        "toast"
                    },
                    div { class: "toast-body",
                        p { class: "toast-title", "{toast.note.title}" }
                        p { class: "toast-description", "{toast.note.description}" }
                    }
                    button {
                        class: "btn-icon toast-close",
                        onclick: move |_| {
                            toasts.write().retain(|t| t.id != toast.id);
                        },
                        "\u{00D7}"
                    }
                }
            }
        }
    }
}
