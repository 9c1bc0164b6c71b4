//! Fault boundary around one page section.
//!
//! Renders its children until an unhandled error surfaces during their
//! rendering, then shows a fallback with an explicit reset back to the
//! normal state. A faulted section never takes the rest of the page
//! down.

use dioxus::prelude::*;

#[component]
pub fn SectionBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |errors: ErrorContext| {
                rsx! {
                    div { class: "section-fault",
                        div { class: "fault-icon", "\u{26A0}" }
                        h2 { class: "fault-title", "Something went wrong" }
                        p { class: "fault-text",
                            "We're sorry, but there was an error loading this content."
                        }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| errors.clear_errors(),
                            "Try Again"
                        }
                    }
                }
            },
            {children}
        }
    }
}
