//! Cookie-consent banner.
//!
//! Rendered only while the consent store says the banner is visible.
//! Accept and Decline persist the decision; the close button only hides
//! the banner for this load.

use dioxus::prelude::*;

use crate::context::use_consent;

#[component]
pub fn CookieBanner() -> Element {
    let mut consent = use_consent();

    if !consent.read().banner_visible() {
        return rsx! {};
    }

    rsx! {
        div { class: "cookie-banner", role: "alert",
            div { class: "container cookie-inner",
                p { class: "cookie-text",
                    "We use cookies to enhance your experience on our website. By "
                    "continuing to browse this site, you agree to our use of cookies."
                }
                div { class: "cookie-actions",
                    button {
                        class: "btn btn-outline btn-sm",
                        onclick: move |_| consent.write().decline(),
                        "Decline"
                    }
                    button {
                        class: "btn btn-primary btn-sm",
                        onclick: move |_| consent.write().accept(),
                        "Accept"
                    }
                    button {
                        class: "btn-icon",
                        aria_label: "Close cookie notice",
                        onclick: move |_| consent.write().dismiss(),
                        "\u{00D7}"
                    }
                }
            }
        }
    }
}
