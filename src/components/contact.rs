//! Contact section: reach-us cards plus the quote-request form.

use dioxus::prelude::*;

use crate::components::QuoteForm;

#[component]
fn ContactCard(icon: &'static str, title: &'static str, line: &'static str, sub: &'static str) -> Element {
    rsx! {
        div { class: "card contact-card",
            div { class: "contact-icon", "{icon}" }
            h3 { class: "card-title", "{title}" }
            p { class: "contact-line", "{line}" }
            p { class: "contact-sub", "{sub}" }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    rsx! {
        section { class: "contact", id: "contact",
            div { class: "container",
                div { class: "section-head",
                    span { class: "badge badge-outline", "Contact Us" }
                    h2 { class: "section-title", "Get in Touch" }
                    p { class: "section-lede",
                        "Ready to experience our exceptional logistics services? "
                        "Contact us today for a customized solution."
                    }
                }
                div { class: "contact-cards",
                    ContactCard {
                        icon: "\u{2709}",
                        title: "Email Us",
                        line: "info@eminentlogistics.co.za",
                        sub: "We'll respond within 24 hours",
                    }
                    ContactCard {
                        icon: "\u{260E}",
                        title: "Call Us",
                        line: "+27 (0) 11 234 5678",
                        sub: "Mon-Fri, 8AM-6PM SAST",
                    }
                    ContactCard {
                        icon: "\u{2691}",
                        title: "Visit Us",
                        line: "Johannesburg, South Africa",
                        sub: "Serving nationwide & cross-border",
                    }
                }
                QuoteForm {}
            }
        }
    }
}
