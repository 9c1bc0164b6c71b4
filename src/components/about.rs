//! About section.

use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        section { class: "about", id: "about",
            div { class: "container about-inner",
                span { class: "badge badge-outline", "About Us" }
                h2 { class: "section-title", "Your Trusted Logistics Partner in South Africa" }
                p { class: "section-lede",
                    "Eminent Global Logistics was founded with a vision to transform the "
                    "logistics landscape in South Africa. Our extensive network, commitment "
                    "to excellence, and innovative approach enable us to provide "
                    "comprehensive logistics solutions that adapt to your business needs."
                }
                div { class: "about-cards",
                    div { class: "card about-card",
                        div { class: "card-icon", "\u{25C8}" }
                        h3 { class: "card-title", "Extensive Network" }
                        p { class: "card-text",
                            "Covering all major routes in South Africa and neighboring countries."
                        }
                    }
                    div { class: "card about-card",
                        div { class: "card-icon", "\u{2605}" }
                        h3 { class: "card-title", "Proven Excellence" }
                        p { class: "card-text",
                            "Recognized for reliability and customer satisfaction."
                        }
                    }
                }
            }
        }
    }
}
