//! Hero banner.

use dioxus::prelude::*;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "hero",
            div { class: "container hero-inner",
                span { class: "badge badge-secondary", "Trusted Logistics Partner" }
                h1 { class: "hero-title",
                    span { "Eminent Global" }
                    span { class: "hero-title-line", "Logistics" }
                }
                div { class: "hero-pills",
                    span { class: "pill", "\u{2713} Reliable" }
                    span { class: "pill", "\u{2713} Scalable" }
                    span { class: "pill", "\u{2713} Borderless" }
                }
                p { class: "hero-lede",
                    "Modern logistics solutions offering dynamic, client-focused services "
                    "across South Africa and beyond. We simplify the movement of goods "
                    "through dependable, scalable, and cross-border logistics solutions."
                }
                div { class: "hero-actions",
                    a { class: "btn btn-primary btn-lg", href: "#quote-form", "Get Quote" }
                    a { class: "btn btn-outline btn-lg", href: "#about", "Learn More" }
                }
            }
        }
    }
}
