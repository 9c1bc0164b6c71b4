//! Services grid.

use dioxus::prelude::*;

/// One service offering in the grid.
#[component]
fn ServiceCard(icon: &'static str, title: &'static str, description: &'static str) -> Element {
    rsx! {
        div { class: "card service-card",
            div { class: "card-icon", "{icon}" }
            h3 { class: "card-title", "{title}" }
            p { class: "card-text", "{description}" }
        }
    }
}

#[component]
pub fn ServicesGrid() -> Element {
    rsx! {
        section { class: "services", id: "services",
            div { class: "container",
                div { class: "section-head",
                    span { class: "badge badge-outline", "Our Services" }
                    h2 { class: "section-title", "Comprehensive Logistics Solutions" }
                    p { class: "section-lede",
                        "We provide end-to-end logistics services tailored to your specific "
                        "needs, ensuring your shipments are delivered safely and on time."
                    }
                }
                div { class: "services-grid",
                    ServiceCard {
                        icon: "\u{1F69B}",
                        title: "Road Freight",
                        description: "Reliable transportation across South Africa's road network, from small parcels to full truck loads.",
                    }
                    ServiceCard {
                        icon: "\u{1F310}",
                        title: "Cross-Border Services",
                        description: "Seamless logistics solutions extending to neighboring countries with customs expertise.",
                    }
                    ServiceCard {
                        icon: "\u{1F6E1}",
                        title: "Secure Warehousing",
                        description: "State-of-the-art warehousing facilities with inventory management and security.",
                    }
                    ServiceCard {
                        icon: "\u{25CE}",
                        title: "Specialized Transport",
                        description: "Tailored solutions for oversized, fragile, or temperature-sensitive cargo.",
                    }
                }
            }
        }
    }
}
