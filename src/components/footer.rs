//! Page footer.

use chrono::Datelike;
use dioxus::prelude::*;

#[component]
pub fn SiteFooter() -> Element {
    let year = chrono::Utc::now().year();

    rsx! {
        footer { class: "site-footer",
            div { class: "container footer-inner",
                div { class: "brand",
                    span { class: "brand-name", "Eminent Global Logistics" }
                    span { class: "brand-tagline", "Reliable. Scalable. Borderless." }
                }
                p { class: "footer-copy",
                    "\u{00A9} {year} Eminent Global Logistics. All rights reserved."
                }
            }
        }
    }
}
