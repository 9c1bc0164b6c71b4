//! Sticky site header with brand, theme toggle, and quote shortcut.

use dioxus::prelude::*;
use eminent_core::ThemePreference;

use crate::context::{use_effective_theme, use_host_preference, use_theme_controller};

/// Theme toggle cycling light → dark → system.
///
/// Writing the preference also re-resolves the effective theme
/// immediately; the host-signal subscription in the app root covers
/// later host changes while `System` is selected.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme_controller();
    let mut effective = use_effective_theme();
    let host = use_host_preference();

    let preference = theme.read().preference();
    let (icon, title) = match preference {
        ThemePreference::Light => ("\u{2600}", "Theme: light"),
        ThemePreference::Dark => ("\u{263E}", "Theme: dark"),
        ThemePreference::System => ("\u{25D1}", "Theme: system"),
    };

    let cycle = move |_| {
        let next = match theme.peek().preference() {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::System,
            ThemePreference::System => ThemePreference::Light,
        };
        theme.write().set_theme(next);
        let resolved = theme.peek().effective(host.prefers_dark());
        effective.set(resolved);
    };

    rsx! {
        button {
            class: "btn-icon theme-toggle",
            title: "{title}",
            onclick: cycle,
            "{icon}"
        }
    }
}

/// Sticky page header.
#[component]
pub fn SiteHeader() -> Element {
    rsx! {
        header { class: "site-header",
            div { class: "container header-inner",
                div { class: "brand",
                    span { class: "brand-name", "Eminent Global Logistics" }
                    span { class: "brand-tagline", "Reliable. Scalable. Borderless." }
                }
                div { class: "header-actions",
                    ThemeToggle {}
                    a { class: "btn btn-primary", href: "#quote-form",
                        "Get Quote \u{2192}"
                    }
                }
            }
        }
    }
}
