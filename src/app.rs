use dioxus::prelude::*;
use eminent_core::{ConsentStore, EffectiveTheme, HostPreference, ThemeController};

use crate::components::{CookieBanner, ToastHost};
use crate::context::{open_preferences, ActiveToast, SharedStore};
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Opens the preference store, initializes the consent and theme
/// controllers before the first paint, and provides them plus the toast
/// list to all child components. The site is a single page; there is no
/// router.
#[component]
pub fn App() -> Element {
    let store: SharedStore = use_hook(|| open_preferences(&crate::get_data_dir()));

    // Consent is read synchronously before the banner first renders, so
    // a returning user never sees it flash
    let consent: Signal<ConsentStore<SharedStore>> = use_signal({
        let store = store.clone();
        move || ConsentStore::initialize(store.clone())
    });

    let host = use_hook(HostPreference::default);
    let theme: Signal<ThemeController<SharedStore>> = use_signal({
        let store = store.clone();
        move || ThemeController::initialize(store.clone())
    });
    let prefers_dark = host.prefers_dark();
    let effective: Signal<EffectiveTheme> =
        use_signal(move || theme.peek().effective(prefers_dark));

    let toasts: Signal<Vec<ActiveToast>> = use_signal(Vec::new);
    let toast_ids: Signal<u64> = use_signal(|| 0u64);

    use_context_provider(|| consent);
    use_context_provider(|| theme);
    use_context_provider(|| effective);
    use_context_provider({
        let host = host.clone();
        move || host
    });
    use_context_provider(|| toasts);
    use_context_provider(|| toast_ids);

    // Re-resolve the effective theme whenever the host preference
    // changes. While an explicit light/dark choice is active the
    // resolution ignores the host, so recomputing unconditionally is
    // safe. The subscription ends with this component's lifetime.
    use_future({
        let host = host.clone();
        move || {
            let host = host.clone();
            let mut effective = effective;
            async move {
                let mut rx = host.subscribe();
                while rx.changed().await.is_ok() {
                    let prefers_dark = *rx.borrow();
                    let resolved = theme.peek().effective(prefers_dark);
                    effective.set(resolved);
                }
            }
        }
    });

    let theme_class = effective().css_class();

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "site {theme_class}",
            Home {}
            CookieBanner {}
            ToastHost {}
        }
    }
}
