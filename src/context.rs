//! Shared state for the page shell.
//!
//! Provides the preference store, the consent and theme controllers, the
//! host theme signal, and the toast list to all components via
//! use_context.

use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use dioxus::prelude::*;
use eminent_core::{
    ConsentStore, EffectiveTheme, HostPreference, KeyValueStore, MemoryStore, Notification,
    NotificationSink, RedbStore, ThemeController,
};

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

/// Shared store type for context.
///
/// Boxed so the shell can swap in a `MemoryStore` when the durable store
/// cannot be opened; controllers behave identically either way.
pub type SharedStore = Arc<dyn KeyValueStore + Send + Sync>;

/// Open the preference store, degrading to in-memory when the database
/// is unavailable. Degradation is silent for the user; the site works,
/// choices just do not survive a restart.
pub fn open_preferences(data_dir: &Path) -> SharedStore {
    match RedbStore::open(data_dir.join("prefs.redb")) {
        Ok(store) => Arc::new(store),
        Err(err) => {
            tracing::warn!("preference store unavailable, running in-memory: {}", err);
            Arc::new(MemoryStore::new())
        }
    }
}

/// A toast currently on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveToast {
    pub id: u64,
    pub note: Notification,
    pub born: Instant,
}

/// Notification sink that pushes toasts into the shared list.
#[derive(Clone, Copy)]
pub struct ToastSink {
    toasts: Signal<Vec<ActiveToast>>,
    next_id: Signal<u64>,
}

impl ToastSink {
    pub fn new(toasts: Signal<Vec<ActiveToast>>, next_id: Signal<u64>) -> Self {
        Self { toasts, next_id }
    }
}

impl NotificationSink for ToastSink {
    fn notify(&self, note: Notification) {
        let mut next_id = self.next_id;
        let mut toasts = self.toasts;
        let id = *next_id.peek();
        next_id.set(id + 1);
        toasts.write().push(ActiveToast {
            id,
            note,
            born: Instant::now(),
        });
    }
}

/// Hook to access the consent store from context.
pub fn use_consent() -> Signal<ConsentStore<SharedStore>> {
    use_context::<Signal<ConsentStore<SharedStore>>>()
}

/// Hook to access the theme controller from context.
pub fn use_theme_controller() -> Signal<ThemeController<SharedStore>> {
    use_context::<Signal<ThemeController<SharedStore>>>()
}

/// Hook to access the resolved theme currently applied to the page.
pub fn use_effective_theme() -> Signal<EffectiveTheme> {
    use_context::<Signal<EffectiveTheme>>()
}

/// Hook to access the host "prefers dark" signal.
pub fn use_host_preference() -> HostPreference {
    use_context::<HostPreference>()
}

/// Hook to access the on-screen toast list.
pub fn use_toasts() -> Signal<Vec<ActiveToast>> {
    use_context::<Signal<Vec<ActiveToast>>>()
}

/// Hook to access the toast id counter (for building sinks).
pub fn use_toast_ids() -> Signal<u64> {
    use_context::<Signal<u64>>()
}
