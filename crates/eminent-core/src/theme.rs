//! Theme preference controller.
//!
//! Owns the persisted light/dark/system choice and resolves it against
//! the host's reported preference. `System` follows the host signal and
//! re-resolves whenever it changes; an explicit `Light`/`Dark` choice
//! pins the effective theme regardless of the host.

use tokio::sync::watch;

use crate::storage::{KeyValueStore, THEME_KEY};
use crate::types::{EffectiveTheme, ThemePreference};

/// The host environment's "prefers dark" signal.
///
/// A subscribable boolean fed by whatever the shell can observe (OS
/// appearance, media query). Subscribers hold a receiver for the lifetime
/// of the mounted component and drop it on unmount.
#[derive(Clone)]
pub struct HostPreference {
    tx: watch::Sender<bool>,
}

impl HostPreference {
    pub fn new(prefers_dark: bool) -> Self {
        let (tx, _rx) = watch::channel(prefers_dark);
        Self { tx }
    }

    pub fn prefers_dark(&self) -> bool {
        *self.tx.borrow()
    }

    /// Report a change in the host preference.
    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        self.tx.send_replace(prefers_dark);
    }

    /// Subscribe to preference changes.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }
}

impl Default for HostPreference {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Theme state for one page load.
pub struct ThemeController<S: KeyValueStore> {
    store: S,
    preference: ThemePreference,
}

impl<S: KeyValueStore> ThemeController<S> {
    /// Read the persisted preference, defaulting to `System` when absent,
    /// unrecognized, or unreadable.
    pub fn initialize(store: S) -> Self {
        let preference = match store.get(THEME_KEY) {
            Ok(token) => ThemePreference::from_token(token.as_deref()),
            Err(err) => {
                tracing::warn!("theme storage unavailable, using system default: {}", err);
                ThemePreference::System
            }
        };

        Self { store, preference }
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    /// Persist a new preference. The caller re-resolves the effective
    /// theme immediately afterwards.
    ///
    /// The typed argument is the interface boundary: values outside
    /// light/dark/system cannot be expressed.
    pub fn set_theme(&mut self, preference: ThemePreference) {
        self.preference = preference;

        if let Err(err) = self.store.set(THEME_KEY, preference.as_token()) {
            // Degraded mode: the choice holds for this load only
            tracing::warn!("failed to persist theme preference: {}", err);
        }
    }

    /// Resolve the stored preference against the host signal. `System`
    /// follows the host; explicit choices ignore it.
    pub fn effective(&self, host_prefers_dark: bool) -> EffectiveTheme {
        match self.preference {
            ThemePreference::Light => EffectiveTheme::Light,
            ThemePreference::Dark => EffectiveTheme::Dark,
            ThemePreference::System => {
                if host_prefers_dark {
                    EffectiveTheme::Dark
                } else {
                    EffectiveTheme::Light
                }
            }
        }
    }
}
