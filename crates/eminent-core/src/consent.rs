//! Cookie-consent store.
//!
//! Owns the persisted tri-state consent decision and the transient banner
//! visibility. Storage failures are never surfaced to the user; the store
//! degrades to recomputing the banner on every load without persistence.

use crate::storage::{KeyValueStore, CONSENT_KEY};
use crate::types::ConsentFlag;

/// Consent state for one page load.
pub struct ConsentStore<S: KeyValueStore> {
    store: S,
    flag: ConsentFlag,
    banner_visible: bool,
}

impl<S: KeyValueStore> ConsentStore<S> {
    /// Read the persisted flag and derive the banner visibility.
    ///
    /// Runs once per page load, before the banner first renders, so the
    /// banner never flashes for a user who already decided.
    pub fn initialize(store: S) -> Self {
        let flag = match store.get(CONSENT_KEY) {
            Ok(token) => ConsentFlag::from_token(token.as_deref()),
            Err(err) => {
                tracing::warn!("consent storage unavailable, treating as unset: {}", err);
                ConsentFlag::Unset
            }
        };

        Self {
            store,
            flag,
            banner_visible: flag == ConsentFlag::Unset,
        }
    }

    pub fn flag(&self) -> ConsentFlag {
        self.flag
    }

    pub fn banner_visible(&self) -> bool {
        self.banner_visible
    }

    /// Persist an accept decision and hide the banner.
    pub fn accept(&mut self) {
        self.decide(ConsentFlag::Accepted);
    }

    /// Persist a decline decision and hide the banner.
    pub fn decline(&mut self) {
        self.decide(ConsentFlag::Declined);
    }

    /// Hide the banner without recording a decision. The flag stays
    /// `Unset`, so the banner reappears on the next load.
    pub fn dismiss(&mut self) {
        self.banner_visible = false;
    }

    fn decide(&mut self, flag: ConsentFlag) {
        self.flag = flag;
        self.banner_visible = false;

        if let Some(token) = flag.as_token() {
            if let Err(err) = self.store.set(CONSENT_KEY, token) {
                // Degraded mode: the decision holds for this load only
                tracing::warn!("failed to persist consent decision: {}", err);
            }
        }
    }
}
