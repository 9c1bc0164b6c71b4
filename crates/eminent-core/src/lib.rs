//! Eminent Site Core Library
//!
//! The stateful core of the Eminent Global Logistics site, kept free of
//! any rendering layer so every contract is testable headless.
//!
//! ## Overview
//!
//! Three independent controllers, composed only by being mounted in the
//! same page shell:
//!
//! - **Quote form** — field state, the submission lifecycle
//!   (idle → submitting → success/failure → idle), and notifications.
//!   Delivery goes through an injected [`QuoteTransport`].
//! - **Consent** — the persisted cookie decision gating the banner.
//! - **Theme** — the persisted light/dark/system choice, resolved
//!   against the host's "prefers dark" signal.
//!
//! Preferences persist in a key-value store ([`KeyValueStore`]), backed
//! by redb on desktop and by memory in tests or when storage is
//! unavailable.
//!
//! ## Quick Start
//!
//! ```ignore
//! use eminent_core::{ConsentStore, MemoryStore, QuoteField, QuoteFormController};
//!
//! let mut consent = ConsentStore::initialize(MemoryStore::new());
//! assert!(consent.banner_visible());
//! consent.accept();
//!
//! let mut form = QuoteFormController::new(sink);
//! form.update_field(QuoteField::Name, "Thandi Nkosi");
//! let pending = form.begin_submit()?;
//! ```

pub mod boundary;
pub mod consent;
pub mod error;
pub mod quote;
pub mod storage;
pub mod theme;
pub mod types;

// Re-exports
pub use boundary::{FaultGuard, GuardState};
pub use consent::ConsentStore;
pub use error::{SiteError, SiteResult};
pub use quote::{
    deliver, NotificationSink, PendingSubmission, QuoteFormController, QuoteTransport,
    SimulatedTransport, SUBMIT_TIMEOUT, SUCCESS_DISPLAY,
};
pub use storage::{KeyValueStore, MemoryStore, RedbStore, CONSENT_KEY, THEME_KEY};
pub use theme::{HostPreference, ThemeController};
pub use types::*;
