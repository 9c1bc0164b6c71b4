//! Section fault guard.
//!
//! The "renders children or a fallback" capability: a guard is `Normal`
//! until an unhandled failure during child rendering trips it to
//! `Faulted`, and an explicit reset returns it to `Normal`. No failure in
//! a guarded section is fatal to the page.

/// Rendering state of a guarded section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
    /// Children render normally.
    #[default]
    Normal,
    /// The fallback renders, with the reason the section faulted.
    Faulted(String),
}

/// Two-state guard owned by a section of the page.
#[derive(Clone, Debug, Default)]
pub struct FaultGuard {
    state: GuardState,
}

impl FaultGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GuardState {
        &self.state
    }

    pub fn is_faulted(&self) -> bool {
        matches!(self.state, GuardState::Faulted(_))
    }

    pub fn fault_reason(&self) -> Option<&str> {
        match &self.state {
            GuardState::Normal => None,
            GuardState::Faulted(reason) => Some(reason),
        }
    }

    /// Record an unhandled failure raised while rendering children.
    pub fn trip(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        tracing::error!("section faulted: {}", reason);
        self.state = GuardState::Faulted(reason);
    }

    /// Explicit "Try Again": return to rendering children.
    pub fn reset(&mut self) {
        self.state = GuardState::Normal;
    }
}
