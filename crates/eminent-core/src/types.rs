//! Core types for the Eminent site
//!
//! Plain data shared between the controllers and the rendering layer:
//! the quote-request payload, the submission state machine, the persisted
//! consent and theme tokens, and the notification shape.

use serde::{Deserialize, Serialize};

/// One prospective customer's inquiry.
///
/// Transient and in-memory only: created empty on mount, mutated one field
/// at a time, reset after a successful submission. The serialized form is
/// the payload shape the submit collaborator receives.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub message: String,
}

impl QuoteRequest {
    /// Get the current value of a field.
    pub fn field(&self, field: QuoteField) -> &str {
        match field {
            QuoteField::Name => &self.name,
            QuoteField::Email => &self.email,
            QuoteField::Company => &self.company,
            QuoteField::Phone => &self.phone,
            QuoteField::Message => &self.message,
        }
    }

    /// Set a field. Last write wins; no validation happens here.
    pub fn set_field(&mut self, field: QuoteField, value: impl Into<String>) {
        let value = value.into();
        match field {
            QuoteField::Name => self.name = value,
            QuoteField::Email => self.email = value,
            QuoteField::Company => self.company = value,
            QuoteField::Phone => self.phone = value,
            QuoteField::Message => self.message = value,
        }
    }

    /// Required fields that are currently empty (whitespace counts as empty).
    pub fn missing_required(&self) -> Vec<QuoteField> {
        QuoteField::REQUIRED
            .iter()
            .copied()
            .filter(|f| self.field(*f).trim().is_empty())
            .collect()
    }

    /// Shape-only email check: non-empty local part and domain around
    /// a single `@`, no whitespace.
    pub fn email_looks_valid(&self) -> bool {
        let email = self.email.trim();
        if email.chars().any(char::is_whitespace) {
            return false;
        }
        match email.split_once('@') {
            Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.'),
            None => false,
        }
    }

    /// Clear every field back to empty.
    pub fn reset(&mut self) {
        *self = QuoteRequest::default();
    }
}

/// The five named fields of a quote request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuoteField {
    Name,
    Email,
    Company,
    Phone,
    Message,
}

impl QuoteField {
    /// Fields that must be non-empty before submission.
    pub const REQUIRED: [QuoteField; 3] = [QuoteField::Name, QuoteField::Email, QuoteField::Message];

    /// User-facing label, matching the form labels on the page.
    pub fn label(&self) -> &'static str {
        match self {
            QuoteField::Name => "Full Name",
            QuoteField::Email => "Email Address",
            QuoteField::Company => "Company Name",
            QuoteField::Phone => "Phone Number",
            QuoteField::Message => "Message",
        }
    }
}

/// Submission lifecycle of the quote form.
///
/// `Idle --submit(valid)--> Submitting --ok--> Succeeded --(auto)--> Idle`;
/// `Submitting --error--> Failed --submit--> Submitting`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }
}

/// The stored user decision about cookie usage.
///
/// Once `Accepted` or `Declined` it is only changed by explicit user
/// action, never overwritten automatically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConsentFlag {
    #[default]
    Unset,
    Accepted,
    Declined,
}

impl ConsentFlag {
    /// Stored token, or `None` for `Unset` (absent key).
    pub fn as_token(&self) -> Option<&'static str> {
        match self {
            ConsentFlag::Unset => None,
            ConsentFlag::Accepted => Some("true"),
            ConsentFlag::Declined => Some("false"),
        }
    }

    /// Parse a stored token. Anything unrecognized reads as `Unset`.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some("true") => ConsentFlag::Accepted,
            Some("false") => ConsentFlag::Declined,
            _ => ConsentFlag::Unset,
        }
    }
}

/// The stored user choice of visual appearance mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    pub fn as_token(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    /// Parse a stored token. Anything unrecognized reads as `System`.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some("light") => ThemePreference::Light,
            Some("dark") => ThemePreference::Dark,
            _ => ThemePreference::System,
        }
    }
}

/// A theme preference resolved against the host signal, ready to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectiveTheme {
    Light,
    Dark,
}

impl EffectiveTheme {
    /// CSS class applied at the page root.
    pub fn css_class(&self) -> &'static str {
        match self {
            EffectiveTheme::Light => "light",
            EffectiveTheme::Dark => "dark",
        }
    }
}

/// Severity of a user-facing notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Normal,
    Destructive,
}

/// A short-lived, fire-and-forget message for the notification sink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn normal(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Normal,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Destructive,
            title: title.into(),
            description: description.into(),
        }
    }
}
