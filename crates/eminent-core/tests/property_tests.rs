//! Property-based tests for form validation and the stored tokens.
//!
//! Uses proptest to verify the controller's fail-fast invariant and that
//! token parsing is total over arbitrary stored strings.

use proptest::prelude::*;

use eminent_core::{
    ConsentFlag, Notification, NotificationSink, QuoteField, QuoteFormController, SiteError,
    SubmissionState, ThemePreference,
};

#[derive(Clone, Default)]
struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&self, _note: Notification) {}
}

/// Non-empty free text with at least one non-whitespace character.
fn filled_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 ,.+-]{1,80}")
        .expect("valid regex")
        .prop_filter("non-blank", |s| !s.trim().is_empty())
}

/// A plausibly shaped email address.
fn email() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9.]{1,20}@[a-z0-9]{1,15}\\.[a-z]{2,6}").expect("valid regex")
}

/// Any subset of the required fields, possibly empty.
fn required_subset() -> impl Strategy<Value = Vec<QuoteField>> {
    prop::collection::vec(
        prop::sample::select(QuoteField::REQUIRED.to_vec()),
        0..=QuoteField::REQUIRED.len(),
    )
}

proptest! {
    /// Leaving any required field blank always fails fast in Idle
    /// without starting a submission.
    #[test]
    fn blank_required_field_never_starts_submission(
        name in filled_text(),
        email in email(),
        message in filled_text(),
        blanked in required_subset().prop_filter("at least one blanked", |v| !v.is_empty()),
    ) {
        let mut form = QuoteFormController::new(NullSink);
        form.update_field(QuoteField::Name, name);
        form.update_field(QuoteField::Email, email);
        form.update_field(QuoteField::Message, message);
        for field in &blanked {
            form.update_field(*field, "");
        }

        let err = form.begin_submit().unwrap_err();
        prop_assert!(matches!(err, SiteError::Validation(_)));
        prop_assert_eq!(form.state(), SubmissionState::Idle);
        prop_assert_eq!(form.epoch(), 0);
    }

    /// A fully valid form always begins a submission whose payload
    /// snapshot matches the entered values.
    #[test]
    fn valid_form_always_begins_submission(
        name in filled_text(),
        email in email(),
        company in filled_text(),
        message in filled_text(),
    ) {
        let mut form = QuoteFormController::new(NullSink);
        form.update_field(QuoteField::Name, name.clone());
        form.update_field(QuoteField::Email, email.clone());
        form.update_field(QuoteField::Company, company.clone());
        form.update_field(QuoteField::Message, message.clone());

        let pending = form.begin_submit().unwrap();
        prop_assert_eq!(form.state(), SubmissionState::Submitting);
        prop_assert_eq!(pending.payload.name, name);
        prop_assert_eq!(pending.payload.email, email);
        prop_assert_eq!(pending.payload.company, company);
        prop_assert_eq!(pending.payload.message, message);
        prop_assert_eq!(pending.payload.phone, String::new());
    }

    /// Last write wins per field, regardless of write order.
    #[test]
    fn field_updates_are_last_write_wins(
        values in prop::collection::vec(filled_text(), 1..10),
    ) {
        let mut form = QuoteFormController::new(NullSink);
        for value in &values {
            form.update_field(QuoteField::Message, value.clone());
        }
        prop_assert_eq!(&form.request().message, values.last().unwrap());
    }

    /// Consent token parsing is total: arbitrary stored strings never
    /// panic and only the two known tokens map to a decision.
    #[test]
    fn consent_token_parse_is_total(token in ".*") {
        let flag = ConsentFlag::from_token(Some(&token));
        match token.as_str() {
            "true" => prop_assert_eq!(flag, ConsentFlag::Accepted),
            "false" => prop_assert_eq!(flag, ConsentFlag::Declined),
            _ => prop_assert_eq!(flag, ConsentFlag::Unset),
        }
    }

    /// Theme token parsing is total and defaults to System.
    #[test]
    fn theme_token_parse_is_total(token in ".*") {
        let pref = ThemePreference::from_token(Some(&token));
        match token.as_str() {
            "light" => prop_assert_eq!(pref, ThemePreference::Light),
            "dark" => prop_assert_eq!(pref, ThemePreference::Dark),
            _ => prop_assert_eq!(pref, ThemePreference::System),
        }
    }
}
