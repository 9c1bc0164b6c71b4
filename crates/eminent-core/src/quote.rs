//! Quote-request form controller.
//!
//! Owns the form field state, the submission lifecycle, and user-facing
//! notifications. The actual delivery of a request is an injected
//! collaborator (`QuoteTransport`); the controller calls it at most once
//! per user-initiated submit and never while another submission is in
//! flight.
//!
//! ## Lifecycle
//!
//! A submit splits into three steps so the UI can await the transport on
//! its own task while the controller stays borrowable:
//!
//! 1. `begin_submit` validates, moves to `Submitting`, and hands back a
//!    `PendingSubmission` (payload snapshot + epoch).
//! 2. `deliver` awaits the transport under a bounded timeout.
//! 3. `complete` applies the outcome. A stale epoch (component unmounted
//!    or a newer submission started) is discarded, not applied.

use std::time::Duration;

use crate::error::{SiteError, SiteResult};
use crate::types::{Notification, QuoteField, QuoteRequest, SubmissionState};

/// How long the transport may take before the submission counts as failed.
pub const SUBMIT_TIMEOUT: Duration = Duration::from_secs(10);

/// How long the success state is displayed before returning to idle.
pub const SUCCESS_DISPLAY: Duration = Duration::from_secs(4);

/// The external system that actually delivers a quote request.
///
/// Transport is integrator-supplied (HTTP endpoint, email relay, etc.);
/// idempotency is neither guaranteed nor required.
pub trait QuoteTransport {
    fn submit(
        &self,
        request: &QuoteRequest,
    ) -> impl std::future::Future<Output = Result<(), String>>;
}

/// Receives short-lived user-facing messages. Fire and forget.
pub trait NotificationSink {
    fn notify(&self, note: Notification);
}

/// Stand-in transport mirroring the placeholder in the original site:
/// waits a fixed delay, logs the payload, always succeeds. Replace with a
/// real delivery backend before production use.
#[derive(Clone, Debug)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(1500),
        }
    }
}

impl SimulatedTransport {
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl QuoteTransport for SimulatedTransport {
    async fn submit(&self, request: &QuoteRequest) -> Result<(), String> {
        let payload = serde_json::to_string(request).map_err(|e| e.to_string())?;
        tokio::time::sleep(self.delay).await;
        tracing::info!("Simulated quote submission delivered: {}", payload);
        Ok(())
    }
}

/// A validated submission handed out by `begin_submit`.
///
/// Carries a snapshot of the form at submit time plus the epoch that
/// gates `complete` and `acknowledge` against stale application.
#[derive(Clone, Debug)]
pub struct PendingSubmission {
    pub payload: QuoteRequest,
    pub epoch: u64,
}

/// Controller for the quote-request form.
pub struct QuoteFormController<N: NotificationSink> {
    request: QuoteRequest,
    state: SubmissionState,
    epoch: u64,
    sink: N,
}

impl<N: NotificationSink> QuoteFormController<N> {
    pub fn new(sink: N) -> Self {
        Self {
            request: QuoteRequest::default(),
            state: SubmissionState::Idle,
            epoch: 0,
            sink,
        }
    }

    /// Current form contents.
    pub fn request(&self) -> &QuoteRequest {
        &self.request
    }

    /// Current submission state.
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Epoch of the latest begun submission. Timer tasks capture this to
    /// make their later actions cancellable.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Set one field. Last write wins, no validation.
    ///
    /// Editing after a success counts as the "next user action" that
    /// returns the form to idle.
    pub fn update_field(&mut self, field: QuoteField, value: impl Into<String>) {
        if self.state == SubmissionState::Succeeded {
            self.state = SubmissionState::Idle;
        }
        self.request.set_field(field, value);
    }

    /// Validate and move to `Submitting`.
    ///
    /// Fails fast without touching state when a submission is already in
    /// flight or a required field is empty; in both cases the transport
    /// must not be contacted. On success the caller owns driving the
    /// returned `PendingSubmission` through `deliver` and `complete`.
    pub fn begin_submit(&mut self) -> SiteResult<PendingSubmission> {
        if self.state.is_submitting() {
            return Err(SiteError::AlreadySubmitting);
        }

        let missing = self.request.missing_required();
        if !missing.is_empty() {
            return Err(SiteError::Validation(missing));
        }
        if !self.request.email_looks_valid() {
            return Err(SiteError::InvalidEmail(self.request.email.clone()));
        }

        self.epoch += 1;
        self.state = SubmissionState::Submitting;
        tracing::debug!(epoch = self.epoch, "quote submission started");

        Ok(PendingSubmission {
            payload: self.request.clone(),
            epoch: self.epoch,
        })
    }

    /// Apply the outcome of a delivery attempt.
    ///
    /// Emits exactly one notification. On success the form resets to
    /// empty; on failure the entered values are preserved for retry.
    /// Outcomes from a stale epoch are discarded.
    pub fn complete(&mut self, epoch: u64, outcome: Result<(), SiteError>) {
        if epoch != self.epoch || !self.state.is_submitting() {
            tracing::debug!(epoch, current = self.epoch, "stale submission outcome discarded");
            return;
        }

        match outcome {
            Ok(()) => {
                self.state = SubmissionState::Succeeded;
                self.request.reset();
                self.sink.notify(Notification::normal(
                    "Quote Request Submitted",
                    "We'll be in touch with you shortly.",
                ));
            }
            Err(err) => {
                tracing::warn!("quote submission failed: {}", err);
                self.state = SubmissionState::Failed;
                self.sink.notify(Notification::destructive(
                    "Submission Error",
                    "There was a problem submitting your request. Please try again.",
                ));
            }
        }
    }

    /// Return from `Succeeded` to `Idle` after the display duration.
    ///
    /// Called by the timer task scheduled when a submission succeeds; the
    /// epoch makes the timer cancellable, since a newer submission bumps
    /// it and an unmounted component simply never calls this.
    pub fn acknowledge(&mut self, epoch: u64) {
        if epoch == self.epoch && self.state == SubmissionState::Succeeded {
            self.state = SubmissionState::Idle;
        }
    }
}

/// Await the transport under the bounded wait, folding a timeout into the
/// ordinary submission-failure path.
pub async fn deliver<T: QuoteTransport>(
    transport: &T,
    wait: Duration,
    payload: &QuoteRequest,
) -> SiteResult<()> {
    match tokio::time::timeout(wait, transport.submit(payload)).await {
        Ok(Ok(())) => Ok(()),
        Ok(Err(reason)) => Err(SiteError::Submission(reason)),
        Err(_) => Err(SiteError::SubmissionTimeout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Sink that records every notification it receives.
    #[derive(Clone, Default)]
    pub(crate) struct RecordingSink {
        notes: Arc<Mutex<Vec<Notification>>>,
    }

    impl RecordingSink {
        pub fn notes(&self) -> Vec<Notification> {
            self.notes.lock().clone()
        }
    }

    impl NotificationSink for RecordingSink {
        fn notify(&self, note: Notification) {
            self.notes.lock().push(note);
        }
    }

    /// Transport that counts invocations and returns a configured outcome.
    #[derive(Clone)]
    struct CountingTransport {
        calls: Arc<AtomicUsize>,
        outcome: Result<(), String>,
    }

    impl CountingTransport {
        fn succeeding() -> Self {
            Self {
                calls: Arc::new(AtomicUsize::new(0)),
                outcome: Ok(()),
            }
        }

        fn failing(reason: &str) -> Self {
            Self {
                calls: Arc::new(AtomicUsize::new(0)),
                outcome: Err(reason.to_string()),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl QuoteTransport for CountingTransport {
        async fn submit(&self, _request: &QuoteRequest) -> Result<(), String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }

    fn filled_controller(sink: RecordingSink) -> QuoteFormController<RecordingSink> {
        let mut controller = QuoteFormController::new(sink);
        controller.update_field(QuoteField::Name, "Thandi Nkosi");
        controller.update_field(QuoteField::Email, "thandi@example.co.za");
        controller.update_field(QuoteField::Message, "Weekly road freight, JHB to DBN");
        controller
    }

    #[tokio::test]
    async fn test_missing_required_field_never_contacts_transport() {
        let sink = RecordingSink::default();
        let transport = CountingTransport::succeeding();
        let mut controller = QuoteFormController::new(sink);
        controller.update_field(QuoteField::Name, "Thandi Nkosi");

        let err = controller.begin_submit().unwrap_err();
        match err {
            SiteError::Validation(fields) => {
                assert_eq!(fields, vec![QuoteField::Email, QuoteField::Message]);
            }
            other => panic!("expected validation error, got {other}"),
        }
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_bad_email_shape_rejected_before_transport() {
        let sink = RecordingSink::default();
        let mut controller = filled_controller(sink);
        controller.update_field(QuoteField::Email, "not-an-email");

        assert!(matches!(
            controller.begin_submit(),
            Err(SiteError::InvalidEmail(_))
        ));
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_successful_submission_resets_form_and_notifies_once() {
        let sink = RecordingSink::default();
        let transport = CountingTransport::succeeding();
        let mut controller = filled_controller(sink.clone());

        let pending = controller.begin_submit().unwrap();
        assert_eq!(controller.state(), SubmissionState::Submitting);

        let outcome = deliver(&transport, SUBMIT_TIMEOUT, &pending.payload).await;
        controller.complete(pending.epoch, outcome);

        assert_eq!(controller.state(), SubmissionState::Succeeded);
        assert_eq!(controller.request(), &QuoteRequest::default());
        assert_eq!(transport.calls(), 1);

        let notes = sink.notes();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].severity, Severity::Normal);
        assert_eq!(notes[0].title, "Quote Request Submitted");
    }

    #[tokio::test]
    async fn test_failed_submission_preserves_fields_and_allows_retry() {
        let sink = RecordingSink::default();
        let transport = CountingTransport::failing("relay unreachable");
        let mut controller = filled_controller(sink.clone());

        let pending = controller.begin_submit().unwrap();
        let outcome = deliver(&transport, SUBMIT_TIMEOUT, &pending.payload).await;
        controller.complete(pending.epoch, outcome);

        assert_eq!(controller.state(), SubmissionState::Failed);
        assert_eq!(controller.request().name, "Thandi Nkosi");
        assert_eq!(controller.request().message, "Weekly road freight, JHB to DBN");

        let notes = sink.notes();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].severity, Severity::Destructive);

        // Retry is allowed immediately from Failed
        assert!(controller.begin_submit().is_ok());
        assert_eq!(controller.state(), SubmissionState::Submitting);
    }

    #[tokio::test]
    async fn test_second_submit_while_submitting_is_rejected() {
        let sink = RecordingSink::default();
        let mut controller = filled_controller(sink);

        let first = controller.begin_submit().unwrap();
        assert!(matches!(
            controller.begin_submit(),
            Err(SiteError::AlreadySubmitting)
        ));
        // The first submission is untouched by the rejected call
        assert_eq!(controller.epoch(), first.epoch);
        assert_eq!(controller.state(), SubmissionState::Submitting);
    }

    #[tokio::test]
    async fn test_stale_outcome_is_discarded() {
        let sink = RecordingSink::default();
        let mut controller = filled_controller(sink.clone());

        let stale = controller.begin_submit().unwrap();
        controller.complete(stale.epoch, Err(SiteError::SubmissionTimeout));
        assert_eq!(controller.state(), SubmissionState::Failed);

        // A new attempt supersedes the old epoch
        let fresh = controller.begin_submit().unwrap();
        assert!(fresh.epoch > stale.epoch);

        // The stale epoch's outcome must not complete the fresh attempt
        controller.complete(stale.epoch, Ok(()));
        assert_eq!(controller.state(), SubmissionState::Submitting);

        controller.complete(fresh.epoch, Ok(()));
        assert_eq!(controller.state(), SubmissionState::Succeeded);
        // One failure note plus one success note, nothing from the stale Ok
        assert_eq!(sink.notes().len(), 2);
    }

    #[tokio::test]
    async fn test_acknowledge_returns_to_idle_only_for_current_epoch() {
        let sink = RecordingSink::default();
        let mut controller = filled_controller(sink);

        let pending = controller.begin_submit().unwrap();
        controller.complete(pending.epoch, Ok(()));
        assert_eq!(controller.state(), SubmissionState::Succeeded);

        // Wrong epoch: no-op
        controller.acknowledge(pending.epoch + 1);
        assert_eq!(controller.state(), SubmissionState::Succeeded);

        controller.acknowledge(pending.epoch);
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_editing_after_success_returns_to_idle() {
        let sink = RecordingSink::default();
        let mut controller = filled_controller(sink);

        let pending = controller.begin_submit().unwrap();
        controller.complete(pending.epoch, Ok(()));
        assert_eq!(controller.state(), SubmissionState::Succeeded);

        controller.update_field(QuoteField::Name, "Sipho Dlamini");
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_transport_timeout_counts_as_failure() {
        struct NeverResolves;
        impl QuoteTransport for NeverResolves {
            async fn submit(&self, _request: &QuoteRequest) -> Result<(), String> {
                std::future::pending().await
            }
        }

        let sink = RecordingSink::default();
        let mut controller = filled_controller(sink.clone());
        let pending = controller.begin_submit().unwrap();

        let outcome = deliver(&NeverResolves, SUBMIT_TIMEOUT, &pending.payload).await;
        assert!(matches!(outcome, Err(SiteError::SubmissionTimeout)));

        controller.complete(pending.epoch, outcome);
        assert_eq!(controller.state(), SubmissionState::Failed);
        assert_eq!(sink.notes().len(), 1);
        assert_eq!(sink.notes()[0].severity, Severity::Destructive);
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_transport_succeeds_after_delay() {
        let transport = SimulatedTransport::default();
        let mut request = QuoteRequest::default();
        request.set_field(QuoteField::Name, "Thandi");

        let result = deliver(&transport, SUBMIT_TIMEOUT, &request).await;
        assert!(result.is_ok());
    }
}
