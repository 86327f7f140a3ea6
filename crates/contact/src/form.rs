use std::sync::Arc;

use tokio::sync::watch;

use crate::{
    ContactInquiry, DeliveryProvider, Field, FieldErrors, Notice, PrefillPlan, SendRequest,
    SubmissionConfig, SubmissionState, TemplateParams,
};

/// Result of one click on the submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The control is disabled; nothing happened.
    Inert,
    /// At least one field is rejected.
    Invalid,
    /// Service or template id missing; no call was made.
    NotConfigured,
    Sent,
    Failed,
}

/// One contact form, owned by a single page view.
///
/// State only moves through [`ContactForm::initialize`], [`ContactForm::submit`]
/// and [`ContactForm::settle`].
pub struct ContactForm {
    config: SubmissionConfig,
    provider: Arc<dyn DeliveryProvider>,
    state: watch::Sender<SubmissionState>,
    provider_ready: bool,
    inquiry: ContactInquiry,
    errors: FieldErrors,
    show_errors: bool,
    notices: Vec<Notice>,
}

/// Holds the form in `Submitting` until an outcome is recorded. Dropping it
/// early (cancelled request, panic) still releases the control.
struct InFlight<'a>(&'a watch::Sender<SubmissionState>);

impl InFlight<'_> {
    fn finish(self, outcome: SubmissionState) {
        self.0.send_replace(outcome);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.send_if_modified(|state| {
            if *state != SubmissionState::Submitting {
                return false;
            }

            *state = SubmissionState::Failed;
            true
        });
    }
}

impl ContactForm {
    pub fn new(config: SubmissionConfig, provider: Arc<dyn DeliveryProvider>) -> Self {
        let (state, _) = watch::channel(SubmissionState::Uninitialized);

        Self {
            config,
            provider,
            state,
            provider_ready: false,
            inquiry: ContactInquiry::default(),
            errors: FieldErrors::default(),
            show_errors: false,
            notices: vec![],
        }
    }

    pub fn state(&self) -> SubmissionState {
        *self.state.borrow()
    }

    /// Observes every state transition.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    fn transition(&self, next: SubmissionState) {
        tracing::debug!(from = %self.state(), to = %next, "contact form transition");
        self.state.send_replace(next);
    }

    /// Sets up the delivery provider. Only the first call has an effect.
    pub fn initialize(&mut self) {
        if self.state() != SubmissionState::Uninitialized {
            return;
        }

        self.transition(SubmissionState::Initializing);

        let Some(public_key) = self.config.public_key() else {
            tracing::warn!("email public key is not configured, contact form disabled");
            self.notices.push(Notice::ConfigurationError);
            self.transition(SubmissionState::Failed);
            return;
        };

        if let Err(err) = self.provider.init(public_key) {
            tracing::error!(err = %err, "failed to initialize email provider");
            self.notices.push(Notice::ServiceError);
            self.transition(SubmissionState::Failed);
            return;
        }

        self.provider_ready = true;
        self.transition(SubmissionState::Ready);
    }

    /// Whether the submit control accepts a click.
    pub fn is_submit_enabled(&self) -> bool {
        self.provider_ready
            && matches!(
                self.state(),
                SubmissionState::Ready | SubmissionState::Succeeded | SubmissionState::Failed
            )
    }

    pub fn inquiry(&self) -> &ContactInquiry {
        &self.inquiry
    }

    /// Field errors currently displayed next to the inputs.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// True once a submit attempt has put validation on screen.
    pub fn shows_errors(&self) -> bool {
        self.show_errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn apply_prefill(&mut self, plan: &PrefillPlan) {
        let values = [
            (Field::Phone, &plan.phone),
            (Field::Email, &plan.email),
            (Field::Message, &plan.message),
        ];

        for (field, value) in values {
            if let Some(value) = value {
                self.inquiry.set(field, value.to_owned());
            }
        }
    }

    /// Edits one field. Once errors are on screen they follow every edit.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.inquiry.set(field, value);

        if self.show_errors {
            self.revalidate();
        }
    }

    /// Replaces every field at once, as a posted form does.
    pub fn fill(&mut self, inquiry: ContactInquiry) {
        self.inquiry = inquiry;

        if self.show_errors {
            self.revalidate();
        }
    }

    fn revalidate(&mut self) -> bool {
        self.errors = match self.inquiry.check() {
            Ok(()) => FieldErrors::default(),
            Err(errors) => errors,
        };

        self.errors.is_empty()
    }

    /// Sends the inquiry once. Values are cleared on success and kept on
    /// failure so the visitor can click again.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.is_submit_enabled() {
            return SubmitOutcome::Inert;
        }

        self.show_errors = true;
        if !self.revalidate() {
            return SubmitOutcome::Invalid;
        }

        let Some((service_id, template_id)) = self.config.route() else {
            tracing::warn!("email service or template id is not configured");
            self.notices.push(Notice::ConfigurationError);
            return SubmitOutcome::NotConfigured;
        };

        let Some(public_key) = self.config.public_key() else {
            self.notices.push(Notice::ConfigurationError);
            return SubmitOutcome::NotConfigured;
        };

        let request = SendRequest {
            public_key: public_key.to_owned(),
            service_id: service_id.to_owned(),
            template_id: template_id.to_owned(),
            params: TemplateParams::new(&self.inquiry, self.config.recipient()),
        };

        self.transition(SubmissionState::Submitting);
        let in_flight = InFlight(&self.state);
        let result = self.provider.send(&request).await;

        match result {
            Ok(()) => {
                tracing::info!(
                    location = %self.inquiry.location,
                    "contact inquiry delivered"
                );
                in_flight.finish(SubmissionState::Succeeded);
                self.notices.push(Notice::Success);
                self.inquiry = ContactInquiry::default();
                self.errors = FieldErrors::default();
                self.show_errors = false;

                SubmitOutcome::Sent
            }
            Err(err) => {
                tracing::error!(err = %err, "failed to deliver contact inquiry");
                in_flight.finish(SubmissionState::Failed);
                self.notices.push(Notice::Failure);

                SubmitOutcome::Failed
            }
        }
    }

    /// Returns a settled form to `Ready` for the next inquiry.
    pub fn settle(&mut self) {
        if self.provider_ready && self.state().is_outcome() {
            self.transition(SubmissionState::Ready);
        }
    }
}
