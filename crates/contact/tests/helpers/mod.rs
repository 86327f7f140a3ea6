#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use jamboagri_contact::{
    ContactForm, ContactInquiry, DeliveryProvider, ProviderError, SendRequest, SubmissionConfig,
    SubmissionState,
};
use tokio::sync::watch;

/// Provider double that records calls and answers from a script.
#[derive(Default)]
pub struct RecordingProvider {
    pub init_calls: AtomicUsize,
    pub fail_init: bool,
    pub fail_send: bool,
    /// Send never completes.
    pub stall_send: bool,
    pub sent: Mutex<Vec<SendRequest>>,
    /// Receives the form state while a send is outstanding.
    pub observer: Mutex<Option<watch::Receiver<SubmissionState>>>,
    pub observed: Mutex<Vec<SubmissionState>>,
}

impl RecordingProvider {
    pub fn failing_send() -> Self {
        Self {
            fail_send: true,
            ..Default::default()
        }
    }

    pub fn stalled_send() -> Self {
        Self {
            stall_send: true,
            ..Default::default()
        }
    }

    pub fn failing_init() -> Self {
        Self {
            fail_init: true,
            ..Default::default()
        }
    }

    pub fn send_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn watch(&self, form: &ContactForm) {
        *self.observer.lock().unwrap() = Some(form.subscribe());
    }
}

#[async_trait]
impl DeliveryProvider for RecordingProvider {
    fn init(&self, _public_key: &str) -> Result<(), ProviderError> {
        self.init_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_init {
            return Err(ProviderError::InvalidKey);
        }

        Ok(())
    }

    async fn send(&self, request: &SendRequest) -> Result<(), ProviderError> {
        if let Some(observer) = self.observer.lock().unwrap().as_ref() {
            self.observed.lock().unwrap().push(*observer.borrow());
        }

        self.sent.lock().unwrap().push(request.clone());

        if self.stall_send {
            std::future::pending::<()>().await;
        }

        if self.fail_send {
            return Err(ProviderError::Rejected {
                status: 400,
                body: "The template ID is invalid".to_owned(),
            });
        }

        Ok(())
    }
}

pub fn full_config() -> SubmissionConfig {
    SubmissionConfig {
        public_key: Some("public_key".to_owned()),
        service_id: Some("service_jambo".to_owned()),
        template_id: Some("template_inquiry".to_owned()),
        recipient: None,
    }
}

pub fn valid_inquiry() -> ContactInquiry {
    ContactInquiry {
        name: "Jo".to_owned(),
        email: "a@b.com".to_owned(),
        phone: "0712345678".to_owned(),
        location: "Mwea".to_owned(),
        message: "Need bananas please".to_owned(),
    }
}

pub fn ready_form(
    config: SubmissionConfig,
    provider: RecordingProvider,
) -> (ContactForm, Arc<RecordingProvider>) {
    let provider = Arc::new(provider);
    let mut form = ContactForm::new(config, provider.clone());
    form.initialize();

    (form, provider)
}
