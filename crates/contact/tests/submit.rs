use jamboagri_contact::{
    ContactInquiry, DEFAULT_RECIPIENT, Field, Notice, SubmissionConfig, SubmissionState,
    SubmitOutcome,
};

mod helpers;

use helpers::{RecordingProvider, full_config, ready_form, valid_inquiry};

#[tokio::test]
async fn test_success_clears_fields() -> anyhow::Result<()> {
    let (mut form, provider) = ready_form(full_config(), RecordingProvider::default());
    form.fill(valid_inquiry());

    assert_eq!(form.submit().await, SubmitOutcome::Sent);
    assert_eq!(form.inquiry(), &ContactInquiry::default());
    assert_eq!(form.notices(), &[Notice::Success]);
    assert_eq!(form.state(), SubmissionState::Succeeded);
    assert!(form.is_submit_enabled());

    let sent = provider.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].service_id, "service_jambo");
    assert_eq!(sent[0].template_id, "template_inquiry");
    assert_eq!(sent[0].public_key, "public_key");
    assert_eq!(sent[0].params.from_name, "Jo");
    assert_eq!(sent[0].params.to_email, DEFAULT_RECIPIENT);

    Ok(())
}

#[tokio::test]
async fn test_failure_keeps_fields() -> anyhow::Result<()> {
    let (mut form, provider) = ready_form(full_config(), RecordingProvider::failing_send());
    form.fill(valid_inquiry());

    assert_eq!(form.submit().await, SubmitOutcome::Failed);
    assert_eq!(form.inquiry(), &valid_inquiry());
    assert_eq!(form.notices(), &[Notice::Failure]);
    assert_eq!(form.state(), SubmissionState::Failed);
    assert!(form.is_submit_enabled());
    assert_eq!(provider.send_count(), 1);

    // Manual retry goes out again, exactly once more.
    assert_eq!(form.submit().await, SubmitOutcome::Failed);
    assert_eq!(provider.send_count(), 2);

    Ok(())
}

#[tokio::test]
async fn test_missing_ids_never_send() -> anyhow::Result<()> {
    for config in [
        SubmissionConfig {
            service_id: None,
            ..full_config()
        },
        SubmissionConfig {
            template_id: None,
            ..full_config()
        },
        SubmissionConfig {
            service_id: Some(" ".to_owned()),
            template_id: None,
            ..full_config()
        },
    ] {
        let (mut form, provider) = ready_form(config, RecordingProvider::default());
        assert_eq!(form.state(), SubmissionState::Ready);
        form.fill(valid_inquiry());

        assert_eq!(form.submit().await, SubmitOutcome::NotConfigured);
        assert_eq!(provider.send_count(), 0);
        assert_eq!(form.notices(), &[Notice::ConfigurationError]);
        assert_eq!(form.state(), SubmissionState::Ready);
        assert_eq!(form.inquiry(), &valid_inquiry());
    }

    Ok(())
}

#[tokio::test]
async fn test_missing_public_key_disables_form() -> anyhow::Result<()> {
    let config = SubmissionConfig {
        public_key: None,
        ..full_config()
    };
    let (mut form, provider) = ready_form(config, RecordingProvider::default());

    assert_eq!(provider.init_calls.load(std::sync::atomic::Ordering::SeqCst), 0);
    assert_eq!(form.state(), SubmissionState::Failed);
    assert_eq!(form.notices(), &[Notice::ConfigurationError]);
    assert!(!form.is_submit_enabled());

    form.fill(valid_inquiry());
    assert_eq!(form.submit().await, SubmitOutcome::Inert);
    assert_eq!(provider.send_count(), 0);

    Ok(())
}

#[tokio::test]
async fn test_init_failure_disables_form() -> anyhow::Result<()> {
    let (mut form, provider) = ready_form(full_config(), RecordingProvider::failing_init());

    assert_eq!(form.notices(), &[Notice::ServiceError]);
    assert!(!form.is_submit_enabled());

    form.fill(valid_inquiry());
    assert_eq!(form.submit().await, SubmitOutcome::Inert);
    assert_eq!(provider.send_count(), 0);

    // Initialization runs once per form.
    form.initialize();
    assert_eq!(provider.init_calls.load(std::sync::atomic::Ordering::SeqCst), 1);

    Ok(())
}

#[tokio::test]
async fn test_invalid_input_is_not_sent() -> anyhow::Result<()> {
    let (mut form, provider) = ready_form(full_config(), RecordingProvider::default());
    form.fill(ContactInquiry {
        email: "not-an-email".to_owned(),
        ..valid_inquiry()
    });

    assert_eq!(form.submit().await, SubmitOutcome::Invalid);
    assert_eq!(provider.send_count(), 0);
    assert_eq!(form.errors().len(), 1);
    assert_eq!(form.error(Field::Email), Some("Invalid email address"));
    assert_eq!(form.state(), SubmissionState::Ready);
    assert!(form.shows_errors());

    // Correcting the field clears its error right away.
    form.set_field(Field::Email, "a@b.com");
    assert!(form.errors().is_empty());

    form.set_field(Field::Name, "J");
    assert_eq!(
        form.error(Field::Name),
        Some("Name must be at least 2 characters")
    );

    Ok(())
}

#[tokio::test]
async fn test_errors_hidden_before_first_submit() -> anyhow::Result<()> {
    let (mut form, _) = ready_form(full_config(), RecordingProvider::default());

    form.set_field(Field::Name, "J");
    assert!(form.errors().is_empty());
    assert!(!form.shows_errors());

    Ok(())
}

#[tokio::test]
async fn test_control_disabled_while_sending() -> anyhow::Result<()> {
    for provider in [RecordingProvider::default(), RecordingProvider::failing_send()] {
        let provider = std::sync::Arc::new(provider);
        let mut form = jamboagri_contact::ContactForm::new(full_config(), provider.clone());
        form.initialize();
        form.fill(valid_inquiry());
        provider.watch(&form);

        form.submit().await;

        assert_eq!(
            provider.observed.lock().unwrap().as_slice(),
            &[SubmissionState::Submitting]
        );
        assert!(form.is_submit_enabled());

        form.settle();
        assert_eq!(form.state(), SubmissionState::Ready);
        form.settle();
        assert_eq!(form.state(), SubmissionState::Ready);
        assert!(form.is_submit_enabled());
    }

    Ok(())
}

#[tokio::test]
async fn test_configured_recipient_is_used() -> anyhow::Result<()> {
    let config = SubmissionConfig {
        recipient: Some("orders@jamboagri.co.ke".to_owned()),
        ..full_config()
    };
    let (mut form, provider) = ready_form(config, RecordingProvider::default());
    form.fill(valid_inquiry());
    form.submit().await;

    assert_eq!(
        provider.sent.lock().unwrap()[0].params.to_email,
        "orders@jamboagri.co.ke"
    );

    Ok(())
}

#[tokio::test]
async fn test_abandoned_send_releases_control() -> anyhow::Result<()> {
    let (mut form, provider) = ready_form(full_config(), RecordingProvider::stalled_send());
    form.fill(valid_inquiry());
    let mut states = form.subscribe();

    let abandoned =
        tokio::time::timeout(std::time::Duration::from_millis(50), form.submit()).await;

    assert!(abandoned.is_err());
    assert_eq!(provider.send_count(), 1);
    assert!(states.has_changed()?);
    assert_eq!(*states.borrow_and_update(), SubmissionState::Failed);
    assert_eq!(form.state(), SubmissionState::Failed);
    assert!(form.is_submit_enabled());

    form.settle();
    assert_eq!(form.state(), SubmissionState::Ready);

    Ok(())
}
