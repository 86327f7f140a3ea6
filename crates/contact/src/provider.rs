use async_trait::async_trait;
use serde::Serialize;

use crate::ContactInquiry;

pub const EMAILJS_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("invalid public key")]
    InvalidKey,

    #[error("provider rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Template variables sent along with every inquiry.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub phone: String,
    pub location: String,
    pub message: String,
    pub to_email: String,
}

impl TemplateParams {
    pub fn new(inquiry: &ContactInquiry, recipient: impl Into<String>) -> Self {
        Self {
            from_name: inquiry.name.to_owned(),
            from_email: inquiry.email.to_owned(),
            phone: inquiry.phone.to_owned(),
            location: inquiry.location.to_owned(),
            message: inquiry.message.to_owned(),
            to_email: recipient.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendRequest {
    pub public_key: String,
    pub service_id: String,
    pub template_id: String,
    pub params: TemplateParams,
}

/// Third-party service that turns an inquiry into an email.
#[async_trait]
pub trait DeliveryProvider: Send + Sync {
    /// Prepares the client for `public_key`. Called once per form, before any send.
    fn init(&self, public_key: &str) -> Result<(), ProviderError>;

    /// Delivers one message. Never retried by the caller.
    async fn send(&self, request: &SendRequest) -> Result<(), ProviderError>;
}

#[derive(Serialize)]
struct EmailJsPayload<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a TemplateParams,
}

/// EmailJS REST API client.
///
/// Server-side calls must be allowed in the EmailJS account settings; when the
/// account runs in strict mode the private key is sent as `accessToken`.
#[derive(Clone)]
pub struct EmailJs {
    client: reqwest::Client,
    api_url: String,
    private_key: Option<String>,
}

impl EmailJs {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
            private_key: None,
        }
    }

    pub fn private_key(mut self, key: Option<String>) -> Self {
        self.private_key = key.filter(|k| !k.trim().is_empty());
        self
    }
}

impl Default for EmailJs {
    fn default() -> Self {
        Self::new(EMAILJS_API_URL)
    }
}

#[async_trait]
impl DeliveryProvider for EmailJs {
    fn init(&self, public_key: &str) -> Result<(), ProviderError> {
        let valid = !public_key.is_empty()
            && public_key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if !valid {
            return Err(ProviderError::InvalidKey);
        }

        Ok(())
    }

    #[tracing::instrument(skip_all, fields(service_id = %request.service_id, template_id = %request.template_id))]
    async fn send(&self, request: &SendRequest) -> Result<(), ProviderError> {
        let payload = EmailJsPayload {
            service_id: &request.service_id,
            template_id: &request.template_id,
            user_id: &request.public_key,
            access_token: self.private_key.as_deref(),
            template_params: &request.params,
        };

        let response = self.client.post(&self.api_url).json(&payload).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(status = status.as_u16(), "EmailJS accepted message");

        Ok(())
    }
}
