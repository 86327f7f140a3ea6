use serde::Deserialize;

/// Where inquiries go when no recipient is configured.
pub const DEFAULT_RECIPIENT: &str = "info@jamboagri.co.ke";

/// Delivery provider settings, built once at startup and handed to every
/// contact form.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct SubmissionConfig {
    #[serde(default)]
    pub public_key: Option<String>,
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(default)]
    pub recipient: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

impl SubmissionConfig {
    pub fn public_key(&self) -> Option<&str> {
        present(&self.public_key)
    }

    pub fn service_id(&self) -> Option<&str> {
        present(&self.service_id)
    }

    pub fn template_id(&self) -> Option<&str> {
        present(&self.template_id)
    }

    pub fn recipient(&self) -> &str {
        present(&self.recipient).unwrap_or(DEFAULT_RECIPIENT)
    }

    /// Service and template ids, when both are set.
    pub fn route(&self) -> Option<(&str, &str)> {
        Some((self.service_id()?, self.template_id()?))
    }
}
