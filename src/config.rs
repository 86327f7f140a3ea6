use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use jamboagri_contact::{EMAILJS_API_URL, SubmissionConfig};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Prebuilt assets served as-is, with `index.html` as the catch-all page.
    #[serde(default = "default_public_dir")]
    pub public_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            public_dir: default_public_dir(),
        }
    }
}

fn default_public_dir() -> String {
    "public".to_string()
}

/// EmailJS settings. Every field may be missing: the contact form then
/// shows a configuration notice instead of failing the whole site.
#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default)]
    pub public_key: Option<String>,
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(default)]
    pub recipient: Option<String>,
    /// Sent as `accessToken` when the EmailJS account runs in strict mode.
    #[serde(default)]
    pub private_key: Option<String>,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            public_key: None,
            service_id: None,
            template_id: None,
            recipient: None,
            private_key: None,
            api_url: default_api_url(),
        }
    }
}

fn default_api_url() -> String {
    EMAILJS_API_URL.to_string()
}

impl EmailConfig {
    pub fn submission(&self) -> SubmissionConfig {
        SubmissionConfig {
            public_key: self.public_key.clone(),
            service_id: self.service_id.clone(),
            template_id: self.template_id.clone(),
            recipient: self.recipient.clone(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy flat variables (EMAILJS_PUBLIC_KEY, CONTACT_EMAIL, ...)
    /// 2. Environment variables (JAMBOAGRI__EMAIL__SERVICE_ID, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("JAMBOAGRI")
                .separator("__")
                .try_parsing(true),
        );

        let legacy = [
            ("EMAILJS_PUBLIC_KEY", "email.public_key"),
            ("EMAILJS_SERVICE_ID", "email.service_id"),
            ("EMAILJS_TEMPLATE_ID", "email.template_id"),
            ("EMAILJS_PRIVATE_KEY", "email.private_key"),
            ("CONTACT_EMAIL", "email.recipient"),
        ];

        for (var, key) in legacy {
            if let Ok(value) = env::var(var) {
                builder = builder.set_override(key, value)?;
            }
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.email.api_url.trim().is_empty() {
            return Err("Email api_url must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        site: SiteConfig::default(),
        email: EmailConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}
