use strum::{AsRefStr, Display};

/// Notification shown to the visitor. The wording is fixed; provider errors
/// never reach the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Notice {
    ConfigurationError,
    ServiceError,
    Success,
    Failure,
}

impl Notice {
    pub fn title(self) -> &'static str {
        match self {
            Self::ConfigurationError => "Configuration Error",
            Self::ServiceError => "Service Error",
            Self::Success => "Message Sent!",
            Self::Failure => "Failed to Send Message",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::ConfigurationError => {
                "The contact form is not configured yet. Please call or email us directly."
            }
            Self::ServiceError => {
                "The email service could not be started. Please reload the page or call us directly."
            }
            Self::Success => "We'll get back to you as soon as possible.",
            Self::Failure => {
                "Something went wrong. Please try again later or call us on +254 700 000 000."
            }
        }
    }

    pub fn is_error(self) -> bool {
        !matches!(self, Self::Success)
    }
}
