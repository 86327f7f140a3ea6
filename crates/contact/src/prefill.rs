use std::time::Duration;

use strum::{AsRefStr, Display};
use url::Url;

/// Fragment that asks the contact page to bring the form into view.
pub const FORM_ANCHOR: &str = "contact-form";

/// Wait before scrolling so the layout can settle.
pub const SCROLL_DELAY: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum FocusTarget {
    Message,
    FirstField,
}

/// What the contact page does with its URL on load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefillPlan {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    /// Set when the form should scroll into view and take focus.
    pub focus: Option<FocusTarget>,
    /// Path and fragment without the query, when a query was present.
    pub normalized_url: Option<String>,
}

impl PrefillPlan {
    /// Reads prefill values from an absolute URL or a request target such
    /// as `/contact?phone=...`. Anything unparseable yields an empty plan.
    pub fn from_url(input: &str) -> Self {
        match parse(input) {
            Some(url) => Self::from_parsed(&url),
            None => {
                tracing::debug!(url = input, "ignoring unparseable contact page url");
                Self::default()
            }
        }
    }

    fn from_parsed(url: &Url) -> Self {
        let mut plan = Self::default();

        for (key, value) in url.query_pairs() {
            if value.is_empty() {
                continue;
            }

            match key.as_ref() {
                "phone" => plan.phone = Some(value.into_owned()),
                "email" => plan.email = Some(value.into_owned()),
                "message" => plan.message = Some(value.into_owned()),
                _ => {}
            }
        }

        if plan.has_values() || url.fragment() == Some(FORM_ANCHOR) {
            plan.focus = Some(if plan.message.is_some() {
                FocusTarget::Message
            } else {
                FocusTarget::FirstField
            });
        }

        if url.query().is_some() {
            let mut normalized = url.path().to_owned();
            if let Some(fragment) = url.fragment() {
                normalized.push('#');
                normalized.push_str(fragment);
            }
            plan.normalized_url = Some(normalized);
        }

        plan
    }

    pub fn has_values(&self) -> bool {
        self.phone.is_some() || self.email.is_some() || self.message.is_some()
    }
}

fn parse(input: &str) -> Option<Url> {
    if let Ok(url) = Url::parse(input) {
        return Some(url);
    }

    Url::parse("http://localhost/").ok()?.join(input).ok()
}
