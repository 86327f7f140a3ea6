use std::collections::BTreeMap;

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use strum::{AsRefStr, Display, EnumString};
use validator::Validate;

/// Address grammar enforced on the email field: no leading, trailing or
/// doubled dots in the local part, and a dotted domain ending in a TLD of at
/// least two letters. Also rendered for the browser, so it stays within the
/// syntax shared by Rust and JavaScript regexes.
pub const EMAIL_PATTERN: &str =
    r"^(?:[A-Za-z0-9_'+-]+\.)*[A-Za-z0-9_'+-]*[A-Za-z0-9_+-]@(?:[A-Za-z0-9][A-Za-z0-9-]*\.)+[A-Za-z]{2,}$";

static RE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumString,
    Display,
    AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Location,
    Message,
}

/// What a visitor submits through the contact form.
#[derive(Validate, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInquiry {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    #[serde(default)]
    pub name: String,
    #[validate(
        email(message = "Invalid email address"),
        regex(path = *RE_EMAIL, message = "Invalid email address")
    )]
    #[serde(default)]
    pub email: String,
    #[validate(length(min = 10, message = "Please enter a valid phone number"))]
    #[serde(default)]
    pub phone: String,
    #[validate(length(min = 2, message = "Please enter your location"))]
    #[serde(default)]
    pub location: String,
    #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
    #[serde(default)]
    pub message: String,
}

impl Field {
    /// Minimum number of characters, for the length-checked fields.
    pub fn min_length(self) -> Option<usize> {
        match self {
            Self::Name | Self::Location => Some(2),
            Self::Phone | Self::Message => Some(10),
            Self::Email => None,
        }
    }

    /// Message shown when the field is rejected.
    pub fn rule_message(self) -> &'static str {
        match self {
            Self::Name => "Name must be at least 2 characters",
            Self::Email => "Invalid email address",
            Self::Phone => "Please enter a valid phone number",
            Self::Location => "Please enter your location",
            Self::Message => "Message must be at least 10 characters",
        }
    }

    /// Pattern the value must match, for the email field.
    pub fn pattern(self) -> Option<&'static str> {
        match self {
            Self::Email => Some(EMAIL_PATTERN),
            _ => None,
        }
    }
}

impl ContactInquiry {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Location => &self.location,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Location => self.location = value,
            Field::Message => self.message = value,
        }
    }

    /// Checks every field and collects one message per rejected field.
    pub fn check(&self) -> Result<(), FieldErrors> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };

        let mut rejected = BTreeMap::new();
        for (key, errs) in errors.field_errors().iter() {
            let key: &str = key;
            let Ok(field) = key.parse::<Field>() else {
                tracing::warn!(field = key, "validation error on unknown field");
                continue;
            };

            let Some(err) = errs.first() else {
                continue;
            };

            let message = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| err.code.to_string());

            rejected.insert(field, message);
        }

        Err(FieldErrors(rejected))
    }
}

/// Rejection reason per field. Empty when everything is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} field(s) rejected", .0.len())]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}
