use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::validation::MAX_FREE_TEXT_CHARS;

pub const REGISTRATION_RECEIVED: &str = "Registration received successfully";

/// How a visitor would like to be contacted. Declaration order is the
/// canonical order used everywhere a set of methods is listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    Whatsapp,
    Telephone,
    Email,
}

impl ContactMethod {
    pub const ALL: [ContactMethod; 3] = [
        ContactMethod::Whatsapp,
        ContactMethod::Telephone,
        ContactMethod::Email,
    ];

    /// Wire value, as sent by the form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactMethod::Whatsapp => "whatsapp",
            ContactMethod::Telephone => "telephone",
            ContactMethod::Email => "email",
        }
    }

    /// Vocabulary used by the spreadsheet form and the notification email.
    pub fn external_label(&self) -> &'static str {
        match self {
            ContactMethod::Whatsapp => "WhatsApp",
            ContactMethod::Telephone => "Telephone",
            ContactMethod::Email => "Email",
        }
    }
}

impl fmt::Display for ContactMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactMethod {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "whatsapp" => Ok(ContactMethod::Whatsapp),
            "telephone" | "phone" => Ok(ContactMethod::Telephone),
            "email" => Ok(ContactMethod::Email),
            _ => Err(()),
        }
    }
}

/// Body of `POST /api/register`.
///
/// Accepts every revision of the form: the current one (`phone`, `hoping`,
/// `anything`, `contactMethods`) and the older one (`message`, `source`).
/// Fields that are missing, `null` or of the wrong JSON type deserialize as
/// absent, so a bad field is reported by validation instead of failing the parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    #[serde(default, alias = "hopingToGet", deserialize_with = "lenient_string")]
    pub hoping: Option<String>,
    #[serde(default, alias = "anythingToKnow", deserialize_with = "lenient_string")]
    pub anything: Option<String>,
    /// Deprecated: free text from the first revision of the form.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Deprecated: referral source from the first revision of the form.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "lenient_methods")]
    pub contact_methods: Vec<ContactMethod>,
    #[serde(default, deserialize_with = "lenient_consent")]
    pub consent: bool,
}

/// A registration that passed validation, canonicalized for the channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRegistration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub hoping: String,
    pub anything: String,
    pub source: String,
    pub contact_methods: BTreeSet<ContactMethod>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
}

impl RegisterResponse {
    pub fn received() -> Self {
        Self {
            success: true,
            message: REGISTRATION_RECEIVED.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl RegistrationRequest {
    /// Free text the visitor hopes to get, falling back to the old `message` field.
    pub fn hoping_text(&self) -> Option<&str> {
        self.hoping
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or(self.message.as_deref())
    }

    pub fn normalize(&self) -> NormalizedRegistration {
        NormalizedRegistration {
            name: trimmed(self.name.as_deref()),
            email: trimmed(self.email.as_deref()).to_lowercase(),
            phone: trimmed(self.phone.as_deref()),
            hoping: free_text(self.hoping_text()),
            anything: free_text(self.anything.as_deref()),
            source: trimmed(self.source.as_deref()),
            contact_methods: self.contact_methods.iter().copied().collect(),
        }
    }
}

impl NormalizedRegistration {
    /// Turns the registration back into a request in the current schema.
    pub fn to_request(&self) -> RegistrationRequest {
        let optional = |s: &str| (!s.is_empty()).then(|| s.to_string());
        RegistrationRequest {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            phone: Some(self.phone.clone()),
            hoping: optional(&self.hoping),
            anything: optional(&self.anything),
            message: None,
            source: optional(&self.source),
            contact_methods: self.contact_methods.iter().copied().collect(),
            consent: true,
        }
    }

    /// Contact methods in the external vocabulary, comma separated.
    pub fn contact_labels(&self) -> String {
        self.contact_methods
            .iter()
            .map(ContactMethod::external_label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn trimmed(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

// Trim, cap, and trim again so a cut landing on whitespace stays stable.
fn free_text(value: Option<&str>) -> String {
    let capped: String = value
        .map(str::trim)
        .unwrap_or_default()
        .chars()
        .take(MAX_FREE_TEXT_CHARS)
        .collect();
    capped.trim_end().to_string()
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn lenient_consent<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(matches!(
        Option::<Value>::deserialize(deserializer)?,
        Some(Value::Bool(true))
    ))
}

fn lenient_methods<'de, D>(deserializer: D) -> Result<Vec<ContactMethod>, D::Error>
where
    D: Deserializer<'de>,
{
    let methods: Vec<ContactMethod> = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .filter_map(|s| s.parse().ok())
            .collect(),
        _ => Vec::new(),
    };
    Ok(methods)
}
