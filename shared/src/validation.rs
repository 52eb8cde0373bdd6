use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::registration::RegistrationRequest;

/// Upper bound on the optional free-text answers.
pub const MAX_FREE_TEXT_CHARS: usize = 500;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Which form revision's rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    pub require_phone: bool,
}

impl ValidationRules {
    pub const CURRENT: ValidationRules = ValidationRules { require_phone: true };
    pub const LEGACY: ValidationRules = ValidationRules { require_phone: false };
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self::CURRENT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Consent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    NameRequired,
    EmailRequired,
    EmailInvalid,
    PhoneRequired,
    ConsentRequired,
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::NameRequired => Field::Name,
            ValidationError::EmailRequired | ValidationError::EmailInvalid => Field::Email,
            ValidationError::PhoneRequired => Field::Phone,
            ValidationError::ConsentRequired => Field::Consent,
        }
    }

    /// Message returned in the `error` field of a 400 response.
    pub fn server_message(&self) -> &'static str {
        match self {
            ValidationError::NameRequired => "Name is required",
            ValidationError::EmailRequired => "Email is required",
            ValidationError::EmailInvalid => "Invalid email format",
            ValidationError::PhoneRequired => "Phone is required",
            ValidationError::ConsentRequired => "Consent is required",
        }
    }

    /// Message shown next to the field in the registration form.
    pub fn client_message(&self) -> &'static str {
        match self {
            ValidationError::NameRequired => "Please enter your name",
            ValidationError::EmailRequired => "Please enter your email",
            ValidationError::EmailInvalid => "Please enter a valid email address",
            ValidationError::PhoneRequired => "Please enter your phone number",
            ValidationError::ConsentRequired => "Please confirm you understand and accept",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.server_message())
    }
}

impl std::error::Error for ValidationError {}

/// At most one error per field.
pub type FieldErrors = BTreeMap<Field, ValidationError>;

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |s| s.trim().is_empty())
}

fn check_name(req: &RegistrationRequest) -> Option<ValidationError> {
    is_blank(req.name.as_deref()).then_some(ValidationError::NameRequired)
}

fn check_email(req: &RegistrationRequest) -> Option<ValidationError> {
    // Presence ignores padding; the format check does not.
    match req.email.as_deref() {
        None => Some(ValidationError::EmailRequired),
        Some(email) if email.trim().is_empty() => Some(ValidationError::EmailRequired),
        Some(email) if !EMAIL_RE.is_match(email) => Some(ValidationError::EmailInvalid),
        Some(_) => None,
    }
}

fn check_phone(req: &RegistrationRequest, rules: ValidationRules) -> Option<ValidationError> {
    (rules.require_phone && is_blank(req.phone.as_deref())).then_some(ValidationError::PhoneRequired)
}

fn check_consent(req: &RegistrationRequest) -> Option<ValidationError> {
    (!req.consent).then_some(ValidationError::ConsentRequired)
}

fn checks(req: &RegistrationRequest, rules: ValidationRules) -> [Option<ValidationError>; 4] {
    [
        check_name(req),
        check_email(req),
        check_phone(req, rules),
        check_consent(req),
    ]
}

/// Server-side validation: the first violation in the order
/// name, email presence, email format, phone, consent.
pub fn validate_first(req: &RegistrationRequest, rules: ValidationRules) -> Result<(), ValidationError> {
    match checks(req, rules).into_iter().flatten().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Form-side validation: every failing field with its own error.
pub fn validate_all(req: &RegistrationRequest, rules: ValidationRules) -> FieldErrors {
    checks(req, rules)
        .into_iter()
        .flatten()
        .map(|err| (err.field(), err))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> RegistrationRequest {
        RegistrationRequest {
            name: Some("Jane Doe".into()),
            email: Some("jane@example.com".into()),
            phone: Some("+971500000000".into()),
            consent: true,
            ..Default::default()
        }
    }

    #[test]
    fn accepts_complete_request() {
        assert_eq!(validate_first(&valid(), ValidationRules::CURRENT), Ok(()));
        assert!(validate_all(&valid(), ValidationRules::CURRENT).is_empty());
    }

    #[test]
    fn email_pattern() {
        for ok in ["a@b.co", "jane.doe+tag@example.co.uk", "Jane@Example.COM"] {
            let req = RegistrationRequest { email: Some(ok.into()), ..valid() };
            assert_eq!(validate_first(&req, ValidationRules::CURRENT), Ok(()), "{ok}");
        }
        for bad in [
            "not-an-email",
            "a@b",
            "@b.co",
            "a b@c.de",
            "a@@b.co",
            "a@b.",
            " jane@example.com ",
            "jane@example.com\n",
        ] {
            let req = RegistrationRequest { email: Some(bad.into()), ..valid() };
            assert_eq!(
                validate_first(&req, ValidationRules::CURRENT),
                Err(ValidationError::EmailInvalid),
                "{bad}"
            );
        }
    }

    #[test]
    fn first_violation_wins_in_documented_order() {
        let empty = RegistrationRequest::default();
        assert_eq!(
            validate_first(&empty, ValidationRules::CURRENT),
            Err(ValidationError::NameRequired)
        );

        let req = RegistrationRequest { name: Some("Jane".into()), ..Default::default() };
        assert_eq!(
            validate_first(&req, ValidationRules::CURRENT),
            Err(ValidationError::EmailRequired)
        );

        let req = RegistrationRequest { email: Some("nope".into()), ..req };
        assert_eq!(
            validate_first(&req, ValidationRules::CURRENT),
            Err(ValidationError::EmailInvalid)
        );

        let req = RegistrationRequest { email: Some("jane@example.com".into()), ..req };
        assert_eq!(
            validate_first(&req, ValidationRules::CURRENT),
            Err(ValidationError::PhoneRequired)
        );

        let req = RegistrationRequest { phone: Some("123".into()), ..req };
        assert_eq!(
            validate_first(&req, ValidationRules::CURRENT),
            Err(ValidationError::ConsentRequired)
        );
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let req = RegistrationRequest { name: Some("   ".into()), ..valid() };
        assert_eq!(validate_first(&req, ValidationRules::CURRENT), Err(ValidationError::NameRequired));
        let req = RegistrationRequest { phone: Some("\t".into()), ..valid() };
        assert_eq!(validate_first(&req, ValidationRules::CURRENT), Err(ValidationError::PhoneRequired));
    }

    #[test]
    fn legacy_rules_do_not_require_phone() {
        let req = RegistrationRequest { phone: None, ..valid() };
        assert_eq!(validate_first(&req, ValidationRules::LEGACY), Ok(()));
        assert_eq!(
            validate_first(&req, ValidationRules::CURRENT),
            Err(ValidationError::PhoneRequired)
        );
    }

    #[test]
    fn validate_all_reports_every_field_once() {
        let req = RegistrationRequest { email: Some("bad".into()), ..Default::default() };
        let errors = validate_all(&req, ValidationRules::CURRENT);
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[&Field::Name], ValidationError::NameRequired);
        assert_eq!(errors[&Field::Email], ValidationError::EmailInvalid);
        assert_eq!(errors[&Field::Phone], ValidationError::PhoneRequired);
        assert_eq!(errors[&Field::Consent], ValidationError::ConsentRequired);
    }

    #[test]
    fn messages_match_form_and_api_copy() {
        assert_eq!(ValidationError::EmailInvalid.server_message(), "Invalid email format");
        assert_eq!(ValidationError::NameRequired.client_message(), "Please enter your name");
        assert_eq!(ValidationError::ConsentRequired.to_string(), "Consent is required");
    }
}
