use std::collections::BTreeSet;

use elysian_shared::{
    validate_all, ContactMethod, Field, FieldErrors, RegistrationRequest, ValidationRules,
    MAX_FREE_TEXT_CHARS,
};

pub const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

/// What the visitor has typed so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub hoping: String,
    pub anything: String,
    pub contact_methods: BTreeSet<ContactMethod>,
    pub consent: bool,
}

/// One edit coming from an input.
#[derive(Debug, Clone, PartialEq)]
pub enum FormInput {
    Name(String),
    Email(String),
    Phone(String),
    Hoping(String),
    Anything(String),
    ToggleContact(ContactMethod),
    Consent(bool),
}

fn cap(value: String) -> String {
    if value.chars().count() > MAX_FREE_TEXT_CHARS {
        value.chars().take(MAX_FREE_TEXT_CHARS).collect()
    } else {
        value
    }
}

impl FormState {
    /// Applies an edit and returns the validated field it touched, if any.
    pub fn apply(&mut self, input: FormInput) -> Option<Field> {
        match input {
            FormInput::Name(v) => {
                self.name = v;
                Some(Field::Name)
            }
            FormInput::Email(v) => {
                self.email = v;
                Some(Field::Email)
            }
            FormInput::Phone(v) => {
                self.phone = v;
                Some(Field::Phone)
            }
            FormInput::Hoping(v) => {
                self.hoping = cap(v);
                None
            }
            FormInput::Anything(v) => {
                self.anything = cap(v);
                None
            }
            FormInput::ToggleContact(method) => {
                if !self.contact_methods.remove(&method) {
                    self.contact_methods.insert(method);
                }
                None
            }
            FormInput::Consent(v) => {
                self.consent = v;
                Some(Field::Consent)
            }
        }
    }

    pub fn to_request(&self) -> RegistrationRequest {
        let optional = |s: &str| (!s.is_empty()).then(|| s.to_string());
        RegistrationRequest {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            phone: Some(self.phone.clone()),
            hoping: optional(&self.hoping),
            anything: optional(&self.anything),
            contact_methods: self.contact_methods.iter().copied().collect(),
            consent: self.consent,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> FieldErrors {
        validate_all(&self.to_request(), ValidationRules::CURRENT)
    }
}

/// Field errors plus an optional form-level error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    pub fields: FieldErrors,
    pub form: Option<&'static str>,
}

impl FormErrors {
    pub fn from_fields(fields: FieldErrors) -> Self {
        Self { fields, form: None }
    }

    pub fn generic() -> Self {
        Self {
            fields: FieldErrors::new(),
            form: Some(GENERIC_ERROR),
        }
    }

    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.fields.get(&field).map(|e| e.client_message())
    }

    pub fn clear(&mut self, field: Field) {
        self.fields.remove(&field);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
    Confirmed,
    Failed,
}

impl SubmitPhase {
    pub fn is_busy(self) -> bool {
        self == SubmitPhase::Submitting
    }

    pub fn button_label(self) -> &'static str {
        if self.is_busy() {
            "Sending..."
        } else {
            "Request Invitation"
        }
    }
}
