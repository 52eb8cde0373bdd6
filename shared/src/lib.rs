//! Types and rules shared by the registration server and the browser form.

pub mod registration;
pub mod validation;

pub use registration::{
    ContactMethod, ErrorResponse, NormalizedRegistration, RegisterResponse, RegistrationRequest,
    REGISTRATION_RECEIVED,
};
pub use validation::{
    validate_all, validate_first, Field, FieldErrors, ValidationError, ValidationRules,
    MAX_FREE_TEXT_CHARS,
};
