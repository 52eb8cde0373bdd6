use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    Json,
};
use chrono::Utc;
use elysian_shared::{
    validate_first, NormalizedRegistration, RegisterResponse, RegistrationRequest, ValidationError,
};
use serde_json::{json, Value};

use crate::channels::{fan_out, ChannelReport};
use crate::AppState;

pub const GENERIC_FAILURE: &str = "Failed to process registration";

type ApiError = (StatusCode, Json<serde_json::Value>);

pub fn processing_failure() -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": GENERIC_FAILURE})),
    )
}

/// POST /api/register
///
/// Validates the registration again (the form's checks are advisory), logs it
/// and forwards it to every configured channel. Channel failures are logged and
/// never change the response.
pub async fn register(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<RegisterResponse>, ApiError> {
    let request = parse_request(&body).map_err(|e| {
        tracing::error!("Registration error: {}", e);
        sentry::capture_message(&format!("Registration error: {}", e), sentry::Level::Error);
        processing_failure()
    })?;

    accept_registration(&state, &request).await.map_err(|violation| {
        tracing::debug!("Rejected registration: {}", violation);
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": violation.server_message()})),
        )
    })?;

    Ok(Json(RegisterResponse::received()))
}

/// Only a JSON object is a registration; its fields are read leniently.
fn parse_request(body: &[u8]) -> Result<RegistrationRequest, serde_json::Error> {
    let value: Value = serde_json::from_slice(body)?;
    if !value.is_object() {
        return Err(serde::de::Error::custom(format!(
            "expected a JSON object, got {}",
            json_kind(&value)
        )));
    }
    serde_json::from_value(value)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Validates, records and fans out one registration, returning each channel's outcome.
pub async fn accept_registration(
    state: &AppState,
    request: &RegistrationRequest,
) -> Result<Vec<ChannelReport>, ValidationError> {
    validate_first(request, state.rules)?;

    let registration = request.normalize();
    record_registration(&registration);

    let reports = fan_out(&state.channels, &registration).await;
    let failed = reports.iter().filter(|r| !r.is_delivered()).count();
    if failed > 0 {
        tracing::warn!(
            "Registration accepted with {} of {} channels failing",
            failed,
            reports.len()
        );
    }
    Ok(reports)
}

// Registrations are not stored; the log line is the record.
fn record_registration(registration: &NormalizedRegistration) {
    tracing::info!(
        target: "registrations",
        visitor = %registration.name,
        email = %registration.email,
        phone = %registration.phone,
        hoping = %registration.hoping,
        anything = %registration.anything,
        source = %registration.source,
        contact_methods = %registration.contact_labels(),
        timestamp = %Utc::now().to_rfc3339(),
        "New registration"
    );
}
