use dotenvy::dotenv;
use axum::{
    http::{header, HeaderValue, Response, StatusCode},
    routing::{get, post},
    Router,
};
use std::any::Any;
use std::path::Path;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use elysian_shared::ValidationRules;

mod config {
    pub mod form_fields;
    pub mod settings;
}
mod channels;
mod handlers {
    pub mod register_handlers;
}

use channels::{EmailChannel, RegistrationChannel, SpreadsheetChannel};
use config::settings::Settings;
use handlers::register_handlers;

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    channels: Vec<Arc<dyn RegistrationChannel>>,
    rules: ValidationRules,
}

impl AppState {
    pub fn new(channels: Vec<Arc<dyn RegistrationChannel>>) -> Self {
        Self {
            channels,
            rules: ValidationRules::CURRENT,
        }
    }
}

// Spreadsheet first, then email.
fn build_channels(settings: &Settings) -> Vec<Arc<dyn RegistrationChannel>> {
    let client = reqwest::Client::new();
    vec![
        Arc::new(SpreadsheetChannel::new(client, settings.spreadsheet_form_url.clone())),
        Arc::new(EmailChannel::new(
            settings.resend_api_key.as_deref(),
            settings.sender_email.clone(),
            settings.notification_email.clone(),
        )),
    ]
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<String> {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("Handler panicked: {}", detail);
    sentry::capture_message(&format!("Handler panicked: {}", detail), sentry::Level::Fatal);

    let mut response = Response::new(
        serde_json::json!({"error": register_handlers::GENERIC_FAILURE}).to_string(),
    );
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}

pub fn build_router(state: Arc<AppState>, static_dir: Option<&Path>) -> Router {
    let mut app = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/register", post(register_handlers::register))
        .with_state(state);

    // The SPA handles its own routes, so unknown paths fall back to index.html.
    if let Some(dir) = static_dir {
        app = app.fallback_service(
            ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html"))),
        );
    }

    app.layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(AnyOrigin)
                .allow_headers([header::CONTENT_TYPE])
                .expose_headers([header::CONTENT_TYPE]),
        )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::from_env()?;

    let _guard = settings.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    if settings.resend_api_key.is_none() {
        tracing::warn!("RESEND_API_KEY is not set, notification emails will fail");
    }

    let state = Arc::new(AppState::new(build_channels(&settings)));
    let app = build_router(state, settings.static_dir.as_deref());

    let listener = tokio::net::TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("Listening on {} ({:?})", settings.bind_addr, settings.environment);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod main_tests;
