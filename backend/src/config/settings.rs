use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_SPREADSHEET_FORM_URL: &str =
    "https://docs.google.com/forms/d/e/1FAIpQLSfElysianHouseRegistrations/formResponse";

// Used only when ENVIRONMENT=development.
const DEV_NOTIFICATION_EMAIL: &str = "hello@elysianhouse.com";
const DEV_SENDER_EMAIL: &str = "Elysian House <onboarding@resend.dev>";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{key} is not a valid socket address: {value}")]
    InvalidAddr { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    // for dev its 'development' and for prod anything else
    fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") | Some("development") => Environment::Development,
            Some(_) => Environment::Production,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub environment: Environment,
    pub bind_addr: SocketAddr,
    pub resend_api_key: Option<String>,
    pub notification_email: String,
    pub sender_email: String,
    pub spreadsheet_form_url: String,
    pub static_dir: Option<PathBuf>,
    pub sentry_dsn: Option<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let environment = Environment::parse(get("ENVIRONMENT").as_deref());

        let with_dev_fallback = |key: &'static str, fallback: &str| match get(key) {
            Some(value) => Ok(value),
            None if environment == Environment::Development => Ok(fallback.to_string()),
            None => Err(ConfigError::Missing(key)),
        };

        let bind = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind.parse().map_err(|_| ConfigError::InvalidAddr {
            key: "BIND_ADDR",
            value: bind.clone(),
        })?;

        Ok(Settings {
            environment,
            bind_addr,
            resend_api_key: get("RESEND_API_KEY"),
            notification_email: with_dev_fallback("NOTIFICATION_EMAIL", DEV_NOTIFICATION_EMAIL)?,
            sender_email: with_dev_fallback("SENDER_EMAIL", DEV_SENDER_EMAIL)?,
            spreadsheet_form_url: get("SPREADSHEET_FORM_URL")
                .unwrap_or_else(|| DEFAULT_SPREADSHEET_FORM_URL.to_string()),
            static_dir: get("STATIC_DIR").map(PathBuf::from),
            sentry_dsn: get("SENTRY_DSN"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn development_uses_fallbacks() {
        let s = settings(&[]).expect("settings");
        assert_eq!(s.environment, Environment::Development);
        assert_eq!(s.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(s.notification_email, DEV_NOTIFICATION_EMAIL);
        assert_eq!(s.sender_email, DEV_SENDER_EMAIL);
        assert_eq!(s.spreadsheet_form_url, DEFAULT_SPREADSHEET_FORM_URL);
        assert_eq!(s.resend_api_key, None);
    }

    #[test]
    fn production_requires_addresses() {
        let err = settings(&[("ENVIRONMENT", "production")]).unwrap_err();
        assert_eq!(err, ConfigError::Missing("NOTIFICATION_EMAIL"));

        let s = settings(&[
            ("ENVIRONMENT", "production"),
            ("NOTIFICATION_EMAIL", "team@example.com"),
            ("SENDER_EMAIL", "noreply@example.com"),
            ("RESEND_API_KEY", "re_123"),
        ])
        .expect("settings");
        assert_eq!(s.environment, Environment::Production);
        assert_eq!(s.notification_email, "team@example.com");
        assert_eq!(s.resend_api_key.as_deref(), Some("re_123"));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let s = settings(&[("RESEND_API_KEY", "  "), ("STATIC_DIR", "")]).expect("settings");
        assert_eq!(s.resend_api_key, None);
        assert_eq!(s.static_dir, None);
    }

    #[test]
    fn rejects_bad_bind_addr() {
        let err = settings(&[("BIND_ADDR", "localhost")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAddr { key: "BIND_ADDR", .. }));
    }
}
