//! Outbound notification channels for accepted registrations.
//!
//! Every channel is attempted independently: a failing channel is logged and
//! recorded in its report, and never stops the channels after it.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use elysian_shared::NormalizedRegistration;
use thiserror::Error;

pub mod email;
pub mod spreadsheet;

pub use email::EmailChannel;
pub use spreadsheet::SpreadsheetChannel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Spreadsheet,
    Email,
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelKind::Spreadsheet => f.write_str("spreadsheet"),
            ChannelKind::Email => f.write_str("email"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("RESEND_API_KEY is not configured")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("email provider rejected the message: {0}")]
    Email(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationChannel: Send + Sync {
    fn kind(&self) -> ChannelKind;

    async fn deliver(&self, registration: &NormalizedRegistration) -> Result<(), ChannelError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryStatus {
    Delivered,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelReport {
    pub channel: ChannelKind,
    pub status: DeliveryStatus,
}

impl ChannelReport {
    pub fn is_delivered(&self) -> bool {
        self.status == DeliveryStatus::Delivered
    }
}

/// Hands the registration to every channel in order and reports each outcome.
pub async fn fan_out(
    channels: &[Arc<dyn RegistrationChannel>],
    registration: &NormalizedRegistration,
) -> Vec<ChannelReport> {
    let mut reports = Vec::with_capacity(channels.len());
    for channel in channels {
        let kind = channel.kind();
        let status = match channel.deliver(registration).await {
            Ok(()) => {
                tracing::info!(channel = %kind, "Registration forwarded");
                DeliveryStatus::Delivered
            }
            Err(e) => {
                tracing::error!(channel = %kind, error = %e, "Failed to forward registration");
                DeliveryStatus::Failed(e.to_string())
            }
        };
        reports.push(ChannelReport { channel: kind, status });
    }
    reports
}

#[cfg(test)]
mod tests {
    use super::*;
    use elysian_shared::RegistrationRequest;

    fn registration() -> NormalizedRegistration {
        RegistrationRequest {
            name: Some("Jane Doe".into()),
            email: Some("jane@example.com".into()),
            phone: Some("+971500000000".into()),
            consent: true,
            ..Default::default()
        }
        .normalize()
    }

    fn channel(kind: ChannelKind, fails: bool) -> MockRegistrationChannel {
        let mut mock = MockRegistrationChannel::new();
        mock.expect_kind().return_const(kind);
        mock.expect_deliver().times(1).returning(move |_| {
            if fails {
                Err(ChannelError::Email("boom".into()))
            } else {
                Ok(())
            }
        });
        mock
    }

    #[tokio::test]
    async fn failing_spreadsheet_does_not_skip_email() {
        let channels: Vec<Arc<dyn RegistrationChannel>> = vec![
            Arc::new(channel(ChannelKind::Spreadsheet, true)),
            Arc::new(channel(ChannelKind::Email, false)),
        ];
        let reports = fan_out(&channels, &registration()).await;

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].channel, ChannelKind::Spreadsheet);
        assert!(matches!(reports[0].status, DeliveryStatus::Failed(_)));
        assert_eq!(reports[1].channel, ChannelKind::Email);
        assert!(reports[1].is_delivered());
    }

    #[tokio::test]
    async fn failing_email_is_reported_after_spreadsheet() {
        let channels: Vec<Arc<dyn RegistrationChannel>> = vec![
            Arc::new(channel(ChannelKind::Spreadsheet, false)),
            Arc::new(channel(ChannelKind::Email, true)),
        ];
        let reports = fan_out(&channels, &registration()).await;

        assert!(reports[0].is_delivered());
        assert_eq!(
            reports[1].status,
            DeliveryStatus::Failed("email provider rejected the message: boom".into())
        );
    }

    #[tokio::test]
    async fn no_channels_is_fine() {
        let reports = fan_out(&[], &registration()).await;
        assert!(reports.is_empty());
    }
}
