use async_trait::async_trait;
use elysian_shared::NormalizedRegistration;
use resend_rs::types::CreateEmailBaseOptions;
use resend_rs::Resend;

use super::{ChannelError, ChannelKind, RegistrationChannel};

/// Sends a notification email for every registration through Resend.
pub struct EmailChannel {
    resend: Option<Resend>,
    from: String,
    to: String,
}

impl EmailChannel {
    pub fn new(api_key: Option<&str>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            resend: api_key.map(Resend::new),
            from: from.into(),
            to: to.into(),
        }
    }
}

pub fn subject(registration: &NormalizedRegistration) -> String {
    format!("New registration: {}", registration.name)
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn or_dash(value: &str) -> String {
    if value.is_empty() {
        "&mdash;".to_string()
    } else {
        escape_html(value).replace('\n', "<br>")
    }
}

pub fn render_html(registration: &NormalizedRegistration) -> String {
    let rows = [
        ("Name", or_dash(&registration.name)),
        ("Email", or_dash(&registration.email)),
        ("Phone", or_dash(&registration.phone)),
        ("Hoping to get", or_dash(&registration.hoping)),
        ("Anything to know", or_dash(&registration.anything)),
        ("Contact via", or_dash(&registration.contact_labels())),
    ];
    let mut html = String::from(
        r#"<div style="font-family: Georgia, serif; color: #2b2622; max-width: 560px;">
<h2 style="font-weight: normal;">New invitation request</h2>
<table style="border-collapse: collapse; width: 100%;">
"#,
    );
    for (label, value) in rows {
        html.push_str(&format!(
            "<tr><td style=\"padding: 6px 12px 6px 0; color: #8a7f76; vertical-align: top;\">{}</td><td style=\"padding: 6px 0;\">{}</td></tr>\n",
            label, value
        ));
    }
    if !registration.source.is_empty() {
        html.push_str(&format!(
            "<tr><td style=\"padding: 6px 12px 6px 0; color: #8a7f76;\">Source</td><td style=\"padding: 6px 0;\">{}</td></tr>\n",
            escape_html(&registration.source)
        ));
    }
    html.push_str("</table>\n</div>");
    html
}

#[async_trait]
impl RegistrationChannel for EmailChannel {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Email
    }

    async fn deliver(&self, registration: &NormalizedRegistration) -> Result<(), ChannelError> {
        let resend = self.resend.as_ref().ok_or(ChannelError::MissingApiKey)?;

        let email = CreateEmailBaseOptions::new(&self.from, [self.to.as_str()], subject(registration))
            .with_html(&render_html(registration));

        resend
            .emails
            .send(email)
            .await
            .map_err(|e| ChannelError::Email(e.to_string()))?;
        tracing::debug!("Notification email sent to {}", self.to);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elysian_shared::{ContactMethod, RegistrationRequest};

    fn registration() -> NormalizedRegistration {
        RegistrationRequest {
            name: Some("Jane <b>Doe</b>".into()),
            email: Some("jane@example.com".into()),
            phone: Some("+971500000000".into()),
            anything: Some("Tea & \"quiet\"\nplease".into()),
            contact_methods: vec![ContactMethod::Telephone, ContactMethod::Whatsapp],
            consent: true,
            ..Default::default()
        }
        .normalize()
    }

    #[test]
    fn template_embeds_every_field_escaped() {
        let html = render_html(&registration());
        assert!(html.contains("Jane &lt;b&gt;Doe&lt;/b&gt;"));
        assert!(!html.contains("<b>Doe</b>"));
        assert!(html.contains("jane@example.com"));
        assert!(html.contains("+971500000000"));
        assert!(html.contains("Tea &amp; &quot;quiet&quot;<br>please"));
        assert!(html.contains("WhatsApp, Telephone"));
        // empty optional answer
        assert!(html.contains("&mdash;"));
        assert!(!html.contains("Source"));
    }

    #[test]
    fn subject_names_the_visitor() {
        assert_eq!(subject(&registration()), "New registration: Jane <b>Doe</b>");
    }

    #[tokio::test]
    async fn missing_api_key_fails_before_sending() {
        let channel = EmailChannel::new(None, "from@example.com", "to@example.com");
        let err = channel.deliver(&registration()).await.unwrap_err();
        assert!(matches!(err, ChannelError::MissingApiKey));
        assert_eq!(channel.kind(), ChannelKind::Email);
    }
}
