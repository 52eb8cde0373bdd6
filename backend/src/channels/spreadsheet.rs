use async_trait::async_trait;
use elysian_shared::NormalizedRegistration;
use reqwest::Client;

use super::{ChannelError, ChannelKind, RegistrationChannel};
use crate::config::form_fields::{field_id, FormField};

/// Posts registrations to the spreadsheet-backed form endpoint.
pub struct SpreadsheetChannel {
    client: Client,
    form_url: String,
}

impl SpreadsheetChannel {
    pub fn new(client: Client, form_url: impl Into<String>) -> Self {
        Self {
            client,
            form_url: form_url.into(),
        }
    }
}

/// Form body for one registration. Contact methods repeat their field once per selection.
pub fn form_fields(registration: &NormalizedRegistration) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        (field_id(FormField::Name), registration.name.clone()),
        (field_id(FormField::Email), registration.email.clone()),
        (field_id(FormField::Phone), registration.phone.clone()),
        (field_id(FormField::Hoping), registration.hoping.clone()),
        (field_id(FormField::Anything), registration.anything.clone()),
    ];
    for method in &registration.contact_methods {
        fields.push((
            field_id(FormField::ContactMethod),
            method.external_label().to_string(),
        ));
    }
    fields
}

#[async_trait]
impl RegistrationChannel for SpreadsheetChannel {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Spreadsheet
    }

    async fn deliver(&self, registration: &NormalizedRegistration) -> Result<(), ChannelError> {
        let response = self
            .client
            .post(&self.form_url)
            .form(&form_fields(registration))
            .send()
            .await?;

        response.error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::State, routing::post, Router};
    use elysian_shared::{ContactMethod, RegistrationRequest};
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;

    fn registration(methods: Vec<ContactMethod>) -> NormalizedRegistration {
        RegistrationRequest {
            name: Some("Jane Doe".into()),
            email: Some("Jane@Example.com".into()),
            phone: Some("+971500000000".into()),
            hoping: Some("Clarity".into()),
            contact_methods: methods,
            consent: true,
            ..Default::default()
        }
        .normalize()
    }

    #[test]
    fn maps_fields_to_external_ids() {
        let fields = form_fields(&registration(vec![]));
        assert_eq!(
            fields,
            vec![
                ("entry.2005620554", "Jane Doe".to_string()),
                ("entry.1045781291", "jane@example.com".to_string()),
                ("entry.1166974658", "+971500000000".to_string()),
                ("entry.839337160", "Clarity".to_string()),
                ("entry.1065046570", String::new()),
            ]
        );
    }

    #[test]
    fn repeats_contact_method_field_per_selection() {
        let fields = form_fields(&registration(vec![
            ContactMethod::Email,
            ContactMethod::Whatsapp,
        ]));
        let methods: Vec<_> = fields
            .iter()
            .filter(|(id, _)| *id == "entry.1474063298")
            .map(|(_, v)| v.as_str())
            .collect();
        assert_eq!(methods, vec!["WhatsApp", "Email"]);
    }

    async fn spawn_form(status: axum::http::StatusCode) -> (String, Arc<Mutex<Vec<String>>>) {
        let bodies = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new()
            .route(
                "/formResponse",
                post(
                    move |State(bodies): State<Arc<Mutex<Vec<String>>>>, body: String| async move {
                        bodies.lock().unwrap().push(body);
                        status
                    },
                ),
            )
            .with_state(bodies.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve");
        });
        (format!("http://{}/formResponse", addr), bodies)
    }

    #[tokio::test]
    async fn posts_form_encoded_body() {
        let (url, bodies) = spawn_form(axum::http::StatusCode::OK).await;
        let channel = SpreadsheetChannel::new(Client::new(), url);

        channel
            .deliver(&registration(vec![ContactMethod::Whatsapp, ContactMethod::Telephone]))
            .await
            .expect("delivered");

        let bodies = bodies.lock().unwrap();
        assert_eq!(bodies.len(), 1);
        assert!(bodies[0].contains("entry.2005620554=Jane+Doe"));
        assert!(bodies[0].contains("entry.1045781291=jane%40example.com"));
        assert!(bodies[0].contains("entry.1474063298=WhatsApp&entry.1474063298=Telephone"));
    }

    #[tokio::test]
    async fn error_status_is_a_channel_failure() {
        let (url, _bodies) = spawn_form(axum::http::StatusCode::BAD_REQUEST).await;
        let channel = SpreadsheetChannel::new(Client::new(), url);

        let err = channel.deliver(&registration(vec![])).await.unwrap_err();
        assert!(matches!(err, ChannelError::Http(_)));
    }
}
