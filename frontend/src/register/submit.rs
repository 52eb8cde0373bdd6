use async_trait::async_trait;
use elysian_shared::{FieldErrors, RegistrationRequest};
use gloo_net::http::Request;

use super::form::FormState;
use crate::config;

#[derive(Debug, Clone, PartialEq)]
pub enum TransportError {
    Network(String),
    Status(u16),
}

/// Sends a registration to the server.
#[async_trait(?Send)]
pub trait Transport {
    async fn post_registration(&self, request: &RegistrationRequest) -> Result<(), TransportError>;
}

pub struct GlooTransport {
    endpoint: String,
}

impl GlooTransport {
    pub fn new() -> Self {
        Self {
            endpoint: config::register_endpoint(),
        }
    }
}

impl Default for GlooTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn post_registration(&self, request: &RegistrationRequest) -> Result<(), TransportError> {
        let response = Request::post(&self.endpoint)
            .json(request)
            .map_err(|e| TransportError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(TransportError::Status(response.status()))
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Invalid(FieldErrors),
    Confirmed,
    Failed,
}

/// Validates `state` and, only if it is valid, posts it once.
pub async fn submit(state: &FormState, transport: &impl Transport) -> SubmitOutcome {
    let errors = state.validate();
    if !errors.is_empty() {
        return SubmitOutcome::Invalid(errors);
    }

    match transport.post_registration(&state.to_request()).await {
        Ok(()) => SubmitOutcome::Confirmed,
        Err(e) => {
            log::error!("Registration submit failed: {:?}", e);
            SubmitOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elysian_shared::{Field, ValidationError};
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct FakeTransport {
        result: Result<(), TransportError>,
        sent: RefCell<Vec<RegistrationRequest>>,
    }

    impl FakeTransport {
        fn returning(result: Result<(), TransportError>) -> Self {
            Self {
                result,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl Transport for FakeTransport {
        async fn post_registration(&self, request: &RegistrationRequest) -> Result<(), TransportError> {
            self.sent.borrow_mut().push(request.clone());
            self.result.clone()
        }
    }

    fn valid_state() -> FormState {
        FormState {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: "+971500000000".into(),
            consent: true,
            ..Default::default()
        }
    }

    #[test]
    fn invalid_state_never_touches_the_network() {
        let transport = FakeTransport::returning(Ok(()));
        let state = FormState {
            consent: false,
            ..valid_state()
        };

        let outcome = block_on(submit(&state, &transport));

        match outcome {
            SubmitOutcome::Invalid(errors) => {
                assert_eq!(errors.get(&Field::Consent), Some(&ValidationError::ConsentRequired));
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
        assert!(transport.sent.borrow().is_empty());
    }

    #[test]
    fn valid_state_is_sent_once_and_confirmed() {
        let transport = FakeTransport::returning(Ok(()));

        let outcome = block_on(submit(&valid_state(), &transport));

        assert_eq!(outcome, SubmitOutcome::Confirmed);
        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].email.as_deref(), Some("jane@example.com"));
    }

    #[test]
    fn server_rejection_is_a_generic_failure() {
        let transport = FakeTransport::returning(Err(TransportError::Status(400)));
        assert_eq!(block_on(submit(&valid_state(), &transport)), SubmitOutcome::Failed);
    }

    #[test]
    fn network_error_is_a_generic_failure() {
        let transport = FakeTransport::returning(Err(TransportError::Network("offline".into())));
        assert_eq!(block_on(submit(&valid_state(), &transport)), SubmitOutcome::Failed);
        assert_eq!(transport.sent.borrow().len(), 1);
    }
}
