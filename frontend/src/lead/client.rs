use async_trait::async_trait;
use gloo_net::http::Request;
use log::{info, warn};
use serde_json::Value;

use crate::lead::error::{SubmitError, TransportError, SERVER_FALLBACK};
use crate::lead::model::LeadSubmission;

/// Status and raw body of whatever the endpoint answered.
#[derive(Clone, Debug, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

/// One POST of a lead to the endpoint. Implementations must not retry.
#[async_trait(?Send)]
pub trait LeadTransport {
    async fn post(&self, submission: &LeadSubmission) -> Result<TransportResponse, TransportError>;
}

/// Browser transport backed by `fetch`.
#[derive(Clone, Debug, PartialEq)]
pub struct GlooTransport {
    endpoint: String,
}

impl GlooTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

#[async_trait(?Send)]
impl LeadTransport for GlooTransport {
    async fn post(&self, submission: &LeadSubmission) -> Result<TransportResponse, TransportError> {
        // json() also sets Content-Type: application/json
        let request = Request::post(&self.endpoint)
            .json(submission)
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        Ok(TransportResponse { status, body })
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Maps an answer from the endpoint onto the submission outcome.
///
/// Accepted only when the status is 2xx and the body carries a truthy `ok`.
/// A body that is not JSON counts as a server rejection when the status
/// already says failure, and as a malformed response otherwise.
pub fn interpret_response(status: u16, body: &str) -> Result<(), SubmitError> {
    let success_status = (200..300).contains(&status);

    let parsed: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) if success_status => {
            return Err(TransportError::Malformed(e.to_string()).into());
        }
        Err(_) => return Err(SubmitError::Server(SERVER_FALLBACK.to_string())),
    };

    let ok = parsed.get("ok").map_or(false, is_truthy);
    if success_status && ok {
        return Ok(());
    }

    let message = parsed
        .get("error")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(SERVER_FALLBACK);
    Err(SubmitError::Server(message.to_string()))
}

/// Sends leads through whichever transport it was built with.
pub struct LeadClient<T> {
    transport: T,
}

impl<T: LeadTransport> LeadClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Exactly one request per call. No retries, no deduplication.
    pub async fn submit(&self, submission: &LeadSubmission) -> Result<(), SubmitError> {
        info!("Sending {} request", submission.form_type.as_str());

        let response = match self.transport.post(submission).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Lead request failed: {}", e);
                return Err(e.into());
            }
        };

        let outcome = interpret_response(response.status, &response.body);
        match &outcome {
            Ok(()) => info!("Lead accepted with status {}", response.status),
            Err(e) => warn!("Lead not accepted (status {}): {}", response.status, e),
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::error::NETWORK_FALLBACK;
    use crate::lead::model::{FormType, LeadDraft};
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct FakeTransport {
        reply: Result<TransportResponse, TransportError>,
        sent: RefCell<Vec<String>>,
    }

    impl FakeTransport {
        fn answering(status: u16, body: &str) -> Self {
            Self {
                reply: Ok(TransportResponse { status, body: body.to_string() }),
                sent: RefCell::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                reply: Err(TransportError::Request("connection reset".to_string())),
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl LeadTransport for FakeTransport {
        async fn post(&self, submission: &LeadSubmission) -> Result<TransportResponse, TransportError> {
            self.sent
                .borrow_mut()
                .push(serde_json::to_string(submission).unwrap());
            self.reply.clone()
        }
    }

    fn submission() -> LeadSubmission {
        LeadDraft {
            name: "Иван".to_string(),
            phone: "+79990000000".to_string(),
            message: String::new(),
        }
        .to_submission(FormType::Callback)
        .unwrap()
    }

    #[test]
    fn ok_true_with_200_is_accepted() {
        assert_eq!(interpret_response(200, r#"{"ok":true}"#), Ok(()));
    }

    #[test]
    fn ok_false_surfaces_server_error() {
        assert_eq!(
            interpret_response(200, r#"{"ok":false,"error":"X"}"#),
            Err(SubmitError::Server("X".to_string()))
        );
    }

    #[test]
    fn unparseable_500_uses_server_fallback() {
        assert_eq!(
            interpret_response(500, "<html>Internal Server Error</html>"),
            Err(SubmitError::Server(SERVER_FALLBACK.to_string()))
        );
        assert_eq!(
            interpret_response(500, ""),
            Err(SubmitError::Server(SERVER_FALLBACK.to_string()))
        );
    }

    #[test]
    fn error_status_loses_even_with_ok_true() {
        assert_eq!(
            interpret_response(400, r#"{"ok":true}"#),
            Err(SubmitError::Server(SERVER_FALLBACK.to_string()))
        );
        assert_eq!(
            interpret_response(400, r#"{"error":"Имя и телефон обязательны"}"#),
            Err(SubmitError::Server("Имя и телефон обязательны".to_string()))
        );
    }

    #[test]
    fn empty_error_string_falls_back() {
        assert_eq!(
            interpret_response(200, r#"{"ok":false,"error":""}"#),
            Err(SubmitError::Server(SERVER_FALLBACK.to_string()))
        );
    }

    #[test]
    fn ok_uses_loose_truthiness() {
        assert_eq!(interpret_response(200, r#"{"ok":1}"#), Ok(()));
        assert!(interpret_response(200, r#"{"ok":0}"#).is_err());
        assert!(interpret_response(200, r#"{"ok":null}"#).is_err());
        assert!(interpret_response(200, r#"{}"#).is_err());
    }

    #[test]
    fn garbage_with_success_status_is_a_transport_failure() {
        let err = interpret_response(200, "not json").unwrap_err();
        assert!(matches!(err, SubmitError::Transport(TransportError::Malformed(_))));
        assert_eq!(err.user_message(), NETWORK_FALLBACK);
    }

    #[test]
    fn network_failure_maps_to_transport_error() {
        let client = LeadClient::new(FakeTransport::failing());
        let err = block_on(client.submit(&submission())).unwrap_err();
        assert!(matches!(err, SubmitError::Transport(TransportError::Request(_))));
        assert_eq!(err.user_message(), NETWORK_FALLBACK);
    }

    #[test]
    fn repeated_submits_are_not_deduplicated() {
        let client = LeadClient::new(FakeTransport::answering(200, r#"{"ok":true}"#));
        let lead = submission();

        assert_eq!(block_on(client.submit(&lead)), Ok(()));
        assert_eq!(block_on(client.submit(&lead)), Ok(()));

        let sent = client.transport.sent.borrow();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0], sent[1]);
        assert_eq!(
            sent[0],
            r#"{"name":"Иван","phone":"+79990000000","message":"","form_type":"callback"}"#
        );
    }
}
