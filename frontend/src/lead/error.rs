use thiserror::Error;

pub const SERVER_FALLBACK: &str = "Ошибка при отправке";
pub const NETWORK_FALLBACK: &str = "Ошибка сети. Попробуйте позже.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// A required field was left empty. Nothing was sent.
    #[error("required field `{0}` is empty")]
    Validation(&'static str),
    /// A request from this form is still in flight.
    #[error("a submission is already in progress")]
    Busy,
    /// The server answered but did not accept the lead.
    #[error("server rejected the submission: {0}")]
    Server(String),
    /// The request never produced a usable answer.
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),
}

impl SubmitError {
    /// Text shown under the form.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Validation("name") => "Укажите имя".to_string(),
            SubmitError::Validation(_) => "Укажите телефон".to_string(),
            SubmitError::Busy => "Заявка уже отправляется".to_string(),
            SubmitError::Server(message) => message.clone(),
            SubmitError::Transport(_) => NETWORK_FALLBACK.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("response body unreadable: {0}")]
    Body(String),
    #[error("malformed response: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_and_network_fallbacks_differ() {
        assert_ne!(SERVER_FALLBACK, NETWORK_FALLBACK);
    }

    #[test]
    fn transport_failures_show_network_text() {
        let err = SubmitError::from(TransportError::Request("dns".to_string()));
        assert_eq!(err.user_message(), NETWORK_FALLBACK);
    }

    #[test]
    fn server_message_is_shown_verbatim() {
        let err = SubmitError::Server("Имя и телефон обязательны".to_string());
        assert_eq!(err.user_message(), "Имя и телефон обязательны");
    }
}
