use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;

use crate::config::TelegramConfig;

const SEND_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("telegram bot token or chat id not configured")]
    NotConfigured,
    /// Holds the error with its URL stripped; the URL carries the bot token.
    #[error("telegram request failed: {0}")]
    Http(reqwest::Error),
    #[error("telegram answered {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Somewhere to forward an accepted lead.
#[async_trait]
pub trait LeadNotifier: Send + Sync {
    async fn notify(&self, text: &str) -> Result<(), NotifyError>;
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'static str,
}

pub struct TelegramNotifier {
    client: Client,
    config: Option<TelegramConfig>,
}

impl TelegramNotifier {
    pub fn new(config: Option<TelegramConfig>) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(SEND_TIMEOUT).build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl LeadNotifier for TelegramNotifier {
    async fn notify(&self, text: &str) -> Result<(), NotifyError> {
        let config = self.config.as_ref().ok_or(NotifyError::NotConfigured)?;
        let url = format!("{}/bot{}/sendMessage", config.api_base, config.bot_token);

        let response = self
            .client
            .post(&url)
            .json(&SendMessageRequest {
                chat_id: &config.chat_id,
                text,
                parse_mode: "HTML",
            })
            .send()
            .await
            .map_err(|e| NotifyError::Http(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Rejected { status: status.as_u16(), body });
        }

        tracing::debug!("Telegram accepted notification");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_notifier_reports_not_configured() {
        let notifier = TelegramNotifier::new(None).unwrap();
        let err = notifier.notify("hello").await.unwrap_err();
        assert!(matches!(err, NotifyError::NotConfigured));
    }

    #[tokio::test]
    async fn failed_request_does_not_leak_bot_token() {
        let notifier = TelegramNotifier::new(Some(TelegramConfig {
            bot_token: "123456:SECRET-TOKEN".to_string(),
            chat_id: "-100500".to_string(),
            api_base: "http://127.0.0.1:1".to_string(),
        }))
        .unwrap();
        let err = notifier.notify("hello").await.unwrap_err();
        assert!(matches!(err, NotifyError::Http(_)));
        assert!(!err.to_string().contains("SECRET-TOKEN"));
        assert!(!format!("{:?}", err).contains("SECRET-TOKEN"));
    }

    #[test]
    fn send_message_body_uses_html_parse_mode() {
        let body = serde_json::to_value(SendMessageRequest {
            chat_id: "-100500",
            text: "<b>hi</b>",
            parse_mode: "HTML",
        })
        .unwrap();
        assert_eq!(body["chat_id"], "-100500");
        assert_eq!(body["parse_mode"], "HTML");
    }
}
