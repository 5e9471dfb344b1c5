use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::telegram::NotifyError;
use crate::AppState;

pub const MISSING_FIELDS_ERROR: &str = "Имя и телефон обязательны";
pub const MALFORMED_BODY_ERROR: &str = "Некорректный формат заявки";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LeadRequest {
    name: Option<String>,
    phone: Option<String>,
    message: Option<String>,
    form_type: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadKind {
    Lead,
    Callback,
}

impl LeadKind {
    /// Anything other than "callback" is treated as a regular lead.
    pub fn from_form_type(form_type: Option<&str>) -> Self {
        match form_type.map(str::trim) {
            Some("callback") => LeadKind::Callback,
            _ => LeadKind::Lead,
        }
    }
}

/// A lead that passed validation, trimmed.
#[derive(Debug, PartialEq)]
pub struct Lead {
    pub name: String,
    pub phone: String,
    pub message: String,
    pub kind: LeadKind,
}

impl LeadRequest {
    pub fn into_lead(self) -> Option<Lead> {
        let trimmed = |v: Option<String>| v.map(|s| s.trim().to_string()).unwrap_or_default();
        let kind = LeadKind::from_form_type(self.form_type.as_deref());
        let name = trimmed(self.name);
        let phone = trimmed(self.phone);
        if name.is_empty() || phone.is_empty() {
            return None;
        }
        Some(Lead {
            name,
            phone,
            message: trimmed(self.message),
            kind,
        })
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Telegram message text (HTML parse mode) for an accepted lead.
pub fn format_notification(lead: &Lead) -> String {
    let (header, message_label) = match lead.kind {
        LeadKind::Callback => ("📞 <b>Запрос обратного звонка</b>", "💬 Сообщение"),
        LeadKind::Lead => ("⚡ <b>Новая заявка с сайта ElectroRide</b>", "💬 Интерес"),
    };

    let mut text = format!(
        "{}\n\n👤 Имя: {}\n📱 Телефон: {}",
        header,
        escape_html(&lead.name),
        escape_html(&lead.phone)
    );
    if !lead.message.is_empty() {
        text.push_str(&format!("\n{}: {}", message_label, escape_html(&lead.message)));
    }
    text
}

pub async fn send_lead(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let request = if body.iter().all(u8::is_ascii_whitespace) {
        LeadRequest::default()
    } else {
        serde_json::from_slice::<LeadRequest>(&body).map_err(|e| {
            tracing::warn!("Rejecting malformed lead body: {}", e);
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": MALFORMED_BODY_ERROR})),
            )
        })?
    };

    let lead = request.into_lead().ok_or_else(|| {
        tracing::info!("Rejecting lead without name or phone");
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": MISSING_FIELDS_ERROR})),
        )
    })?;

    tracing::info!("Received {:?} request", lead.kind);

    let notified = match state.notifier.notify(&format_notification(&lead)).await {
        Ok(()) => true,
        Err(NotifyError::NotConfigured) => {
            tracing::warn!("Telegram not configured, lead was not forwarded");
            false
        }
        Err(e) => {
            tracing::error!("Failed to forward lead: {}", e);
            false
        }
    };

    Ok(Json(json!({"ok": true, "notified": notified})))
}

/// Bare OPTIONS without CORS preflight headers.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed() -> (StatusCode, Json<Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({"error": "Method not allowed"})),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::telegram::LeadNotifier;
    use crate::build_router;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use http_body_util::BodyExt;
    use std::sync::Mutex;
    use tower::ServiceExt;

    #[derive(Default)]
    struct RecordingNotifier {
        sent: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait]
    impl LeadNotifier for RecordingNotifier {
        async fn notify(&self, text: &str) -> Result<(), NotifyError> {
            if self.fail {
                return Err(NotifyError::Rejected { status: 401, body: "Unauthorized".to_string() });
            }
            self.sent.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    fn app(notifier: Arc<RecordingNotifier>) -> axum::Router {
        build_router(Arc::new(AppState { notifier }))
    }

    async fn post(notifier: Arc<RecordingNotifier>, body: &str) -> (StatusCode, Value) {
        let response = app(notifier)
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/send-lead")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn callback_lead_is_forwarded() {
        let notifier = Arc::new(RecordingNotifier::default());
        let (status, body) = post(
            notifier.clone(),
            r#"{"name":"Иван","phone":"+79990000000","message":"","form_type":"callback"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"ok": true, "notified": true}));

        let sent = notifier.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].starts_with("📞 <b>Запрос обратного звонка</b>"));
        assert!(sent[0].contains("👤 Имя: Иван"));
        assert!(!sent[0].contains("💬"));
    }

    #[tokio::test]
    async fn missing_phone_is_rejected_with_message() {
        let notifier = Arc::new(RecordingNotifier::default());
        let (status, body) = post(notifier.clone(), r#"{"name":"Иван","phone":"   "}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], MISSING_FIELDS_ERROR);
        assert!(notifier.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_body_counts_as_missing_fields() {
        let (status, body) = post(Arc::new(RecordingNotifier::default()), "").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], MISSING_FIELDS_ERROR);
    }

    #[tokio::test]
    async fn malformed_json_is_rejected() {
        let (status, body) = post(Arc::new(RecordingNotifier::default()), "{name:").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], MALFORMED_BODY_ERROR);
    }

    #[tokio::test]
    async fn failed_notification_still_accepts_lead() {
        let notifier = Arc::new(RecordingNotifier { fail: true, ..Default::default() });
        let (status, body) = post(notifier, r#"{"name":"Анна","phone":"+7900"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"ok": true, "notified": false}));
    }

    #[tokio::test]
    async fn get_is_not_allowed() {
        let response = app(Arc::new(RecordingNotifier::default()))
            .oneshot(Request::builder().uri("/api/send-lead").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Method not allowed");
    }

    #[tokio::test]
    async fn cors_preflight_is_answered() {
        let response = app(Arc::new(RecordingNotifier::default()))
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/send-lead")
                    .header(header::ORIGIN, "https://electroride.example")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[test]
    fn lead_notification_includes_interest_and_escapes_html() {
        let lead = LeadRequest {
            name: Some("  <Пётр>  ".to_string()),
            phone: Some("+7 900 000-00-00".to_string()),
            message: Some("Электромопеды & трициклы".to_string()),
            form_type: None,
        }
        .into_lead()
        .unwrap();

        assert_eq!(lead.kind, LeadKind::Lead);
        assert_eq!(
            format_notification(&lead),
            "⚡ <b>Новая заявка с сайта ElectroRide</b>\n\n👤 Имя: &lt;Пётр&gt;\n📱 Телефон: +7 900 000-00-00\n💬 Интерес: Электромопеды &amp; трициклы"
        );
    }

    #[test]
    fn unknown_form_type_falls_back_to_lead() {
        assert_eq!(LeadKind::from_form_type(Some("newsletter")), LeadKind::Lead);
        assert_eq!(LeadKind::from_form_type(Some("callback")), LeadKind::Callback);
        assert_eq!(LeadKind::from_form_type(None), LeadKind::Lead);
    }
}
