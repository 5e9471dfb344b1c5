use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use std::sync::Arc;

mod config;
mod handlers {
    pub mod lead_handlers;
}
mod api {
    pub mod telegram;
}

use api::telegram::{LeadNotifier, TelegramNotifier};
use config::AppConfig;
use handlers::lead_handlers;


async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    notifier: Arc<dyn LeadNotifier>,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route(
            "/api/send-lead",
            post(lead_handlers::send_lead)
                .options(lead_handlers::preflight)
                .fallback(lead_handlers::method_not_allowed),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any) // the site may be served from any host
                .allow_headers([axum::http::header::CONTENT_TYPE])
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    if config.telegram.is_none() {
        tracing::warn!("TELEGRAM_BOT_TOKEN or TELEGRAM_CHAT_ID not set, leads will only be logged");
    }

    let notifier = TelegramNotifier::new(config.telegram.clone())?;
    let state = Arc::new(AppState {
        notifier: Arc::new(notifier),
    });

    let app = build_router(state);

    use tokio::net::TcpListener;

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
