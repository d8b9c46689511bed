//! NebulaQuery: answers space and astronomy questions through a chat-completion
//! API and decorates the answer with NASA's Astronomy Picture of the Day when
//! available.

pub mod api;
pub mod apod;
pub mod config;
pub mod error;
pub mod openai;
pub mod telemetry;

use std::sync::Arc;

use axum::Router;

pub use config::AppConfig;
pub use error::AskError;

/// Per-process state shared by handlers. Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            http: reqwest::Client::new(),
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    api::router(state)
}

pub async fn run_server(app: Router, port: u16) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
