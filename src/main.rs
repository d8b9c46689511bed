use anyhow::Context;
use nebula_query::{build_app, run_server, telemetry, AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    let config = AppConfig::from_env();
    if config.openai_api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; every ask will fail until it is configured");
    }
    if config.nasa_api_key.is_none() {
        tracing::info!("NASA_API_KEY is not set; answers will carry no imagery");
    }

    let port = config.port;
    let app = build_app(AppState::new(config));

    run_server(app, port).await.context("server failed")
}
