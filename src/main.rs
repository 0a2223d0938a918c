use std::net::SocketAddr;
use std::sync::Arc;

use gcp_log_relay::config::AppConfig;
use gcp_log_relay::domain::slack::SlackWebhookClient;
use gcp_log_relay::utils::logging::init_logging;
use gcp_log_relay::{app, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let _log_guard = init_logging();

    let config = AppConfig::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
    })?;

    let slack_client = SlackWebhookClient::new(config.slack.clone())?;
    let state = AppState::new(Arc::new(slack_client));
    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!(
        channel = %config.slack.channel,
        timeout_secs = config.slack.effective_timeout().as_secs(),
        "Server listening on {}",
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
