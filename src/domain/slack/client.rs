use std::sync::Arc;
use std::time::Duration;

use reqwest::{header, Client};
use tracing::{error, info, instrument, warn};

use super::dto::{NotificationMessage, SlackPayload};
use crate::config::SlackConfig;
use crate::utils::AppError;

/// Body Slack answers with when a webhook message was accepted
const SLACK_OK_BODY: &str = "ok";

/// Slack client interface
///
/// Lets the relay be tested against a mock instead of a live webhook.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SlackClientTrait: Send + Sync {
    /// Post one message to the webhook. No retry.
    async fn send(&self, message: &NotificationMessage) -> Result<(), AppError>;
}

/// Shared Slack client (Clone via Arc)
pub type SlackClient = Arc<dyn SlackClientTrait>;

/// Slack incoming-webhook client
#[derive(Debug, Clone)]
pub struct SlackWebhookClient {
    client: Client,
    config: SlackConfig,
}

fn build_http_client(timeout: Duration) -> reqwest::Result<Client> {
    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/json"),
    );
    Client::builder()
        .default_headers(headers)
        .user_agent(concat!("gcp-log-relay/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()
}

impl SlackWebhookClient {
    pub fn new(config: SlackConfig) -> reqwest::Result<Self> {
        let client = build_http_client(config.effective_timeout())?;
        Ok(Self { client, config })
    }
}

#[async_trait::async_trait]
impl SlackClientTrait for SlackWebhookClient {
    #[instrument(skip_all, fields(channel = %self.config.channel))]
    async fn send(&self, message: &NotificationMessage) -> Result<(), AppError> {
        let payload = SlackPayload {
            message,
            username: &self.config.username,
            channel: &self.config.channel,
        };

        let response = self
            .client
            .post(&self.config.webhook_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, timeout = e.is_timeout(), "Failed to send Slack webhook");
                AppError::forwarding(format!("Failed to send Slack message: {}", e))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!(error = %e, status = %status, "Failed to read Slack webhook response");
            AppError::forwarding(format!("Failed to read Slack response: {}", e))
        })?;

        if body != SLACK_OK_BODY {
            warn!(status = %status, body = %body, "Slack webhook returned non-ok response");
            return Err(AppError::forwarding(format!(
                "Non-ok response returned from Slack (status {}): {}",
                status.as_u16(),
                body
            )));
        }

        info!("Slack message sent");
        Ok(())
    }
}
