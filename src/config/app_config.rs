use std::env;
use std::time::Duration;

/// Timeout applied to the outbound webhook call when none is configured
pub const DEFAULT_SLACK_TIMEOUT: Duration = Duration::from_secs(5);

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_port: u16,
    pub slack: SlackConfig,
}

/// Static settings of the outbound Slack webhook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlackConfig {
    pub webhook_url: String,
    pub username: String,
    pub channel: String,
    pub timeout: Duration,
}

impl SlackConfig {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            username: String::new(),
            channel: String::new(),
            timeout: DEFAULT_SLACK_TIMEOUT,
        }
    }

    /// Zero means "unset" and falls back to the default timeout.
    pub fn effective_timeout(&self) -> Duration {
        if self.timeout.is_zero() {
            DEFAULT_SLACK_TIMEOUT
        } else {
            self.timeout
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let webhook_url = env::var("SLACK_WEBHOOK_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingWebhookUrl)?;

        let username = env::var("SLACK_USERNAME").unwrap_or_default();
        let channel = env::var("SLACK_CHANNEL").unwrap_or_default();
        if channel.is_empty() {
            tracing::warn!("SLACK_CHANNEL is not set, the webhook's default channel will be used");
        }

        let timeout_secs: u64 = env::var("SLACK_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_SLACK_TIMEOUT.as_secs().to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidTimeout)?;

        Ok(Self {
            server_port,
            slack: SlackConfig {
                webhook_url,
                username,
                channel,
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,
    #[error("SLACK_WEBHOOK_URL environment variable is required")]
    MissingWebhookUrl,
    #[error("Invalid Slack timeout, expected a number of seconds")]
    InvalidTimeout,
}
