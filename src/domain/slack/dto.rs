use serde::Serialize;

/// Message produced for one forwarded log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationMessage {
    pub text: String,
    /// Slack emoji code, e.g. `:skull:`; omitted when empty
    #[serde(skip_serializing_if = "String::is_empty")]
    pub icon_emoji: String,
}

/// Webhook request body: the message plus the static sender identity
#[derive(Debug, Serialize)]
pub struct SlackPayload<'a> {
    #[serde(flatten)]
    pub message: &'a NotificationMessage,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub username: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub channel: &'a str,
}
