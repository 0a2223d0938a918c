use std::collections::HashMap;

use serde::Deserialize;
use serde_json::value::RawValue;
use utoipa::ToSchema;

/// Pub/Sub push request body
///
/// ```json
/// { "message": { "data": "<base64 LogEntry JSON>", "messageId": "..." }, "subscription": "..." }
/// ```
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PubSubEnvelope {
    pub message: PubSubMessage,
    #[serde(default)]
    pub subscription: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PubSubMessage {
    /// Base64-encoded LogEntry JSON
    pub data: String,
    #[serde(default)]
    pub message_id: Option<String>,
}

/// Exported Cloud Logging entry, reduced to the fields the relay reads
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    #[serde(default)]
    pub log_name: String,
    /// Kept verbatim (DEFAULT, INFO, WARN, ERROR, FATAL, ...)
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub resource: Option<MonitoredResource>,
    #[serde(default)]
    pub http_request: Option<HttpRequest>,
    #[serde(default)]
    pub text_payload: Option<String>,
    /// Kept as the producer's bytes; `null` reads as absent
    #[serde(default)]
    pub json_payload: Option<Box<RawValue>>,
    #[serde(default)]
    pub proto_payload: Option<Box<RawValue>>,
    #[serde(default)]
    pub insert_id: Option<String>,
    /// Only logged, never parsed
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MonitoredResource {
    #[serde(rename = "type", default)]
    pub resource_type: String,
    #[serde(default)]
    pub labels: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpRequest {
    #[serde(default)]
    pub request_method: String,
    #[serde(default)]
    pub request_url: String,
    /// Zero when the request has no recorded status
    #[serde(default)]
    pub status: i64,
    #[serde(default)]
    pub user_agent: String,
}

impl LogEntry {
    pub fn labels(&self) -> Option<&HashMap<String, String>> {
        self.resource.as_ref().map(|resource| &resource.labels)
    }
}
