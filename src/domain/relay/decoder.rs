use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use tracing::debug;

use super::dto::{LogEntry, PubSubEnvelope};
use crate::utils::AppError;

/// Decode a Pub/Sub push body into the log entry it carries.
///
/// Every failure keeps the whole raw body in the error for diagnostics.
pub fn decode_log_entry(body: &[u8]) -> Result<LogEntry, AppError> {
    let envelope: PubSubEnvelope =
        serde_json::from_slice(body).map_err(|e| AppError::decode(body, e))?;

    debug!(
        message_id = envelope.message.message_id.as_deref().unwrap_or("-"),
        subscription = envelope.subscription.as_deref().unwrap_or("-"),
        "Received Pub/Sub message"
    );

    let data = BASE64
        .decode(envelope.message.data.as_bytes())
        .map_err(|e| AppError::decode(body, e))?;

    serde_json::from_slice(&data).map_err(|e| AppError::decode(body, e))
}
