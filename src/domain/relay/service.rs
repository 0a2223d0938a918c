use tracing::{debug, instrument};

use super::decoder::decode_log_entry;
use super::filter::should_ignore;
use super::notifier::Notifier;
use super::payload::extract_payload;
use crate::domain::slack::SlackClient;
use crate::utils::AppError;

/// What happened to a relayed log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayOutcome {
    /// Sent to Slack
    Forwarded,
    /// Dropped as access-log noise
    Ignored,
}

#[derive(Clone)]
pub struct RelayService {
    notifier: Notifier,
}

impl RelayService {
    pub fn new(client: SlackClient) -> Self {
        Self {
            notifier: Notifier::new(client),
        }
    }

    /// Relay one Pub/Sub push body: decode, filter, extract, notify.
    #[instrument(skip_all, fields(body_len = body.len()))]
    pub async fn relay(&self, body: &[u8]) -> Result<RelayOutcome, AppError> {
        let entry = decode_log_entry(body)?;

        debug!(
            log_name = %entry.log_name,
            severity = %entry.severity,
            insert_id = entry.insert_id.as_deref().unwrap_or("-"),
            resource_type = entry.resource.as_ref().map_or("-", |r| r.resource_type.as_str()),
            timestamp = entry.timestamp.as_deref().unwrap_or("-"),
            "Decoded log entry"
        );

        if should_ignore(&entry) {
            debug!(log_name = %entry.log_name, "Ignoring endpoints access log");
            return Ok(RelayOutcome::Ignored);
        }

        let payload = extract_payload(&entry)?;
        self.notifier.notify(&entry, &payload).await?;

        Ok(RelayOutcome::Forwarded)
    }
}
