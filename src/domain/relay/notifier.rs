use tracing::info;

use super::dto::LogEntry;
use crate::domain::slack::{NotificationMessage, SlackClient};
use crate::utils::AppError;

/// Resource labels naming the emitting service, by priority
const SERVICE_LABELS: [&str; 3] = ["job_id", "method", "configuration_name"];

/// Name of the service that emitted the entry.
///
/// Empty when the entry has no resource labels at all, the log name when
/// none of the known labels is present.
pub fn service_name(entry: &LogEntry) -> &str {
    let labels = match entry.labels() {
        Some(labels) if !labels.is_empty() => labels,
        _ => return "",
    };

    SERVICE_LABELS
        .iter()
        .find_map(|key| labels.get(*key))
        .map(String::as_str)
        .unwrap_or(entry.log_name.as_str())
}

/// Slack emoji for a log severity
pub fn icon_for_severity(severity: &str) -> &'static str {
    match severity {
        "FATAL" => ":skull:",
        "ERROR" => ":red_circle:",
        "WARN" => ":large_yellow_circle:",
        _ => "",
    }
}

pub fn format_text(severity: &str, service: &str, payload: &str) -> String {
    format!("{} : GCP service {} {}, ", severity, service, payload)
}

pub fn build_message(entry: &LogEntry, payload: &str) -> NotificationMessage {
    NotificationMessage {
        text: format_text(&entry.severity, service_name(entry), payload),
        icon_emoji: icon_for_severity(&entry.severity).to_string(),
    }
}

/// Formats log entries and forwards them to Slack
#[derive(Clone)]
pub struct Notifier {
    client: SlackClient,
}

impl Notifier {
    pub fn new(client: SlackClient) -> Self {
        Self { client }
    }

    pub async fn notify(&self, entry: &LogEntry, payload: &str) -> Result<(), AppError> {
        let message = build_message(entry, payload);
        self.client.send(&message).await?;

        info!(
            severity = %entry.severity,
            service = %service_name(entry),
            "Log entry forwarded to Slack"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::relay::dto::MonitoredResource;
    use crate::domain::slack::client::MockSlackClientTrait;
    use std::collections::HashMap;
    use std::sync::Arc;

    fn entry_with_labels(labels: &[(&str, &str)]) -> LogEntry {
        LogEntry {
            log_name: "projects/demo/logs/stderr".to_string(),
            severity: "ERROR".to_string(),
            resource: Some(MonitoredResource {
                resource_type: "cloud_run_revision".to_string(),
                labels: labels
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect::<HashMap<_, _>>(),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn should_prefer_job_id_label() {
        let entry = entry_with_labels(&[("job_id", "abc"), ("method", "Create")]);

        assert_eq!(service_name(&entry), "abc");
    }

    #[test]
    fn should_use_method_label_without_job_id() {
        let entry = entry_with_labels(&[("method", "Create"), ("configuration_name", "api")]);

        assert_eq!(service_name(&entry), "Create");
    }

    #[test]
    fn should_use_configuration_name_label() {
        let entry = entry_with_labels(&[("configuration_name", "billing"), ("region", "eu")]);

        assert_eq!(service_name(&entry), "billing");
    }

    #[test]
    fn should_fall_back_to_log_name_with_unknown_labels() {
        let entry = entry_with_labels(&[("project_id", "demo")]);

        assert_eq!(service_name(&entry), "projects/demo/logs/stderr");
    }

    #[test]
    fn should_return_empty_service_without_labels() {
        assert_eq!(service_name(&entry_with_labels(&[])), "");

        let entry = LogEntry {
            log_name: "projects/demo/logs/stderr".to_string(),
            ..Default::default()
        };
        assert_eq!(service_name(&entry), "");
    }

    #[test]
    fn should_map_severity_to_icon() {
        assert_eq!(icon_for_severity("FATAL"), ":skull:");
        assert_eq!(icon_for_severity("ERROR"), ":red_circle:");
        assert_eq!(icon_for_severity("WARN"), ":large_yellow_circle:");
        assert_eq!(icon_for_severity("INFO"), "");
        assert_eq!(icon_for_severity("DEFAULT"), "");
        assert_eq!(icon_for_severity("error"), "");
    }

    #[test]
    fn should_format_text_with_trailing_separator() {
        assert_eq!(
            format_text("ERROR", "billing", "boom"),
            "ERROR : GCP service billing boom, "
        );
    }

    #[test]
    fn should_build_message_from_entry() {
        // Arrange
        let mut entry = entry_with_labels(&[("job_id", "abc")]);
        entry.severity = "FATAL".to_string();

        // Act
        let message = build_message(&entry, "out of memory");

        // Assert
        assert_eq!(message.text, "FATAL : GCP service abc out of memory, ");
        assert_eq!(message.icon_emoji, ":skull:");
    }

    #[tokio::test]
    async fn should_send_built_message_once() {
        // Arrange
        let mut client = MockSlackClientTrait::new();
        client
            .expect_send()
            .withf(|message| {
                message.text == "ERROR : GCP service abc boom, " && message.icon_emoji == ":red_circle:"
            })
            .times(1)
            .returning(|_| Ok(()));
        let notifier = Notifier::new(Arc::new(client));
        let entry = entry_with_labels(&[("job_id", "abc")]);

        // Act
        let result = notifier.notify(&entry, "boom").await;

        // Assert
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_propagate_forwarding_error() {
        let mut client = MockSlackClientTrait::new();
        client
            .expect_send()
            .times(1)
            .returning(|_| Err(AppError::forwarding("Non-ok response returned from Slack")));
        let notifier = Notifier::new(Arc::new(client));

        let result = notifier.notify(&entry_with_labels(&[]), "boom").await;

        assert!(matches!(result, Err(AppError::Forwarding(_))));
    }
}
