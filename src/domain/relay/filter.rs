use super::dto::LogEntry;

/// Log name suffix of Cloud Endpoints access logs
pub const ENDPOINTS_LOG_SUFFIX: &str = "endpoints_log";

/// Access logs below this status are noise
const FIRST_REPORTED_STATUS: i64 = 404;

/// Whether the entry is an endpoints access log for a request that did not fail.
pub fn should_ignore(entry: &LogEntry) -> bool {
    entry.http_request.as_ref().is_some_and(|request| {
        entry.log_name.ends_with(ENDPOINTS_LOG_SUFFIX) && request.status < FIRST_REPORTED_STATUS
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::relay::dto::HttpRequest;

    fn access_log(status: i64) -> LogEntry {
        LogEntry {
            log_name: "projects/demo/logs/endpoints_log".to_string(),
            http_request: Some(HttpRequest {
                request_method: "GET".to_string(),
                request_url: "/x".to_string(),
                status,
                user_agent: "curl".to_string(),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn should_ignore_successful_endpoints_access_log() {
        assert!(should_ignore(&access_log(200)));
        assert!(should_ignore(&access_log(302)));
        assert!(should_ignore(&access_log(403)));
    }

    #[test]
    fn should_keep_access_log_from_404() {
        assert!(!should_ignore(&access_log(404)));
        assert!(!should_ignore(&access_log(500)));
    }

    #[test]
    fn should_keep_entry_without_http_request() {
        // Arrange
        let entry = LogEntry {
            log_name: "projects/demo/logs/endpoints_log".to_string(),
            ..Default::default()
        };

        // Act & Assert
        assert!(!should_ignore(&entry));
    }

    #[test]
    fn should_keep_http_request_from_other_logs() {
        let mut entry = access_log(200);
        entry.log_name = "projects/demo/logs/requests".to_string();

        assert!(!should_ignore(&entry));
    }
}
