use chrono::{DateTime, Utc};

use crate::domain::relay::RelayService;
use crate::domain::slack::SlackClient;

#[derive(Clone)]
pub struct AppState {
    pub relay_service: RelayService,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(slack_client: SlackClient) -> Self {
        Self {
            relay_service: RelayService::new(slack_client),
            started_at: Utc::now(),
        }
    }
}
