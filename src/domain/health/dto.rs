use serde::Serialize;
use utoipa::ToSchema;

/// Health check response
#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "0.1.0")]
    pub version: String,
    /// Seconds since the server started
    #[schema(example = 3600)]
    pub uptime_secs: u64,
}
