use axum::{body::Bytes, extract::State, http::StatusCode};

use crate::utils::AppError;
use crate::AppState;

/// Pub/Sub push endpoint
///
/// Answers 200 with an empty body when the entry was forwarded or ignored,
/// 500 with a plain-text description otherwise.
#[utoipa::path(
    post,
    path = "/",
    tag = "Relay",
    request_body = super::dto::PubSubEnvelope,
    responses(
        (status = 200, description = "Log entry forwarded to Slack or ignored"),
        (status = 500, description = "Decode, extraction or forwarding failure", body = String, content_type = "text/plain")
    )
)]
pub async fn relay_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    state.relay_service.relay(&body).await?;
    Ok(StatusCode::OK)
}
