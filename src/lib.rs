pub mod config;
pub mod domain;
pub mod state;
pub mod utils;

pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        domain::relay::handler::relay_handler,
        domain::health::handler::health_check,
    ),
    components(
        schemas(
            domain::relay::dto::PubSubEnvelope,
            domain::relay::dto::PubSubMessage,
            domain::health::dto::HealthStatus,
        )
    ),
    tags(
        (name = "Relay", description = "Cloud Logging to Slack relay"),
        (name = "Health", description = "Liveness")
    )
)]
pub struct ApiDoc;

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", post(domain::relay::relay_handler))
        .route("/health", get(domain::health::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
