use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::HeaderValue,
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::error::AppError;
use crate::models::{HealthOut, RecommendRequest, RecommendResponse};
use crate::orchestrator::RecommendationOrchestrator;

/// GET /
async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Internship Recommender API. POST /recommend for recommendations."
    }))
}

/// GET /health
async fn health_handler() -> Json<HealthOut> {
    Json(HealthOut {
        status: "ok".to_string(),
    })
}

/// POST /recommend
async fn recommend_handler(
    State(orchestrator): State<RecommendationOrchestrator>,
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> Result<Json<RecommendResponse>, AppError> {
    let Json(request) =
        payload.map_err(|rejection| AppError::Unprocessable(rejection.body_text()))?;
    let response = orchestrator.get_recommendations(request).await?;
    Ok(Json(response))
}

/// CORS for the configured origins. A `*` entry mirrors any origin, since a
/// literal wildcard cannot be combined with credentials.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let allow_origin = if allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::mirror_request()
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin '{}'", origin);
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

pub fn build_router(
    orchestrator: RecommendationOrchestrator,
    allowed_origins: &[String],
) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/recommend", post(recommend_handler))
        .with_state(orchestrator)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
}
