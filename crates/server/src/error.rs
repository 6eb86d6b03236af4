use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pipeline::RecommendError;
use serde_json::json;
use thiserror::Error;

pub const INTERNAL_ERROR_DETAIL: &str =
    "An unexpected error occurred while generating recommendations.";

/// Application-level error type.
/// Every variant renders as `{"detail": "..."}` with a matching status.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unprocessable(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<RecommendError> for AppError {
    fn from(err: RecommendError) -> Self {
        match err {
            RecommendError::EmptyQuery => AppError::BadRequest(err.to_string()),
            RecommendError::EmptyCatalog => AppError::Internal(err.into()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_DETAIL.to_string(),
                )
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (AppError::Unprocessable("x".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (
                AppError::Internal(anyhow::anyhow!("boom")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_recommend_error_conversion() {
        assert!(matches!(
            AppError::from(RecommendError::EmptyQuery),
            AppError::BadRequest(msg) if msg == "Provide at least one skill or education keyword."
        ));
        assert!(matches!(
            AppError::from(RecommendError::EmptyCatalog),
            AppError::Internal(_)
        ));
    }
}
