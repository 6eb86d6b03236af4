//! Server crate for the internship recommendation engine.
//!
//! This crate wires the catalog and the fitted recommender into an axum
//! HTTP service exposing `GET /`, `GET /health` and `POST /recommend`.

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod routes;

pub use config::Config;
pub use error::AppError;
pub use models::{HealthOut, InternshipOut, RecommendRequest, RecommendResponse};
pub use orchestrator::{RecommendationOrchestrator, ValidatedRequest, validate_request};
pub use routes::build_router;
