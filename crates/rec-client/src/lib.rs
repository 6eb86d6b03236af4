//! HTTP client for the internship recommendation service.
//!
//! This crate turns raw form text into a request payload and performs a
//! single `POST /recommend` call. It handles:
//! - Resolving the service base URL (`API_BASE_URL`, `.env` honored)
//! - Splitting the comma-separated skills field
//! - Decoding the response, or surfacing status and body on failure

pub mod client;
pub mod error;
pub mod types;

pub use client::{base_url_from, RecommendationClient, BASE_URL_VAR, DEFAULT_BASE_URL};
pub use error::{ClientError, Result};
pub use types::{split_skills, Query, RecommendResponse, Recommendation};
