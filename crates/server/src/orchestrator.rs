//! # Recommendation Orchestrator
//!
//! This module coordinates a single recommendation request:
//! 1. Validate the request body (skills, top_k, presence)
//! 2. Run the CPU-bound ranking on the blocking thread pool
//! 3. Convert ranked internships into the response body

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use data_loader::Catalog;
use pipeline::{InternshipRecommender, MAX_RESULTS, RecommenderOptions};

use crate::error::AppError;
use crate::models::{DEFAULT_TOP_K, InternshipOut, RecommendRequest, RecommendResponse};

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub skills: Vec<String>,
    pub education: Option<String>,
    pub location: Option<String>,
    pub top_k: usize,
}

/// Validate a request body.
///
/// ## Rules
/// - every skill is trimmed; a skill empty after trimming is a 422
/// - `top_k` must lie in `1..=10` (absent means 5), else 422
/// - no skills and no (or empty) education is a 400
pub fn validate_request(request: RecommendRequest) -> Result<ValidatedRequest, AppError> {
    let mut skills = Vec::with_capacity(request.skills.len());
    for skill in request.skills {
        let skill = skill.trim();
        if skill.is_empty() {
            return Err(AppError::Unprocessable(
                "Skill entries cannot be empty strings.".to_string(),
            ));
        }
        skills.push(skill.to_string());
    }

    let top_k = request.top_k.unwrap_or(DEFAULT_TOP_K);
    if !(1..=MAX_RESULTS as i64).contains(&top_k) {
        return Err(AppError::Unprocessable(
            "top_k must be between 1 and 10.".to_string(),
        ));
    }

    let education_missing = request.education.as_deref().is_none_or(str::is_empty);
    if skills.is_empty() && education_missing {
        return Err(AppError::BadRequest(
            "At least one of 'skills' or 'education' must be provided.".to_string(),
        ));
    }

    Ok(ValidatedRequest {
        skills,
        education: request.education,
        location: request.location,
        top_k: top_k as usize,
    })
}

/// Shares one fitted recommender across request handlers.
#[derive(Clone)]
pub struct RecommendationOrchestrator {
    recommender: Arc<InternshipRecommender>,
}

impl RecommendationOrchestrator {
    /// Fit the recommender on the catalog.
    pub fn new(catalog: Arc<Catalog>, options: RecommenderOptions) -> Result<Self> {
        let start_time = Instant::now();
        let recommender = InternshipRecommender::fit(catalog, options)
            .context("Failed to fit recommender")?;
        info!(
            "Fitted recommender on {} internships in {:.2?}",
            recommender.catalog().len(),
            start_time.elapsed()
        );
        Ok(Self::from_recommender(Arc::new(recommender)))
    }

    pub fn from_recommender(recommender: Arc<InternshipRecommender>) -> Self {
        Self { recommender }
    }

    pub fn catalog_size(&self) -> usize {
        self.recommender.catalog().len()
    }

    /// Main entry point: validate, rank and build the response.
    pub async fn get_recommendations(
        &self,
        request: RecommendRequest,
    ) -> Result<RecommendResponse, AppError> {
        let start_time = Instant::now();
        let request = validate_request(request)?;

        let recommender = Arc::clone(&self.recommender);
        let ranked = tokio::task::spawn_blocking(move || {
            recommender.recommend(
                &request.skills,
                request.education.as_deref(),
                request.location.as_deref(),
                request.top_k,
            )
        })
        .await
        .context("Recommendation task panicked")??;

        let items: Vec<InternshipOut> = ranked.into_iter().map(InternshipOut::from).collect();
        info!(
            "Served {} recommendations in {:.2?}",
            items.len(),
            start_time.elapsed()
        );

        Ok(RecommendResponse::new(items))
    }
}
