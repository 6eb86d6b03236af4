//! The internship recommender.
//!
//! Ranks catalog entries against a user's skills and education using
//! TF-IDF cosine similarity, with a small additive boost for internships
//! in the user's preferred location.

use crate::error::{RecommendError, Result};
use crate::tfidf::{SparseVector, TfidfVectorizer};
use data_loader::{Catalog, Internship, normalize_tokens};
use rayon::prelude::*;
use std::sync::Arc;
use tracing::debug;

/// Fewest results returned, whatever `top_k` asks for.
pub const MIN_RESULTS: usize = 3;
/// Most results returned, whatever `top_k` asks for.
pub const MAX_RESULTS: usize = 10;

/// Tuning knobs for the recommender.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommenderOptions {
    /// Fit on skills plus description instead of skills alone
    pub use_description: bool,
    /// Added to the score of internships whose location matches exactly
    /// (case-insensitive)
    pub location_boost: f64,
}

impl Default for RecommenderOptions {
    fn default() -> Self {
        Self {
            use_description: true,
            location_boost: 0.05,
        }
    }
}

/// One ranked result.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredInternship {
    pub internship: Internship,
    pub score: f64,
}

/// A recommender fitted on a catalog. Immutable once built, so it can be
/// shared behind an `Arc` by concurrent request handlers.
pub struct InternshipRecommender {
    catalog: Arc<Catalog>,
    options: RecommenderOptions,
    vectorizer: TfidfVectorizer,
    matrix: Vec<SparseVector>,
}

impl InternshipRecommender {
    /// Fit TF-IDF on the catalog.
    ///
    /// # Errors
    /// `RecommendError::EmptyCatalog` if the catalog has no entries.
    pub fn fit(catalog: Arc<Catalog>, options: RecommenderOptions) -> Result<Self> {
        if catalog.is_empty() {
            return Err(RecommendError::EmptyCatalog);
        }

        let corpus = if options.use_description {
            catalog.full_documents()
        } else {
            catalog.skills_documents()
        };

        let mut vectorizer = TfidfVectorizer::default();
        let matrix = vectorizer.fit_transform(corpus);
        debug!(
            "Recommender fitted on {} internships ({} terms)",
            catalog.len(),
            vectorizer.vocabulary_size()
        );

        Ok(Self {
            catalog,
            options,
            vectorizer,
            matrix,
        })
    }

    pub fn options(&self) -> RecommenderOptions {
        self.options
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Return the best-matching internships, highest score first.
    ///
    /// ## Algorithm
    /// 1. Build the query text from normalized skills and education words
    /// 2. Vectorize it and take the cosine similarity with every internship
    /// 3. Add the location boost where the location matches
    /// 4. Sort descending (ties keep catalog order) and keep
    ///    `top_k` clamped to `MIN_RESULTS..=MAX_RESULTS`
    ///
    /// # Errors
    /// `RecommendError::EmptyQuery` if skills and education yield no text.
    pub fn recommend(
        &self,
        skills: &[String],
        education: Option<&str>,
        location: Option<&str>,
        top_k: usize,
    ) -> Result<Vec<ScoredInternship>> {
        let query_text = build_query_text(skills, education);
        if query_text.trim().is_empty() {
            return Err(RecommendError::EmptyQuery);
        }

        let query = self.vectorizer.transform(&query_text);
        let preferred_location = location
            .filter(|loc| !loc.is_empty())
            .map(|loc| loc.trim().to_lowercase());

        let mut scored: Vec<(usize, f64)> = self
            .matrix
            .par_iter()
            .enumerate()
            .map(|(id, doc)| {
                let mut score = query.dot(doc);
                if let Some(preferred) = &preferred_location {
                    let internship = &self.catalog.internships()[id];
                    if internship.location.to_lowercase() == *preferred {
                        score += self.options.location_boost;
                    }
                }
                (id, score)
            })
            .collect();

        // Stable sort so equal scores keep catalog order
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(top_k.clamp(MIN_RESULTS, MAX_RESULTS));

        debug!(
            "Query '{}' matched {} internships",
            query_text,
            scored.len()
        );

        Ok(scored
            .into_iter()
            .filter_map(|(id, score)| {
                self.catalog.get(id).map(|internship| ScoredInternship {
                    internship: internship.clone(),
                    score,
                })
            })
            .collect())
    }
}

/// Normalized skills followed by the lowercased education words.
pub fn build_query_text(skills: &[String], education: Option<&str>) -> String {
    let mut parts = normalize_tokens(skills);
    let education = education.unwrap_or("").trim().to_lowercase();
    parts.extend(education.split_whitespace().map(str::to_string));
    parts.join(" ")
}
