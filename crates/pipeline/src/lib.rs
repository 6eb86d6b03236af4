//! Recommendation pipeline for internship matching.
//!
//! This crate provides:
//! - Analyzer trait and the word n-gram implementation
//! - TfidfVectorizer for turning text into normalized sparse vectors
//! - InternshipRecommender for ranking a catalog against a user profile
//!
//! ## Architecture
//! Ranking happens in stages:
//! 1. The catalog documents are analyzed and fitted into TF-IDF vectors
//! 2. A query is built from the user's skills and education
//! 3. Cosine similarity against every document, plus a location boost
//! 4. Sort and keep the top results
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{InternshipRecommender, RecommenderOptions};
//!
//! let recommender = InternshipRecommender::fit(catalog.clone(), RecommenderOptions::default())?;
//! let results = recommender.recommend(&skills, Some("B.Tech"), Some("Pune"), 5)?;
//! ```

pub mod error;
pub mod recommender;
pub mod text;
pub mod tfidf;
pub mod traits;

// Re-export main types
pub use error::RecommendError;
pub use recommender::{
    InternshipRecommender, RecommenderOptions, ScoredInternship, MAX_RESULTS, MIN_RESULTS,
};
pub use text::WordNgramAnalyzer;
pub use tfidf::{SparseVector, TfidfVectorizer};
pub use traits::Analyzer;
