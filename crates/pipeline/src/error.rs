//! Error types for the recommendation pipeline.

use thiserror::Error;

/// Errors raised while fitting or querying the recommender.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendError {
    #[error("Training catalog is empty.")]
    EmptyCatalog,

    #[error("Provide at least one skill or education keyword.")]
    EmptyQuery,
}

pub type Result<T> = std::result::Result<T, RecommendError>;
