//! Core traits for the recommendation pipeline.
//!
//! This module defines the Analyzer trait that turns raw text into the
//! terms the TF-IDF vectorizer counts.

/// Turns a document into a list of terms.
///
/// ## Design Note
/// - `Send + Sync` lets a fitted vectorizer be shared across request
///   handlers and used from rayon workers
/// - Terms may repeat; the vectorizer counts occurrences
pub trait Analyzer: Send + Sync {
    /// Returns the name of this analyzer (for logging/debugging)
    fn name(&self) -> &str;

    /// Split `text` into terms, in document order.
    fn analyze(&self, text: &str) -> Vec<String>;
}
