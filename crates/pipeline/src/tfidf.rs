//! TF-IDF vectorization over a fitted vocabulary.
//!
//! ## Weighting
//! - term frequency: raw count of the term in the document
//! - inverse document frequency: `ln((1 + n) / (1 + df)) + 1`
//! - every vector is L2-normalized, so a dot product is a cosine similarity

use crate::text::WordNgramAnalyzer;
use crate::traits::Analyzer;
use std::collections::{BTreeSet, HashMap};

/// Sparse vector as `(term index, weight)` pairs sorted by term index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    fn from_counts(counts: HashMap<usize, f64>) -> Self {
        let mut entries: Vec<(usize, f64)> = counts.into_iter().collect();
        entries.sort_unstable_by_key(|(index, _)| *index);
        Self { entries }
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, weight) in &mut self.entries {
                *weight /= norm;
            }
        }
    }

    /// Dot product via a merge over both sorted entry lists.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_index, a_weight) = self.entries[i];
            let (b_index, b_weight) = other.entries[j];
            match a_index.cmp(&b_index) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_weight * b_weight;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// Learns a vocabulary and IDF weights from a corpus, then maps documents
/// to normalized TF-IDF vectors.
pub struct TfidfVectorizer {
    analyzer: Box<dyn Analyzer>,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Create an unfitted vectorizer using the given analyzer.
    pub fn new(analyzer: impl Analyzer + 'static) -> Self {
        Self {
            analyzer: Box::new(analyzer),
            vocabulary: HashMap::new(),
            idf: Vec::new(),
        }
    }

    /// Fit the vocabulary and IDF weights, returning one vector per document.
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Vec<SparseVector> {
        let analyzed: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| self.analyzer.analyze(doc.as_ref()))
            .collect();

        // Sorted vocabulary keeps term indices stable across runs.
        let terms: BTreeSet<&str> = analyzed
            .iter()
            .flat_map(|doc| doc.iter().map(String::as_str))
            .collect();
        self.vocabulary = terms
            .into_iter()
            .enumerate()
            .map(|(index, term)| (term.to_string(), index))
            .collect();

        let mut document_frequency = vec![0usize; self.vocabulary.len()];
        for doc in &analyzed {
            let unique: BTreeSet<usize> = doc
                .iter()
                .filter_map(|t| self.vocabulary.get(t).copied())
                .collect();
            for index in unique {
                document_frequency[index] += 1;
            }
        }

        let n = documents.len() as f64;
        self.idf = document_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        tracing::debug!(
            "Fitted {} on {} documents, vocabulary size {}",
            self.analyzer.name(),
            documents.len(),
            self.vocabulary.len()
        );

        analyzed.iter().map(|terms| self.weigh(terms)).collect()
    }

    /// Vectorize a document against the fitted vocabulary.
    ///
    /// Terms never seen during fitting are ignored.
    pub fn transform(&self, document: &str) -> SparseVector {
        self.weigh(&self.analyzer.analyze(document))
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }

    fn weigh(&self, terms: &[String]) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in terms {
            if let Some(&index) = self.vocabulary.get(term) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }
        for (index, count) in counts.iter_mut() {
            *count *= self.idf[*index];
        }

        let mut vector = SparseVector::from_counts(counts);
        vector.normalize();
        vector
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new(WordNgramAnalyzer::default())
    }
}
