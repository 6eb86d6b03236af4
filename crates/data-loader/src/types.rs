//! Core domain types for the internship catalog.

use serde::{Deserialize, Serialize};

/// Position of an internship inside the catalog.
pub type InternshipId = usize;

// =============================================================================
// Internship
// =============================================================================

/// A single internship posting, already normalized.
///
/// Text fields are trimmed. Skills are lowercased and never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Internship {
    pub title: String,
    pub description: String,
    pub location: String,
    pub skills: Vec<String>,
    pub duration: String,
}

impl Internship {
    /// Skills joined into one space-separated string.
    pub fn skills_text(&self) -> String {
        self.skills.join(" ")
    }
}

// =============================================================================
// Catalog - the in-memory store
// =============================================================================

/// All internships plus the text documents the recommender is fitted on.
///
/// `skills_text` and `full_text` are parallel to `internships`: entry `i`
/// of each belongs to internship `i`.
#[derive(Debug, Default)]
pub struct Catalog {
    pub(crate) internships: Vec<Internship>,
    pub(crate) skills_text: Vec<String>,
    pub(crate) full_text: Vec<String>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an internship and derive its search text.
    pub fn insert(&mut self, internship: Internship) -> InternshipId {
        let (skills_text, full_text) = crate::index::derive_documents(&internship);
        self.skills_text.push(skills_text);
        self.full_text.push(full_text);
        self.internships.push(internship);
        self.internships.len() - 1
    }

    pub fn get(&self, id: InternshipId) -> Option<&Internship> {
        self.internships.get(id)
    }

    pub fn internships(&self) -> &[Internship] {
        &self.internships
    }

    /// Skills-only documents, one per internship.
    pub fn skills_documents(&self) -> &[String] {
        &self.skills_text
    }

    /// Skills plus cleaned description, one per internship.
    pub fn full_documents(&self) -> &[String] {
        &self.full_text
    }

    pub fn len(&self) -> usize {
        self.internships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.internships.is_empty()
    }
}
