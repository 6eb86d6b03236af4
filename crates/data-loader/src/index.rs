//! Catalog building: file loading and search-text derivation.
//!
//! Each internship gets two documents for the recommender:
//! - `skills_text`: the normalized skills joined by spaces
//! - `full_text`: `skills_text` followed by the description, lowercased,
//!   with everything outside `[a-z0-9 ]` replaced by a space

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use rayon::prelude::*;
use std::path::Path;
use tracing::info;

impl Catalog {
    /// Load and validate the catalog JSON file at `path`.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DataLoadError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let internships = parser::parse_internships(&content)?;

        let catalog = Catalog::from_internships(internships);
        info!(
            "Loaded {} internships from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Build a catalog from already-normalized internships.
    ///
    /// Search documents are derived in parallel; order is preserved.
    pub fn from_internships(internships: Vec<Internship>) -> Self {
        let (skills_text, full_text): (Vec<String>, Vec<String>) =
            internships.par_iter().map(derive_documents).unzip();

        Catalog {
            internships,
            skills_text,
            full_text,
        }
    }
}

/// Derive `(skills_text, full_text)` for one internship.
pub(crate) fn derive_documents(internship: &Internship) -> (String, String) {
    let skills_text = internship.skills_text();
    let full_text = format!("{} {}", skills_text, clean_description(&internship.description));
    (skills_text, full_text)
}

/// Lowercase and blank out every character outside `[a-z0-9 ]`.
pub fn clean_description(description: &str) -> String {
    description
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' ' {
                c
            } else {
                ' '
            }
        })
        .collect()
}
