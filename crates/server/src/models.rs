//! Request and response bodies of the HTTP API.

use pipeline::ScoredInternship;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TOP_K: i64 = 5;
pub const SCORE_NOTE: &str = "Scores are cosine similarity values on a 0–1 scale.";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Absent or null means `DEFAULT_TOP_K`
    #[serde(default)]
    pub top_k: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternshipOut {
    pub title: String,
    pub description: String,
    pub location: String,
    pub skills: Vec<String>,
    pub duration: String,
    pub score: f64,
}

impl From<ScoredInternship> for InternshipOut {
    fn from(scored: ScoredInternship) -> Self {
        let internship = scored.internship;
        Self {
            title: internship.title,
            description: internship.description,
            location: internship.location,
            skills: internship.skills,
            duration: internship.duration,
            score: scored.score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub count: usize,
    pub items: Vec<InternshipOut>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl RecommendResponse {
    pub fn new(items: Vec<InternshipOut>) -> Self {
        Self {
            count: items.len(),
            items,
            note: Some(SCORE_NOTE.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthOut {
    pub status: String,
}
