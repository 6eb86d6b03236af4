use serde::{Deserialize, Serialize};

/// Payload sent to `POST /recommend`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    pub education: String,
    pub skills: Vec<String>,
    pub location: String,
}

impl Query {
    /// Build a query from raw form text. Skills are split on commas and
    /// trimmed; empty tokens are kept.
    pub fn from_form(education: &str, skills_raw: &str, location: &str) -> Self {
        Self {
            education: education.to_string(),
            skills: split_skills(skills_raw),
            location: location.to_string(),
        }
    }
}

/// Split on `,` and trim each piece. N commas always yield N+1 entries.
pub fn split_skills(skills_raw: &str) -> Vec<String> {
    skills_raw.split(',').map(|s| s.trim().to_string()).collect()
}

/// One recommended internship, as far as the client displays it.
///
/// Unknown fields in the service response (`skills`, `score`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub location: String,
    pub duration: String,
}

/// Successful response body. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendResponse {
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub items: Option<Vec<Recommendation>>,
    #[serde(default)]
    pub note: Option<String>,
}

impl RecommendResponse {
    /// The returned items, or nothing when the field was absent.
    pub fn into_items(self) -> Vec<Recommendation> {
        self.items.unwrap_or_default()
    }
}
