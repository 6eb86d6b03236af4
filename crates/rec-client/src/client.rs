use reqwest::Client;
use tracing::{debug, warn};

use crate::error::{ClientError, Result};
use crate::types::{Query, RecommendResponse};

/// Environment variable naming the service base URL.
pub const BASE_URL_VAR: &str = "API_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Resolve the base URL from a variable lookup, falling back to the default.
/// A trailing `/` is stripped.
pub fn base_url_from<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let url = lookup(BASE_URL_VAR)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    url.trim_end_matches('/').to_string()
}

/// HTTP client for the recommendation service.
///
/// One `POST {base_url}/recommend` per call. No retries, no explicit timeout.
#[derive(Debug, Clone)]
pub struct RecommendationClient {
    http: Client,
    base_url: String,
}

impl RecommendationClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// Build a client from `API_BASE_URL`, loading `.env` if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::new(base_url_from(|key| std::env::var(key).ok()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self) -> String {
        format!("{}/recommend", self.base_url)
    }

    /// Build the query from raw form text and send it.
    pub async fn get_recommendations(
        &self,
        education: &str,
        skills_raw: &str,
        location: &str,
    ) -> Result<RecommendResponse> {
        let query = Query::from_form(education, skills_raw, location);
        self.send(&query).await
    }

    /// Send a prepared query.
    ///
    /// # Errors
    /// - `ClientError::Request` on transport failure or an undecodable 2xx body
    /// - `ClientError::Status` on any non-2xx status, with the JSON body if any
    pub async fn send(&self, query: &Query) -> Result<RecommendResponse> {
        let url = self.endpoint();
        debug!("POST {} with {} skills", url, query.skills.len());

        let response = self.http.post(&url).json(query).send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let body = serde_json::from_str(&text).ok();
            warn!("Recommendation service returned {}", status);
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed = response.json::<RecommendResponse>().await?;
        debug!(
            "Received {} recommendations",
            parsed.items.as_ref().map_or(0, Vec::len)
        );
        Ok(parsed)
    }
}
