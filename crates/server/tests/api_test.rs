//! End-to-end tests against a live server bound on a local port.

use std::sync::Arc;

use data_loader::{Catalog, Internship};
use pipeline::RecommenderOptions;
use rec_client::{ClientError, RecommendationClient};
use serde_json::{Value, json};
use server::{RecommendationOrchestrator, build_router};
use tokio::net::TcpListener;

fn internship(title: &str, location: &str, skills: &[&str], description: &str) -> Internship {
    Internship {
        title: title.to_string(),
        description: description.to_string(),
        location: location.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        duration: "3 months".to_string(),
    }
}

async fn spawn_server() -> String {
    let catalog = Arc::new(Catalog::from_internships(vec![
        internship("Backend Intern", "Pune", &["python", "fastapi"], "Build REST APIs."),
        internship("Frontend Intern", "Mumbai", &["react", "css"], "Build web pages."),
        internship("ML Intern", "Bangalore", &["python", "pandas"], "Train models."),
        internship("Content Intern", "Delhi", &["writing"], "Write blog posts."),
    ]));
    let orchestrator =
        RecommendationOrchestrator::new(catalog, RecommenderOptions::default()).unwrap();
    let app = build_router(orchestrator, &["http://localhost:5173".to_string()]);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_root_and_health() {
    let base_url = spawn_server().await;
    let http = reqwest::Client::new();

    let root: Value = http.get(format!("{base_url}/")).send().await.unwrap().json().await.unwrap();
    assert_eq!(
        root,
        json!({"message": "Internship Recommender API. POST /recommend for recommendations."})
    );

    let health: Value = http
        .get(format!("{base_url}/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_client_round_trip() {
    let base_url = spawn_server().await;
    let client = RecommendationClient::new(base_url);

    let response = client
        .get_recommendations("B.Tech Computer Science", "Python, FastAPI", "Pune")
        .await
        .unwrap();

    // Default top_k of 5, bounded by the four-entry catalog
    assert_eq!(response.count, Some(4));
    assert_eq!(
        response.note.as_deref(),
        Some("Scores are cosine similarity values on a 0–1 scale.")
    );
    let items = response.into_items();
    assert_eq!(items[0].title, "Backend Intern");
    assert_eq!(items[0].location, "Pune");
}

#[tokio::test]
async fn test_trailing_comma_skill_is_rejected_with_detail() {
    let base_url = spawn_server().await;
    let client = RecommendationClient::new(base_url);

    let err = client
        .get_recommendations("BSc", "Python, FastAPI,", "Pune")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(422));
    assert_eq!(
        err.body().and_then(|b| b["detail"].as_str()),
        Some("Skill entries cannot be empty strings.")
    );
    assert!(matches!(err, ClientError::Status { .. }));
}

#[tokio::test]
async fn test_validation_statuses() {
    let base_url = spawn_server().await;
    let http = reqwest::Client::new();
    let url = format!("{base_url}/recommend");

    let missing = http.post(&url).json(&json!({"skills": []})).send().await.unwrap();
    assert_eq!(missing.status().as_u16(), 400);
    let body: Value = missing.json().await.unwrap();
    assert_eq!(
        body["detail"],
        "At least one of 'skills' or 'education' must be provided."
    );

    let top_k = http
        .post(&url)
        .json(&json!({"skills": ["python"], "top_k": 11}))
        .send()
        .await
        .unwrap();
    assert_eq!(top_k.status().as_u16(), 422);

    let malformed = http
        .post(&url)
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(malformed.status().as_u16(), 422);
    let body: Value = malformed.json().await.unwrap();
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let base_url = spawn_server().await;
    let http = reqwest::Client::new();

    let allowed = http
        .get(format!("{base_url}/health"))
        .header("origin", "http://localhost:5173")
        .send()
        .await
        .unwrap();
    assert_eq!(
        allowed.headers()["access-control-allow-origin"],
        "http://localhost:5173"
    );
    assert_eq!(allowed.headers()["access-control-allow-credentials"], "true");

    let other = http
        .get(format!("{base_url}/health"))
        .header("origin", "http://evil.example.com")
        .send()
        .await
        .unwrap();
    assert!(other.headers().get("access-control-allow-origin").is_none());
}
