//! Integration tests for the pipeline.
//!
//! These tests load a catalog through the data loader and run the full
//! fit-then-recommend flow in a realistic scenario.

use data_loader::{Catalog, parser::parse_internships};
use pipeline::{InternshipRecommender, RecommendError, RecommenderOptions};
use std::sync::Arc;

const CATALOG_JSON: &str = r#"[
    {
        "title": "Machine Learning Intern",
        "description": "Train and evaluate machine learning models in Python.",
        "location": "Bangalore",
        "skills": ["Python", "Machine Learning", "Pandas"],
        "duration": "6 months"
    },
    {
        "title": "Frontend Developer Intern",
        "description": "Build responsive user interfaces with React.",
        "location": "Pune",
        "skills": ["JavaScript", "React", "CSS"],
        "duration": "3 months"
    },
    {
        "title": "Backend Developer Intern",
        "description": "Design REST APIs using FastAPI and PostgreSQL.",
        "location": "Pune",
        "skills": ["Python", "FastAPI", "SQL"],
        "duration": "4 months"
    },
    {
        "title": "Marketing Intern",
        "description": "Plan social media campaigns and track engagement.",
        "location": "Mumbai",
        "skills": ["Social Media", "Content Writing"],
        "duration": "2 months"
    }
]"#;

fn create_test_setup() -> InternshipRecommender {
    let internships = parse_internships(CATALOG_JSON).unwrap();
    let catalog = Arc::new(Catalog::from_internships(internships));
    InternshipRecommender::fit(catalog, RecommenderOptions::default()).unwrap()
}

#[test]
fn test_backend_profile_prefers_backend_role() {
    let recommender = create_test_setup();

    let results = recommender
        .recommend(
            &["Python".to_string(), "FastAPI".to_string()],
            Some("B.Tech Computer Science"),
            Some("Pune"),
            5,
        )
        .unwrap();

    assert_eq!(results[0].internship.title, "Backend Developer Intern");
    assert!(
        results.windows(2).all(|w| w[0].score >= w[1].score),
        "Results should be sorted by score"
    );
}

#[test]
fn test_scores_stay_in_range() {
    let recommender = create_test_setup();

    let results = recommender
        .recommend(&["python".to_string()], None, Some("Pune"), 10)
        .unwrap();

    assert_eq!(results.len(), 4);
    for result in &results {
        // Cosine similarity plus at most the location boost
        assert!(result.score >= 0.0 && result.score <= 1.05 + 1e-5);
    }
}

#[test]
fn test_education_alone_is_a_valid_query() {
    let recommender = create_test_setup();

    let results = recommender
        .recommend(&[], Some("Machine Learning"), None, 3)
        .unwrap();

    assert_eq!(results[0].internship.title, "Machine Learning Intern");
}

#[test]
fn test_blank_profile_is_rejected() {
    let recommender = create_test_setup();

    let result = recommender.recommend(&[String::new()], Some("   "), Some("Pune"), 5);
    assert_eq!(result, Err(RecommendError::EmptyQuery));
}
