//! Parser for the internship catalog JSON.
//!
//! The file is a JSON array of objects:
//! `{"title", "description", "location", "duration", "skills": [..]}`.
//! The four text fields are required; `skills` is optional. Scalar values
//! that are not strings (numbers, booleans) are stringified, so a
//! `"duration": 3` entry is accepted as `"3"`.

use crate::error::{DataLoadError, Result};
use crate::types::Internship;
use serde_json::{Map, Value};

/// Parse and normalize every entry of a catalog document.
///
/// Entries are checked in order, so the error always names the first
/// broken entry.
pub fn parse_internships(content: &str) -> Result<Vec<Internship>> {
    let document: Value = serde_json::from_str(content)?;
    let entries = match document {
        Value::Array(entries) => entries,
        _ => return Err(DataLoadError::NotAList),
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_entry(index, entry))
        .collect()
}

fn parse_entry(index: usize, entry: &Value) -> Result<Internship> {
    let fields = entry.as_object().ok_or_else(|| DataLoadError::InvalidEntry {
        index,
        reason: "entry must be an object".to_string(),
    })?;

    let title = required_text(index, fields, "title")?;
    let description = required_text(index, fields, "description")?;
    let location = required_text(index, fields, "location")?;
    let skills = parse_skills(index, fields.get("skills"))?;
    let duration = required_text(index, fields, "duration")?;

    if title.is_empty() || description.is_empty() || location.is_empty() || duration.is_empty() {
        return Err(DataLoadError::MissingFields { index });
    }

    Ok(Internship {
        title,
        description,
        location,
        skills,
        duration,
    })
}

fn required_text(index: usize, fields: &Map<String, Value>, field: &str) -> Result<String> {
    let value = fields.get(field).ok_or_else(|| DataLoadError::InvalidEntry {
        index,
        reason: format!("missing field '{}'", field),
    })?;

    scalar_to_string(value)
        .map(|text| text.trim().to_string())
        .ok_or_else(|| DataLoadError::InvalidEntry {
            index,
            reason: format!("field '{}' must be a string", field),
        })
}

fn parse_skills(index: usize, value: Option<&Value>) -> Result<Vec<String>> {
    let items = match value {
        None => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(DataLoadError::InvalidEntry {
                index,
                reason: "skills must be a list".to_string(),
            });
        }
    };

    let raw: Vec<String> = items
        .iter()
        .map(|item| {
            scalar_to_string(item).ok_or_else(|| DataLoadError::InvalidEntry {
                index,
                reason: "skills must contain only strings".to_string(),
            })
        })
        .collect::<Result<_>>()?;

    Ok(normalize_tokens(&raw))
}

/// Strings pass through, numbers and booleans are rendered as text.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Trim and lowercase every token, dropping the ones left empty.
pub fn normalize_tokens<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    tokens
        .iter()
        .map(|t| t.as_ref().trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_entry() {
        let content = r#"[{
            "title": "  Data Intern ",
            "description": "Build dashboards.",
            "location": "Pune",
            "skills": ["Python", " SQL ", ""],
            "duration": "3 months"
        }]"#;

        let internships = parse_internships(content).unwrap();
        assert_eq!(internships.len(), 1);
        assert_eq!(internships[0].title, "Data Intern");
        assert_eq!(internships[0].skills, vec!["python", "sql"]);
    }

    #[test]
    fn test_missing_skills_defaults_to_empty() {
        let content = r#"[{"title": "A", "description": "B", "location": "C", "duration": "D"}]"#;
        let internships = parse_internships(content).unwrap();
        assert!(internships[0].skills.is_empty());
    }

    #[test]
    fn test_numeric_duration_is_stringified() {
        let content = r#"[{"title": "A", "description": "B", "location": "C", "duration": 6}]"#;
        let internships = parse_internships(content).unwrap();
        assert_eq!(internships[0].duration, "6");
    }

    #[test]
    fn test_top_level_object_rejected() {
        let result = parse_internships(r#"{"title": "A"}"#);
        assert!(matches!(result, Err(DataLoadError::NotAList)));
    }

    #[test]
    fn test_skills_not_a_list() {
        let content = r#"[{"title": "A", "description": "B", "location": "C",
            "duration": "D", "skills": "python"}]"#;
        match parse_internships(content) {
            Err(DataLoadError::InvalidEntry { index, reason }) => {
                assert_eq!(index, 0);
                assert_eq!(reason, "skills must be a list");
            }
            other => panic!("expected InvalidEntry, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_field_reports_index() {
        let content = r#"[
            {"title": "A", "description": "B", "location": "C", "duration": "D"},
            {"title": "A", "description": "B", "duration": "D"}
        ]"#;
        match parse_internships(content) {
            Err(DataLoadError::InvalidEntry { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected InvalidEntry, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_required_field() {
        let content = r#"[{"title": "   ", "description": "B", "location": "C", "duration": "D"}]"#;
        assert!(matches!(
            parse_internships(content),
            Err(DataLoadError::MissingFields { index: 0 })
        ));
    }

    #[test]
    fn test_normalize_tokens() {
        let tokens = normalize_tokens(&[" Rust ", "", "   ", "SQL"]);
        assert_eq!(tokens, vec!["rust", "sql"]);
    }
}
