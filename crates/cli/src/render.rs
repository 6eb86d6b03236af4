//! Text rendering of the results page.

use colored::Colorize;
use rec_client::Recommendation;

use crate::coordinator::UiState;
use crate::form;

pub const PAGE_HEADING: &str = "Internship Recommendation Engine";
pub const EMPTY_PLACEHOLDER: &str = "No recommendations yet.";

/// One card: title, description, location and duration, verbatim.
pub fn render_card(rec: &Recommendation) -> String {
    format!(
        "{}\n{}\n{} {}\n{} {}",
        rec.title.bold(),
        rec.description,
        "Location:".cyan(),
        rec.location,
        "Duration:".cyan(),
        rec.duration
    )
}

/// Cards in input order separated by a blank line, or the placeholder.
pub fn render_list(recs: &[Recommendation]) -> String {
    if recs.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }
    recs.iter().map(render_card).collect::<Vec<_>>().join("\n\n")
}

pub fn render_error(message: &str) -> String {
    message.red().to_string()
}

/// The submit control: its label, dimmed while disabled.
pub fn render_submit_control(loading: bool) -> String {
    let label = format!("[{}]", form::submit_label(loading));
    if form::is_submit_enabled(loading) {
        label.green().bold().to_string()
    } else {
        label.dimmed().to_string()
    }
}

/// Heading, then the error line when set, then the list.
pub fn render_page(state: &UiState) -> String {
    let mut sections = vec![PAGE_HEADING.bold().blue().to_string()];
    if !state.error_message.is_empty() {
        sections.push(render_error(&state.error_message));
    }
    sections.push(render_list(&state.recommendations));
    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(title: &str) -> Recommendation {
        Recommendation {
            title: title.to_string(),
            description: "Build APIs   with <b>FastAPI</b>".to_string(),
            location: "Pune".to_string(),
            duration: "3 months".to_string(),
        }
    }

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_empty_list_renders_placeholder() {
        plain();
        assert_eq!(render_list(&[]), "No recommendations yet.");
    }

    #[test]
    fn test_single_card() {
        plain();
        assert_eq!(
            render_list(&[rec("A")]),
            "A\nBuild APIs   with <b>FastAPI</b>\nLocation: Pune\nDuration: 3 months"
        );
    }

    #[test]
    fn test_cards_keep_input_order() {
        plain();
        let rendered = render_list(&[rec("First"), rec("Second")]);
        let cards: Vec<&str> = rendered.split("\n\n").collect();

        assert_eq!(cards.len(), 2);
        assert!(cards[0].starts_with("First\n"));
        assert!(cards[1].starts_with("Second\n"));
    }

    #[test]
    fn test_submit_control_follows_loading() {
        plain();
        assert_eq!(render_submit_control(false), "[Get Recommendations]");
        assert_eq!(render_submit_control(true), "[Loading...]");
    }

    #[test]
    fn test_page_layout() {
        plain();
        let state = UiState {
            recommendations: vec![],
            is_loading: false,
            error_message: "Bad request".to_string(),
        };
        assert_eq!(
            render_page(&state),
            "Internship Recommendation Engine\n\nBad request\n\nNo recommendations yet."
        );

        let state = UiState {
            recommendations: vec![rec("A")],
            ..Default::default()
        };
        let page = render_page(&state);
        assert!(page.starts_with("Internship Recommendation Engine\n\nA\n"));
        assert!(!page.contains("No recommendations yet."));
    }
}
