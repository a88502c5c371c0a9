//! Display shapes built from stored records.
//!
//! Everything here is read-time and lenient: stored content that no longer
//! parses degrades to defaults instead of failing the page.

use serde_json::Value;

use crate::db::{Deck, Session, SessionMetrics};

pub const UNTITLED_DECK: &str = "Untitled Deck";
pub const UNKNOWN_DATE: &str = "Unknown date";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckSummary {
    pub id: i32,
    pub title: String,
    pub question_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub id: i32,
    pub deck_id: i32,
    pub deck_title: String,
    pub created_at: String,
    pub summary_preview: Option<String>,
    pub metrics: SessionMetrics,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub id: i32,
    pub deck_title: String,
    pub created_at: String,
    pub summary_paragraphs: Vec<String>,
    pub metrics: SessionMetrics,
}

pub struct DashboardData {
    pub decks: Vec<DeckSummary>,
    pub sessions: Vec<SessionSummary>,
}

/// Number of entries in the content's `questions` array, or 0 when the
/// content is not JSON or has no such array.
pub fn count_questions(content_json: &str) -> usize {
    serde_json::from_str::<Value>(content_json)
        .ok()
        .and_then(|doc| doc.get("questions").and_then(Value::as_array).map(Vec::len))
        .unwrap_or(0)
}

pub fn summarize_deck(deck: &Deck) -> DeckSummary {
    DeckSummary {
        id: deck.id,
        title: deck.title.clone(),
        question_count: count_questions(&deck.content_json),
    }
}

// Dates are shown exactly as stored for now.
pub fn format_session_date(raw: Option<&str>) -> String {
    match raw {
        Some(date) if !date.is_empty() => date.to_string(),
        _ => UNKNOWN_DATE.to_string(),
    }
}

fn deck_title(session: &Session) -> String {
    session
        .deck_title
        .as_deref()
        .filter(|title| !title.is_empty())
        .unwrap_or(UNTITLED_DECK)
        .to_string()
}

pub fn summarize_session(session: &Session) -> SessionSummary {
    SessionSummary {
        id: session.id,
        deck_id: session.deck_id,
        deck_title: deck_title(session),
        created_at: format_session_date(session.created_at.as_deref()),
        summary_preview: session.summary_paragraphs.first().cloned(),
        metrics: session.metrics.clone().unwrap_or_default(),
    }
}

pub fn session_report(session: &Session) -> SessionReport {
    SessionReport {
        id: session.id,
        deck_title: deck_title(session),
        created_at: format_session_date(session.created_at.as_deref()),
        summary_paragraphs: session.summary_paragraphs.clone(),
        metrics: session.metrics.clone().unwrap_or_default(),
    }
}

/// The stored summary as one text block, paragraphs separated by a blank line.
pub fn summary_text(session: &Session) -> String {
    session.summary_paragraphs.join("\n\n")
}

pub fn dashboard(decks: &[Deck], sessions: &[Session]) -> DashboardData {
    DashboardData {
        decks: decks.iter().map(summarize_deck).collect(),
        sessions: sessions.iter().map(summarize_session).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            id: 7,
            deck_id: 3,
            deck_title: None,
            created_at: None,
            summary_paragraphs: vec![],
            metrics: None,
        }
    }

    #[test]
    fn counts_questions_leniently() {
        assert_eq!(count_questions(r#"{"questions":[{},{},{}]}"#), 3);
        assert_eq!(count_questions(r#"{"questions":[]}"#), 0);
        assert_eq!(count_questions(r#"{"questions":"three"}"#), 0);
        assert_eq!(count_questions("{not json"), 0);
        assert_eq!(count_questions(""), 0);
    }

    #[test]
    fn deck_summary_carries_id_and_title() {
        let deck = Deck {
            id: 4,
            title: "Fractions".to_string(),
            content_json: r#"{"questions":[{"prompt":"1/2 + 1/2"}]}"#.to_string(),
        };

        assert_eq!(
            summarize_deck(&deck),
            DeckSummary {
                id: 4,
                title: "Fractions".to_string(),
                question_count: 1,
            }
        );
    }

    #[test]
    fn session_summary_fills_defaults() {
        let summary = summarize_session(&session());

        assert_eq!(summary.deck_title, UNTITLED_DECK);
        assert_eq!(summary.created_at, UNKNOWN_DATE);
        assert_eq!(summary.summary_preview, None);
        assert_eq!(summary.metrics.rounds_played, 0);
        assert_eq!(summary.metrics.average_accuracy, "N/A");
        assert_eq!(summary.metrics.average_response_time, "N/A");
    }

    #[test]
    fn blank_title_and_date_use_defaults() {
        let mut session = session();
        session.deck_title = Some(String::new());
        session.created_at = Some(String::new());

        let report = session_report(&session);
        assert_eq!(report.deck_title, UNTITLED_DECK);
        assert_eq!(report.created_at, UNKNOWN_DATE);
    }

    #[test]
    fn preview_is_first_paragraph() {
        let mut session = session();
        session.summary_paragraphs = vec!["First.".to_string(), "Second.".to_string()];

        assert_eq!(
            summarize_session(&session).summary_preview.as_deref(),
            Some("First.")
        );
        assert_eq!(summary_text(&session), "First.\n\nSecond.");
        assert_eq!(session_report(&session).summary_paragraphs.len(), 2);
    }
}
