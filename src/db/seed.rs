// Mock records loaded at startup. They predate the editor's question format,
// so the deck contents below would not pass validation if resubmitted.

use super::models::{Deck, Session, SessionMetrics};

pub(super) fn decks() -> Vec<Deck> {
    vec![
        Deck {
            id: 1,
            title: "Math Warmup".to_string(),
            content_json: r#"{"questions":[{"prompt":"3 + 4","answers":["7","8","6"],"correctIndex":0}]}"#
                .to_string(),
        },
        Deck {
            id: 2,
            title: "US History 101".to_string(),
            content_json: r#"{"questions":[{"prompt":"Year of the Declaration","answers":["1776","1812","1865"],"correctIndex":0}]}"#
                .to_string(),
        },
        Deck {
            id: 3,
            title: "Science Starter".to_string(),
            content_json: r#"{"questions":[{"prompt":"H2O is","answers":["Water","Oxygen","Hydrogen"],"correctIndex":0}]}"#
                .to_string(),
        },
    ]
}

pub(super) fn sessions() -> Vec<Session> {
    vec![
        Session {
            id: 101,
            deck_id: 1,
            deck_title: Some("Math Warmup".to_string()),
            created_at: Some("2026-02-03 09:12".to_string()),
            summary_paragraphs: vec![
                "Students started the session with strong pace control and quick recall on arithmetic prompts.".to_string(),
                "Accuracy remained steady across the middle rounds, with a few learners improving response time after each reveal.".to_string(),
                "The session ended with consistent participation, which indicates readiness for more complex mixed operations.".to_string(),
            ],
            metrics: Some(SessionMetrics {
                rounds_played: 8,
                average_accuracy: "86%".to_string(),
                average_response_time: "5.4s".to_string(),
            }),
        },
        Session {
            id: 102,
            deck_id: 2,
            deck_title: Some("US History 101".to_string()),
            created_at: Some("2026-02-04 13:40".to_string()),
            summary_paragraphs: vec![
                "Learners showed high engagement during early prompts and frequently discussed answer choices before submission.".to_string(),
                "The group demonstrated stronger knowledge of foundational dates than mid century events, which suggests a review opportunity.".to_string(),
                "Final rounds showed improved consensus, which indicates the hints and explanations supported retention.".to_string(),
            ],
            metrics: Some(SessionMetrics {
                rounds_played: 10,
                average_accuracy: "79%".to_string(),
                average_response_time: "6.2s".to_string(),
            }),
        },
    ]
}
