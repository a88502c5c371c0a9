// In-memory record types

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    pub id: i32,
    pub title: String,
    /// Raw JSON text as the editor submitted it.
    pub content_json: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionMetrics {
    pub rounds_played: i32,
    pub average_accuracy: String,
    pub average_response_time: String,
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self {
            rounds_played: 0,
            average_accuracy: "N/A".to_string(),
            average_response_time: "N/A".to_string(),
        }
    }
}

/// A finished play-through of a deck.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub id: i32,
    /// Not checked against the deck store.
    pub deck_id: i32,
    pub deck_title: Option<String>,
    pub created_at: Option<String>,
    pub summary_paragraphs: Vec<String>,
    pub metrics: Option<SessionMetrics>,
}
