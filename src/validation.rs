//! Write-time validation of deck content.
//!
//! Decks reach the store only through [`ValidatedDeckContent`], which this
//! module alone can construct. Reading stored decks back is lenient and lives
//! in [`crate::view_models`].

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::models::Question;

/// Content used when the editor submits an empty document.
pub const EMPTY_DECK_CONTENT: &str = "{\n  \"questions\": []\n}";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckValidationError {
    #[error("contentJson is not valid JSON")]
    MalformedContent,

    #[error("contentJson must contain a 'questions' array")]
    MissingQuestionsArray,

    #[error(
        "question at index {index} is missing required fields (questionText, optionA-D, correctAnswer A-D)"
    )]
    InvalidQuestion { index: usize },
}

/// Deck content that passed [`validate_deck_content`].
///
/// Holds the submitted text verbatim so user formatting survives a save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDeckContent {
    raw: String,
    question_count: usize,
}

impl ValidatedDeckContent {
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn question_count(&self) -> usize {
        self.question_count
    }

    pub fn into_inner(self) -> String {
        self.raw
    }
}

/// Checks that `raw` is JSON with a `questions` array of complete questions.
///
/// Stops at the first incomplete question.
pub fn validate_deck_content(raw: &str) -> Result<ValidatedDeckContent, DeckValidationError> {
    let document: Value =
        serde_json::from_str(raw).map_err(|_| DeckValidationError::MalformedContent)?;

    let questions = document
        .get("questions")
        .and_then(Value::as_array)
        .ok_or(DeckValidationError::MissingQuestionsArray)?;

    for (index, element) in questions.iter().enumerate() {
        let complete = Question::deserialize(element)
            .map(|question| question.is_complete())
            .unwrap_or(false);

        if !complete {
            return Err(DeckValidationError::InvalidQuestion { index });
        }
    }

    Ok(ValidatedDeckContent {
        raw: raw.to_string(),
        question_count: questions.len(),
    })
}
