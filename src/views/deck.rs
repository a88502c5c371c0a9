use maud::{html, Markup};

use crate::{names, validation::EMPTY_DECK_CONTENT};

pub enum EditorMode {
    Create,
    Edit,
}

pub struct DeckEditorData {
    pub mode: EditorMode,
    pub id: Option<i32>,
    pub title: String,
    pub content_json: String,
    pub question_count: usize,
}

impl DeckEditorData {
    pub fn blank() -> Self {
        Self {
            mode: EditorMode::Create,
            id: None,
            title: String::new(),
            content_json: EMPTY_DECK_CONTENT.to_string(),
            question_count: 0,
        }
    }
}

pub fn editor(data: &DeckEditorData) -> Markup {
    let heading = match data.mode {
        EditorMode::Create => "Create Deck",
        EditorMode::Edit => "Edit Deck",
    };

    html! {
        h1 { (heading) }
        p {
            "Each question needs "
            code { "questionText" } ", "
            code { "optionA" } " to " code { "optionD" }
            " and a " code { "correctAnswer" } " of A, B, C or D."
        }
        form action=(names::SAVE_DECK_URL) method="post" {
            @if let Some(id) = data.id {
                input type="hidden" name="id" value=(id);
            }
            label {
                "Title"
                input name="title"
                      type="text"
                      value=(data.title)
                      placeholder="Untitled Deck"
                      aria-label="Title";
            }
            label {
                "Questions (JSON)"
                textarea name="contentJson" rows="18" spellcheck="false" aria-label="Questions" {
                    (data.content_json)
                }
                small { (data.question_count) " question(s)" }
            }
            button type="submit" { "Save deck" }
        }
        @if let Some(id) = data.id {
            a href=(names::play_deck_url(id)) { "Play this deck" }
        }
    }
}
