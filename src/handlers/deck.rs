use axum::{
    extract::{Path, State},
    response::Redirect,
    routing::{get, post},
    Router,
};
use maud::Markup;

use crate::{
    extractors::{AuthGuard, DeckSubmission},
    names,
    rejections::AppError,
    utils,
    validation::{self, EMPTY_DECK_CONTENT},
    view_models::{self, UNTITLED_DECK},
    views,
    views::deck::{self as deck_views, DeckEditorData, EditorMode},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/deck/new", get(new_deck))
        .route("/deck/{id}/edit", get(edit_deck))
        .route("/deck", post(save_deck))
}

async fn new_deck(_: AuthGuard) -> Markup {
    views::teacher_page("Create Deck", deck_views::editor(&DeckEditorData::blank()))
}

async fn edit_deck(
    _: AuthGuard,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Markup, AppError> {
    let deck = match utils::parse_id(&id) {
        Some(id) => state.db.deck_by_id(id).await,
        None => None,
    }
    .ok_or(AppError::NotFound("Deck not found."))?;

    let data = DeckEditorData {
        mode: EditorMode::Edit,
        id: Some(deck.id),
        question_count: view_models::count_questions(&deck.content_json),
        title: deck.title,
        content_json: deck.content_json,
    };

    Ok(views::teacher_page("Edit Deck", deck_views::editor(&data)))
}

async fn save_deck(
    _: AuthGuard,
    State(state): State<AppState>,
    body: DeckSubmission,
) -> Result<Redirect, AppError> {
    let title = match body.title.trim() {
        "" => UNTITLED_DECK,
        title => title,
    };
    let content = match body.content_json.trim() {
        "" => EMPTY_DECK_CONTENT,
        content => content,
    };

    let validated = validation::validate_deck_content(content).inspect_err(|err| {
        tracing::info!("deck save rejected: {err}");
    })?;
    let question_count = validated.question_count();

    let deck = state
        .db
        .save_deck(utils::parse_id(&body.id), title.to_string(), validated)
        .await;

    tracing::info!("deck {} saved with {question_count} question(s)", deck.id);
    Ok(Redirect::to(&names::edit_deck_url(deck.id)))
}
