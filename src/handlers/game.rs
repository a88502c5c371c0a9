use axum::{
    extract::{Query, State},
    routing::get,
    Router,
};
use maud::Markup;
use serde::Deserialize;

use crate::{
    extractors::AuthGuard, names, rejections::AppError, utils, views, views::game as game_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/game/play", get(play))
}

#[derive(Deserialize)]
struct PlayQuery {
    #[serde(default, rename = "deckID")]
    deck_id: Option<String>,
}

/// Opens the requested deck, or the first deck when the id is missing or unknown.
async fn play(
    _: AuthGuard,
    State(state): State<AppState>,
    Query(query): Query<PlayQuery>,
) -> Result<Markup, AppError> {
    let requested = match query.deck_id.as_deref().and_then(utils::parse_id) {
        Some(id) => state.db.deck_by_id(id).await,
        None => None,
    };

    let deck = match requested {
        Some(deck) => deck,
        None => state
            .db
            .decks()
            .await
            .into_iter()
            .next()
            .ok_or(AppError::NotFound(
                "No decks available. Please create a deck first.",
            ))?,
    };

    Ok(views::teacher_page(
        "Launch Game",
        game_views::game(&deck, names::UNITY_INDEX_PATH),
    ))
}
