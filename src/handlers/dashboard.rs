use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use maud::Markup;

use crate::{
    extractors::AuthGuard, rejections::AppError, utils, view_models, views,
    views::dashboard as dashboard_views, AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard))
        .route("/sessions", get(sessions))
        .route("/report/{id}", get(report))
}

async fn dashboard(_: AuthGuard, State(state): State<AppState>) -> Markup {
    let decks = state.db.decks().await;
    let sessions = state.db.sessions().await;

    views::teacher_page(
        "Dashboard",
        dashboard_views::dashboard(&view_models::dashboard(&decks, &sessions)),
    )
}

async fn sessions(_: AuthGuard, State(state): State<AppState>) -> Markup {
    let sessions: Vec<_> = state
        .db
        .sessions()
        .await
        .iter()
        .map(view_models::summarize_session)
        .collect();

    views::teacher_page("Sessions", dashboard_views::sessions(&sessions))
}

async fn report(
    _: AuthGuard,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Markup, AppError> {
    let session = match utils::parse_id(&id) {
        Some(id) => state.db.session_by_id(id).await,
        None => None,
    }
    .ok_or(AppError::NotFound("Report not found."))?;

    Ok(views::teacher_page(
        "Session Report",
        dashboard_views::report(&view_models::session_report(&session)),
    ))
}
