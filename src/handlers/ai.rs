//! Endpoints the Unity client and the report page will use for AI summaries.
//!
//! No model is wired up yet: summarizing and saving answer with canned JSON,
//! and fetching a report reads the stored paragraphs.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::{extractors::AuthGuard, rejections::ApiError, utils, view_models, AppState};

pub const SUMMARY_STUB: &str = "AI summary stub: summarizer not connected yet.";
pub const SAVE_STUB_NOTE: &str = "Save stub: report storage not connected yet.";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/ai/summarize", post(summarize))
        .route(
            "/api/ai/report/{session_id}",
            get(get_report).post(save_report),
        )
}

#[derive(Serialize)]
struct SummaryResponse {
    summary: String,
}

#[derive(Serialize)]
struct ReportResponse {
    #[serde(rename = "sessionID")]
    session_id: i32,
    summary: String,
}

#[derive(Serialize)]
struct SaveReportResponse {
    ok: bool,
    note: &'static str,
}

async fn summarize(_: AuthGuard) -> Json<SummaryResponse> {
    Json(SummaryResponse {
        summary: SUMMARY_STUB.to_string(),
    })
}

async fn get_report(
    _: AuthGuard,
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ReportResponse>, ApiError> {
    let session = match utils::parse_id(&session_id) {
        Some(id) => state.db.session_by_id(id).await,
        None => None,
    }
    .ok_or(ApiError::NotFound("Session not found."))?;

    Ok(Json(ReportResponse {
        session_id: session.id,
        summary: view_models::summary_text(&session),
    }))
}

async fn save_report(_: AuthGuard, Path(session_id): Path<String>) -> Json<SaveReportResponse> {
    tracing::debug!("report save requested for session {session_id}");
    Json(SaveReportResponse {
        ok: true,
        note: SAVE_STUB_NOTE,
    })
}
