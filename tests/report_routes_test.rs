mod common;

use axum::http::{header, StatusCode};
use card_clash::{
    db::{Db, Session},
    handlers::ai::{SAVE_STUB_NOTE, SUMMARY_STUB},
};
use common::{app, body_text, form_request, get_request, login, send};
use serde_json::Value;

async fn json_body(resp: axum::http::Response<axum::body::Body>) -> Value {
    let text = body_text(resp).await;
    serde_json::from_str(&text).expect("body should be JSON")
}

#[tokio::test]
async fn report_page_shows_summary_and_metrics() {
    let app = app(Db::new());
    let cookie = login(&app).await;

    let resp = send(&app, get_request("/report/101", Some(&cookie))).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(resp).await;
    assert!(body.contains("Math Warmup"));
    assert!(body.contains("2026-02-03 09:12"));
    assert!(body.contains("strong pace control"));
    assert!(body.contains("86%"));
}

#[tokio::test]
async fn report_page_for_unknown_session_is_not_found() {
    let app = app(Db::new());
    let cookie = login(&app).await;

    for uri in ["/report/999", "/report/abc"] {
        let resp = send(&app, get_request(uri, Some(&cookie))).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "for {uri}");
        assert!(body_text(resp).await.contains("Report not found."));
    }
}

#[tokio::test]
async fn report_page_fills_in_missing_fields() {
    let db = Db::with_records(
        vec![],
        vec![Session {
            id: 7,
            deck_id: 1,
            deck_title: None,
            created_at: None,
            summary_paragraphs: vec![],
            metrics: None,
        }],
    );
    let app = app(db);
    let cookie = login(&app).await;

    let resp = send(&app, get_request("/report/7", Some(&cookie))).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(resp).await;
    assert!(body.contains("Untitled Deck"));
    assert!(body.contains("Unknown date"));
    assert!(body.contains("N/A"));
}

#[tokio::test]
async fn sessions_page_lists_every_session() {
    let app = app(Db::new());
    let cookie = login(&app).await;

    let resp = send(&app, get_request("/sessions", Some(&cookie))).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(resp).await;
    assert!(body.contains("/report/101"));
    assert!(body.contains("/report/102"));
}

#[tokio::test]
async fn report_api_returns_joined_summary() {
    let app = app(Db::new());
    let cookie = login(&app).await;

    let resp = send(&app, get_request("/api/ai/report/102", Some(&cookie))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).map(|v| v.as_bytes()),
        Some("application/json".as_bytes())
    );

    let json = json_body(resp).await;
    assert_eq!(json["sessionID"], 102);

    let summary = json["summary"].as_str().expect("summary should be a string");
    assert_eq!(summary.split("\n\n").count(), 3);
    assert!(summary.starts_with("Learners showed high engagement"));
}

#[tokio::test]
async fn report_api_for_unknown_session_is_a_json_404() {
    let app = app(Db::new());
    let cookie = login(&app).await;

    let resp = send(&app, get_request("/api/ai/report/999", Some(&cookie))).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let json = json_body(resp).await;
    assert_eq!(json["error"], "Session not found.");
}

#[tokio::test]
async fn summarize_and_save_answer_with_placeholders() {
    let app = app(Db::new());
    let cookie = login(&app).await;

    let resp = send(&app, form_request("/api/ai/summarize", String::new(), Some(&cookie))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["summary"], SUMMARY_STUB);

    let resp = send(&app, form_request("/api/ai/report/101", String::new(), Some(&cookie))).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = json_body(resp).await;
    assert_eq!(json["ok"], true);
    assert_eq!(json["note"], SAVE_STUB_NOTE);
}
