#![allow(dead_code)]

use std::path::PathBuf;

use axum::{
    body::Body,
    http::{header, Method, Request, Response, StatusCode},
    Router,
};
use axum_extra::extract::cookie::Key;
use card_clash::{
    db::Db,
    router,
    services::auth::{AuthService, EnvCredentials},
    AppState,
};
use tower::ServiceExt;

pub const ADMIN_USERNAME: &str = "teacher";
pub const ADMIN_PASSWORD: &str = "correct horse battery";

pub const VALID_DECK: &str = r#"{"questions":[{"questionText":"2+2?","optionA":"3","optionB":"4","optionC":"5","optionD":"6","correctAnswer":"B"}]}"#;

pub fn state(db: Db) -> AppState {
    state_with_public_dir(db, std::env::temp_dir().join("card_clash_test_public"))
}

pub fn state_with_public_dir(db: Db, public_dir: PathBuf) -> AppState {
    AppState {
        db,
        auth: AuthService::new(EnvCredentials::new(ADMIN_USERNAME, ADMIN_PASSWORD)),
        cookie_key: Key::generate(),
        secure_cookies: false,
        public_dir,
    }
}

pub fn app(db: Db) -> Router {
    router(state(db))
}

/// A fresh empty directory under the system temp dir.
pub fn scratch_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("{prefix}_{}", ulid::Ulid::new()));
    std::fs::create_dir_all(&dir).expect("scratch dir should be creatable");
    dir
}

pub fn json_request(uri: &str, body: String, cookie: Option<&str>) -> Request<Body> {
    let mut req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        req = req.header(header::COOKIE, cookie);
    }
    req.body(Body::from(body))
        .expect("request build should succeed")
}

pub fn form_request(uri: &str, body: String, cookie: Option<&str>) -> Request<Body> {
    let mut req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        req = req.header(header::COOKIE, cookie);
    }
    req.body(Body::from(body))
        .expect("request build should succeed")
}

pub fn get_request(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut req = Request::builder().method(Method::GET).uri(uri);
    if let Some(cookie) = cookie {
        req = req.header(header::COOKIE, cookie);
    }
    req.body(Body::empty())
        .expect("request build should succeed")
}

pub async fn send(app: &Router, req: Request<Body>) -> Response<Body> {
    app.clone().oneshot(req).await.expect("router should respond")
}

/// Logs in with the test credentials and returns the `name=value` cookie pair.
pub async fn login(app: &Router) -> String {
    let body = format!("username={ADMIN_USERNAME}&password={}", encode(ADMIN_PASSWORD));
    let resp = send(app, form_request("/login", body, None)).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let set_cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .expect("login should set a cookie")
        .to_str()
        .expect("cookie should be ascii");

    set_cookie
        .split(';')
        .next()
        .expect("cookie should have a name=value pair")
        .to_string()
}

pub async fn body_text(resp: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}

pub fn location(resp: &Response<Body>) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .expect("response should redirect")
        .to_str()
        .expect("location should be ascii")
}

/// Minimal form encoding for the characters the tests use.
pub fn encode(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('&', "%26")
        .replace('+', "%2B")
        .replace('=', "%3D")
        .replace('"', "%22")
        .replace('{', "%7B")
        .replace('}', "%7D")
        .replace('[', "%5B")
        .replace(']', "%5D")
        .replace(':', "%3A")
        .replace(',', "%2C")
        .replace('?', "%3F")
        .replace(' ', "+")
}
