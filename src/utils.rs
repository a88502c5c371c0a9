use axum_extra::extract::cookie::{Cookie, SameSite};

use crate::{names, services::auth::SESSION_TTL};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((names::TEACHER_SESSION_COOKIE_NAME, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .path("/")
        .max_age(time::Duration::seconds(SESSION_TTL.as_secs() as i64))
        .build()
}

pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build(names::TEACHER_SESSION_COOKIE_NAME)
        .path("/")
        .build()
}

/// Parses an id taken from a path, query or form field. Anything that is not
/// a plain integer is `None`.
pub fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}
