pub const HOME_URL: &str = "/";
pub const LOGIN_URL: &str = "/login";
pub const LOGOUT_URL: &str = "/logout";
pub const JOIN_URL: &str = "/join";
pub const DASHBOARD_URL: &str = "/dashboard";
pub const SESSIONS_URL: &str = "/sessions";
pub const NEW_DECK_URL: &str = "/deck/new";
pub const SAVE_DECK_URL: &str = "/deck";
pub const PLAY_URL: &str = "/game/play";

pub const UNITY_INDEX_PATH: &str = "/Unity/index.html";

pub const TEACHER_SESSION_COOKIE_NAME: &str = "teacher_session";

pub fn edit_deck_url(deck_id: i32) -> String {
    format!("/deck/{deck_id}/edit")
}

pub fn play_deck_url(deck_id: i32) -> String {
    format!("{PLAY_URL}?deckID={deck_id}")
}

pub fn report_url(session_id: i32) -> String {
    format!("/report/{session_id}")
}
