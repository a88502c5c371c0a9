use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use axum_extra::extract::SignedCookieJar;
use maud::Markup;
use serde::Deserialize;

use crate::{
    names,
    rejections::{AppError, ResultExt},
    services::auth::LoginOutcome,
    utils, views, AppState,
};

use crate::views::homepage as homepage_views;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(homepage))
        .route("/login", get(login_page).post(login_post))
        .route("/logout", post(logout_post))
        .route("/join", get(join_page))
}

async fn homepage() -> Markup {
    views::page("Welcome", homepage_views::landing_page())
}

async fn login_page() -> Markup {
    views::page(
        "Teacher Login",
        homepage_views::login(homepage_views::LoginState::NoError),
    )
}

#[derive(Deserialize)]
struct LoginPost {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

async fn login_post(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(body): Form<LoginPost>,
) -> Result<Response, AppError> {
    let outcome = state
        .auth
        .login(&body.username, &body.password)
        .await
        .reject("login failed")?;

    match outcome {
        LoginOutcome::Success(token) => {
            let jar = jar.add(utils::session_cookie(token, state.secure_cookies));
            Ok((jar, Redirect::to(names::DASHBOARD_URL)).into_response())
        }
        LoginOutcome::InvalidCredentials => Ok((
            StatusCode::UNAUTHORIZED,
            views::page(
                "Teacher Login",
                homepage_views::login(homepage_views::LoginState::InvalidCredentials),
            ),
        )
            .into_response()),
    }
}

async fn logout_post(State(state): State<AppState>, jar: SignedCookieJar) -> impl IntoResponse {
    if let Some(token) = jar
        .get(names::TEACHER_SESSION_COOKIE_NAME)
        .map(|c| c.value().to_string())
    {
        state.auth.logout(&token).await;
    }

    (jar.remove(utils::removal_cookie()), Redirect::to(names::LOGIN_URL))
}

async fn join_page() -> Markup {
    views::page(
        "Join Game",
        homepage_views::student_join(names::UNITY_INDEX_PATH),
    )
}
