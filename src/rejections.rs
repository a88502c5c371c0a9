use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use maud::{html, Markup};
use serde_json::json;

use crate::{names, validation::DeckValidationError, views};

/// Errors a page handler can end with.
#[derive(Debug)]
pub enum AppError {
    /// The submitted input was rejected; the message is shown to the user.
    Input(String),
    NotFound(&'static str),
    /// Teacher route without a signed-in session. Redirects to the login page.
    Unauthenticated,
    /// Unexpected failure; the detail is logged, the client sees only this message.
    Internal(&'static str),
}

impl From<DeckValidationError> for AppError {
    fn from(err: DeckValidationError) -> Self {
        AppError::Input(format!("Deck could not be saved: {err}."))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Input(message) => {
                (StatusCode::BAD_REQUEST, error_page("Bad Request", &message)).into_response()
            }
            AppError::NotFound(message) => {
                (StatusCode::NOT_FOUND, error_page("Not Found", message)).into_response()
            }
            AppError::Unauthenticated => Redirect::to(names::LOGIN_URL).into_response(),
            AppError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_page("Something went wrong", message),
            )
                .into_response(),
        }
    }
}

/// Errors for the JSON endpoints, rendered as `{"error": ...}`.
#[derive(Debug)]
pub enum ApiError {
    NotFound(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (code, message) = match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
        };

        (code, Json(json!({ "error": message }))).into_response()
    }
}

pub trait ResultExt<T> {
    /// Logs the error and turns it into [`AppError::Internal`] carrying `message`.
    fn reject(self, message: &'static str) -> Result<T, AppError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn reject(self, message: &'static str) -> Result<T, AppError> {
        self.map_err(|err| {
            tracing::error!("{message}: {err}");
            AppError::Internal(message)
        })
    }
}

fn error_page(title: &str, message: &str) -> Markup {
    views::page(
        title,
        html! {
            h1 { (title) }
            p { (message) }
            a href=(names::HOME_URL) { "Back to start" }
        },
    )
}
