use axum::{
    extract::{Form, FromRequest, FromRequestParts, Request},
    http::{header::CONTENT_TYPE, request::Parts},
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::SignedCookieJar;
use serde::Deserialize;
use serde_json::Value;

use crate::{names, rejections::AppError, AppState};

/// Guard extractor for teacher routes.
///
/// Verifies the signed session cookie and then checks its token against the
/// server-side session table. Rejects with [`AppError::Unauthenticated`],
/// which redirects to the login page.
pub struct AuthGuard;

impl FromRequestParts<AppState> for AuthGuard {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = SignedCookieJar::from_headers(&parts.headers, state.cookie_key.clone());

        if let Some(token) = jar
            .get(names::TEACHER_SESSION_COOKIE_NAME)
            .map(|c| c.value().to_string())
        {
            if state.auth.is_authenticated(&token).await {
                return Ok(AuthGuard);
            }
        }

        Err(AppError::Unauthenticated)
    }
}

/// Fields of a deck save, read from a form post or from a JSON body.
///
/// Absent fields come back empty. A JSON `id` may be a number or a string.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DeckSubmission {
    pub id: String,
    pub title: String,
    pub content_json: String,
}

#[derive(Deserialize)]
struct DeckForm {
    #[serde(default)]
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default, rename = "contentJson")]
    content_json: String,
}

#[derive(Deserialize)]
struct DeckJson {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default, rename = "contentJson")]
    content_json: Option<String>,
}

impl From<DeckForm> for DeckSubmission {
    fn from(form: DeckForm) -> Self {
        Self {
            id: form.id,
            title: form.title,
            content_json: form.content_json,
        }
    }
}

impl From<DeckJson> for DeckSubmission {
    fn from(body: DeckJson) -> Self {
        let id = match body.id {
            Some(Value::String(id)) => id,
            Some(Value::Number(id)) => id.to_string(),
            _ => String::new(),
        };

        Self {
            id,
            title: body.title.unwrap_or_default(),
            content_json: body.content_json.unwrap_or_default(),
        }
    }
}

impl<S: Send + Sync> FromRequest<S> for DeckSubmission {
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"));

        if is_json {
            let Json(body) = Json::<DeckJson>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(body.into())
        } else {
            let Form(body) = Form::<DeckForm>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(body.into())
        }
    }
}
