pub mod config;
pub mod db;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod names;
pub mod public;
pub mod rejections;
pub mod services;
pub mod statics;
pub mod tls;
pub mod utils;
pub mod validation;
pub mod view_models;
pub mod views;

use std::path::PathBuf;

use axum::{extract::FromRef, middleware, Router};
use axum_extra::extract::cookie::Key;
use tower_http::{services::ServeDir, trace::TraceLayer};

use services::auth::AuthService;

#[derive(Clone)]
pub struct AppState {
    pub db: db::Db,
    pub auth: AuthService,
    pub cookie_key: Key,
    pub secure_cookies: bool,
    pub public_dir: PathBuf,
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

pub fn router(state: AppState) -> Router {
    let public_files = ServeDir::new(&state.public_dir);

    Router::new()
        .merge(handlers::homepage::routes())
        .merge(handlers::dashboard::routes())
        .merge(handlers::deck::routes())
        .merge(handlers::game::routes())
        .merge(handlers::ai::routes())
        .nest("/static", statics::routes())
        .fallback_service(public_files)
        .layer(middleware::from_fn(public::brotli_headers))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
