use crate::server::AppState;
use crate::server::views::{health, procesar};
use axum::extract::DefaultBodyLimit;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/procesar", post(procesar))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
