pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::form::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(handlers::handle_form))
        .route("/tailor", post(handlers::handle_tailor))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
