pub mod dictionary;
pub mod health;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes())
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/words/validate", post(dictionary::validate_word))
        .route("/words/score", post(dictionary::score_word))
        .route("/dictionaries/{locale}", get(dictionary::dictionary_status))
        .route("/dictionaries/{locale}/preload", post(dictionary::preload_dictionary))
}
