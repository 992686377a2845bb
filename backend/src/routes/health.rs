use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::{
    dictionary::{DictionaryLoader, LoadState, Locale},
    AppState,
};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub cache: &'static str,
    pub dictionaries: Vec<DictionaryHealth>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DictionaryHealth {
    pub locale: Locale,
    pub state: LoadState,
}

/// Liveness plus the load state of every registered dictionary.
///
/// Always 200: an unloaded dictionary is loaded on first use, so it is not a fault.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(health_report(state.validator.loader()))
}

fn health_report(loader: &DictionaryLoader) -> HealthResponse {
    let dictionaries = loader
        .registry()
        .locales()
        .into_iter()
        .map(|locale| DictionaryHealth {
            locale,
            state: loader.state(locale),
        })
        .collect();

    HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        cache: loader.cache_store_name(),
        dictionaries,
    }
}
