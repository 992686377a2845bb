use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    dictionary::{LoadState, Locale},
    error::LoadError,
    game::{is_valid_path, Scorer},
    models::{GridPosition, ValidationOptions, ValidationResult},
    AppState,
};

/// Board dimensions assumed when a score request doesn't give any
pub const DEFAULT_GRID_SIZE: i32 = 5;

#[derive(Debug, Deserialize)]
pub struct ValidateWordRequest {
    pub word: String,
    #[serde(default)]
    pub options: ValidationOptions,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreWordRequest {
    pub letters: Vec<char>,
    #[serde(default = "default_multiplier")]
    pub combo_multiplier: f64,
    /// When present, the path is checked before scoring
    pub positions: Option<Vec<GridPosition>>,
    pub rows: Option<i32>,
    pub cols: Option<i32>,
}

fn default_multiplier() -> f64 {
    1.0
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreWordResponse {
    pub score: i64,
}

#[derive(Debug, Serialize)]
pub struct DictionaryStatusResponse {
    pub locale: Locale,
    pub registered: bool,
    pub state: LoadState,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreloadResponse {
    pub locale: Locale,
    pub version: String,
    pub node_count: usize,
}

/// Validate a submitted word
pub async fn validate_word(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ValidateWordRequest>,
) -> Result<Json<ValidationResult>, StatusCode> {
    let result = state
        .validator
        .validate_word(&payload.word, &payload.options)
        .await
        .map_err(load_error_status)?;

    Ok(Json(result))
}

/// Score an accepted word, optionally checking the path it was traced along
pub async fn score_word(
    Json(payload): Json<ScoreWordRequest>,
) -> Result<Json<ScoreWordResponse>, StatusCode> {
    if !payload.combo_multiplier.is_finite() || payload.combo_multiplier < 0.0 {
        tracing::warn!("Rejected combo multiplier {}", payload.combo_multiplier);
        return Err(StatusCode::BAD_REQUEST);
    }

    if let Some(positions) = &payload.positions {
        let rows = payload.rows.unwrap_or(DEFAULT_GRID_SIZE);
        let cols = payload.cols.unwrap_or(DEFAULT_GRID_SIZE);
        if positions.len() != payload.letters.len() || !is_valid_path(positions, rows, cols) {
            tracing::debug!("Rejected illegal path {:?}", positions);
            return Err(StatusCode::UNPROCESSABLE_ENTITY);
        }
    }

    let score = Scorer::score_word(&payload.letters, payload.combo_multiplier);
    Ok(Json(ScoreWordResponse { score }))
}

/// Report whether a locale's dictionary is loaded
pub async fn dictionary_status(
    State(state): State<Arc<AppState>>,
    Path(locale): Path<String>,
) -> Result<Json<DictionaryStatusResponse>, StatusCode> {
    let locale = parse_locale(&locale)?;
    let loader = state.validator.loader();

    Ok(Json(DictionaryStatusResponse {
        locale,
        registered: loader.registry().is_registered(locale),
        state: loader.state(locale),
    }))
}

/// Load a locale's dictionary ahead of use
pub async fn preload_dictionary(
    State(state): State<Arc<AppState>>,
    Path(locale): Path<String>,
) -> Result<Json<PreloadResponse>, StatusCode> {
    let locale = parse_locale(&locale)?;
    let payload = state
        .validator
        .loader()
        .preload_dictionary(locale)
        .await
        .map_err(load_error_status)?;

    Ok(Json(PreloadResponse {
        locale,
        version: payload.version.clone(),
        node_count: payload.node_count(),
    }))
}

fn parse_locale(raw: &str) -> Result<Locale, StatusCode> {
    raw.parse().map_err(|e| {
        tracing::debug!("{}", e);
        StatusCode::NOT_FOUND
    })
}

fn load_error_status(err: LoadError) -> StatusCode {
    if err.is_configuration_error() {
        tracing::debug!("{}", err);
        StatusCode::NOT_FOUND
    } else {
        tracing::error!("Dictionary unavailable: {}", err);
        StatusCode::SERVICE_UNAVAILABLE
    }
}
