//! Error types for dictionary loading and storage.

use thiserror::Error;

use crate::dictionary::Locale;

/// Failure of a dictionary load. Delivered to every caller waiting on the same load.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    /// No source is registered for the locale. Permanent, never retried.
    #[error("No dictionary source registered for locale {0}")]
    UnregisteredLocale(Locale),

    /// The source could not be fetched and no cached payload exists.
    #[error("Dictionary for {locale} unavailable: {source}")]
    Fetch {
        locale: Locale,
        #[source]
        source: FetchError,
    },
}

impl LoadError {
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, LoadError::UnregisteredLocale(_))
    }
}

/// Failure to obtain a payload from its source
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Source responded with status {0}")]
    Status(u16),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Malformed payload: {0}")]
    Decode(String),

    /// The payload returned belongs to a different locale than requested.
    #[error("Payload is for locale {found}, expected {expected}")]
    LocaleMismatch { expected: Locale, found: Locale },

    #[error("Load task failed: {0}")]
    TaskFailed(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FetchError::Status(status.as_u16()),
            None if err.is_decode() => FetchError::Decode(err.to_string()),
            None => FetchError::Http(err.to_string()),
        }
    }
}

impl From<std::io::Error> for FetchError {
    fn from(err: std::io::Error) -> Self {
        FetchError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

/// Failure of the persistent store. Never leaves the cache adapter.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Failed to encode or decode cached payload: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("No persistent store available")]
    Unavailable,
}

#[derive(Debug, Clone, Error)]
#[error("Unknown locale: {0}")]
pub struct LocaleParseError(pub String);
