use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use async_trait::async_trait;

use crate::{
    dictionary::{trie::TrieBuilder, wordlists, Locale},
    error::FetchError,
    models::{WordLengthLimits, WordlistPayload},
};

/// Where the canonical payload for a locale comes from
#[async_trait]
pub trait PayloadSource: Send + Sync {
    async fn fetch(&self, locale: Locale) -> Result<WordlistPayload, FetchError>;

    /// Short label for logs
    fn describe(&self) -> String;
}

/// Which bundled word list to serve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WordlistVariant {
    #[default]
    Standard,
    Extended,
}

impl fmt::Display for WordlistVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordlistVariant::Standard => f.write_str("standard"),
            WordlistVariant::Extended => f.write_str("extended"),
        }
    }
}

impl FromStr for WordlistVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "local" => Ok(WordlistVariant::Standard),
            "extended" => Ok(WordlistVariant::Extended),
            other => Err(format!("unknown word list variant '{}'", other)),
        }
    }
}

/// Serves the word lists compiled into the binary
#[derive(Debug, Clone)]
pub struct BundledSource {
    variant: WordlistVariant,
}

impl BundledSource {
    pub fn new(variant: WordlistVariant) -> Self {
        Self { variant }
    }

    /// Changes whenever the shipped lists can change
    pub fn version(&self) -> String {
        format!("bundled-{}-{}", self.variant, env!("CARGO_PKG_VERSION"))
    }

    pub fn build_payload(&self, locale: Locale) -> WordlistPayload {
        let mut builder = TrieBuilder::new();
        builder.extend(wordlists::STANDARD_WORDS);
        if self.variant == WordlistVariant::Extended {
            builder.extend(wordlists::EXTENDED_WORDS);
        }

        tracing::debug!(
            "Built {} bundled word list with {} words",
            self.variant,
            builder.len()
        );

        builder.into_payload(
            locale,
            self.version(),
            wordlists::PROFANITY,
            WordLengthLimits::default(),
        )
    }
}

#[async_trait]
impl PayloadSource for BundledSource {
    async fn fetch(&self, locale: Locale) -> Result<WordlistPayload, FetchError> {
        Ok(self.build_payload(locale))
    }

    fn describe(&self) -> String {
        format!("bundled ({})", self.variant)
    }
}

/// Reads a JSON payload from disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PayloadSource for FileSource {
    async fn fetch(&self, locale: Locale) -> Result<WordlistPayload, FetchError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let payload: WordlistPayload = serde_json::from_str(&content)?;
        ensure_locale(locale, payload)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Downloads a JSON payload over HTTP
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }
}

#[async_trait]
impl PayloadSource for HttpSource {
    async fn fetch(&self, locale: Locale) -> Result<WordlistPayload, FetchError> {
        let payload = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json::<WordlistPayload>()
            .await?;
        ensure_locale(locale, payload)
    }

    fn describe(&self) -> String {
        format!("http {}", self.url)
    }
}

fn ensure_locale(expected: Locale, payload: WordlistPayload) -> Result<WordlistPayload, FetchError> {
    if payload.locale != expected {
        return Err(FetchError::LocaleMismatch {
            expected,
            found: payload.locale,
        });
    }
    Ok(payload)
}

#[cfg(test)]
pub mod testing {
    //! Sources with controllable behaviour that count their fetches.

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use super::*;

    /// An en-US payload containing `words`, with "DAMN" on the profanity list
    pub fn payload(version: &str, words: &[&str]) -> WordlistPayload {
        let mut builder = TrieBuilder::new();
        builder.extend(words);
        builder.into_payload(Locale::EnUs, version, ["DAMN"], WordLengthLimits::default())
    }

    pub struct StaticSource {
        payload: WordlistPayload,
        delay: Option<Duration>,
        fetches: AtomicUsize,
    }

    impl StaticSource {
        pub fn new(payload: WordlistPayload) -> Self {
            Self {
                payload,
                delay: None,
                fetches: AtomicUsize::new(0),
            }
        }

        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        pub fn fetch_count(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PayloadSource for StaticSource {
        async fn fetch(&self, _locale: Locale) -> Result<WordlistPayload, FetchError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            Ok(self.payload.clone())
        }

        fn describe(&self) -> String {
            "static".to_string()
        }
    }

    /// Panics on its first fetch, then serves `payload`
    pub struct PanicOnceSource {
        payload: WordlistPayload,
        fetches: AtomicUsize,
    }

    impl PanicOnceSource {
        pub fn new(payload: WordlistPayload) -> Self {
            Self {
                payload,
                fetches: AtomicUsize::new(0),
            }
        }

        pub fn fetch_count(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PayloadSource for PanicOnceSource {
        async fn fetch(&self, _locale: Locale) -> Result<WordlistPayload, FetchError> {
            if self.fetches.fetch_add(1, Ordering::SeqCst) == 0 {
                panic!("word list source crashed");
            }
            Ok(self.payload.clone())
        }

        fn describe(&self) -> String {
            "panic-once".to_string()
        }
    }

    #[derive(Default)]
    pub struct FailingSource {
        fetches: AtomicUsize,
    }

    impl FailingSource {
        pub fn fetch_count(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PayloadSource for FailingSource {
        async fn fetch(&self, _locale: Locale) -> Result<WordlistPayload, FetchError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Err(FetchError::Http("connection refused".to_string()))
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }
}
