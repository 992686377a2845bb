//! Persistent, best-effort storage of dictionary payloads keyed by locale.
//!
//! Stores may fail freely; [`PersistentCache`] turns every failure into
//! "nothing cached" / "not written" so loading never depends on storage.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{db, dictionary::Locale, error::StorageError, models::WordlistPayload};

/// Raw storage backend. One entry per locale, overwritten wholesale on `put`.
#[async_trait]
pub trait PersistentStore: Send + Sync {
    async fn get(&self, locale: Locale) -> Result<Option<WordlistPayload>, StorageError>;

    async fn put(&self, payload: &WordlistPayload) -> Result<(), StorageError>;

    fn name(&self) -> &'static str;
}

/// Store backed by the `wordlist_cache` table
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PersistentStore for PgStore {
    async fn get(&self, locale: Locale) -> Result<Option<WordlistPayload>, StorageError> {
        let row = db::queries::get_cached_wordlist(&self.pool, locale.as_str()).await?;
        Ok(row.map(|row| {
            tracing::debug!(
                "Found cached {} word list version {} (stored {})",
                row.locale,
                row.version,
                row.updated_at
            );
            row.payload.0
        }))
    }

    async fn put(&self, payload: &WordlistPayload) -> Result<(), StorageError> {
        db::queries::upsert_cached_wordlist(&self.pool, payload).await?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "postgres"
    }
}

/// Used when no database is configured or reachable
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStore;

#[async_trait]
impl PersistentStore for NoStore {
    async fn get(&self, _locale: Locale) -> Result<Option<WordlistPayload>, StorageError> {
        Err(StorageError::Unavailable)
    }

    async fn put(&self, _payload: &WordlistPayload) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn name(&self) -> &'static str {
        "none"
    }
}

/// Resilient wrapper around a [`PersistentStore`]. Never returns an error.
#[derive(Clone)]
pub struct PersistentCache {
    store: Arc<dyn PersistentStore>,
}

impl PersistentCache {
    pub fn new(store: Arc<dyn PersistentStore>) -> Self {
        Self { store }
    }

    pub fn disabled() -> Self {
        Self::new(Arc::new(NoStore))
    }

    /// Cached payload for `locale`, or `None` if absent or the store failed
    pub async fn read(&self, locale: Locale) -> Option<WordlistPayload> {
        match self.store.get(locale).await {
            Ok(Some(payload)) if payload.locale == locale => Some(payload),
            Ok(Some(payload)) => {
                tracing::warn!(
                    "Ignoring cached word list for {} stored under {}",
                    payload.locale,
                    locale
                );
                None
            }
            Ok(None) => None,
            Err(StorageError::Unavailable) => None,
            Err(e) => {
                tracing::warn!("Failed to read cached word list for {}: {}", locale, e);
                None
            }
        }
    }

    /// Persist `payload`. Returns whether the store acknowledged the write.
    pub async fn write(&self, payload: &WordlistPayload) -> bool {
        match self.store.put(payload).await {
            Ok(()) => true,
            Err(StorageError::Unavailable) => false,
            Err(e) => {
                tracing::warn!(
                    "Failed to cache word list {} for {}: {}",
                    payload.version,
                    payload.locale,
                    e
                );
                false
            }
        }
    }

    pub fn store_name(&self) -> &'static str {
        self.store.name()
    }
}

#[cfg(test)]
pub mod testing {
    //! In-memory stores that record how they were used.

    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    pub struct MemoryStore {
        entries: Mutex<HashMap<Locale, WordlistPayload>>,
        pub reads: AtomicUsize,
        pub writes: AtomicUsize,
    }

    impl MemoryStore {
        pub fn with_payload(payload: WordlistPayload) -> Self {
            let store = Self::default();
            store
                .entries
                .lock()
                .unwrap()
                .insert(payload.locale, payload);
            store
        }

        pub fn cached_version(&self, locale: Locale) -> Option<String> {
            self.entries
                .lock()
                .unwrap()
                .get(&locale)
                .map(|p| p.version.clone())
        }

        pub fn read_count(&self) -> usize {
            self.reads.load(Ordering::SeqCst)
        }

        pub fn write_count(&self) -> usize {
            self.writes.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PersistentStore for MemoryStore {
        async fn get(&self, locale: Locale) -> Result<Option<WordlistPayload>, StorageError> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Ok(self.entries.lock().unwrap().get(&locale).cloned())
        }

        async fn put(&self, payload: &WordlistPayload) -> Result<(), StorageError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.entries
                .lock()
                .unwrap()
                .insert(payload.locale, payload.clone());
            Ok(())
        }

        fn name(&self) -> &'static str {
            "memory"
        }
    }

    /// Fails every operation with a non-sentinel error
    pub struct BrokenStore;

    #[async_trait]
    impl PersistentStore for BrokenStore {
        async fn get(&self, _locale: Locale) -> Result<Option<WordlistPayload>, StorageError> {
            Err(StorageError::Encode(
                serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
            ))
        }

        async fn put(&self, _payload: &WordlistPayload) -> Result<(), StorageError> {
            Err(StorageError::Database(sqlx::Error::PoolTimedOut))
        }

        fn name(&self) -> &'static str {
            "broken"
        }
    }
}
