//! Per-locale dictionary loading with persistent-cache reconciliation.
//!
//! Each locale moves `Unloaded -> Loading -> Ready`. The first request starts a
//! single background load; every request arriving before it finishes waits on
//! that same load, so a locale costs at most one cache read and one fetch.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::{mapref::entry::Entry, DashMap};
use futures::future::{BoxFuture, FutureExt, Shared};
use serde::Serialize;

use crate::{
    cache::PersistentCache,
    dictionary::{source::PayloadSource, Locale, LocaleRegistry},
    error::{FetchError, LoadError},
    models::WordlistPayload,
};

type LoadResult = Result<Arc<WordlistPayload>, LoadError>;
type PendingLoad = Shared<BoxFuture<'static, LoadResult>>;

enum Slot {
    Loading { id: u64, pending: PendingLoad },
    Ready(Arc<WordlistPayload>),
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    Unloaded,
    Loading,
    Ready,
}

/// Owns the resolved payload of every locale for the lifetime of the process.
///
/// Construct one at start-up and share it; tests build their own.
pub struct DictionaryLoader {
    registry: LocaleRegistry,
    cache: PersistentCache,
    slots: Arc<DashMap<Locale, Slot>>,
    next_id: AtomicU64,
}

impl DictionaryLoader {
    pub fn new(registry: LocaleRegistry, cache: PersistentCache) -> Self {
        Self {
            registry,
            cache,
            slots: Arc::new(DashMap::new()),
            next_id: AtomicU64::new(0),
        }
    }

    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    pub fn cache_store_name(&self) -> &'static str {
        self.cache.store_name()
    }

    pub fn state(&self, locale: Locale) -> LoadState {
        match self.slots.get(&locale).as_deref() {
            None => LoadState::Unloaded,
            Some(Slot::Loading { .. }) => LoadState::Loading,
            Some(Slot::Ready(_)) => LoadState::Ready,
        }
    }

    /// Warm a locale ahead of interactive use
    pub async fn preload_dictionary(&self, locale: Locale) -> LoadResult {
        let payload = self.load(locale).await?;
        tracing::info!(
            "Preloaded {} dictionary version {} ({} nodes)",
            locale,
            payload.version,
            payload.node_count()
        );
        Ok(payload)
    }

    /// Resolve the payload for `locale`, starting or joining its load as needed
    pub async fn load(&self, locale: Locale) -> LoadResult {
        let pending = match self.slots.entry(locale) {
            Entry::Occupied(entry) => match entry.get() {
                Slot::Ready(payload) => return Ok(payload.clone()),
                Slot::Loading { pending, .. } => pending.clone(),
            },
            Entry::Vacant(entry) => {
                let source = self
                    .registry
                    .source(locale)
                    .ok_or(LoadError::UnregisteredLocale(locale))?;
                let id = self.next_id.fetch_add(1, Ordering::Relaxed);
                let pending = self.start_load(id, locale, source);
                entry.insert(Slot::Loading {
                    id,
                    pending: pending.clone(),
                });
                pending
            }
        };

        pending.await
    }

    /// Spawn the load so it runs to completion even if every caller goes away
    fn start_load(&self, id: u64, locale: Locale, source: Arc<dyn PayloadSource>) -> PendingLoad {
        tracing::info!("Loading {} dictionary from {}", locale, source.describe());

        let cache = self.cache.clone();
        let slots = self.slots.clone();
        let task = {
            let slots = slots.clone();
            tokio::spawn(async move {
                let result = reconcile(locale, source.as_ref(), &cache).await.map(Arc::new);
                settle(&slots, id, locale, &result);
                result
            })
        };

        async move {
            match task.await {
                Ok(result) => result,
                Err(e) => {
                    // The task never reached `settle`
                    tracing::error!("{} dictionary load task failed: {}", locale, e);
                    let result = Err(LoadError::Fetch {
                        locale,
                        source: FetchError::TaskFailed(e.to_string()),
                    });
                    settle(&slots, id, locale, &result);
                    result
                }
            }
        }
        .boxed()
        .shared()
    }
}

/// Move a finished load to `Ready`, or forget it on failure so a later request retries
fn settle(slots: &DashMap<Locale, Slot>, id: u64, locale: Locale, result: &LoadResult) {
    match result {
        Ok(payload) => {
            if let Some(mut slot) = slots.get_mut(&locale) {
                if matches!(*slot, Slot::Loading { id: current, .. } if current == id) {
                    *slot = Slot::Ready(payload.clone());
                }
            }
        }
        Err(_) => {
            slots.remove_if(&locale, |_, slot| {
                matches!(slot, Slot::Loading { id: current, .. } if *current == id)
            });
        }
    }
}

/// Read the cache, then fetch, then pick which payload to adopt.
///
/// A fetch failure falls back to the cached payload when there is one. When the
/// fetched and cached versions match, the cached payload wins and nothing is written.
pub async fn reconcile(
    locale: Locale,
    source: &dyn PayloadSource,
    cache: &PersistentCache,
) -> Result<WordlistPayload, LoadError> {
    let cached = cache.read(locale).await;
    match &cached {
        Some(payload) => tracing::debug!(
            "Found cached {} dictionary version {}",
            locale,
            payload.version
        ),
        None => tracing::debug!("No cached {} dictionary", locale),
    }

    let fetched = match source.fetch(locale).await {
        Ok(payload) => payload,
        Err(e) => {
            return match cached {
                Some(payload) => {
                    tracing::warn!(
                        "Failed to fetch {} dictionary: {}. Using cached version {}",
                        locale,
                        e,
                        payload.version
                    );
                    Ok(payload)
                }
                None => {
                    tracing::error!("Failed to fetch {} dictionary: {}", locale, e);
                    Err(LoadError::Fetch { locale, source: e })
                }
            };
        }
    };

    match cached {
        Some(cached) if cached.version == fetched.version => {
            tracing::info!(
                "Cached {} dictionary version {} is current",
                locale,
                cached.version
            );
            Ok(cached)
        }
        cached => {
            tracing::info!(
                "Adopting {} dictionary version {} (cached: {})",
                locale,
                fetched.version,
                cached.as_ref().map_or("none", |p| p.version.as_str())
            );
            if cache.write(&fetched).await {
                tracing::debug!("Cached {} dictionary in {}", locale, cache.store_name());
            }
            Ok(fetched)
        }
    }
}
