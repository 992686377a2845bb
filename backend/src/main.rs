mod cache;
mod config;
mod db;
mod dictionary;
mod error;
mod game;
mod models;
mod routes;
mod utils;

use std::{sync::Arc, time::Duration};

use anyhow::Result;
use axum::Router;
use cache::{PersistentCache, PgStore};
use config::{Config, DatabaseConfig, DictionaryConfig};
use dictionary::{
    BundledSource, DictionaryLoader, FileSource, HttpSource, Locale, LocaleRegistry,
    PayloadSource,
};
use game::WordValidator;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Application state shared across all handlers
pub struct AppState {
    pub config: Config,
    pub validator: WordValidator,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lexistack_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting LexiStack word service...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let cache = connect_cache(&config.database).await;
    tracing::info!("Dictionary cache store: {}", cache.store_name());

    let registry = build_registry(&config.dictionary)?;
    tracing::info!("Registered dictionary locales: {:?}", registry.locales());

    let loader = Arc::new(DictionaryLoader::new(registry, cache));

    if config.dictionary.preload {
        let loader = loader.clone();
        tokio::spawn(async move {
            if let Err(e) = loader.preload_dictionary(Locale::default()).await {
                tracing::warn!(
                    "Failed to preload {} dictionary: {}. It will be retried on first use.",
                    Locale::default(),
                    e
                );
            }
        });
    }

    // Create application state
    let state = Arc::new(AppState {
        config: config.clone(),
        validator: WordValidator::new(loader),
    });

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        .merge(routes::create_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    // Start server
    let addr = state.config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("Validate words: POST http://{}/api/words/validate", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Connect the persistent dictionary cache. Storage is optional, so any
/// failure falls back to running without one.
async fn connect_cache(config: &DatabaseConfig) -> PersistentCache {
    let Some(url) = config.url.as_deref() else {
        tracing::info!("DATABASE_URL not set; dictionaries will not be cached across restarts");
        return PersistentCache::disabled();
    };

    let pool = match db::create_pool(url, config.max_connections).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::warn!("Failed to connect to database: {}. Running without dictionary cache.", e);
            return PersistentCache::disabled();
        }
    };
    tracing::info!("Connected to database");

    if let Err(e) = sqlx::migrate!("./migrations").run(&pool).await {
        tracing::warn!("Database migrations failed: {}. Running without dictionary cache.", e);
        return PersistentCache::disabled();
    }
    tracing::info!("Database migrations completed");

    PersistentCache::new(Arc::new(PgStore::new(pool)))
}

/// Map each supported locale to the source of its word list
fn build_registry(config: &DictionaryConfig) -> Result<LocaleRegistry> {
    let source: Arc<dyn PayloadSource> = if let Some(url) = &config.url {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .build()?;
        Arc::new(HttpSource::new(url.clone(), client))
    } else if let Some(path) = &config.path {
        Arc::new(FileSource::new(path))
    } else {
        Arc::new(BundledSource::new(config.variant))
    };

    Ok(LocaleRegistry::new().register(Locale::EnUs, source))
}
