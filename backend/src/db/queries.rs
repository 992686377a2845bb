use chrono::{DateTime, Utc};
use sqlx::{types::Json, FromRow, PgPool, Result};

use crate::models::WordlistPayload;

/// Row of the persistent dictionary cache
#[derive(Debug, FromRow)]
pub struct CachedWordlist {
    pub locale: String,
    pub version: String,
    pub payload: Json<WordlistPayload>,
    pub updated_at: DateTime<Utc>,
}

pub async fn get_cached_wordlist(pool: &PgPool, locale: &str) -> Result<Option<CachedWordlist>> {
    sqlx::query_as::<_, CachedWordlist>(
        "SELECT locale, version, payload, updated_at FROM wordlist_cache WHERE locale = $1",
    )
    .bind(locale)
    .fetch_optional(pool)
    .await
}

/// Store a payload, replacing whatever was cached for its locale
pub async fn upsert_cached_wordlist(pool: &PgPool, payload: &WordlistPayload) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO wordlist_cache (locale, version, payload, updated_at)
        VALUES ($1, $2, $3, NOW())
        ON CONFLICT (locale)
        DO UPDATE SET
            version = $2,
            payload = $3,
            updated_at = NOW()
        "#,
    )
    .bind(payload.locale.as_str())
    .bind(&payload.version)
    .bind(Json(payload))
    .execute(pool)
    .await?;

    Ok(())
}
