use anyhow::{Context, Result};
use std::env;

use crate::dictionary::WordlistVariant;

#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub dictionary: DictionaryConfig,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Without a URL the dictionary cache runs with no persistent store
    pub url: Option<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DictionaryConfig {
    /// Remote en-US payload; takes precedence over `path`
    pub url: Option<String>,
    /// Local en-US payload file
    pub path: Option<String>,
    /// Bundled list used when neither `url` nor `path` is set
    pub variant: WordlistVariant,
    pub fetch_timeout_secs: u64,
    pub preload: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let database = DatabaseConfig {
            url: non_empty_var("DATABASE_URL"),
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a number")?,
        };

        let server = ServerConfig {
            host: env::var("HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a number")?,
        };

        let dictionary = DictionaryConfig {
            url: non_empty_var("DICTIONARY_URL"),
            path: non_empty_var("DICTIONARY_PATH"),
            variant: env::var("DICTIONARY_VARIANT")
                .unwrap_or_else(|_| "standard".to_string())
                .parse::<WordlistVariant>()
                .map_err(anyhow::Error::msg)
                .context("DICTIONARY_VARIANT must be 'standard' or 'extended'")?,
            fetch_timeout_secs: env::var("DICTIONARY_FETCH_TIMEOUT")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            preload: env::var("DICTIONARY_PRELOAD")
                .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no"))
                .unwrap_or(true),
        };

        Ok(Config {
            database,
            server,
            dictionary,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
