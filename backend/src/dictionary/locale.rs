use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::dictionary::source::PayloadSource;
use crate::error::LocaleParseError;

/// Language/region tag selecting a dictionary bundle
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum Locale {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "en-GB")]
    EnGb,
    #[serde(rename = "fr-FR")]
    FrFr,
    #[serde(rename = "es-ES")]
    EsEs,
}

impl Locale {
    pub const ALL: [Locale; 4] = [Locale::EnUs, Locale::EnGb, Locale::FrFr, Locale::EsEs];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
            Locale::FrFr => "fr-FR",
            Locale::EsEs => "es-ES",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = LocaleParseError;

    /// Tags are matched case-insensitively and accept `_` as separator
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('_', "-");
        Locale::ALL
            .into_iter()
            .find(|locale| locale.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| LocaleParseError(s.to_string()))
    }
}

/// Fixed mapping from locale to the source its payload is fetched from.
///
/// Built once at start-up; adding a locale is a `register` call.
#[derive(Clone, Default)]
pub struct LocaleRegistry {
    sources: HashMap<Locale, Arc<dyn PayloadSource>>,
}

impl LocaleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, locale: Locale, source: Arc<dyn PayloadSource>) -> Self {
        tracing::debug!("Registering {} dictionary source for {}", source.describe(), locale);
        self.sources.insert(locale, source);
        self
    }

    pub fn source(&self, locale: Locale) -> Option<Arc<dyn PayloadSource>> {
        self.sources.get(&locale).cloned()
    }

    pub fn is_registered(&self, locale: Locale) -> bool {
        self.sources.contains_key(&locale)
    }

    pub fn locales(&self) -> Vec<Locale> {
        let mut locales: Vec<Locale> = self.sources.keys().copied().collect();
        locales.sort();
        locales
    }
}

impl fmt::Debug for LocaleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleRegistry")
            .field("locales", &self.locales())
            .finish()
    }
}
