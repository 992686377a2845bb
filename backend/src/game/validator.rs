use std::fmt;
use std::sync::Arc;

use crate::{
    dictionary::{canonicalize, DictionaryLoader, Locale},
    error::LoadError,
    models::{ValidationOptions, ValidationResult, WordlistPayload},
};

/// Why a submitted word was rejected. `Display` gives the player-facing reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    Empty,
    TooShort { min: usize },
    TooLong { max: usize },
    Profane,
    NotInDictionary { word: String, locale: Locale },
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationFailure::Empty => write!(f, "Please enter a word."),
            ValidationFailure::TooShort { min } => {
                write!(f, "Words must be at least {} letters long.", min)
            }
            ValidationFailure::TooLong { max } => {
                write!(f, "Words must be at most {} letters long.", max)
            }
            ValidationFailure::Profane => write!(f, "That word is blocked for profanity."),
            ValidationFailure::NotInDictionary { word, locale } => {
                write!(f, "\"{}\" is not in the {} dictionary.", word, locale)
            }
        }
    }
}

/// Validates submitted words against the dictionary of the requested locale
#[derive(Clone)]
pub struct WordValidator {
    loader: Arc<DictionaryLoader>,
}

impl WordValidator {
    pub fn new(loader: Arc<DictionaryLoader>) -> Self {
        Self { loader }
    }

    pub fn loader(&self) -> &DictionaryLoader {
        &self.loader
    }

    /// Resolve the locale's dictionary, then apply the word checks.
    ///
    /// Only a failed dictionary load is an error; a rejected word is an `Ok` result.
    pub async fn validate_word(
        &self,
        word: &str,
        options: &ValidationOptions,
    ) -> Result<ValidationResult, LoadError> {
        let payload = self.loader.load(options.locale).await?;

        Ok(match check_word(word, options, &payload) {
            Ok(()) => ValidationResult::accepted(),
            Err(failure) => {
                tracing::debug!("Rejected word {:?}: {}", word, failure);
                ValidationResult::rejected(failure.to_string())
            }
        })
    }
}

/// Ordered checks, stopping at the first failure:
/// empty, too short, too long, profanity, then dictionary membership.
///
/// Profanity is checked before the dictionary so a blocked word is never
/// confirmed as a real word.
pub fn check_word(
    word: &str,
    options: &ValidationOptions,
    payload: &WordlistPayload,
) -> Result<(), ValidationFailure> {
    let word = canonicalize(word);
    if word.is_empty() {
        return Err(ValidationFailure::Empty);
    }

    let len = word.chars().count();
    let min = options.min_length.unwrap_or(payload.length_limits.min);
    let max = options.max_length.unwrap_or(payload.length_limits.max);

    if len < min {
        return Err(ValidationFailure::TooShort { min });
    }
    if len > max {
        return Err(ValidationFailure::TooLong { max });
    }

    if !options.allow_profanity && payload.is_profane(&word) {
        return Err(ValidationFailure::Profane);
    }

    if !payload.contains_word(&word) {
        return Err(ValidationFailure::NotInDictionary {
            word,
            locale: options.locale,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{testing::MemoryStore, PersistentCache};
    use crate::dictionary::source::testing::{payload, StaticSource};
    use crate::dictionary::{BundledSource, LocaleRegistry, WordlistVariant};
    use std::time::Duration;
    use tokio_test::{assert_err, assert_ok};

    fn bundled_validator() -> WordValidator {
        let registry = LocaleRegistry::new().register(
            Locale::EnUs,
            Arc::new(BundledSource::new(WordlistVariant::Standard)),
        );
        WordValidator::new(Arc::new(DictionaryLoader::new(
            registry,
            PersistentCache::disabled(),
        )))
    }

    fn options() -> ValidationOptions {
        ValidationOptions::default()
    }

    #[tokio::test]
    async fn test_dictionary_word_is_valid() {
        let validator = bundled_validator();
        let result = assert_ok!(validator.validate_word("apple", &options()).await);
        assert_eq!(result, ValidationResult::accepted());
    }

    #[tokio::test]
    async fn test_input_is_trimmed_and_uppercased() {
        let validator = bundled_validator();
        let result = assert_ok!(validator.validate_word("  ApPlE \n", &options()).await);
        assert!(result.valid);
    }

    #[tokio::test]
    async fn test_unknown_word_mentions_locale() {
        let validator = bundled_validator();
        let result = assert_ok!(validator.validate_word("NotAWord", &options()).await);
        assert!(!result.valid);
        assert_eq!(
            result.reason.as_deref(),
            Some("\"NOTAWORD\" is not in the en-US dictionary.")
        );
    }

    #[tokio::test]
    async fn test_short_word_mentions_minimum() {
        let validator = bundled_validator();
        let result = assert_ok!(validator.validate_word("ox", &options()).await);
        assert!(!result.valid);
        assert_eq!(
            result.reason.as_deref(),
            Some("Words must be at least 3 letters long.")
        );
    }

    #[tokio::test]
    async fn test_empty_word() {
        let validator = bundled_validator();
        let result = assert_ok!(validator.validate_word("   ", &options()).await);
        assert_eq!(result.reason.as_deref(), Some("Please enter a word."));
    }

    #[tokio::test]
    async fn test_long_word_mentions_maximum() {
        let validator = bundled_validator();
        let result = assert_ok!(validator.validate_word("ULTRASONICALLY", &options()).await);
        assert_eq!(
            result.reason.as_deref(),
            Some("Words must be at most 12 letters long.")
        );
    }

    #[tokio::test]
    async fn test_length_overrides() {
        let validator = bundled_validator();
        let strict = ValidationOptions {
            min_length: Some(6),
            ..options()
        };
        let result = assert_ok!(validator.validate_word("apple", &strict).await);
        assert_eq!(
            result.reason.as_deref(),
            Some("Words must be at least 6 letters long.")
        );

        let short = ValidationOptions {
            max_length: Some(4),
            ..options()
        };
        let result = assert_ok!(validator.validate_word("apple", &short).await);
        assert_eq!(
            result.reason.as_deref(),
            Some("Words must be at most 4 letters long.")
        );
    }

    #[test]
    fn test_profanity_checked_before_dictionary() {
        let payload = payload("v1", &["DAMN", "DAWN"]);

        assert_eq!(
            check_word("damn", &options(), &payload),
            Err(ValidationFailure::Profane)
        );

        let permissive = ValidationOptions {
            allow_profanity: true,
            ..options()
        };
        assert_eq!(check_word("damn", &permissive, &payload), Ok(()));
        assert_eq!(check_word("dawn", &options(), &payload), Ok(()));
    }

    #[test]
    fn test_profane_non_word_is_still_blocked() {
        let payload = payload("v1", &["DAWN"]);
        assert_eq!(
            ValidationFailure::Profane.to_string(),
            "That word is blocked for profanity."
        );
        assert_eq!(
            check_word("DAMN", &options(), &payload),
            Err(ValidationFailure::Profane)
        );
    }

    #[test]
    fn test_length_checked_before_profanity() {
        let payload = payload("v1", &["DAMN"]);
        let strict = ValidationOptions {
            min_length: Some(5),
            ..options()
        };
        assert_eq!(
            check_word("damn", &strict, &payload),
            Err(ValidationFailure::TooShort { min: 5 })
        );
    }

    #[tokio::test]
    async fn test_unregistered_locale_propagates() {
        let validator = bundled_validator();
        let err = assert_err!(
            validator
                .validate_word("apple", &ValidationOptions {
                    locale: Locale::FrFr,
                    ..options()
                })
                .await
        );
        assert!(err.is_configuration_error());
    }

    #[tokio::test]
    async fn test_concurrent_validations_share_one_load() {
        let store = Arc::new(MemoryStore::default());
        let source = Arc::new(
            StaticSource::new(payload("v1", &["APPLE"])).with_delay(Duration::from_millis(20)),
        );
        let registry = LocaleRegistry::new().register(Locale::EnUs, source.clone());
        let validator = WordValidator::new(Arc::new(DictionaryLoader::new(
            registry,
            PersistentCache::new(store.clone()),
        )));

        let opts = options();
        let (a, b) = tokio::join!(
            validator.validate_word("apple", &opts),
            validator.validate_word("pear", &opts)
        );

        assert!(assert_ok!(a).valid);
        assert!(!assert_ok!(b).valid);
        assert_eq!(source.fetch_count(), 1);
        assert_eq!(store.read_count(), 1);
    }
}
