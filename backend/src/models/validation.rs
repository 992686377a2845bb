use serde::{Deserialize, Serialize};

use crate::dictionary::Locale;

/// Caller-supplied knobs for a single validation
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationOptions {
    pub locale: Locale,
    /// Overrides the payload's minimum word length
    pub min_length: Option<usize>,
    /// Overrides the payload's maximum word length
    pub max_length: Option<usize>,
    pub allow_profanity: bool,
}

/// Outcome of validating a word. A rejected word is a normal result, not an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ValidationResult {
    pub fn accepted() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: Some(reason.into()),
        }
    }
}
