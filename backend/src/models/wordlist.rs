use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::dictionary::{trie, Locale};

/// One node of the flattened trie.
///
/// Edges are `(character, child index)` pairs with at most one edge per character.
/// `terminal` marks the end of a complete word.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CompressedNode {
    pub edges: Vec<(char, u32)>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub terminal: bool,
}

impl CompressedNode {
    /// Index of the child reached through `ch`, if any
    pub fn child(&self, ch: char) -> Option<usize> {
        self.edges
            .iter()
            .find(|(edge, _)| *edge == ch)
            .map(|(_, idx)| *idx as usize)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordLengthLimits {
    pub min: usize,
    pub max: usize,
}

impl Default for WordLengthLimits {
    fn default() -> Self {
        Self { min: 3, max: 12 }
    }
}

/// A complete dictionary bundle for one locale, as produced by the word list build.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WordlistPayload {
    pub locale: Locale,
    /// Opaque; only ever compared for equality
    pub version: String,
    pub root_index: u32,
    pub nodes: Vec<CompressedNode>,
    /// Canonical (uppercase) blocked words
    #[serde(default)]
    pub profanity: BTreeSet<String>,
    #[serde(default)]
    pub length_limits: WordLengthLimits,
}

impl WordlistPayload {
    /// Check a canonical (trimmed, uppercase) word against the trie
    pub fn contains_word(&self, word: &str) -> bool {
        trie::contains_word(word, &self.nodes, self.root_index as usize)
    }

    /// Check a canonical word against the profanity set
    pub fn is_profane(&self, word: &str) -> bool {
        self.profanity.contains(word)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
