//! Flat-table trie: lookup over a loaded payload, plus a builder that produces one.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::dictionary::Locale;
use crate::models::{CompressedNode, WordLengthLimits, WordlistPayload};

/// Check whether a canonical word is in the trie rooted at `root_index`.
///
/// Out-of-range node or edge indices are treated as "not found" so a corrupted
/// payload degrades to rejecting words instead of panicking.
pub fn contains_word(word: &str, nodes: &[CompressedNode], root_index: usize) -> bool {
    let Some(mut node) = nodes.get(root_index) else {
        return false;
    };

    for ch in word.chars() {
        match node.child(ch).and_then(|idx| nodes.get(idx)) {
            Some(next) => node = next,
            None => return false,
        }
    }

    node.terminal
}

/// Trim and uppercase, the form used for every dictionary and profanity comparison
pub fn canonicalize(word: &str) -> String {
    word.trim().to_uppercase()
}

#[derive(Debug, Default)]
struct BuildNode {
    children: BTreeMap<char, usize>,
    terminal: bool,
}

/// Builds the flattened node table for a word list.
///
/// Identical suffix subtrees are emitted once, so the output is a minimal DAG
/// rather than a plain tree.
#[derive(Debug)]
pub struct TrieBuilder {
    nodes: Vec<BuildNode>,
    words: usize,
}

impl Default for TrieBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TrieBuilder {
    pub fn new() -> Self {
        Self {
            nodes: vec![BuildNode::default()],
            words: 0,
        }
    }

    /// Insert a word. Returns false if it was empty after trimming or already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = canonicalize(word);
        if word.is_empty() {
            return false;
        }

        let mut current = 0;
        for ch in word.chars() {
            current = match self.nodes[current].children.get(&ch) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(BuildNode::default());
                    self.nodes[current].children.insert(ch, child);
                    child
                }
            };
        }

        if self.nodes[current].terminal {
            return false;
        }
        self.nodes[current].terminal = true;
        self.words += 1;
        true
    }

    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.insert(word.as_ref());
        }
    }

    /// Number of distinct words inserted
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Flatten into `(nodes, root_index)`. Children always precede their parents.
    pub fn build(self) -> (Vec<CompressedNode>, u32) {
        let mut out = Vec::new();
        let mut seen = HashMap::new();
        let root = self.compress(0, &mut seen, &mut out);
        (out, root)
    }

    /// Build a complete payload with canonicalized profanity entries
    pub fn into_payload<I, S>(
        self,
        locale: Locale,
        version: impl Into<String>,
        profanity: I,
        length_limits: WordLengthLimits,
    ) -> WordlistPayload
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let profanity: BTreeSet<String> = profanity
            .into_iter()
            .map(|word| canonicalize(word.as_ref()))
            .filter(|word| !word.is_empty())
            .collect();
        if self.is_empty() {
            tracing::warn!("Building an empty {} word list", locale);
        }
        let (nodes, root_index) = self.build();

        WordlistPayload {
            locale,
            version: version.into(),
            root_index,
            nodes,
            profanity,
            length_limits,
        }
    }

    fn compress(
        &self,
        idx: usize,
        seen: &mut HashMap<CompressedNode, u32>,
        out: &mut Vec<CompressedNode>,
    ) -> u32 {
        let node = &self.nodes[idx];
        let edges = node
            .children
            .iter()
            .map(|(&ch, &child)| (ch, self.compress(child, seen, out)))
            .collect();
        let compressed = CompressedNode {
            edges,
            terminal: node.terminal,
        };

        if let Some(&existing) = seen.get(&compressed) {
            return existing;
        }
        let id = out.len() as u32;
        seen.insert(compressed.clone(), id);
        out.push(compressed);
        id
    }
}
