//! Stop-word set.
//!
//! Stop words are excluded from the single-word keyword table but still
//! count toward the document's total word count and stay inside phrases.
//! The set is built once (from the built-in list plus configuration) and
//! handed to the [`Analyzer`](crate::analysis::Analyzer); nothing mutates
//! it afterwards.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::text;

/// Built-in English stop words: articles, conjunctions, prepositions,
/// auxiliary and modal verbs, demonstratives, and personal pronouns.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    // articles & conjunctions
    "the", "a", "an", "and", "or", "but",
    // prepositions
    "in", "on", "at", "to", "for", "of", "with", "by", "from", "up", "about", "into", "through",
    "during", "before", "after", "above", "below", "between", "among",
    // be / have / do
    "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did",
    // modals
    "will", "would", "could", "should", "may", "might", "must", "can",
    // demonstratives
    "this", "that", "these", "those",
    // pronouns
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my", "your",
    "his", "its", "our", "their",
];

static ENGLISH: LazyLock<StopWordSet> =
    LazyLock::new(|| StopWordSet::from_words(ENGLISH_STOP_WORDS.iter().copied()));

/// An immutable set of lowercase stop words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    /// The built-in English set.
    pub fn english() -> Self {
        ENGLISH.clone()
    }

    /// A shared reference to the built-in English set.
    pub fn english_ref() -> &'static Self {
        &ENGLISH
    }

    /// Build a set from arbitrary words.
    ///
    /// Each entry is normalized with the document tokenizer, so only forms
    /// that can actually appear as tokens are stored. An entry that splits
    /// into several tokens (`"don't"`, `"new york"`) contributes each token
    /// and logs a warning; blank and punctuation-only entries are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();
        for entry in words {
            let entry = entry.as_ref();
            let tokens = text::normalize_words(entry);
            if tokens.len() > 1 {
                tracing::warn!(
                    entry = entry.trim(),
                    tokens = ?tokens,
                    "stop-word entry spans several tokens; adding each token"
                );
            }
            set.extend(tokens);
        }
        Self { words: set }
    }

    /// Parse a newline-separated word list.
    ///
    /// Lines starting with `#` are comments. Commas also separate words, so
    /// a single-line comma list works too.
    pub fn parse_list(content: &str) -> Self {
        Self::from_words(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#'))
                .flat_map(|line| line.split(',')),
        )
    }

    /// Return a copy with `extra` words added.
    #[must_use]
    pub fn with_words<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.extend(Self::from_words(extra).words);
        self
    }

    /// Return a copy with `removed` words taken out.
    #[must_use]
    pub fn without_words<I, S>(mut self, removed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in Self::from_words(removed).words {
            self.words.remove(&word);
        }
        self
    }

    /// Whether `word` is a stop word. Expects an already-lowercased token.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in the set, sorted alphabetically.
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}
