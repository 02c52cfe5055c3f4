//! Tokenizer.
//!
//! Normalizes raw text into a lowercase word stream and counts sentences
//! from the original, unnormalized input. Also provides the paragraph and
//! sentence segment splitting used by [`crate::stats`].

use regex::Regex;
use std::sync::LazyLock;

/// Maximal runs of terminal punctuation.
static SENTENCE_TERMINATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// A blank line (possibly containing whitespace) between two paragraphs.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid regex"));

/// Output of [`tokenize`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    /// Lowercase word tokens in original left-to-right order. Never contains
    /// an empty string.
    pub words: Vec<String>,
    /// Number of maximal `.`/`!`/`?` runs in the original text.
    ///
    /// This is the true count and may be zero; use
    /// [`Tokens::sentence_divisor`] when dividing.
    pub sentence_count: usize,
}

impl Tokens {
    /// Number of word tokens.
    pub const fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Sentence count clamped to at least 1, for use as a denominator.
    pub fn sentence_divisor(&self) -> usize {
        self.sentence_count.max(1)
    }
}

/// Split text into a normalized word stream and count its sentences.
///
/// Every character that is not a Unicode letter or digit acts as a word
/// separator, so `"don't"` yields `["don", "t"]` and `"e-mail"` yields
/// `["e", "mail"]`. Empty or punctuation-only input gives no words and a
/// sentence count equal to the number of terminator runs it contains.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn tokenize(text: &str) -> Tokens {
    Tokens {
        words: normalize_words(text),
        sentence_count: count_sentence_runs(text),
    }
}

/// Lowercase `text` and split it into word tokens.
pub fn normalize_words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Count maximal runs of `.`, `!` or `?`.
///
/// `"Wait... what?!"` contains two runs.
pub fn count_sentence_runs(text: &str) -> usize {
    SENTENCE_TERMINATORS.find_iter(text).count()
}

/// Split text on terminator runs, keeping only segments with content.
///
/// Unlike [`count_sentence_runs`], a trailing fragment without terminal
/// punctuation counts as a sentence here.
pub fn split_sentence_segments(text: &str) -> Vec<&str> {
    SENTENCE_TERMINATORS
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split text into paragraphs separated by blank lines.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}
