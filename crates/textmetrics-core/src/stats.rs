//! Document statistics (word counter).
//!
//! Counts are intentionally simpler than the tokenizer's: words are
//! whitespace-separated chunks, so `"e-mail"` is one word here and two
//! tokens in [`crate::text::tokenize`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text;

/// Average silent reading speed, in words per minute.
pub const READING_WPM: usize = 200;

/// Average speaking speed, in words per minute.
pub const SPEAKING_WPM: usize = 150;

/// Word-counter statistics for a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TextStatistics {
    /// Unicode scalar values, whitespace included.
    pub characters: usize,
    /// Unicode scalar values excluding whitespace.
    pub characters_no_spaces: usize,
    /// Whitespace-separated words.
    pub words: usize,
    /// Non-empty segments between `.`/`!`/`?` runs.
    pub sentences: usize,
    /// Non-empty blocks separated by blank lines.
    pub paragraphs: usize,
    /// Minutes to read silently, rounded up.
    pub reading_time_minutes: usize,
    /// Minutes to read aloud, rounded up.
    pub speaking_time_minutes: usize,
    /// `words / sentences`, rounded; 0 without sentences.
    pub average_words_per_sentence: usize,
}

/// Compute word-counter statistics.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn text_statistics(text: &str) -> TextStatistics {
    let words = text.split_whitespace().count();
    let sentences = text::split_sentence_segments(text).len();

    let average_words_per_sentence = if sentences == 0 {
        0
    } else {
        (words as f64 / sentences as f64).round() as usize
    };

    TextStatistics {
        characters: text.chars().count(),
        characters_no_spaces: text.chars().filter(|c| !c.is_whitespace()).count(),
        words,
        sentences,
        paragraphs: text::split_paragraphs(text).len(),
        reading_time_minutes: words.div_ceil(READING_WPM),
        speaking_time_minutes: words.div_ceil(SPEAKING_WPM),
        average_words_per_sentence,
    }
}
