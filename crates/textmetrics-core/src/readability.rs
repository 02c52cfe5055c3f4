//! Readability scoring using Flesch Reading Ease.
//!
//! Formula: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! Higher score = easier to read. The result is clamped to `0..=100`.
//! Zero sentences or zero words are treated as 1 in the denominators so the
//! score is always finite.
//!
//! Syllables come from a vowel-group heuristic ([`estimate_syllables`]), not
//! a pronunciation dictionary. It is a rough estimator and will miscount
//! some words; that error is accepted.

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::markdown;
use crate::text;

/// Silent `e`, `es`, and `ed` endings. The consonant before `e`/`es` may be
/// anything except `l` or a vowel-like letter.
static SILENT_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").expect("valid regex"));

/// Syllable nuclei: maximal runs of vowel-like letters.
static VOWEL_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[aeiouy]+").expect("valid regex"));

/// Constants of the reading-ease formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FleschConstants {
    /// Starting score.
    pub base: f64,
    /// Penalty per word of average sentence length.
    pub sentence_weight: f64,
    /// Penalty per average syllable per word.
    pub syllable_weight: f64,
}

impl Default for FleschConstants {
    fn default() -> Self {
        Self {
            base: 206.835,
            sentence_weight: 1.015,
            syllable_weight: 84.6,
        }
    }
}

impl FleschConstants {
    /// Compute the clamped score from aggregate counts.
    pub fn score(&self, words: usize, sentences: usize, syllables: usize) -> f64 {
        let words_per_sentence = words as f64 / sentences.max(1) as f64;
        let syllables_per_word = syllables as f64 / words.max(1) as f64;
        let raw = self.sentence_weight.mul_add(
            -words_per_sentence,
            self.syllable_weight
                .mul_add(-syllables_per_word, self.base),
        );
        if raw.is_nan() {
            return 0.0;
        }
        raw.clamp(0.0, 100.0)
    }
}

/// Plain-language band for a reading-ease score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ReadingLevel {
    /// 90 and above.
    VeryEasy,
    /// 80 to 90.
    Easy,
    /// 70 to 80.
    FairlyEasy,
    /// 60 to 70.
    Standard,
    /// 50 to 60.
    FairlyDifficult,
    /// 30 to 50.
    Difficult,
    /// Below 30.
    VeryDifficult,
}

impl ReadingLevel {
    /// Band for `score`.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 90.0 => Self::VeryEasy,
            s if s >= 80.0 => Self::Easy,
            s if s >= 70.0 => Self::FairlyEasy,
            s if s >= 60.0 => Self::Standard,
            s if s >= 50.0 => Self::FairlyDifficult,
            s if s >= 30.0 => Self::Difficult,
            _ => Self::VeryDifficult,
        }
    }

    /// Human-readable label ("Fairly Easy").
    pub const fn label(&self) -> &'static str {
        match self {
            Self::VeryEasy => "Very Easy",
            Self::Easy => "Easy",
            Self::FairlyEasy => "Fairly Easy",
            Self::Standard => "Standard",
            Self::FairlyDifficult => "Fairly Difficult",
            Self::Difficult => "Difficult",
            Self::VeryDifficult => "Very Difficult",
        }
    }
}

impl std::fmt::Display for ReadingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Estimate the syllables in one word. Always at least 1.
pub fn estimate_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    if word.chars().count() <= 3 {
        return 1;
    }

    let stripped = SILENT_SUFFIX.replace(&word, "");
    let stripped = stripped.strip_prefix('y').unwrap_or(&stripped);

    VOWEL_RUN.find_iter(stripped).count().max(1)
}

/// Total estimated syllables across `words`.
pub fn count_syllables(words: &[String]) -> usize {
    words.iter().map(|w| estimate_syllables(w)).sum()
}

/// Reading-ease score for a tokenized document, with default constants.
pub fn score_readability(words: &[String], sentence_count: usize) -> f64 {
    score_readability_with(words, sentence_count, &FleschConstants::default())
}

/// Reading-ease score for a tokenized document.
#[tracing::instrument(skip_all, fields(words = words.len(), sentence_count = sentence_count))]
pub fn score_readability_with(
    words: &[String],
    sentence_count: usize,
    constants: &FleschConstants,
) -> f64 {
    constants.score(words.len(), sentence_count, count_syllables(words))
}

/// Result of standalone readability analysis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Flesch Reading Ease score (0--100).
    pub score: f64,
    /// Band for `score`.
    pub level: ReadingLevel,
    /// Number of sentence terminator runs.
    pub sentences: usize,
    /// Number of words.
    pub words: usize,
    /// Estimated syllable count.
    pub syllables: usize,
    /// Minimum acceptable score (if provided).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<f64>,
    /// Whether the score falls below the minimum.
    pub below_min: bool,
}

/// Check readability of text.
///
/// # Arguments
///
/// * `text` - The text to analyze.
/// * `strip_md` - If `true`, strip markdown formatting before analysis.
/// * `min_score` - Optional minimum acceptable score.
/// * `constants` - Formula constants.
#[tracing::instrument(skip(text, constants), fields(text_len = text.len()))]
pub fn check_readability(
    text: &str,
    strip_md: bool,
    min_score: Option<f64>,
    constants: &FleschConstants,
) -> ReadabilityReport {
    let prose = if strip_md {
        markdown::strip_to_prose(text)
    } else {
        text.to_string()
    };

    let tokens = text::tokenize(&prose);
    let syllables = count_syllables(&tokens.words);
    let score = constants.score(tokens.word_count(), tokens.sentence_count, syllables);
    let below_min = min_score.is_some_and(|min| score < min);

    ReadabilityReport {
        score,
        level: ReadingLevel::from_score(score),
        sentences: tokens.sentence_count,
        words: tokens.word_count(),
        syllables,
        min_score,
        below_min,
    }
}
