//! The analysis result record.
//!
//! Field names serialize in camelCase; this is the JSON shape the CLI
//! prints and MCP tools return.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::frequency::KeywordEntry;
use crate::readability::ReadingLevel;

/// Everything [`super::Analyzer::analyze`] measures about one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Number of word tokens.
    pub total_words: usize,
    /// Number of distinct non-stop-word tokens, counted before the keyword
    /// table is truncated.
    pub unique_words: usize,
    /// Unicode scalar values in the raw input.
    pub total_characters: usize,
    /// Word tokens that are stop words.
    #[serde(rename = "stopWords")]
    pub stop_word_count: usize,
    /// Runs of sentence terminators.
    pub sentence_count: usize,
    /// Flesch Reading Ease, clamped to `0..=100`.
    pub readability_score: f64,
    /// Band for the score.
    pub reading_level: ReadingLevel,
    /// Ranked single-word table.
    pub keywords: Vec<KeywordEntry>,
    /// Ranked two- and three-word table.
    pub phrases: Vec<KeywordEntry>,
    /// Target keyword measurement; absent without a usable target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_keyword: Option<TargetKeywordUsage>,
    /// Human-readable recommendations, in rule order.
    pub recommendations: Vec<String>,
}

/// Target keyword measurement.
///
/// `density` is what the recommendation rules read: the target's entry in
/// the ranked keyword table, or 0 when it has none (stop words, phrases, and
/// terms outside the top keywords). `occurrences` is informational.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TargetKeywordUsage {
    /// The keyword as supplied, trimmed.
    pub keyword: String,
    /// Density from the ranked keyword table; 0 when not ranked.
    pub density: f64,
    /// Whether the target appears in the ranked keyword table.
    pub ranked: bool,
    /// Contiguous matches of the tokenized target in the token stream.
    pub occurrences: usize,
}
