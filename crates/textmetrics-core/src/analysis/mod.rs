//! Whole-document analysis.
//!
//! [`Analyzer`] runs the tokenizer once and feeds the same token stream to
//! the frequency analyzer, the readability scorer, and the recommendation
//! rules, then assembles an [`AnalysisResult`].
//!
//! An analyzer is immutable after construction. One instance can serve any
//! number of concurrent callers.

pub mod recommendations;
pub mod report;
pub mod tuning;

use std::sync::LazyLock;

pub use recommendations::{Recommendation, RecommendationInput};
pub use report::{AnalysisResult, TargetKeywordUsage};
pub use tuning::{RecommendationThresholds, Tuning};

use crate::config::{Config, ConfigSources};
use crate::error::ConfigResult;
use crate::frequency::{self, KeywordEntry, WordFrequencyReport};
use crate::readability::{self, ReadabilityReport, ReadingLevel};
use crate::stop_words::StopWordSet;
use crate::text;

static DEFAULT_ANALYZER: LazyLock<Analyzer> = LazyLock::new(Analyzer::default);

/// Analyze `text` with the built-in English stop words and default tuning.
pub fn analyze(text: &str, target_keyword: Option<&str>) -> AnalysisResult {
    DEFAULT_ANALYZER.analyze(text, target_keyword)
}

/// Text analyzer holding its stop-word set and thresholds.
#[derive(Debug, Clone)]
pub struct Analyzer {
    stop_words: StopWordSet,
    tuning: Tuning,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(StopWordSet::english(), Tuning::default())
    }
}

impl Analyzer {
    /// Build an analyzer from explicit parts.
    pub const fn new(stop_words: StopWordSet, tuning: Tuning) -> Self {
        Self { stop_words, tuning }
    }

    /// Build an analyzer from loaded configuration.
    ///
    /// Relative stop-word file paths resolve against the directory of the
    /// primary config file, or the current directory when there is none.
    pub fn from_config(config: &Config, sources: &ConfigSources) -> ConfigResult<Self> {
        config.tuning.validate()?;
        let base_dir = sources.primary_file().and_then(|p| p.parent());
        let stop_words = config.stop_words.build(base_dir)?;
        tracing::debug!(stop_words = stop_words.len(), "analyzer configured");
        Ok(Self::new(stop_words, config.tuning))
    }

    /// The stop-word set in use.
    pub const fn stop_words(&self) -> &StopWordSet {
        &self.stop_words
    }

    /// The thresholds in use.
    pub const fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Produce the full metrics record for `text`.
    ///
    /// Never fails. Empty input yields zero counts, empty tables, and a
    /// clamped score.
    #[tracing::instrument(skip(self, text), fields(text_len = text.len(), target = target_keyword))]
    pub fn analyze(&self, text: &str, target_keyword: Option<&str>) -> AnalysisResult {
        let tokens = text::tokenize(text);
        let total_words = tokens.word_count();

        let stop_word_count = tokens
            .words
            .iter()
            .filter(|w| self.stop_words.contains(w))
            .count();

        let tables = frequency::analyze_frequency_with(
            &tokens.words,
            total_words,
            &self.stop_words,
            &self.tuning.frequency_options(),
        );
        let readability_score = readability::score_readability_with(
            &tokens.words,
            tokens.sentence_count,
            &self.tuning.flesch,
        );
        let target_keyword =
            target_keyword.and_then(|k| measure_target(&tokens.words, &tables.unigrams, k));

        let recommendations = recommendations::recommend(
            &RecommendationInput {
                target: target_keyword.as_ref(),
                keywords: &tables.unigrams,
                readability_score,
                total_words,
            },
            &self.tuning.recommendations,
        )
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();

        tracing::debug!(
            total_words,
            readability_score,
            recommendations = recommendations.len(),
            "analysis complete"
        );

        AnalysisResult {
            total_words,
            unique_words: tables.distinct_keywords,
            total_characters: text.chars().count(),
            stop_word_count,
            sentence_count: tokens.sentence_count,
            readability_score,
            reading_level: ReadingLevel::from_score(readability_score),
            keywords: tables.unigrams,
            phrases: tables.ngrams,
            target_keyword,
            recommendations,
        }
    }

    /// Standalone readability report using this analyzer's constants.
    pub fn readability(
        &self,
        text: &str,
        strip_md: bool,
        min_score: Option<f64>,
    ) -> ReadabilityReport {
        readability::check_readability(text, strip_md, min_score, &self.tuning.flesch)
    }

    /// Full word frequency table, stop words included.
    pub fn word_frequency(&self, text: &str) -> WordFrequencyReport {
        frequency::word_frequency(&text::normalize_words(text))
    }
}

/// Measure the target against the ranked keyword table. `None` when the
/// target is blank.
fn measure_target(
    words: &[String],
    keywords: &[KeywordEntry],
    keyword: &str,
) -> Option<TargetKeywordUsage> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return None;
    }
    let needle = text::normalize_words(keyword);
    let term = needle.join(" ");
    let entry = keywords.iter().find(|k| k.term == term);
    Some(TargetKeywordUsage {
        keyword: keyword.to_string(),
        density: entry.map_or(0.0, |k| k.density),
        ranked: entry.is_some(),
        occurrences: frequency::count_occurrences(words, &needle),
    })
}
