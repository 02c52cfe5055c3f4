//! Tunable thresholds for the analysis pipeline.
//!
//! Defaults reproduce the rule-of-thumb values the engine has always used.
//! They are configuration, not invariants; [`Tuning::validate`] only
//! rejects tables that cannot classify consistently.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::frequency::{FrequencyLimits, FrequencyOptions, KeywordThresholds, PhraseThresholds};
use crate::readability::FleschConstants;

/// Thresholds that trigger recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RecommendationThresholds {
    /// Target keyword density (%) below which more usage is suggested.
    pub target_min_density: f64,
    /// Target keyword density (%) above which less usage is suggested.
    pub target_max_density: f64,
    /// Reading-ease score below which simpler writing is suggested.
    pub min_readability: f64,
    /// Word count below which longer content is suggested.
    pub min_words: usize,
    /// Maximum overused terms named in one recommendation.
    pub max_flagged_terms: usize,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            target_min_density: 1.0,
            target_max_density: 3.0,
            min_readability: 50.0,
            min_words: 300,
            max_flagged_terms: 3,
        }
    }
}

/// Every tunable constant of the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Tuning {
    /// Single-word density bands.
    pub keyword_density: KeywordThresholds,
    /// Phrase density bands.
    pub phrase_density: PhraseThresholds,
    /// Table sizes and the phrase repetition floor.
    pub limits: FrequencyLimits,
    /// Reading-ease formula constants.
    pub flesch: FleschConstants,
    /// Recommendation triggers.
    pub recommendations: RecommendationThresholds,
}

impl Tuning {
    /// Options for [`crate::frequency::analyze_frequency_with`].
    pub const fn frequency_options(&self) -> FrequencyOptions {
        FrequencyOptions {
            keyword: self.keyword_density,
            phrase: self.phrase_density,
            limits: self.limits,
        }
    }

    /// Check that the thresholds are finite, non-negative, and ordered.
    pub fn validate(&self) -> ConfigResult<()> {
        let k = &self.keyword_density;
        let p = &self.phrase_density;
        let r = &self.recommendations;
        let f = &self.flesch;

        let values = [
            ("keyword_density.stuffing", k.stuffing),
            ("keyword_density.high", k.high),
            ("keyword_density.low", k.low),
            ("phrase_density.high", p.high),
            ("phrase_density.low", p.low),
            ("recommendations.target_min_density", r.target_min_density),
            ("recommendations.target_max_density", r.target_max_density),
            ("recommendations.min_readability", r.min_readability),
        ];
        for (name, value) in values {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        for (name, value) in [
            ("flesch.base", f.base),
            ("flesch.sentence_weight", f.sentence_weight),
            ("flesch.syllable_weight", f.syllable_weight),
        ] {
            if !value.is_finite() {
                return Err(invalid(format!("{name} must be finite, got {value}")));
            }
        }

        if k.low > k.high || k.high > k.stuffing {
            return Err(invalid(format!(
                "keyword_density must satisfy low <= high <= stuffing, got {} / {} / {}",
                k.low, k.high, k.stuffing
            )));
        }
        if p.low > p.high {
            return Err(invalid(format!(
                "phrase_density must satisfy low <= high, got {} / {}",
                p.low, p.high
            )));
        }
        if r.target_min_density > r.target_max_density {
            return Err(invalid(format!(
                "target_min_density ({}) exceeds target_max_density ({})",
                r.target_min_density, r.target_max_density
            )));
        }
        if self.limits.min_phrase_count == 0 {
            return Err(invalid("limits.min_phrase_count must be at least 1".into()));
        }
        Ok(())
    }
}

const fn invalid(message: String) -> ConfigError {
    ConfigError::InvalidTuning(message)
}
