//! Plain-language recommendations derived from the metrics.
//!
//! Rules are evaluated in a fixed order and each contributes at most one
//! recommendation, so the list for a given result is deterministic.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::report::TargetKeywordUsage;
use super::tuning::RecommendationThresholds;
use crate::frequency::KeywordEntry;

/// A single recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Recommendation {
    /// The target keyword is under-used.
    IncreaseTargetUsage {
        /// Target keyword as supplied.
        keyword: String,
        /// Current density in percent.
        density: f64,
    },
    /// The target keyword is over-used.
    ReduceTargetUsage {
        /// Target keyword as supplied.
        keyword: String,
        /// Current density in percent.
        density: f64,
    },
    /// Single words classified as high or stuffing.
    ReduceOverusedTerms {
        /// Overused terms, most frequent first.
        terms: Vec<String>,
    },
    /// The reading-ease score is below the threshold.
    ImproveReadability,
    /// The document is shorter than the threshold.
    ExpandContent {
        /// Suggested minimum word count.
        min_words: usize,
    },
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncreaseTargetUsage { keyword, density } => write!(
                f,
                "Increase usage of target keyword \"{keyword}\" (current density: {density:.2}%)"
            ),
            Self::ReduceTargetUsage { keyword, density } => write!(
                f,
                "Reduce usage of target keyword \"{keyword}\" to avoid keyword stuffing \
                 (current density: {density:.2}%)"
            ),
            Self::ReduceOverusedTerms { terms } => {
                write!(f, "Consider reducing usage of: {}", terms.join(", "))
            }
            Self::ImproveReadability => f.write_str(
                "Consider using shorter sentences and simpler words to improve readability",
            ),
            Self::ExpandContent { min_words } => write!(
                f,
                "Content is quite short. Consider expanding to at least {min_words} words for better SEO"
            ),
        }
    }
}

/// Metrics the rules look at.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationInput<'a> {
    /// Target keyword measurement, if a target was supplied.
    pub target: Option<&'a TargetKeywordUsage>,
    /// Ranked single-word table.
    pub keywords: &'a [KeywordEntry],
    /// Reading-ease score.
    pub readability_score: f64,
    /// Token count.
    pub total_words: usize,
}

/// Apply the rules in order: target too sparse, target too dense, overused
/// terms, readability, length.
pub fn recommend(
    input: &RecommendationInput<'_>,
    thresholds: &RecommendationThresholds,
) -> Vec<Recommendation> {
    let mut out = Vec::new();

    if let Some(target) = input.target {
        if target.density < thresholds.target_min_density {
            out.push(Recommendation::IncreaseTargetUsage {
                keyword: target.keyword.clone(),
                density: target.density,
            });
        }
        if target.density > thresholds.target_max_density {
            out.push(Recommendation::ReduceTargetUsage {
                keyword: target.keyword.clone(),
                density: target.density,
            });
        }
    }

    let overused: Vec<String> = input
        .keywords
        .iter()
        .filter(|k| k.status.is_overused())
        .take(thresholds.max_flagged_terms)
        .map(|k| k.term.clone())
        .collect();
    if !overused.is_empty() {
        out.push(Recommendation::ReduceOverusedTerms { terms: overused });
    }

    if input.readability_score < thresholds.min_readability {
        out.push(Recommendation::ImproveReadability);
    }

    if input.total_words < thresholds.min_words {
        out.push(Recommendation::ExpandContent {
            min_words: thresholds.min_words,
        });
    }

    out
}
