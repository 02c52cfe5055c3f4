//! Core library for textmetrics.
//!
//! Measures keyword density, phrase frequency, and Flesch readability of
//! web copy, and turns the numbers into plain-language recommendations.
//!
//! # Modules
//!
//! - [`text`] - Tokenizer and sentence/paragraph splitting
//! - [`stop_words`] - Stop-word sets
//! - [`frequency`] - Keyword and phrase density tables
//! - [`readability`] - Flesch Reading Ease and syllable estimation
//! - [`analysis`] - The [`Analyzer`] that ties everything together
//! - [`stats`] - Word counter statistics
//! - [`markdown`] - Markdown to plain text
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! let result = textmetrics_core::analyze(
//!     "Cloud hosting is fast. Cloud hosting is cheap. Choose cloud hosting today!",
//!     Some("cloud hosting"),
//! );
//!
//! assert_eq!(result.total_words, 12);
//! assert_eq!(result.keywords[0].term, "cloud");
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod frequency;
pub mod markdown;
pub mod readability;
pub mod stats;
pub mod stop_words;
pub mod text;

pub use analysis::{AnalysisResult, Analyzer, Recommendation, Tuning, analyze};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel, StopWordsConfig};
pub use error::{AnalysisError, ConfigError, ConfigResult, InputResult};
pub use frequency::{DensityStatus, KeywordEntry};
pub use readability::{ReadabilityReport, ReadingLevel};
pub use stop_words::StopWordSet;

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5_242_880;

/// Reject input larger than `max_bytes`. `None` disables the check.
pub fn check_input_size(text: &str, max_bytes: Option<usize>) -> InputResult<()> {
    if let Some(limit) = max_bytes
        && text.len() > limit
    {
        return Err(AnalysisError::InputTooLarge {
            size: text.len(),
            limit,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_within_limit_passes() {
        assert!(check_input_size("hello", Some(5)).is_ok());
        assert!(check_input_size("hello", None).is_ok());
    }

    #[test]
    fn input_over_limit_fails() {
        let err = check_input_size("hello world", Some(5)).unwrap_err();
        assert_eq!(err, AnalysisError::InputTooLarge { size: 11, limit: 5 });
        assert!(err.to_string().contains("11 bytes exceeds limit of 5 bytes"));
    }
}
