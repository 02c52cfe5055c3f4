//! Keyword and phrase frequency analysis.
//!
//! Builds the single-word (unigram) table from non-stop words and the
//! phrase table from every 2- and 3-word window of the full word stream,
//! then classifies each entry's density into a [`DensityStatus`] band.
//!
//! Density is always measured against the document's total word count,
//! stop words included, so it reflects prevalence across the whole text.
//! Both tables are ranked by descending count; ties keep the order in which
//! the terms first appeared.

use std::collections::HashMap;
use std::hash::Hash;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::stop_words::StopWordSet;

/// Density band of a keyword or phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DensityStatus {
    /// Within the recommended range.
    Optimal,
    /// Below the recommended range.
    Low,
    /// Above the recommended range.
    High,
    /// Far above the recommended range. Only single words reach this band.
    KeywordStuffing,
}

impl DensityStatus {
    /// Returns the status as a kebab-case string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Optimal => "optimal",
            Self::Low => "low",
            Self::High => "high",
            Self::KeywordStuffing => "keyword-stuffing",
        }
    }

    /// Whether the status flags overuse (`high` or `keyword-stuffing`).
    pub const fn is_overused(&self) -> bool {
        matches!(self, Self::High | Self::KeywordStuffing)
    }
}

impl std::fmt::Display for DensityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Density thresholds (in percent) for single-word keywords.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct KeywordThresholds {
    /// Density above this is keyword stuffing.
    pub stuffing: f64,
    /// Density above this (up to `stuffing`) is high.
    pub high: f64,
    /// Density below this is low.
    pub low: f64,
}

impl Default for KeywordThresholds {
    fn default() -> Self {
        Self {
            stuffing: 5.0,
            high: 3.0,
            low: 0.5,
        }
    }
}

impl KeywordThresholds {
    /// Classify a single-word density.
    pub fn classify(&self, density: f64) -> DensityStatus {
        if density > self.stuffing {
            DensityStatus::KeywordStuffing
        } else if density > self.high {
            DensityStatus::High
        } else if density < self.low {
            DensityStatus::Low
        } else {
            DensityStatus::Optimal
        }
    }
}

/// Density thresholds (in percent) for multi-word phrases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PhraseThresholds {
    /// Density above this is high.
    pub high: f64,
    /// Density below this is low.
    pub low: f64,
}

impl Default for PhraseThresholds {
    fn default() -> Self {
        Self {
            high: 2.0,
            low: 0.2,
        }
    }
}

impl PhraseThresholds {
    /// Classify a phrase density. Phrases never reach keyword stuffing.
    pub fn classify(&self, density: f64) -> DensityStatus {
        if density > self.high {
            DensityStatus::High
        } else if density < self.low {
            DensityStatus::Low
        } else {
            DensityStatus::Optimal
        }
    }
}

/// Size limits for the ranked tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FrequencyLimits {
    /// Maximum number of single-word entries returned.
    pub top_keywords: usize,
    /// Maximum number of phrase entries returned.
    pub top_phrases: usize,
    /// Minimum occurrences for a phrase to be reported.
    pub min_phrase_count: usize,
}

impl Default for FrequencyLimits {
    fn default() -> Self {
        Self {
            top_keywords: 20,
            top_phrases: 15,
            min_phrase_count: 2,
        }
    }
}

/// Everything [`analyze_frequency_with`] needs besides the words.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrequencyOptions {
    /// Single-word bands.
    pub keyword: KeywordThresholds,
    /// Phrase bands.
    pub phrase: PhraseThresholds,
    /// Table limits.
    pub limits: FrequencyLimits,
}

/// A ranked keyword or phrase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct KeywordEntry {
    /// The word, or the space-joined words of a phrase.
    #[serde(alias = "keyword")]
    pub term: String,
    /// Occurrences in the document (at least 1).
    pub count: usize,
    /// `100 * count / total words`.
    pub density: f64,
    /// Band derived from `density`.
    pub status: DensityStatus,
}

/// Output of [`analyze_frequency`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTables {
    /// Top single-word keywords, stop words excluded.
    pub unigrams: Vec<KeywordEntry>,
    /// Top repeated 2- and 3-word phrases.
    pub ngrams: Vec<KeywordEntry>,
    /// Distinct non-stop words before truncation.
    pub distinct_keywords: usize,
}

/// Build keyword and phrase tables with the default thresholds and limits.
pub fn analyze_frequency(
    words: &[String],
    total_word_count: usize,
    stop_words: &StopWordSet,
) -> FrequencyTables {
    analyze_frequency_with(
        words,
        total_word_count,
        stop_words,
        &FrequencyOptions::default(),
    )
}

/// Build keyword and phrase tables.
///
/// Returns empty tables when `total_word_count` is 0.
#[tracing::instrument(skip_all, fields(words = words.len(), total_word_count = total_word_count))]
pub fn analyze_frequency_with(
    words: &[String],
    total_word_count: usize,
    stop_words: &StopWordSet,
    options: &FrequencyOptions,
) -> FrequencyTables {
    if total_word_count == 0 {
        return FrequencyTables::default();
    }
    let total = total_word_count as f64;

    let mut unigram_counts = OrderedCounter::default();
    for word in words.iter().filter(|w| !stop_words.contains(w)) {
        unigram_counts.add(word.as_str());
    }

    let distinct_keywords = unigram_counts.len();
    let mut unigrams: Vec<KeywordEntry> = unigram_counts
        .into_entries()
        .map(|(term, count)| {
            let density = density_percent(count, total);
            KeywordEntry {
                term: term.to_string(),
                count,
                density,
                status: options.keyword.classify(density),
            }
        })
        .collect();
    rank(&mut unigrams, options.limits.top_keywords);

    let min_count = options.limits.min_phrase_count.max(1);
    let mut ngrams: Vec<KeywordEntry> = count_phrases(words)
        .into_entries()
        .filter(|(_, count)| *count >= min_count)
        .map(|(term, count)| {
            let density = density_percent(count, total);
            KeywordEntry {
                term,
                count,
                density,
                status: options.phrase.classify(density),
            }
        })
        .collect();
    rank(&mut ngrams, options.limits.top_phrases);

    tracing::debug!(
        unigrams = unigrams.len(),
        ngrams = ngrams.len(),
        "frequency tables built"
    );

    FrequencyTables {
        unigrams,
        ngrams,
        distinct_keywords,
    }
}

/// Count how many times `target` occurs as a contiguous run in `words`.
///
/// An empty target never occurs.
pub fn count_occurrences(words: &[String], target: &[String]) -> usize {
    if target.is_empty() || target.len() > words.len() {
        return 0;
    }
    words.windows(target.len()).filter(|w| *w == target).count()
}

/// `100 * count / total`.
pub fn density_percent(count: usize, total: f64) -> f64 {
    count as f64 / total * 100.0
}

/// Slide 2- and 3-word windows over the full stream.
///
/// At each position the bigram is recorded before the trigram, which fixes
/// the first-seen order of the merged table.
fn count_phrases(words: &[String]) -> OrderedCounter<String> {
    let mut counts = OrderedCounter::default();
    for i in 0..words.len() {
        for n in 2..=3 {
            if let Some(window) = words.get(i..i + n) {
                counts.add(window.join(" "));
            }
        }
    }
    counts
}

/// Stable sort by descending count, then truncate.
fn rank(entries: &mut Vec<KeywordEntry>, limit: usize) {
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(limit);
}

/// A counter that remembers first-insertion order.
struct OrderedCounter<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, usize)>,
}

impl<K> Default for OrderedCounter<K> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K: Hash + Eq + Clone> OrderedCounter<K> {
    fn add(&mut self, key: K) {
        if let Some(&slot) = self.index.get(&key) {
            self.entries[slot].1 += 1;
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, 1));
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn into_entries(self) -> impl Iterator<Item = (K, usize)> {
        self.entries.into_iter()
    }
}

// -- Word frequency ---------------------------------------------------------

/// One row of the all-words frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WordCount {
    /// The word.
    pub word: String,
    /// Occurrences in the document.
    pub count: usize,
}

/// Frequency of every distinct word, stop words included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WordFrequencyReport {
    /// Number of word tokens.
    pub total_words: usize,
    /// Number of distinct words.
    pub unique_words: usize,
    /// Every distinct word, most frequent first.
    pub entries: Vec<WordCount>,
}

impl WordFrequencyReport {
    /// Render as CSV with a `Word,Frequency` header.
    pub fn to_csv(&self) -> String {
        let mut out = String::from("Word,Frequency\n");
        for entry in &self.entries {
            out.push('"');
            out.push_str(&entry.word.replace('"', "\"\""));
            out.push_str("\",");
            out.push_str(&entry.count.to_string());
            out.push('\n');
        }
        out
    }
}

/// Count every distinct word in `words`.
#[tracing::instrument(skip_all, fields(words = words.len()))]
pub fn word_frequency(words: &[String]) -> WordFrequencyReport {
    let mut counts = OrderedCounter::default();
    for word in words {
        counts.add(word.as_str());
    }

    let mut entries: Vec<WordCount> = counts
        .into_entries()
        .map(|(word, count)| WordCount {
            word: word.to_string(),
            count,
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count));

    WordFrequencyReport {
        total_words: words.len(),
        unique_words: entries.len(),
        entries,
    }
}
