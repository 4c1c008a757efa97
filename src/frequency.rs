//! Word frequency scoring.
//!
//! [`FrequencyScorer`] counts every non-stopword token of a document,
//! normalizes the counts by the highest one and keeps only the words whose
//! weight falls strictly between the two cutoffs.

use crate::config::SummarizerConfig;
use crate::error::{PrecisError, Result};
use crate::stopwords::StopwordSet;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Normalized word weights of one document.
///
/// Every weight lies strictly between the cutoffs the table was built with.
/// Iteration is in word order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    weights: BTreeMap<String, f64>,
}

impl FrequencyTable {
    /// Returns the weight of `word`, or 0.0 if it is not in the table.
    #[inline]
    pub fn get(&self, word: &str) -> f64 {
        self.weights.get(word).copied().unwrap_or(0.0)
    }

    /// Returns the weight of `word` if present.
    pub fn weight(&self, word: &str) -> Option<f64> {
        self.weights.get(word).copied()
    }

    /// Returns true if `word` carries a weight.
    pub fn contains(&self, word: &str) -> bool {
        self.weights.contains_key(word)
    }

    /// Number of weighted words.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns true if no word survived filtering.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterates over `(word, weight)` pairs in word order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(w, &v)| (w.as_str(), v))
    }

    /// Returns the `k` highest-weighted words, ties in word order.
    pub fn top(&self, k: usize) -> Vec<(&str, f64)> {
        let mut entries: Vec<_> = self.iter().collect();
        // Stable sort keeps word order among equal weights.
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));
        entries.truncate(k);
        entries
    }

    /// Sums the weights of `tokens`; unknown tokens contribute nothing.
    pub fn score<S: AsRef<str>>(&self, tokens: &[S]) -> f64 {
        tokens.iter().map(|t| self.get(t.as_ref())).sum()
    }
}

/// Builds [`FrequencyTable`]s from tokenized sentences.
#[derive(Debug, Clone)]
pub struct FrequencyScorer {
    config: SummarizerConfig,
    stopwords: Arc<StopwordSet>,
}

impl FrequencyScorer {
    /// Creates a scorer with the given cutoffs and stopwords.
    pub fn new(config: SummarizerConfig, stopwords: Arc<StopwordSet>) -> Self {
        Self { config, stopwords }
    }

    /// Returns the cutoff configuration.
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Counts occurrences of every non-stopword token across all sentences.
    pub fn count<S: AsRef<str>>(&self, sentences: &[Vec<S>]) -> HashMap<String, usize> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for token in sentences.iter().flatten() {
            let token: &str = token.as_ref();
            if !self.stopwords.contains(token) {
                *counts.entry(token.to_string()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Computes the filtered, normalized frequency table.
    ///
    /// # Errors
    ///
    /// Returns [`PrecisError::EmptyContent`] if every token is a stopword.
    pub fn compute<S: AsRef<str>>(&self, sentences: &[Vec<S>]) -> Result<FrequencyTable> {
        let counts = self.count(sentences);

        let max_count = counts.values().copied().max().ok_or_else(|| {
            PrecisError::EmptyContent("no non-stopword tokens to score".to_string())
        })?;

        let max = max_count as f64;
        let normalized: HashMap<String, f64> = counts
            .into_iter()
            .map(|(word, count)| (word, count as f64 / max))
            .collect();
        let counted = normalized.len();

        let SummarizerConfig { min_cut, max_cut } = self.config;
        let weights: BTreeMap<String, f64> = normalized
            .into_iter()
            .filter(|&(_, weight)| weight > min_cut && weight < max_cut)
            .collect();

        log::debug!(
            "Frequency table: {} of {} distinct words kept (max count {})",
            weights.len(),
            counted,
            max_count
        );

        Ok(FrequencyTable { weights })
    }
}
