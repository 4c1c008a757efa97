//! Extractive summarization by word frequency.
//!
//! A document is split into sentences, each sentence into lowercase tokens.
//! Non-stopword tokens are weighted by their normalized frequency across the
//! whole document, every sentence is scored by the sum of its token weights,
//! and the best `n` sentences form the summary.

use crate::config::{Config, SummarizerConfig};
use crate::error::{PrecisError, Result};
use crate::frequency::{FrequencyScorer, FrequencyTable};
use crate::ranking::{RankingTable, SentenceRanker};
use crate::segmentation::SplitterKind;
use crate::stopwords::StopwordSet;
use crate::text::Tokenizer;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Order of the sentences in a summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryOrder {
    /// Highest score first; equal scores in document order.
    #[default]
    Score,
    /// Order of appearance in the document.
    Document,
}

impl std::str::FromStr for SummaryOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "score" => Ok(SummaryOrder::Score),
            "document" | "position" => Ok(SummaryOrder::Document),
            other => Err(format!("unknown order '{}' (expected score or document)", other)),
        }
    }
}

/// A sentence selected for a summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedSentence {
    /// Zero-based position of the sentence in the document.
    pub index: usize,
    /// The sentence as it appears in the document.
    pub text: String,
    /// Sum of the frequency weights of its tokens.
    pub score: f64,
}

/// A summary with the data used to build it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Selected sentences.
    pub sentences: Vec<RankedSentence>,
    /// Number of sentences in the source document.
    pub sentence_count: usize,
    /// Word weights the sentences were scored with.
    pub frequencies: FrequencyTable,
}

impl Summary {
    /// Rearranges the selected sentences.
    pub fn ordered(mut self, order: SummaryOrder) -> Self {
        if order == SummaryOrder::Document {
            self.sentences.sort_by_key(|s| s.index);
        }
        self
    }

    /// Sentence texts in their current order.
    pub fn texts(&self) -> Vec<&str> {
        self.sentences.iter().map(|s| s.text.as_str()).collect()
    }

    /// Consumes the summary, returning the sentence texts.
    pub fn into_texts(self) -> Vec<String> {
        self.sentences.into_iter().map(|s| s.text).collect()
    }
}

/// Frequency-based extractive summarizer.
///
/// Configuration is validated once at construction and never changes; a
/// summarizer holds no per-call state and can be shared across threads.
///
/// # Example
///
/// ```
/// use precis::Summarizer;
///
/// let summarizer = Summarizer::default();
/// let text = "The cat sat. The cat sat on the mat. Cats are animals.";
/// let summary = summarizer.summarize(text, 1)?;
/// assert_eq!(summary, vec!["Cats are animals."]);
/// # Ok::<(), precis::PrecisError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Summarizer {
    scorer: FrequencyScorer,
    tokenizer: Tokenizer,
    splitter: SplitterKind,
    ranker: SentenceRanker,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::from_parts(Config::default(), StopwordSet::english())
    }
}

impl Summarizer {
    /// Creates a summarizer with the given cutoffs and the English stopwords.
    ///
    /// # Errors
    ///
    /// Returns [`PrecisError::Config`] if a cutoff is outside `[0, 1]`.
    pub fn new(min_cut: f64, max_cut: f64) -> Result<Self> {
        let config = Config {
            summarizer: SummarizerConfig::new(min_cut, max_cut)?,
            ..Default::default()
        };
        Self::with_config(config)
    }

    /// Creates a summarizer from a full configuration.
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        if config.summarizer.filters_everything() {
            log::warn!(
                "min_cut {} >= max_cut {}: every word will be filtered out",
                config.summarizer.min_cut,
                config.summarizer.max_cut
            );
        }
        Ok(Self::from_parts(config, StopwordSet::english()))
    }

    fn from_parts(config: Config, stopwords: Arc<StopwordSet>) -> Self {
        Self {
            scorer: FrequencyScorer::new(config.summarizer, stopwords),
            tokenizer: Tokenizer::new(config.text.clone()),
            splitter: config.text.splitter,
            ranker: SentenceRanker,
        }
    }

    /// Replaces the stopword set.
    pub fn with_stopwords(mut self, stopwords: Arc<StopwordSet>) -> Self {
        self.scorer = FrequencyScorer::new(*self.scorer.config(), stopwords);
        self
    }

    /// Returns the cutoff configuration.
    pub fn config(&self) -> &SummarizerConfig {
        self.scorer.config()
    }

    /// Splits `text` into the sentences a summary is chosen from.
    pub fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.splitter.split(text)
    }

    /// Computes the word weights of `text`.
    pub fn frequencies(&self, text: &str) -> Result<FrequencyTable> {
        let sentences = self.sentences(text);
        self.scorer.compute(&self.tokenizer.tokenize_sentences(&sentences))
    }

    /// Returns the `k` highest-weighted words of `text`.
    pub fn keywords(&self, text: &str, k: usize) -> Result<Vec<(String, f64)>> {
        let table = self.frequencies(text)?;
        Ok(table
            .top(k)
            .into_iter()
            .map(|(word, weight)| (word.to_string(), weight))
            .collect())
    }

    /// Returns the `n` most important sentences of `text`, best first.
    ///
    /// # Errors
    ///
    /// - [`PrecisError::EmptyContent`] if `text` has no sentences or no
    ///   non-stopword tokens.
    /// - [`PrecisError::InvalidArgument`] if `n` exceeds the number of
    ///   sentences.
    pub fn summarize(&self, text: &str, n: usize) -> Result<Vec<String>> {
        Ok(self.summarize_detailed(text, n)?.into_texts())
    }

    /// Like [`summarize`](Self::summarize), but keeps indices, scores and the
    /// frequency table.
    pub fn summarize_detailed(&self, text: &str, n: usize) -> Result<Summary> {
        let sentences = self.sentences(text);
        let sentence_count = sentences.len();

        if sentence_count == 0 {
            return Err(PrecisError::EmptyContent(
                "document contains no sentences".to_string(),
            ));
        }
        if n > sentence_count {
            return Err(PrecisError::InvalidArgument(format!(
                "requested {} sentences but the document has only {}",
                n, sentence_count
            )));
        }
        if n == 0 {
            return Ok(Summary {
                sentences: Vec::new(),
                sentence_count,
                frequencies: FrequencyTable::default(),
            });
        }

        let tokens = self.tokenizer.tokenize_sentences(&sentences);
        let frequencies = self.scorer.compute(&tokens)?;
        let ranking = RankingTable::build(&frequencies, &tokens);
        let selected = self.ranker.select(&ranking, n);

        log::debug!(
            "Selected sentences {:?} out of {} ({} weighted words)",
            selected,
            sentence_count,
            frequencies.len()
        );

        let sentences = selected
            .into_iter()
            .map(|index| RankedSentence {
                index,
                text: sentences[index].to_string(),
                score: ranking.score(index),
            })
            .collect();

        Ok(Summary {
            sentences,
            sentence_count,
            frequencies,
        })
    }

    /// Summarizes many independent documents in parallel.
    ///
    /// Results are in input order; each document fails or succeeds on its own.
    pub fn summarize_batch<S>(&self, texts: &[S], n: usize) -> Vec<Result<Vec<String>>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.summarize(text.as_ref(), n))
            .collect()
    }
}
