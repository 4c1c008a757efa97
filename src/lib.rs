//! # precis - Frequency-Based Extractive Summarization
//!
//! precis builds short summaries by selecting the most important sentences
//! of a document. Importance comes from word frequency: the more often a
//! significant word appears in the document, the more it adds to the score
//! of every sentence containing it.
//!
//! ## Overview
//!
//! 1. The document is split into sentences, and each sentence into
//!    lowercase tokens.
//! 2. Stopwords (function words and punctuation) are discarded and the
//!    remaining words are counted across the whole document.
//! 3. Counts are normalized by the highest count. Words at or above
//!    `max_cut` (near-stopwords) or at or below `min_cut` (noise) are
//!    dropped.
//! 4. Each sentence scores the sum of its word weights; the `n` best
//!    sentences are returned, best first.
//!
//! ## Quick Start
//!
//! ```rust
//! use precis::Summarizer;
//!
//! let summarizer = Summarizer::new(0.1, 0.9)?;
//! let text = "Rust is a language. Rust programs are fast. \
//!             Programs written in Rust are safe. Safe programs crash less.";
//! let summary = summarizer.summarize(text, 2)?;
//! assert_eq!(summary.len(), 2);
//! # Ok::<(), precis::PrecisError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`segmentation`] - Sentence boundary detection
//! - [`text`] - Token normalization and word tokenization
//! - [`stopwords`] - Stopword sets
//! - [`frequency`] - Word frequency tables
//! - [`ranking`] - Sentence scoring and selection
//! - [`summarizer`] - The summarization pipeline
//! - [`extract`] - Paragraph text extraction from HTML

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod extract;
pub mod frequency;
pub mod ranking;
pub mod segmentation;
pub mod stopwords;
pub mod summarizer;
pub mod text;

// Re-export commonly used types
pub use config::{Config, SummarizerConfig, TextConfig};
pub use error::{PrecisError, Result};
pub use extract::{extract_article, Extracted};
pub use frequency::{FrequencyScorer, FrequencyTable};
pub use ranking::{RankingTable, SentenceRanker};
pub use segmentation::{RuleSplitter, SentenceSplitter, SplitterKind, UnicodeSplitter};
pub use stopwords::StopwordSet;
pub use summarizer::{RankedSentence, Summarizer, Summary, SummaryOrder};
pub use text::{Normalizer, Tokenizer};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default lower frequency cutoff.
pub const DEFAULT_MIN_CUT: f64 = 0.1;

/// Default upper frequency cutoff.
pub const DEFAULT_MAX_CUT: f64 = 0.9;
