//! Configuration for the precis summarizer.

use crate::error::{PrecisError, Result};
use crate::segmentation::SplitterKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration for the summarizer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Frequency cutoff configuration.
    pub summarizer: SummarizerConfig,

    /// Text processing configuration.
    pub text: TextConfig,
}

impl Config {
    /// Loads a configuration from a JSON file.
    ///
    /// Missing fields take their default values. The loaded configuration is
    /// validated before it is returned.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PrecisError::FileNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every section for out-of-range values.
    pub fn validate(&self) -> Result<()> {
        self.summarizer.validate()?;
        self.text.validate()
    }
}

/// Word frequency cutoffs.
///
/// After normalization by the highest count, words whose weight is at or
/// above `max_cut` (near-stopwords) or at or below `min_cut` (noise) are
/// dropped from scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Lower cutoff, exclusive.
    /// Default: 0.1.
    pub min_cut: f64,

    /// Upper cutoff, exclusive.
    /// Default: 0.9.
    pub max_cut: f64,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            min_cut: crate::DEFAULT_MIN_CUT,
            max_cut: crate::DEFAULT_MAX_CUT,
        }
    }
}

impl SummarizerConfig {
    /// Creates a cutoff configuration, validating both bounds.
    pub fn new(min_cut: f64, max_cut: f64) -> Result<Self> {
        let config = Self { min_cut, max_cut };
        config.validate()?;
        Ok(config)
    }

    /// Both cutoffs must be finite and lie within `[0, 1]`.
    ///
    /// `min_cut >= max_cut` is accepted: it filters out every word.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("min_cut", self.min_cut), ("max_cut", self.max_cut)] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PrecisError::Config(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Returns true if no normalized weight can pass both cutoffs.
    pub fn filters_everything(&self) -> bool {
        self.min_cut >= self.max_cut
    }
}

/// Text processing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Sentence segmentation strategy.
    /// Default: rules.
    pub splitter: SplitterKind,

    /// Apply Unicode normalization (NFC) to tokens.
    /// Default: true.
    pub unicode_normalize: bool,

    /// Drop purely numeric tokens.
    /// Default: false.
    pub remove_numbers: bool,

    /// Maximum token length in bytes; longer tokens are dropped.
    /// Default: 64.
    pub max_token_length: usize,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            splitter: SplitterKind::Rules,
            unicode_normalize: true,
            remove_numbers: false,
            max_token_length: 64,
        }
    }
}

impl TextConfig {
    /// Validates token length bounds.
    pub fn validate(&self) -> Result<()> {
        if self.max_token_length == 0 {
            return Err(PrecisError::Config(
                "max_token_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
