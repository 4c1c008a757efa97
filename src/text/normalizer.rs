//! Token normalization.
//!
//! Stopword entries and document tokens must be compared in the same form,
//! so both go through [`canonical_form`].

use crate::config::TextConfig;
use unicode_normalization::UnicodeNormalization;

const TYPOGRAPHIC_APOSTROPHES: &[char] = &['\u{2018}', '\u{2019}', '\u{02BC}'];

/// Canonical comparison form of a token: NFC, straight apostrophes, lowercase.
pub fn canonical_form(token: &str) -> String {
    let composed: String = token.nfc().collect();
    fold(&composed)
}

fn fold(token: &str) -> String {
    token.replace(TYPOGRAPHIC_APOSTROPHES, "'").to_lowercase()
}

fn is_number(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit())
        && token.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
}

/// Text normalizer applied to every word token.
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: TextConfig,
}

impl Normalizer {
    /// Creates a new normalizer with the given configuration.
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    /// Creates a normalizer with default configuration.
    pub fn default_config() -> Self {
        Self::new(TextConfig::default())
    }

    /// Normalizes a single token.
    ///
    /// Returns `None` if the token should be filtered out.
    pub fn normalize_token(&self, token: &str) -> Option<String> {
        if token.trim().is_empty() {
            return None;
        }

        let result = if self.config.unicode_normalize {
            canonical_form(token)
        } else {
            fold(token)
        };

        if self.config.remove_numbers && is_number(&result) {
            return None;
        }

        if result.len() > self.config.max_token_length {
            return None;
        }

        Some(result)
    }
}
