//! Word tokenization.

use crate::config::TextConfig;
use crate::text::Normalizer;
use unicode_segmentation::UnicodeSegmentation;

/// Tokenizer that splits text on Unicode word boundaries.
///
/// Every non-whitespace segment becomes a token, so punctuation symbols are
/// emitted on their own (`"Hello, world!"` yields `hello`, `,`, `world`, `!`)
/// and are left for the stopword set to remove.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    normalizer: Normalizer,
}

impl Tokenizer {
    /// Creates a new tokenizer with the given configuration.
    pub fn new(config: TextConfig) -> Self {
        Self {
            normalizer: Normalizer::new(config),
        }
    }

    /// Creates a tokenizer with default configuration.
    pub fn default_config() -> Self {
        Self::new(TextConfig::default())
    }

    /// Tokenizes text into a sequence of normalized tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_word_bounds()
            .filter_map(|segment| self.normalizer.normalize_token(segment))
            .collect()
    }

    /// Tokenizes each sentence independently.
    pub fn tokenize_sentences<S: AsRef<str>>(&self, sentences: &[S]) -> Vec<Vec<String>> {
        sentences
            .iter()
            .map(|sentence| self.tokenize(sentence.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        let tokenizer = Tokenizer::default_config();
        let tokens = tokenizer.tokenize("Hello, world!");
        assert_eq!(tokens, vec!["hello", ",", "world", "!"]);
    }

    #[test]
    fn test_whitespace_runs_are_dropped() {
        let tokenizer = Tokenizer::default_config();
        let tokens = tokenizer.tokenize("one  two,\tthree\n four");
        assert_eq!(tokens, vec!["one", "two", ",", "three", "four"]);
    }

    #[test]
    fn test_contractions_stay_whole() {
        let tokenizer = Tokenizer::default_config();
        let tokens = tokenizer.tokenize("Don\u{2019}t stop");
        assert_eq!(tokens, vec!["don't", "stop"]);
    }

    #[test]
    fn test_decimal_number_is_one_token() {
        let tokenizer = Tokenizer::default_config();
        let tokens = tokenizer.tokenize("Pi is 3.14.");
        assert_eq!(tokens, vec!["pi", "is", "3.14", "."]);
    }

    #[test]
    fn test_unicode_tokenization() {
        let tokenizer = Tokenizer::default_config();
        let tokens = tokenizer.tokenize("Привет мир"); // Russian "Hello world"
        assert_eq!(tokens, vec!["привет", "мир"]);
    }

    #[test]
    fn test_tokenize_sentences() {
        let tokenizer = Tokenizer::default_config();
        let sentences = ["The cat sat.", "Cats are animals."];
        let tokens = tokenizer.tokenize_sentences(&sentences);
        assert_eq!(tokens[0], vec!["the", "cat", "sat", "."]);
        assert_eq!(tokens[1], vec!["cats", "are", "animals", "."]);
    }
}
