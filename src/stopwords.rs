//! Stopword sets.
//!
//! The built-in English set holds the common function words of English plus
//! the 32 ASCII punctuation symbols. It is built once per process on first
//! use and shared read-only afterwards.

use crate::error::{PrecisError, Result};
use crate::text::canonical_form;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

/// English function words.
const ENGLISH_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've",
    "now", "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't",
    "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven",
    "haven't", "isn", "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn",
    "needn't", "shan", "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't",
    "won", "won't", "wouldn", "wouldn't",
];

/// ASCII punctuation symbols, each treated as a stopword.
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

static ENGLISH: Lazy<Arc<StopwordSet>> = Lazy::new(|| {
    Arc::new(StopwordSet::from_words(ENGLISH_WORDS.iter().copied()).with_punctuation())
});

/// An immutable set of stopwords in canonical form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Returns the process-wide English stopword set.
    pub fn english() -> Arc<StopwordSet> {
        Arc::clone(&ENGLISH)
    }

    /// Creates an empty set (no filtering).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a set from a list of words.
    ///
    /// Entries are converted to the same canonical form as document tokens.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| canonical_form(w.as_ref().trim()))
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Loads a set from a file with one entry per line.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PrecisError::FileNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let set = Self::from_words(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        );
        log::debug!("Loaded {} stopwords from {}", set.len(), path.display());
        Ok(set)
    }

    /// Adds every ASCII punctuation symbol to the set.
    pub fn with_punctuation(mut self) -> Self {
        self.words.extend(PUNCTUATION.chars().map(String::from));
        self
    }

    /// Check if a canonical-form token is a stopword.
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_english_stopwords() {
        let set = StopwordSet::english();

        assert!(set.contains("the"));
        assert!(set.contains("is"));
        assert!(set.contains("don't"));
        assert!(!set.contains("machine"));
        assert!(!set.contains("learning"));
    }

    #[test]
    fn test_english_includes_punctuation() {
        let set = StopwordSet::english();
        for symbol in PUNCTUATION.chars() {
            assert!(set.contains(&symbol.to_string()), "missing {:?}", symbol);
        }
        assert_eq!(PUNCTUATION.len(), 32);
        assert_eq!(set.len(), ENGLISH_WORDS.len() + 32);
    }

    #[test]
    fn test_english_is_shared() {
        let a = StopwordSet::english();
        let b = StopwordSet::english();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_entries_are_canonical() {
        let set = StopwordSet::from_words(["The", " ON ", "Won\u{2019}t", ""]);
        assert_eq!(set.len(), 3);
        assert!(set.contains("the"));
        assert!(set.contains("on"));
        assert!(set.contains("won't"));
        assert!(!set.contains("The"));
    }

    #[test]
    fn test_empty_set() {
        let set = StopwordSet::empty();
        assert!(set.is_empty());
        assert!(!set.contains("the"));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# custom list").unwrap();
        writeln!(file, "Alpha").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  beta  ").unwrap();

        let set = StopwordSet::from_file(file.path()).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("alpha"));
        assert!(set.contains("beta"));
    }

    #[test]
    fn test_from_missing_file() {
        let err = StopwordSet::from_file(Path::new("/nonexistent/stopwords.txt")).unwrap_err();
        assert!(matches!(err, PrecisError::FileNotFound(_)));
    }
}
