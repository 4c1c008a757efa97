//! Sentence segmentation.
//!
//! Two splitters are available behind the [`SentenceSplitter`] trait:
//!
//! - [`RuleSplitter`]: regex-protected punctuation scanning that keeps
//!   abbreviations, initials, titles, decimals and ellipses inside their
//!   sentence (the default).
//! - [`UnicodeSplitter`]: UAX #29 sentence boundaries.
//!
//! Both return sentences as trimmed, verbatim slices of the input.

pub mod sentence;

pub use sentence::{split_sentences, RuleSplitter};

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Trait for sentence segmentation strategies.
pub trait SentenceSplitter {
    /// Returns the byte ranges of each sentence in `text`, in order.
    ///
    /// Ranges are trimmed of surrounding whitespace and never empty.
    fn spans(&self, text: &str) -> Vec<(usize, usize)>;

    /// Splits `text` into sentence slices.
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.spans(text)
            .into_iter()
            .map(|(start, end)| &text[start..end])
            .collect()
    }
}

/// Sentence boundaries from the Unicode text segmentation algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSplitter;

impl SentenceSplitter for UnicodeSplitter {
    fn spans(&self, text: &str) -> Vec<(usize, usize)> {
        text.split_sentence_bound_indices()
            .filter_map(|(offset, raw)| trimmed_span(raw, offset))
            .collect()
    }
}

/// Enum for the available splitters, used in configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitterKind {
    /// Rule-based splitter.
    #[default]
    Rules,
    /// UAX #29 splitter.
    Unicode,
}

impl SplitterKind {
    /// Computes sentence spans using this splitter.
    pub fn spans(&self, text: &str) -> Vec<(usize, usize)> {
        match self {
            SplitterKind::Rules => RuleSplitter.spans(text),
            SplitterKind::Unicode => UnicodeSplitter.spans(text),
        }
    }

    /// Splits text into sentence slices using this splitter.
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        match self {
            SplitterKind::Rules => RuleSplitter.split(text),
            SplitterKind::Unicode => UnicodeSplitter.split(text),
        }
    }
}

impl std::str::FromStr for SplitterKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rules" | "rule" => Ok(SplitterKind::Rules),
            "unicode" | "uax29" => Ok(SplitterKind::Unicode),
            other => Err(format!("unknown splitter '{}' (expected rules or unicode)", other)),
        }
    }
}

/// Trims `raw` (found at byte `offset`) and returns its span, or `None` if
/// nothing but whitespace remains.
pub(crate) fn trimmed_span(raw: &str, offset: usize) -> Option<(usize, usize)> {
    let leading = raw.len() - raw.trim_start().len();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        let start = offset + leading;
        Some((start, start + trimmed.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_splitter() {
        let sentences = UnicodeSplitter.split("Hello world. This is a test.  ");
        assert_eq!(sentences, vec!["Hello world.", "This is a test."]);
    }

    #[test]
    fn test_splitters_agree_on_simple_text() {
        let text = "Is this working? Yes it is! Great.";
        assert_eq!(SplitterKind::Rules.split(text), SplitterKind::Unicode.split(text));
    }

    #[test]
    fn test_spans_are_verbatim() {
        let text = "  First one.\n Second one!  ";
        for kind in [SplitterKind::Rules, SplitterKind::Unicode] {
            for (start, end) in kind.spans(text) {
                let slice = &text[start..end];
                assert_eq!(slice, slice.trim());
                assert!(!slice.is_empty());
            }
        }
    }

    #[test]
    fn test_splitter_kind_from_str() {
        assert_eq!("rules".parse::<SplitterKind>(), Ok(SplitterKind::Rules));
        assert_eq!("Unicode".parse::<SplitterKind>(), Ok(SplitterKind::Unicode));
        assert!("neural".parse::<SplitterKind>().is_err());
    }

    #[test]
    fn test_trimmed_span() {
        assert_eq!(trimmed_span("  abc ", 10), Some((12, 15)));
        assert_eq!(trimmed_span(" \n ", 0), None);
    }
}
