//! Rule-based sentence segmentation.
//!
//! Boundaries are found with a protect-then-scan approach: periods that
//! belong to abbreviations, initials, titles, decimals or ellipses are marked
//! as protected first, then the text is scanned for the remaining sentence
//! enders (`.`, `!`, `?`). Closing quotes and brackets directly after an
//! ender stay with the sentence they close. Blank lines always end a
//! sentence.
//!
//! Dotted acronyms and single capitals are context dependent: "U.S." ends a
//! sentence when the next word is a capitalized stopword ("The", "It"), and
//! a lone capital is only an initial when a name follows it.

use super::{trimmed_span, SentenceSplitter};
use crate::stopwords::StopwordSet;
use crate::text::canonical_form;
use once_cell::sync::Lazy;
use regex::Regex;

/// Patterns whose periods never end a sentence.
static PROTECTED_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // Suspension points (...)
        r"\.{2,}",
        // Composite abbreviations (et al.)
        r"\bet al\.",
        // Floating-point numbers (3.14)
        r"[0-9]\.[0-9]",
        // Leading decimals (.625)
        r"(?:^|\s)\.[0-9]",
        // Titles (Dr., Mrs.)
        r"\b(?:Mr|Mrs|Ms|Dr|Prof|Sr|Jr|St|Mt|Gen|Col|Capt|Lt|Sgt|Rev|Hon|Gov|Sen|Rep|vs)\.",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

/// Multi-letter abbreviations (U.S.A., e.g.)
static ACRONYM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:[A-Za-z]\.){2,}").unwrap());

/// Single capitals followed by a period (J., B., I.)
static CAPITAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[A-Z]\.").unwrap());

static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n[ \t\r]*\n").unwrap());

/// Rule-based sentence splitter.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleSplitter;

impl SentenceSplitter for RuleSplitter {
    fn spans(&self, text: &str) -> Vec<(usize, usize)> {
        if text.is_empty() {
            return vec![];
        }

        let protected = protected_periods(text);
        let mut spans = Vec::new();
        let mut paragraph_start = 0;

        for brk in PARAGRAPH_BREAK.find_iter(text) {
            scan_paragraph(text, paragraph_start, brk.start(), &protected, &mut spans);
            paragraph_start = brk.end();
        }
        scan_paragraph(text, paragraph_start, text.len(), &protected, &mut spans);

        spans
    }
}

/// Splits text into sentences using the rule-based splitter.
///
/// # Example
/// ```
/// use precis::segmentation::split_sentences;
///
/// let text = "Dr. Smith went to Washington. He arrived at 3.14 p.m.";
/// let sentences = split_sentences(text);
/// assert_eq!(sentences.len(), 2);
/// ```
pub fn split_sentences(text: &str) -> Vec<String> {
    RuleSplitter
        .split(text)
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Marks every byte offset holding a period that must not end a sentence.
fn protected_periods(text: &str) -> Vec<bool> {
    let mut mask = vec![false; text.len()];
    for pattern in PROTECTED_PATTERNS.iter() {
        for m in pattern.find_iter(text) {
            for (i, byte) in m.as_str().bytes().enumerate() {
                if byte == b'.' {
                    mask[m.start() + i] = true;
                }
            }
        }
    }
    protect_acronyms(text, &mut mask);
    protect_initials(text, &mut mask);
    mask
}

/// Inner acronym periods are always protected; the final one only when the
/// acronym does not close a sentence.
fn protect_acronyms(text: &str, mask: &mut [bool]) {
    for m in ACRONYM.find_iter(text) {
        let last = m.end() - 1;
        for (i, byte) in m.as_str().bytes().enumerate() {
            if byte == b'.' && m.start() + i != last {
                mask[m.start() + i] = true;
            }
        }
        let closes = next_word(text, m.end()).is_some_and(|(_, word)| is_sentence_starter(word));
        if !closes {
            mask[last] = true;
        }
    }
}

/// Protects the period of a capital that reads as a name initial: followed by
/// another initial ("J. K."), or by a capitalized name that does not come
/// after a lowercase word ("Dr. C. Jeung", but not "me and I. Nobody").
fn protect_initials(text: &str, mask: &mut [bool]) {
    for m in CAPITAL.find_iter(text) {
        let protect = match next_word(text, m.end()) {
            Some((start, word)) if is_initial(text, start, word) => true,
            Some((_, word)) => {
                starts_uppercase(word)
                    && !is_sentence_starter(word)
                    && !previous_word(text, m.start()).is_some_and(|prev| {
                        prev.chars().next().is_some_and(char::is_lowercase)
                    })
            }
            None => false,
        };
        if protect {
            mask[m.end() - 1] = true;
        }
    }
}

/// The word after `pos`, separated from it by whitespace, with its offset.
fn next_word(text: &str, pos: usize) -> Option<(usize, &str)> {
    let rest = &text[pos..];
    let trimmed = rest.trim_start();
    if trimmed.len() == rest.len() {
        return None;
    }
    let start = pos + rest.len() - trimmed.len();
    let len = trimmed
        .find(|c: char| !(c.is_alphanumeric() || c == '\''))
        .unwrap_or(trimmed.len());
    (len > 0).then(|| (start, &trimmed[..len]))
}

/// The word ending right before `pos`, skipping whitespace. `None` when the
/// preceding text ends in punctuation.
fn previous_word(text: &str, pos: usize) -> Option<&str> {
    let before = text[..pos].trim_end();
    let start = before
        .char_indices()
        .rev()
        .find(|(_, c)| !c.is_alphanumeric())
        .map_or(0, |(i, c)| i + c.len_utf8());
    let word = &before[start..];
    (!word.is_empty()).then_some(word)
}

fn is_initial(text: &str, start: usize, word: &str) -> bool {
    word.len() == 1 && starts_uppercase(word) && text[start + 1..].starts_with('.')
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

/// A capitalized function word ("The", "It", "We") opens a new sentence.
fn is_sentence_starter(word: &str) -> bool {
    starts_uppercase(word) && StopwordSet::english().contains(&canonical_form(word))
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '}' | '\u{2019}' | '\u{201D}' | '\u{00BB}')
}

/// Scans `text[start..end]` for sentence boundaries, appending trimmed spans.
fn scan_paragraph(
    text: &str,
    start: usize,
    end: usize,
    protected: &[bool],
    spans: &mut Vec<(usize, usize)>,
) {
    let bytes = text.as_bytes();
    let mut sentence_start = start;
    let mut i = start;

    while i < end {
        let is_ender = matches!(bytes[i], b'.' | b'!' | b'?') && !protected[i];
        if !is_ender {
            i += 1;
            continue;
        }

        // Runs of enders ("?!") and closing quotes/brackets stay attached.
        let mut boundary = i + 1;
        while let Some(c) = text[boundary..end].chars().next() {
            if matches!(c, '.' | '!' | '?') || is_closer(c) {
                boundary += c.len_utf8();
            } else {
                break;
            }
        }

        // A sentence ends before whitespace, at the end of the paragraph, or
        // before a capital letter glued to the ender ("sat.The").
        let splits = match text[boundary..end].chars().next() {
            None => true,
            Some(next) => next.is_whitespace() || next.is_uppercase(),
        };

        if splits {
            if let Some(span) = trimmed_span(&text[sentence_start..boundary], sentence_start) {
                spans.push(span);
            }
            sentence_start = boundary;
        }
        i = boundary;
    }

    if let Some(span) = trimmed_span(&text[sentence_start..end], sentence_start) {
        spans.push(span);
    }
}
