//! Readable text extraction from HTML pages.
//!
//! News pages keep the article body in `<p>` elements, usually inside an
//! `<article>` element. The extractor collects the text of those paragraphs
//! so the result can be handed straight to the summarizer.

use crate::error::{PrecisError, Result};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;

static TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<title\b[^>]*>(.*?)</title>").unwrap());

static ARTICLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<article\b[^>]*>(.*?)</article>").unwrap());

static SCRIPT_OR_STYLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script>|<style\b[^>]*>.*?</style>|<!--.*?-->").unwrap()
});

static PARAGRAPH_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<p\b[^>]*>").unwrap());

/// A paragraph ends at `</p>`, at the next `<p>`, or at a block element that
/// implicitly closes it.
static PARAGRAPH_END: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)</p\s*>|<p\b|</?(?:div|article|section|main|header|footer|nav|aside|ul|ol|li|table|tr|td|th|blockquote|pre|h[1-6]|body|html)\b",
    )
    .unwrap()
});

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());

static ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]{2,8});").unwrap());

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Text extracted from an HTML page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extracted {
    /// Contents of the `<title>` element, if any.
    pub title: Option<String>,
    /// Paragraph text joined with single spaces.
    pub text: String,
}

/// Extracts the title and paragraph text of an HTML page.
///
/// Only the first `<article>` element is searched when the page has one;
/// otherwise the whole page is. Scripts, styles and comments are ignored.
///
/// # Errors
///
/// Returns [`PrecisError::EmptyContent`] if no paragraph contains text.
pub fn extract_article(html: &str) -> Result<Extracted> {
    let title = TITLE
        .captures(html)
        .map(|caps| clean_fragment(&caps[1]))
        .filter(|t| !t.is_empty());

    let cleaned = SCRIPT_OR_STYLE.replace_all(html, " ");
    let region = match ARTICLE.captures(&cleaned) {
        Some(caps) => caps.get(1).map_or("", |m| m.as_str()).to_string(),
        None => cleaned.to_string(),
    };

    let paragraphs: Vec<String> = PARAGRAPH_START
        .find_iter(&region)
        .map(|start| {
            let body = &region[start.end()..];
            let end = PARAGRAPH_END.find(body).map_or(body.len(), |m| m.start());
            clean_fragment(&body[..end])
        })
        .filter(|p| !p.is_empty())
        .collect();

    if paragraphs.is_empty() {
        return Err(PrecisError::EmptyContent(
            "no paragraph text found in HTML".to_string(),
        ));
    }

    log::debug!("Extracted {} paragraphs", paragraphs.len());

    Ok(Extracted {
        title,
        text: paragraphs.join(" "),
    })
}

/// Strips tags, decodes entities and collapses whitespace.
fn clean_fragment(fragment: &str) -> String {
    let without_tags = TAG.replace_all(fragment, " ");
    let decoded = decode_entities(&without_tags);
    WHITESPACE.replace_all(decoded.trim(), " ").into_owned()
}

fn decode_entities(text: &str) -> String {
    ENTITY
        .replace_all(text, |caps: &Captures| {
            let name = &caps[1];
            let decoded = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = name.strip_prefix('#') {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                named_entity(name)
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

fn named_entity(name: &str) -> Option<char> {
    let c = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => ' ',
        "ndash" => '\u{2013}',
        "mdash" => '\u{2014}',
        "hellip" => '\u{2026}',
        "lsquo" => '\u{2018}',
        "rsquo" => '\u{2019}',
        "ldquo" => '\u{201C}',
        "rdquo" => '\u{201D}',
        _ => return None,
    };
    Some(c)
}
