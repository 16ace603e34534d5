//! Helpers for the rich-text markup stored in prompt content
//!
//! Content is kept as HTML-ish markup. These functions derive the plain text
//! forms used for emptiness checks, terminal display and the clipboard.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z]+);").unwrap());
static LINE_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<br\s*/?>|</(p|div|li|h[1-6]|blockquote|pre|tr)\s*>").unwrap()
});

/// Text content of a markup string: tags removed, entities decoded
pub fn text_content(markup: &str) -> String {
    let without_comments = COMMENT_RE.replace_all(markup, "");
    let without_tags = TAG_RE.replace_all(&without_comments, "");
    decode_entities(&without_tags)
}

/// Rendered text of a markup string, keeping line structure
///
/// Line breaks and the end of block elements become newlines, which is what
/// a user expects to paste elsewhere.
pub fn inner_text(markup: &str) -> String {
    let without_comments = COMMENT_RE.replace_all(markup, "");
    let with_breaks = LINE_BREAK_RE.replace_all(&without_comments, "\n");
    let text = decode_entities(&TAG_RE.replace_all(&with_breaks, ""));
    text.trim_end_matches('\n').to_string()
}

/// True when the markup holds no visible text
pub fn is_blank(markup: &str) -> bool {
    text_content(markup).trim().is_empty()
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape plain text and keep its line breaks as `<br>`
pub fn text_to_markup(text: &str) -> String {
    escape_html(text).replace("\r\n", "\n").replace('\n', "<br>")
}

fn decode_entities(text: &str) -> String {
    ENTITY_RE
        .replace_all(text, |caps: &Captures| {
            let body = &caps[1];
            let decoded = if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = body.strip_prefix('#') {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                match body {
                    "amp" => Some('&'),
                    "lt" => Some('<'),
                    "gt" => Some('>'),
                    "quot" => Some('"'),
                    "apos" => Some('\''),
                    "nbsp" => Some('\u{a0}'),
                    _ => None,
                }
            };

            match decoded {
                Some(c) => c.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
