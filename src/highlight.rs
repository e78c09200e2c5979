//! Match highlighting.
//!
//! Wraps the matched words of a record's SOURCE text in divider strings so
//! a host can render which parts of a suggestion the query touched. The
//! source text is reproduced verbatim (casing, accents, punctuation); only
//! the dividers are inserted. Token positions come from the same
//! tokenization that built the index, so a matched posting always lines up
//! with a span of the original string.

use crate::normalize::tokens;
use crate::types::{Field, Record};

/// Divider pair inserted around matched words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightStyle {
    pub left: String,
    pub right: String,
}

impl HighlightStyle {
    pub fn new(left: &str, right: &str) -> Self {
        HighlightStyle {
            left: left.to_string(),
            right: right.to_string(),
        }
    }
}

impl Default for HighlightStyle {
    fn default() -> Self {
        HighlightStyle::new("[", "]")
    }
}

/// Render a record's text with matched words wrapped in the dividers.
///
/// `matched` holds the (field, token position) pairs the query matched,
/// exactly as collected during matching. Fields are emitted in stored
/// order, separated by a single space. No matches means the plain text,
/// which is what the empty-query browse listing shows.
pub fn highlight(record: &Record, matched: &[(Field, u32)], style: &HighlightStyle) -> String {
    let mut out = String::new();
    for (field, raw) in &record.fields {
        if !out.is_empty() {
            out.push(' ');
        }
        let mut cursor = 0;
        for (position, token) in tokens(raw).iter().enumerate() {
            if matched.contains(&(*field, position as u32)) {
                out.push_str(&raw[cursor..token.start]);
                out.push_str(&style.left);
                out.push_str(&raw[token.start..token.end]);
                out.push_str(&style.right);
                cursor = token.end;
            }
        }
        out.push_str(&raw[cursor..]);
    }
    out
}
