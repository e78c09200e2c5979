//! Text normalization and tokenization.
//!
//! Record fields and query strings pass through the same pipeline; any
//! asymmetry here silently breaks matching. Everything in this module is
//! pure and deterministic.
//!
//! Tokens carry their byte span in the source text so highlighting can wrap
//! the matched words of the ORIGINAL string, accents and casing intact,
//! while matching runs on the folded form.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// One word of a field or query: the folded term used as an index key plus
/// the byte span of the word in the source text.
///
/// The index of a token in the `tokens` output is its position, so
/// consecutive positions are adjacent words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Normalized form, the unit matching operates on.
    pub term: String,
    /// Byte offset of the word's first char in the source text.
    pub start: usize,
    /// Byte offset one past the word's last char in the source text.
    pub end: usize,
}

/// Fold a string for matching: lowercase, strip diacritics, collapse
/// whitespace.
///
/// Accented and unaccented forms must land on the same key in both
/// directions: a user typing "electrico" expects to hit a record titled
/// "Cepillo de dientes eléctrico", and one typing "eléctrico" expects to
/// hit records stored without the accent.
///
/// With the unicode-normalization feature the input is NFD-decomposed
/// first, combining marks are dropped, and the remainder is lowercased.
/// Without it only lowercasing applies, which is adequate for ASCII
/// corpora.
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Combining marks (Unicode category Mn) left over after NFD decomposition.
/// Dropping them is what turns "eléctrico" into "electrico". The Latin and
/// symbol blocks below cover the scripts the stemmers handle.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |
        '\u{1DC0}'..='\u{1DFF}' |
        '\u{20D0}'..='\u{20FF}' |
        '\u{FE20}'..='\u{FE2F}'
    )
}

/// Split text into tokens with source spans.
///
/// A word is a maximal run of alphanumeric chars; everything else is a
/// boundary and is discarded, so "-BAZZZ-" yields one token. Each word is
/// normalized independently, which produces the same term sequence as
/// folding the whole string first (boundaries are preserved by the fold).
/// Empty or punctuation-only input yields an empty `Vec`, never an error.
pub fn tokens(text: &str) -> Vec<Token> {
    let mut out = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        if c.is_alphanumeric() {
            start.get_or_insert(i);
        } else if let Some(s) = start.take() {
            push_token(&mut out, text, s, i);
        }
    }
    if let Some(s) = start {
        push_token(&mut out, text, s, text.len());
    }
    out
}

fn push_token(out: &mut Vec<Token>, text: &str, start: usize, end: usize) {
    let term = normalize(&text[start..end]);
    if !term.is_empty() {
        out.push(Token { term, start, end });
    }
}

/// The term sequence alone, for callers that only match and never
/// highlight.
pub fn tokenize(text: &str) -> Vec<String> {
    tokens(text).into_iter().map(|token| token.term).collect()
}
