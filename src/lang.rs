//! Per-language stemming.
//!
//! A [`Language`] tag selects the Snowball suffix-stripping algorithm used
//! for both indexing and querying. Unknown tags fall back to
//! [`Language::Identity`], which leaves tokens untouched, so the engine
//! degrades to plain prefix matching instead of failing.
//!
//! # Idempotence
//!
//! Re-stemming already-stemmed text must not drift:
//! `stem(stem(x)) == stem(x)`. Snowball stemmers converge on real tokens but
//! the tables do not promise a fixed point in one pass, so [`LangStemmer`]
//! iterates until the output is stable (bounded by [`MAX_STEM_PASSES`]).

use std::borrow::Cow;
use std::fmt;

use rust_stemmers::{Algorithm, Stemmer};

/// Upper bound on fixed-point iterations. Snowball stabilizes in one or two
/// passes in practice; the bound exists so a pathological table cannot spin.
const MAX_STEM_PASSES: usize = 4;

/// Stemming language configured on an engine instance.
///
/// A closed set, dispatched by tag, defaulting to `Identity` for unknown
/// tags. Changing the language on an engine affects subsequent index builds
/// only; already-indexed records are not retroactively re-stemmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// No stemming; tokens index and query as-is.
    #[default]
    Identity,
    English,
    German,
    Spanish,
    Portuguese,
    Russian,
}

impl Language {
    /// Parse a language tag. Returns `None` for unknown tags so callers can
    /// distinguish "unsupported" (warn and fall back) from "supported".
    pub fn parse(tag: &str) -> Option<Language> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Some(Language::English),
            "de" | "german" => Some(Language::German),
            "es" | "spanish" => Some(Language::Spanish),
            "pt" | "portuguese" => Some(Language::Portuguese),
            "ru" | "russian" => Some(Language::Russian),
            _ => None,
        }
    }

    /// Parse a language tag, falling back to `Identity` for unknown tags.
    ///
    /// This is the availability-over-strictness recovery for unsupported
    /// languages: matching degrades to unstemmed behavior, nothing fails.
    pub fn from_tag(tag: &str) -> Language {
        Language::parse(tag).unwrap_or(Language::Identity)
    }

    /// Canonical tag for this language.
    pub fn tag(self) -> &'static str {
        match self {
            Language::Identity => "identity",
            Language::English => "en",
            Language::German => "de",
            Language::Spanish => "es",
            Language::Portuguese => "pt",
            Language::Russian => "ru",
        }
    }

    fn algorithm(self) -> Option<Algorithm> {
        match self {
            Language::Identity => None,
            Language::English => Some(Algorithm::English),
            Language::German => Some(Algorithm::German),
            Language::Spanish => Some(Algorithm::Spanish),
            Language::Portuguese => Some(Algorithm::Portuguese),
            Language::Russian => Some(Algorithm::Russian),
        }
    }

    /// Build the stemmer for this language. Construct once per batch of
    /// tokens (index build, query parse) rather than per token.
    pub fn stemmer(self) -> LangStemmer {
        LangStemmer {
            inner: self.algorithm().map(Stemmer::create),
        }
    }

    /// Stem a single token. Convenience over [`Language::stemmer`] for
    /// one-off calls; batch callers should hold a `LangStemmer`.
    pub fn stem<'a>(self, token: &'a str) -> Cow<'a, str> {
        self.stemmer().stem(token)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A stemmer bound to one language; identity when the language has no
/// Snowball algorithm.
pub struct LangStemmer {
    inner: Option<Stemmer>,
}

impl LangStemmer {
    /// Reduce a token to its stem, iterating to a fixed point so that
    /// stemming is idempotent by construction.
    ///
    /// Expects normalized (lowercased) input; see `normalize::tokenize`.
    pub fn stem<'a>(&self, token: &'a str) -> Cow<'a, str> {
        let Some(stemmer) = &self.inner else {
            return Cow::Borrowed(token);
        };
        let mut current = stemmer.stem(token);
        for _ in 0..MAX_STEM_PASSES {
            let next = stemmer.stem(current.as_ref()).into_owned();
            if next == current.as_ref() {
                break;
            }
            current = Cow::Owned(next);
        }
        current
    }

    /// Whether this stemmer actually rewrites tokens.
    pub fn is_identity(&self) -> bool {
        self.inner.is_none()
    }
}
