// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query-time matching.
//!
//! A query runs through the same normalize → stem pipeline as indexed
//! records, then gathers candidates from the index and summarizes each one
//! as a [`MatchDescriptor`]. Matching is total: any query string, including
//! empty or punctuation-only input, yields a well-defined candidate set.
//!
//! Match semantics:
//! - OR across query tokens: one matching posting makes a record a
//!   candidate. Partial coverage ranks lower, it is never excluded.
//! - Each query token matches its exact stem AND any longer stem it
//!   prefixes, so a half-typed word still reaches its completions.
//! - An empty query (after normalization) is the "browse" case: every
//!   record is a candidate with an empty descriptor, and ranking falls
//!   through to priority then ingestion order.

use std::collections::HashMap;

use crate::index::InvertedIndex;
use crate::lang::Language;
use crate::normalize::tokenize;
use crate::types::Field;

/// How well one query token matched within a record.
///
/// Ordering matters: `Exact > Prefix > None`, and a token keeps the best
/// kind seen across all postings that matched it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchKind {
    None,
    Prefix,
    Exact,
}

/// Per-candidate match summary, the Ranker's sole textual input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchDescriptor {
    /// Corpus ordinal of the candidate record.
    pub record: u32,
    /// Query tokens matched by an identical indexed stem.
    pub exact: u32,
    /// Query tokens matched only as a prefix of a longer stem.
    pub prefix: u32,
    /// All query tokens matched, at consecutive positions of one field,
    /// in query order. A ranking signal, never a filter.
    pub phrase: bool,
    /// Matched (field, token position) pairs, deduplicated and sorted.
    /// Feeds highlighting; never consulted for ordering.
    pub matched: Vec<(Field, u32)>,
}

impl MatchDescriptor {
    /// Descriptor for the empty-query browse case: no textual signal.
    fn browse(record: u32) -> Self {
        MatchDescriptor {
            record,
            exact: 0,
            prefix: 0,
            phrase: false,
            matched: Vec::new(),
        }
    }
}

/// Candidate set for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryMatches {
    /// Query tokens after normalization and stemming. Empty means browse.
    pub tokens: Vec<String>,
    /// Candidates in corpus-ordinal order (ranking re-orders them).
    pub candidates: Vec<MatchDescriptor>,
}

/// Per-record accumulator while postings stream in.
struct Accum {
    kinds: Vec<MatchKind>,
    positions: Vec<Vec<(Field, u32)>>,
}

impl Accum {
    fn new(token_count: usize) -> Self {
        Accum {
            kinds: vec![MatchKind::None; token_count],
            positions: vec![Vec::new(); token_count],
        }
    }

    fn into_descriptor(self, record: u32) -> MatchDescriptor {
        let exact = self.kinds.iter().filter(|k| **k == MatchKind::Exact).count() as u32;
        let prefix = self
            .kinds
            .iter()
            .filter(|k| **k == MatchKind::Prefix)
            .count() as u32;
        let all_matched = self.kinds.iter().all(|k| *k != MatchKind::None);
        let phrase = all_matched && has_consecutive_chain(&self.positions);

        // Two query tokens can match the same posting; highlight each word
        // once.
        let mut matched: Vec<(Field, u32)> = self.positions.into_iter().flatten().collect();
        matched.sort_unstable();
        matched.dedup();

        MatchDescriptor {
            record,
            exact,
            prefix,
            phrase,
            matched,
        }
    }
}

/// Whether some field contains the matched tokens at consecutive positions
/// in query order: token `i` at position `p + i` for a common start `p`.
fn has_consecutive_chain(positions: &[Vec<(Field, u32)>]) -> bool {
    let Some(first) = positions.first() else {
        return false;
    };
    first.iter().any(|&(field, start)| {
        positions[1..]
            .iter()
            .enumerate()
            .all(|(i, later)| later.contains(&(field, start + i as u32 + 1)))
    })
}

/// Normalize and stem `query`, then gather candidates from `index`.
///
/// Uses the engine's currently configured language. If the language changed
/// after the index was built, query-side and index-side stems diverge and
/// match quality degrades until the caller re-ingests; that inconsistency is
/// documented, not silently repaired.
pub fn process(query: &str, index: &InvertedIndex, language: Language) -> QueryMatches {
    let stemmer = language.stemmer();
    let tokens: Vec<String> = tokenize(query)
        .iter()
        .map(|token| stemmer.stem(token).into_owned())
        .collect();

    if tokens.is_empty() {
        // Browse: list the whole corpus, ordering left to the ranker.
        let candidates = (0..index.record_count())
            .map(|ordinal| MatchDescriptor::browse(ordinal as u32))
            .collect();
        return QueryMatches { tokens, candidates };
    }

    let mut accums: HashMap<u32, Accum> = HashMap::new();
    for (i, stem) in tokens.iter().enumerate() {
        for (key, postings) in index.lookup_prefix(stem) {
            let kind = if key == stem {
                MatchKind::Exact
            } else {
                MatchKind::Prefix
            };
            for posting in postings {
                let accum = accums
                    .entry(posting.record)
                    .or_insert_with(|| Accum::new(tokens.len()));
                if kind > accum.kinds[i] {
                    accum.kinds[i] = kind;
                }
                accum.positions[i].push((posting.field, posting.position));
            }
        }
    }

    let mut candidates: Vec<MatchDescriptor> = accums
        .into_iter()
        .map(|(record, accum)| accum.into_descriptor(record))
        .collect();
    // HashMap iteration order is arbitrary; restore corpus order so the
    // ranker's final tie-break is meaningful.
    candidates.sort_by_key(|c| c.record);

    QueryMatches { tokens, candidates }
}
