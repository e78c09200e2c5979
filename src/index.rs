//! Inverted index construction and lookup.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **BUCKET_ORDER**: Postings within a bucket are in ingestion order
//!    (record ordinal, then field, then position) because records are
//!    processed in corpus order and positions ascend within a field.
//! 2. **NON_EMPTY**: Every key has at least one posting.
//! 3. **POSTING_WELLFORMED**: Every posting's `record` is a valid corpus
//!    ordinal and its `position` is a valid token index for that field.
//! 4. **IMMUTABLE**: An index is never mutated after `build`; rebuilds
//!    produce a fresh instance that the engine swaps into place.

use std::collections::BTreeMap;
use std::ops::Bound;

use crate::lang::Language;
use crate::normalize::tokenize;
use crate::types::{Posting, Record};

/// In-memory inverted index over stemmed tokens.
///
/// Keys live in a `BTreeMap` so prefix lookup is an ordered range scan
/// rather than a full key walk. Buckets hold plain postings; record
/// metadata (raw text, priority) stays in the corpus `Vec` the engine owns,
/// keeping the hot lookup path compact.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    terms: BTreeMap<String, Vec<Posting>>,
    record_count: usize,
}

impl InvertedIndex {
    /// An index over zero records. All lookups return empty, never an error.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build an index over the whole corpus with the given language.
    ///
    /// Records are processed in input order; each token of each field
    /// yields exactly one posting keyed by its stem. Deterministic: the
    /// same corpus and language always produce the same index.
    pub fn build(records: &[Record], language: Language) -> Self {
        let stemmer = language.stemmer();
        let mut terms: BTreeMap<String, Vec<Posting>> = BTreeMap::new();

        for (ordinal, record) in records.iter().enumerate() {
            for (field, raw) in &record.fields {
                for (position, token) in tokenize(raw).iter().enumerate() {
                    let stem = stemmer.stem(token).into_owned();
                    terms.entry(stem).or_default().push(Posting {
                        record: ordinal as u32,
                        field: *field,
                        position: position as u32,
                    });
                }
            }
        }

        InvertedIndex {
            terms,
            record_count: records.len(),
        }
    }

    /// Postings for the exact key, empty if absent.
    pub fn lookup_exact(&self, stem: &str) -> &[Posting] {
        self.terms.get(stem).map_or(&[], Vec::as_slice)
    }

    /// All `(key, postings)` pairs whose key has `stem` as a prefix,
    /// including the exact key itself, in key order.
    ///
    /// This is what makes a query token match longer indexed tokens for
    /// as-you-type search ("ba" reaches "bar" and "bazzz").
    pub fn lookup_prefix<'a>(
        &'a self,
        stem: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a [Posting])> {
        self.terms
            .range::<str, _>((Bound::Included(stem), Bound::Unbounded))
            .take_while(move |(key, _)| key.starts_with(stem))
            .map(|(key, postings)| (key.as_str(), postings.as_slice()))
    }

    /// Number of records the index was built over.
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// Number of distinct stems.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}
