// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The engine facade: one corpus, one index, one configured language.
//!
//! # Atomic swap on rebuild
//!
//! Ingestion builds the replacement corpus and index fully off to the side,
//! then publishes both under the write lock in one step. A search snapshots
//! the published `Arc`s under the read lock and computes lock-free from
//! there, so concurrent readers observe either the fully-old or the
//! fully-new corpus, never a partially-rebuilt one. Concurrent writers are
//! outside the contract (single-writer model); concurrent readers are not.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::highlight::HighlightStyle;
use crate::index::InvertedIndex;
use crate::lang::Language;
use crate::query;
use crate::ranking::{self, DEFAULT_RESULT_LIMIT};
use crate::types::{Hit, IngestError, IngestMode, Record, RecordInput};

/// Published engine state. Replaced wholesale on ingestion.
struct EngineState {
    language: Language,
    highlight: HighlightStyle,
    corpus: Arc<Vec<Record>>,
    index: Arc<InvertedIndex>,
}

/// In-process suggestion engine.
///
/// Owns exactly one index at a time. All methods take `&self`; sharing an
/// engine across threads for reads is safe, and a rebuild never tears an
/// in-flight search.
pub struct Engine {
    state: RwLock<EngineState>,
    limit: usize,
}

impl Engine {
    /// Engine with the default result limit.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_RESULT_LIMIT)
    }

    /// Engine returning at most `limit` hits per search.
    pub fn with_limit(limit: usize) -> Self {
        Engine {
            state: RwLock::new(EngineState {
                language: Language::Identity,
                highlight: HighlightStyle::default(),
                corpus: Arc::new(Vec::new()),
                index: Arc::new(InvertedIndex::empty()),
            }),
            limit,
        }
    }

    /// Set the stemming language for subsequent builds.
    ///
    /// Returns the effective language: unknown tags fall back to
    /// [`Language::Identity`] rather than failing, so the caller can warn.
    /// Already-indexed records are NOT re-stemmed; re-ingest (`Replace`) to
    /// keep query-side and index-side stemming consistent after a change.
    pub fn set_language(&self, tag: &str) -> Language {
        let language = Language::from_tag(tag);
        self.state.write().language = language;
        language
    }

    /// Currently configured language.
    pub fn language(&self) -> Language {
        self.state.read().language
    }

    /// Set the divider pair wrapped around matched words in `Hit::highlighted`.
    /// Defaults to square brackets. Applies to subsequent searches.
    pub fn highlight_with(&self, left: &str, right: &str) {
        self.state.write().highlight = HighlightStyle::new(left, right);
    }

    /// Ingest a batch of records.
    ///
    /// All-or-nothing: every record is validated (non-empty text, unique id)
    /// before any committed state changes, so a failed batch leaves the
    /// prior corpus fully intact. `Append` rebuilds over old + new records;
    /// `Replace` builds over the new batch alone. Either way the replacement
    /// is published atomically.
    pub fn ingest(&self, records: Vec<RecordInput>, mode: IngestMode) -> Result<(), IngestError> {
        let (language, existing) = {
            let state = self.state.read();
            (state.language, Arc::clone(&state.corpus))
        };

        let mut corpus: Vec<Record> = match mode {
            IngestMode::Append => existing.as_ref().clone(),
            IngestMode::Replace => Vec::new(),
        };
        let mut seen: HashSet<u64> = corpus.iter().map(|r| r.id).collect();

        for input in records {
            let record = input.into_record()?;
            if !seen.insert(record.id) {
                return Err(IngestError::DuplicateId { id: record.id });
            }
            corpus.push(record);
        }

        let index = InvertedIndex::build(&corpus, language);
        let corpus = Arc::new(corpus);
        let index = Arc::new(index);

        let mut state = self.state.write();
        state.corpus = corpus;
        state.index = index;
        Ok(())
    }

    /// `Append`-mode ingestion, named as hosts know it.
    pub fn add_records(&self, records: Vec<RecordInput>) -> Result<(), IngestError> {
        self.ingest(records, IngestMode::Append)
    }

    /// `Replace`-mode ingestion, named as hosts know it.
    pub fn set_records(&self, records: Vec<RecordInput>) -> Result<(), IngestError> {
        self.ingest(records, IngestMode::Replace)
    }

    /// Search the corpus. Never fails.
    ///
    /// Empty or punctuation-only queries return the whole corpus ordered by
    /// priority then ingestion order, capped at the limit: the "browse"
    /// case for showing top suggestions before the user types. Searching an
    /// empty corpus returns an empty list.
    pub fn search(&self, query: &str) -> Vec<Hit> {
        let (language, style, corpus, index) = {
            let state = self.state.read();
            (
                state.language,
                state.highlight.clone(),
                Arc::clone(&state.corpus),
                Arc::clone(&state.index),
            )
        };

        let matches = query::process(query, &index, language);
        ranking::rank(&matches, &corpus, self.limit, &style)
    }

    /// Number of records in the current corpus.
    pub fn len(&self) -> usize {
        self.state.read().corpus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of hits a search returns.
    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
