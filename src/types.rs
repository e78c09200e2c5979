// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a suggestion index.
//!
//! These types define how records, postings, and hits fit together.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Posting**: `record < corpus.len()` and `position` is a token index
//!   within the tokenization of that record's field. Every posting is derived
//!   from the corpus at build time; nothing edits a posting afterwards.
//!
//! - **Record**: has at least one non-empty field. `RecordInput::into_record`
//!   is the only way to construct one, so the check cannot be skipped.
//!
//! - **Hit**: ephemeral. Recomputed on every search, never cached across
//!   queries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which textual field of a record a posting came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    Title,
    Text,
}

/// One occurrence of a stemmed token in the corpus.
///
/// `record` is the ingestion ordinal (index into the corpus `Vec`), not the
/// caller-supplied id. `position` counts tokens within the field, so postings
/// at positions `p` and `p + 1` in the same field are adjacent words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Posting {
    pub record: u32,
    pub field: Field,
    pub position: u32,
}

/// Caller-facing record shape, as accepted over the host boundary.
///
/// At least one of `title`/`text` must carry non-whitespace content.
/// `priority` biases ranking between otherwise-equal matches; it defaults
/// to zero. The `prio` alias matches the shorthand some hosts send.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordInput {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, alias = "prio")]
    pub priority: i64,
}

impl RecordInput {
    /// Validate and convert into a stored [`Record`].
    ///
    /// Fields are kept in title-then-text order; blank fields are dropped.
    /// A record with no usable field is rejected before any index mutation.
    pub fn into_record(self) -> Result<Record, IngestError> {
        let mut fields = Vec::with_capacity(2);
        if let Some(title) = self.title {
            if !title.trim().is_empty() {
                fields.push((Field::Title, title));
            }
        }
        if let Some(text) = self.text {
            if !text.trim().is_empty() {
                fields.push((Field::Text, text));
            }
        }
        if fields.is_empty() {
            return Err(IngestError::InvalidRecord { id: self.id });
        }
        Ok(Record {
            id: self.id,
            fields,
            priority: self.priority,
        })
    }
}

/// A stored record: validated input plus its textual fields.
///
/// Immutable once ingested. The ingestion ordinal is implicit in the record's
/// position within the corpus `Vec` and serves as the final ranking tie-break.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    pub fields: Vec<(Field, String)>,
    pub priority: i64,
}

/// One ranked search result.
///
/// `score` is a derived display value; the result ORDER is determined by the
/// lexicographic rank key in `ranking`, never by comparing these floats.
/// `highlighted` is the record's source text with matched words wrapped in
/// the engine's divider pair (plain text when nothing matched, as in the
/// browse listing).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    pub id: u64,
    pub score: f64,
    pub highlighted: String,
}

/// How a batch of records is applied to the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestMode {
    /// Add to the existing corpus.
    Append,
    /// Discard the prior corpus and index entirely before building anew.
    Replace,
}

/// Ingestion-time rejection. The corpus is untouched when one is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    /// Record carries no non-empty text field.
    InvalidRecord { id: u64 },
    /// Record id already present in the batch or, on Append, in the corpus.
    DuplicateId { id: u64 },
}

impl fmt::Display for IngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestError::InvalidRecord { id } => {
                write!(f, "record {id} has no non-empty text field")
            }
            IngestError::DuplicateId { id } => {
                write!(f, "record id {id} is already present")
            }
        }
    }
}

impl std::error::Error for IngestError {}
