//! In-process search-as-you-type suggestion engine.
//!
//! Given a small-to-medium corpus of short records (titles, product names,
//! labels), return a ranked list of records matching a free-text query,
//! tolerant of partial words, prefixes, word order, and per-language
//! morphological variation. Built for per-keystroke re-ranking: no external
//! index server, no I/O on the query path.
//!
//! # Architecture
//!
//! ```text
//! ingestion:  records ──▶ normalize.rs ──▶ lang.rs ──▶ index.rs
//!                         (tokenize)       (stem)      (postings)
//!
//! query:      string ──▶ normalize.rs ──▶ lang.rs ──▶ query.rs ──▶ ranking.rs
//!                                                     (match        (order,
//!                                                      descriptors)  truncate)
//!
//!             engine.rs owns one corpus + one index behind an RwLock and
//!             publishes rebuilds by atomic swap.
//! ```
//!
//! # Usage
//!
//! ```
//! use suggesto::{Engine, RecordInput};
//!
//! let engine = Engine::new();
//! engine.set_language("es");
//! engine
//!     .set_records(vec![RecordInput {
//!         id: 10,
//!         title: Some("Pack de 24 pilas alcalinas AA".to_string()),
//!         text: None,
//!         priority: 0,
//!     }])
//!     .unwrap();
//!
//! let hits = engine.search("alcalino ");
//! assert_eq!(hits[0].id, 10);
//! ```

// Module declarations
mod engine;
mod highlight;
mod index;
mod lang;
mod normalize;
mod query;
mod ranking;
mod types;

// Re-exports for public API
pub use engine::Engine;
pub use highlight::{highlight, HighlightStyle};
pub use index::InvertedIndex;
pub use lang::{LangStemmer, Language};
pub use normalize::{normalize, tokenize, tokens, Token};
pub use query::{process, MatchDescriptor, MatchKind, QueryMatches};
pub use ranking::{rank, DEFAULT_RESULT_LIMIT};
pub use types::{Field, Hit, IngestError, IngestMode, Posting, Record, RecordInput};
