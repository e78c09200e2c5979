//! Engine lifecycle: ingestion modes, validation, rebuild atomicity under
//! concurrent readers, and the JSON record-file shape the CLI host loads.

mod common;

use std::collections::HashSet;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use common::{basic_corpus, hit_ids, text_record};
use suggesto::{Engine, IngestError, IngestMode, RecordInput};

// ============================================================================
// INGESTION
// ============================================================================

#[test]
fn append_keeps_existing_records() {
    let engine = Engine::new();
    engine.set_records(basic_corpus()).unwrap();
    engine.add_records(vec![text_record(40, "fresh entry")]).unwrap();

    assert_eq!(hit_ids(&engine.search("")), vec![10, 20, 30, 40]);
}

#[test]
fn replace_discards_existing_records() {
    let engine = Engine::new();
    engine.set_records(basic_corpus()).unwrap();
    engine
        .ingest(vec![text_record(99, "only survivor")], IngestMode::Replace)
        .unwrap();

    assert_eq!(hit_ids(&engine.search("")), vec![99]);
    assert!(engine.search("foo").is_empty());
}

#[test]
fn invalid_record_rejects_whole_batch() {
    let engine = Engine::new();
    engine.set_records(basic_corpus()).unwrap();

    let result = engine.add_records(vec![
        text_record(40, "fine"),
        RecordInput {
            id: 41,
            title: None,
            text: None,
            priority: 0,
        },
    ]);
    assert_eq!(result, Err(IngestError::InvalidRecord { id: 41 }));

    // Nothing from the failed batch is visible, including the valid record.
    assert_eq!(hit_ids(&engine.search("")), vec![10, 20, 30]);
    assert!(engine.search("fine").is_empty());
}

#[test]
fn duplicate_id_within_batch_rejects_whole_batch() {
    let engine = Engine::new();
    let result = engine.set_records(vec![text_record(1, "a"), text_record(1, "b")]);
    assert_eq!(result, Err(IngestError::DuplicateId { id: 1 }));
    assert!(engine.is_empty());
}

#[test]
fn duplicate_id_against_corpus_rejects_append() {
    let engine = Engine::new();
    engine.set_records(basic_corpus()).unwrap();

    let result = engine.add_records(vec![text_record(20, "shadow")]);
    assert_eq!(result, Err(IngestError::DuplicateId { id: 20 }));
    assert_eq!(engine.len(), 3);
}

#[test]
fn replace_may_reuse_ids_from_the_old_corpus() {
    let engine = Engine::new();
    engine.set_records(basic_corpus()).unwrap();
    engine.set_records(vec![text_record(10, "new ten")]).unwrap();

    assert_eq!(hit_ids(&engine.search("")), vec![10]);
}

// ============================================================================
// REBUILD ATOMICITY
// ============================================================================

/// Concurrent searches during Replace ingestion must each observe either the
/// fully-old or fully-new corpus, never a mix.
#[test]
fn concurrent_searches_see_old_or_new_corpus_never_a_mix() {
    let engine = Arc::new(Engine::new());

    let old_ids: Vec<u64> = vec![1, 2, 3];
    let new_ids: Vec<u64> = vec![101, 102, 103];
    let old_set: HashSet<u64> = old_ids.iter().copied().collect();
    let new_set: HashSet<u64> = new_ids.iter().copied().collect();

    let old_batch: Vec<RecordInput> =
        old_ids.iter().map(|&id| text_record(id, "alpha corpus")).collect();
    let new_batch: Vec<RecordInput> =
        new_ids.iter().map(|&id| text_record(id, "omega corpus")).collect();

    engine.set_records(old_batch.clone()).unwrap();

    let done = Arc::new(AtomicBool::new(false));
    let mut readers = Vec::new();
    for _ in 0..4 {
        let engine = Arc::clone(&engine);
        let done = Arc::clone(&done);
        let old_set = old_set.clone();
        let new_set = new_set.clone();
        readers.push(thread::spawn(move || {
            while !done.load(Ordering::Relaxed) {
                let ids = hit_ids(&engine.search(""));
                assert!(!ids.is_empty(), "corpus is never empty mid-swap");
                let all_old = ids.iter().all(|id| old_set.contains(id));
                let all_new = ids.iter().all(|id| new_set.contains(id));
                assert!(
                    all_old || all_new,
                    "observed a torn corpus: {ids:?}"
                );
            }
        }));
    }

    for _ in 0..50 {
        engine.set_records(new_batch.clone()).unwrap();
        engine.set_records(old_batch.clone()).unwrap();
    }
    done.store(true, Ordering::Relaxed);
    for reader in readers {
        reader.join().unwrap();
    }
}

// ============================================================================
// HOST RECORD FILE
// ============================================================================

/// The JSON array shape the CLI host feeds into `set_records`, including the
/// `prio` alias and optional fields.
#[test]
fn record_file_round_trips_through_ingestion() {
    let json = r#"[
        {"id": 10, "text": "Hello world!"},
        {"id": 20, "title": "Foo bar", "prio": 1},
        {"id": 30, "text": "-BAZZZ-", "priority": 2}
    ]"#;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let raw = std::fs::read_to_string(file.path()).unwrap();
    let inputs: Vec<RecordInput> = serde_json::from_str(&raw).unwrap();

    let engine = Engine::new();
    engine.set_records(inputs).unwrap();

    // Browse order reflects the priorities carried through both spellings.
    assert_eq!(hit_ids(&engine.search("")), vec![30, 20, 10]);
}

// ============================================================================
// HIGHLIGHTING
// ============================================================================

#[test]
fn hits_wrap_matched_words_with_default_dividers() {
    let engine = Engine::new();
    engine.set_records(basic_corpus()).unwrap();

    let hits = engine.search("hello");
    assert_eq!(hits[0].highlighted, "[Hello] world!");
}

#[test]
fn highlight_preserves_surrounding_punctuation() {
    let engine = Engine::new();
    engine.set_records(basic_corpus()).unwrap();

    let hits = engine.search("baz");
    assert_eq!(hits[0].highlighted, "-[BAZZZ]-");
}

#[test]
fn custom_dividers_apply_to_subsequent_searches() {
    let engine = Engine::new();
    engine.set_records(basic_corpus()).unwrap();
    engine.highlight_with("<em>", "</em>");

    let hits = engine.search("foo bar");
    assert_eq!(hits[0].highlighted, "<em>Foo</em> <em>bar</em>");
}

#[test]
fn browse_hits_carry_unmarked_text() {
    let engine = Engine::new();
    engine.set_records(basic_corpus()).unwrap();

    let hits = engine.search("");
    let highlighted: Vec<&str> = hits.iter().map(|h| h.highlighted.as_str()).collect();
    assert_eq!(highlighted, vec!["Hello world!", "Foo bar", "-BAZZZ-"]);
}
