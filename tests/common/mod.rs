//! Shared test fixtures.

#![allow(dead_code)]

use suggesto::{Engine, Hit, RecordInput};

/// Text-only record with default priority.
pub fn text_record(id: u64, text: &str) -> RecordInput {
    RecordInput {
        id,
        title: None,
        text: Some(text.to_string()),
        priority: 0,
    }
}

/// Title-only record with default priority.
pub fn title_record(id: u64, title: &str) -> RecordInput {
    RecordInput {
        id,
        title: Some(title.to_string()),
        text: None,
        priority: 0,
    }
}

/// Text record with an explicit priority.
pub fn prio_record(id: u64, text: &str, priority: i64) -> RecordInput {
    RecordInput {
        id,
        title: None,
        text: Some(text.to_string()),
        priority,
    }
}

/// The three-record corpus from the suggestion-engine smoke scenario.
pub fn basic_corpus() -> Vec<RecordInput> {
    vec![
        text_record(10, "Hello world!"),
        text_record(20, "Foo bar"),
        text_record(30, "-BAZZZ-"),
    ]
}

/// Spanish product-title corpus.
pub fn spanish_corpus() -> Vec<RecordInput> {
    vec![
        title_record(10, "Pack de 24 pilas alcalinas AA"),
        title_record(20, "Cable de USB A a Lightning"),
        title_record(30, "Cepillo de dientes eléctrico"),
        title_record(40, "Deshumidificador Eléctrico portátil"),
    ]
}

/// Engine pre-loaded with [`basic_corpus`].
pub fn basic_engine() -> Engine {
    let engine = Engine::new();
    engine.set_records(basic_corpus()).unwrap();
    engine
}

/// Engine configured for Spanish and pre-loaded with [`spanish_corpus`].
pub fn spanish_engine() -> Engine {
    let engine = Engine::new();
    engine.set_language("es");
    engine.set_records(spanish_corpus()).unwrap();
    engine
}

/// Ids in rank order.
pub fn hit_ids(hits: &[Hit]) -> Vec<u64> {
    hits.iter().map(|h| h.id).collect()
}
