//! Shared helpers for unit tests.
#![cfg(test)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use serde_json::Value;

use crate::input::LangSource;
use crate::store::TranslationStore;

/// Wraps an in-memory JSON object as a successfully loaded lang file.
///
/// The path is derived from the `identifier` field so diagnostics stay readable.
pub(crate) fn create_source(document: Value) -> LangSource {
    let name = document.get("identifier").and_then(Value::as_str).unwrap_or("unnamed").to_string();
    let Value::Object(map) = document else {
        panic!("lang document must be a JSON object");
    };
    LangSource::new(format!("lang/{name}.json"), Ok(map))
}

/// Builds a default-configured store from in-memory lang documents.
pub(crate) fn create_store(fallback: &str, documents: Vec<Value>) -> TranslationStore {
    let mut store = TranslationStore::default();
    store
        .initialize(fallback, documents.into_iter().map(create_source))
        .expect("test translations should initialize");
    store
}
