//! Fixtures shared by the integration tests

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use serde_json::Value;

use phenopacket_tools::Ontology;

/// Path of a file in `tests/data`
pub fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

/// The small HPO subset of `tests/small.obo`
pub fn hpo() -> Arc<Ontology> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/small.obo");
    Arc::new(Ontology::from_file(path).unwrap())
}

/// The v2 Marfan phenopacket as JSON value
pub fn marfan() -> Value {
    let content = std::fs::read_to_string(data("v2-marfan.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

pub fn to_bytes(value: &Value) -> Vec<u8> {
    serde_json::to_vec(value).unwrap()
}
