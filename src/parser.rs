//! Parsing the HPO master data provided by the Human Phenotype Ontology project

/// Module to parse `hp.obo` files
pub(crate) mod hp_obo;

/// Module to parse `hp.json` OBO Graphs files
pub(crate) mod obographs;
