//! Build, convert and validate [GA4GH phenopackets](https://phenopacket-schema.readthedocs.io/)
//!
//! The crate is organized in layers:
//!
//! - [`model`] holds the phenopacket schema (v1 and v2) as Rust types that
//!   can be encoded as protobuf, JSON or YAML
//! - [`builder`] contains fluent builders to assemble v2 messages from
//!   ontology codes, ISO 8601 durations and quantities
//! - [`converter`] converts v1 phenopackets into v2
//! - [`io`] detects, parses and prints the different serialization formats
//! - [`validator`] checks phenopackets against JSON schemas and semantic
//!   rules derived from the Human Phenotype Ontology ([`Ontology`])
//!
//! # Examples
//!
//! ```
//! use phenopacket_tools::builder::{MetaDataBuilder, PhenopacketBuilder, PhenotypicFeatureBuilder, Resources};
//!
//! let meta_data = MetaDataBuilder::builder("2022-04-17T10:35:00Z", "biocurator")
//!     .unwrap()
//!     .add_resource(Resources::hpo_version("2022-04-15"))
//!     .build();
//!
//! let phenopacket = PhenopacketBuilder::create("id.1", meta_data)
//!     .add_phenotypic_feature(PhenotypicFeatureBuilder::of("HP:0001166", "Arachnodactyly"))
//!     .build();
//!
//! assert_eq!(phenopacket.phenotypic_features.len(), 1);
//! ```
use std::num::ParseIntError;
use thiserror::Error;

pub mod builder;
pub mod converter;
pub mod io;
pub mod model;
mod ontology;
mod parser;
pub mod term;
pub mod validator;

pub use ontology::Ontology;
pub use term::{HpoGroup, HpoTerm, HpoTermId};

const DEFAULT_NUM_PARENTS: usize = 10;
const DEFAULT_NUM_ALL_PARENTS: usize = 30;
const DEFAULT_NUM_TERMS: usize = 20_000;

/// `HP:0000001 | All`
pub const ROOT_ID: HpoTermId = HpoTermId::from_u32(1);

/// `HP:0000118 | Phenotypic abnormality`
///
/// The direct children of this term are the top-level organ systems
pub const PHENOTYPE_ID: HpoTermId = HpoTermId::from_u32(118);

/// The schema version written into the `MetaData` of every v2 phenopacket
pub const PHENOPACKET_SCHEMA_VERSION: &str = "2.0";

/// Main Error type for this crate
#[derive(Error, Debug)]
pub enum PhenopacketError {
    /// The term does not exist in the ontology
    #[error("term does not exist")]
    DoesNotExist,
    /// Failed to parse an integer, e.g. the numerical part of a term id
    #[error("unable to parse Integer")]
    ParseIntError,
    /// The string is not a valid `HP:nnnnnnn` term id
    #[error("invalid HPO term id: {0}")]
    InvalidTermId(String),
    /// A file could not be opened or read
    #[error("cannot open file: {0}")]
    CannotOpenFile(String),
    /// The input data is malformed or incomplete
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The string is not a valid ISO 8601 duration
    #[error("invalid ISO 8601 duration: {0}")]
    InvalidDuration(String),
    /// The string is not a valid RFC 3339 timestamp or date
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
    /// Unknown serialization format
    #[error("unknown phenopacket format: {0}")]
    UnknownFormat(String),
    /// Unknown top-level element (phenopacket, family or cohort)
    #[error("unknown element: {0}")]
    UnknownElement(String),
    /// A JSON schema could not be compiled
    #[error("invalid JSON schema: {0}")]
    Schema(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Protobuf(#[from] prost::DecodeError),
}

impl From<ParseIntError> for PhenopacketError {
    fn from(_: ParseIntError) -> Self {
        PhenopacketError::ParseIntError
    }
}

/// Shortcut for `Result<T, PhenopacketError>`
pub type PxfResult<T> = Result<T, PhenopacketError>;
