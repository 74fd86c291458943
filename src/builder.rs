//! Fluent builders for v2 phenopacket messages
//!
//! Each builder consumes and returns `self`, so that a message can be
//! assembled in a single expression. Builders whose scalar input may be
//! malformed, e.g. an ISO 8601 duration or an RFC 3339 timestamp, return
//! a [`PxfResult`](crate::PxfResult).
//!
//! Most builders offer two entry points: `of` directly returns the message
//! with only the required fields set, `builder` returns the builder itself
//! for further customization.
//!
//! ```
//! use phenopacket_tools::builder::{constants, PhenotypicFeatureBuilder, TimeElements};
//!
//! let feature = PhenotypicFeatureBuilder::builder("HP:0000568", "Microphthalmia")
//!     .onset(TimeElements::gestational_age(27, 2))
//!     .add_modifier(constants::laterality::right())
//!     .excluded()
//!     .build();
//!
//! assert!(feature.excluded);
//! assert_eq!(feature.modifiers[0].label, "Right");
//! ```
use crate::model::v2::{GeneDescriptor, OntologyClass};

pub mod constants;
mod biosample;
mod disease;
mod evidence;
mod individual;
mod interpretation;
mod measurement;
mod medical_action;
mod meta_data;
mod phenopacket;
mod phenotypic_feature;
mod time;

pub use biosample::BiosampleBuilder;
pub use disease::DiseaseBuilder;
pub use evidence::{EvidenceBuilder, ExternalReferenceBuilder};
pub use individual::{IndividualBuilder, VitalStatusBuilder};
pub use interpretation::{
    DiagnosisBuilder, GenomicInterpretationBuilder, InterpretationBuilder,
    VariationDescriptorBuilder,
};
pub use measurement::{
    ComplexValueBuilder, MeasurementBuilder, QuantityBuilder, ReferenceRangeBuilder,
    TypedQuantityBuilder, ValueBuilder,
};
pub use medical_action::{
    DoseIntervalBuilder, MedicalActionBuilder, ProcedureBuilder, TreatmentBuilder,
};
pub use meta_data::{MetaDataBuilder, Resources};
pub use phenopacket::{CohortBuilder, FamilyBuilder, FileBuilder, PhenopacketBuilder};
pub use phenotypic_feature::PhenotypicFeatureBuilder;
pub use time::{Ages, TimeElements};

/// Shortcut for [`OntologyClass::new`]
pub fn ontology_class<S: Into<String>, T: Into<String>>(id: S, label: T) -> OntologyClass {
    OntologyClass::new(id, label)
}

/// A gene by its id and symbol, e.g. `HGNC:3603 | FBN1`
pub fn gene_descriptor<S: Into<String>, T: Into<String>>(value_id: S, symbol: T) -> GeneDescriptor {
    GeneDescriptor {
        value_id: value_id.into(),
        symbol: symbol.into(),
        ..Default::default()
    }
}
