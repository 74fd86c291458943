//! Semantic validators based on the Human Phenotype Ontology
//!
//! All validators hold a shared reference to the [`Ontology`](crate::Ontology)
//! and work on any [`PhenopacketContainer`](crate::model::PhenopacketContainer),
//! so the same validator checks a phenopacket, each member of a family
//! or each member of a cohort.
mod ancestry;
mod hpo;
mod orgsys;
mod util;

pub use ancestry::HpoAncestryValidator;
pub use hpo::HpoPhenotypeValidator;
pub use orgsys::OrganSystemValidator;
pub use util::{partition_by_exclusion_status, FeaturesByExclusionStatus};
