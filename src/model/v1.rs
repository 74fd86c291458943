//! Phenopacket schema v1
//!
//! Only used as input for the [`converter`](crate::converter). Messages
//! that did not change between the versions are shared with [`v2`](super::v2).

mod base;
mod biosamples;
mod genome;
mod phenopacket;

pub use base::*;
pub use biosamples::*;
pub use genome::*;
pub use phenopacket::*;

pub use super::v2::{KaryotypicSex, OntologyClass, Pedigree, Resource, Sex, Update};
