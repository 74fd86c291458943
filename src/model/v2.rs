//! Phenopacket schema v2
//!
//! The messages of `org.phenopackets.schema.v2` and the VRSATILE
//! descriptors they use, flattened into one namespace.

mod base;
mod biosample;
mod disease;
mod individual;
mod interpretations;
mod measurements;
mod medical_actions;
mod meta_data;
mod pedigrees;
mod phenopacket;
mod phenotypic_feature;
mod vrsatile;

pub use base::*;
pub use biosample::*;
pub use disease::*;
pub use individual::*;
pub use interpretations::*;
pub use measurements::*;
pub use medical_actions::*;
pub use meta_data::*;
pub use pedigrees::*;
pub use phenopacket::*;
pub use phenotypic_feature::*;
pub use vrsatile::*;
