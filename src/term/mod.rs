//! [`HpoTerm`]s are the fundamental entities of the HPO, linked to each
//! other through `is_a` relationships.
//!
//! The validators only ever need ids and ancestry, so terms carry their
//! direct parents, the cached transitive closure of all ancestors,
//! direct children, alternative ids and obsolescence information.

use crate::Ontology;

mod group;
mod hpoterm;
mod hpotermid;
pub(crate) mod internal;

pub use group::{HpoGroup, HpoTermIds};
pub use hpoterm::HpoTerm;
pub use hpotermid::HpoTermId;

/// The direct or indirect parents of a term
pub type HpoParents = HpoGroup;

/// The direct children of a term
pub type HpoChildren = HpoGroup;

/// An iterator of [`HpoTerm`]s built from a group of [`HpoTermId`]s
///
/// Ids that are not present in the [`Ontology`] are skipped.
pub struct HpoTerms<'a> {
    ontology: &'a Ontology,
    group: HpoTermIds<'a>,
}

impl<'a> HpoTerms<'a> {
    /// Returns a new [`HpoTerms`]
    pub fn new(group: &'a HpoGroup, ontology: &'a Ontology) -> Self {
        HpoTerms {
            group: group.iter(),
            ontology,
        }
    }
}

impl<'a> Iterator for HpoTerms<'a> {
    type Item = HpoTerm<'a>;
    fn next(&mut self) -> Option<Self::Item> {
        for id in self.group.by_ref() {
            if let Some(term) = self.ontology.get(id) {
                return Some(HpoTerm::new(self.ontology, term));
            }
        }
        None
    }
}

impl std::fmt::Debug for HpoTerms<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HpoTerms")
    }
}
