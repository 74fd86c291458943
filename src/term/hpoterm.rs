use crate::term::internal::{HpoTermInternal, TermStatus};
use crate::term::{HpoChildren, HpoGroup, HpoParents, HpoTerms};
use crate::HpoTermId;
use crate::Ontology;
use crate::{PhenopacketError, PxfResult};

/// A single term of the HPO, borrowed from its [`Ontology`]
///
/// ```
/// use phenopacket_tools::Ontology;
///
/// let ontology = Ontology::from_file("tests/small.obo").unwrap();
/// let hypertelorism = ontology.hpo(316u32).unwrap();
///
/// // Hypertelorism is a facial and an ocular abnormality
/// let parents: Vec<&str> = hypertelorism.parents().map(|term| term.name()).collect();
/// assert_eq!(parents, vec!["Abnormality of the face", "Abnormality of the eye"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HpoTerm<'a> {
    term: &'a HpoTermInternal,
    ontology: &'a Ontology,
}

impl<'a> HpoTerm<'a> {
    /// # Errors
    ///
    /// [`PhenopacketError::DoesNotExist`] if `term` is not a primary id
    /// of the ontology
    pub fn try_new(ontology: &'a Ontology, term: &HpoTermId) -> PxfResult<HpoTerm<'a>> {
        let term = ontology.get(*term).ok_or(PhenopacketError::DoesNotExist)?;
        Ok(HpoTerm::new(ontology, term))
    }

    pub(crate) fn new(ontology: &'a Ontology, term: &'a HpoTermInternal) -> HpoTerm<'a> {
        HpoTerm { term, ontology }
    }

    /// e.g. `HP:0000478`
    pub fn id(&self) -> &'a HpoTermId {
        self.term.id()
    }

    /// e.g. `Abnormality of the eye`
    pub fn name(&self) -> &'a str {
        self.term.name()
    }

    pub fn parents(&self) -> HpoTerms<'a> {
        HpoTerms::new(self.term.parents(), self.ontology)
    }

    pub fn children(&self) -> HpoTerms<'a> {
        HpoTerms::new(self.term.children(), self.ontology)
    }

    pub fn parent_ids(&self) -> &'a HpoParents {
        self.term.parents()
    }

    pub fn children_ids(&self) -> &'a HpoChildren {
        self.term.children()
    }

    /// The ids of all direct and indirect parents, up to the root
    pub fn all_parent_ids(&self) -> &'a HpoParents {
        self.term.ancestors()
    }

    pub fn all_parents(&self) -> HpoTerms<'a> {
        HpoTerms::new(self.term.ancestors(), self.ontology)
    }

    /// The ids that were merged into this term
    pub fn alt_ids(&self) -> &'a HpoGroup {
        self.term.alt_ids()
    }

    pub fn is_obsolete(&self) -> bool {
        matches!(self.term.status(), TermStatus::Obsolete { .. })
    }

    /// The term that replaces this obsolete term, if one is declared
    pub fn replaced_by(&self) -> Option<HpoTermId> {
        match self.term.status() {
            TermStatus::Obsolete { replaced_by } => replaced_by,
            TermStatus::Current => None,
        }
    }

    /// Returns `true` if `other` is a direct or indirect parent of `self`
    pub fn child_of(&self, other: &HpoTerm) -> bool {
        self.all_parent_ids().contains(other.id())
    }

    /// Returns `true` if `other` is a direct or indirect child of `self`
    pub fn parent_of(&self, other: &HpoTerm) -> bool {
        other.child_of(self)
    }
}

impl PartialEq for HpoTerm<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for HpoTerm<'_> {}

#[cfg(test)]
mod test {
    use crate::{HpoTermId, Ontology};

    fn ontology() -> Ontology {
        Ontology::from_obo_str(include_str!("../../tests/small.obo")).unwrap()
    }

    #[test]
    fn parents_and_children() {
        let ont = ontology();
        let eye = ont.hpo("HP:0000478".parse::<HpoTermId>().unwrap()).unwrap();
        assert_eq!(eye.name(), "Abnormality of the eye");
        assert!(eye.parent_ids().contains(&crate::PHENOTYPE_ID));
        assert!(eye.children_ids().contains(&HpoTermId::from(518u32)));
        assert_eq!(eye.parents().count(), 1);
        assert_eq!(eye.children().count(), 3);
    }

    #[test]
    fn ancestry() {
        let ont = ontology();
        let microphthalmia = ont.hpo(568u32).unwrap();
        let eye = ont.hpo(478u32).unwrap();

        assert!(microphthalmia.child_of(&eye));
        assert!(eye.parent_of(&microphthalmia));
        assert!(!eye.child_of(&microphthalmia));
        assert!(!eye.child_of(&eye));

        let ancestors: Vec<&str> = microphthalmia.all_parents().map(|term| term.name()).collect();
        assert_eq!(
            ancestors,
            vec![
                "All",
                "Phenotypic abnormality",
                "Abnormality of the eye",
                "Abnormality of globe size"
            ]
        );
    }

    #[test]
    fn obsolete_term() {
        let ont = ontology();
        let term = ont.hpo(284u32).unwrap();
        assert!(term.is_obsolete());
        assert_eq!(term.replaced_by(), Some(HpoTermId::from(478u32)));

        let current = ont.hpo(478u32).unwrap();
        assert!(!current.is_obsolete());
        assert_eq!(current.replaced_by(), None);
    }

    #[test]
    fn alternative_ids() {
        let ont = ontology();
        let term = ont.hpo(6u32).unwrap();
        assert_eq!(term.alt_ids().len(), 2);
        assert!(term.alt_ids().contains(&1447u32.into()));
    }
}
