use std::sync::Arc;

use crate::model::PhenopacketContainer;
use crate::validator::{PhenopacketValidator, ValidationResult, ValidatorInfo};
use crate::{HpoTermId, Ontology};

use super::util::partition_by_exclusion_status;

const CATEGORY: &str = "Violation of the annotation propagation rule";

/// Checks the annotation propagation rule
///
/// An observed term implies all of its ancestors, so an individual should
/// not be annotated with both a term and one of its ancestors. Listing an
/// observed ancestor is redundant (warning), while an excluded ancestor
/// contradicts the observed term (error).
///
/// Alternative and obsolete ids are mapped to their primary ids first.
pub struct HpoAncestryValidator {
    hpo: Arc<Ontology>,
    info: ValidatorInfo,
}

impl HpoAncestryValidator {
    pub fn new(hpo: Arc<Ontology>) -> Self {
        Self {
            hpo,
            info: ValidatorInfo::new(
                "HpoAncestryValidator",
                "HPO ancestry validator",
                "Validate that the phenotypic features follow the annotation propagation rule",
            ),
        }
    }

    fn label(&self, id: HpoTermId) -> &str {
        self.hpo.hpo(id).map(|term| term.name()).unwrap_or_default()
    }
}

impl<T: PhenopacketContainer> PhenopacketValidator<T> for HpoAncestryValidator {
    fn validator_info(&self) -> &ValidatorInfo {
        &self.info
    }

    fn validate(&self, component: &T) -> Vec<ValidationResult> {
        let mut res = Vec::new();
        for phenopacket in component.phenopackets() {
            let individual_id = phenopacket.subject_id();
            let features =
                partition_by_exclusion_status(individual_id, &phenopacket.phenotypic_features)
                    .to_primary(&self.hpo);

            for term in &features.observed {
                for ancestor in &features.observed {
                    if self.hpo.exists_path(term, ancestor) {
                        res.push(ValidationResult::warning(
                            self.info.clone(),
                            CATEGORY,
                            format!(
                                "Terms should not contain both {} [{term}] and its ancestor {} [{ancestor}] in '{individual_id}'",
                                self.label(term),
                                self.label(ancestor),
                            ),
                        ));
                    }
                }
                for ancestor in &features.excluded {
                    if self.hpo.exists_path(term, ancestor) {
                        res.push(ValidationResult::error(
                            self.info.clone(),
                            CATEGORY,
                            format!(
                                "Phenotypic features of '{individual_id}' must not contain both an observed term ({}, {term}) and an excluded ancestor ({}, {ancestor})",
                                self.label(term),
                                self.label(ancestor),
                            ),
                        ));
                    }
                }
            }
        }
        res
    }
}
