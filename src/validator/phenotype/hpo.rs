use std::sync::Arc;

use crate::model::PhenopacketContainer;
use crate::validator::{PhenopacketValidator, ValidationResult, ValidatorInfo};
use crate::{HpoTermId, Ontology};

/// Checks that every HPO term of the phenotypic features is current
///
/// - an id that is not part of the ontology is an error
/// - an alternative or obsolete id is a warning that names the primary id
///
/// Terms from other ontologies are ignored.
pub struct HpoPhenotypeValidator {
    hpo: Arc<Ontology>,
    info: ValidatorInfo,
}

impl HpoPhenotypeValidator {
    pub fn new(hpo: Arc<Ontology>) -> Self {
        Self {
            hpo,
            info: ValidatorInfo::new(
                "HpoPhenotypeValidator",
                "HPO phenotypic feature validator",
                "Validate that HPO terms are well formed and current",
            ),
        }
    }

    fn check_term(&self, term_id: &str, label: &str, individual_id: &str) -> Option<ValidationResult> {
        let Some(id) = HpoTermId::try_from(term_id)
            .ok()
            .filter(|id| self.hpo.contains(*id))
        else {
            return Some(ValidationResult::error(
                self.info.clone(),
                "Unknown HPO term id",
                format!("{label} [{term_id}] in '{individual_id}' is not part of the HPO"),
            ));
        };

        match self.hpo.primary_id(id) {
            Some(primary) if primary != id => {
                let current = self
                    .hpo
                    .hpo(primary)
                    .map(|term| term.name().to_string())
                    .unwrap_or_default();
                Some(ValidationResult::warning(
                    self.info.clone(),
                    "Obsoleted term ID",
                    format!(
                        "Using obsolete {id} instead of current {primary} ({current}) in '{individual_id}'"
                    ),
                ))
            }
            _ if self.hpo.hpo(id).is_some_and(|term| term.is_obsolete()) => {
                Some(ValidationResult::warning(
                    self.info.clone(),
                    "Obsoleted term ID",
                    format!("Using obsolete {id} without replacement in '{individual_id}'"),
                ))
            }
            _ => None,
        }
    }
}

impl<T: PhenopacketContainer> PhenopacketValidator<T> for HpoPhenotypeValidator {
    fn validator_info(&self) -> &ValidatorInfo {
        &self.info
    }

    fn validate(&self, component: &T) -> Vec<ValidationResult> {
        let mut res = Vec::new();
        for phenopacket in component.phenopackets() {
            let individual_id = phenopacket.subject_id();
            for term in phenopacket
                .phenotypic_features
                .iter()
                .filter_map(|feature| feature.r#type.as_ref())
                .filter(|term| term.prefix() == Some("HP"))
            {
                if let Some(result) = self.check_term(&term.id, &term.label, individual_id) {
                    res.push(result);
                }
            }
        }
        res
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::builder::{IndividualBuilder, PhenopacketBuilder, PhenotypicFeatureBuilder};
    use crate::model::v2::{MetaData, Phenopacket};
    use crate::validator::ValidationLevel;

    fn validator() -> HpoPhenotypeValidator {
        HpoPhenotypeValidator::new(Arc::new(Ontology::from_file("tests/small.obo").unwrap()))
    }

    fn phenopacket(terms: &[(&str, &str)]) -> Phenopacket {
        PhenopacketBuilder::create("pp.1", MetaData::default())
            .individual(IndividualBuilder::builder("proband").build())
            .add_phenotypic_features(
                terms
                    .iter()
                    .map(|(id, label)| PhenotypicFeatureBuilder::of(*id, *label)),
            )
            .build()
    }

    #[test]
    fn current_terms_are_valid() {
        let pp = phenopacket(&[
            ("HP:0000568", "Microphthalmia"),
            ("HP:0001166", "Arachnodactyly"),
            ("MONDO:0007915", "Systemic lupus erythematosus"),
        ]);
        assert!(validator().validate(&pp).is_empty());
    }

    #[test]
    fn unknown_term() {
        let pp = phenopacket(&[("HP:9999999", "Made up"), ("HP:12", "Malformed")]);
        let res = validator().validate(&pp);
        assert_eq!(res.len(), 2);
        assert!(res.iter().all(|r| r.level() == ValidationLevel::Error));
        assert_eq!(res[0].category(), "Unknown HPO term id");
        assert!(res[1].message().contains("HP:12"));
    }

    #[test]
    fn alternative_id() {
        let pp = phenopacket(&[("HP:0001447", "Autosomal dominant")]);
        let res = validator().validate(&pp);
        assert_eq!(res.len(), 1);
        assert_eq!(res[0].level(), ValidationLevel::Warning);
        assert_eq!(res[0].category(), "Obsoleted term ID");
        assert_eq!(
            res[0].message(),
            "Using obsolete HP:0001447 instead of current HP:0000006 (Autosomal dominant inheritance) in 'proband'"
        );
    }

    #[test]
    fn obsolete_id() {
        let pp = phenopacket(&[("HP:0000284", "Abnormality of the ocular region")]);
        let res = validator().validate(&pp);
        assert_eq!(res.len(), 1);
        assert!(res[0].message().contains("current HP:0000478"));
    }
}
