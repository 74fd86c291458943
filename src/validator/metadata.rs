use std::collections::BTreeSet;

use crate::model::PhenopacketContainer;
use crate::validator::{PhenopacketValidator, ValidationResult, ValidatorInfo};

/// Checks that every ontology used in a phenopacket is declared as a
/// resource in the metadata
///
/// The namespace prefix of each resource must match the CURIE prefix of the
/// ontology classes, e.g. `HP` for `HP:0001166`. Resources are looked up in
/// the metadata of the phenopacket itself and in the metadata of the
/// enclosing family or cohort.
pub struct MetaDataValidator {
    info: ValidatorInfo,
}

impl Default for MetaDataValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl MetaDataValidator {
    pub fn new() -> Self {
        Self {
            info: ValidatorInfo::new(
                "MetaDataValidator",
                "Metadata validator",
                "Validate that the metadata declares a resource for each ontology prefix",
            ),
        }
    }
}

impl<T: PhenopacketContainer> PhenopacketValidator<T> for MetaDataValidator {
    fn validator_info(&self) -> &ValidatorInfo {
        &self.info
    }

    fn validate(&self, component: &T) -> Vec<ValidationResult> {
        let shared: BTreeSet<&str> = component
            .meta_data()
            .iter()
            .flat_map(|meta_data| meta_data.resources.iter())
            .map(|resource| resource.namespace_prefix.as_str())
            .collect();

        let mut res = Vec::new();
        for phenopacket in component.phenopackets() {
            let declared: BTreeSet<&str> = phenopacket
                .meta_data
                .iter()
                .flat_map(|meta_data| meta_data.resources.iter())
                .map(|resource| resource.namespace_prefix.as_str())
                .collect();

            let used: BTreeSet<&str> = phenopacket
                .ontology_classes()
                .into_iter()
                .filter_map(|class| class.prefix())
                .collect();

            for prefix in used {
                if declared.contains(prefix) || shared.contains(prefix) {
                    continue;
                }
                res.push(ValidationResult::error(
                    self.info.clone(),
                    "Missing resource",
                    format!(
                        "No resource found for ontology prefix '{prefix}' in '{}'",
                        phenopacket.id
                    ),
                ));
            }
        }
        res
    }
}
