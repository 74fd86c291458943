use std::sync::Arc;

use tracing::{debug, warn};

use crate::model::PhenopacketContainer;
use crate::validator::{PhenopacketValidator, ValidationResult, ValidatorInfo};
use crate::{HpoTermId, Ontology};

use super::util::partition_by_exclusion_status;

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Checks that selected organ systems are annotated for every individual
///
/// An organ system, e.g. `HP:0000478 | Abnormality of the eye`, is
/// annotated if the individual has an observed phenotypic feature that
/// descends from the organ system, or if the organ system itself is
/// listed as an excluded feature. The organ system term itself as an
/// observed feature does not count, it is too unspecific.
///
/// ```mermaid
/// flowchart TD
///     A[organ system] --> B{excluded?}
///     B -->|yes| OK[annotated]
///     B -->|no| C{observed descendant?}
///     C -->|yes| OK
///     C -->|no| E[ERROR: Missing organ system annotation]
/// ```
///
/// Alternative and obsolete ids of the features are mapped to their
/// primary ids before the check.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use phenopacket_tools::Ontology;
/// use phenopacket_tools::builder::{IndividualBuilder, PhenotypicFeatureBuilder};
/// use phenopacket_tools::model::v2::Phenopacket;
/// use phenopacket_tools::validator::PhenopacketValidator;
/// use phenopacket_tools::validator::phenotype::OrganSystemValidator;
///
/// let hpo = Arc::new(Ontology::from_file("tests/small.obo").unwrap());
/// // Abnormality of the nervous system
/// let validator = OrganSystemValidator::new(hpo, [707u32.into()]);
///
/// let phenopacket = Phenopacket {
///     subject: Some(IndividualBuilder::builder("proband").build()),
///     phenotypic_features: vec![PhenotypicFeatureBuilder::of("HP:0001250", "Seizure")],
///     ..Default::default()
/// };
/// assert!(validator.validate(&phenopacket).is_empty());
///
/// let phenopacket = Phenopacket {
///     subject: Some(IndividualBuilder::builder("proband").build()),
///     ..Default::default()
/// };
/// let res = validator.validate(&phenopacket);
/// assert_eq!(
///     res[0].message(),
///     "Missing annotation for Abnormality of the nervous system [HP:0000707] in 'proband'"
/// );
/// ```
pub struct OrganSystemValidator {
    hpo: Arc<Ontology>,
    organ_systems: Vec<(HpoTermId, String)>,
    info: ValidatorInfo,
}

impl OrganSystemValidator {
    /// Constructs a validator for the given organ systems
    ///
    /// Alternative and obsolete ids are mapped to their current primary
    /// id. Duplicate ids are ignored and so are ids that are not part of
    /// the ontology. The organ systems are checked in the order of
    /// their ids.
    pub fn new<I: IntoIterator<Item = HpoTermId>>(hpo: Arc<Ontology>, organ_systems: I) -> Self {
        let mut resolved: Vec<(HpoTermId, String)> = Vec::new();
        for id in organ_systems {
            let Some(term) = hpo.primary_id(id).and_then(|primary| hpo.hpo(primary)) else {
                warn!("{id} is not present in the ontology");
                continue;
            };
            if *term.id() != id {
                debug!("Using {} instead of {id} as organ system", term.id());
            }
            if resolved.iter().any(|(known, _)| known == term.id()) {
                continue;
            }
            resolved.push((*term.id(), term.name().to_string()));
        }
        resolved.sort_unstable_by_key(|(id, _)| *id);

        Self {
            hpo,
            organ_systems: resolved,
            info: ValidatorInfo::new(
                "HpoOrganSystemValidator",
                "HPO organ system validator",
                "Validate annotation of selected organ systems",
            ),
        }
    }

    /// The primary ids of the organ systems that are checked
    pub fn organ_systems(&self) -> Vec<HpoTermId> {
        self.organ_systems.iter().map(|(id, _)| *id).collect()
    }
}

impl<T: PhenopacketContainer> PhenopacketValidator<T> for OrganSystemValidator {
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

            for (organ_system, name) in &self.organ_systems {
                if features.excluded.contains(organ_system) {
                    continue;
                }
                if features
                    .observed
                    .iter()
                    .any(|observed| self.hpo.exists_path(observed, *organ_system))
                {
                    continue;
                }
                res.push(ValidationResult::error(
                    self.info.clone(),
                    "Missing organ system annotation",
                    format!("Missing annotation for {name} [{organ_system}] in '{individual_id}'"),
                ));
            }
        }
        res
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::builder::{FamilyBuilder, IndividualBuilder, PhenopacketBuilder, PhenotypicFeatureBuilder};
    use crate::model::v2::{MetaData, Phenopacket, PhenotypicFeature};
    use crate::validator::ValidationLevel;

    const EYE: HpoTermId = HpoTermId::from_u32(478);
    const EAR: HpoTermId = HpoTermId::from_u32(598);
    const NERVOUS_SYSTEM: HpoTermId = HpoTermId::from_u32(707);

    fn ontology() -> Arc<Ontology> {
        Arc::new(Ontology::from_file("tests/small.obo").unwrap())
    }

    fn phenopacket(subject: &str, features: Vec<PhenotypicFeature>) -> Phenopacket {
        PhenopacketBuilder::create(format!("{subject}.pp"), MetaData::default())
            .individual(IndividualBuilder::builder(subject).build())
            .add_phenotypic_features(features)
            .build()
    }

    fn messages(res: &[ValidationResult]) -> Vec<&str> {
        res.iter().map(|r| r.message()).collect()
    }

    #[test]
    fn ids_are_distinct_known_and_sorted() {
        let validator = OrganSystemValidator::new(
            ontology(),
            [NERVOUS_SYSTEM, EYE, 9_999_999u32.into(), EYE, EAR],
        );
        assert_eq!(validator.organ_systems(), [EYE, EAR, NERVOUS_SYSTEM]);
    }

    #[test]
    fn alternative_and_obsolete_organ_system_ids() {
        // HP:0001453 is an alternative id of HP:0000005, HP:0000284 is
        // obsolete and replaced by HP:0000478
        let validator = OrganSystemValidator::new(
            ontology(),
            [1453u32.into(), 284u32.into(), EYE, 5u32.into()],
        );
        assert_eq!(validator.organ_systems(), [HpoTermId::from(5u32), EYE]);

        let pp = phenopacket(
            "proband",
            vec![
                PhenotypicFeatureBuilder::of("HP:0000568", "Microphthalmia"),
                PhenotypicFeatureBuilder::of("HP:0000006", "Autosomal dominant inheritance"),
            ],
        );
        assert!(validator.validate(&pp).is_empty());

        let res = validator.validate(&phenopacket("proband", vec![]));
        assert_eq!(
            messages(&res),
            [
                "Missing annotation for Mode of inheritance [HP:0000005] in 'proband'",
                "Missing annotation for Abnormality of the eye [HP:0000478] in 'proband'",
            ]
        );
    }

    #[test]
    fn excluded_obsolete_organ_system() {
        let validator = OrganSystemValidator::new(ontology(), [284u32.into()]);
        let pp = phenopacket(
            "proband",
            vec![PhenotypicFeatureBuilder::builder("HP:0000478", "Abnormality of the eye")
                .excluded()
                .build()],
        );
        assert!(validator.validate(&pp).is_empty());
    }

    #[test]
    fn info() {
        let validator = OrganSystemValidator::new(ontology(), [EYE]);
        let info = PhenopacketValidator::<Phenopacket>::validator_info(&validator);
        assert_eq!(info.id(), "HpoOrganSystemValidator");
        assert_eq!(info.name(), "HPO organ system validator");
        assert_eq!(info.description(), "Validate annotation of selected organ systems");
    }

    #[test]
    fn all_annotated() {
        let validator = OrganSystemValidator::new(ontology(), [EYE, EAR, NERVOUS_SYSTEM]);
        let pp = phenopacket(
            "proband",
            vec![
                PhenotypicFeatureBuilder::of("HP:0000568", "Microphthalmia"),
                PhenotypicFeatureBuilder::of("HP:0000369", "Low-set ears"),
                PhenotypicFeatureBuilder::of("HP:0008936", "Axial hypotonia"),
            ],
        );
        assert!(validator.validate(&pp).is_empty());
    }

    #[test]
    fn missing_in_sorted_order() {
        let validator = OrganSystemValidator::new(ontology(), [NERVOUS_SYSTEM, EAR, EYE]);
        let pp = phenopacket(
            "proband",
            vec![PhenotypicFeatureBuilder::of("HP:0000369", "Low-set ears")],
        );
        let res = validator.validate(&pp);
        assert!(res.iter().all(|r| r.level() == ValidationLevel::Error));
        assert!(res
            .iter()
            .all(|r| r.category() == "Missing organ system annotation"));
        assert_eq!(
            messages(&res),
            [
                "Missing annotation for Abnormality of the eye [HP:0000478] in 'proband'",
                "Missing annotation for Abnormality of the nervous system [HP:0000707] in 'proband'",
            ]
        );
    }

    #[test]
    fn excluded_organ_system_is_annotated() {
        let validator = OrganSystemValidator::new(ontology(), [EYE]);
        let pp = phenopacket(
            "proband",
            vec![PhenotypicFeatureBuilder::builder("HP:0000478", "Abnormality of the eye")
                .excluded()
                .build()],
        );
        assert!(validator.validate(&pp).is_empty());
    }

    #[test]
    fn excluded_descendant_is_not_enough() {
        let validator = OrganSystemValidator::new(ontology(), [EYE]);
        let pp = phenopacket(
            "proband",
            vec![PhenotypicFeatureBuilder::builder("HP:0000568", "Microphthalmia")
                .excluded()
                .build()],
        );
        assert_eq!(validator.validate(&pp).len(), 1);
    }

    #[test]
    fn organ_system_itself_is_not_enough() {
        let validator = OrganSystemValidator::new(ontology(), [EYE]);
        let pp = phenopacket(
            "proband",
            vec![PhenotypicFeatureBuilder::of("HP:0000478", "Abnormality of the eye")],
        );
        assert_eq!(validator.validate(&pp).len(), 1);
    }

    #[test]
    fn term_with_multiple_parents() {
        // Hypertelorism is a child of the face and of the eye
        let validator = OrganSystemValidator::new(ontology(), [EYE, 152u32.into()]);
        let pp = phenopacket(
            "proband",
            vec![PhenotypicFeatureBuilder::of("HP:0000316", "Hypertelorism")],
        );
        assert!(validator.validate(&pp).is_empty());
    }

    #[test]
    fn obsolete_excluded_term_is_mapped() {
        // HP:0000284 is replaced by HP:0000478
        let validator = OrganSystemValidator::new(ontology(), [EYE]);
        let pp = phenopacket(
            "proband",
            vec![
                PhenotypicFeatureBuilder::builder("HP:0000284", "Abnormality of the ocular region")
                    .excluded()
                    .build(),
            ],
        );
        assert!(validator.validate(&pp).is_empty());
    }

    #[test]
    fn invalid_and_foreign_terms_are_skipped() {
        let validator = OrganSystemValidator::new(ontology(), [EYE]);
        let pp = phenopacket(
            "proband",
            vec![
                PhenotypicFeatureBuilder::of("MONDO:0007915", "Systemic lupus erythematosus"),
                PhenotypicFeatureBuilder::of("HP:abc", "Broken"),
                PhenotypicFeatureBuilder::of("HP:0000518", "Cataract"),
            ],
        );
        assert!(validator.validate(&pp).is_empty());
    }

    #[test]
    fn family_members_in_order() {
        let validator = OrganSystemValidator::new(ontology(), [EAR]);
        let family = FamilyBuilder::create("family", MetaData::default())
            .proband(phenopacket("proband", vec![]))
            .add_relative(phenopacket(
                "mother",
                vec![PhenotypicFeatureBuilder::of("HP:0000369", "Low-set ears")],
            ))
            .add_relative(phenopacket("father", vec![]))
            .build();
        let res = validator.validate(&family);
        assert_eq!(
            messages(&res),
            [
                "Missing annotation for Abnormality of the ear [HP:0000598] in 'proband'",
                "Missing annotation for Abnormality of the ear [HP:0000598] in 'father'",
            ]
        );
    }

    #[test]
    fn no_organ_systems() {
        let validator = OrganSystemValidator::new(ontology(), []);
        assert!(validator.validate(&phenopacket("proband", vec![])).is_empty());
    }
}
