//! The validation workflow with the HPO validators

use std::sync::Arc;

use serde_json::{json, Value};

use phenopacket_tools::io::{parse_message, print_message, PhenopacketFormat};
use phenopacket_tools::model::v2::{Family, Phenopacket};
use phenopacket_tools::model::PhenopacketContainer;
use phenopacket_tools::validator::phenotype::{
    HpoAncestryValidator, HpoPhenotypeValidator, OrganSystemValidator,
};
use phenopacket_tools::validator::{
    MetaDataValidator, ValidationLevel, ValidationResults, ValidationWorkflowRunner,
    ValidationWorkflowRunnerBuilder,
};
use phenopacket_tools::{HpoTermId, Ontology};

use crate::common::{hpo, marfan, to_bytes};

const ORGAN_SYSTEMS: [u32; 4] = [478, 598, 707, 40064];

fn organ_systems() -> impl Iterator<Item = HpoTermId> {
    ORGAN_SYSTEMS.into_iter().map(HpoTermId::from)
}

fn with_hpo_validators<T>(
    builder: ValidationWorkflowRunnerBuilder<T>,
    hpo: &Arc<Ontology>,
) -> ValidationWorkflowRunnerBuilder<T>
where
    T: PhenopacketContainer,
{
    builder
        .hpo_rare_disease()
        .add_semantic_validator(Box::new(HpoPhenotypeValidator::new(Arc::clone(hpo))))
        .add_semantic_validator(Box::new(HpoAncestryValidator::new(Arc::clone(hpo))))
        .add_semantic_validator(Box::new(MetaDataValidator::new()))
        .add_semantic_validator(Box::new(OrganSystemValidator::new(
            Arc::clone(hpo),
            organ_systems(),
        )))
}

fn validate(phenopacket: &Value) -> ValidationResults {
    let runner = with_hpo_validators(ValidationWorkflowRunner::phenopacket(), &hpo())
        .build()
        .unwrap();
    runner.validate_bytes(&to_bytes(phenopacket))
}

fn messages(results: &ValidationResults) -> Vec<(&str, &str)> {
    results
        .results()
        .iter()
        .map(|result| (result.validator_info().id(), result.message()))
        .collect()
}

#[test]
fn missing_organ_system() {
    let results = validate(&marfan());
    assert_eq!(
        messages(&results),
        vec![(
            "HpoOrganSystemValidator",
            "Missing annotation for Abnormality of the ear [HP:0000598] in 'patient:1'"
        )]
    );
    assert_eq!(results.results()[0].level(), ValidationLevel::Error);
    assert_eq!(
        results.results()[0].category(),
        "Missing organ system annotation"
    );
}

#[test]
fn validator_order() {
    let results = validate(&marfan());
    let ids: Vec<&str> = results.validators().iter().map(|info| info.id()).collect();
    assert_eq!(
        ids,
        vec![
            "InputValidator",
            "BaseValidator",
            "HpoRareDiseaseValidator",
            "HpoPhenotypeValidator",
            "HpoAncestryValidator",
            "MetaDataValidator",
            "HpoOrganSystemValidator",
        ]
    );
}

#[test]
fn all_organ_systems_annotated() {
    let mut phenopacket = marfan();
    phenopacket["phenotypicFeatures"]
        .as_array_mut()
        .unwrap()
        .push(json!({"type": {"id": "HP:0000369", "label": "Low-set ears"}}));
    let results = validate(&phenopacket);
    assert!(results.results().is_empty(), "{:?}", messages(&results));
}

#[test]
fn excluded_organ_system() {
    let mut phenopacket = marfan();
    phenopacket["phenotypicFeatures"].as_array_mut().unwrap().push(
        json!({"type": {"id": "HP:0000598", "label": "Abnormality of the ear"}, "excluded": true}),
    );
    assert!(validate(&phenopacket).results().is_empty());
}

#[test]
fn same_results_in_every_format() {
    let hpo = hpo();
    let runner = with_hpo_validators(ValidationWorkflowRunner::phenopacket(), &hpo)
        .build()
        .unwrap();
    let phenopacket: Phenopacket =
        parse_message(&to_bytes(&marfan()), PhenopacketFormat::Json).unwrap();

    for format in [PhenopacketFormat::Protobuf, PhenopacketFormat::Yaml] {
        let mut bytes = Vec::new();
        print_message(&phenopacket, format, &mut bytes).unwrap();
        let results = runner.validate_bytes(&bytes);
        assert_eq!(results.results().len(), 1, "{format}");
        assert_eq!(
            results.results()[0].validator_info().id(),
            "HpoOrganSystemValidator"
        );
    }
}

#[test]
fn obsolete_term() {
    let mut phenopacket = marfan();
    phenopacket["phenotypicFeatures"][1]["type"] =
        json!({"id": "HP:0000284", "label": "Abnormality of the ocular region"});
    let results = validate(&phenopacket);
    let messages = messages(&results);

    assert!(messages.contains(&(
        "HpoPhenotypeValidator",
        "Using obsolete HP:0000284 instead of current HP:0000478 (Abnormality of the eye) in 'patient:1'"
    )));
    // the organ system itself does not annotate the organ system
    assert!(messages.contains(&(
        "HpoOrganSystemValidator",
        "Missing annotation for Abnormality of the eye [HP:0000478] in 'patient:1'"
    )));
}

#[test]
fn observed_term_with_excluded_ancestor() {
    let mut phenopacket = marfan();
    phenopacket["phenotypicFeatures"]
        .as_array_mut()
        .unwrap()
        .push(json!({"type": {"id": "HP:0001250", "label": "Seizure"}}));
    let results = validate(&phenopacket);
    assert!(!results.is_valid());
    assert!(results.results().iter().any(|result| {
        result.validator_info().id() == "HpoAncestryValidator"
            && result.level() == ValidationLevel::Error
    }));
}

#[test]
fn missing_hpo_resource() {
    let mut phenopacket = marfan();
    phenopacket["metaData"]["resources"]
        .as_array_mut()
        .unwrap()
        .retain(|resource| resource["namespacePrefix"] != "HP");
    let results = validate(&phenopacket);
    let messages = messages(&results);

    assert!(messages
        .iter()
        .any(|(id, _)| *id == "HpoRareDiseaseValidator"));
    assert!(messages.contains(&(
        "MetaDataValidator",
        "No resource found for ontology prefix 'HP' in 'marfan:1'"
    )));
}

#[test]
fn unknown_term() {
    let mut phenopacket = marfan();
    phenopacket["phenotypicFeatures"][0]["type"] =
        json!({"id": "HP:9999999", "label": "Made up"});
    let results = validate(&phenopacket);
    assert!(messages(&results).contains(&(
        "HpoPhenotypeValidator",
        "Made up [HP:9999999] in 'patient:1' is not part of the HPO"
    )));
}

#[test]
fn family_members_in_order() {
    let mut relative = marfan();
    relative["id"] = json!("marfan:2");
    relative["subject"]["id"] = json!("mother");
    relative["phenotypicFeatures"] =
        json!([{"type": {"id": "HP:0000369", "label": "Low-set ears"}}]);
    let family = json!({
        "id": "family:1",
        "proband": marfan(),
        "relatives": [relative],
        "metaData": marfan()["metaData"].clone(),
    });

    let hpo = hpo();
    let runner = ValidationWorkflowRunner::family()
        .add_semantic_validator(Box::new(OrganSystemValidator::new(
            Arc::clone(&hpo),
            [HpoTermId::from(598u32), HpoTermId::from(40064u32)],
        )))
        .build()
        .unwrap();
    let results = runner.validate_bytes(&to_bytes(&family));
    assert_eq!(
        messages(&results),
        vec![
            (
                "HpoOrganSystemValidator",
                "Missing annotation for Abnormality of the ear [HP:0000598] in 'patient:1'"
            ),
            (
                "HpoOrganSystemValidator",
                "Missing annotation for Abnormality of limbs [HP:0040064] in 'mother'"
            ),
        ]
    );
    let family: Family = serde_json::from_value(family).unwrap();
    assert_eq!(family.phenopackets().len(), 2);
}

#[test]
fn custom_schema() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("two-diseases.json");
    std::fs::write(
        &path,
        r#"{"type": "object", "properties": {"diseases": {"type": "array", "minItems": 2}}}"#,
    )
    .unwrap();

    let runner = ValidationWorkflowRunner::phenopacket()
        .add_json_schema(path.clone())
        .build()
        .unwrap();
    let results = runner.validate_bytes(&to_bytes(&marfan()));
    assert_eq!(results.results().len(), 1);
    assert_eq!(
        results.results()[0].validator_info().id(),
        "two-diseases.json"
    );
}
