use std::path::PathBuf;

use prost::Message;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::io::{parse_message, sniff, Element, PhenopacketFormat};
use crate::model::v2::{Cohort, Family, Phenopacket};
use crate::validator::{
    JsonSchemaValidator, PhenopacketValidator, ValidationResult, ValidationResults, ValidatorInfo,
};
use crate::PxfResult;

/// Runs all validation steps of one top-level element
///
/// 1. The input is decoded; if that fails, the workflow stops with a single
///    error of the [`ValidatorInfo::input`] validator.
/// 2. The JSON form of the message is checked against the built-in base
///    schema, the optional HPO rare disease schema and any custom schemas.
/// 3. The semantic validators run on the typed message.
///
/// Build a runner with [`ValidationWorkflowRunner::phenopacket`],
/// [`ValidationWorkflowRunner::family`] or [`ValidationWorkflowRunner::cohort`].
pub struct ValidationWorkflowRunner<T> {
    element: Element,
    schemas: Vec<JsonSchemaValidator>,
    semantic_validators: Vec<Box<dyn PhenopacketValidator<T>>>,
}

impl ValidationWorkflowRunner<Phenopacket> {
    pub fn phenopacket() -> ValidationWorkflowRunnerBuilder<Phenopacket> {
        ValidationWorkflowRunnerBuilder::new(Element::Phenopacket)
    }
}

impl ValidationWorkflowRunner<Family> {
    pub fn family() -> ValidationWorkflowRunnerBuilder<Family> {
        ValidationWorkflowRunnerBuilder::new(Element::Family)
    }
}

impl ValidationWorkflowRunner<Cohort> {
    pub fn cohort() -> ValidationWorkflowRunnerBuilder<Cohort> {
        ValidationWorkflowRunnerBuilder::new(Element::Cohort)
    }
}

impl<T> ValidationWorkflowRunner<T>
where
    T: Message + Default + DeserializeOwned + Serialize,
{
    /// The element that the runner validates
    pub fn element(&self) -> Element {
        self.element
    }

    /// The info of every validator of the workflow, in the order they run
    pub fn validators(&self) -> Vec<ValidatorInfo> {
        std::iter::once(ValidatorInfo::input())
            .chain(self.schemas.iter().map(|schema| schema.validator_info().clone()))
            .chain(
                self.semantic_validators
                    .iter()
                    .map(|validator| validator.validator_info().clone()),
            )
            .collect()
    }

    /// Decodes `bytes` in the sniffed format and validates the message
    pub fn validate_bytes(&self, bytes: &[u8]) -> ValidationResults {
        self.validate_bytes_as(bytes, sniff(bytes))
    }

    /// Decodes `bytes` as `format` and validates the message
    pub fn validate_bytes_as(&self, bytes: &[u8], format: PhenopacketFormat) -> ValidationResults {
        debug!("Validating {} as {format}", self.element);
        match parse_message::<T>(bytes, format) {
            Ok(message) => self.validate_message(&message),
            Err(err) => {
                info!("Unable to decode the input as {format}: {err}");
                ValidationResults::new(
                    self.validators(),
                    vec![ValidationResult::error(
                        ValidatorInfo::input(),
                        "Input is not well formatted",
                        format!("Unable to decode the input as a {format} {}: {err}", self.element),
                    )],
                )
            }
        }
    }

    /// Validates a decoded message
    pub fn validate_message(&self, message: &T) -> ValidationResults {
        let mut results = Vec::new();

        match serde_json::to_value(message) {
            Ok(instance) => {
                for schema in &self.schemas {
                    results.extend(schema.validate(&instance, self.element));
                }
            }
            Err(err) => results.push(ValidationResult::error(
                ValidatorInfo::input(),
                "Input is not well formatted",
                format!("Unable to convert the {} to JSON: {err}", self.element),
            )),
        }

        for validator in &self.semantic_validators {
            results.extend(validator.validate(message));
        }

        debug!("{} validation results", results.len());
        ValidationResults::new(self.validators(), results)
    }
}

/// Configures a [`ValidationWorkflowRunner`]
///
/// The base schema of the element is always part of the workflow.
pub struct ValidationWorkflowRunnerBuilder<T> {
    element: Element,
    rare_disease: bool,
    custom_schemas: Vec<PathBuf>,
    semantic_validators: Vec<Box<dyn PhenopacketValidator<T>>>,
}

impl<T> ValidationWorkflowRunnerBuilder<T> {
    fn new(element: Element) -> Self {
        Self {
            element,
            rare_disease: false,
            custom_schemas: Vec::new(),
            semantic_validators: Vec::new(),
        }
    }

    /// Adds the built-in HPO rare disease schema
    pub fn hpo_rare_disease(mut self) -> Self {
        self.rare_disease = true;
        self
    }

    /// Adds a custom JSON schema of the element, read from `path`
    pub fn add_json_schema<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.custom_schemas.push(path.into());
        self
    }

    pub fn add_semantic_validator(mut self, validator: Box<dyn PhenopacketValidator<T>>) -> Self {
        self.semantic_validators.push(validator);
        self
    }

    /// Compiles all JSON schemas
    ///
    /// # Errors
    ///
    /// Any error of [`JsonSchemaValidator::from_file`]
    pub fn build(self) -> PxfResult<ValidationWorkflowRunner<T>> {
        let mut schemas = vec![JsonSchemaValidator::base(self.element)?];
        if self.rare_disease {
            schemas.push(JsonSchemaValidator::hpo_rare_disease()?);
        }
        for path in &self.custom_schemas {
            schemas.push(JsonSchemaValidator::from_file(path, self.element)?);
        }
        Ok(ValidationWorkflowRunner {
            element: self.element,
            schemas,
            semantic_validators: self.semantic_validators,
        })
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use super::*;
    use crate::builder::{
        FamilyBuilder, IndividualBuilder, MetaDataBuilder, PhenopacketBuilder,
        PhenotypicFeatureBuilder, Resources,
    };
    use crate::io::print_message;
    use crate::model::v2::MetaData;
    use crate::validator::phenotype::OrganSystemValidator;
    use crate::validator::{MetaDataValidator, ValidationLevel};
    use crate::Ontology;

    fn meta_data() -> MetaData {
        MetaDataBuilder::builder("2022-04-17T10:35:00Z", "biocurator")
            .unwrap()
            .add_resource(Resources::hpo_version("2022-10-05"))
            .build()
    }

    fn phenopacket(id: &str) -> Phenopacket {
        PhenopacketBuilder::create(id, meta_data())
            .individual(IndividualBuilder::builder(format!("{id}-subject")).female().build())
            .add_phenotypic_feature(PhenotypicFeatureBuilder::of("HP:0000568", "Microphthalmia"))
            .build()
    }

    #[test]
    fn valid_phenopacket_in_every_format() {
        let runner = ValidationWorkflowRunner::phenopacket()
            .hpo_rare_disease()
            .add_semantic_validator(Box::new(MetaDataValidator::new()))
            .build()
            .unwrap();

        for format in [
            PhenopacketFormat::Protobuf,
            PhenopacketFormat::Json,
            PhenopacketFormat::Yaml,
        ] {
            let mut bytes = Vec::new();
            print_message(&phenopacket("pp.1"), format, &mut bytes).unwrap();
            let results = runner.validate_bytes(&bytes);
            assert!(results.results().is_empty(), "{format}: {:?}", results.results());
        }
    }

    #[test]
    fn validators_are_listed() {
        let runner = ValidationWorkflowRunner::phenopacket()
            .hpo_rare_disease()
            .add_semantic_validator(Box::new(MetaDataValidator::new()))
            .build()
            .unwrap();
        let ids: Vec<String> = runner
            .validators()
            .iter()
            .map(|info| info.id().to_string())
            .collect();
        assert_eq!(
            ids,
            [
                "InputValidator",
                "BaseValidator",
                "HpoRareDiseaseValidator",
                "MetaDataValidator"
            ]
        );
    }

    #[test]
    fn undecodable_input() {
        let runner = ValidationWorkflowRunner::phenopacket().build().unwrap();
        let results = runner.validate_bytes(b"{\"id\": ");
        assert_eq!(results.results().len(), 1);
        assert_eq!(results.results()[0].validator_info().id(), "InputValidator");
        assert_eq!(results.results()[0].level(), ValidationLevel::Error);
    }

    #[test]
    fn schema_then_semantic_results() {
        let hpo = Arc::new(Ontology::from_file("tests/small.obo").unwrap());
        let runner = ValidationWorkflowRunner::phenopacket()
            .add_semantic_validator(Box::new(OrganSystemValidator::new(hpo, [598u32.into()])))
            .build()
            .unwrap();

        let mut pp = phenopacket("pp.1");
        pp.meta_data = None;
        let results = runner.validate_message(&pp);
        let ids: Vec<&str> = results
            .results()
            .iter()
            .map(|result| result.validator_info().id())
            .collect();
        assert_eq!(ids, ["BaseValidator", "HpoOrganSystemValidator"]);
        assert!(!results.is_valid());
    }

    #[test]
    fn family_workflow() {
        let hpo = Arc::new(Ontology::from_file("tests/small.obo").unwrap());
        let runner = ValidationWorkflowRunner::family()
            .hpo_rare_disease()
            .add_semantic_validator(Box::new(OrganSystemValidator::new(hpo, [478u32.into()])))
            .build()
            .unwrap();

        let family = FamilyBuilder::create("family.1", meta_data())
            .proband(phenopacket("proband"))
            .add_relative(PhenopacketBuilder::create("mother", meta_data()).build())
            .build();
        let results = runner.validate_message(&family);
        let ids: Vec<&str> = results
            .results()
            .iter()
            .map(|result| result.validator_info().id())
            .collect();
        // the mother has neither a subject nor features
        assert_eq!(
            ids,
            [
                "HpoRareDiseaseValidator",
                "HpoRareDiseaseValidator",
                "HpoOrganSystemValidator"
            ]
        );
    }

    #[test]
    fn missing_custom_schema() {
        let result = ValidationWorkflowRunner::cohort()
            .add_json_schema("/does/not/exist.json")
            .build();
        assert!(result.is_err());
    }
}
