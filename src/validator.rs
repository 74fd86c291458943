//! Validation of phenopackets, families and cohorts
//!
//! A [`ValidationWorkflowRunner`] decodes the input, checks the JSON form
//! against one or more [`JsonSchemaValidator`]s and then runs the semantic
//! [`PhenopacketValidator`]s on the typed message. Every check reports
//! [`ValidationResult`]s, the workflow collects them into [`ValidationResults`].
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use phenopacket_tools::Ontology;
//! use phenopacket_tools::builder::{IndividualBuilder, MetaDataBuilder, PhenopacketBuilder, PhenotypicFeatureBuilder, Resources};
//! use phenopacket_tools::validator::phenotype::OrganSystemValidator;
//! use phenopacket_tools::validator::{ValidationLevel, ValidationWorkflowRunner};
//!
//! let hpo = Arc::new(Ontology::from_file("tests/small.obo").unwrap());
//!
//! let meta_data = MetaDataBuilder::builder("2022-04-17T10:35:00Z", "biocurator")
//!     .unwrap()
//!     .add_resource(Resources::hpo_version("2022-10-05"))
//!     .build();
//! let phenopacket = PhenopacketBuilder::create("pp.1", meta_data)
//!     .individual(IndividualBuilder::builder("proband").build())
//!     .add_phenotypic_feature(PhenotypicFeatureBuilder::of("HP:0000568", "Microphthalmia"))
//!     .build();
//!
//! // Eye and ear
//! let organ_systems = OrganSystemValidator::new(hpo, [478u32.into(), 598u32.into()]);
//! let runner = ValidationWorkflowRunner::phenopacket()
//!     .add_semantic_validator(Box::new(organ_systems))
//!     .build()
//!     .unwrap();
//!
//! let results = runner.validate_message(&phenopacket);
//! assert!(!results.is_valid());
//! assert_eq!(results.results().len(), 1);
//! assert_eq!(results.results()[0].level(), ValidationLevel::Error);
//! ```
use std::fmt::Display;
use std::path::Path;

mod metadata;
pub mod phenotype;
mod schema;
mod workflow;

pub use metadata::MetaDataValidator;
pub use schema::JsonSchemaValidator;
pub use workflow::{ValidationWorkflowRunner, ValidationWorkflowRunnerBuilder};

/// Identifies the validator that produced a [`ValidationResult`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatorInfo {
    id: String,
    name: String,
    description: String,
}

impl ValidatorInfo {
    pub fn new<S: Into<String>, T: Into<String>, U: Into<String>>(
        id: S,
        name: T,
        description: U,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }

    /// The validator of the built-in phenopacket schema
    pub fn base_json_schema() -> Self {
        Self::new(
            "BaseValidator",
            "Base JSON schema validator",
            "Validate the basic requirements of the phenopacket schema",
        )
    }

    /// The validator of the built-in HPO rare disease schema
    pub fn hpo_rare_disease() -> Self {
        Self::new(
            "HpoRareDiseaseValidator",
            "HPO rare disease validator",
            "Validate the requirements for HPO-based rare disease phenopackets",
        )
    }

    /// Reports inputs that cannot be decoded at all
    pub fn input() -> Self {
        Self::new(
            "InputValidator",
            "Input validator",
            "Validate that the input is a well-formed phenopacket message",
        )
    }

    /// A user supplied JSON schema, identified by its file name
    pub fn custom_json_schema(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::new(
            name.clone(),
            format!("Custom JSON schema {name}"),
            format!("Validate against the JSON schema at {}", path.display()),
        )
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// The severity of a [`ValidationResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValidationLevel {
    Error,
    Warning,
    Info,
}

impl Display for ValidationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = match self {
            ValidationLevel::Error => "ERROR",
            ValidationLevel::Warning => "WARNING",
            ValidationLevel::Info => "INFO",
        };
        f.write_str(level)
    }
}

/// A single issue found by a validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    validator_info: ValidatorInfo,
    level: ValidationLevel,
    category: String,
    message: String,
}

impl ValidationResult {
    pub fn new<S: Into<String>, T: Into<String>>(
        validator_info: ValidatorInfo,
        level: ValidationLevel,
        category: S,
        message: T,
    ) -> Self {
        Self {
            validator_info,
            level,
            category: category.into(),
            message: message.into(),
        }
    }

    pub fn error<S: Into<String>, T: Into<String>>(
        validator_info: ValidatorInfo,
        category: S,
        message: T,
    ) -> Self {
        Self::new(validator_info, ValidationLevel::Error, category, message)
    }

    pub fn warning<S: Into<String>, T: Into<String>>(
        validator_info: ValidatorInfo,
        category: S,
        message: T,
    ) -> Self {
        Self::new(validator_info, ValidationLevel::Warning, category, message)
    }

    pub fn info<S: Into<String>, T: Into<String>>(
        validator_info: ValidatorInfo,
        category: S,
        message: T,
    ) -> Self {
        Self::new(validator_info, ValidationLevel::Info, category, message)
    }

    pub fn validator_info(&self) -> &ValidatorInfo {
        &self.validator_info
    }

    pub fn level(&self) -> ValidationLevel {
        self.level
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The outcome of a validation workflow
///
/// Contains the [`ValidatorInfo`] of every validator that ran, even
/// those that did not report anything.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationResults {
    validators: Vec<ValidatorInfo>,
    results: Vec<ValidationResult>,
}

impl ValidationResults {
    pub fn new(validators: Vec<ValidatorInfo>, results: Vec<ValidationResult>) -> Self {
        Self {
            validators,
            results,
        }
    }

    pub fn validators(&self) -> &[ValidatorInfo] {
        &self.validators
    }

    pub fn results(&self) -> &[ValidationResult] {
        &self.results
    }

    /// `true` if no result has the level [`ValidationLevel::Error`]
    pub fn is_valid(&self) -> bool {
        self.results
            .iter()
            .all(|result| result.level != ValidationLevel::Error)
    }
}

/// A semantic check of a phenopacket, family or cohort
///
/// Implementors report every problem they find as a [`ValidationResult`];
/// an empty `Vec` means that `component` passed the check.
pub trait PhenopacketValidator<T> {
    fn validator_info(&self) -> &ValidatorInfo;

    fn validate(&self, component: &T) -> Vec<ValidationResult>;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn level_display() {
        assert_eq!(ValidationLevel::Error.to_string(), "ERROR");
        assert_eq!(ValidationLevel::Warning.to_string(), "WARNING");
        assert_eq!(ValidationLevel::Info.to_string(), "INFO");
    }

    #[test]
    fn warnings_are_valid() {
        let results = ValidationResults::new(
            vec![ValidatorInfo::input()],
            vec![
                ValidationResult::warning(ValidatorInfo::input(), "category", "message"),
                ValidationResult::info(ValidatorInfo::input(), "category", "message"),
            ],
        );
        assert!(results.is_valid());
    }

    #[test]
    fn errors_are_invalid() {
        let results = ValidationResults::new(
            vec![ValidatorInfo::input()],
            vec![ValidationResult::error(
                ValidatorInfo::input(),
                "category",
                "message",
            )],
        );
        assert!(!results.is_valid());
        assert_eq!(results.results()[0].validator_info().id(), "InputValidator");
    }

    #[test]
    fn custom_schema_is_named_after_file() {
        let info = ValidatorInfo::custom_json_schema(Path::new("/data/schemas/marfan.json"));
        assert_eq!(info.id(), "marfan.json");
        assert!(info.description().contains("/data/schemas/marfan.json"));
    }
}
