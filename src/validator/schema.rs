use std::path::Path;

use jsonschema::Validator;
use serde_json::Value;
use tracing::debug;

use crate::io::Element;
use crate::validator::{ValidationResult, ValidatorInfo};
use crate::{PhenopacketError, PxfResult};

const BASE_SCHEMA: &str = include_str!("../../schemas/phenopacket-schema-2-0.json");
const HPO_RARE_DISEASE_SCHEMA: &str = include_str!("../../schemas/hpo-rare-disease-schema.json");

const CATEGORY: &str = "JSON schema";

/// Validates the JSON form of a top-level element against a JSON schema
///
/// Every schema describes one [`Element`]. A schema of a phenopacket can
/// also be applied to a family or a cohort, it then validates the proband
/// and relatives, or the members, one by one.
pub struct JsonSchemaValidator {
    info: ValidatorInfo,
    element: Element,
    validator: Validator,
}

impl std::fmt::Debug for JsonSchemaValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonSchemaValidator")
            .field("info", &self.info)
            .field("element", &self.element)
            .finish()
    }
}

impl JsonSchemaValidator {
    /// Compiles `schema`
    ///
    /// # Errors
    ///
    /// [`PhenopacketError::Schema`] if `schema` is not a valid JSON schema
    pub fn new(info: ValidatorInfo, element: Element, schema: &Value) -> PxfResult<Self> {
        let validator = jsonschema::validator_for(schema)
            .map_err(|err| PhenopacketError::Schema(format!("{}: {err}", info.id())))?;
        debug!("Compiled JSON schema {} for {element}", info.id());
        Ok(Self {
            info,
            element,
            validator,
        })
    }

    /// The built-in schema of the basic requirements of `element`
    ///
    /// # Errors
    ///
    /// [`PhenopacketError::Schema`] if the built-in schema does not compile
    pub fn base(element: Element) -> PxfResult<Self> {
        let mut schema: Value = serde_json::from_str(BASE_SCHEMA)?;
        if let Some(root) = schema.as_object_mut() {
            root.insert(
                "$ref".to_string(),
                Value::String(format!("#/$defs/{element}")),
            );
        }
        Self::new(ValidatorInfo::base_json_schema(), element, &schema)
    }

    /// The built-in schema for HPO-based rare disease phenopackets
    ///
    /// # Errors
    ///
    /// [`PhenopacketError::Schema`] if the built-in schema does not compile
    pub fn hpo_rare_disease() -> PxfResult<Self> {
        let schema: Value = serde_json::from_str(HPO_RARE_DISEASE_SCHEMA)?;
        Self::new(ValidatorInfo::hpo_rare_disease(), Element::Phenopacket, &schema)
    }

    /// Reads a user supplied schema of `element` from `path`
    ///
    /// # Errors
    ///
    /// - [`PhenopacketError::CannotOpenFile`] if the file cannot be read
    /// - [`PhenopacketError::Json`] if the file is not JSON
    /// - [`PhenopacketError::Schema`] if the file is not a valid JSON schema
    pub fn from_file<P: AsRef<Path>>(path: P, element: Element) -> PxfResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|err| PhenopacketError::CannotOpenFile(format!("{}: {err}", path.display())))?;
        let schema: Value = serde_json::from_str(&content)?;
        Self::new(ValidatorInfo::custom_json_schema(path), element, &schema)
    }

    pub fn validator_info(&self) -> &ValidatorInfo {
        &self.info
    }

    /// The element that the schema describes
    pub fn element(&self) -> Element {
        self.element
    }

    /// Validates `instance`, the JSON form of an `element`
    ///
    /// Returns no results if the schema does not apply to `element`.
    pub fn validate(&self, instance: &Value, element: Element) -> Vec<ValidationResult> {
        match (self.element, element) {
            (expected, actual) if expected == actual => self.check(instance, None),
            (Element::Phenopacket, Element::Family) => {
                let proband = instance.get("proband").into_iter();
                let relatives = instance
                    .get("relatives")
                    .and_then(Value::as_array)
                    .into_iter()
                    .flatten();
                proband
                    .chain(relatives)
                    .flat_map(|member| self.check(member, phenopacket_id(member)))
                    .collect()
            }
            (Element::Phenopacket, Element::Cohort) => instance
                .get("members")
                .and_then(Value::as_array)
                .into_iter()
                .flatten()
                .flat_map(|member| self.check(member, phenopacket_id(member)))
                .collect(),
            (expected, actual) => {
                debug!(
                    "Skipping JSON schema {} of {expected} for {actual}",
                    self.info.id()
                );
                Vec::new()
            }
        }
    }

    fn check(&self, instance: &Value, member: Option<&str>) -> Vec<ValidationResult> {
        self.validator
            .iter_errors(instance)
            .map(|err| {
                let message = match member {
                    Some(id) => format!("'{id}': {err}"),
                    None => err.to_string(),
                };
                ValidationResult::error(self.info.clone(), CATEGORY, message)
            })
            .collect()
    }
}

fn phenopacket_id(instance: &Value) -> Option<&str> {
    instance.get("id").and_then(Value::as_str)
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn meta_data() -> Value {
        json!({
            "created": "2022-04-17T10:35:00Z",
            "createdBy": "biocurator",
            "phenopacketSchemaVersion": "2.0",
            "resources": [{
                "id": "hp",
                "name": "human phenotype ontology",
                "url": "http://purl.obolibrary.org/obo/hp.owl",
                "version": "2022-10-05",
                "namespacePrefix": "HP",
                "iriPrefix": "http://purl.obolibrary.org/obo/HP_"
            }]
        })
    }

    fn phenopacket(id: &str) -> Value {
        json!({
            "id": id,
            "subject": {"id": format!("{id}-subject"), "sex": "FEMALE"},
            "phenotypicFeatures": [{"type": {"id": "HP:0001166", "label": "Arachnodactyly"}}],
            "metaData": meta_data()
        })
    }

    #[test]
    fn base_schemas_compile() {
        for element in [Element::Phenopacket, Element::Family, Element::Cohort] {
            let validator = JsonSchemaValidator::base(element).unwrap();
            assert_eq!(validator.element(), element);
            assert_eq!(validator.validator_info().id(), "BaseValidator");
        }
        JsonSchemaValidator::hpo_rare_disease().unwrap();
    }

    #[test]
    fn valid_phenopacket() {
        let validator = JsonSchemaValidator::base(Element::Phenopacket).unwrap();
        assert!(validator
            .validate(&phenopacket("pp.1"), Element::Phenopacket)
            .is_empty());
    }

    #[test]
    fn missing_meta_data() {
        let validator = JsonSchemaValidator::base(Element::Phenopacket).unwrap();
        let mut instance = phenopacket("pp.1");
        instance.as_object_mut().unwrap().remove("metaData");
        let res = validator.validate(&instance, Element::Phenopacket);
        assert_eq!(res.len(), 1);
        assert_eq!(res[0].category(), "JSON schema");
        assert!(res[0].message().contains("metaData"));
    }

    #[test]
    fn malformed_curie() {
        let validator = JsonSchemaValidator::base(Element::Phenopacket).unwrap();
        let mut instance = phenopacket("pp.1");
        instance["phenotypicFeatures"][0]["type"]["id"] = json!("HP 0001166");
        assert_eq!(validator.validate(&instance, Element::Phenopacket).len(), 1);
    }

    #[test]
    fn rare_disease_requires_features() {
        let validator = JsonSchemaValidator::hpo_rare_disease().unwrap();
        assert!(validator
            .validate(&phenopacket("pp.1"), Element::Phenopacket)
            .is_empty());

        let mut instance = phenopacket("pp.1");
        instance["phenotypicFeatures"] = json!([]);
        assert!(!validator.validate(&instance, Element::Phenopacket).is_empty());
    }

    #[test]
    fn phenopacket_schema_applies_to_cohort_members() {
        let validator = JsonSchemaValidator::hpo_rare_disease().unwrap();
        let mut member = phenopacket("member.2");
        member.as_object_mut().unwrap().remove("subject");
        let cohort = json!({
            "id": "cohort.1",
            "members": [phenopacket("member.1"), member],
            "metaData": meta_data()
        });
        let res = validator.validate(&cohort, Element::Cohort);
        assert_eq!(res.len(), 1);
        assert!(res[0].message().starts_with("'member.2': "));
    }

    #[test]
    fn cohort_schema_does_not_apply_to_phenopacket() {
        let validator = JsonSchemaValidator::base(Element::Cohort).unwrap();
        assert!(validator
            .validate(&json!({}), Element::Phenopacket)
            .is_empty());
    }

    #[test]
    fn invalid_custom_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, r#"{"type": 12}"#).unwrap();
        let err = JsonSchemaValidator::from_file(&path, Element::Phenopacket).unwrap_err();
        assert!(matches!(err, PhenopacketError::Schema(_)));
    }
}
