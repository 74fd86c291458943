use serde::{Deserialize, Serialize};

use super::{OntologyClass, Resource, Update};
use crate::model::Timestamp;

enum_serde!(sex_serde, crate::model::v2::Sex);
enum_serde!(karyotypic_sex_serde, crate::model::v2::KaryotypicSex);

#[derive(Clone, PartialEq, Eq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExternalReference {
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Evidence {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence_code: Option<OntologyClass>,
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<ExternalReference>,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Procedure {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<OntologyClass>,
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_site: Option<OntologyClass>,
}

/// An ISO 8601 duration, e.g. `P25Y3M`
#[derive(Clone, PartialEq, Eq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Age {
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub age: String,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AgeRange {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<Age>,
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<Age>,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Individual {
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[prost(string, repeated, tag = "2")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternate_ids: Vec<String>,
    #[prost(message, optional, tag = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<Timestamp>,
    #[prost(oneof = "individual::Age", tags = "4, 5")]
    #[serde(flatten)]
    pub age: Option<individual::Age>,
    #[prost(enumeration = "super::Sex", tag = "6")]
    #[serde(with = "sex_serde", skip_serializing_if = "crate::model::is_default")]
    pub sex: i32,
    #[prost(enumeration = "super::KaryotypicSex", tag = "7")]
    #[serde(
        with = "karyotypic_sex_serde",
        skip_serializing_if = "crate::model::is_default"
    )]
    pub karyotypic_sex: i32,
    #[prost(message, optional, tag = "8")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxonomy: Option<OntologyClass>,
}

pub mod individual {
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Eq, ::prost::Oneof, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub enum Age {
        #[prost(message, tag = "4")]
        AgeAtCollection(super::Age),
        #[prost(message, tag = "5")]
        AgeRangeAtCollection(super::AgeRange),
    }
}

#[derive(Clone, PartialEq, Eq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhenotypicFeature {
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<OntologyClass>,
    /// `true` if the feature was explicitly excluded
    #[prost(bool, tag = "3")]
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub negated: bool,
    #[prost(message, optional, tag = "4")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<OntologyClass>,
    #[prost(message, repeated, tag = "5")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<OntologyClass>,
    #[prost(oneof = "phenotypic_feature::Onset", tags = "6, 7, 9")]
    #[serde(flatten)]
    pub onset: Option<phenotypic_feature::Onset>,
    #[prost(message, repeated, tag = "10")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub evidence: Vec<Evidence>,
}

pub mod phenotypic_feature {
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Eq, ::prost::Oneof, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub enum Onset {
        #[prost(message, tag = "6")]
        AgeOfOnset(super::Age),
        #[prost(message, tag = "7")]
        AgeRangeOfOnset(super::AgeRange),
        #[prost(message, tag = "9")]
        ClassOfOnset(super::OntologyClass),
    }
}

#[derive(Clone, PartialEq, Eq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Disease {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<OntologyClass>,
    #[prost(oneof = "disease::Onset", tags = "2, 3, 4")]
    #[serde(flatten)]
    pub onset: Option<disease::Onset>,
    #[prost(message, repeated, tag = "5")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub disease_stage: Vec<OntologyClass>,
    #[prost(message, repeated, tag = "6")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tnm_finding: Vec<OntologyClass>,
}

pub mod disease {
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Eq, ::prost::Oneof, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub enum Onset {
        #[prost(message, tag = "2")]
        AgeOfOnset(super::Age),
        #[prost(message, tag = "3")]
        AgeRangeOfOnset(super::AgeRange),
        #[prost(message, tag = "4")]
        ClassOfOnset(super::OntologyClass),
    }
}

#[derive(Clone, PartialEq, Eq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MetaData {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub created_by: String,
    #[prost(string, tag = "3")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub submitted_by: String,
    #[prost(message, repeated, tag = "4")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<Resource>,
    #[prost(message, repeated, tag = "5")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub updates: Vec<Update>,
    #[prost(string, tag = "6")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phenopacket_schema_version: String,
    #[prost(message, repeated, tag = "7")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub external_references: Vec<ExternalReference>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn negated_feature_with_class_onset() {
        let json = r#"{
            "type": {"id": "HP:0001250", "label": "Seizure"},
            "negated": true,
            "classOfOnset": {"id": "HP:0003593", "label": "Infantile onset"}
        }"#;
        let feature: PhenotypicFeature = serde_json::from_str(json).unwrap();
        assert!(feature.negated);
        assert!(matches!(
            feature.onset,
            Some(phenotypic_feature::Onset::ClassOfOnset(_))
        ));
    }

    #[test]
    fn individual_age_at_collection() {
        let json = r#"{"id": "proband", "sex": "MALE", "ageAtCollection": {"age": "P14Y"}}"#;
        let individual: Individual = serde_json::from_str(json).unwrap();
        assert_eq!(individual.sex(), crate::model::v2::Sex::Male);
        assert_eq!(
            individual.age,
            Some(individual::Age::AgeAtCollection(Age {
                age: "P14Y".into()
            }))
        );
    }
}
