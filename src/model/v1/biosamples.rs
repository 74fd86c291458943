use serde::{Deserialize, Serialize};

use super::{Age, AgeRange, HtsFile, OntologyClass, PhenotypicFeature, Procedure, Variant};

#[derive(Clone, PartialEq, Eq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Biosample {
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub individual_id: String,
    #[prost(string, tag = "3")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[prost(message, optional, tag = "4")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sampled_tissue: Option<OntologyClass>,
    #[prost(message, repeated, tag = "5")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub phenotypic_features: Vec<PhenotypicFeature>,
    #[prost(message, optional, tag = "6")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxonomy: Option<OntologyClass>,
    #[prost(oneof = "biosample::IndividualAgeAtCollection", tags = "7, 8")]
    #[serde(flatten)]
    pub individual_age_at_collection: Option<biosample::IndividualAgeAtCollection>,
    #[prost(message, optional, tag = "9")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub histological_diagnosis: Option<OntologyClass>,
    #[prost(message, optional, tag = "10")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tumor_progression: Option<OntologyClass>,
    #[prost(message, optional, tag = "11")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tumor_grade: Option<OntologyClass>,
    #[prost(message, repeated, tag = "12")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostic_markers: Vec<OntologyClass>,
    #[prost(message, optional, tag = "13")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub procedure: Option<Procedure>,
    #[prost(message, repeated, tag = "14")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hts_files: Vec<HtsFile>,
    #[prost(message, repeated, tag = "15")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<Variant>,
    #[prost(bool, tag = "16")]
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub is_control_sample: bool,
}

pub mod biosample {
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Eq, ::prost::Oneof, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub enum IndividualAgeAtCollection {
        #[prost(message, tag = "7")]
        AgeOfIndividualAtCollection(super::Age),
        #[prost(message, tag = "8")]
        AgeRangeOfIndividualAtCollection(super::AgeRange),
    }
}
