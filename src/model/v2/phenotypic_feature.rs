use serde::{Deserialize, Serialize};

use super::{Evidence, OntologyClass, TimeElement};

/// A phenotypic observation, e.g. a sign or symptom, or its explicit absence
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhenotypicFeature {
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// The observed phenotype, usually an HPO term
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<OntologyClass>,
    /// `true` if the phenotype was looked for and found to be absent
    #[prost(bool, tag = "3")]
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub excluded: bool,
    #[prost(message, optional, tag = "4")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<OntologyClass>,
    #[prost(message, repeated, tag = "5")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<OntologyClass>,
    #[prost(message, optional, tag = "6")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onset: Option<TimeElement>,
    #[prost(message, optional, tag = "7")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<TimeElement>,
    #[prost(message, repeated, tag = "8")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub evidence: Vec<Evidence>,
}
