use serde::{Deserialize, Serialize};

use super::{OntologyClass, TimeElement};

/// A disease diagnosed in an individual, usually a MONDO or OMIM term
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Disease {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<OntologyClass>,
    #[prost(bool, tag = "2")]
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub excluded: bool,
    #[prost(message, optional, tag = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onset: Option<TimeElement>,
    #[prost(message, optional, tag = "4")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<TimeElement>,
    #[prost(message, repeated, tag = "5")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub disease_stage: Vec<OntologyClass>,
    #[prost(message, repeated, tag = "6")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub clinical_tnm_finding: Vec<OntologyClass>,
    #[prost(message, optional, tag = "7")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_site: Option<OntologyClass>,
    #[prost(message, optional, tag = "8")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub laterality: Option<OntologyClass>,
}
