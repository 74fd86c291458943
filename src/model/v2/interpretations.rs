use serde::{Deserialize, Serialize};

use super::{GeneDescriptor, OntologyClass, VariationDescriptor};

/// The interpretation of a genomic analysis, e.g. a diagnosis
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Interpretation {
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[prost(enumeration = "interpretation::ProgressStatus", tag = "2")]
    #[serde(
        with = "interpretation::progress_status_serde",
        skip_serializing_if = "crate::model::is_default"
    )]
    pub progress_status: i32,
    #[prost(message, optional, tag = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<Diagnosis>,
    #[prost(string, tag = "4")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub summary: String,
}

pub mod interpretation {
    use serde::{Deserialize, Serialize};

    enum_serde!(
        progress_status_serde,
        crate::model::v2::interpretation::ProgressStatus
    );

    #[derive(
        Clone,
        Copy,
        Debug,
        PartialEq,
        Eq,
        Hash,
        PartialOrd,
        Ord,
        ::prost::Enumeration,
        Serialize,
        Deserialize,
    )]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    #[repr(i32)]
    pub enum ProgressStatus {
        UnknownProgress = 0,
        InProgress = 1,
        Completed = 2,
        Solved = 3,
        Unsolved = 4,
    }
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Diagnosis {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disease: Option<OntologyClass>,
    #[prost(message, repeated, tag = "2")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub genomic_interpretations: Vec<GenomicInterpretation>,
}

/// A gene or a variant and its role for the diagnosis
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenomicInterpretation {
    /// The id of the subject or the biosample that was analysed
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub subject_or_biosample_id: String,
    #[prost(enumeration = "genomic_interpretation::InterpretationStatus", tag = "2")]
    #[serde(
        with = "genomic_interpretation::interpretation_status_serde",
        skip_serializing_if = "crate::model::is_default"
    )]
    pub interpretation_status: i32,
    #[prost(oneof = "genomic_interpretation::Call", tags = "3, 4")]
    #[serde(flatten)]
    pub call: Option<genomic_interpretation::Call>,
}

pub mod genomic_interpretation {
    use serde::{Deserialize, Serialize};

    enum_serde!(
        interpretation_status_serde,
        crate::model::v2::genomic_interpretation::InterpretationStatus
    );

    #[derive(
        Clone,
        Copy,
        Debug,
        PartialEq,
        Eq,
        Hash,
        PartialOrd,
        Ord,
        ::prost::Enumeration,
        Serialize,
        Deserialize,
    )]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    #[repr(i32)]
    pub enum InterpretationStatus {
        UnknownStatus = 0,
        Rejected = 1,
        Candidate = 2,
        Contributory = 3,
        Causative = 4,
    }

    #[derive(Clone, PartialEq, ::prost::Oneof, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub enum Call {
        #[prost(message, tag = "3")]
        Gene(super::GeneDescriptor),
        #[prost(message, tag = "4")]
        VariantInterpretation(super::VariantInterpretation),
    }
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VariantInterpretation {
    #[prost(enumeration = "AcmgPathogenicityClassification", tag = "1")]
    #[serde(
        with = "acmg_serde",
        skip_serializing_if = "crate::model::is_default"
    )]
    pub acmg_pathogenicity_classification: i32,
    #[prost(enumeration = "TherapeuticActionability", tag = "2")]
    #[serde(
        with = "actionability_serde",
        skip_serializing_if = "crate::model::is_default"
    )]
    pub therapeutic_actionability: i32,
    #[prost(message, optional, tag = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation_descriptor: Option<VariationDescriptor>,
}

enum_serde!(acmg_serde, crate::model::v2::AcmgPathogenicityClassification);
enum_serde!(actionability_serde, crate::model::v2::TherapeuticActionability);

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    ::prost::Enumeration,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum AcmgPathogenicityClassification {
    NotProvided = 0,
    Benign = 1,
    LikelyBenign = 2,
    UncertainSignificance = 3,
    LikelyPathogenic = 4,
    Pathogenic = 5,
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    ::prost::Enumeration,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum TherapeuticActionability {
    UnknownActionability = 0,
    NotActionable = 1,
    Actionable = 2,
}

impl GenomicInterpretation {
    /// Returns the gene, directly called or from the variant's gene context
    pub fn gene(&self) -> Option<&GeneDescriptor> {
        match &self.call {
            Some(genomic_interpretation::Call::Gene(gene)) => Some(gene),
            Some(genomic_interpretation::Call::VariantInterpretation(variant)) => variant
                .variation_descriptor
                .as_ref()
                .and_then(|descriptor| descriptor.gene_context.as_ref()),
            None => None,
        }
    }
}
