use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::OntologyClass;

enum_serde!(hts_format_serde, crate::model::v1::hts_file::HtsFormat);

#[derive(Clone, PartialEq, Eq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Gene {
    /// e.g. `HGNC:3603`
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[prost(string, repeated, tag = "2")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternate_ids: Vec<String>,
    #[prost(string, tag = "3")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub symbol: String,
}

/// A variant described by exactly one kind of allele
#[derive(Clone, PartialEq, Eq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Variant {
    #[prost(oneof = "variant::Allele", tags = "2, 3, 4, 5")]
    #[serde(flatten)]
    pub allele: Option<variant::Allele>,
    /// Usually a GENO term, e.g. `GENO:0000135 | heterozygous`
    #[prost(message, optional, tag = "6")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zygosity: Option<OntologyClass>,
}

pub mod variant {
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Eq, ::prost::Oneof, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub enum Allele {
        #[prost(message, tag = "2")]
        HgvsAllele(super::HgvsAllele),
        #[prost(message, tag = "3")]
        VcfAllele(super::VcfAllele),
        #[prost(message, tag = "4")]
        SpdiAllele(super::SpdiAllele),
        #[prost(message, tag = "5")]
        IscnAllele(super::IscnAllele),
    }
}

#[derive(Clone, PartialEq, Eq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HgvsAllele {
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub hgvs: String,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VcfAllele {
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub vcf_version: String,
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub genome_assembly: String,
    #[prost(string, tag = "3")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[prost(string, tag = "4")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub chr: String,
    #[prost(int32, tag = "5")]
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub pos: i32,
    #[prost(string, tag = "6")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub r#ref: String,
    #[prost(string, tag = "7")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub alt: String,
    #[prost(string, tag = "8")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub info: String,
}

/// Sequence Position Deletion Insertion, e.g. `NC_000001.10:12345:1:A`
#[derive(Clone, PartialEq, Eq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpdiAllele {
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub seq_id: String,
    #[prost(int32, tag = "3")]
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub position: i32,
    #[prost(string, tag = "4")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub deleted_sequence: String,
    #[prost(string, tag = "5")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub inserted_sequence: String,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IscnAllele {
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub iscn: String,
}

/// A high-throughput sequencing file, e.g. a VCF or BAM
#[derive(Clone, PartialEq, Eq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HtsFile {
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub uri: String,
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[prost(enumeration = "hts_file::HtsFormat", tag = "3")]
    #[serde(
        with = "hts_format_serde",
        skip_serializing_if = "crate::model::is_default"
    )]
    pub hts_format: i32,
    #[prost(string, tag = "4")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub genome_assembly: String,
    #[prost(btree_map = "string, string", tag = "5")]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub individual_to_sample_identifiers: BTreeMap<String, String>,
}

pub mod hts_file {
    use serde::{Deserialize, Serialize};

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
    pub enum HtsFormat {
        Unknown = 0,
        Sam = 1,
        Bam = 2,
        Cram = 3,
        Vcf = 4,
        Bcf = 5,
        Gvcf = 6,
        Fastq = 7,
    }
}
