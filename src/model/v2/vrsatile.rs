use serde::{Deserialize, Serialize};

use super::OntologyClass;

enum_serde!(molecule_context_serde, crate::model::v2::MoleculeContext);

/// A gene, e.g. `HGNC:3603 | FBN1`
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneDescriptor {
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value_id: String,
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub symbol: String,
    #[prost(string, tag = "3")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[prost(string, repeated, tag = "4")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternate_ids: Vec<String>,
    #[prost(string, repeated, tag = "5")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub xrefs: Vec<String>,
    #[prost(string, repeated, tag = "6")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternate_symbols: Vec<String>,
}

/// Describes a variant through its expressions, VCF record and gene context
///
/// The VRS `variation` (tag 2) and `extensions` (tag 10) are not part
/// of the model and are skipped when decoding.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VariationDescriptor {
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[prost(string, tag = "3")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub label: String,
    #[prost(string, tag = "4")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[prost(message, optional, tag = "5")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gene_context: Option<GeneDescriptor>,
    #[prost(message, repeated, tag = "6")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expressions: Vec<Expression>,
    #[prost(message, optional, tag = "7")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcf_record: Option<VcfRecord>,
    #[prost(string, repeated, tag = "8")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub xrefs: Vec<String>,
    #[prost(string, repeated, tag = "9")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternate_labels: Vec<String>,
    #[prost(enumeration = "MoleculeContext", tag = "11")]
    #[serde(
        with = "molecule_context_serde",
        skip_serializing_if = "crate::model::is_default"
    )]
    pub molecule_context: i32,
    #[prost(message, optional, tag = "12")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structural_type: Option<OntologyClass>,
    #[prost(string, tag = "13")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub vrs_ref_allele_seq: String,
    /// Zygosity, usually a GENO term
    #[prost(message, optional, tag = "14")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allelic_state: Option<OntologyClass>,
}

/// A variant in a given syntax, e.g. `hgvs.c` `NM_000138.4:c.6751T>A`
#[derive(Clone, PartialEq, Eq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Expression {
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub syntax: String,
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
    #[prost(string, tag = "3")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VcfRecord {
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub genome_assembly: String,
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub chrom: String,
    #[prost(uint64, tag = "3")]
    #[serde(
        with = "crate::model::int64_string",
        skip_serializing_if = "crate::model::is_default"
    )]
    pub pos: u64,
    #[prost(string, tag = "4")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[prost(string, tag = "5")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub r#ref: String,
    #[prost(string, tag = "6")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub alt: String,
    #[prost(string, tag = "7")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub qual: String,
    #[prost(string, tag = "8")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub filter: String,
    #[prost(string, tag = "9")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub info: String,
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
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum MoleculeContext {
    UnspecifiedMoleculeContext = 0,
    Genomic = 1,
    Transcript = 2,
    Protein = 3,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn vcf_position_as_string() {
        let record = VcfRecord {
            genome_assembly: "GRCh38".into(),
            chrom: "chr15".into(),
            pos: 48_474_628,
            r#ref: "A".into(),
            alt: "G".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["pos"], "48474628");
        assert_eq!(value["ref"], "A");

        let parsed: VcfRecord =
            serde_json::from_str(r#"{"chrom": "chr15", "pos": 48474628}"#).unwrap();
        assert_eq!(parsed.pos, 48_474_628);
    }

    #[test]
    fn molecule_context_lowercase() {
        let descriptor = VariationDescriptor {
            molecule_context: MoleculeContext::Genomic.into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(value["moleculeContext"], "genomic");
    }
}
