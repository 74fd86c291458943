use chrono::{DateTime, Utc};

use crate::model::v2::{ExternalReference, MetaData, Resource, Update};
use crate::model::Timestamp;
use crate::{PxfResult, PHENOPACKET_SCHEMA_VERSION};

/// Builds the [`MetaData`] of a phenopacket, family or cohort
///
/// The schema version is always set to the current version.
pub struct MetaDataBuilder {
    meta_data: MetaData,
}

impl MetaDataBuilder {
    /// # Errors
    ///
    /// [`PhenopacketError::InvalidTimestamp`](crate::PhenopacketError::InvalidTimestamp)
    /// if `created` is not an RFC 3339 timestamp
    pub fn builder<S: Into<String>>(created: &str, created_by: S) -> PxfResult<Self> {
        Ok(Self::from_timestamp(Timestamp::from_rfc3339(created)?, created_by))
    }

    pub fn from_datetime<S: Into<String>>(created: DateTime<Utc>, created_by: S) -> Self {
        Self::from_timestamp(created.into(), created_by)
    }

    fn from_timestamp<S: Into<String>>(created: Timestamp, created_by: S) -> Self {
        Self {
            meta_data: MetaData {
                created: Some(created),
                created_by: created_by.into(),
                phenopacket_schema_version: PHENOPACKET_SCHEMA_VERSION.to_string(),
                ..Default::default()
            },
        }
    }

    pub fn submitted_by<S: Into<String>>(mut self, submitter: S) -> Self {
        self.meta_data.submitted_by = submitter.into();
        self
    }

    pub fn add_resource(mut self, resource: Resource) -> Self {
        self.meta_data.resources.push(resource);
        self
    }

    pub fn add_update(mut self, update: Update) -> Self {
        self.meta_data.updates.push(update);
        self
    }

    pub fn add_external_reference(mut self, reference: ExternalReference) -> Self {
        self.meta_data.external_references.push(reference);
        self
    }

    pub fn build(self) -> MetaData {
        self.meta_data
    }
}

/// The [`Resource`]s of commonly used ontologies and terminologies
///
/// The namespace prefixes must match the CURIE prefixes of the ontology
/// classes used in a phenopacket.
pub struct Resources;

impl Resources {
    fn resource(
        id: &str,
        name: &str,
        url: &str,
        version: &str,
        namespace_prefix: &str,
        iri_prefix: &str,
    ) -> Resource {
        Resource {
            id: id.to_string(),
            name: name.to_string(),
            url: url.to_string(),
            version: version.to_string(),
            namespace_prefix: namespace_prefix.to_string(),
            iri_prefix: iri_prefix.to_string(),
        }
    }

    pub fn hpo_version(version: &str) -> Resource {
        Self::resource(
            "hp",
            "human phenotype ontology",
            "http://purl.obolibrary.org/obo/hp.owl",
            version,
            "HP",
            "http://purl.obolibrary.org/obo/HP_",
        )
    }

    pub fn mondo_version(version: &str) -> Resource {
        Self::resource(
            "mondo",
            "Mondo Disease Ontology",
            "http://purl.obolibrary.org/obo/mondo.obo",
            version,
            "MONDO",
            "http://purl.obolibrary.org/obo/MONDO_",
        )
    }

    pub fn uberon_version(version: &str) -> Resource {
        Self::resource(
            "uberon",
            "Uber-anatomy ontology",
            "http://purl.obolibrary.org/obo/uberon.owl",
            version,
            "UBERON",
            "http://purl.obolibrary.org/obo/UBERON_",
        )
    }

    pub fn ncit_version(version: &str) -> Resource {
        Self::resource(
            "ncit",
            "NCI Thesaurus",
            "http://purl.obolibrary.org/obo/ncit.owl",
            version,
            "NCIT",
            "http://purl.obolibrary.org/obo/NCIT_",
        )
    }

    pub fn loinc_version(version: &str) -> Resource {
        Self::resource(
            "loinc",
            "Logical Observation Identifiers Names and Codes",
            "https://loinc.org",
            version,
            "LOINC",
            "https://loinc.org/",
        )
    }

    /// UCUM version 2.1
    pub fn ucum() -> Resource {
        Self::resource(
            "ucum",
            "Unified Code for Units of Measure",
            "https://ucum.org",
            "2.1",
            "UCUM",
            "https://ucum.org/",
        )
    }

    pub fn geno_version(version: &str) -> Resource {
        Self::resource(
            "geno",
            "Genotype Ontology",
            "http://purl.obolibrary.org/obo/geno.owl",
            version,
            "GENO",
            "http://purl.obolibrary.org/obo/GENO_",
        )
    }

    pub fn drug_central_version(version: &str) -> Resource {
        Self::resource(
            "drugcentral",
            "Drug Central",
            "https://drugcentral.org/",
            version,
            "DrugCentral",
            "https://drugcentral.org/drugcard/",
        )
    }

    pub fn so_version(version: &str) -> Resource {
        Self::resource(
            "so",
            "Sequence types and features ontology",
            "http://purl.obolibrary.org/obo/so.obo",
            version,
            "SO",
            "http://purl.obolibrary.org/obo/SO_",
        )
    }

    pub fn hgnc_version(version: &str) -> Resource {
        Self::resource(
            "hgnc",
            "HUGO Gene Nomenclature Committee",
            "https://www.genenames.org",
            version,
            "HGNC",
            "https://www.genenames.org/data/gene-symbol-report/#!/hgnc_id/",
        )
    }

    pub fn efo_version(version: &str) -> Resource {
        Self::resource(
            "efo",
            "Experimental Factor Ontology",
            "http://www.ebi.ac.uk/efo/efo.owl",
            version,
            "EFO",
            "http://purl.obolibrary.org/obo/EFO_",
        )
    }

    pub fn omim_version(version: &str) -> Resource {
        Self::resource(
            "omim",
            "An Online Catalog of Human Genes and Genetic Disorders",
            "https://www.omim.org",
            version,
            "OMIM",
            "https://www.omim.org/entry/",
        )
    }
}
