use super::constants;
use crate::model::v2::{Evidence, ExternalReference, OntologyClass};

/// Builds the [`Evidence`] that supports an observation
pub struct EvidenceBuilder {
    evidence: Evidence,
}

impl EvidenceBuilder {
    pub fn of(evidence_code: OntologyClass) -> Evidence {
        Self::builder(evidence_code).build()
    }

    pub fn builder(evidence_code: OntologyClass) -> Self {
        Self {
            evidence: Evidence {
                evidence_code: Some(evidence_code),
                reference: None,
            },
        }
    }

    /// Evidence from a publication, e.g. `PMID:21532993`
    ///
    /// ```
    /// use phenopacket_tools::builder::EvidenceBuilder;
    ///
    /// let evidence = EvidenceBuilder::author_statement_evidence("PMID:21532993", "Case report");
    /// assert_eq!(evidence.evidence_code.unwrap().id, "ECO:0006017");
    /// assert_eq!(evidence.reference.unwrap().id, "PMID:21532993");
    /// ```
    pub fn author_statement_evidence<S: Into<String>, T: Into<String>>(
        reference_id: S,
        description: T,
    ) -> Evidence {
        Self::builder(constants::evidence::author_statement())
            .reference(ExternalReferenceBuilder::of(reference_id, description))
            .build()
    }

    pub fn reference(mut self, reference: ExternalReference) -> Self {
        self.evidence.reference = Some(reference);
        self
    }

    pub fn build(self) -> Evidence {
        self.evidence
    }
}

/// Builds an [`ExternalReference`] to a publication or database entry
pub struct ExternalReferenceBuilder {
    reference: ExternalReference,
}

impl ExternalReferenceBuilder {
    pub fn of<S: Into<String>, T: Into<String>>(id: S, description: T) -> ExternalReference {
        Self::builder(id).description(description).build()
    }

    pub fn builder<S: Into<String>>(id: S) -> Self {
        Self {
            reference: ExternalReference {
                id: id.into(),
                ..Default::default()
            },
        }
    }

    /// A URL or other resolvable pointer
    pub fn reference<S: Into<String>>(mut self, reference: S) -> Self {
        self.reference.reference = reference.into();
        self
    }

    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.reference.description = description.into();
        self
    }

    pub fn build(self) -> ExternalReference {
        self.reference
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn external_reference() {
        let reference = ExternalReferenceBuilder::builder("PMID:19752522")
            .reference("https://pubmed.ncbi.nlm.nih.gov/19752522")
            .description("Prenatal diagnosis of fetal cataract")
            .build();
        assert_eq!(reference.id, "PMID:19752522");
        assert!(reference.reference.starts_with("https://"));
    }
}
