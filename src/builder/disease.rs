use super::TimeElements;
use crate::model::v2::{Disease, OntologyClass, TimeElement};
use crate::PxfResult;

/// Builds a [`Disease`] diagnosis
pub struct DiseaseBuilder {
    disease: Disease,
}

impl DiseaseBuilder {
    pub fn of<S: Into<String>, T: Into<String>>(id: S, label: T) -> Disease {
        Self::builder(OntologyClass::new(id, label)).build()
    }

    pub fn builder(term: OntologyClass) -> Self {
        Self {
            disease: Disease {
                term: Some(term),
                ..Default::default()
            },
        }
    }

    /// Marks the disease as ruled out
    pub fn excluded(mut self) -> Self {
        self.disease.excluded = true;
        self
    }

    pub fn onset(mut self, onset: TimeElement) -> Self {
        self.disease.onset = Some(onset);
        self
    }

    /// # Errors
    ///
    /// [`PhenopacketError::InvalidDuration`](crate::PhenopacketError::InvalidDuration)
    /// if the value is not a valid ISO 8601 duration
    pub fn iso8601_onset(self, iso8601duration: &str) -> PxfResult<Self> {
        Ok(self.onset(TimeElements::age(iso8601duration)?))
    }

    pub fn resolution(mut self, resolution: TimeElement) -> Self {
        self.disease.resolution = Some(resolution);
        self
    }

    pub fn add_disease_stage(mut self, stage: OntologyClass) -> Self {
        self.disease.disease_stage.push(stage);
        self
    }

    pub fn add_clinical_tnm_finding(mut self, finding: OntologyClass) -> Self {
        self.disease.clinical_tnm_finding.push(finding);
        self
    }

    pub fn primary_site(mut self, site: OntologyClass) -> Self {
        self.disease.primary_site = Some(site);
        self
    }

    pub fn laterality(mut self, laterality: OntologyClass) -> Self {
        self.disease.laterality = Some(laterality);
        self
    }

    pub fn build(self) -> Disease {
        self.disease
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::builder::constants;

    #[test]
    fn disease_with_onset() {
        let disease = DiseaseBuilder::builder(OntologyClass::new(
            "MONDO:0008327",
            "exfoliation syndrome",
        ))
        .onset(TimeElements::adult_onset())
        .primary_site(OntologyClass::new("UBERON:0004549", "right eye"))
        .laterality(constants::laterality::right())
        .build();
        assert_eq!(disease.term.unwrap().id, "MONDO:0008327");
        assert_eq!(disease.primary_site.unwrap().label, "right eye");
        assert!(!disease.excluded);
    }
}
