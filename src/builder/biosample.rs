use crate::model::v2::{
    Biosample, File, Measurement, OntologyClass, PhenotypicFeature, Procedure, TimeElement,
};

/// Builds a [`Biosample`], e.g. a tumor biopsy
pub struct BiosampleBuilder {
    biosample: Biosample,
}

impl BiosampleBuilder {
    pub fn builder<S: Into<String>>(id: S) -> Self {
        Self {
            biosample: Biosample {
                id: id.into(),
                ..Default::default()
            },
        }
    }

    pub fn individual_id<S: Into<String>>(mut self, id: S) -> Self {
        self.biosample.individual_id = id.into();
        self
    }

    pub fn derived_from_id<S: Into<String>>(mut self, id: S) -> Self {
        self.biosample.derived_from_id = id.into();
        self
    }

    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.biosample.description = description.into();
        self
    }

    pub fn sampled_tissue(mut self, tissue: OntologyClass) -> Self {
        self.biosample.sampled_tissue = Some(tissue);
        self
    }

    pub fn sample_type(mut self, sample_type: OntologyClass) -> Self {
        self.biosample.sample_type = Some(sample_type);
        self
    }

    pub fn add_phenotypic_feature(mut self, feature: PhenotypicFeature) -> Self {
        self.biosample.phenotypic_features.push(feature);
        self
    }

    pub fn add_measurement(mut self, measurement: Measurement) -> Self {
        self.biosample.measurements.push(measurement);
        self
    }

    pub fn taxonomy(mut self, taxonomy: OntologyClass) -> Self {
        self.biosample.taxonomy = Some(taxonomy);
        self
    }

    pub fn time_of_collection(mut self, time: TimeElement) -> Self {
        self.biosample.time_of_collection = Some(time);
        self
    }

    pub fn histological_diagnosis(mut self, diagnosis: OntologyClass) -> Self {
        self.biosample.histological_diagnosis = Some(diagnosis);
        self
    }

    pub fn tumor_progression(mut self, progression: OntologyClass) -> Self {
        self.biosample.tumor_progression = Some(progression);
        self
    }

    pub fn tumor_grade(mut self, grade: OntologyClass) -> Self {
        self.biosample.tumor_grade = Some(grade);
        self
    }

    pub fn pathological_stage(mut self, stage: OntologyClass) -> Self {
        self.biosample.pathological_stage = Some(stage);
        self
    }

    pub fn add_pathological_tnm_finding(mut self, finding: OntologyClass) -> Self {
        self.biosample.pathological_tnm_finding.push(finding);
        self
    }

    pub fn add_diagnostic_marker(mut self, marker: OntologyClass) -> Self {
        self.biosample.diagnostic_markers.push(marker);
        self
    }

    pub fn procedure(mut self, procedure: Procedure) -> Self {
        self.biosample.procedure = Some(procedure);
        self
    }

    pub fn add_file(mut self, file: File) -> Self {
        self.biosample.files.push(file);
        self
    }

    pub fn material_sample(mut self, material: OntologyClass) -> Self {
        self.biosample.material_sample = Some(material);
        self
    }

    pub fn sample_processing(mut self, processing: OntologyClass) -> Self {
        self.biosample.sample_processing = Some(processing);
        self
    }

    pub fn sample_storage(mut self, storage: OntologyClass) -> Self {
        self.biosample.sample_storage = Some(storage);
        self
    }

    pub fn build(self) -> Biosample {
        self.biosample
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::builder::{ontology_class, ProcedureBuilder, TimeElements};

    #[test]
    fn tumor_biopsy() {
        let biosample = BiosampleBuilder::builder("biosample.1")
            .individual_id("patient.1")
            .sampled_tissue(ontology_class("UBERON:0001256", "wall of urinary bladder"))
            .histological_diagnosis(ontology_class("NCIT:C39853", "Infiltrating Urothelial Carcinoma"))
            .add_pathological_tnm_finding(ontology_class("NCIT:C48766", "pT2b Stage Finding"))
            .procedure(ProcedureBuilder::of("NCIT:C5189", "Radical Cystoprostatectomy"))
            .time_of_collection(TimeElements::age("P52Y2M").unwrap())
            .build();
        assert_eq!(biosample.individual_id, "patient.1");
        assert_eq!(biosample.pathological_tnm_finding.len(), 1);
        assert!(biosample.procedure.is_some());
    }
}
