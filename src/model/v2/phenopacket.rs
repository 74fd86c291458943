use serde::{Deserialize, Serialize};

use super::time_element::Element;
use super::value;
use super::{
    measurement, medical_action, Biosample, Disease, File, Individual, Interpretation,
    Measurement, MedicalAction, MetaData, OntologyClass, Pedigree, PhenotypicFeature,
    Procedure, TimeElement,
};

/// Everything known about one individual, the main element of the schema
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Phenopacket {
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Individual>,
    #[prost(message, repeated, tag = "3")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub phenotypic_features: Vec<PhenotypicFeature>,
    #[prost(message, repeated, tag = "4")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub measurements: Vec<Measurement>,
    #[prost(message, repeated, tag = "5")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub biosamples: Vec<Biosample>,
    #[prost(message, repeated, tag = "6")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub interpretations: Vec<Interpretation>,
    #[prost(message, repeated, tag = "7")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diseases: Vec<Disease>,
    #[prost(message, repeated, tag = "8")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub medical_actions: Vec<MedicalAction>,
    #[prost(message, repeated, tag = "9")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<File>,
    #[prost(message, optional, tag = "10")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,
}

/// A proband together with their relatives and pedigree
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Family {
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proband: Option<Phenopacket>,
    #[prost(message, repeated, tag = "3")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub relatives: Vec<Phenopacket>,
    #[prost(message, optional, tag = "4")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pedigree: Option<Pedigree>,
    #[prost(message, repeated, tag = "5")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<File>,
    #[prost(message, optional, tag = "6")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,
    #[prost(bool, tag = "7")]
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub consanguinous_parents: bool,
}

/// A group of individuals related by a phenotype or a study
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Cohort {
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[prost(message, repeated, tag = "3")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<Phenopacket>,
    #[prost(message, repeated, tag = "4")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<File>,
    #[prost(message, optional, tag = "5")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,
}

impl Phenopacket {
    /// Returns the id of the subject or an empty string
    pub fn subject_id(&self) -> &str {
        self.subject
            .as_ref()
            .map(|subject| subject.id.as_str())
            .unwrap_or_default()
    }

    /// Returns every [`OntologyClass`] the phenopacket refers to
    ///
    /// The classes are returned in the order of the message fields.
    /// Metadata, files and free text are not part of the result.
    pub fn ontology_classes(&self) -> Vec<&OntologyClass> {
        let mut res = Vec::new();

        if let Some(subject) = &self.subject {
            collect_time_element(&mut res, subject.time_at_last_encounter.as_ref());
            if let Some(vital_status) = &subject.vital_status {
                collect_time_element(&mut res, vital_status.time_of_death.as_ref());
                res.extend(vital_status.cause_of_death.iter());
            }
            res.extend(subject.gender.iter());
            res.extend(subject.taxonomy.iter());
        }

        for feature in &self.phenotypic_features {
            collect_feature(&mut res, feature);
        }

        for measurement in &self.measurements {
            collect_measurement(&mut res, measurement);
        }

        for biosample in &self.biosamples {
            res.extend(biosample.sampled_tissue.iter());
            res.extend(biosample.sample_type.iter());
            for feature in &biosample.phenotypic_features {
                collect_feature(&mut res, feature);
            }
            for measurement in &biosample.measurements {
                collect_measurement(&mut res, measurement);
            }
            res.extend(biosample.taxonomy.iter());
            collect_time_element(&mut res, biosample.time_of_collection.as_ref());
            res.extend(biosample.histological_diagnosis.iter());
            res.extend(biosample.tumor_progression.iter());
            res.extend(biosample.tumor_grade.iter());
            res.extend(biosample.pathological_stage.iter());
            res.extend(biosample.pathological_tnm_finding.iter());
            res.extend(biosample.diagnostic_markers.iter());
            collect_procedure(&mut res, biosample.procedure.as_ref());
            res.extend(biosample.material_sample.iter());
            res.extend(biosample.sample_processing.iter());
            res.extend(biosample.sample_storage.iter());
        }

        for interpretation in &self.interpretations {
            if let Some(diagnosis) = &interpretation.diagnosis {
                res.extend(diagnosis.disease.iter());
                for gi in &diagnosis.genomic_interpretations {
                    if let Some(super::genomic_interpretation::Call::VariantInterpretation(vi)) =
                        &gi.call
                    {
                        if let Some(descriptor) = &vi.variation_descriptor {
                            res.extend(descriptor.structural_type.iter());
                            res.extend(descriptor.allelic_state.iter());
                        }
                    }
                }
            }
        }

        for disease in &self.diseases {
            res.extend(disease.term.iter());
            collect_time_element(&mut res, disease.onset.as_ref());
            collect_time_element(&mut res, disease.resolution.as_ref());
            res.extend(disease.disease_stage.iter());
            res.extend(disease.clinical_tnm_finding.iter());
            res.extend(disease.primary_site.iter());
            res.extend(disease.laterality.iter());
        }

        for action in &self.medical_actions {
            match &action.action {
                Some(medical_action::Action::Procedure(procedure)) => {
                    collect_procedure(&mut res, Some(procedure));
                }
                Some(medical_action::Action::Treatment(treatment)) => {
                    res.extend(treatment.agent.iter());
                    res.extend(treatment.route_of_administration.iter());
                    for interval in &treatment.dose_intervals {
                        if let Some(quantity) = &interval.quantity {
                            res.extend(quantity.unit.iter());
                        }
                        res.extend(interval.schedule_frequency.iter());
                    }
                    if let Some(quantity) = &treatment.cumulative_dose {
                        res.extend(quantity.unit.iter());
                    }
                }
                Some(medical_action::Action::RadiationTherapy(therapy)) => {
                    res.extend(therapy.modality.iter());
                    res.extend(therapy.body_site.iter());
                }
                Some(medical_action::Action::TherapeuticRegimen(regimen)) => {
                    if let Some(super::therapeutic_regimen::Identifier::OntologyClass(class)) =
                        &regimen.identifier
                    {
                        res.push(class);
                    }
                    collect_time_element(&mut res, regimen.start_time.as_ref());
                    collect_time_element(&mut res, regimen.end_time.as_ref());
                }
                None => (),
            }
            res.extend(action.treatment_target.iter());
            res.extend(action.treatment_intent.iter());
            res.extend(action.response_to_treatment.iter());
            res.extend(action.adverse_events.iter());
            res.extend(action.treatment_termination_reason.iter());
        }

        res
    }
}

fn collect_time_element<'a>(res: &mut Vec<&'a OntologyClass>, element: Option<&'a TimeElement>) {
    if let Some(TimeElement {
        element: Some(Element::OntologyClass(class)),
    }) = element
    {
        res.push(class);
    }
}

fn collect_procedure<'a>(res: &mut Vec<&'a OntologyClass>, procedure: Option<&'a Procedure>) {
    if let Some(procedure) = procedure {
        res.extend(procedure.code.iter());
        res.extend(procedure.body_site.iter());
        collect_time_element(res, procedure.performed.as_ref());
    }
}

fn collect_feature<'a>(res: &mut Vec<&'a OntologyClass>, feature: &'a PhenotypicFeature) {
    res.extend(feature.r#type.iter());
    res.extend(feature.severity.iter());
    res.extend(feature.modifiers.iter());
    collect_time_element(res, feature.onset.as_ref());
    collect_time_element(res, feature.resolution.as_ref());
    for evidence in &feature.evidence {
        res.extend(evidence.evidence_code.iter());
    }
}

fn collect_measurement<'a>(res: &mut Vec<&'a OntologyClass>, measurement: &'a Measurement) {
    res.extend(measurement.assay.iter());
    match &measurement.measurement_value {
        Some(measurement::MeasurementValue::Value(value)) => match &value.value {
            Some(value::Value::Quantity(quantity)) => res.extend(quantity.unit.iter()),
            Some(value::Value::OntologyClass(class)) => res.push(class),
            None => (),
        },
        Some(measurement::MeasurementValue::ComplexValue(complex)) => {
            for typed in &complex.typed_quantities {
                res.extend(typed.r#type.iter());
                if let Some(quantity) = &typed.quantity {
                    res.extend(quantity.unit.iter());
                }
            }
        }
        None => (),
    }
    collect_time_element(res, measurement.time_observed.as_ref());
    collect_procedure(res, measurement.procedure.as_ref());
}
