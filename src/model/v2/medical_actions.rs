use serde::{Deserialize, Serialize};

use super::{ExternalReference, OntologyClass, Procedure, Quantity, TimeElement, TimeInterval};

/// A clinically relevant action, e.g. a treatment or a procedure
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MedicalAction {
    #[prost(oneof = "medical_action::Action", tags = "1, 2, 3, 4")]
    #[serde(flatten)]
    pub action: Option<medical_action::Action>,
    #[prost(message, optional, tag = "5")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatment_target: Option<OntologyClass>,
    #[prost(message, optional, tag = "6")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatment_intent: Option<OntologyClass>,
    #[prost(message, optional, tag = "7")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_to_treatment: Option<OntologyClass>,
    #[prost(message, repeated, tag = "8")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub adverse_events: Vec<OntologyClass>,
    #[prost(message, optional, tag = "9")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatment_termination_reason: Option<OntologyClass>,
}

pub mod medical_action {
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, ::prost::Oneof, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub enum Action {
        #[prost(message, tag = "1")]
        Procedure(super::Procedure),
        #[prost(message, tag = "2")]
        Treatment(super::Treatment),
        #[prost(message, tag = "3")]
        RadiationTherapy(super::RadiationTherapy),
        #[prost(message, tag = "4")]
        TherapeuticRegimen(super::TherapeuticRegimen),
    }
}

/// Administration of an agent, e.g. a drug
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Treatment {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<OntologyClass>,
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_of_administration: Option<OntologyClass>,
    #[prost(message, repeated, tag = "3")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dose_intervals: Vec<DoseInterval>,
    #[prost(enumeration = "treatment::DrugType", tag = "4")]
    #[serde(
        with = "treatment::drug_type_serde",
        skip_serializing_if = "crate::model::is_default"
    )]
    pub drug_type: i32,
    #[prost(message, optional, tag = "5")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cumulative_dose: Option<Quantity>,
}

pub mod treatment {
    use serde::{Deserialize, Serialize};

    enum_serde!(drug_type_serde, crate::model::v2::treatment::DrugType);

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
    pub enum DrugType {
        UnknownDrugType = 0,
        Prescription = 1,
        EhrMedicationList = 2,
        AdministrationRelatedToProcedure = 3,
    }
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DoseInterval {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_frequency: Option<OntologyClass>,
    #[prost(message, optional, tag = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<TimeInterval>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RadiationTherapy {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modality: Option<OntologyClass>,
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_site: Option<OntologyClass>,
    /// Total dose in Gy
    #[prost(int32, tag = "3")]
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub dosage: i32,
    #[prost(int32, tag = "4")]
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub fractions: i32,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TherapeuticRegimen {
    #[prost(oneof = "therapeutic_regimen::Identifier", tags = "1, 2")]
    #[serde(flatten)]
    pub identifier: Option<therapeutic_regimen::Identifier>,
    #[prost(message, optional, tag = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<TimeElement>,
    #[prost(message, optional, tag = "4")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<TimeElement>,
    #[prost(enumeration = "therapeutic_regimen::RegimenStatus", tag = "5")]
    #[serde(
        with = "therapeutic_regimen::regimen_status_serde",
        skip_serializing_if = "crate::model::is_default"
    )]
    pub regimen_status: i32,
}

pub mod therapeutic_regimen {
    use serde::{Deserialize, Serialize};

    enum_serde!(
        regimen_status_serde,
        crate::model::v2::therapeutic_regimen::RegimenStatus
    );

    #[derive(Clone, PartialEq, ::prost::Oneof, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub enum Identifier {
        #[prost(message, tag = "1")]
        ExternalReference(super::ExternalReference),
        #[prost(message, tag = "2")]
        OntologyClass(super::OntologyClass),
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
    pub enum RegimenStatus {
        UnknownStatus = 0,
        Started = 1,
        Completed = 2,
        Discontinued = 3,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn treatment_action_json() {
        let action = MedicalAction {
            action: Some(medical_action::Action::Treatment(Treatment {
                agent: Some(OntologyClass::new("DrugCentral:1610", "latanoprost")),
                drug_type: treatment::DrugType::Prescription.into(),
                ..Default::default()
            })),
            ..Default::default()
        };
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(value["treatment"]["agent"]["label"], "latanoprost");
        assert_eq!(value["treatment"]["drugType"], "PRESCRIPTION");

        let parsed: MedicalAction = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, action);
    }

    #[test]
    fn procedure_action() {
        let parsed: MedicalAction =
            serde_json::from_str(r#"{"procedure": {"code": {"id": "NCIT:C51585"}}}"#).unwrap();
        assert!(matches!(
            parsed.action,
            Some(medical_action::Action::Procedure(Procedure { .. }))
        ));
    }
}
