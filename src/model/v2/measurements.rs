use serde::{Deserialize, Serialize};

use super::{OntologyClass, Procedure, TimeElement};

/// A measurement, e.g. a lab test, taken from an individual or a biosample
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Measurement {
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// What was measured, usually a LOINC code
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assay: Option<OntologyClass>,
    #[prost(oneof = "measurement::MeasurementValue", tags = "3, 4")]
    #[serde(flatten)]
    pub measurement_value: Option<measurement::MeasurementValue>,
    #[prost(message, optional, tag = "5")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_observed: Option<TimeElement>,
    #[prost(message, optional, tag = "6")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub procedure: Option<Procedure>,
}

pub mod measurement {
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, ::prost::Oneof, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub enum MeasurementValue {
        #[prost(message, tag = "3")]
        Value(super::Value),
        #[prost(message, tag = "4")]
        ComplexValue(super::ComplexValue),
    }
}

/// Either a quantity or an ordinal/nominal ontology class
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Value {
    #[prost(oneof = "value::Value", tags = "1, 2")]
    #[serde(flatten)]
    pub value: Option<value::Value>,
}

pub mod value {
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, ::prost::Oneof, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub enum Value {
        #[prost(message, tag = "1")]
        Quantity(super::Quantity),
        #[prost(message, tag = "2")]
        OntologyClass(super::OntologyClass),
    }
}

/// Several typed quantities measured together, e.g. a blood pressure
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComplexValue {
    #[prost(message, repeated, tag = "1")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub typed_quantities: Vec<TypedQuantity>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Quantity {
    /// Usually a UCUM unit, e.g. `UCUM:mm[Hg]`
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<OntologyClass>,
    #[prost(double, tag = "2")]
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub value: f64,
    #[prost(message, optional, tag = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_range: Option<ReferenceRange>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypedQuantity {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<OntologyClass>,
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReferenceRange {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<OntologyClass>,
    #[prost(double, tag = "2")]
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub low: f64,
    #[prost(double, tag = "3")]
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub high: f64,
}
