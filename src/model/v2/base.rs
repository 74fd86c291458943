use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::Timestamp;

/// A class (term) of an ontology, e.g. `HP:0001166 | Arachnodactyly`
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OntologyClass {
    /// CURIE of the term, e.g. `HP:0001166`
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub label: String,
}

impl OntologyClass {
    /// Constructs a new class from its CURIE and label
    pub fn new<S: Into<String>, T: Into<String>>(id: S, label: T) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Returns the prefix of the CURIE, e.g. `HP` for `HP:0001166`
    pub fn prefix(&self) -> Option<&str> {
        self.id
            .split_once(':')
            .map(|(prefix, _)| prefix)
            .filter(|prefix| !prefix.is_empty())
    }
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExternalReference {
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[prost(string, tag = "2")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub reference: String,
    #[prost(string, tag = "3")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// Supporting evidence for an assertion, e.g. `ECO:0000033 | author statement supported by traceable reference`
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Evidence {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence_code: Option<OntologyClass>,
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<ExternalReference>,
}

/// A clinical procedure performed on a subject
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Procedure {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<OntologyClass>,
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_site: Option<OntologyClass>,
    #[prost(message, optional, tag = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performed: Option<TimeElement>,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GestationalAge {
    #[prost(int32, tag = "1")]
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub weeks: i32,
    #[prost(int32, tag = "2")]
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub days: i32,
}

/// An age as ISO 8601 duration, e.g. `P3Y2M`
#[derive(Clone, PartialEq, Eq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Age {
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub iso8601duration: String,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AgeRange {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<Age>,
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<Age>,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimeInterval {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<Timestamp>,
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<Timestamp>,
}

/// A point or period in time, expressed in one of several ways
#[derive(Clone, PartialEq, Eq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimeElement {
    #[prost(oneof = "time_element::Element", tags = "6, 1, 2, 3, 4, 5")]
    #[serde(flatten)]
    pub element: Option<time_element::Element>,
}

pub mod time_element {
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Eq, ::prost::Oneof, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub enum Element {
        #[prost(message, tag = "6")]
        GestationalAge(super::GestationalAge),
        #[prost(message, tag = "1")]
        Age(super::Age),
        #[prost(message, tag = "2")]
        AgeRange(super::AgeRange),
        #[prost(message, tag = "3")]
        OntologyClass(super::OntologyClass),
        #[prost(message, tag = "4")]
        Timestamp(crate::model::Timestamp),
        #[prost(message, tag = "5")]
        Interval(super::TimeInterval),
    }
}

/// A file, e.g. a VCF or a BAM, associated with individuals
#[derive(Clone, PartialEq, Eq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct File {
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub uri: String,
    /// Maps individual or biosample ids to the sample identifiers inside the file
    #[prost(btree_map = "string, string", tag = "2")]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub individual_to_file_identifiers: BTreeMap<String, String>,
    /// Free form attributes, e.g. `fileFormat` or `genomeAssembly`
    #[prost(btree_map = "string, string", tag = "3")]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub file_attributes: BTreeMap<String, String>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn curie_prefix() {
        assert_eq!(OntologyClass::new("HP:0001166", "").prefix(), Some("HP"));
        assert_eq!(OntologyClass::new("NCIT:C3262", "").prefix(), Some("NCIT"));
        assert_eq!(OntologyClass::new("Arachnodactyly", "").prefix(), None);
        assert_eq!(OntologyClass::new(":123", "").prefix(), None);
    }

    #[test]
    fn flattened_time_element() {
        let element = TimeElement {
            element: Some(time_element::Element::Age(Age {
                iso8601duration: "P3Y".into(),
            })),
        };
        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json, serde_json::json!({"age": {"iso8601duration": "P3Y"}}));

        let parsed: TimeElement = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, element);
    }

    #[test]
    fn time_element_with_timestamp() {
        let parsed: TimeElement =
            serde_json::from_str(r#"{"timestamp": "2021-05-14T10:35:00Z"}"#).unwrap();
        assert!(matches!(
            parsed.element,
            Some(time_element::Element::Timestamp(_))
        ));
    }

    #[test]
    fn empty_time_element() {
        let parsed: TimeElement = serde_json::from_str("{}").unwrap();
        assert!(parsed.element.is_none());
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "{}");
    }
}
