use serde::{Deserialize, Serialize};

use super::{OntologyClass, TimeElement};
use crate::model::Timestamp;

enum_serde!(sex_serde, crate::model::v2::Sex);
enum_serde!(karyotypic_sex_serde, crate::model::v2::KaryotypicSex);

/// The subject of a phenopacket
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Individual {
    #[prost(string, tag = "1")]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[prost(string, repeated, tag = "2")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternate_ids: Vec<String>,
    #[prost(message, optional, tag = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<Timestamp>,
    #[prost(message, optional, tag = "4")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_at_last_encounter: Option<TimeElement>,
    #[prost(message, optional, tag = "5")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vital_status: Option<VitalStatus>,
    #[prost(enumeration = "Sex", tag = "6")]
    #[serde(with = "sex_serde", skip_serializing_if = "crate::model::is_default")]
    pub sex: i32,
    #[prost(enumeration = "KaryotypicSex", tag = "7")]
    #[serde(
        with = "karyotypic_sex_serde",
        skip_serializing_if = "crate::model::is_default"
    )]
    pub karyotypic_sex: i32,
    #[prost(message, optional, tag = "8")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<OntologyClass>,
    /// e.g. `NCBITaxon:9606 | human`
    #[prost(message, optional, tag = "9")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxonomy: Option<OntologyClass>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VitalStatus {
    #[prost(enumeration = "vital_status::Status", tag = "1")]
    #[serde(
        with = "vital_status::status_serde",
        skip_serializing_if = "crate::model::is_default"
    )]
    pub status: i32,
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_of_death: Option<TimeElement>,
    #[prost(message, optional, tag = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause_of_death: Option<OntologyClass>,
    #[prost(uint32, tag = "4")]
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub survival_time_in_days: u32,
}

pub mod vital_status {
    use serde::{Deserialize, Serialize};

    enum_serde!(status_serde, crate::model::v2::vital_status::Status);

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
    pub enum Status {
        UnknownStatus = 0,
        Alive = 1,
        Deceased = 2,
    }
}

/// Phenotypic sex of an individual
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
pub enum Sex {
    UnknownSex = 0,
    Female = 1,
    Male = 2,
    OtherSex = 3,
}

/// Chromosomal sex of an individual
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
pub enum KaryotypicSex {
    UnknownKaryotype = 0,
    Xx = 1,
    Xy = 2,
    Xo = 3,
    Xxy = 4,
    Xxx = 5,
    Xxyy = 6,
    Xxxy = 7,
    Xxxx = 8,
    Xyy = 9,
    OtherKaryotype = 10,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn karyotype_names() {
        let individual = Individual {
            karyotypic_sex: KaryotypicSex::Xxy.into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&individual).unwrap();
        assert_eq!(value["karyotypicSex"], "XXY");
    }

    #[test]
    fn vital_status_from_yaml() {
        let status: VitalStatus =
            serde_yaml::from_str("status: DECEASED\nsurvivalTimeInDays: 12\n").unwrap();
        assert_eq!(status.status(), vital_status::Status::Deceased);
        assert_eq!(status.survival_time_in_days, 12);
    }
}
