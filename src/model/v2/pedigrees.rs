use serde::{Deserialize, Serialize};

/// The family tree of a [`Family`](super::Family), as in a PED file
#[derive(Clone, PartialEq, Eq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pedigree {
    #[prost(message, repeated, tag = "1")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub persons: Vec<pedigree::Person>,
}

pub mod pedigree {
    use serde::{Deserialize, Serialize};

    enum_serde!(sex_serde, crate::model::v2::Sex);
    enum_serde!(
        affected_status_serde,
        crate::model::v2::pedigree::person::AffectedStatus
    );

    #[derive(Clone, PartialEq, Eq, ::prost::Message, Serialize, Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    pub struct Person {
        #[prost(string, tag = "1")]
        #[serde(skip_serializing_if = "String::is_empty")]
        pub family_id: String,
        #[prost(string, tag = "2")]
        #[serde(skip_serializing_if = "String::is_empty")]
        pub individual_id: String,
        #[prost(string, tag = "3")]
        #[serde(skip_serializing_if = "String::is_empty")]
        pub paternal_id: String,
        #[prost(string, tag = "4")]
        #[serde(skip_serializing_if = "String::is_empty")]
        pub maternal_id: String,
        #[prost(enumeration = "crate::model::v2::Sex", tag = "5")]
        #[serde(with = "sex_serde", skip_serializing_if = "crate::model::is_default")]
        pub sex: i32,
        #[prost(enumeration = "person::AffectedStatus", tag = "6")]
        #[serde(
            with = "affected_status_serde",
            skip_serializing_if = "crate::model::is_default"
        )]
        pub affected_status: i32,
    }

    pub mod person {
        use serde::{Deserialize, Serialize};

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
        pub enum AffectedStatus {
            Missing = 0,
            Unaffected = 1,
            Affected = 2,
        }
    }
}
