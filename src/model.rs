//! The phenopacket schema as Rust types
//!
//! Every message derives [`prost::Message`] for the protobuf wire format
//! and [`serde`] for the proto3 JSON mapping, which is also used for YAML:
//!
//! - keys are camelCase and fields with default values are omitted
//! - enums are written as their names and read from either names or numbers
//! - oneofs are flattened into the enclosing object
//! - [`Timestamp`]s are RFC 3339 strings
//!
//! The current schema lives in [`v2`], the legacy one in [`v1`].

/// Generates a `serde(with = ...)` module for an `i32` enum field
///
/// Known values are written as their name, unknown values as number.
macro_rules! enum_serde {
    ($module:ident, $enum:ty) => {
        pub(crate) mod $module {
            use serde::{Deserialize, Deserializer, Serialize, Serializer};

            pub fn serialize<S: Serializer>(value: &i32, serializer: S) -> Result<S::Ok, S::Error> {
                match <$enum>::try_from(*value) {
                    Ok(variant) => variant.serialize(serializer),
                    Err(_) => serializer.serialize_i32(*value),
                }
            }

            #[derive(Deserialize)]
            #[serde(untagged)]
            enum Repr {
                Name($enum),
                Number(i32),
            }

            pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
                Ok(match Repr::deserialize(deserializer)? {
                    Repr::Name(variant) => i32::from(variant),
                    Repr::Number(number) => number,
                })
            }
        }
    };
}

mod timestamp;
pub mod v1;
pub mod v2;

pub use timestamp::Timestamp;

use v2::{Cohort, Family, MetaData, Phenopacket};

/// `true` if the value equals its type's default, used to omit fields
pub(crate) fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// 64 bit integers are strings in the proto3 JSON mapping
pub(crate) mod int64_string {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Text(String),
        Number(u64),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Text(text) => text.parse().map_err(serde::de::Error::custom),
            Repr::Number(number) => Ok(number),
        }
    }
}

/// A top-level element that carries one or more phenopackets
///
/// The semantic validators are generic over this trait, so the same
/// validator checks a single phenopacket, the members of a family
/// or the members of a cohort.
pub trait PhenopacketContainer {
    /// The phenopackets of the element in their natural order
    fn phenopackets(&self) -> Vec<&Phenopacket>;

    /// The metadata of the element itself
    fn meta_data(&self) -> Option<&MetaData>;
}

impl PhenopacketContainer for Phenopacket {
    fn phenopackets(&self) -> Vec<&Phenopacket> {
        vec![self]
    }

    fn meta_data(&self) -> Option<&MetaData> {
        self.meta_data.as_ref()
    }
}

impl PhenopacketContainer for Family {
    /// The proband followed by all relatives
    fn phenopackets(&self) -> Vec<&Phenopacket> {
        self.proband.iter().chain(self.relatives.iter()).collect()
    }

    fn meta_data(&self) -> Option<&MetaData> {
        self.meta_data.as_ref()
    }
}

impl PhenopacketContainer for Cohort {
    fn phenopackets(&self) -> Vec<&Phenopacket> {
        self.members.iter().collect()
    }

    fn meta_data(&self) -> Option<&MetaData> {
        self.meta_data.as_ref()
    }
}
