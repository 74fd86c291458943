//! Reading and writing phenopackets as protobuf, JSON or YAML
//!
//! ```
//! use phenopacket_tools::io::{parse_message, print_message, sniff, PhenopacketFormat};
//! use phenopacket_tools::model::v2::Phenopacket;
//!
//! let json = br#"{"id": "arbitrary.id", "subject": {"id": "proband A", "sex": "MALE"}}"#;
//! assert_eq!(sniff(json), PhenopacketFormat::Json);
//!
//! let phenopacket: Phenopacket = parse_message(json, PhenopacketFormat::Json).unwrap();
//! assert_eq!(phenopacket.subject_id(), "proband A");
//!
//! let mut yaml = Vec::new();
//! print_message(&phenopacket, PhenopacketFormat::Yaml, &mut yaml).unwrap();
//! assert!(String::from_utf8(yaml).unwrap().contains("sex: MALE"));
//! ```
use std::fmt::Display;
use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;

use prost::Message;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::{PhenopacketError, PxfResult};

mod sniffer;

pub use sniffer::sniff;

/// The serialization formats of a phenopacket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhenopacketFormat {
    /// Binary protocol buffers
    Protobuf,
    /// The proto3 JSON mapping
    Json,
    /// The same structure as JSON, written as YAML
    Yaml,
}

impl PhenopacketFormat {
    /// The file suffix, including the leading dot
    pub fn suffix(&self) -> &'static str {
        match self {
            PhenopacketFormat::Protobuf => ".pb",
            PhenopacketFormat::Json => ".json",
            PhenopacketFormat::Yaml => ".yaml",
        }
    }
}

impl FromStr for PhenopacketFormat {
    type Err = PhenopacketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "protobuf" | "pb" => Ok(PhenopacketFormat::Protobuf),
            "json" => Ok(PhenopacketFormat::Json),
            "yaml" | "yml" => Ok(PhenopacketFormat::Yaml),
            _ => Err(PhenopacketError::UnknownFormat(s.to_string())),
        }
    }
}

impl Display for PhenopacketFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PhenopacketFormat::Protobuf => "protobuf",
            PhenopacketFormat::Json => "json",
            PhenopacketFormat::Yaml => "yaml",
        };
        f.write_str(name)
    }
}

/// The top-level elements of the phenopacket schema
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    #[default]
    Phenopacket,
    Family,
    Cohort,
}

impl FromStr for Element {
    type Err = PhenopacketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "phenopacket" => Ok(Element::Phenopacket),
            "family" => Ok(Element::Family),
            "cohort" => Ok(Element::Cohort),
            _ => Err(PhenopacketError::UnknownElement(s.to_string())),
        }
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Element::Phenopacket => "phenopacket",
            Element::Family => "family",
            Element::Cohort => "cohort",
        };
        f.write_str(name)
    }
}

/// The versions of the phenopacket schema
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SchemaVersion {
    V1,
    #[default]
    V2,
}

impl FromStr for SchemaVersion {
    type Err = PhenopacketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "v1" | "1" | "1.0" => Ok(SchemaVersion::V1),
            "v2" | "2" | "2.0" => Ok(SchemaVersion::V2),
            _ => Err(PhenopacketError::InvalidInput(format!(
                "unknown schema version {s}"
            ))),
        }
    }
}

impl Display for SchemaVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaVersion::V1 => f.write_str("v1"),
            SchemaVersion::V2 => f.write_str("v2"),
        }
    }
}

/// Decodes a message of type `T`
///
/// # Errors
///
/// The decoding error of the respective format, e.g.
/// [`PhenopacketError::Json`] if the bytes are not valid JSON
pub fn parse_message<T>(bytes: &[u8], format: PhenopacketFormat) -> PxfResult<T>
where
    T: Message + Default + DeserializeOwned,
{
    debug!("Parsing {} bytes as {format}", bytes.len());
    Ok(match format {
        PhenopacketFormat::Protobuf => T::decode(bytes)?,
        PhenopacketFormat::Json => serde_json::from_slice(bytes)?,
        PhenopacketFormat::Yaml => serde_yaml::from_slice(bytes)?,
    })
}

/// Writes the message to `writer`, JSON is pretty printed
///
/// # Errors
///
/// [`PhenopacketError::Io`] if the writer fails
pub fn print_message<T, W>(message: &T, format: PhenopacketFormat, mut writer: W) -> PxfResult<()>
where
    T: Message + Serialize,
    W: Write,
{
    match format {
        PhenopacketFormat::Protobuf => writer.write_all(&message.encode_to_vec())?,
        PhenopacketFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, message)?;
            writer.write_all(b"\n")?;
        }
        PhenopacketFormat::Yaml => serde_yaml::to_writer(&mut writer, message)?,
    }
    writer.flush()?;
    Ok(())
}

/// Reads all bytes from the file or, if `path` is `None`, from stdin
///
/// # Errors
///
/// [`PhenopacketError::CannotOpenFile`] if the file cannot be read
pub fn read_to_end(path: Option<&Path>) -> PxfResult<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path)
            .map_err(|err| PhenopacketError::CannotOpenFile(format!("{}: {err}", path.display()))),
        None => {
            let mut buffer = Vec::new();
            std::io::stdin().lock().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}
