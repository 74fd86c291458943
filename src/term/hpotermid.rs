use core::fmt::Debug;
use std::fmt::Display;
use std::str::FromStr;

use crate::{PhenopacketError, PxfResult};

/// The identifier of an [`HpoTerm`](crate::HpoTerm), e.g. `HP:0001166`
///
/// Internally the id is stored as the numerical part only, so it is cheap
/// to copy, hash and compare.
#[derive(Copy, Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct HpoTermId {
    inner: u32,
}

impl HpoTermId {
    /// Constructs an [`HpoTermId`] from the numerical part of the id
    ///
    /// ```
    /// use phenopacket_tools::HpoTermId;
    ///
    /// assert_eq!(HpoTermId::from_u32(118).to_string(), "HP:0000118");
    /// ```
    pub const fn from_u32(inner: u32) -> Self {
        Self { inner }
    }

    /// Returns the integer representation of the id
    pub fn as_u32(&self) -> u32 {
        self.inner
    }
}

impl TryFrom<&str> for HpoTermId {
    type Error = PhenopacketError;

    /// Parses an `HP:nnnnnnn` CURIE
    ///
    /// # Errors
    ///
    /// [`PhenopacketError::InvalidTermId`] if the prefix is not `HP:`
    /// or the local part is not numerical
    fn try_from(s: &str) -> PxfResult<Self> {
        let digits = s
            .strip_prefix("HP:")
            .ok_or_else(|| PhenopacketError::InvalidTermId(s.to_string()))?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PhenopacketError::InvalidTermId(s.to_string()));
        }
        Ok(HpoTermId {
            inner: digits.parse::<u32>()?,
        })
    }
}

impl FromStr for HpoTermId {
    type Err = PhenopacketError;
    fn from_str(s: &str) -> PxfResult<Self> {
        HpoTermId::try_from(s)
    }
}

impl From<u32> for HpoTermId {
    fn from(inner: u32) -> Self {
        Self { inner }
    }
}

impl Debug for HpoTermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HpoTermId({self})")
    }
}

impl Display for HpoTermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HP:{:07}", self.inner)
    }
}

impl PartialEq<str> for HpoTermId {
    fn eq(&self, other: &str) -> bool {
        HpoTermId::try_from(other).is_ok_and(|other| *self == other)
    }
}

impl PartialEq<&str> for HpoTermId {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
