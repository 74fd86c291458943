use std::fmt::Display;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{PhenopacketError, PxfResult};

/// A point in time, independent of any time zone
///
/// Mirrors `google.protobuf.Timestamp` on the wire and is written as an
/// RFC 3339 string in JSON and YAML, e.g. `2021-05-14T10:35:00Z`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Timestamp {
    #[prost(int64, tag = "1")]
    pub seconds: i64,
    #[prost(int32, tag = "2")]
    pub nanos: i32,
}

impl Timestamp {
    /// Parses an RFC 3339 timestamp or an ISO 8601 date
    ///
    /// Dates (`2021-05-14`) are interpreted as midnight UTC.
    ///
    /// # Errors
    ///
    /// [`PhenopacketError::InvalidTimestamp`] if the string is neither
    ///
    /// # Examples
    ///
    /// ```
    /// use phenopacket_tools::model::Timestamp;
    ///
    /// let ts = Timestamp::from_rfc3339("1970-01-02T00:00:00Z").unwrap();
    /// assert_eq!(ts.seconds, 86_400);
    /// assert_eq!(Timestamp::from_rfc3339("1970-01-02").unwrap(), ts);
    /// assert!(Timestamp::from_rfc3339("yesterday").is_err());
    /// ```
    pub fn from_rfc3339(value: &str) -> PxfResult<Self> {
        if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
            return Ok(datetime.with_timezone(&Utc).into());
        }
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|datetime| datetime.and_utc().into())
            .ok_or_else(|| PhenopacketError::InvalidTimestamp(value.to_string()))
    }

    /// Returns the timestamp as `DateTime`, if it is in the supported range
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let nanos = u32::try_from(self.nanos).ok()?;
        DateTime::from_timestamp(self.seconds, nanos)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(datetime: DateTime<Utc>) -> Self {
        Timestamp {
            seconds: datetime.timestamp(),
            nanos: datetime.timestamp_subsec_nanos() as i32,
        }
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_datetime() {
            Some(datetime) => write!(f, "{}", datetime.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            None => write!(f, "{}.{:09}s", self.seconds, self.nanos),
        }
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.to_datetime() {
            Some(datetime) => serializer
                .serialize_str(&datetime.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            None => Err(serde::ser::Error::custom(format!(
                "timestamp out of range: {} seconds",
                self.seconds
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Timestamp::from_rfc3339(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn json_representation() {
        let ts = Timestamp::from_rfc3339("2021-05-14T10:35:00Z").unwrap();
        assert_eq!(
            serde_json::to_string(&ts).unwrap(),
            "\"2021-05-14T10:35:00Z\""
        );
        let parsed: Timestamp = serde_json::from_str("\"2021-05-14T12:35:00+02:00\"").unwrap();
        assert_eq!(parsed, ts);
    }

    #[test]
    fn fractional_seconds() {
        let ts = Timestamp::from_rfc3339("2021-05-14T10:35:00.5Z").unwrap();
        assert_eq!(ts.nanos, 500_000_000);
        assert_eq!(ts.to_string(), "2021-05-14T10:35:00.500Z");
    }

    #[test]
    fn invalid_json_value() {
        assert!(serde_json::from_str::<Timestamp>("\"2021-13-14\"").is_err());
        assert!(serde_json::from_str::<Timestamp>("12").is_err());
    }

    #[test]
    fn protobuf_layout() {
        use prost::Message;
        let ts = Timestamp {
            seconds: 1,
            nanos: 2,
        };
        assert_eq!(ts.encode_to_vec(), vec![0x08, 0x01, 0x10, 0x02]);
    }
}
