use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use super::constants::onset;
use crate::model::v2::{
    time_element, Age, AgeRange, GestationalAge, OntologyClass, TimeElement, TimeInterval,
};
use crate::model::Timestamp;
use crate::{PhenopacketError, PxfResult};

/// `P[nY][nM][nW][nD][T[nH][nM][nS]]`, seconds may have a fraction
static ISO8601_DURATION: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^P(\d+Y)?(\d+M)?(\d+W)?(\d+D)?(T(\d+H)?(\d+M)?(\d+(\.\d+)?S)?)?$").ok()
});

fn is_iso8601_duration(value: &str) -> bool {
    let Some(regex) = ISO8601_DURATION.as_ref() else {
        return false;
    };
    // `P` and `P1YT` match the pattern but have no (time) component
    regex.is_match(value) && value.len() > 1 && !value.ends_with('T')
}

/// Constructors for [`Age`] and [`AgeRange`]
pub struct Ages;

impl Ages {
    /// Returns an [`Age`] from an ISO 8601 duration, e.g. `P3Y2M`
    ///
    /// # Errors
    ///
    /// [`PhenopacketError::InvalidDuration`] if the value is not a valid duration
    pub fn age(iso8601duration: &str) -> PxfResult<Age> {
        if is_iso8601_duration(iso8601duration) {
            Ok(Age {
                iso8601duration: iso8601duration.to_string(),
            })
        } else {
            Err(PhenopacketError::InvalidDuration(iso8601duration.to_string()))
        }
    }

    /// Returns an [`AgeRange`] from two ISO 8601 durations
    ///
    /// # Errors
    ///
    /// [`PhenopacketError::InvalidDuration`] if either value is not a valid duration
    pub fn age_range(start: &str, end: &str) -> PxfResult<AgeRange> {
        Ok(AgeRange {
            start: Some(Self::age(start)?),
            end: Some(Self::age(end)?),
        })
    }
}

/// Constructors for every variant of [`TimeElement`]
pub struct TimeElements;

impl TimeElements {
    fn of(element: time_element::Element) -> TimeElement {
        TimeElement {
            element: Some(element),
        }
    }

    /// Gestational age in completed weeks and additional days
    pub fn gestational_age(weeks: i32, days: i32) -> TimeElement {
        Self::of(time_element::Element::GestationalAge(GestationalAge {
            weeks,
            days,
        }))
    }

    /// # Errors
    ///
    /// [`PhenopacketError::InvalidDuration`] if the value is not a valid duration
    pub fn age(iso8601duration: &str) -> PxfResult<TimeElement> {
        Ages::age(iso8601duration).map(|age| Self::of(time_element::Element::Age(age)))
    }

    /// # Errors
    ///
    /// [`PhenopacketError::InvalidDuration`] if either value is not a valid duration
    pub fn age_range(start: &str, end: &str) -> PxfResult<TimeElement> {
        Ages::age_range(start, end).map(|range| Self::of(time_element::Element::AgeRange(range)))
    }

    pub fn ontology_class(class: OntologyClass) -> TimeElement {
        Self::of(time_element::Element::OntologyClass(class))
    }

    pub fn antenatal_onset() -> TimeElement {
        Self::ontology_class(onset::antenatal())
    }

    pub fn embryonal_onset() -> TimeElement {
        Self::ontology_class(onset::embryonal())
    }

    pub fn fetal_onset() -> TimeElement {
        Self::ontology_class(onset::fetal())
    }

    pub fn congenital_onset() -> TimeElement {
        Self::ontology_class(onset::congenital())
    }

    pub fn neonatal_onset() -> TimeElement {
        Self::ontology_class(onset::neonatal())
    }

    pub fn infantile_onset() -> TimeElement {
        Self::ontology_class(onset::infantile())
    }

    pub fn childhood_onset() -> TimeElement {
        Self::ontology_class(onset::childhood())
    }

    pub fn juvenile_onset() -> TimeElement {
        Self::ontology_class(onset::juvenile())
    }

    pub fn adult_onset() -> TimeElement {
        Self::ontology_class(onset::adult())
    }

    pub fn young_adult_onset() -> TimeElement {
        Self::ontology_class(onset::young_adult())
    }

    pub fn middle_age_onset() -> TimeElement {
        Self::ontology_class(onset::middle_age())
    }

    pub fn late_onset() -> TimeElement {
        Self::ontology_class(onset::late())
    }

    /// A point in time from an RFC 3339 timestamp or a plain date (`2021-05-14`)
    ///
    /// # Errors
    ///
    /// [`PhenopacketError::InvalidTimestamp`] if the value cannot be parsed
    pub fn timestamp(value: &str) -> PxfResult<TimeElement> {
        Timestamp::from_rfc3339(value).map(|ts| Self::of(time_element::Element::Timestamp(ts)))
    }

    pub fn timestamp_from(datetime: DateTime<Utc>) -> TimeElement {
        Self::of(time_element::Element::Timestamp(datetime.into()))
    }

    /// # Errors
    ///
    /// [`PhenopacketError::InvalidTimestamp`] if either value cannot be parsed
    pub fn interval(start: &str, end: &str) -> PxfResult<TimeElement> {
        Self::time_interval(start, end)
            .map(|interval| Self::of(time_element::Element::Interval(interval)))
    }

    pub fn interval_from(start: DateTime<Utc>, end: DateTime<Utc>) -> TimeElement {
        Self::of(time_element::Element::Interval(TimeInterval {
            start: Some(start.into()),
            end: Some(end.into()),
        }))
    }

    /// Returns the bare [`TimeInterval`], e.g. for a dose interval
    ///
    /// # Errors
    ///
    /// [`PhenopacketError::InvalidTimestamp`] if either value cannot be parsed
    pub fn time_interval(start: &str, end: &str) -> PxfResult<TimeInterval> {
        Ok(TimeInterval {
            start: Some(Timestamp::from_rfc3339(start)?),
            end: Some(Timestamp::from_rfc3339(end)?),
        })
    }
}
