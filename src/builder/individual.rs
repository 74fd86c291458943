use super::TimeElements;
use crate::model::v2::{
    vital_status::Status, Individual, KaryotypicSex, OntologyClass, Sex, TimeElement, VitalStatus,
};
use crate::model::Timestamp;
use crate::PxfResult;

/// Builds the [`Individual`] that is the subject of a phenopacket
pub struct IndividualBuilder {
    individual: Individual,
}

impl IndividualBuilder {
    pub fn builder<S: Into<String>>(id: S) -> Self {
        Self {
            individual: Individual {
                id: id.into(),
                ..Default::default()
            },
        }
    }

    pub fn add_alternate_id<S: Into<String>>(mut self, id: S) -> Self {
        self.individual.alternate_ids.push(id.into());
        self
    }

    /// # Errors
    ///
    /// [`PhenopacketError::InvalidTimestamp`](crate::PhenopacketError::InvalidTimestamp)
    /// if the value is neither an RFC 3339 timestamp nor a date
    pub fn date_of_birth(mut self, value: &str) -> PxfResult<Self> {
        self.individual.date_of_birth = Some(Timestamp::from_rfc3339(value)?);
        Ok(self)
    }

    pub fn time_at_last_encounter(mut self, time: TimeElement) -> Self {
        self.individual.time_at_last_encounter = Some(time);
        self
    }

    /// Sets the age at the last encounter, e.g. `P70Y`
    ///
    /// # Errors
    ///
    /// [`PhenopacketError::InvalidDuration`](crate::PhenopacketError::InvalidDuration)
    /// if the value is not a valid ISO 8601 duration
    pub fn age_at_last_encounter(self, iso8601duration: &str) -> PxfResult<Self> {
        Ok(self.time_at_last_encounter(TimeElements::age(iso8601duration)?))
    }

    pub fn vital_status(mut self, status: VitalStatus) -> Self {
        self.individual.vital_status = Some(status);
        self
    }

    pub fn sex(mut self, sex: Sex) -> Self {
        self.individual.set_sex(sex);
        self
    }

    pub fn male(self) -> Self {
        self.sex(Sex::Male)
    }

    pub fn female(self) -> Self {
        self.sex(Sex::Female)
    }

    pub fn unknown_sex(self) -> Self {
        self.sex(Sex::UnknownSex)
    }

    pub fn other_sex(self) -> Self {
        self.sex(Sex::OtherSex)
    }

    pub fn karyotypic_sex(mut self, karyotype: KaryotypicSex) -> Self {
        self.individual.set_karyotypic_sex(karyotype);
        self
    }

    pub fn xx(self) -> Self {
        self.karyotypic_sex(KaryotypicSex::Xx)
    }

    pub fn xy(self) -> Self {
        self.karyotypic_sex(KaryotypicSex::Xy)
    }

    pub fn gender(mut self, gender: OntologyClass) -> Self {
        self.individual.gender = Some(gender);
        self
    }

    pub fn taxonomy(mut self, taxonomy: OntologyClass) -> Self {
        self.individual.taxonomy = Some(taxonomy);
        self
    }

    /// Sets the taxonomy to `NCBITaxon:9606 | Homo sapiens`
    pub fn homo_sapiens(self) -> Self {
        self.taxonomy(OntologyClass::new("NCBITaxon:9606", "Homo sapiens"))
    }

    pub fn build(self) -> Individual {
        self.individual
    }
}

/// Builds a [`VitalStatus`]
pub struct VitalStatusBuilder {
    vital_status: VitalStatus,
}

impl VitalStatusBuilder {
    pub fn builder(status: Status) -> Self {
        let mut vital_status = VitalStatus::default();
        vital_status.set_status(status);
        Self { vital_status }
    }

    pub fn alive() -> VitalStatus {
        Self::builder(Status::Alive).build()
    }

    pub fn deceased() -> Self {
        Self::builder(Status::Deceased)
    }

    pub fn time_of_death(mut self, time: TimeElement) -> Self {
        self.vital_status.time_of_death = Some(time);
        self
    }

    pub fn cause_of_death(mut self, cause: OntologyClass) -> Self {
        self.vital_status.cause_of_death = Some(cause);
        self
    }

    pub fn survival_time_in_days(mut self, days: u32) -> Self {
        self.vital_status.survival_time_in_days = days;
        self
    }

    pub fn build(self) -> VitalStatus {
        self.vital_status
    }
}
