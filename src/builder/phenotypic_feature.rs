use super::TimeElements;
use crate::model::v2::{Evidence, OntologyClass, PhenotypicFeature, TimeElement};
use crate::PxfResult;

/// Builds a [`PhenotypicFeature`]
///
/// ```
/// use phenopacket_tools::builder::{constants, PhenotypicFeatureBuilder};
///
/// let myopia = PhenotypicFeatureBuilder::builder("HP:0000545", "Myopia")
///     .add_modifier(constants::laterality::right())
///     .iso8601_onset("P71Y1M")
///     .unwrap()
///     .build();
///
/// assert_eq!(myopia.r#type.unwrap().id, "HP:0000545");
/// assert!(myopia.onset.is_some());
/// ```
pub struct PhenotypicFeatureBuilder {
    feature: PhenotypicFeature,
}

impl PhenotypicFeatureBuilder {
    /// Returns an observed feature of the given term
    pub fn of<S: Into<String>, T: Into<String>>(id: S, label: T) -> PhenotypicFeature {
        Self::builder(id, label).build()
    }

    pub fn builder<S: Into<String>, T: Into<String>>(id: S, label: T) -> Self {
        Self::from_class(OntologyClass::new(id, label))
    }

    pub fn from_class(class: OntologyClass) -> Self {
        Self {
            feature: PhenotypicFeature {
                r#type: Some(class),
                ..Default::default()
            },
        }
    }

    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.feature.description = description.into();
        self
    }

    /// Marks the feature as explicitly absent
    pub fn excluded(mut self) -> Self {
        self.feature.excluded = true;
        self
    }

    pub fn severity(mut self, severity: OntologyClass) -> Self {
        self.feature.severity = Some(severity);
        self
    }

    pub fn add_modifier(mut self, modifier: OntologyClass) -> Self {
        self.feature.modifiers.push(modifier);
        self
    }

    pub fn add_modifiers<I: IntoIterator<Item = OntologyClass>>(mut self, modifiers: I) -> Self {
        self.feature.modifiers.extend(modifiers);
        self
    }

    pub fn onset(mut self, onset: TimeElement) -> Self {
        self.feature.onset = Some(onset);
        self
    }

    /// Sets the onset to an age, e.g. `P10Y4M2D`
    ///
    /// # Errors
    ///
    /// [`PhenopacketError::InvalidDuration`](crate::PhenopacketError::InvalidDuration)
    /// if the value is not a valid ISO 8601 duration
    pub fn iso8601_onset(self, iso8601duration: &str) -> PxfResult<Self> {
        Ok(self.onset(TimeElements::age(iso8601duration)?))
    }

    pub fn congenital_onset(self) -> Self {
        self.onset(TimeElements::congenital_onset())
    }

    pub fn embryonal_onset(self) -> Self {
        self.onset(TimeElements::embryonal_onset())
    }

    pub fn fetal_onset(self) -> Self {
        self.onset(TimeElements::fetal_onset())
    }

    pub fn infantile_onset(self) -> Self {
        self.onset(TimeElements::infantile_onset())
    }

    pub fn childhood_onset(self) -> Self {
        self.onset(TimeElements::childhood_onset())
    }

    pub fn adult_onset(self) -> Self {
        self.onset(TimeElements::adult_onset())
    }

    pub fn resolution(mut self, resolution: TimeElement) -> Self {
        self.feature.resolution = Some(resolution);
        self
    }

    pub fn add_evidence(mut self, evidence: Evidence) -> Self {
        self.feature.evidence.push(evidence);
        self
    }

    pub fn build(self) -> PhenotypicFeature {
        self.feature
    }
}
