use tracing::warn;

use crate::model::v2::PhenotypicFeature;
use crate::{HpoGroup, HpoTermId, Ontology};

/// The term ids of the observed and the excluded phenotypic features
/// of one individual
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FeaturesByExclusionStatus {
    pub observed: HpoGroup,
    pub excluded: HpoGroup,
}

impl FeaturesByExclusionStatus {
    /// Maps every id to its current primary id
    ///
    /// Alternative ids are replaced by the id of the term that declares
    /// them and obsolete ids by their replacement. Ids that are not part
    /// of the ontology are dropped.
    pub fn to_primary(&self, ontology: &Ontology) -> Self {
        let primary = |group: &HpoGroup| -> HpoGroup {
            group
                .iter()
                .filter_map(|id| ontology.primary_id(id))
                .collect()
        };
        Self {
            observed: primary(&self.observed),
            excluded: primary(&self.excluded),
        }
    }
}

/// Splits the term ids of `features` into observed and excluded ids
///
/// Features without a type or with a type from another ontology are
/// skipped. Malformed `HP:` ids are skipped with a warning.
pub fn partition_by_exclusion_status<'a, I>(individual_id: &str, features: I) -> FeaturesByExclusionStatus
where
    I: IntoIterator<Item = &'a PhenotypicFeature>,
{
    let mut res = FeaturesByExclusionStatus::default();
    for feature in features {
        let Some(term) = &feature.r#type else {
            continue;
        };
        if term.prefix() != Some("HP") {
            continue;
        }
        let id = match HpoTermId::try_from(term.id.as_str()) {
            Ok(id) => id,
            Err(_) => {
                warn!("Invalid term ID {} in individual {}", term.id, individual_id);
                continue;
            }
        };
        if feature.excluded {
            res.excluded.insert(id);
        } else {
            res.observed.insert(id);
        }
    }
    res
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::builder::PhenotypicFeatureBuilder;

    #[test]
    fn partition() {
        let features = [
            PhenotypicFeatureBuilder::of("HP:0000568", "Microphthalmia"),
            PhenotypicFeatureBuilder::builder("HP:0000369", "Low-set ears")
                .excluded()
                .build(),
            PhenotypicFeatureBuilder::of("MONDO:0007915", "Systemic lupus erythematosus"),
            PhenotypicFeatureBuilder::of("HP:0000568", "Microphthalmia"),
        ];
        let res = partition_by_exclusion_status("proband", &features);
        assert_eq!(res.observed.len(), 1);
        assert!(res.observed.contains(&568u32.into()));
        assert_eq!(res.excluded.len(), 1);
        assert!(res.excluded.contains(&369u32.into()));
    }

    #[test]
    fn other_ontologies_and_malformed_ids_are_skipped() {
        let features = [
            PhenotypicFeatureBuilder::of("MONDO:0007915", "Systemic lupus erythematosus"),
            PhenotypicFeatureBuilder::of("NCIT:C3262", "Neoplasm"),
            PhenotypicFeatureBuilder::of("HP:12x", "Malformed"),
            PhenotypicFeatureBuilder::of("Seizure", "No prefix"),
            PhenotypicFeatureBuilder::of("HP:0001250", "Seizure"),
        ];
        let res = partition_by_exclusion_status("proband", &features);
        assert_eq!(res.observed.iter().collect::<Vec<_>>(), [HpoTermId::from(1250u32)]);
        assert!(res.excluded.is_empty());
    }

    #[test]
    fn to_primary() {
        let ontology = Ontology::from_file("tests/small.obo").unwrap();
        let features = [
            // alternative id of HP:0000006
            PhenotypicFeatureBuilder::of("HP:0001415", "Autosomal dominant inheritance"),
            // obsolete, replaced by HP:0000478
            PhenotypicFeatureBuilder::builder("HP:0000284", "Abnormality of the ocular region")
                .excluded()
                .build(),
            PhenotypicFeatureBuilder::of("HP:9999999", "Unknown"),
        ];
        let res = partition_by_exclusion_status("proband", &features).to_primary(&ontology);
        assert_eq!(res.observed.iter().collect::<Vec<_>>(), [HpoTermId::from(6u32)]);
        assert_eq!(res.excluded.iter().collect::<Vec<_>>(), [HpoTermId::from(478u32)]);
    }
}
