//! Léonard A, et al. Prenatal diagnosis of fetal cataract: case report and
//! review of the literature. Fetal Diagn Ther. 2009;26(2):61-7. PMID:19752522
use phenopacket_tools::builder::{
    ontology_class, DiseaseBuilder, IndividualBuilder, MetaDataBuilder, PhenopacketBuilder,
    PhenotypicFeatureBuilder, Resources, TimeElements,
};
use phenopacket_tools::model::v2::{Disease, Phenopacket, PhenotypicFeature, TimeElement};
use phenopacket_tools::PxfResult;

const PHENOPACKET_ID: &str = "id.1";

pub fn phenopacket() -> PxfResult<Phenopacket> {
    let meta_data = MetaDataBuilder::builder("2022-04-17T10:35:00Z", "biocurator")?
        .add_resource(Resources::hpo_version("2022-04-15"))
        .add_resource(Resources::mondo_version("v2022-04-04"))
        .build();

    let proband = IndividualBuilder::builder("case1")
        .age_at_last_encounter("P4D")?
        .male()
        .build();

    let age_4_days = TimeElements::age("P4D")?;

    Ok(PhenopacketBuilder::create(PHENOPACKET_ID, meta_data)
        .individual(proband)
        .add_disease(disease(age_4_days.clone()))
        .add_phenotypic_features(phenotypic_features(age_4_days))
        .build())
}

fn phenotypic_features(age_4_days: TimeElement) -> Vec<PhenotypicFeature> {
    // 27 2/7 weeks of gestation
    let gestational_age = TimeElements::gestational_age(27, 2);

    vec![
        PhenotypicFeatureBuilder::builder("HP:0034248", "Increased fetal lens echogenicity")
            .onset(gestational_age.clone())
            .build(),
        // not seen antenatally, but after birth
        PhenotypicFeatureBuilder::builder("HP:0000568", "Microphthalmia")
            .onset(gestational_age)
            .excluded()
            .build(),
        PhenotypicFeatureBuilder::builder("HP:0000369", "Low-set ears")
            .onset(age_4_days.clone())
            .build(),
        PhenotypicFeatureBuilder::builder("HP:0008936", "Axial hypotonia")
            .onset(age_4_days.clone())
            .build(),
        PhenotypicFeatureBuilder::builder("HP:0000568", "Microphthalmia")
            .onset(age_4_days)
            .build(),
    ]
}

fn disease(onset: TimeElement) -> Disease {
    DiseaseBuilder::builder(ontology_class("MONDO:0016649", "Warburg micro syndrome"))
        .onset(onset)
        .build()
}
