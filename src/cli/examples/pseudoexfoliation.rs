//! Late-onset anterior dislocation of a posterior chamber intraocular lens
//! in a patient with pseudoexfoliation syndrome.
//! Case Rep Ophthalmol 2011;2:1-4. DOI: 10.1159/000323861
//!
//! Right eye: cataract and pseudoexfoliation, cataract surgery, emmetropia,
//! then myopia and elevated intraocular pressure after one year, treated
//! with brimonidine and Nd:YAG iridotomy. Left eye: cataract surgery.
use phenopacket_tools::builder::constants::{laterality, unit};
use phenopacket_tools::builder::{
    ontology_class, ComplexValueBuilder, DiseaseBuilder, DoseIntervalBuilder, IndividualBuilder,
    MeasurementBuilder, MedicalActionBuilder, MetaDataBuilder, PhenopacketBuilder,
    PhenotypicFeatureBuilder, ProcedureBuilder, QuantityBuilder, ReferenceRangeBuilder,
    Resources, TimeElements, TreatmentBuilder, TypedQuantityBuilder, ValueBuilder,
};
use phenopacket_tools::model::v2::{
    Measurement, MedicalAction, OntologyClass, Phenopacket, PhenotypicFeature, Resource,
};
use phenopacket_tools::PxfResult;

const PHENOPACKET_ID: &str = "arbitrary.id";
const PROBAND_ID: &str = "proband A";

fn left_eye() -> OntologyClass {
    ontology_class("UBERON:0004548", "left eye")
}

fn right_eye() -> OntologyClass {
    ontology_class("UBERON:0004549", "right eye")
}

fn cataract() -> OntologyClass {
    ontology_class("HP:0000518", "Cataract")
}

fn pseudophakia() -> OntologyClass {
    ontology_class("HP:0500081", "Pseudophakia")
}

fn intraocular_pressure() -> OntologyClass {
    ontology_class("LOINC:56844-4", "Intraocular pressure of Eye")
}

fn snomed_ct() -> Resource {
    Resource {
        id: "snomedct".to_string(),
        name: "SNOMED Clinical Terms".to_string(),
        url: "https://www.snomed.org".to_string(),
        version: "2022-07-31".to_string(),
        namespace_prefix: "SNOMEDCT".to_string(),
        iri_prefix: "http://snomed.info/id/".to_string(),
    }
}

pub fn phenopacket() -> PxfResult<Phenopacket> {
    let meta_data = MetaDataBuilder::builder("2021-05-14T10:35:00Z", "anonymous biocurator")?
        .add_resource(Resources::uberon_version("2022-08-19"))
        .add_resource(Resources::ncit_version("22.07d"))
        .add_resource(Resources::hpo_version("2022-06-11"))
        .add_resource(Resources::ucum())
        .add_resource(Resources::loinc_version("2.73"))
        .add_resource(Resources::mondo_version("2022-04-04"))
        .add_resource(Resources::drug_central_version("2022-08-22"))
        .add_resource(snomed_ct())
        .build();

    let proband = IndividualBuilder::builder(PROBAND_ID)
        .age_at_last_encounter("P70Y")?
        .male()
        .xy()
        .build();

    let exfoliation_syndrome = DiseaseBuilder::builder(ontology_class(
        "MONDO:0008327",
        "exfoliation syndrome",
    ))
    .onset(TimeElements::adult_onset())
    .primary_site(right_eye())
    .build();

    Ok(PhenopacketBuilder::create(PHENOPACKET_ID, meta_data)
        .individual(proband)
        .add_measurements(measurements_after_iridotomy()?)
        .add_measurements(acuity_and_refraction()?)
        .add_measurements(measurements_one_year_later()?)
        .add_phenotypic_features(phenotypic_features()?)
        .add_disease(exfoliation_syndrome)
        .add_medical_action(cataract_surgery(right_eye(), "P70Y")?)
        // six weeks later on the left eye
        .add_medical_action(cataract_surgery(left_eye(), "P70Y6W")?)
        .add_medical_action(brimonidine()?)
        .add_medical_action(nd_yag_iridotomy()?)
        .build())
}

fn cataract_surgery(body_site: OntologyClass, age: &str) -> PxfResult<MedicalAction> {
    let procedure = ProcedureBuilder::builder("NCIT:C157809", "Cataract Surgery")
        .body_site(body_site)
        .performed(TimeElements::age(age)?)
        .build();
    Ok(MedicalActionBuilder::builder(procedure)
        .treatment_target(cataract())
        .treatment_intent(pseudophakia())
        .build())
}

fn nd_yag_iridotomy() -> PxfResult<MedicalAction> {
    let procedure = ProcedureBuilder::builder("LOINC:29031-2", "Right eye YAG mode")
        .body_site(right_eye())
        .performed(TimeElements::age("P71Y1M")?)
        .build();
    Ok(MedicalActionBuilder::builder(procedure)
        .treatment_target(cataract())
        .treatment_intent(pseudophakia())
        .build())
}

fn brimonidine() -> PxfResult<MedicalAction> {
    let dose_interval = DoseIntervalBuilder::of(
        QuantityBuilder::of(unit::mg_per_kg(), 0.002),
        ontology_class("NCIT:C64576", "Once"),
        TimeElements::time_interval("2022-07-07T00:00:00Z", "2022-07-07T00:00:00Z")?,
    );
    let treatment = TreatmentBuilder::builder(ontology_class("DrugCentral:395", "brimonidine"))
        .route_of_administration(ontology_class("NCIT:C29302", "Ophthalmic Solution"))
        .add_dose_interval(dose_interval)
        .build();
    Ok(MedicalActionBuilder::builder(treatment)
        .add_adverse_event(ontology_class("HP:0025637", "Vasospasm"))
        .treatment_target(ontology_class("HP:0007906", "Ocular hypertension"))
        .treatment_termination_reason(ontology_class("NCIT:C41331", "Adverse Event"))
        .build())
}

fn visual_acuity_100_percent() -> Measurement {
    let visus = TypedQuantityBuilder::of(
        ontology_class("NCIT:C87149", "Visual Acuity"),
        QuantityBuilder::of(ontology_class("NCIT:C48570", "Percent Unit"), 100.0),
    );
    MeasurementBuilder::of(
        ontology_class("NCIT:C156778", "Vision Assessment"),
        ComplexValueBuilder::of([visus]),
    )
}

/// One week after the surgery of the right eye
fn acuity_and_refraction() -> PxfResult<Vec<Measurement>> {
    let one_week_after_surgery = TimeElements::age("P70Y1W")?;

    let visus = MeasurementBuilder::builder(
        ontology_class("NCIT:C156778", "Vision Assessment"),
        ComplexValueBuilder::of([TypedQuantityBuilder::of(
            ontology_class("NCIT:C87149", "Visual Acuity"),
            QuantityBuilder::of(ontology_class("NCIT:C48570", "Percent Unit"), 100.0),
        )]),
    )
    .time_observed(one_week_after_surgery.clone())
    .build();

    // -0.25/-0.5/110 degrees
    let subjective_refraction = ontology_class("LOINC:79895-9", "Subjective refraction method");
    let range = ReferenceRangeBuilder::of(subjective_refraction.clone(), -30.0, 30.0);
    let spherical = ValueBuilder::with_range(unit::diopter(), -0.25, range.clone());

    let spherical_refraction = MeasurementBuilder::builder(subjective_refraction, spherical.clone())
        .time_observed(one_week_after_surgery.clone())
        .build();

    let cylinder = TypedQuantityBuilder::of(
        ontology_class("LOINC:79846-2", "Right eye cylindrical refraction"),
        QuantityBuilder::with_range(unit::diopter(), -0.5, range.clone()),
    );
    let axis = TypedQuantityBuilder::of(
        ontology_class("LOINC:9829-8", "Right eye cylindrical degree"),
        QuantityBuilder::with_range(unit::degree_of_angle(), 110.0, range),
    );
    let cylindrical_refraction = MeasurementBuilder::builder(
        ontology_class("SNOMEDCT:252886007", "Refraction assessment (procedure)"),
        ComplexValueBuilder::of([cylinder, axis]),
    )
    .time_observed(one_week_after_surgery.clone())
    .build();

    let right_eye_spherical = MeasurementBuilder::builder(
        ontology_class("LOINC:79850-4", "Right eye spherical refraction"),
        spherical,
    )
    .time_observed(one_week_after_surgery)
    .build();

    Ok(vec![
        visus,
        spherical_refraction,
        cylindrical_refraction,
        right_eye_spherical,
    ])
}

/// Elevated pressure of the right eye one year after the surgery, before
/// the iridotomy
fn measurements_one_year_later() -> PxfResult<Vec<Measurement>> {
    let range = ReferenceRangeBuilder::of(intraocular_pressure(), 10.0, 21.0);
    let iop = MeasurementBuilder::builder(
        ontology_class("LOINC:79892-6", "Right eye Intraocular pressure"),
        ValueBuilder::with_range(unit::mm_hg(), 29.0, range),
    )
    .time_observed(TimeElements::age("P71Y1M")?)
    .build();
    Ok(vec![iop])
}

/// Intraocular pressure and anterior chamber depth after the iridotomy
fn measurements_after_iridotomy() -> PxfResult<Vec<Measurement>> {
    let after_iridotomy = TimeElements::age("P71Y1M1D")?;
    let range = ReferenceRangeBuilder::of(intraocular_pressure(), 10.0, 21.0);

    let iop = MeasurementBuilder::builder(
        ontology_class("LOINC:79892-6", "Right eye Intraocular pressure"),
        ValueBuilder::with_range(unit::mm_hg(), 14.0, range),
    )
    .time_observed(after_iridotomy.clone())
    .build();

    let depth = ontology_class("SNOMEDCT:397312009", "Intraocular lens anterior chamber depth");
    let depth_range = ReferenceRangeBuilder::of(unit::millimeter(), 0.0, 10.0);
    let right_depth = MeasurementBuilder::builder(
        depth.clone(),
        ValueBuilder::with_range(unit::millimeter(), 3.93, depth_range.clone()),
    )
    .time_observed(after_iridotomy.clone())
    .build();
    let left_depth = MeasurementBuilder::builder(
        depth,
        ValueBuilder::with_range(unit::millimeter(), 5.21, depth_range),
    )
    .time_observed(after_iridotomy)
    .build();

    Ok(vec![iop, visual_acuity_100_percent(), right_depth, left_depth])
}

fn phenotypic_features() -> PxfResult<Vec<PhenotypicFeature>> {
    let age_70_years = TimeElements::age("P70Y")?;
    let age_71_years = TimeElements::age("P71Y1M")?;

    Ok(vec![
        // emmetropia after the surgery
        PhenotypicFeatureBuilder::builder("HP:0000539", "Abnormality of refraction")
            .add_modifier(laterality::right())
            .onset(age_70_years)
            .excluded()
            .build(),
        PhenotypicFeatureBuilder::builder("HP:0000545", "Myopia")
            .add_modifier(laterality::right())
            .onset(age_71_years.clone())
            .build(),
        PhenotypicFeatureBuilder::builder("NCIT:C50618", "Intraocular Pressure Increased")
            .add_modifier(laterality::right())
            .onset(age_71_years)
            .build(),
        PhenotypicFeatureBuilder::builder("HP:0007686", "Abnormal pupillary function")
            .excluded()
            .build(),
        PhenotypicFeatureBuilder::builder("HP:0012629", "Phakodonesis")
            .excluded()
            .build(),
        PhenotypicFeatureBuilder::builder("SNOMEDCT:414775001", "monovision")
            .excluded()
            .build(),
    ])
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn proband() {
        let phenopacket = phenopacket().unwrap();
        assert_eq!(phenopacket.subject_id(), PROBAND_ID);
        assert_eq!(phenopacket.measurements.len(), 9);
        assert_eq!(phenopacket.medical_actions.len(), 4);
        assert_eq!(phenopacket.phenotypic_features.len(), 6);
    }
}
