//! Frequently used ontology classes
//!
//! The classes are grouped by their purpose. All functions return a new
//! [`OntologyClass`](crate::model::v2::OntologyClass) that can directly be
//! added to a message.

macro_rules! ontology_classes {
    ($($(#[$meta:meta])* $name:ident => $id:literal, $label:literal;)+) => {
        $(
            $(#[$meta])*
            pub fn $name() -> crate::model::v2::OntologyClass {
                crate::model::v2::OntologyClass::new($id, $label)
            }
        )+
    };
}

/// Age of onset, children of `HP:0003674 | Onset`
pub mod onset {
    ontology_classes! {
        antenatal => "HP:0030674", "Antenatal onset";
        embryonal => "HP:0011460", "Embryonal onset";
        fetal => "HP:0011461", "Fetal onset";
        congenital => "HP:0003577", "Congenital onset";
        neonatal => "HP:0003623", "Neonatal onset";
        infantile => "HP:0003593", "Infantile onset";
        childhood => "HP:0011463", "Childhood onset";
        juvenile => "HP:0003621", "Juvenile onset";
        adult => "HP:0003581", "Adult onset";
        young_adult => "HP:0011462", "Young adult onset";
        middle_age => "HP:0003596", "Middle age onset";
        late => "HP:0003584", "Late onset";
    }
}

/// Severity of a phenotypic feature
pub mod severity {
    ontology_classes! {
        borderline => "HP:0012827", "Borderline";
        mild => "HP:0012825", "Mild";
        moderate => "HP:0012826", "Moderate";
        severe => "HP:0012828", "Severe";
        profound => "HP:0012829", "Profound";
    }
}

/// Modifiers for the side of the body that is affected
pub mod laterality {
    ontology_classes! {
        right => "HP:0012834", "Right";
        left => "HP:0012835", "Left";
        unilateral => "HP:0012833", "Unilateral";
        bilateral => "HP:0012832", "Bilateral";
    }
}

/// UCUM units of measurement
pub mod unit {
    ontology_classes! {
        degree_of_angle => "UCUM:degree", "degree (plane angle)";
        diopter => "UCUM:[diop]", "diopter";
        gram => "UCUM:g", "gram";
        gram_per_kg => "UCUM:g/kg", "gram per kilogram";
        kilogram => "UCUM:kg", "kilogram";
        liter => "UCUM:L", "liter";
        meter => "UCUM:m", "meter";
        centimeter => "UCUM:cm", "centimeter";
        millimeter => "UCUM:mm", "millimeter";
        microgram => "UCUM:ug", "microgram";
        milligram => "UCUM:mg", "milligram";
        mg_per_kg => "UCUM:mg/kg", "milligram per kilogram";
        milliliter => "UCUM:mL", "milliliter";
        mm_hg => "UCUM:mm[Hg]", "millimetres of mercury";
        mmol_per_l => "UCUM:mmol/L", "millimole per liter";
        beats_per_minute => "UCUM:/min", "beats per minute";
        percent => "UCUM:%", "percent";
    }
}

/// Routes of drug administration, NCIT terms
pub mod administration_route {
    ontology_classes! {
        intravenous => "NCIT:C38276", "Intravenous Route of Administration";
        intraarterial => "NCIT:C38222", "Intraarterial Route of Administration";
        wound_irrigation => "NCIT:C183503", "Administration via Wound Irrigation";
        nebulizer => "NCIT:C149695", "Nebulizer Route of Administration";
        oral => "NCIT:C38288", "Oral Route of Administration";
        intrathecal => "NCIT:C38267", "Intrathecal Route of Administration";
        peridural => "NCIT:C38677", "Peridural Route of Administration";
        topical => "NCIT:C38304", "Topical Route of Administration";
        transdermal => "NCIT:C38305", "Transdermal Route of Administration";
    }
}

/// Evidence codes from the Evidence & Conclusion Ontology
pub mod evidence {
    ontology_classes! {
        author_statement => "ECO:0006017", "author statement from published clinical study used in manual assertion";
    }
}

/// The top-level organ systems of the HPO, the children of
/// `HP:0000118 | Phenotypic abnormality`
///
/// The [`OrganSystemValidator`](crate::validator::phenotype::OrganSystemValidator)
/// checks that a phenopacket annotates a selection of these.
pub mod organ_systems {
    use crate::HpoTermId;

    ontology_classes! {
        abnormality_of_the_skeletal_system => "HP:0000924", "Abnormality of the skeletal system";
        abnormality_of_the_nervous_system => "HP:0000707", "Abnormality of the nervous system";
        abnormality_of_head_or_neck => "HP:0000152", "Abnormality of head or neck";
        abnormality_of_the_integument => "HP:0001574", "Abnormality of the integument";
        abnormality_of_the_eye => "HP:0000478", "Abnormality of the eye";
        abnormality_of_the_cardiovascular_system => "HP:0001626", "Abnormality of the cardiovascular system";
        abnormality_of_metabolism_homeostasis => "HP:0001939", "Abnormality of metabolism/homeostasis";
        abnormality_of_the_genitourinary_system => "HP:0000119", "Abnormality of the genitourinary system";
        abnormality_of_the_digestive_system => "HP:0025031", "Abnormality of the digestive system";
        growth_abnormality => "HP:0001507", "Growth abnormality";
        abnormality_of_the_endocrine_system => "HP:0000818", "Abnormality of the endocrine system";
        abnormality_of_the_musculature => "HP:0003011", "Abnormality of the musculature";
        abnormality_of_the_immune_system => "HP:0002715", "Abnormality of the immune system";
        abnormality_of_limbs => "HP:0040064", "Abnormality of limbs";
        abnormality_of_blood_and_blood_forming_tissues => "HP:0001871", "Abnormality of blood and blood-forming tissues";
        abnormality_of_the_respiratory_system => "HP:0002086", "Abnormality of the respiratory system";
        abnormality_of_the_ear => "HP:0000598", "Abnormality of the ear";
        abnormality_of_prenatal_development_or_birth => "HP:0001197", "Abnormality of prenatal development or birth";
        abnormality_of_the_voice => "HP:0001608", "Abnormality of the voice";
        constitutional_symptom => "HP:0025142", "Constitutional symptom";
        abnormality_of_the_thoracic_cavity => "HP:0045027", "Abnormality of the thoracic cavity";
        neoplasm => "HP:0002664", "Neoplasm";
        abnormality_of_the_breast => "HP:0000769", "Abnormality of the breast";
        abnormal_cellular_phenotype => "HP:0025354", "Abnormal cellular phenotype";
    }

    /// The ids of all organ systems listed in this module
    pub const ALL: [HpoTermId; 24] = [
        HpoTermId::from_u32(924),
        HpoTermId::from_u32(707),
        HpoTermId::from_u32(152),
        HpoTermId::from_u32(1574),
        HpoTermId::from_u32(478),
        HpoTermId::from_u32(1626),
        HpoTermId::from_u32(1939),
        HpoTermId::from_u32(119),
        HpoTermId::from_u32(25031),
        HpoTermId::from_u32(1507),
        HpoTermId::from_u32(818),
        HpoTermId::from_u32(3011),
        HpoTermId::from_u32(2715),
        HpoTermId::from_u32(40064),
        HpoTermId::from_u32(1871),
        HpoTermId::from_u32(2086),
        HpoTermId::from_u32(598),
        HpoTermId::from_u32(1197),
        HpoTermId::from_u32(1608),
        HpoTermId::from_u32(25142),
        HpoTermId::from_u32(45027),
        HpoTermId::from_u32(2664),
        HpoTermId::from_u32(769),
        HpoTermId::from_u32(25354),
    ];
}
