//! Conversion of v1 phenopackets into v2
//!
//! Most messages are copied field by field. The differences are:
//!
//! - `negated` features become `excluded`
//! - ages and age ranges become [`TimeElement`](v2::TimeElement)s
//! - `HtsFile`s become [`File`](v2::File)s, with format, genome assembly and
//!   description as file attributes
//! - genes and variants become an [`Interpretation`](v2::Interpretation),
//!   if requested
//!
//! ```
//! use phenopacket_tools::converter::V1ToV2Converter;
//! use phenopacket_tools::model::v1;
//!
//! let phenopacket = v1::Phenopacket {
//!     id: "PMID:30808312-COL6A1-Bethlem".to_string(),
//!     phenotypic_features: vec![v1::PhenotypicFeature {
//!         r#type: Some(v1::OntologyClass::new("HP:0001558", "Decreased fetal movement")),
//!         negated: true,
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//!
//! let converted = V1ToV2Converter::new(false).convert_phenopacket(&phenopacket).unwrap();
//! assert!(converted.phenotypic_features[0].excluded);
//! ```
use tracing::{debug, warn};

use crate::model::v1;
use crate::model::v2::{self, time_element::Element};
use crate::{PhenopacketError, PxfResult, PHENOPACKET_SCHEMA_VERSION};

/// `EFO:0009654 | reference sample`, replaces the v1 `is_control_sample` flag
const REFERENCE_SAMPLE: (&str, &str) = ("EFO:0009654", "reference sample");

/// Converts phenopackets, families and cohorts from schema v1 to v2
#[derive(Debug, Default, Clone, Copy)]
pub struct V1ToV2Converter {
    convert_variants: bool,
}

impl V1ToV2Converter {
    /// Constructs a new converter
    ///
    /// If `convert_variants` is `true`, the genes and variants of a v1
    /// phenopacket are converted into an interpretation, which requires
    /// exactly one disease in the phenopacket. Otherwise they are dropped.
    pub fn new(convert_variants: bool) -> Self {
        Self { convert_variants }
    }

    /// # Errors
    ///
    /// [`PhenopacketError::InvalidInput`] if variants should be converted,
    /// but the phenopacket does not have exactly one disease
    pub fn convert_phenopacket(&self, phenopacket: &v1::Phenopacket) -> PxfResult<v2::Phenopacket> {
        debug!("Converting phenopacket {}", phenopacket.id);

        let interpretations = if self.convert_variants {
            to_interpretation(phenopacket)?.into_iter().collect()
        } else {
            if !phenopacket.variants.is_empty() || !phenopacket.genes.is_empty() {
                warn!(
                    "Dropping {} genes and {} variants of {}",
                    phenopacket.genes.len(),
                    phenopacket.variants.len(),
                    phenopacket.id
                );
            }
            Vec::new()
        };

        Ok(v2::Phenopacket {
            id: phenopacket.id.clone(),
            subject: phenopacket.subject.as_ref().map(to_individual),
            phenotypic_features: phenopacket
                .phenotypic_features
                .iter()
                .map(to_phenotypic_feature)
                .collect(),
            measurements: Vec::new(),
            biosamples: phenopacket.biosamples.iter().map(to_biosample).collect(),
            interpretations,
            diseases: phenopacket.diseases.iter().map(to_disease).collect(),
            medical_actions: Vec::new(),
            files: phenopacket.hts_files.iter().map(to_file).collect(),
            meta_data: phenopacket.meta_data.as_ref().map(to_meta_data),
        })
    }

    /// Converts the proband and every relative
    ///
    /// # Errors
    ///
    /// See [`V1ToV2Converter::convert_phenopacket`]
    pub fn convert_family(&self, family: &v1::Family) -> PxfResult<v2::Family> {
        debug!("Converting family {}", family.id);
        Ok(v2::Family {
            id: family.id.clone(),
            proband: family
                .proband
                .as_ref()
                .map(|proband| self.convert_phenopacket(proband))
                .transpose()?,
            relatives: family
                .relatives
                .iter()
                .map(|relative| self.convert_phenopacket(relative))
                .collect::<PxfResult<Vec<_>>>()?,
            pedigree: family.pedigree.clone(),
            files: family.hts_files.iter().map(to_file).collect(),
            meta_data: family.meta_data.as_ref().map(to_meta_data),
            consanguinous_parents: false,
        })
    }

    /// Converts every member of the cohort
    ///
    /// # Errors
    ///
    /// See [`V1ToV2Converter::convert_phenopacket`]
    pub fn convert_cohort(&self, cohort: &v1::Cohort) -> PxfResult<v2::Cohort> {
        debug!("Converting cohort {}", cohort.id);
        Ok(v2::Cohort {
            id: cohort.id.clone(),
            description: cohort.description.clone(),
            members: cohort
                .members
                .iter()
                .map(|member| self.convert_phenopacket(member))
                .collect::<PxfResult<Vec<_>>>()?,
            files: cohort.hts_files.iter().map(to_file).collect(),
            meta_data: cohort.meta_data.as_ref().map(to_meta_data),
        })
    }
}

fn to_age(age: &v1::Age) -> v2::Age {
    v2::Age {
        iso8601duration: age.age.clone(),
    }
}

fn to_age_range(range: &v1::AgeRange) -> v2::AgeRange {
    v2::AgeRange {
        start: range.start.as_ref().map(to_age),
        end: range.end.as_ref().map(to_age),
    }
}

fn time_element(element: Element) -> v2::TimeElement {
    v2::TimeElement {
        element: Some(element),
    }
}

fn to_individual(individual: &v1::Individual) -> v2::Individual {
    let time_at_last_encounter = individual.age.as_ref().map(|age| match age {
        v1::individual::Age::AgeAtCollection(age) => time_element(Element::Age(to_age(age))),
        v1::individual::Age::AgeRangeAtCollection(range) => {
            time_element(Element::AgeRange(to_age_range(range)))
        }
    });
    v2::Individual {
        id: individual.id.clone(),
        alternate_ids: individual.alternate_ids.clone(),
        date_of_birth: individual.date_of_birth,
        time_at_last_encounter,
        vital_status: None,
        sex: individual.sex,
        karyotypic_sex: individual.karyotypic_sex,
        gender: None,
        taxonomy: individual.taxonomy.clone(),
    }
}

fn to_external_reference(reference: &v1::ExternalReference) -> v2::ExternalReference {
    v2::ExternalReference {
        id: reference.id.clone(),
        reference: String::new(),
        description: reference.description.clone(),
    }
}

fn to_evidence(evidence: &v1::Evidence) -> v2::Evidence {
    v2::Evidence {
        evidence_code: evidence.evidence_code.clone(),
        reference: evidence.reference.as_ref().map(to_external_reference),
    }
}

fn to_phenotypic_feature(feature: &v1::PhenotypicFeature) -> v2::PhenotypicFeature {
    let onset = feature.onset.as_ref().map(|onset| match onset {
        v1::phenotypic_feature::Onset::AgeOfOnset(age) => time_element(Element::Age(to_age(age))),
        v1::phenotypic_feature::Onset::AgeRangeOfOnset(range) => {
            time_element(Element::AgeRange(to_age_range(range)))
        }
        v1::phenotypic_feature::Onset::ClassOfOnset(class) => {
            time_element(Element::OntologyClass(class.clone()))
        }
    });
    v2::PhenotypicFeature {
        description: feature.description.clone(),
        r#type: feature.r#type.clone(),
        excluded: feature.negated,
        severity: feature.severity.clone(),
        modifiers: feature.modifiers.clone(),
        onset,
        resolution: None,
        evidence: feature.evidence.iter().map(to_evidence).collect(),
    }
}

fn to_disease(disease: &v1::Disease) -> v2::Disease {
    let onset = disease.onset.as_ref().map(|onset| match onset {
        v1::disease::Onset::AgeOfOnset(age) => time_element(Element::Age(to_age(age))),
        v1::disease::Onset::AgeRangeOfOnset(range) => {
            time_element(Element::AgeRange(to_age_range(range)))
        }
        v1::disease::Onset::ClassOfOnset(class) => {
            time_element(Element::OntologyClass(class.clone()))
        }
    });
    v2::Disease {
        term: disease.term.clone(),
        onset,
        disease_stage: disease.disease_stage.clone(),
        clinical_tnm_finding: disease.tnm_finding.clone(),
        ..Default::default()
    }
}

fn to_procedure(procedure: &v1::Procedure) -> v2::Procedure {
    v2::Procedure {
        code: procedure.code.clone(),
        body_site: procedure.body_site.clone(),
        performed: None,
    }
}

fn to_biosample(biosample: &v1::Biosample) -> v2::Biosample {
    if !biosample.variants.is_empty() {
        warn!(
            "Dropping {} variants of biosample {}",
            biosample.variants.len(),
            biosample.id
        );
    }
    let time_of_collection = biosample
        .individual_age_at_collection
        .as_ref()
        .map(|age| match age {
            v1::biosample::IndividualAgeAtCollection::AgeOfIndividualAtCollection(age) => {
                time_element(Element::Age(to_age(age)))
            }
            v1::biosample::IndividualAgeAtCollection::AgeRangeOfIndividualAtCollection(range) => {
                time_element(Element::AgeRange(to_age_range(range)))
            }
        });
    v2::Biosample {
        id: biosample.id.clone(),
        individual_id: biosample.individual_id.clone(),
        description: biosample.description.clone(),
        sampled_tissue: biosample.sampled_tissue.clone(),
        phenotypic_features: biosample
            .phenotypic_features
            .iter()
            .map(to_phenotypic_feature)
            .collect(),
        taxonomy: biosample.taxonomy.clone(),
        time_of_collection,
        histological_diagnosis: biosample.histological_diagnosis.clone(),
        tumor_progression: biosample.tumor_progression.clone(),
        tumor_grade: biosample.tumor_grade.clone(),
        diagnostic_markers: biosample.diagnostic_markers.clone(),
        procedure: biosample.procedure.as_ref().map(to_procedure),
        files: biosample.hts_files.iter().map(to_file).collect(),
        material_sample: biosample
            .is_control_sample
            .then(|| v2::OntologyClass::new(REFERENCE_SAMPLE.0, REFERENCE_SAMPLE.1)),
        ..Default::default()
    }
}

fn hts_format_name(format: v1::hts_file::HtsFormat) -> Option<&'static str> {
    use v1::hts_file::HtsFormat;
    match format {
        HtsFormat::Unknown => None,
        HtsFormat::Sam => Some("SAM"),
        HtsFormat::Bam => Some("BAM"),
        HtsFormat::Cram => Some("CRAM"),
        HtsFormat::Vcf => Some("VCF"),
        HtsFormat::Bcf => Some("BCF"),
        HtsFormat::Gvcf => Some("GVCF"),
        HtsFormat::Fastq => Some("FASTQ"),
    }
}

fn to_file(file: &v1::HtsFile) -> v2::File {
    let mut attributes = std::collections::BTreeMap::new();
    if let Some(format) = hts_format_name(file.hts_format()) {
        attributes.insert("htsFormat".to_string(), format.to_string());
    }
    if !file.genome_assembly.is_empty() {
        attributes.insert("genomeAssembly".to_string(), file.genome_assembly.clone());
    }
    if !file.description.is_empty() {
        attributes.insert("description".to_string(), file.description.clone());
    }
    v2::File {
        uri: file.uri.clone(),
        individual_to_file_identifiers: file.individual_to_sample_identifiers.clone(),
        file_attributes: attributes,
    }
}

fn to_meta_data(meta_data: &v1::MetaData) -> v2::MetaData {
    v2::MetaData {
        created: meta_data.created,
        created_by: meta_data.created_by.clone(),
        submitted_by: meta_data.submitted_by.clone(),
        resources: meta_data.resources.clone(),
        updates: meta_data.updates.clone(),
        phenopacket_schema_version: PHENOPACKET_SCHEMA_VERSION.to_string(),
        external_references: meta_data
            .external_references
            .iter()
            .map(to_external_reference)
            .collect(),
    }
}

fn to_gene_descriptor(gene: &v1::Gene) -> v2::GeneDescriptor {
    v2::GeneDescriptor {
        value_id: gene.id.clone(),
        symbol: gene.symbol.clone(),
        alternate_ids: gene.alternate_ids.clone(),
        ..Default::default()
    }
}

fn expression(syntax: &str, value: String) -> v2::Expression {
    v2::Expression {
        syntax: syntax.to_string(),
        value,
        version: String::new(),
    }
}

fn to_variation_descriptor(
    variant: &v1::Variant,
    gene_context: Option<&v2::GeneDescriptor>,
) -> PxfResult<v2::VariationDescriptor> {
    let mut descriptor = v2::VariationDescriptor {
        gene_context: gene_context.cloned(),
        allelic_state: variant.zygosity.clone(),
        ..Default::default()
    };
    match &variant.allele {
        Some(v1::variant::Allele::HgvsAllele(allele)) => {
            descriptor.id = allele.id.clone();
            descriptor.expressions.push(expression("hgvs", allele.hgvs.clone()));
        }
        Some(v1::variant::Allele::VcfAllele(allele)) => {
            let pos = u64::try_from(allele.pos).map_err(|_| {
                PhenopacketError::InvalidInput(format!("negative VCF position {}", allele.pos))
            })?;
            descriptor.id = allele.id.clone();
            descriptor.set_molecule_context(v2::MoleculeContext::Genomic);
            descriptor.vcf_record = Some(v2::VcfRecord {
                genome_assembly: allele.genome_assembly.clone(),
                chrom: allele.chr.clone(),
                pos,
                id: allele.id.clone(),
                r#ref: allele.r#ref.clone(),
                alt: allele.alt.clone(),
                info: allele.info.clone(),
                ..Default::default()
            });
        }
        Some(v1::variant::Allele::SpdiAllele(allele)) => {
            descriptor.id = allele.id.clone();
            descriptor.set_molecule_context(v2::MoleculeContext::Genomic);
            descriptor.expressions.push(expression(
                "spdi",
                format!(
                    "{}:{}:{}:{}",
                    allele.seq_id,
                    allele.position,
                    allele.deleted_sequence,
                    allele.inserted_sequence
                ),
            ));
        }
        Some(v1::variant::Allele::IscnAllele(allele)) => {
            descriptor.id = allele.id.clone();
            descriptor.expressions.push(expression("iscn", allele.iscn.clone()));
        }
        None => {
            return Err(PhenopacketError::InvalidInput(
                "variant without allele".to_string(),
            ))
        }
    }
    Ok(descriptor)
}

/// Builds the interpretation from the genes and variants of a phenopacket
///
/// Returns `None` if the phenopacket has neither genes nor variants.
fn to_interpretation(phenopacket: &v1::Phenopacket) -> PxfResult<Option<v2::Interpretation>> {
    if phenopacket.genes.is_empty() && phenopacket.variants.is_empty() {
        return Ok(None);
    }
    let [disease] = phenopacket.diseases.as_slice() else {
        return Err(PhenopacketError::InvalidInput(format!(
            "converting variants of {} requires exactly one disease, found {}",
            phenopacket.id,
            phenopacket.diseases.len()
        )));
    };

    let subject_id = phenopacket
        .subject
        .as_ref()
        .map(|subject| subject.id.clone())
        .unwrap_or_default();

    let genes: Vec<v2::GeneDescriptor> = phenopacket.genes.iter().map(to_gene_descriptor).collect();
    let gene_context = match genes.as_slice() {
        [gene] => Some(gene),
        _ => None,
    };

    let mut genomic_interpretations = Vec::with_capacity(phenopacket.variants.len());
    if phenopacket.variants.is_empty() {
        // genes without variants are reported as candidates
        for gene in genes.iter() {
            let mut interpretation = v2::GenomicInterpretation {
                subject_or_biosample_id: subject_id.clone(),
                call: Some(v2::genomic_interpretation::Call::Gene(gene.clone())),
                ..Default::default()
            };
            interpretation.set_interpretation_status(
                v2::genomic_interpretation::InterpretationStatus::Candidate,
            );
            genomic_interpretations.push(interpretation);
        }
    }
    for variant in &phenopacket.variants {
        let descriptor = to_variation_descriptor(variant, gene_context)?;
        let mut interpretation = v2::GenomicInterpretation {
            subject_or_biosample_id: subject_id.clone(),
            call: Some(v2::genomic_interpretation::Call::VariantInterpretation(
                v2::VariantInterpretation {
                    variation_descriptor: Some(descriptor),
                    ..Default::default()
                },
            )),
            ..Default::default()
        };
        interpretation
            .set_interpretation_status(v2::genomic_interpretation::InterpretationStatus::Causative);
        genomic_interpretations.push(interpretation);
    }

    let mut interpretation = v2::Interpretation {
        id: phenopacket.id.clone(),
        diagnosis: Some(v2::Diagnosis {
            disease: disease.term.clone(),
            genomic_interpretations,
        }),
        ..Default::default()
    };
    interpretation.set_progress_status(v2::interpretation::ProgressStatus::Solved);
    Ok(Some(interpretation))
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::BTreeMap;
    use v2::genomic_interpretation::{Call, InterpretationStatus};

    fn bethlem_myopathy() -> v1::Phenopacket {
        v1::Phenopacket {
            id: "PMID:30808312-COL6A1-Bethlem".to_string(),
            subject: Some(v1::Individual {
                id: "proband".to_string(),
                age: Some(v1::individual::Age::AgeAtCollection(v1::Age {
                    age: "P6M".to_string(),
                })),
                sex: v2::Sex::Male as i32,
                ..Default::default()
            }),
            phenotypic_features: vec![
                v1::PhenotypicFeature {
                    r#type: Some(v2::OntologyClass::new("HP:0001558", "Decreased fetal movement")),
                    negated: true,
                    onset: Some(v1::phenotypic_feature::Onset::ClassOfOnset(
                        v2::OntologyClass::new("HP:0011461", "Fetal onset"),
                    )),
                    evidence: vec![v1::Evidence {
                        evidence_code: Some(v2::OntologyClass::new(
                            "ECO:0000033",
                            "author statement supported by traceable reference",
                        )),
                        reference: Some(v1::ExternalReference {
                            id: "PMID:30808312".to_string(),
                            description: "COL6A1 mutation leading to Bethlem myopathy".to_string(),
                        }),
                    }],
                    ..Default::default()
                },
                v1::PhenotypicFeature {
                    r#type: Some(v2::OntologyClass::new("HP:0003701", "Proximal muscle weakness")),
                    onset: Some(v1::phenotypic_feature::Onset::AgeOfOnset(v1::Age {
                        age: "P3Y".to_string(),
                    })),
                    ..Default::default()
                },
            ],
            genes: vec![v1::Gene {
                id: "HGNC:2211".to_string(),
                symbol: "COL6A1".to_string(),
                ..Default::default()
            }],
            variants: vec![v1::Variant {
                allele: Some(v1::variant::Allele::VcfAllele(v1::VcfAllele {
                    genome_assembly: "GRCh38".to_string(),
                    chr: "21".to_string(),
                    pos: 45_989_626,
                    r#ref: "G".to_string(),
                    alt: "A".to_string(),
                    ..Default::default()
                })),
                zygosity: Some(v2::OntologyClass::new("GENO:0000135", "heterozygous")),
            }],
            diseases: vec![v1::Disease {
                term: Some(v2::OntologyClass::new("OMIM:158810", "Bethlem myopathy 1")),
                tnm_finding: vec![v2::OntologyClass::new("NCIT:C48766", "pT2b Stage Finding")],
                ..Default::default()
            }],
            hts_files: vec![v1::HtsFile {
                uri: "file://data/genomes/P000001C".to_string(),
                description: "whole genome".to_string(),
                hts_format: v1::hts_file::HtsFormat::Vcf as i32,
                genome_assembly: "GRCh38".to_string(),
                individual_to_sample_identifiers: BTreeMap::from([(
                    "proband".to_string(),
                    "NA12345".to_string(),
                )]),
            }],
            meta_data: Some(v1::MetaData {
                created_by: "Peter R.".to_string(),
                phenopacket_schema_version: "1.0".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn features_and_subject() {
        let converted = V1ToV2Converter::new(false)
            .convert_phenopacket(&bethlem_myopathy())
            .unwrap();

        let subject = converted.subject.as_ref().unwrap();
        assert_eq!(subject.sex(), v2::Sex::Male);
        assert_eq!(
            subject.time_at_last_encounter,
            Some(time_element(Element::Age(v2::Age {
                iso8601duration: "P6M".to_string()
            })))
        );

        let excluded = &converted.phenotypic_features[0];
        assert!(excluded.excluded);
        assert!(matches!(
            excluded.onset.as_ref().and_then(|onset| onset.element.as_ref()),
            Some(Element::OntologyClass(_))
        ));
        assert_eq!(
            excluded.evidence[0].reference.as_ref().unwrap().id,
            "PMID:30808312"
        );
        assert!(!converted.phenotypic_features[1].excluded);
        assert!(converted.interpretations.is_empty());
    }

    #[test]
    fn disease_and_meta_data() {
        let converted = V1ToV2Converter::new(false)
            .convert_phenopacket(&bethlem_myopathy())
            .unwrap();
        assert_eq!(converted.diseases[0].clinical_tnm_finding.len(), 1);
        assert_eq!(
            converted.meta_data.unwrap().phenopacket_schema_version,
            PHENOPACKET_SCHEMA_VERSION
        );
    }

    #[test]
    fn hts_file_to_file() {
        let converted = V1ToV2Converter::new(false)
            .convert_phenopacket(&bethlem_myopathy())
            .unwrap();
        let file = &converted.files[0];
        assert_eq!(file.uri, "file://data/genomes/P000001C");
        assert_eq!(file.individual_to_file_identifiers["proband"], "NA12345");
        assert_eq!(file.file_attributes["htsFormat"], "VCF");
        assert_eq!(file.file_attributes["genomeAssembly"], "GRCh38");
        assert_eq!(file.file_attributes["description"], "whole genome");
    }

    #[test]
    fn variants_to_interpretation() {
        let converted = V1ToV2Converter::new(true)
            .convert_phenopacket(&bethlem_myopathy())
            .unwrap();
        assert_eq!(converted.interpretations.len(), 1);
        let interpretation = &converted.interpretations[0];
        assert_eq!(
            interpretation.progress_status(),
            v2::interpretation::ProgressStatus::Solved
        );
        let diagnosis = interpretation.diagnosis.as_ref().unwrap();
        assert_eq!(diagnosis.disease.as_ref().unwrap().id, "OMIM:158810");

        let genomic = &diagnosis.genomic_interpretations[0];
        assert_eq!(genomic.subject_or_biosample_id, "proband");
        assert_eq!(
            genomic.interpretation_status(),
            InterpretationStatus::Causative
        );
        assert_eq!(genomic.gene().unwrap().symbol, "COL6A1");

        let Some(Call::VariantInterpretation(variant)) = &genomic.call else {
            panic!("expected a variant");
        };
        let descriptor = variant.variation_descriptor.as_ref().unwrap();
        let vcf = descriptor.vcf_record.as_ref().unwrap();
        assert_eq!(vcf.pos, 45_989_626);
        assert_eq!(vcf.chrom, "21");
        assert_eq!(descriptor.allelic_state.as_ref().unwrap().id, "GENO:0000135");
    }

    #[test]
    fn variants_require_single_disease() {
        let mut phenopacket = bethlem_myopathy();
        phenopacket.diseases.push(phenopacket.diseases[0].clone());
        let result = V1ToV2Converter::new(true).convert_phenopacket(&phenopacket);
        assert!(matches!(result, Err(PhenopacketError::InvalidInput(_))));

        phenopacket.diseases.clear();
        assert!(V1ToV2Converter::new(true).convert_phenopacket(&phenopacket).is_err());

        // without variant conversion the diseases do not matter
        assert!(V1ToV2Converter::new(false).convert_phenopacket(&phenopacket).is_ok());
    }

    #[test]
    fn no_gene_context_for_multiple_genes() {
        let mut phenopacket = bethlem_myopathy();
        phenopacket.genes.push(v1::Gene {
            id: "HGNC:2212".to_string(),
            symbol: "COL6A2".to_string(),
            ..Default::default()
        });
        phenopacket.variants[0].allele = Some(v1::variant::Allele::HgvsAllele(v1::HgvsAllele {
            id: String::new(),
            hgvs: "NM_001848.2:c.877G>A".to_string(),
        }));
        let converted = V1ToV2Converter::new(true).convert_phenopacket(&phenopacket).unwrap();
        let genomic = &converted.interpretations[0]
            .diagnosis
            .as_ref()
            .unwrap()
            .genomic_interpretations[0];
        assert!(genomic.gene().is_none());
        let Some(Call::VariantInterpretation(variant)) = &genomic.call else {
            panic!("expected a variant");
        };
        let expression = &variant.variation_descriptor.as_ref().unwrap().expressions[0];
        assert_eq!(expression.syntax, "hgvs");
        assert_eq!(expression.value, "NM_001848.2:c.877G>A");
    }

    #[test]
    fn family_keeps_order() {
        let proband = bethlem_myopathy();
        let mut mother = bethlem_myopathy();
        mother.id = "mother".to_string();
        let family = v1::Family {
            id: "family".to_string(),
            proband: Some(proband),
            relatives: vec![mother],
            ..Default::default()
        };
        let converted = V1ToV2Converter::new(false).convert_family(&family).unwrap();
        assert_eq!(converted.proband.unwrap().id, "PMID:30808312-COL6A1-Bethlem");
        assert_eq!(converted.relatives[0].id, "mother");
    }

    #[test]
    fn cohort_propagates_errors() {
        let mut member = bethlem_myopathy();
        member.diseases.clear();
        let cohort = v1::Cohort {
            id: "cohort".to_string(),
            members: vec![bethlem_myopathy(), member],
            ..Default::default()
        };
        assert!(V1ToV2Converter::new(true).convert_cohort(&cohort).is_err());
        assert_eq!(
            V1ToV2Converter::new(false)
                .convert_cohort(&cohort)
                .unwrap()
                .members
                .len(),
            2
        );
    }
}
