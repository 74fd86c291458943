use crate::model::v2::{
    Biosample, Cohort, Disease, Family, File, Individual, Interpretation, Measurement,
    MedicalAction, MetaData, Pedigree, Phenopacket, PhenotypicFeature,
};

/// Builds a [`Phenopacket`]
pub struct PhenopacketBuilder {
    phenopacket: Phenopacket,
}

impl PhenopacketBuilder {
    pub fn create<S: Into<String>>(id: S, meta_data: MetaData) -> Self {
        Self {
            phenopacket: Phenopacket {
                id: id.into(),
                meta_data: Some(meta_data),
                ..Default::default()
            },
        }
    }

    /// Sets the subject of the phenopacket
    pub fn individual(mut self, individual: Individual) -> Self {
        self.phenopacket.subject = Some(individual);
        self
    }

    pub fn add_phenotypic_feature(mut self, feature: PhenotypicFeature) -> Self {
        self.phenopacket.phenotypic_features.push(feature);
        self
    }

    pub fn add_phenotypic_features<I: IntoIterator<Item = PhenotypicFeature>>(
        mut self,
        features: I,
    ) -> Self {
        self.phenopacket.phenotypic_features.extend(features);
        self
    }

    pub fn add_measurement(mut self, measurement: Measurement) -> Self {
        self.phenopacket.measurements.push(measurement);
        self
    }

    pub fn add_measurements<I: IntoIterator<Item = Measurement>>(mut self, measurements: I) -> Self {
        self.phenopacket.measurements.extend(measurements);
        self
    }

    pub fn add_biosample(mut self, biosample: Biosample) -> Self {
        self.phenopacket.biosamples.push(biosample);
        self
    }

    pub fn add_interpretation(mut self, interpretation: Interpretation) -> Self {
        self.phenopacket.interpretations.push(interpretation);
        self
    }

    pub fn add_disease(mut self, disease: Disease) -> Self {
        self.phenopacket.diseases.push(disease);
        self
    }

    pub fn add_diseases<I: IntoIterator<Item = Disease>>(mut self, diseases: I) -> Self {
        self.phenopacket.diseases.extend(diseases);
        self
    }

    pub fn add_medical_action(mut self, action: MedicalAction) -> Self {
        self.phenopacket.medical_actions.push(action);
        self
    }

    pub fn add_file(mut self, file: File) -> Self {
        self.phenopacket.files.push(file);
        self
    }

    pub fn build(self) -> Phenopacket {
        self.phenopacket
    }
}

/// Builds a [`Family`] around a proband
pub struct FamilyBuilder {
    family: Family,
}

impl FamilyBuilder {
    pub fn create<S: Into<String>>(id: S, meta_data: MetaData) -> Self {
        Self {
            family: Family {
                id: id.into(),
                meta_data: Some(meta_data),
                ..Default::default()
            },
        }
    }

    pub fn proband(mut self, proband: Phenopacket) -> Self {
        self.family.proband = Some(proband);
        self
    }

    pub fn add_relative(mut self, relative: Phenopacket) -> Self {
        self.family.relatives.push(relative);
        self
    }

    pub fn pedigree(mut self, pedigree: Pedigree) -> Self {
        self.family.pedigree = Some(pedigree);
        self
    }

    pub fn consanguinous_parents(mut self) -> Self {
        self.family.consanguinous_parents = true;
        self
    }

    pub fn add_file(mut self, file: File) -> Self {
        self.family.files.push(file);
        self
    }

    pub fn build(self) -> Family {
        self.family
    }
}

/// Builds a [`Cohort`] of phenopackets
pub struct CohortBuilder {
    cohort: Cohort,
}

impl CohortBuilder {
    pub fn create<S: Into<String>>(id: S, meta_data: MetaData) -> Self {
        Self {
            cohort: Cohort {
                id: id.into(),
                meta_data: Some(meta_data),
                ..Default::default()
            },
        }
    }

    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.cohort.description = description.into();
        self
    }

    pub fn add_member(mut self, member: Phenopacket) -> Self {
        self.cohort.members.push(member);
        self
    }

    pub fn add_members<I: IntoIterator<Item = Phenopacket>>(mut self, members: I) -> Self {
        self.cohort.members.extend(members);
        self
    }

    pub fn add_file(mut self, file: File) -> Self {
        self.cohort.files.push(file);
        self
    }

    pub fn build(self) -> Cohort {
        self.cohort
    }
}

/// Builds a [`File`], e.g. a VCF with the variants of the proband
///
/// ```
/// use phenopacket_tools::builder::FileBuilder;
///
/// let file = FileBuilder::builder("file://data/genomes/P000001C")
///     .add_individual_to_file_identifier("patient1", "NA12345")
///     .genome_assembly("GRCh38")
///     .file_format("VCF")
///     .build();
///
/// assert_eq!(file.file_attributes["genomeAssembly"], "GRCh38");
/// ```
pub struct FileBuilder {
    file: File,
}

impl FileBuilder {
    pub fn builder<S: Into<String>>(uri: S) -> Self {
        Self {
            file: File {
                uri: uri.into(),
                ..Default::default()
            },
        }
    }

    /// Maps an individual in the phenopacket to its identifier in the file
    pub fn add_individual_to_file_identifier<S: Into<String>, T: Into<String>>(
        mut self,
        individual_id: S,
        file_id: T,
    ) -> Self {
        self.file
            .individual_to_file_identifiers
            .insert(individual_id.into(), file_id.into());
        self
    }

    pub fn add_file_attribute<S: Into<String>, T: Into<String>>(mut self, key: S, value: T) -> Self {
        self.file.file_attributes.insert(key.into(), value.into());
        self
    }

    pub fn genome_assembly<S: Into<String>>(self, assembly: S) -> Self {
        self.add_file_attribute("genomeAssembly", assembly)
    }

    pub fn file_format<S: Into<String>>(self, format: S) -> Self {
        self.add_file_attribute("fileFormat", format)
    }

    pub fn description<S: Into<String>>(self, description: S) -> Self {
        self.add_file_attribute("description", description)
    }

    pub fn build(self) -> File {
        self.file
    }
}
