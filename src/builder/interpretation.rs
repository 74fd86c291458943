use crate::model::v2::{
    genomic_interpretation::{Call, InterpretationStatus},
    interpretation::ProgressStatus,
    AcmgPathogenicityClassification, Diagnosis, Expression, GeneDescriptor,
    GenomicInterpretation, Interpretation, MoleculeContext, OntologyClass, TherapeuticActionability,
    VariantInterpretation, VariationDescriptor, VcfRecord,
};

/// Builds an [`Interpretation`] of a genomic analysis
pub struct InterpretationBuilder {
    interpretation: Interpretation,
}

impl InterpretationBuilder {
    pub fn builder<S: Into<String>>(id: S) -> Self {
        Self {
            interpretation: Interpretation {
                id: id.into(),
                ..Default::default()
            },
        }
    }

    pub fn progress_status(mut self, status: ProgressStatus) -> Self {
        self.interpretation.set_progress_status(status);
        self
    }

    pub fn solved(self) -> Self {
        self.progress_status(ProgressStatus::Solved)
    }

    pub fn unsolved(self) -> Self {
        self.progress_status(ProgressStatus::Unsolved)
    }

    pub fn in_progress(self) -> Self {
        self.progress_status(ProgressStatus::InProgress)
    }

    pub fn completed(self) -> Self {
        self.progress_status(ProgressStatus::Completed)
    }

    pub fn diagnosis(mut self, diagnosis: Diagnosis) -> Self {
        self.interpretation.diagnosis = Some(diagnosis);
        self
    }

    pub fn summary<S: Into<String>>(mut self, summary: S) -> Self {
        self.interpretation.summary = summary.into();
        self
    }

    pub fn build(self) -> Interpretation {
        self.interpretation
    }
}

/// Builds a [`Diagnosis`] and the genomic findings that support it
pub struct DiagnosisBuilder {
    diagnosis: Diagnosis,
}

impl DiagnosisBuilder {
    pub fn builder(disease: OntologyClass) -> Self {
        Self {
            diagnosis: Diagnosis {
                disease: Some(disease),
                genomic_interpretations: Vec::new(),
            },
        }
    }

    pub fn add_genomic_interpretation(mut self, interpretation: GenomicInterpretation) -> Self {
        self.diagnosis.genomic_interpretations.push(interpretation);
        self
    }

    pub fn build(self) -> Diagnosis {
        self.diagnosis
    }
}

/// Builds a [`GenomicInterpretation`] of a gene or variant
pub struct GenomicInterpretationBuilder {
    interpretation: GenomicInterpretation,
}

impl GenomicInterpretationBuilder {
    /// `subject_or_biosample_id` is the individual or biosample the finding belongs to
    pub fn builder<S: Into<String>>(subject_or_biosample_id: S) -> Self {
        Self {
            interpretation: GenomicInterpretation {
                subject_or_biosample_id: subject_or_biosample_id.into(),
                ..Default::default()
            },
        }
    }

    pub fn interpretation_status(mut self, status: InterpretationStatus) -> Self {
        self.interpretation.set_interpretation_status(status);
        self
    }

    pub fn causative(self) -> Self {
        self.interpretation_status(InterpretationStatus::Causative)
    }

    pub fn contributory(self) -> Self {
        self.interpretation_status(InterpretationStatus::Contributory)
    }

    pub fn candidate(self) -> Self {
        self.interpretation_status(InterpretationStatus::Candidate)
    }

    pub fn rejected(self) -> Self {
        self.interpretation_status(InterpretationStatus::Rejected)
    }

    pub fn gene(mut self, gene: GeneDescriptor) -> Self {
        self.interpretation.call = Some(Call::Gene(gene));
        self
    }

    pub fn variant_interpretation(mut self, variant: VariantInterpretation) -> Self {
        self.interpretation.call = Some(Call::VariantInterpretation(variant));
        self
    }

    /// Shortcut for a variant without ACMG classification or actionability
    pub fn variation_descriptor(self, descriptor: VariationDescriptor) -> Self {
        self.variant_interpretation(VariantInterpretation {
            variation_descriptor: Some(descriptor),
            ..Default::default()
        })
    }

    /// A variant with its ACMG pathogenicity class
    pub fn classified_variant(
        self,
        descriptor: VariationDescriptor,
        classification: AcmgPathogenicityClassification,
        actionability: TherapeuticActionability,
    ) -> Self {
        let mut variant = VariantInterpretation {
            variation_descriptor: Some(descriptor),
            ..Default::default()
        };
        variant.set_acmg_pathogenicity_classification(classification);
        variant.set_therapeutic_actionability(actionability);
        self.variant_interpretation(variant)
    }

    pub fn build(self) -> GenomicInterpretation {
        self.interpretation
    }
}

/// Builds a [`VariationDescriptor`]
///
/// ```
/// use phenopacket_tools::builder::VariationDescriptorBuilder;
///
/// let variant = VariationDescriptorBuilder::builder("var-1")
///     .hgvs("NM_000492.4:c.1521_1523del")
///     .heterozygous()
///     .genomic()
///     .build();
///
/// assert_eq!(variant.expressions[0].syntax, "hgvs");
/// assert_eq!(variant.allelic_state.unwrap().id, "GENO:0000135");
/// ```
pub struct VariationDescriptorBuilder {
    descriptor: VariationDescriptor,
}

impl VariationDescriptorBuilder {
    pub fn builder<S: Into<String>>(id: S) -> Self {
        Self {
            descriptor: VariationDescriptor {
                id: id.into(),
                ..Default::default()
            },
        }
    }

    pub fn label<S: Into<String>>(mut self, label: S) -> Self {
        self.descriptor.label = label.into();
        self
    }

    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.descriptor.description = description.into();
        self
    }

    pub fn gene_context(mut self, gene: GeneDescriptor) -> Self {
        self.descriptor.gene_context = Some(gene);
        self
    }

    pub fn add_expression(mut self, expression: Expression) -> Self {
        self.descriptor.expressions.push(expression);
        self
    }

    fn expression(self, syntax: &str, value: String) -> Self {
        self.add_expression(Expression {
            syntax: syntax.to_string(),
            value,
            version: String::new(),
        })
    }

    pub fn hgvs<S: Into<String>>(self, value: S) -> Self {
        self.expression("hgvs", value.into())
    }

    pub fn spdi<S: Into<String>>(self, value: S) -> Self {
        self.expression("spdi", value.into())
    }

    pub fn iscn<S: Into<String>>(self, value: S) -> Self {
        self.expression("iscn", value.into())
    }

    pub fn vcf_record(mut self, record: VcfRecord) -> Self {
        self.descriptor.vcf_record = Some(record);
        self
    }

    pub fn add_xref<S: Into<String>>(mut self, xref: S) -> Self {
        self.descriptor.xrefs.push(xref.into());
        self
    }

    pub fn add_alternate_label<S: Into<String>>(mut self, label: S) -> Self {
        self.descriptor.alternate_labels.push(label.into());
        self
    }

    pub fn molecule_context(mut self, context: MoleculeContext) -> Self {
        self.descriptor.set_molecule_context(context);
        self
    }

    pub fn genomic(self) -> Self {
        self.molecule_context(MoleculeContext::Genomic)
    }

    pub fn transcript(self) -> Self {
        self.molecule_context(MoleculeContext::Transcript)
    }

    pub fn protein(self) -> Self {
        self.molecule_context(MoleculeContext::Protein)
    }

    pub fn structural_type(mut self, structural_type: OntologyClass) -> Self {
        self.descriptor.structural_type = Some(structural_type);
        self
    }

    pub fn vrs_ref_allele_seq<S: Into<String>>(mut self, sequence: S) -> Self {
        self.descriptor.vrs_ref_allele_seq = sequence.into();
        self
    }

    /// The zygosity, usually a GENO term
    pub fn allelic_state(mut self, state: OntologyClass) -> Self {
        self.descriptor.allelic_state = Some(state);
        self
    }

    pub fn heterozygous(self) -> Self {
        self.allelic_state(OntologyClass::new("GENO:0000135", "heterozygous"))
    }

    pub fn homozygous(self) -> Self {
        self.allelic_state(OntologyClass::new("GENO:0000136", "homozygous"))
    }

    pub fn hemizygous(self) -> Self {
        self.allelic_state(OntologyClass::new("GENO:0000134", "hemizygous"))
    }

    pub fn build(self) -> VariationDescriptor {
        self.descriptor
    }
}
