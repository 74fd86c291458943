use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use prost::Message;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

use phenopacket_tools::builder::constants::organ_systems;
use phenopacket_tools::io::Element;
use phenopacket_tools::model::PhenopacketContainer;
use phenopacket_tools::validator::phenotype::{
    HpoAncestryValidator, HpoPhenotypeValidator, OrganSystemValidator,
};
use phenopacket_tools::validator::{
    MetaDataValidator, ValidationResults, ValidationWorkflowRunner, ValidationWorkflowRunnerBuilder,
};
use phenopacket_tools::{HpoTermId, Ontology};

use super::{Input, InputArgs};

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Additional JSON schemas that the input must conform to
    #[arg(long, num_args = 1..)]
    pub require: Vec<PathBuf>,

    /// Validate against the HPO rare disease requirements
    #[arg(long)]
    pub rare_disease: bool,

    /// HPO in OBO (`.obo`) or OBO Graphs (`.json`) format, enables the
    /// phenotype, ancestry and metadata validators
    #[arg(long)]
    pub hpo: Option<PathBuf>,

    /// Organ systems that must be annotated, e.g. HP:0000478
    #[arg(short = 's', long = "organ-system", requires = "hpo")]
    pub organ_systems: Vec<HpoTermId>,

    /// Require the annotation of all top-level organ systems
    #[arg(long, requires = "hpo", conflicts_with = "organ_systems")]
    pub all_organ_systems: bool,
}

pub fn run(args: &ValidateArgs) -> anyhow::Result<()> {
    let hpo = match &args.hpo {
        Some(path) => {
            let ontology = Ontology::from_file(path)
                .with_context(|| format!("Unable to load the HPO from {}", path.display()))?;
            info!(
                "Loaded HPO {} with {} terms",
                ontology.version().unwrap_or("(unknown version)"),
                ontology.len()
            );
            Some(Arc::new(ontology))
        }
        None => None,
    };
    let inputs = args.input.read()?;

    let results = match args.input.element {
        Element::Phenopacket => {
            let runner = configure(ValidationWorkflowRunner::phenopacket(), args, hpo.as_ref())
                .build()?;
            validate_all(&runner, &inputs, &args.input)
        }
        Element::Family => {
            let runner = configure(ValidationWorkflowRunner::family(), args, hpo.as_ref()).build()?;
            validate_all(&runner, &inputs, &args.input)
        }
        Element::Cohort => {
            let runner = configure(ValidationWorkflowRunner::cohort(), args, hpo.as_ref()).build()?;
            validate_all(&runner, &inputs, &args.input)
        }
    };

    let mut stdout = std::io::stdout().lock();
    write_csv(&mut stdout, &results).context("Unable to write the validation results")?;
    stdout.flush()?;
    Ok(())
}

fn configure<T: PhenopacketContainer>(
    mut builder: ValidationWorkflowRunnerBuilder<T>,
    args: &ValidateArgs,
    hpo: Option<&Arc<Ontology>>,
) -> ValidationWorkflowRunnerBuilder<T> {
    if args.rare_disease {
        builder = builder.hpo_rare_disease();
    }
    for schema in &args.require {
        builder = builder.add_json_schema(schema);
    }
    if let Some(hpo) = hpo {
        builder = builder
            .add_semantic_validator(Box::new(HpoPhenotypeValidator::new(Arc::clone(hpo))))
            .add_semantic_validator(Box::new(HpoAncestryValidator::new(Arc::clone(hpo))))
            .add_semantic_validator(Box::new(MetaDataValidator::new()));

        let ids: Vec<HpoTermId> = if args.all_organ_systems {
            organ_systems::ALL.to_vec()
        } else {
            args.organ_systems.clone()
        };
        if !ids.is_empty() {
            builder = builder
                .add_semantic_validator(Box::new(OrganSystemValidator::new(Arc::clone(hpo), ids)));
        }
    }
    builder
}

/// Returns the results of every input, keyed by the input name
fn validate_all<T>(
    runner: &ValidationWorkflowRunner<T>,
    inputs: &[Input],
    args: &InputArgs,
) -> Vec<(String, ValidationResults)>
where
    T: Message + Default + DeserializeOwned + Serialize,
{
    inputs
        .iter()
        .map(|input| {
            let format = args.format_of(&input.bytes);
            let results = runner.validate_bytes_as(&input.bytes, format);
            info!(
                "{}: {} issues found",
                input.name(),
                results.results().len()
            );
            (input.name(), results)
        })
        .collect()
}

/// Writes the `#` comment lines followed by one CSV record per issue
fn write_csv<W: Write>(writer: &mut W, results: &[(String, ValidationResults)]) -> std::io::Result<()> {
    writeln!(
        writer,
        "#{} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )?;
    writeln!(writer, "#date={}", chrono::Utc::now().to_rfc3339())?;
    if let Some((_, first)) = results.first() {
        for validator in first.validators() {
            writeln!(
                writer,
                "#validator={};{};{}",
                validator.id(),
                validator.name(),
                validator.description()
            )?;
        }
    }

    let mut records = csv::WriterBuilder::new().from_writer(writer);
    records.write_record(["INPUT", "LEVEL", "VALIDATOR_ID", "CATEGORY", "MESSAGE"])?;
    for (input, results) in results {
        for result in results.results() {
            let level = result.level().to_string();
            records.write_record([
                input.as_str(),
                level.as_str(),
                result.validator_info().id(),
                result.category(),
                result.message(),
            ])?;
        }
    }
    records.flush()
}

#[cfg(test)]
mod test {
    use super::*;
    use phenopacket_tools::validator::{ValidationResult, ValidatorInfo};

    #[test]
    fn quoting() {
        let results = ValidationResults::new(
            vec![ValidatorInfo::input()],
            vec![ValidationResult::warning(
                ValidatorInfo::input(),
                "Quotes, commas",
                "Using \"HP:0000284\" in 'proband'\nsecond line",
            )],
        );
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &[("dir, with comma/case1.json".to_string(), results)]).unwrap();
        let csv = String::from_utf8(buffer).unwrap();
        assert!(csv.ends_with(
            "\"dir, with comma/case1.json\",WARNING,InputValidator,\"Quotes, commas\",\
             \"Using \"\"HP:0000284\"\" in 'proband'\nsecond line\"\n"
        ));
    }

    #[test]
    fn csv_output() {
        let results = ValidationResults::new(
            vec![ValidatorInfo::input()],
            vec![ValidationResult::error(
                ValidatorInfo::input(),
                "Input is not well formatted",
                "Unable to decode, giving up",
            )],
        );
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &[("case1.json".to_string(), results)]).unwrap();
        let csv = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert!(lines[0].starts_with("#phenopacket-tools "));
        assert!(lines[1].starts_with("#date="));
        assert!(lines[2].starts_with("#validator=InputValidator;"));
        assert_eq!(lines[3], "INPUT,LEVEL,VALIDATOR_ID,CATEGORY,MESSAGE");
        assert_eq!(
            lines[4],
            "case1.json,ERROR,InputValidator,Input is not well formatted,\"Unable to decode, giving up\""
        );
    }
}
