use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

use phenopacket_tools::io::PhenopacketFormat;
use phenopacket_tools::model::v2::Phenopacket;
use phenopacket_tools::PxfResult;

use super::write_message;

mod pseudoexfoliation;
mod warburg;

#[derive(clap::Args, Debug)]
pub struct ExamplesArgs {
    /// Directory of the example files, created if missing
    #[arg(short, long)]
    pub output: PathBuf,
}

/// The built-in examples and their file stems
fn examples() -> PxfResult<Vec<(&'static str, Phenopacket)>> {
    Ok(vec![
        ("warburg-micro-syndrome", warburg::phenopacket()?),
        ("pseudoexfoliation", pseudoexfoliation::phenopacket()?),
    ])
}

pub fn run(args: &ExamplesArgs) -> anyhow::Result<()> {
    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("Unable to create {}", args.output.display()))?;

    for (stem, phenopacket) in examples()? {
        for format in [
            PhenopacketFormat::Json,
            PhenopacketFormat::Yaml,
            PhenopacketFormat::Protobuf,
        ] {
            let path = args.output.join(format!("{stem}{}", format.suffix()));
            info!("Writing {}", path.display());
            write_message(&phenopacket, format, Some(&path))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use super::*;
    use phenopacket_tools::validator::phenotype::HpoAncestryValidator;
    use phenopacket_tools::validator::{MetaDataValidator, ValidationWorkflowRunner};
    use phenopacket_tools::Ontology;

    #[test]
    fn examples_pass_the_schema_and_metadata_checks() {
        let runner = ValidationWorkflowRunner::phenopacket()
            .add_semantic_validator(Box::new(MetaDataValidator::new()))
            .build()
            .unwrap();
        for (stem, phenopacket) in examples().unwrap() {
            let results = runner.validate_message(&phenopacket);
            assert!(results.results().is_empty(), "{stem}: {:?}", results.results());
        }
    }

    #[test]
    fn writes_all_formats() {
        let dir = tempfile::tempdir().unwrap();
        run(&ExamplesArgs {
            output: dir.path().join("out"),
        })
        .unwrap();
        for name in [
            "warburg-micro-syndrome.json",
            "warburg-micro-syndrome.yaml",
            "warburg-micro-syndrome.pb",
            "pseudoexfoliation.json",
            "pseudoexfoliation.yaml",
            "pseudoexfoliation.pb",
        ] {
            assert!(dir.path().join("out").join(name).is_file(), "{name}");
        }
    }

    #[test]
    fn warburg_axial_hypotonia_has_no_ancestor() {
        let hpo = Arc::new(Ontology::from_file("tests/small.obo").unwrap());
        let runner = ValidationWorkflowRunner::phenopacket()
            .add_semantic_validator(Box::new(HpoAncestryValidator::new(hpo)))
            .build()
            .unwrap();
        let results = runner.validate_message(&warburg::phenopacket().unwrap());
        assert!(results.is_valid());
    }
}
