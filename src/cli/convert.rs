use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use prost::Message;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

use phenopacket_tools::converter::V1ToV2Converter;
use phenopacket_tools::io::{parse_message, Element, PhenopacketFormat};
use phenopacket_tools::model::v1;
use phenopacket_tools::PxfResult;

use super::{write_message, Input, InputArgs};

#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format (protobuf, json or yaml), the input format if omitted
    #[arg(long)]
    pub output_format: Option<PhenopacketFormat>,

    /// Directory of the converted files, required for more than one input
    #[arg(short = 'O', long)]
    pub output_directory: Option<PathBuf>,

    /// Convert the genes and variants of v1 phenopackets into interpretations
    #[arg(long)]
    pub convert_variants: bool,
}

pub fn run(args: &ConvertArgs) -> anyhow::Result<()> {
    if args.input.input.len() > 1 && args.output_directory.is_none() {
        bail!("An output directory is required to convert more than one input");
    }
    let converter = V1ToV2Converter::new(args.convert_variants);

    for input in args.input.read()? {
        let format = args.input.format_of(&input.bytes);
        let output_format = args.output_format.unwrap_or(format);
        let target = output_path(&input, args.output_directory.as_deref(), output_format);
        info!("Converting {} from {format} to {output_format}", input.name());

        let target = target.as_deref();
        match args.input.element {
            Element::Phenopacket => {
                convert(&input, format, output_format, target, |pp: &v1::Phenopacket| {
                    converter.convert_phenopacket(pp)
                })
            }
            Element::Family => convert(&input, format, output_format, target, |family: &v1::Family| {
                converter.convert_family(family)
            }),
            Element::Cohort => convert(&input, format, output_format, target, |cohort: &v1::Cohort| {
                converter.convert_cohort(cohort)
            }),
        }
        .with_context(|| format!("Unable to convert {}", input.name()))?;
    }
    Ok(())
}

fn convert<S, T, F>(
    input: &Input,
    format: PhenopacketFormat,
    output_format: PhenopacketFormat,
    target: Option<&Path>,
    convert: F,
) -> anyhow::Result<()>
where
    S: Message + Default + DeserializeOwned,
    T: Message + Serialize,
    F: Fn(&S) -> PxfResult<T>,
{
    let message: S = parse_message(&input.bytes, format)?;
    let converted = convert(&message)?;
    write_message(&converted, output_format, target)
}

/// `<directory>/<stem><suffix>`, or `None` to write to stdout
///
/// The stem is the input file name without a `.pb`, `.json`, `.yaml` or
/// `.yml` extension. Input from stdin is always written to stdout.
fn output_path(input: &Input, directory: Option<&Path>, format: PhenopacketFormat) -> Option<PathBuf> {
    let directory = directory?;
    let path = input.path.as_ref()?;
    let file_name = path.file_name()?.to_string_lossy();
    let stem = [".pb", ".json", ".yaml", ".yml"]
        .iter()
        .find_map(|suffix| file_name.strip_suffix(suffix))
        .unwrap_or(&file_name);
    Some(directory.join(format!("{stem}{}", format.suffix())))
}
