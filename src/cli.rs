//! Subcommands of the `pxf` binary
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::Context;
use prost::Message;
use serde::Serialize;

use phenopacket_tools::io::{print_message, read_to_end, sniff, Element, PhenopacketFormat};

pub mod convert;
pub mod examples;
pub mod validate;

/// Input options shared by `convert` and `validate`
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Input files, stdin is read if no file is given
    #[arg(short, long, num_args = 1..)]
    pub input: Vec<PathBuf>,

    /// Input format (protobuf, json or yaml), guessed from the content if omitted
    #[arg(short, long)]
    pub format: Option<PhenopacketFormat>,

    /// Top-level element of the input (phenopacket, family or cohort)
    #[arg(short, long, default_value_t = Element::Phenopacket)]
    pub element: Element,
}

/// The raw bytes of one input
pub struct Input {
    pub path: Option<PathBuf>,
    pub bytes: Vec<u8>,
}

impl Input {
    /// The file path, or `-` for stdin
    pub fn name(&self) -> String {
        self.path
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

impl InputArgs {
    pub fn read(&self) -> anyhow::Result<Vec<Input>> {
        if self.input.is_empty() {
            let bytes = read_to_end(None).context("Unable to read from stdin")?;
            return Ok(vec![Input { path: None, bytes }]);
        }
        self.input
            .iter()
            .map(|path| {
                let bytes = read_to_end(Some(path))?;
                Ok::<_, anyhow::Error>(Input {
                    path: Some(path.clone()),
                    bytes,
                })
            })
            .collect()
    }

    /// The format given on the command line or the sniffed format of `bytes`
    pub fn format_of(&self, bytes: &[u8]) -> PhenopacketFormat {
        self.format.unwrap_or_else(|| sniff(bytes))
    }
}

/// Writes `message` to `path` or, if `path` is `None`, to stdout
pub fn write_message<T: Message + Serialize>(
    message: &T,
    format: PhenopacketFormat,
    path: Option<&Path>,
) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Unable to create {}", path.display()))?;
            print_message(message, format, BufWriter::new(file))
                .with_context(|| format!("Unable to write {}", path.display()))?;
        }
        None => print_message(message, format, std::io::stdout().lock())
            .context("Unable to write to stdout")?,
    }
    Ok(())
}
