use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cli;

/// Build, convert and validate GA4GH phenopackets
#[derive(Parser, Debug)]
#[command(name = "pxf", version, about)]
struct Args {
    /// Increase the log level, can be repeated (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert v1 phenopackets, families or cohorts to v2
    Convert(cli::convert::ConvertArgs),
    /// Validate phenopackets, families or cohorts
    Validate(cli::validate::ValidateArgs),
    /// Write the built-in example phenopackets
    Examples(cli::examples::ExamplesArgs),
}

/// Logs go to stderr, `RUST_LOG` takes precedence over `-v`
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_tracing(args.verbose);

    let result = match &args.command {
        Command::Convert(convert) => cli::convert::run(convert),
        Command::Validate(validate) => cli::validate::run(validate),
        Command::Examples(examples) => cli::examples::run(examples),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
