// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod info;
pub mod logging;

use anyhow::{Context, Result};

use crate::cli::{CliArgs, InfoFormat};
use crate::config::{Loader, ValidationReport};
use crate::logging::Logger;

/// High-level entry point used by `main.rs`.
///
/// Loads `pydots.conf` from `args.dir`, validates every task and, with
/// `--info`, prints the report to stdout. The returned report is left for
/// the caller to turn into an exit status.
pub fn run(args: &CliArgs, logger: Logger) -> Result<ValidationReport> {
    let mut loader = Loader::new(logger);
    let report = loader
        .run(&args.dir)
        .with_context(|| format!("checking tasks in {}", args.dir.display()))?;

    if args.info {
        print_info(&loader, args.info_format)?;
    }

    Ok(report)
}

fn print_info(loader: &Loader, format: InfoFormat) -> Result<()> {
    let info = loader.info();
    match format {
        InfoFormat::Text => println!("{info}"),
        InfoFormat::Yaml => print!("{}", info.to_yaml()?),
    }
    Ok(())
}
