// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `pydots`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pydots",
    version,
    about = "Load and validate the tasks declared in pydots.conf.",
    long_about = None
)]
pub struct CliArgs {
    /// Directory containing `pydots.conf`.
    ///
    /// Default: the current working directory.
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub dir: PathBuf,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PYDOTS_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print tool and runtime information after validating.
    #[arg(long)]
    pub info: bool,

    /// Output format for `--info`.
    #[arg(long, value_enum, value_name = "FORMAT", default_value = "text")]
    pub info_format: InfoFormat,

    /// Exit with status 2 if any task fails validation.
    #[arg(long)]
    pub strict: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum InfoFormat {
    /// Human-readable report.
    Text,
    /// The snapshot serialized as YAML.
    Yaml,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
