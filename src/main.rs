// src/main.rs

use pydots::{cli, logging::Logger, run};

/// Exit status when `--strict` is set and a task failed validation.
const EXIT_INVALID_TASKS: i32 = 2;

fn main() {
    match run_main() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("pydots error: {err:?}");
            std::process::exit(1);
        }
    }
}

fn run_main() -> anyhow::Result<i32> {
    let args = cli::parse();
    let logger = Logger::from_cli(args.log_level);
    let report = run(&args, logger)?;

    if args.strict && !report.is_valid() {
        return Ok(EXIT_INVALID_TASKS);
    }
    Ok(0)
}
