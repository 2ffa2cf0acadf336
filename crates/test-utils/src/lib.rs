pub mod builders;
pub mod capture;

use std::path::Path;
use std::sync::Once;

use tempfile::TempDir;
use tracing_subscriber::{EnvFilter, fmt};

use pydots::config::CONFIG_FILE_NAME;

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Only affects code that logs outside a [`pydots::logging::Logger`] scope,
/// e.g. `Task::validate` called directly from a test.
///
/// Enable levels with e.g.:
/// `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // print only for failing tests unless --nocapture
            .with_target(true)
            .init();
    });
}

/// A fresh temporary directory holding `pydots.conf` with `contents`.
pub fn config_dir(contents: &str) -> anyhow::Result<TempDir> {
    let dir = tempfile::tempdir()?;
    write_config(dir.path(), contents)?;
    Ok(dir)
}

/// Write (or overwrite) `pydots.conf` inside `dir`.
pub fn write_config(dir: &Path, contents: &str) -> anyhow::Result<()> {
    std::fs::write(dir.join(CONFIG_FILE_NAME), contents)?;
    Ok(())
}
