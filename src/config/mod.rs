// src/config/mod.rs

//! Configuration loading and validation for pydots.
//!
//! Responsibilities:
//! - Hold the parsed YAML document (`document.rs`).
//! - Define the task record (`model.rs`).
//! - Load `pydots.conf` from disk and drive validation (`loader.rs`).
//! - Per-task field checks and the validation report (`validate.rs`).

pub mod document;
pub mod loader;
pub mod model;
pub mod validate;

pub use document::Config;
pub use loader::{CONFIG_FILE_NAME, Loader, LoaderState, config_path};
pub use model::{Task, TaskDefinition};
pub use validate::{TaskResult, ValidationReport};
