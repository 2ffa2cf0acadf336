// src/errors.rs

//! Crate-wide error type and `Result` alias.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PydotsError {
    /// No configuration to work with. `path` is the file that was looked
    /// for; `None` means validation ran before anything was loaded.
    #[error("{}", missing_configuration(.path.as_deref()))]
    MissingConfiguration { path: Option<PathBuf> },

    #[error("validation failed: {0}")]
    ValidationFailure(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl PydotsError {
    pub fn is_missing_configuration(&self) -> bool {
        matches!(self, PydotsError::MissingConfiguration { .. })
    }
}

fn missing_configuration(path: Option<&Path>) -> String {
    match path {
        Some(path) => format!("could not locate configuration file {path:?}"),
        None => "configuration has not been loaded".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, PydotsError>;
