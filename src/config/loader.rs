// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error};

use crate::config::document::Config;
use crate::config::model::Task;
use crate::config::validate::ValidationReport;
use crate::errors::{PydotsError, Result};
use crate::info::Info;
use crate::logging::Logger;

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "pydots.conf";

/// Where a [`Loader`] is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderState {
    Unloaded,
    Loaded,
    Validated,
}

/// Reads `pydots.conf`, builds one [`Task`] per entry under `tasks` and
/// validates them.
///
/// Structural problems (no file, no `tasks` mapping) are returned as errors.
/// Problems inside individual tasks are only logged and counted, so a single
/// pass reports every broken task.
#[derive(Debug)]
pub struct Loader {
    logger: Logger,
    working_dir: Option<PathBuf>,
    config: Option<Config>,
    tasks: Vec<Task>,
    state: LoaderState,
}

impl Loader {
    pub fn new(logger: Logger) -> Self {
        Self {
            logger,
            working_dir: None,
            config: None,
            tasks: Vec::new(),
            state: LoaderState::Unloaded,
        }
    }

    /// Read and parse `pydots.conf` from `working_dir`.
    ///
    /// Replaces any previously loaded configuration. The task list from an
    /// earlier validation pass is left alone until the next [`validate`].
    ///
    /// [`validate`]: Loader::validate
    pub fn load(&mut self, working_dir: impl AsRef<Path>) -> Result<()> {
        let logger = self.logger.clone();
        logger.in_scope(|| self.load_inner(working_dir.as_ref()))
    }

    fn load_inner(&mut self, working_dir: &Path) -> Result<()> {
        let path = config_path(working_dir);
        if !path.is_file() {
            error!(
                "could not locate file {:?} in directory: {}",
                CONFIG_FILE_NAME,
                working_dir.display()
            );
            return Err(PydotsError::MissingConfiguration { path: Some(path) });
        }

        let contents = fs::read_to_string(&path).inspect_err(|e| {
            error!("reading {}: {e}", path.display());
        })?;
        let config = Config::parse(&contents).inspect_err(|e| {
            error!("parsing {}: {e}", path.display());
        })?;

        if config.is_none() {
            debug!("{} is empty", path.display());
        }
        debug!("loaded configuration from {}", path.display());

        self.config = config;
        self.working_dir = Some(working_dir.to_path_buf());
        self.state = LoaderState::Loaded;
        Ok(())
    }

    /// Build and validate the tasks of `config`, or of the loaded
    /// configuration when `config` is `None`.
    ///
    /// Each pass starts from an empty task list, so calling this twice does
    /// not duplicate tasks.
    pub fn validate(&mut self, config: Option<&Config>) -> Result<ValidationReport> {
        let logger = self.logger.clone();
        logger.in_scope(|| self.validate_inner(config))
    }

    fn validate_inner(&mut self, config: Option<&Config>) -> Result<ValidationReport> {
        // The task list is rebuilt from scratch; until that succeeds the
        // loader is no longer `Validated`.
        self.tasks.clear();
        self.state = if self.working_dir.is_some() {
            LoaderState::Loaded
        } else {
            LoaderState::Unloaded
        };

        let Some(config) = config.or(self.config.as_ref()) else {
            error!("config has not been loaded");
            return Err(PydotsError::MissingConfiguration { path: None });
        };

        let entries = config.tasks().inspect_err(|e| error!("{e}"))?;
        let tasks: Vec<Task> = entries
            .iter()
            .map(|(key, definition)| Task::from_entry(key, definition))
            .collect();
        self.tasks = tasks;

        let mut report = ValidationReport::default();
        for task in &self.tasks {
            let errors = task.validate();
            if errors > 0 {
                error!("{task} has {errors} validation error(s)");
            }
            report.record(task, errors);
        }

        debug!(
            "validated {} task(s), {} with errors",
            report.len(),
            report.failed().count()
        );
        self.state = LoaderState::Validated;
        Ok(report)
    }

    /// Load from `working_dir`, then validate what was loaded.
    pub fn run(&mut self, working_dir: impl AsRef<Path>) -> Result<ValidationReport> {
        self.load(working_dir)?;
        self.validate(None)
    }

    /// Snapshot of identity and runtime state for reporting.
    pub fn info(&self) -> Info {
        let cwd = self
            .working_dir
            .clone()
            .or_else(|| std::env::current_dir().ok());
        Info::new(cwd, self.config.clone(), self.tasks.clone())
    }

    pub fn config(&self) -> Option<&Config> {
        self.config.as_ref()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    pub fn state(&self) -> LoaderState {
        self.state
    }
}

/// Path of the configuration file inside `working_dir`.
pub fn config_path(working_dir: impl AsRef<Path>) -> PathBuf {
    working_dir.as_ref().join(CONFIG_FILE_NAME)
}
