// src/logging.rs

//! Logging for `pydots` using `tracing` + `tracing-subscriber`.
//!
//! Nothing here installs a global subscriber. A [`Logger`] is built once by
//! the caller and handed to the [`Loader`](crate::config::Loader), which runs
//! each of its operations inside [`Logger::in_scope`].
//!
//! Priority for determining the log level on the command line:
//! 1. `--log-level` CLI flag (if provided)
//! 2. `PYDOTS_LOG` environment variable (e.g. "info", "debug")
//! 3. default to `debug`
//!
//! Logs are sent to STDERR so that stdout stays free for the info report.

use std::fmt;

use tracing::{Dispatch, Level};
use tracing_subscriber::fmt::MakeWriter;

use crate::cli::LogLevel;

/// Environment variable consulted when no `--log-level` flag is given.
pub const LOG_ENV_VAR: &str = "PYDOTS_LOG";

/// A logging capability scoped to whoever holds it.
#[derive(Clone)]
pub struct Logger {
    dispatch: Dispatch,
}

impl Logger {
    /// Timestamped, leveled lines on stderr.
    pub fn stderr(level: Level) -> Self {
        Self::with_writer(level, std::io::stderr)
    }

    /// Same line format as [`Logger::stderr`], but written to `writer`.
    pub fn with_writer<W>(level: Level, writer: W) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_ansi(false)
            .with_writer(writer)
            .finish();

        Self {
            dispatch: Dispatch::new(subscriber),
        }
    }

    pub fn from_dispatch(dispatch: Dispatch) -> Self {
        Self { dispatch }
    }

    /// Drops every event.
    pub fn disabled() -> Self {
        Self {
            dispatch: Dispatch::none(),
        }
    }

    /// Build the logger for a CLI invocation, honouring [`LOG_ENV_VAR`].
    pub fn from_cli(cli_level: Option<LogLevel>) -> Self {
        Self::stderr(resolve_level(cli_level, std::env::var(LOG_ENV_VAR).ok()))
    }

    /// Run `f` with this logger as the current default dispatcher.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").finish_non_exhaustive()
    }
}

/// Flag beats environment; an unparsable environment value is ignored.
pub fn resolve_level(cli_level: Option<LogLevel>, env_value: Option<String>) -> Level {
    match cli_level {
        Some(lvl) => level_from_log_level(lvl),
        None => env_value
            .and_then(|s| parse_level_str(&s))
            .unwrap_or(Level::DEBUG),
    }
}

fn level_from_log_level(lvl: LogLevel) -> Level {
    match lvl {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}

fn parse_level_str(s: &str) -> Option<Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" | "warning" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}
