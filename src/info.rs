// src/info.rs

//! Tool identity plus a snapshot of loader state, for display.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::config::{Config, Task};
use crate::errors::Result;

const WIDTH: usize = 80;

/// Static identity of the tool, taken from the package metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolIdentity {
    pub name: &'static str,
    pub author: &'static str,
    pub email: &'static str,
    pub version: &'static str,
}

impl ToolIdentity {
    pub fn current() -> Self {
        let (author, email) = split_author(env!("CARGO_PKG_AUTHORS"));
        Self {
            name: env!("CARGO_PKG_NAME"),
            author,
            email,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// `"Name <mail>"` → `("Name", "mail")`. Only the first author is used.
fn split_author(authors: &'static str) -> (&'static str, &'static str) {
    let first = authors.split(':').next().unwrap_or_default().trim();
    match first.split_once('<') {
        Some((name, rest)) => (name.trim(), rest.trim_end_matches('>').trim()),
        None => (first, ""),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuntimeInfo {
    pub cwd: Option<PathBuf>,
    pub config: Option<Config>,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Info {
    pub tool: ToolIdentity,
    pub runtime: RuntimeInfo,
}

impl Info {
    pub fn new(cwd: Option<PathBuf>, config: Option<Config>, tasks: Vec<Task>) -> Self {
        Self {
            tool: ToolIdentity::current(),
            runtime: RuntimeInfo { cwd, config, tasks },
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// The terminal report.
impl fmt::Display for Info {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = "=".repeat(WIDTH);
        let sep2 = "-".repeat(WIDTH);

        writeln!(f, "PyDots")?;
        writeln!(f, "{sep}")?;

        writeln!(f, "{:>10}", "tool")?;
        writeln!(f, "{sep2}")?;
        row(f, "name", self.tool.name)?;
        row(f, "author", self.tool.author)?;
        row(f, "email", self.tool.email)?;
        row(f, "version", self.tool.version)?;
        writeln!(f, "{sep2}")?;

        writeln!(f, "{:>10}", "runtime")?;
        writeln!(f, "{sep2}")?;
        match &self.runtime.cwd {
            Some(cwd) => row(f, "cwd", cwd.display())?,
            None => row(f, "cwd", "<unknown>")?,
        }
        match &self.runtime.config {
            Some(config) => {
                let yaml = serde_yaml::to_string(config).map_err(|_| fmt::Error)?;
                writeln!(f, "{:>10}: ```yaml\n{}```", "config", yaml)?;
            }
            None => row(f, "config", "<none>")?,
        }
        let tasks: Vec<String> = self.runtime.tasks.iter().map(Task::to_string).collect();
        row(f, "tasks", format_args!("[{}]", tasks.join(", ")))?;
        writeln!(f, "{sep2}")?;

        write!(f, "{sep}")
    }
}

fn row(f: &mut fmt::Formatter<'_>, key: &str, value: impl fmt::Display) -> fmt::Result {
    writeln!(f, "{key:>10}: {value}")
}
