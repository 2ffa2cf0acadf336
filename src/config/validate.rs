// src/config/validate.rs

use serde::Serialize;
use tracing::{debug, error};

use crate::config::model::Task;

impl Task {
    /// Check the required fields and return how many checks failed.
    ///
    /// Every check runs and logs its own error line, so one call reports all
    /// problems with the task. `0` means the task is valid. A missing
    /// variation fails both the presence and the type check and scores `2`.
    pub fn validate(&self) -> usize {
        debug!("validating task {self}");

        let mut count = 0;
        if self.name().is_none() {
            error!(r#"--> "name" must not be empty"#);
            count += 1;
        }
        if self.raw_variation().is_none() {
            error!(r#"--> "variation" must be specified"#);
            count += 1;
        }
        if self.variation().is_none() {
            error!(r#"--> "variation" should be of type "str""#);
            count += 1;
        }

        debug!("--> {count} validation errors occurred");
        count
    }
}

/// Outcome of validating a single task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskResult {
    pub name: Option<String>,
    pub errors: usize,
}

/// Per-task error counts from one validation pass, in task order.
///
/// The loader only records these; deciding whether a non-zero count should
/// fail the process is up to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    results: Vec<TaskResult>,
}

impl ValidationReport {
    pub(crate) fn record(&mut self, task: &Task, errors: usize) {
        self.results.push(TaskResult {
            name: task.name().map(str::to_string),
            errors,
        });
    }

    pub fn results(&self) -> &[TaskResult] {
        &self.results
    }

    /// Tasks with at least one failed check.
    pub fn failed(&self) -> impl Iterator<Item = &TaskResult> {
        self.results.iter().filter(|r| r.errors > 0)
    }

    pub fn total_errors(&self) -> usize {
        self.results.iter().map(|r| r.errors).sum()
    }

    pub fn is_valid(&self) -> bool {
        self.failed().next().is_none()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
