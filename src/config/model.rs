// src/config/model.rs

use std::fmt;

use serde::Serialize;
use serde_yaml::Value;
use tracing::debug;

/// The fields read from one entry under `tasks:`.
///
/// ```yaml
/// tasks:
///   vim:
///     variation: default
///     run: ./install.sh
///     scripts: [bootstrap.sh]
///     files: [.vimrc]
/// ```
///
/// Every field is optional at this stage. Only `variation` is checked later,
/// by [`Task::validate`]; the other three are carried as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskDefinition {
    /// Task category/mode. Kept as a raw value so a non-string can be reported.
    pub variation: Option<Value>,

    /// Command to execute (string or structured).
    pub run: Option<Value>,

    /// Script references, normally a sequence.
    pub scripts: Option<Value>,

    /// File references, normally a sequence.
    pub files: Option<Value>,
}

impl TaskDefinition {
    /// Decode a definition with total lookups.
    ///
    /// Unknown keys are ignored, an explicit `null` counts as absent, and a
    /// value that is not a mapping yields an empty definition.
    pub fn decode(value: &Value) -> Self {
        Self {
            variation: field(value, "variation"),
            run: field(value, "run"),
            scripts: field(value, "scripts"),
            files: field(value, "files"),
        }
    }
}

fn field(value: &Value, key: &str) -> Option<Value> {
    value.get(key).filter(|v| !v.is_null()).cloned()
}

/// One configured task.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    name: Option<String>,
    #[serde(flatten)]
    definition: TaskDefinition,
}

impl Task {
    pub fn new(name: Option<String>, definition: TaskDefinition) -> Self {
        let task = Self { name, definition };
        debug!("created task {task}");
        task
    }

    /// Build a task from the key and value of a `tasks:` entry. Never fails.
    pub fn from_entry(key: &Value, definition: &Value) -> Self {
        Self::new(task_name(key), TaskDefinition::decode(definition))
    }

    /// The task name, or `None` when it is absent or empty.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    /// The variation, when it is present and a string.
    pub fn variation(&self) -> Option<&str> {
        self.definition.variation.as_ref().and_then(Value::as_str)
    }

    pub fn raw_variation(&self) -> Option<&Value> {
        self.definition.variation.as_ref()
    }

    pub fn run(&self) -> Option<&Value> {
        self.definition.run.as_ref()
    }

    pub fn scripts(&self) -> Option<&Value> {
        self.definition.scripts.as_ref()
    }

    pub fn files(&self) -> Option<&Value> {
        self.definition.files.as_ref()
    }

    pub fn has_run(&self) -> bool {
        self.definition.run.is_some()
    }

    pub fn has_scripts(&self) -> bool {
        self.definition.scripts.is_some()
    }

    pub fn has_files(&self) -> bool {
        self.definition.files.is_some()
    }

    pub fn definition(&self) -> &TaskDefinition {
        &self.definition
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let variation = match self.raw_variation() {
            Some(v) => inline(v),
            None => UNSET.to_string(),
        };
        write!(
            f,
            "<Task name=\"{}\", variation=\"{}\", run={}, scripts={}, files={}>",
            self.name().unwrap_or(UNSET),
            variation,
            self.has_run(),
            self.has_scripts(),
            self.has_files(),
        )
    }
}

const UNSET: &str = "<unset>";

/// Task names come from mapping keys. Scalars are stringified; `null` and
/// anything structured leave the task nameless.
pub fn task_name(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => task_name(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// Single-line rendering of a YAML value for log lines.
fn inline(value: &Value) -> String {
    match value {
        Value::Null => "~".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(items) => format!("[{} items]", items.len()),
        Value::Mapping(map) => format!("{{{} keys}}", map.len()),
        Value::Tagged(tagged) => format!("{} {}", tagged.tag, inline(&tagged.value)),
    }
}
