#![allow(dead_code)]

use serde_yaml::{Mapping, Value};

use pydots::config::Config;

/// Builder for a [`Config`] document, to avoid writing YAML in every test.
pub struct ConfigBuilder {
    root: Mapping,
    tasks: Option<Mapping>,
}

impl ConfigBuilder {
    /// A document with an empty `tasks` mapping.
    pub fn new() -> Self {
        Self {
            root: Mapping::new(),
            tasks: Some(Mapping::new()),
        }
    }

    /// A document with no `tasks` key at all.
    pub fn without_tasks() -> Self {
        Self {
            root: Mapping::new(),
            tasks: None,
        }
    }

    pub fn with_task(mut self, name: &str, task: Value) -> Self {
        self.tasks
            .get_or_insert_with(Mapping::new)
            .insert(Value::from(name), task);
        self
    }

    /// Add a task under an arbitrary key (e.g. `null`).
    pub fn with_task_key(mut self, key: Value, task: Value) -> Self {
        self.tasks.get_or_insert_with(Mapping::new).insert(key, task);
        self
    }

    /// Add an uninterpreted top-level key.
    pub fn with_key(mut self, key: &str, value: Value) -> Self {
        self.root.insert(Value::from(key), value);
        self
    }

    pub fn build(self) -> Config {
        let mut root = self.root;
        if let Some(tasks) = self.tasks {
            root.insert(Value::from("tasks"), Value::Mapping(tasks));
        }
        Config::from_value(Value::Mapping(root))
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one task definition value.
pub struct TaskBuilder {
    definition: Mapping,
}

impl TaskBuilder {
    pub fn new() -> Self {
        Self {
            definition: Mapping::new(),
        }
    }

    pub fn variation(self, variation: &str) -> Self {
        self.set("variation", Value::from(variation))
    }

    /// Set `variation` to something that is not a string.
    pub fn raw_variation(self, variation: Value) -> Self {
        self.set("variation", variation)
    }

    pub fn run(self, cmd: &str) -> Self {
        self.set("run", Value::from(cmd))
    }

    pub fn script(mut self, script: &str) -> Self {
        push(&mut self.definition, "scripts", script);
        self
    }

    pub fn file(mut self, file: &str) -> Self {
        push(&mut self.definition, "files", file);
        self
    }

    pub fn set(mut self, key: &str, value: Value) -> Self {
        self.definition.insert(Value::from(key), value);
        self
    }

    pub fn build(self) -> Value {
        Value::Mapping(self.definition)
    }
}

impl Default for TaskBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn push(definition: &mut Mapping, key: &str, item: &str) {
    let key = Value::from(key);
    if !definition.contains_key(&key) {
        definition.insert(key.clone(), Value::Sequence(Vec::new()));
    }
    if let Some(Value::Sequence(items)) = definition.get_mut(&key) {
        items.push(Value::from(item));
    }
}
