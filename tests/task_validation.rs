mod common;
use crate::common::init_tracing;

use pydots::config::{Task, TaskDefinition};
use pydots_test_utils::builders::TaskBuilder;
use serde_yaml::Value;

fn task(name: Option<&str>, definition: Value) -> Task {
    let key = name.map(Value::from).unwrap_or(Value::Null);
    Task::from_entry(&key, &definition)
}

#[test]
fn valid_task_has_no_errors() {
    init_tracing();

    let t = task(
        Some("build"),
        TaskBuilder::new().variation("default").run("make").build(),
    );

    assert_eq!(t.name(), Some("build"));
    assert_eq!(t.variation(), Some("default"));
    assert_eq!(t.run(), Some(&Value::from("make")));
    assert!(t.scripts().is_none());
    assert!(t.files().is_none());
    assert_eq!(t.validate(), 0);
}

#[test]
fn missing_name_adds_exactly_one_error() {
    init_tracing();

    let definition = TaskBuilder::new().variation("default").build();
    let named = task(Some("vim"), definition.clone());
    let nameless = task(None, definition);

    assert_eq!(named.validate(), 0);
    assert_eq!(nameless.validate(), 1);
}

#[test]
fn empty_name_counts_as_missing() {
    init_tracing();

    let t = task(Some(""), TaskBuilder::new().variation("default").build());

    assert_eq!(t.name(), None);
    assert_eq!(t.validate(), 1);
}

#[test]
fn missing_variation_counts_twice() {
    init_tracing();

    let t = task(Some("deploy"), TaskBuilder::new().run("./deploy.sh").build());

    assert!(t.raw_variation().is_none());
    assert_eq!(t.validate(), 2);
}

#[test]
fn non_string_variation_counts_once() {
    init_tracing();

    let t = task(
        Some("deploy"),
        TaskBuilder::new().raw_variation(Value::from(42)).build(),
    );

    assert_eq!(t.raw_variation(), Some(&Value::from(42)));
    assert_eq!(t.variation(), None);
    assert_eq!(t.validate(), 1);
}

#[test]
fn nameless_task_without_variation_counts_three() {
    init_tracing();

    let t = task(None, TaskBuilder::new().build());
    assert_eq!(t.validate(), 3);
}

#[test]
fn null_fields_are_treated_as_absent() {
    init_tracing();

    let t = task(
        Some("tmux"),
        TaskBuilder::new()
            .set("variation", Value::Null)
            .set("run", Value::Null)
            .set("files", Value::Null)
            .build(),
    );

    assert_eq!(t.definition(), &TaskDefinition::default());
    assert!(!t.has_run());
    assert!(!t.has_files());
    assert_eq!(t.validate(), 2);
}

#[test]
fn non_mapping_definition_builds_an_empty_task() {
    init_tracing();

    for definition in [
        Value::from("just a string"),
        Value::Null,
        Value::Sequence(vec![Value::from("a")]),
    ] {
        let t = task(Some("odd"), definition);
        assert_eq!(t.definition(), &TaskDefinition::default());
        assert_eq!(t.validate(), 2);
    }
}

#[test]
fn unknown_keys_are_ignored() {
    init_tracing();

    let t = task(
        Some("git"),
        TaskBuilder::new()
            .variation("default")
            .set("requires", Value::from("zsh"))
            .build(),
    );

    assert_eq!(t.validate(), 0);
}

#[test]
fn scalar_keys_become_names() {
    init_tracing();

    let definition = TaskBuilder::new().variation("x").build();
    let numeric = Task::from_entry(&Value::from(7), &definition);
    let boolean = Task::from_entry(&Value::from(true), &definition);

    assert_eq!(numeric.name(), Some("7"));
    assert_eq!(boolean.name(), Some("true"));
}

#[test]
fn display_shows_name_variation_and_presence_flags() {
    let t = task(
        Some("build"),
        TaskBuilder::new()
            .variation("default")
            .run("make")
            .file(".vimrc")
            .build(),
    );

    assert_eq!(
        t.to_string(),
        r#"<Task name="build", variation="default", run=true, scripts=false, files=true>"#
    );
}

#[test]
fn display_marks_unset_fields() {
    let t = task(None, TaskBuilder::new().script("setup.sh").build());

    assert_eq!(
        t.to_string(),
        r#"<Task name="<unset>", variation="<unset>", run=false, scripts=true, files=false>"#
    );
}

#[test]
fn scripts_and_files_keep_their_contents() {
    let t = task(
        Some("zsh"),
        TaskBuilder::new()
            .variation("default")
            .script("a.sh")
            .script("b.sh")
            .file(".zshrc")
            .build(),
    );

    let scripts = t.scripts().and_then(Value::as_sequence).unwrap();
    assert_eq!(scripts, &vec![Value::from("a.sh"), Value::from("b.sh")]);
    assert_eq!(t.files().and_then(Value::as_sequence).map(Vec::len), Some(1));
}
