mod common;
use crate::common::{BUILD_CONFIG, DEPLOY_CONFIG, config_dir};

use std::error::Error;

use pydots::cli::LogLevel;
use pydots::config::Loader;
use pydots::logging::{Logger, resolve_level};
use pydots_test_utils::capture::CapturedLogs;
use tracing::Level;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn loader_logs_go_to_the_injected_logger() -> TestResult {
    let dir = config_dir(DEPLOY_CONFIG)?;
    let logs = CapturedLogs::new();

    let mut loader = Loader::new(logs.logger(Level::DEBUG));
    loader.run(dir.path())?;

    let contents = logs.contents();
    assert!(contents.contains(r#"created task <Task name="deploy""#), "{contents}");
    assert!(contents.contains(r#""variation" must be specified"#), "{contents}");
    assert!(contents.contains("2 validation errors occurred"), "{contents}");

    // two failed checks plus the per-task summary
    assert_eq!(logs.count_level(Level::ERROR), 3, "{contents}");

    Ok(())
}

#[test]
fn valid_config_logs_no_errors() -> TestResult {
    let dir = config_dir(BUILD_CONFIG)?;
    let logs = CapturedLogs::new();

    Loader::new(logs.logger(Level::DEBUG)).run(dir.path())?;

    assert_eq!(logs.count_level(Level::ERROR), 0);
    assert!(logs.count_level(Level::DEBUG) > 0);

    Ok(())
}

#[test]
fn fatal_errors_are_logged_before_being_returned() -> TestResult {
    let dir = tempfile::tempdir()?;
    let logs = CapturedLogs::new();

    let result = Loader::new(logs.logger(Level::DEBUG)).load(dir.path());

    assert!(result.is_err());
    assert_eq!(logs.count_level(Level::ERROR), 1);
    assert!(logs.contents().contains("could not locate file"));

    Ok(())
}

#[test]
fn missing_tasks_key_is_logged() -> TestResult {
    let dir = config_dir("other: 1\n")?;
    let logs = CapturedLogs::new();

    let result = Loader::new(logs.logger(Level::DEBUG)).run(dir.path());

    assert!(result.is_err());
    assert!(logs.contents().contains(r#""tasks" dictionary not defined"#));

    Ok(())
}

#[test]
fn empty_file_is_reported_at_debug_only() -> TestResult {
    let dir = config_dir("\n")?;
    let logs = CapturedLogs::new();

    Loader::new(logs.logger(Level::TRACE)).load(dir.path())?;

    assert!(logs.contents().contains("is empty"));
    assert_eq!(logs.count_level(Level::WARN), 0);
    assert_eq!(logs.count_level(Level::ERROR), 0);
    assert_eq!(logs.count_level(Level::INFO), 0);

    Ok(())
}

#[test]
fn level_filter_drops_debug_lines() -> TestResult {
    let dir = config_dir(DEPLOY_CONFIG)?;
    let logs = CapturedLogs::new();

    Loader::new(logs.logger(Level::ERROR)).run(dir.path())?;

    assert_eq!(logs.count_level(Level::DEBUG), 0);
    assert!(!logs.contents().contains("created task"));
    assert_eq!(logs.count_level(Level::ERROR), 3);

    Ok(())
}

#[test]
fn lines_start_with_a_timestamp() -> TestResult {
    let dir = config_dir(BUILD_CONFIG)?;
    let logs = CapturedLogs::new();

    Loader::new(logs.logger(Level::DEBUG)).run(dir.path())?;

    let lines = logs.lines();
    assert!(!lines.is_empty());
    for line in lines {
        assert!(line.starts_with(|c: char| c.is_ascii_digit()), "{line}");
    }

    Ok(())
}

#[test]
fn separate_loaders_do_not_share_output() -> TestResult {
    let build_dir = config_dir(BUILD_CONFIG)?;
    let deploy_dir = config_dir(DEPLOY_CONFIG)?;
    let build_logs = CapturedLogs::new();
    let deploy_logs = CapturedLogs::new();

    Loader::new(build_logs.logger(Level::DEBUG)).run(build_dir.path())?;
    Loader::new(deploy_logs.logger(Level::DEBUG)).run(deploy_dir.path())?;

    assert!(!build_logs.contents().contains("deploy"));
    assert!(!deploy_logs.contents().contains(r#"name="build""#));

    Ok(())
}

#[test]
fn disabled_logger_still_validates() -> TestResult {
    let dir = config_dir(DEPLOY_CONFIG)?;

    let report = Loader::new(Logger::disabled()).run(dir.path())?;

    assert_eq!(report.total_errors(), 2);

    Ok(())
}

#[test]
fn cli_flag_beats_environment() {
    let level = resolve_level(Some(LogLevel::Warn), Some("trace".to_string()));
    assert_eq!(level, Level::WARN);
}

#[test]
fn environment_is_used_without_flag() {
    assert_eq!(resolve_level(None, Some("warning".to_string())), Level::WARN);
    assert_eq!(resolve_level(None, Some(" INFO ".to_string())), Level::INFO);
}

#[test]
fn default_level_is_debug() {
    assert_eq!(resolve_level(None, None), Level::DEBUG);
    assert_eq!(resolve_level(None, Some("loud".to_string())), Level::DEBUG);
}
