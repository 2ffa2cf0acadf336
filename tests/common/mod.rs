#![allow(dead_code)]

pub use pydots_test_utils::{config_dir, init_tracing, write_config};

/// `{tasks: {build: {variation: "default", run: "make"}}}`
pub const BUILD_CONFIG: &str = r#"
tasks:
  build:
    variation: default
    run: make
"#;

/// `{tasks: {deploy: {run: "./deploy.sh"}}}`
pub const DEPLOY_CONFIG: &str = r#"
tasks:
  deploy:
    run: ./deploy.sh
"#;
