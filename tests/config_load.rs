//! Integration tests for repository configuration discovery and the
//! suppression flow an analysis run drives: load once, then query path
//! configs per analyzed file and union their ignore decisions.

use std::fs;
use std::path::Path;

use tempfile::tempdir;

use actionlint_config::{load_repo_config, write_default_config_file, Config};

fn write_repo_config(root: &Path, name: &str, content: &str) {
    let github = root.join(".github");
    fs::create_dir_all(&github).unwrap();
    fs::write(github.join(name), content).unwrap();
}

/// An error is suppressed when ANY matching path config ignores it.
fn suppressed(config: &Config, path: &str, message: &str) -> bool {
    config
        .path_configs_for(Path::new(path))
        .iter()
        .any(|c| c.ignores(message))
}

#[test]
fn load_and_suppress_end_to_end() {
    let dir = tempdir().unwrap();
    write_repo_config(
        dir.path(),
        "actionlint.yaml",
        r#"self-hosted-runner:
  labels:
    - gpu-large
config-variables:
  - DEPLOY_ENV
paths:
  "src/**/*.yml":
    ignore:
      - "^unused variable"
"#,
    );

    let config = load_repo_config(dir.path()).unwrap().unwrap();
    assert_eq!(config.runner_labels, vec!["gpu-large"]);
    assert_eq!(
        config.config_variables,
        Some(vec!["DEPLOY_ENV".to_string()])
    );

    assert!(suppressed(&config, "src/a/b.yml", "unused variable x"));
    assert!(!suppressed(&config, "src/a/b.yml", "other issue"));
    // Unmatched paths are never suppressed, regardless of message.
    assert!(!suppressed(&config, "other/x.yml", "unused variable x"));
}

#[test]
fn overlapping_patterns_union_their_decisions() {
    let dir = tempdir().unwrap();
    write_repo_config(
        dir.path(),
        "actionlint.yaml",
        r#"paths:
  "**/*.yml":
    ignore:
      - "shellcheck"
  ".github/workflows/**":
    ignore:
      - "label .+ is unknown"
"#,
    );

    let config = load_repo_config(dir.path()).unwrap().unwrap();

    let workflow = ".github/workflows/ci.yml";
    assert_eq!(config.path_configs_for(Path::new(workflow)).len(), 2);
    assert!(suppressed(&config, workflow, "shellcheck reported issue SC2086"));
    assert!(suppressed(&config, workflow, "label \"gpu\" is unknown"));
    assert!(!suppressed(&config, workflow, "something else entirely"));

    // Only the first pattern covers files outside .github/workflows.
    assert_eq!(config.path_configs_for(Path::new("docs/x.yml")).len(), 1);
    assert!(!suppressed(&config, "docs/x.yml", "label \"gpu\" is unknown"));
}

#[test]
fn discovery_prefers_yaml_and_falls_back_to_yml() {
    let dir = tempdir().unwrap();
    write_repo_config(
        dir.path(),
        "actionlint.yml",
        "self-hosted-runner:\n  labels: [yml-only]\n",
    );

    let config = load_repo_config(dir.path()).unwrap().unwrap();
    assert_eq!(config.runner_labels, vec!["yml-only"]);

    write_repo_config(
        dir.path(),
        "actionlint.yaml",
        "self-hosted-runner:\n  labels: [yaml-wins]\n",
    );

    let config = load_repo_config(dir.path()).unwrap().unwrap();
    assert_eq!(config.runner_labels, vec!["yaml-wins"]);
}

#[test]
fn discovery_without_config_yields_none() {
    let dir = tempdir().unwrap();
    assert!(load_repo_config(dir.path()).unwrap().is_none());
}

#[test]
fn invalid_config_fails_before_any_analysis_could_run() {
    let dir = tempdir().unwrap();
    write_repo_config(
        dir.path(),
        "actionlint.yaml",
        "paths:\n  \"src/**\":\n    ignore: [\"(unclosed\"]\n",
    );

    let err = load_repo_config(dir.path()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("could not parse config file"));
    assert!(msg.contains("actionlint.yaml"));
    assert!(msg.contains("invalid regular expression \"(unclosed\""));
}

#[test]
fn default_template_round_trips_to_default_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".github").join("actionlint.yaml");
    fs::create_dir_all(path.parent().unwrap()).unwrap();

    write_default_config_file(&path).unwrap();

    let config = load_repo_config(dir.path()).unwrap().unwrap();
    assert!(config.runner_labels.is_empty());
    assert!(config.config_variables.is_none());
    assert!(config.paths.is_empty());
}

#[test]
fn config_is_shared_read_only_across_workers() {
    let dir = tempdir().unwrap();
    write_repo_config(
        dir.path(),
        "actionlint.yaml",
        "paths:\n  \"src/**/*.yml\":\n    ignore: [\"^unused variable\"]\n",
    );

    let config = load_repo_config(dir.path()).unwrap().unwrap();

    // One worker per analyzed file, all borrowing the same Config.
    std::thread::scope(|scope| {
        for i in 0..8 {
            let config = &config;
            scope.spawn(move || {
                let path = format!("src/dir{i}/file.yml");
                assert!(suppressed(config, &path, "unused variable x"));
                assert!(!suppressed(config, &path, "other issue"));
            });
        }
    });
}
