use assert_cmd::Command;
use predicates::prelude::*;

fn pipeline_lint() -> Command {
    assert_cmd::cargo::cargo_bin_cmd!("pipeline-lint")
}

#[test]
fn lint_clean_file_passes() {
    pipeline_lint()
        .args(["lint", "tests/fixtures/pipelines/simple.yml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS"));
}

#[test]
fn lint_violation_fails_with_diagnostic() {
    pipeline_lint()
        .args(["lint", "tests/fixtures/pipelines/pipeline_privileged.yml"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "linter: untrusted repositories cannot enable privileged mode",
        ));
}

#[test]
fn trusted_flag_lifts_privilege_rules() {
    pipeline_lint()
        .args([
            "lint",
            "tests/fixtures/pipelines/pipeline_privileged.yml",
            "--trusted",
        ])
        .assert()
        .success();
}

#[test]
fn trusted_flag_keeps_structural_rules() {
    pipeline_lint()
        .args([
            "lint",
            "tests/fixtures/pipelines/duplicate_step.yml",
            "--trusted",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("linter: duplicate step names"));
}

#[test]
fn lint_directory_json_format() {
    pipeline_lint()
        .args(["lint", "tests/fixtures/repo", "--format", "json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"passed\": false"))
        .stdout(predicate::str::contains("trust/privileged"));
}

#[test]
fn lint_directory_sarif_format() {
    pipeline_lint()
        .args(["lint", "tests/fixtures/repo", "--format", "sarif"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"version\": \"2.1.0\""));
}

#[test]
fn lint_malformed_file_fails() {
    pipeline_lint()
        .args(["lint", "tests/fixtures/pipelines/malformed.yml"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("yaml/parse-error"));
}

#[test]
fn lint_nonexistent_path_exits_2() {
    pipeline_lint()
        .args(["lint", "tests/fixtures/does-not-exist.yml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("path does not exist"));
}

#[test]
fn lint_directory_without_pipelines_exits_2() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("notes.txt"), "nothing to lint").unwrap();

    pipeline_lint()
        .args(["lint", dir.path().to_str().unwrap()])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no pipeline files found"));
}

#[test]
fn directory_with_only_excluded_pipelines_exits_2() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("target")).unwrap();
    std::fs::write(
        dir.path().join("target/build.yml"),
        "kind: pipeline\nsteps:\n- name: build\n  image: golang\n",
    )
    .unwrap();

    pipeline_lint()
        .args(["lint", dir.path().to_str().unwrap()])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no pipeline files found"));
}

#[test]
fn merge_keys_pipeline_passes() {
    pipeline_lint()
        .args(["lint", "tests/fixtures/pipelines/merge_keys.yml"])
        .assert()
        .success();
}

#[test]
fn missing_config_file_exits_2() {
    pipeline_lint()
        .args([
            "lint",
            "tests/fixtures/pipelines/simple.yml",
            "--config",
            "does-not-exist.toml",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn config_file_can_enable_trust() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("pipeline-lint.toml");
    std::fs::write(&config, "[trust]\nenabled = true\n").unwrap();

    pipeline_lint()
        .args([
            "lint",
            "tests/fixtures/pipelines/volume_host_path.yml",
            "--config",
            config.to_str().unwrap(),
        ])
        .assert()
        .success();
}

#[test]
fn list_rules_shows_rules() {
    pipeline_lint()
        .args(["list-rules"])
        .assert()
        .success()
        .stdout(predicate::str::contains("platform/unsupported-os"))
        .stdout(predicate::str::contains("step/duplicate-name"))
        .stdout(predicate::str::contains("trust/network-mode"));
}

#[test]
fn explain_known_rule() {
    pipeline_lint()
        .args(["explain", "trust/host-port"])
        .assert()
        .success()
        .stdout(predicate::str::contains("trust/host-port"))
        .stdout(predicate::str::contains("untrusted repositories"))
        .stdout(predicate::str::contains("Remediation"));
}

#[test]
fn explain_unknown_rule_exits_2() {
    pipeline_lint()
        .args(["explain", "nonexistent/rule"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown rule"));
}

#[test]
fn output_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let output_file = dir.path().join("report.json");

    pipeline_lint()
        .args([
            "lint",
            "tests/fixtures/repo",
            "--format",
            "json",
            "--output",
            output_file.to_str().unwrap(),
        ])
        .assert()
        .code(1);

    let content = std::fs::read_to_string(&output_file).unwrap();
    let parsed: serde_json::Value =
        serde_json::from_str(&content).expect("Output file should contain valid JSON");
    assert!(!parsed["passed"].as_bool().unwrap());
}
