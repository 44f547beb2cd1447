//! Integration tests for the commit-guard CLI

use assert_cmd::Command;
use git2::Repository;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CONFIG: &str = r#"
[checks]
enabled = ["tabs", "blank_eof"]

[warnings]
enabled = []
"#;

/// A scratch git repository with a config file at `commit-guard.toml`.
fn scratch_repo(config: &str) -> (TempDir, Repository) {
    let dir = TempDir::new().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    fs::write(dir.path().join("commit-guard.toml"), config).unwrap();
    (dir, repo)
}

fn stage(repo: &Repository, file: &str) {
    let mut index = repo.index().unwrap();
    index.add_path(Path::new(file)).unwrap();
    index.write().unwrap();
}

/// The binary, run inside `dir` with no user-level config or env overrides.
fn guard(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("commit-guard").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("COMMIT_GUARD_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("commit-guard").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("checks and warnings"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("commit-guard").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("commit-guard"));
}

#[test]
fn test_detects_tabs_and_blank_eof() {
    let (dir, _repo) = scratch_repo(CONFIG);
    fs::write(dir.path().join("test.rb"), "\t\t Muahaha\n\n\n").unwrap();

    guard(dir.path())
        .args(["run", "test.rb"])
        .assert()
        .code(1)
        .stdout(
            "pre-commit: Stopping commit because of errors.\n\
             detected tab before initial space:\n\
             test.rb:1:\t\t Muahaha\n\
             \n\
             test.rb:2: new blank line at EOF.\n\
             \n\
             pre-commit: You can bypass this check using the no-verify option.\n\
             \n",
        );
}

#[test]
fn test_allows_commit_with_nothing_staged() {
    let (dir, _repo) = scratch_repo(CONFIG);

    guard(dir.path()).arg("run").assert().success().stdout("");
}

#[test]
fn test_uses_staged_files_by_default() {
    let (dir, repo) = scratch_repo(CONFIG);
    fs::write(dir.path().join("staged.rb"), "\tindented\n").unwrap();
    fs::write(dir.path().join("unstaged.rb"), "\tindented\n").unwrap();
    stage(&repo, "staged.rb");

    guard(dir.path())
        .arg("run")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("staged.rb:1:\tindented"))
        .stdout(predicate::str::contains("unstaged.rb").not());
}

#[test]
fn test_warnings_do_not_block() {
    let (dir, _repo) = scratch_repo(
        r#"
[checks]
enabled = ["tabs"]

[warnings]
enabled = ["whitespace"]
"#,
    );
    fs::write(dir.path().join("notes.md"), "trailing   \n").unwrap();

    guard(dir.path())
        .args(["run", "notes.md"])
        .assert()
        .success()
        .stdout(
            "pre-commit: Some warnings were raised. These will not stop commit:\n\
             notes.md:1: trailing whitespace.\n\
             \n",
        );
}

#[test]
fn test_removed_check_does_not_run() {
    let (dir, _repo) = scratch_repo(
        r#"
[checks]
enabled = ["tabs", "blank_eof"]
remove = ["tabs"]

[warnings]
enabled = []
"#,
    );
    fs::write(dir.path().join("test.rb"), "\tx\n").unwrap();

    guard(dir.path())
        .args(["run", "test.rb"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_unknown_validator_is_fatal() {
    let (dir, _repo) = scratch_repo(
        r#"
[checks]
enabled = ["tabs", "no_such_check"]
"#,
    );
    fs::write(dir.path().join("test.rb"), "\tx\n").unwrap();

    guard(dir.path())
        .args(["run", "test.rb"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("unknown validator 'no_such_check'"));
}

#[test]
fn test_command_validator_from_config() {
    let (dir, _repo) = scratch_repo(
        r#"
[checks]
enabled = ["no_todo"]

[warnings]
enabled = []

[validators.no_todo]
command = "! grep -n TODO"
description = "TODO markers found"
patterns = ["*.txt"]
"#,
    );
    fs::write(dir.path().join("a.txt"), "fine\nTODO: later\n").unwrap();
    fs::write(dir.path().join("b.md"), "TODO: ignored\n").unwrap();

    guard(dir.path())
        .args(["run", "a.txt", "b.md"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("TODO markers found:\n2:TODO: later\n"))
        .stdout(predicate::str::contains("ignored").not());
}

#[test]
fn test_custom_config_and_bypass_hint() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("hooks.yaml");
    fs::write(
        &config,
        "bypass_hint: \"use git commit -n\"\nchecks:\n  enabled: [merge_conflict]\nwarnings:\n  enabled: []\n",
    )
    .unwrap();
    fs::write(dir.path().join("c.txt"), "=======\n").unwrap();

    guard(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["run", "c.txt"])
        .assert()
        .code(1)
        .stdout(predicate::str::ends_with("c.txt:1:=======\n\nuse git commit -n\n\n"));
}

#[test]
fn test_list_resolved_validators() {
    let (dir, _repo) = scratch_repo(
        r#"
[checks]
enabled = ["merge_conflict", "tabs", "nb_space"]
remove = ["tabs"]

[warnings]
enabled = ["blank_eof"]
"#,
    );

    guard(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout("warnings: blank_eof\nchecks: merge_conflict nb_space\n");

    let out = guard(dir.path())
        .args(["list", "--json", "--category", "checks"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["checks"], serde_json::json!(["merge_conflict", "nb_space"]));
}

#[test]
fn test_install_and_uninstall_hook() {
    let (dir, repo) = scratch_repo(CONFIG);
    let hook = repo.path().join("hooks").join("pre-commit");

    guard(dir.path()).arg("install").assert().success();
    assert!(fs::read_to_string(&hook).unwrap().contains("commit-guard run"));

    guard(dir.path()).arg("uninstall").assert().success();
    assert!(!hook.exists());
}

#[test]
fn test_install_refuses_foreign_hook() {
    let (dir, repo) = scratch_repo(CONFIG);
    let hooks = repo.path().join("hooks");
    fs::create_dir_all(&hooks).unwrap();
    fs::write(hooks.join("pre-commit"), "#!/bin/sh\nexit 0\n").unwrap();

    guard(dir.path())
        .arg("install")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    guard(dir.path()).args(["install", "--force"]).assert().success();
}
