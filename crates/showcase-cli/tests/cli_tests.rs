//! End-to-end tests for the `showcase` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn showcase_cmd() -> Command {
    Command::cargo_bin("showcase").unwrap()
}

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn populate(root: &Path) {
    write(root, "crystal-hello/main.cr", "puts \"hello\"");
    write(root, "crystal-hello/README.md", "# hello");
    write(root, "go-hello/main.go", "package main\n");
    write(root, "node-micro/server.js", "module.exports = () => 'hi'\n");
    write(root, "node-micro/package.json", "{\"name\": \"node-micro\"}\n");
    write(root, "php-7-hello-world/index.php", "<?php echo 'hello';\n");
}

#[test]
fn test_prints_manifest_for_all_examples() {
    let dir = tempdir().unwrap();
    populate(dir.path());

    let output = showcase_cmd().arg(dir.path()).output().unwrap();
    assert!(output.status.success());
    assert!(output.stderr.is_empty());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with("}\n"));

    let value: Value = serde_json::from_str(&stdout).unwrap();
    let top = value.as_object().unwrap();
    assert_eq!(top.len(), 4);

    assert_eq!(
        value["crystal-hello"],
        serde_json::json!({
            "main": "main.cr",
            "files": {"main.cr": "puts \"hello\"", "README.md": "# hello"}
        })
    );
    assert_eq!(value["go-hello"]["main"], "main.go");
    assert_eq!(value["node-micro"]["main"], "server.js");
    assert_eq!(value["php-7-hello-world"]["main"], "index.php");
    assert_eq!(value["node-micro"]["files"].as_object().unwrap().len(), 2);
}

#[test]
fn test_top_level_keys_follow_registry_order() {
    let dir = tempdir().unwrap();
    populate(dir.path());

    let output = showcase_cmd().arg(dir.path()).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let positions: Vec<usize> = ["crystal-hello", "go-hello", "node-micro", "php-7-hello-world"]
        .iter()
        .map(|name| stdout.find(&format!("\n  \"{}\": {{", name)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_output_is_reproducible() {
    let dir = tempdir().unwrap();
    populate(dir.path());
    for i in 0..10 {
        write(dir.path(), &format!("go-hello/extra_{i}.go"), "package main\n");
    }

    let first = showcase_cmd().arg(dir.path()).output().unwrap();
    let second = showcase_cmd().arg(dir.path()).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_missing_root_fails_without_output() {
    let dir = tempdir().unwrap();

    showcase_cmd()
        .arg(dir.path().join("does-not-exist"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("cannot access examples root"))
        .stderr(predicate::str::contains("Caused by"));
}

#[test]
fn test_missing_example_fails_whole_run() {
    let dir = tempdir().unwrap();
    populate(dir.path());
    fs::remove_dir_all(dir.path().join("node-micro")).unwrap();

    showcase_cmd()
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("node-micro"));
}

#[test]
fn test_requires_root_argument() {
    showcase_cmd()
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}
