use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn linesindir() -> Command {
    Command::new(env!("CARGO_BIN_EXE_linesindir"))
}

fn sample_tree(root: &Path) {
    fs::write(root.join("a.txt"), "a\nb\nc").unwrap();
    fs::write(root.join("b.bin"), [0xffu8, 0xfe, 0x00, 0x80]).unwrap();
}

#[test]
fn shows_help() {
    linesindir()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--directory"))
        .stdout(predicate::str::contains("--all"));
}

#[test]
fn counts_matching_extension() {
    let dir = tempdir().unwrap();
    sample_tree(dir.path());

    linesindir()
        .arg("-d")
        .arg(dir.path())
        .arg("txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("Looking at txt files:"))
        .stdout(predicate::str::contains("Total number of files: 1"))
        .stdout(predicate::str::contains("Total number of lines: 3"));
}

#[test]
fn all_flag_skips_binary_files() {
    let dir = tempdir().unwrap();
    sample_tree(dir.path());

    linesindir()
        .arg("--directory")
        .arg(dir.path())
        .arg("--all")
        .assert()
        .success()
        .stdout(predicate::str::contains("Looking at all files:"))
        .stdout(predicate::str::contains("Total number of files: 1"))
        .stdout(predicate::str::contains("Total number of lines: 3"));
}

#[test]
fn default_extension_and_directory() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/main.rs"), "fn main() {\n}\n").unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    linesindir()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Looking at rs files:"))
        .stdout(predicate::str::contains("Total number of files: 1"))
        .stdout(predicate::str::contains("Total number of lines: 3"));
}

#[test]
fn several_extensions_are_listed() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.rs"), "1").unwrap();
    fs::write(dir.path().join("b.toml"), "1\n2").unwrap();

    linesindir()
        .arg("-d")
        .arg(dir.path())
        .args(["rs", "toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Looking at rs, toml files:"))
        .stdout(predicate::str::contains("Total number of files: 2"))
        .stdout(predicate::str::contains("Total number of lines: 3"));
}

#[test]
fn empty_directory_fails() {
    let dir = tempdir().unwrap();

    linesindir()
        .arg("-d")
        .arg(dir.path())
        .arg("-a")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn unmatched_extension_fails() {
    let dir = tempdir().unwrap();
    sample_tree(dir.path());

    linesindir()
        .arg("-d")
        .arg(dir.path())
        .arg("md")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn list_prints_each_file() {
    let dir = tempdir().unwrap();
    sample_tree(dir.path());

    linesindir()
        .arg("-d")
        .arg(dir.path())
        .args(["txt", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?m)^\s+3  .*a\.txt$").unwrap());
}

#[test]
fn json_report() {
    let dir = tempdir().unwrap();
    sample_tree(dir.path());
    fs::write(dir.path().join("c.txt"), "x\n").unwrap();

    let output = linesindir()
        .arg("-d")
        .arg(dir.path())
        .args(["txt", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["filter"], "txt");
    assert_eq!(json["files"], 2);
    assert_eq!(json["lines"], 5);
    assert_eq!(json["entries"].as_array().unwrap().len(), 2);
}

#[test]
fn gitignore_flag_is_opt_in() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".gitignore"), "skip.txt\n").unwrap();
    fs::write(dir.path().join("keep.txt"), "1").unwrap();
    fs::write(dir.path().join("skip.txt"), "1").unwrap();

    linesindir()
        .arg("-d")
        .arg(dir.path())
        .arg("txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total number of files: 2"));

    linesindir()
        .arg("-d")
        .arg(dir.path())
        .args(["txt", "--gitignore"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total number of files: 1"));
}
