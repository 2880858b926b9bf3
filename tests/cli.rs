use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn missing_argument_prints_usage() {
    let mut cmd = Command::cargo_bin("mdify").unwrap();
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage: mdify <target-directory>"));
}

#[test]
fn nonexistent_directory_is_reported() {
    let temp_dir = tempfile::tempdir().unwrap();
    let missing = temp_dir.path().join("does-not-exist");

    let mut cmd = Command::cargo_bin("mdify").unwrap();
    cmd.arg(&missing)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Target directory does not exist.",
        ));
}

#[test]
fn plain_file_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("notes.md");
    std::fs::write(&file, "# notes").unwrap();

    let mut cmd = Command::cargo_bin("mdify").unwrap();
    cmd.arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: The path provided is not a directory.",
        ))
        .stdout(predicate::str::contains("copied").not());
}

#[test]
fn help_lists_options() {
    let mut cmd = Command::cargo_bin("mdify").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--print"))
        .stdout(predicate::str::contains("--config"));
}
