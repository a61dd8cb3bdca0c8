//! Parse subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_stdin() {
    cargo_bin_cmd!("chatmark")
        .arg("parse")
        .write_stdin("plain _and_ *marked*")
        .assert()
        .success()
        .stdout(predicate::str::contains("MESSAGE"))
        .stdout(predicate::str::contains("EMPHASIS"))
        .stdout(predicate::str::contains("STRONG_MARKER"));
}

#[test]
fn test_parse_code_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("message.txt");
    fs::write(&test_file, "`_raw_`").unwrap();

    cargo_bin_cmd!("chatmark")
        .args(["parse", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("CODE_CONTENT"))
        .stdout(predicate::str::contains("EMPHASIS").not());
}

#[test]
fn test_parse_handles_unterminated_markup() {
    cargo_bin_cmd!("chatmark")
        .arg("parse")
        .write_stdin("_ * ` ~ __ ** `` ~~")
        .assert()
        .success()
        .stdout(predicate::str::contains("MESSAGE"));
}
