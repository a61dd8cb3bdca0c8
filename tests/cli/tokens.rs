//! Tokens subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_tokens_debug_output() {
    cargo_bin_cmd!("chatmark")
        .arg("tokens")
        .write_stdin("hi _there_")
        .assert()
        .success()
        .stdout("Literal \"hi \"\nEmphasis \"there\"\n");
}

#[test]
fn test_tokens_json_output() {
    cargo_bin_cmd!("chatmark")
        .args(["tokens", "--json"])
        .write_stdin("`x`")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"code\""))
        .stdout(predicate::str::contains("\"text\": \"x\""));
}

#[test]
fn test_tokens_empty_input() {
    cargo_bin_cmd!("chatmark")
        .args(["tokens", "--json"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("[]\n");
}
