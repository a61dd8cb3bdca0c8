//! Cross-cutting CLI tests (help, version, error handling)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help() {
    cargo_bin_cmd!("chatmark")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Chatmark applies Slack/reddit-like"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("chatmark")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand() {
    cargo_bin_cmd!("chatmark")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    cargo_bin_cmd!("chatmark")
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_css_default_class() {
    cargo_bin_cmd!("chatmark")
        .arg("css")
        .assert()
        .success()
        .stdout(".markup-strike { text-decoration: line-through; }\n");
}

#[test]
fn test_subcommand_help() {
    let cases = [
        ("render", "Render a chat message to HTML"),
        ("tokens", "Print the token stream for debugging"),
        ("parse", "display its concrete syntax tree"),
        ("css", "Print the CSS rule for strikethrough spans"),
    ];
    for (subcommand, about) in cases {
        cargo_bin_cmd!("chatmark")
            .args([subcommand, "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains(about))
            .stdout(predicate::str::contains("--config"));
    }
}
