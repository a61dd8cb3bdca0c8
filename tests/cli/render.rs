//! Render subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_render_stdin_to_stdout() {
    cargo_bin_cmd!("chatmark")
        .arg("render")
        .write_stdin("hello _world_ and *you*\n")
        .assert()
        .success()
        .stdout("hello <em>world</em> and <strong>you</strong>\n");
}

#[test]
fn test_render_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("message.txt");
    fs::write(&test_file, "~old~ `new_thing`").unwrap();

    cargo_bin_cmd!("chatmark")
        .args(["render", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout("<span class=\"markup-strike\">old</span> <code>new_thing</code>");
}

#[test]
fn test_render_escape_html_flag() {
    cargo_bin_cmd!("chatmark")
        .args(["render", "--escape-html"])
        .write_stdin("<script> _x_")
        .assert()
        .success()
        .stdout("&lt;script&gt; <em>x</em>");
}

#[test]
fn test_render_uses_discovered_config() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("message.txt");
    fs::write(&test_file, "~gone~").unwrap();
    fs::write(
        temp_dir.path().join("chatmark.toml"),
        "strike_class = \"struck\"\n",
    )
    .unwrap();

    cargo_bin_cmd!("chatmark")
        .args(["render", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout("<span class=\"struck\">gone</span>");
}

#[test]
fn test_render_with_explicit_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("custom.toml");
    fs::write(&config_file, "escape = \"html\"\n").unwrap();

    cargo_bin_cmd!("chatmark")
        .args(["render", "--config", config_file.to_str().unwrap()])
        .write_stdin("a & b")
        .assert()
        .success()
        .stdout("a &amp; b");
}

#[test]
fn test_render_invalid_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("bad.toml");
    fs::write(&config_file, "escape = \"sometimes\"\n").unwrap();

    cargo_bin_cmd!("chatmark")
        .args(["render", "--config", config_file.to_str().unwrap()])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn test_render_missing_file_fails() {
    cargo_bin_cmd!("chatmark")
        .args(["render", "/nonexistent/message.txt"])
        .assert()
        .failure();
}

#[test]
fn test_render_invalid_discovered_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("message.txt");
    fs::write(&test_file, "_x_").unwrap();
    fs::write(
        temp_dir.path().join(".chatmark.toml"),
        "escape = \"sometimes\"\n",
    )
    .unwrap();

    cargo_bin_cmd!("chatmark")
        .args(["render", test_file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}
