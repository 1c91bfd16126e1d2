//! End-to-end CLI behavior: file handling, flags, exit codes.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cssmin() -> Command {
    Command::cargo_bin("cssmin").expect("binary builds")
}

/// Write a fixture stylesheet and return its path.
fn write_css(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("failed to write fixture");
    path
}

#[test]
fn minifies_file_to_stdout_verbatim() {
    let dir = TempDir::new().unwrap();
    let css = write_css(&dir, "in.css", "a {  color : red ; }\n");

    cssmin()
        .arg(&css)
        .assert()
        .success()
        // No appended newline.
        .stdout("a{color :red}")
        .stderr("");
}

#[test]
fn writes_output_file_when_requested() {
    let dir = TempDir::new().unwrap();
    let css = write_css(&dir, "in.css", "b { margin: 0.5em; }");
    let out = dir.path().join("out.min.css");

    cssmin()
        .arg(&css)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&out).unwrap(), "b{margin:.5em}");
}

#[test]
fn missing_argument_is_a_usage_error() {
    cssmin()
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing input file"));
}

#[test]
fn unreadable_file_fails_with_context() {
    cssmin()
        .arg("/no/such/file.css")
        .assert()
        .failure()
        .stderr(predicate::str::contains("couldn't open file"));
}

#[test]
fn verbose_reports_every_pass_on_stderr() {
    let dir = TempDir::new().unwrap();
    let css = write_css(&dir, "in.css", "a{color:rgb(255,0,0);}\n");

    let output = cssmin().arg("--verbose").arg(&css).output().unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    let pass_lines: Vec<&str> = stderr.lines().filter(|l| l.starts_with("pass ")).collect();
    assert_eq!(pass_lines.len(), 8);
    assert!(stderr.contains("(rgb-to-hex)"));
    assert!(stderr.contains("(empty-block-removal)"));

    // Reporting must not leak into the minified output.
    assert_eq!(output.stdout, b"a{color:#f00}");
}

#[test]
fn summary_reports_byte_savings() {
    let dir = TempDir::new().unwrap();
    let css = write_css(&dir, "in.css", "a {  color : red ; }\n");

    cssmin()
        .arg("--summary")
        .arg(&css)
        .assert()
        .success()
        .stderr(predicate::str::contains("saved"));
}

#[test]
fn json_stats_parse_and_cover_all_passes() {
    let dir = TempDir::new().unwrap();
    let css = write_css(&dir, "in.css", "a{color:red}/*x*/b{}\n");

    let output = cssmin().arg("--json").arg(&css).output().unwrap();
    assert!(output.status.success());

    let stats: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    let passes = stats["passes"].as_array().unwrap();
    assert_eq!(passes.len(), 8);
    assert_eq!(passes[0]["name"], "whitespace-collapse");
    assert_eq!(passes[7]["name"], "empty-block-removal");
    for pass in passes {
        let before = pass["bytes_before"].as_u64().unwrap();
        let after = pass["bytes_after"].as_u64().unwrap();
        assert!(after <= before);
    }
}

#[test]
fn empty_input_produces_empty_output() {
    let dir = TempDir::new().unwrap();
    let css = write_css(&dir, "empty.css", "");

    cssmin().arg(&css).assert().success().stdout("");
}

#[test]
fn completions_generate_without_an_input_file() {
    cssmin()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cssmin"));
}

#[test]
fn help_mentions_the_flags() {
    cssmin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--verbose"))
        .stdout(predicate::str::contains("--summary"));
}
