use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn rustlex_cmd() -> Command {
    Command::cargo_bin("rustlex").unwrap()
}

fn source_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_tokenize_stdin_as_text() {
    rustlex_cmd()
        .write_stdin("let x = 5;\n")
        .assert()
        .success()
        .stdout(
            "keyword `let`\nidentifier `x`\nsymbol `=`\nnumber 5\nsymbol `;`\nend of input\n",
        );
}

#[test]
fn test_tokenize_file_as_json() {
    let file = source_file("fn f() -> u8 // done\n");
    rustlex_cmd()
        .arg(file.path())
        .args(["--format", "json", "--no-eoi"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "{\"kind\":\"keyword\",\"value\":\"fn\"}\n",
        ))
        .stdout(predicate::str::contains(
            "{\"kind\":\"primitive_type\",\"value\":\"u8\"}",
        ))
        .stdout(predicate::str::contains("end_of_input").not())
        .stdout(predicate::str::contains("done").not());
}

#[test]
fn test_dash_reads_stdin() {
    rustlex_cmd()
        .arg("-")
        .arg("--no-eoi")
        .write_stdin("Self self")
        .assert()
        .success()
        .stdout("keyword `Self`\nkeyword `self`\n");
}

#[test]
fn test_config_file() {
    let config = source_file(r#"{"format": "json", "max_tokens": 1}"#);
    rustlex_cmd()
        .arg("--config")
        .arg(config.path())
        .write_stdin("a b c")
        .assert()
        .success()
        .stdout("{\"kind\":\"identifier\",\"value\":\"a\"}\n");
}

#[test]
fn test_flag_overrides_config() {
    let config = source_file(r#"{"format": "json"}"#);
    rustlex_cmd()
        .arg("--config")
        .arg(config.path())
        .args(["--format", "text"])
        .write_stdin("42")
        .assert()
        .success()
        .stdout("number 42\nend of input\n");
}

#[test]
fn test_missing_input_fails() {
    rustlex_cmd()
        .arg("/nonexistent/input.rs")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: IO error"));
}

#[test]
fn test_bad_config_fails() {
    let config = source_file("{ not json");
    rustlex_cmd()
        .arg("--config")
        .arg(config.path())
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Config error"));
}
