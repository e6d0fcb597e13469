//! Integration tests for the CLI interface
//!
//! Runs the importer binary against scripts laid out in temp directories.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn importer(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("importer").unwrap();
    cmd.current_dir(dir.path()).env_remove("IMPORTER_CONFIG");
    cmd
}

#[test]
fn test_valid_file_succeeds_silently() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.php"), "<?php\nname = 'demo';\n").unwrap();

    importer(&dir)
        .arg("a.php")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_missing_file_reported_as_json() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.php"), "x = 1\n").unwrap();

    importer(&dir)
        .args(["a.php", "missing.php", "--json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"item\": \"missing.php\""))
        .stdout(predicate::str::contains("file_not_found"));
}

#[test]
fn test_echo_streams_messages_and_summary() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("readme.txt"), "").unwrap();

    importer(&dir)
        .args(["missing.php", "readme.txt", "--echo"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("O arquivo 'missing.php' não existe"))
        .stdout(predicate::str::contains("não possui a extensão .php"))
        .stdout(predicate::str::contains("2 erros ocorreram"));
}

#[test]
fn test_echo_from_settings_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("settings.json"), r#"{ "echoErrors": true }"#).unwrap();
    fs::create_dir(dir.path().join("emptydir")).unwrap();

    importer(&dir)
        .args(["--config", "settings.json", "emptydir/"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Nenhum script válido encontrado no diretório 'emptydir/'",
        ))
        .stdout(predicate::str::contains("1 erro ocorreu"));
}

#[test]
fn test_load_failure_reports_location() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("lib")).unwrap();
    fs::write(dir.path().join("lib/a.php"), "a = 1\n").unwrap();
    fs::write(dir.path().join("lib/b.php"), "<?php\nb = oops\n").unwrap();

    importer(&dir)
        .arg("lib")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[load failure] lib/b.php"))
        .stdout(predicate::str::contains("at lib/b.php:2"));
}

#[test]
fn test_show_scope_lists_definitions() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.php"), "name = 'demo'\nport = 8080\n").unwrap();

    importer(&dir)
        .args(["a.php", "--show-scope"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name = \"demo\""))
        .stdout(predicate::str::contains("port = 8080"));
}

#[test]
fn test_dry_run_does_not_evaluate() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("broken.php"), "not valid at all\n").unwrap();

    importer(&dir)
        .args(["broken.php", "--dry-run"])
        .assert()
        .success();
}

#[test]
fn test_request_from_stdin() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.php"), "x = 1\n").unwrap();

    importer(&dir)
        .args(["--request", "-", "--json"])
        .write_stdin(r#"["a.php", "gone.php"]"#)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("gone.php"));
}

#[test]
fn test_request_that_is_not_a_list_is_rejected() {
    let dir = TempDir::new().unwrap();

    importer(&dir)
        .args(["--request", "-"])
        .write_stdin(r#""not-a-list""#)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid argument"));
}

#[test]
fn test_no_paths_is_an_error() {
    let dir = TempDir::new().unwrap();

    importer(&dir)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no paths to import"));
}

#[test]
fn test_custom_extension() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.inc"), "x = 1\n").unwrap();

    importer(&dir)
        .args(["a.inc", "--extension", ".inc"])
        .assert()
        .success();
}

#[test]
fn test_json_output_stays_parseable_with_echo() {
    let dir = TempDir::new().unwrap();

    let output = importer(&dir)
        .args(["--json", "--echo", "missing.php"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("O arquivo 'missing.php' não existe"))
        .stderr(predicate::str::contains("1 erro ocorreu"))
        .get_output()
        .stdout
        .clone();

    let records: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["item"], "missing.php");
}
