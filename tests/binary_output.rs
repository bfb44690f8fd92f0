// Runs the mdb-report binary and checks what lands on stdout

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};

use mdb_report::{build_report, JsonFileSource};

const FAILURE_LINE: &str = "We have a problem/Error\n";

fn run_with_input(path: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mdb-report"))
        .env("MDB_REPORT_INPUT", path)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn assert_generic_failure(output: &Output) {
    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    let stderr = String::from_utf8(output.stderr.clone()).unwrap();

    assert_eq!(stdout, FAILURE_LINE);
    assert!(!stdout.contains("Members of Parliament"));
    assert!(!stdout.contains("Total:"));
    assert!(stderr.is_empty(), "unexpected stderr: {}", stderr);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_missing_input_prints_generic_failure() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_with_input(&dir.path().join("missing.json"));

    assert_generic_failure(&output);
}

#[test]
fn test_malformed_input_prints_generic_failure() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[{{\"WP\": ").unwrap();

    let output = run_with_input(file.path());
    assert_generic_failure(&output);
}

#[test]
fn test_kept_record_missing_field_prints_no_partial_report() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"WP": "21", "beruf": "Lawyer", "vorname": "Anna", "name": "Müller"}},
            {{"WP": "21", "beruf": "Doctor", "name": "Keller"}}]"#
    )
    .unwrap();

    let output = run_with_input(file.path());
    assert_generic_failure(&output);
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Müller"));
}

#[test]
fn test_valid_input_prints_report() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"WP": "21", "beruf": "Lawyer", "vorname": "Anna", "name": "Müller",
             "membership": ["Sozialdemokratischen Partei"]}},
            {{"WP": "19", "beruf": "Doctor", "vorname": "Jan", "name": "Keller",
             "membership": []}}]"#
    )
    .unwrap();

    let output = run_with_input(file.path());
    let stdout = String::from_utf8(output.stdout.clone()).unwrap();

    let expected = build_report(&JsonFileSource::new(file.path())).unwrap().to_string();
    assert_eq!(stdout, expected);
    assert!(stdout.contains("  - Müller, Anna (Lawyer) - WP 21\n"));
    assert!(stdout.ends_with("Total: 1 Members\n"));
    assert_eq!(output.status.code(), Some(0));
}
