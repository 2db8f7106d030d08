//! CLI behavior: argument handling, per-file failure isolation, output.

mod common;

use assert_cmd::Command;
use common::object_with_marker;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn ctorscan() -> Command {
    Command::cargo_bin("ctorscan").unwrap()
}

fn temp_file(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file
}

#[test]
fn no_arguments_is_a_usage_error() {
    ctorscan()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn missing_file_fails_without_output() {
    ctorscan()
        .arg("/definitely/not/here")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("1 of 1 input file(s) failed"));
}

#[test]
fn malformed_files_are_reported_per_file_and_batch_continues() {
    let bad_a = temp_file(b"not an elf");
    let bad_b = temp_file(b"also not an elf");
    ctorscan()
        .arg(bad_a.path())
        .arg(bad_b.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("2 of 2 input file(s) failed"));
}

#[test]
fn bad_file_does_not_suppress_good_file_output() {
    let bad = temp_file(b"not an elf");
    let good = temp_file(&object_with_marker(object::SymbolKind::Text, 0x40));
    ctorscan()
        .arg(bad.path())
        .arg(good.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("call puts"))
        .stderr(predicate::str::contains("1 of 2 input file(s) failed"));
}

#[test]
fn fact_lines_are_prefixed_with_the_input_path() {
    let good = temp_file(&object_with_marker(object::SymbolKind::Text, 0x40));
    let path = good.path().display().to_string();
    ctorscan()
        .arg(good.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("{path} call puts")));
}

#[test]
fn candidate_free_file_produces_no_output() {
    // A marker of data type aborts analysis silently; the run still succeeds.
    let quiet = temp_file(&object_with_marker(object::SymbolKind::Data, 0x40));
    ctorscan()
        .arg(quiet.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
