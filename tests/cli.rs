//! End-to-end tests for the `segrep` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn seq_file(content: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().expect("Failed to create temp file");
    f.write_all(content.as_bytes()).expect("Failed to write temp file");
    f
}

fn segrep() -> Command {
    Command::cargo_bin("segrep").expect("binary should build")
}

#[test]
fn test_reconstruct_prints_table() {
    let reference = seq_file("ACGTACGT\n");
    let query = seq_file("ACGT\n");

    segrep()
        .arg("reconstruct")
        .arg(reference.path())
        .arg(query.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("| Location in ref |"))
        .stdout(predicate::str::contains("|     0  -      3 | ACGT          |     1 |     4 | No       |"))
        .stdout(predicate::str::contains("segments: 1, distinct: 1"));
}

#[test]
fn test_reconstruct_accepts_fasta() {
    let reference = seq_file(">ref some description\nAACCG\nGTA\n");
    let query = seq_file(">q\nAACCGGTATACCGGTT\n");

    segrep()
        .args(["reconstruct", "--format", "json"])
        .arg(reference.path())
        .arg(query.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"segments\": 2"))
        .stdout(predicate::str::contains("\"reversed\": true"));
}

#[test]
fn test_unsolvable_query_exits_with_code_2() {
    let reference = seq_file("AAAA\n");
    let query = seq_file("CCCC\n");

    segrep()
        .arg("reconstruct")
        .arg(reference.path())
        .arg(query.path())
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no complete reconstruction found"));
}

#[test]
fn test_invalid_base_is_an_input_error() {
    let reference = seq_file("ACGTNACGT\n");
    let query = seq_file("ACGT\n");

    segrep()
        .arg("reconstruct")
        .arg(reference.path())
        .arg(query.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid base 'N' at position 4"));
}

#[test]
fn test_oversized_input_rejected() {
    let reference = seq_file("ACGTACGTAC\n");
    let query = seq_file("ACGT\n");

    segrep()
        .args(["reconstruct", "--max-len", "8"])
        .arg(reference.path())
        .arg(query.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("maximum supported is 8"));
}

#[test]
fn test_missing_file_reported() {
    let query = seq_file("ACGT\n");

    segrep()
        .args(["reconstruct", "/nonexistent/ref.txt"])
        .arg(query.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot open sequence file"));
}

#[test]
fn test_empty_query_rejected() {
    let reference = seq_file("ACGT\n");
    let query = seq_file("\n");

    segrep()
        .arg("reconstruct")
        .arg(reference.path())
        .arg(query.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("query sequence is empty"));
}

#[test]
fn test_output_file_written() {
    let reference = seq_file("ACGTACGT\n");
    let query = seq_file("ACGTACGTACGT\n");
    let out = NamedTempFile::new().expect("Failed to create temp file");

    segrep()
        .arg("reconstruct")
        .arg(reference.path())
        .arg(query.path())
        .arg("--out")
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(out.path()).expect("output should exist");
    assert!(written.contains("segments: 2"));
}

#[test]
fn test_index_statistics() {
    let reference = seq_file("AAAC\n");

    segrep()
        .arg("index")
        .arg(reference.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("length: 4"))
        .stdout(predicate::str::contains("distinct_hashes:"))
        .stdout(predicate::str::contains("reverse_origins:"));
}
