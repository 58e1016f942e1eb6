// Integration tests for the `summarize` subcommand.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn test_summarize_text_output() {
    let mut cmd = Command::cargo_bin("buildstats").unwrap();
    cmd.arg("summarize").arg(fixture("build_stats.big.small.csv"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("21 entries"))
        .stdout(predicate::str::contains("FileSize"))
        .stdout(predicate::str::contains("max = 17000000"))
        .stdout(predicate::str::contains(
            "packages/rol/adapters/epetra/test/sol/CMakeFiles/\
             ROL_adapters_epetra_test_sol_EpetraSROMSampleGenerator.dir/test_02.cpp.o",
        ))
        .stdout(predicate::str::contains("max = 48.2"))
        .stdout(predicate::str::contains("max = 730000"));
}

#[test]
fn test_summarize_json_output() {
    let mut cmd = Command::cargo_bin("buildstats").unwrap();
    cmd.arg("summarize")
        .arg(fixture("build_stats.big.small.csv"))
        .arg("--format")
        .arg("json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let parsed: Value = serde_json::from_slice(&output).unwrap();

    let summaries = parsed.as_array().unwrap();
    assert_eq!(summaries.len(), 3);
    assert_eq!(summaries[0]["field"], "FileSize");
    assert_eq!(summaries[0]["count"], 21);
    assert_eq!(summaries[0]["max"], 17000000.0);
    assert_eq!(summaries[1]["field"], "elapsed_real_time_sec");
    assert_eq!(summaries[1]["max"], 48.2);
    assert_eq!(summaries[2]["field"], "max_resident_size_Kb");
    assert_eq!(summaries[2]["max"], 730000.0);
    assert_eq!(
        summaries[2]["max_file_name"],
        "packages/rol/adapters/epetra/test/sol/CMakeFiles/ROL_adapters_epetra_test_sol_EpetraSROMSampleGenerator.dir/test_02.cpp.o"
    );
}

#[test]
fn test_summarize_fails_on_missing_schema_column() {
    let tmp_dir = TempDir::new().unwrap();
    let csv_file = tmp_dir.path().join("not_build_stats.csv");
    fs::write(&csv_file, "a,b\n1,2\n").unwrap();

    let mut cmd = Command::cargo_bin("buildstats").unwrap();
    cmd.arg("summarize").arg(&csv_file);

    cmd.assert().failure().stderr(predicate::str::contains(
        "the CSV file column header 'max_resident_size_Kb' does not exist in the \
         list of column headers",
    ));
}

#[test]
fn test_gather_then_summarize_roundtrip() {
    let tmp_dir = TempDir::new().unwrap();
    let aggregate = tmp_dir.path().join("build_stats.csv");

    Command::cargo_bin("buildstats")
        .unwrap()
        .arg("gather")
        .arg(&aggregate)
        .arg("-d")
        .arg(fixture("dummy_build_dir"))
        .assert()
        .success();

    let mut cmd = Command::cargo_bin("buildstats").unwrap();
    cmd.arg("summarize").arg(&aggregate);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("3 entries"))
        .stdout(predicate::str::contains("max = 3300000 (./some/base/dir/target1.o)"))
        .stdout(predicate::str::contains("max = 3.5 (./some/base/dir/target1.o)"));
}
