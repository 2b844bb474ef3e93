//! Binary-level test of the guards subcommand over a temp corpus

use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

#[test]
fn guards_subcommand_writes_category_reports() {
    let corpus = TempDir::new().unwrap();
    let reports = TempDir::new().unwrap();
    let report_dir = reports.path().join("invariants");

    fs::write(
        corpus
            .path()
            .join("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa_Token.sol"),
        "require(msg.sender == owner);\nrequire(a > 0);\n",
    )
    .unwrap();

    Command::cargo_bin("solguard")
        .unwrap()
        .arg("guards")
        .arg(corpus.path())
        .arg("--report-dir")
        .arg(&report_dir)
        .assert()
        .success()
        .stdout(predicates::str::contains("2 unique guard statements"));

    assert!(report_dir.join("sender ownerOf.md").exists());
    assert!(report_dir.join("Ignore: check with 0.md").exists());
}

#[test]
fn help_lists_both_subcommands() {
    Command::cargo_bin("solguard")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("guards"))
        .stdout(predicates::str::contains("frequency"));
}
