//! Integration tests for the labelled-case harness

use fraud_rs::batch::{self, BatchFile};
use fraud_rs::config::ModelConfig;
use fraud_rs::engine::ScoringEngine;
use fraud_rs::Label;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn engine() -> ScoringEngine {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("models");
    ScoringEngine::load(&ModelConfig::with_model_dir(dir)).unwrap()
}

#[test]
fn test_bundled_cases_pass() {
    let cases = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("cases.toml");

    let report = batch::run_file(&engine(), &cases).unwrap();

    for outcome in &report.outcomes {
        assert!(
            outcome.passed(),
            "{}: expected {}, got {:?} {:?}",
            outcome.name,
            outcome.expected,
            outcome.prediction,
            outcome.error
        );
    }
    assert_eq!(report.total(), 9);
    assert!(report.all_passed());
}

#[test]
fn test_missing_file_counts_as_failure() {
    let dir = TempDir::new().unwrap();
    let cases = dir.path().join("cases.toml");
    fs::write(dir.path().join("present.txt"), "Please verify your account now").unwrap();
    fs::write(
        &cases,
        r#"
[[case]]
name = "present"
file = "present.txt"
expected = "fraud"

[[case]]
name = "absent"
file = "absent.eml"
expected = "fraud"

[[case]]
name = "wrong label"
text = "Thank you for your time, see you at the meeting."
expected = "fraud"
"#,
    )
    .unwrap();

    let report = batch::run_file(&engine(), &cases).unwrap();

    assert_eq!(report.total(), 3);
    assert_eq!(report.passed(), 1);
    assert_eq!(report.failed(), 2);

    let absent = &report.outcomes[1];
    assert!(absent.prediction.is_none());
    assert!(absent.error.as_deref().unwrap().contains("File not found"));

    let wrong = &report.outcomes[2];
    assert_eq!(wrong.prediction.map(|(label, _)| label), Some(Label::Safe));
}

#[test]
fn test_invalid_cases_file() {
    let dir = TempDir::new().unwrap();
    let cases = dir.path().join("cases.toml");
    fs::write(&cases, "[[case]]\nname = 3\n").unwrap();

    assert!(BatchFile::from_file(&cases).is_err());
    assert!(batch::run_file(&engine(), &cases).is_err());
}
