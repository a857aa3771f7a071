//! Labelled regression cases
//!
//! A cases file is TOML with one `[[case]]` table per email:
//!
//! ```toml
//! [[case]]
//! name = "Phishing PayPal Scam"
//! text = "Your PayPal account has been restricted..."
//! expected = "fraud"
//!
//! [[case]]
//! name = "Sample Legit Email (.txt)"
//! file = "sample_safe_email.txt"   # relative to the cases file
//! expected = "safe"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::engine::ScoringEngine;
use crate::error::{FraudError, Result};
use crate::ingest;
use crate::model::Label;

#[derive(Debug, Clone, Deserialize)]
pub struct BatchFile {
    #[serde(default, rename = "case")]
    pub cases: Vec<BatchCase>,
}

/// One labelled email, given inline or as a file
#[derive(Debug, Clone, Deserialize)]
pub struct BatchCase {
    pub name: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
    pub expected: Label,
}

#[derive(Debug, Clone)]
pub struct CaseOutcome {
    pub name: String,
    pub expected: Label,
    /// `(label, confidence)` when the case could be scored
    pub prediction: Option<(Label, f64)>,
    pub error: Option<String>,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        matches!(self.prediction, Some((label, _)) if label == self.expected)
    }
}

#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub outcomes: Vec<CaseOutcome>,
}

impl BatchReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

impl BatchFile {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| FraudError::Config(format!("Invalid cases file: {}", e)))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }
}

/// Load a cases file and score every case. Relative `file` paths resolve
/// against the cases file's directory.
pub fn run_file<P: AsRef<Path>>(engine: &ScoringEngine, path: P) -> Result<BatchReport> {
    let path = path.as_ref();
    let batch = BatchFile::from_file(path)?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    Ok(run_cases(engine, &batch.cases, base))
}

/// Score `cases`; an unreadable or unspecified input fails that case only
pub fn run_cases(engine: &ScoringEngine, cases: &[BatchCase], base: &Path) -> BatchReport {
    let outcomes = cases
        .iter()
        .map(|case| {
            let (prediction, error) = match case_text(case, base) {
                Ok(text) => (Some(engine.predict_email(&text)), None),
                Err(e) => {
                    warn!(case = %case.name, error = %e, "Case could not be scored");
                    (None, Some(e))
                }
            };

            let outcome = CaseOutcome {
                name: case.name.clone(),
                expected: case.expected,
                prediction,
                error,
            };
            debug!(case = %outcome.name, passed = outcome.passed(), "Case scored");
            outcome
        })
        .collect();

    BatchReport { outcomes }
}

fn case_text(case: &BatchCase, base: &Path) -> std::result::Result<String, String> {
    match (&case.text, &case.file) {
        (Some(text), None) => Ok(text.clone()),
        (None, Some(file)) => {
            let path = base.join(file);
            if !path.exists() {
                return Err(format!("File not found: {}", path.display()));
            }
            ingest::read_email_file(&path).map_err(|e| e.to_string())
        }
        (Some(_), Some(_)) => Err("case sets both text and file".to_string()),
        (None, None) => Err("case sets neither text nor file".to_string()),
    }
}
