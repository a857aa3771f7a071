//! Heuristic types and data structures

use serde::Serialize;

use crate::model::Label;

/// Fraud and safe scores, each in `[0.0, 1.0]`.
///
/// The pair is not renormalized after the boost and reduce passes, so the two
/// values need not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScorePair {
    pub fraud: f64,
    pub safe: f64,
}

impl ScorePair {
    /// Pair derived from a fraud probability, `safe = 1 - fraud`
    pub fn from_fraud_probability(fraud: f64) -> Self {
        Self {
            fraud,
            safe: 1.0 - fraud,
        }
    }

    pub fn zero() -> Self {
        Self {
            fraud: 0.0,
            safe: 0.0,
        }
    }
}

/// A trigger phrase found in the text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalMatch {
    /// Category name
    pub category: &'static str,
    /// Phrase that matched
    pub phrase: &'static str,
    /// Change applied to the fraud score (negative for reduce categories)
    pub delta: f64,
}

/// Outcome of the full adjustment layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Adjustment {
    /// Scores after all passes
    pub scores: ScorePair,
    /// Final verdict
    pub label: Label,
    /// `max(fraud, safe)`, rounded to 4 decimals
    pub confidence: f64,
    /// Rules that matched, in evaluation order
    pub signals: Vec<SignalMatch>,
    /// Whether borderline flattening rewrote the scores
    pub flattened: bool,
}
