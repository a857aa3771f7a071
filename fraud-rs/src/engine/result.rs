//! Prediction result record

use serde::Serialize;

use crate::heuristics::{Adjustment, ScorePair, SignalMatch};
use crate::model::Label;
use crate::utils::round_to;

const FRAUD_REASON_FRAUD: &str =
    "Suspicious patterns, possible phishing links, or known spam keywords detected.";
const FRAUD_REASON_SAFE: &str = "Low risk indicators.";
const SAFE_REASON_SAFE: &str = "Standard language, no suspicious phrases or behavior.";
const SAFE_REASON_FRAUD: &str = "Lack of strong safety indicators.";
const SUGGESTION_FRAUD: &str = "Do not click any links or respond to this email.";
const SUGGESTION_SAFE: &str = "Email looks safe, but always double-check sender identity.";

/// Everything the presentation layer needs about one prediction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub label: Label,
    /// In `[0, 1]`, rounded to 4 decimals
    pub confidence: f64,
    /// Fraud score as a percentage, 2 decimals
    pub fraud_score: f64,
    /// Safe score as a percentage, 2 decimals
    pub safe_score: f64,
    pub fraud_reason: &'static str,
    pub safe_reason: &'static str,
    pub suggestion: &'static str,
    /// Adjusted score pair before percentage conversion
    pub scores: ScorePair,
    /// Fraud probability reported by the classifier
    pub base_fraud_probability: f64,
    pub signals: Vec<SignalMatch>,
    pub flattened: bool,
}

impl PredictionResult {
    /// Result for text with nothing left to score
    pub fn empty() -> Self {
        Self::build(Label::Safe, 0.0, ScorePair::zero(), 0.0, Vec::new(), false)
    }

    pub fn from_adjustment(base_fraud_probability: f64, adjustment: Adjustment) -> Self {
        Self::build(
            adjustment.label,
            adjustment.confidence,
            adjustment.scores,
            base_fraud_probability,
            adjustment.signals,
            adjustment.flattened,
        )
    }

    fn build(
        label: Label,
        confidence: f64,
        scores: ScorePair,
        base_fraud_probability: f64,
        signals: Vec<SignalMatch>,
        flattened: bool,
    ) -> Self {
        let (fraud_reason, safe_reason, suggestion) = match label {
            Label::Fraud => (FRAUD_REASON_FRAUD, SAFE_REASON_FRAUD, SUGGESTION_FRAUD),
            Label::Safe => (FRAUD_REASON_SAFE, SAFE_REASON_SAFE, SUGGESTION_SAFE),
        };

        Self {
            label,
            confidence,
            fraud_score: percent(scores.fraud),
            safe_score: percent(scores.safe),
            fraud_reason,
            safe_reason,
            suggestion,
            scores,
            base_fraud_probability,
            signals,
            flattened,
        }
    }

    pub fn is_fraud(&self) -> bool {
        self.label.is_fraud()
    }
}

fn percent(score: f64) -> f64 {
    round_to(score * 100.0, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result() {
        let result = PredictionResult::empty();
        assert_eq!(result.label, Label::Safe);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.fraud_score, 0.0);
        assert_eq!(result.safe_score, 0.0);
        assert_eq!(result.suggestion, SUGGESTION_SAFE);
        assert!(result.signals.is_empty());
    }

    #[test]
    fn test_fraud_texts() {
        let adjustment = Adjustment {
            scores: ScorePair {
                fraud: 0.87654,
                safe: 0.12346,
            },
            label: Label::Fraud,
            confidence: 0.8765,
            signals: Vec::new(),
            flattened: false,
        };
        let result = PredictionResult::from_adjustment(0.8, adjustment);

        assert_eq!(result.fraud_score, 87.65);
        assert_eq!(result.safe_score, 12.35);
        assert_eq!(result.fraud_reason, FRAUD_REASON_FRAUD);
        assert_eq!(result.safe_reason, SAFE_REASON_FRAUD);
        assert_eq!(result.suggestion, SUGGESTION_FRAUD);
        assert!(result.is_fraud());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(PredictionResult::empty()).unwrap();
        assert_eq!(json["label"], "safe");
        assert_eq!(json["scores"]["fraud"], 0.0);
        assert_eq!(json["safe_reason"], SAFE_REASON_SAFE);
    }
}
