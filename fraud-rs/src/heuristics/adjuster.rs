//! Heuristic adjustment engine
//!
//! Runs, in order: boost pass, reduce pass, borderline flattening, final
//! decision. Every step is deterministic and infallible.

use tracing::debug;

use super::rules::RuleSet;
use super::types::{Adjustment, ScorePair, SignalMatch};
use crate::model::Label;
use crate::utils::round_to;

/// Flattening only applies when the safe score is above this
const FLATTEN_SAFE_FLOOR: f64 = 0.7;
/// Flattening only applies when the fraud score is below this
const FLATTEN_FRAUD_CEILING: f64 = 0.35;
/// Multiplier applied to the fraud score when flattening
const FLATTEN_FACTOR: f64 = 0.7;

/// Applies a [`RuleSet`] to raw classifier scores
#[derive(Debug, Clone, Default)]
pub struct HeuristicAdjuster {
    rules: RuleSet,
}

impl HeuristicAdjuster {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Run every pass over a base fraud probability and normalized text
    pub fn adjust(&self, fraud_probability: f64, text: &str) -> Adjustment {
        let mut signals = Vec::new();

        let scores = ScorePair::from_fraud_probability(fraud_probability.clamp(0.0, 1.0));
        let scores = self.boost(scores, text, &mut signals);
        let scores = self.reduce(scores, text, &mut signals);

        let (scores, flattened) = match flatten_borderline(scores) {
            Some(flat) => (flat, true),
            None => (scores, false),
        };

        let (label, confidence) = decide(scores);

        debug!(
            base = fraud_probability,
            fraud = scores.fraud,
            safe = scores.safe,
            signals = signals.len(),
            flattened,
            %label,
            "Heuristic adjustment complete"
        );

        Adjustment {
            scores,
            label,
            confidence,
            signals,
            flattened,
        }
    }

    /// Add each boost category's weight once per matching phrase, then cap fraud at 1.0
    pub fn boost(&self, scores: ScorePair, text: &str, signals: &mut Vec<SignalMatch>) -> ScorePair {
        let mut fraud = scores.fraud;

        for category in self.rules.boost {
            for phrase in category.matches(text) {
                fraud += category.weight;
                signals.push(SignalMatch {
                    category: category.name,
                    phrase,
                    delta: category.weight,
                });
            }
        }

        ScorePair {
            fraud: fraud.min(1.0),
            safe: scores.safe,
        }
    }

    /// Move each reduce category's weight from fraud to safe once per matching
    /// phrase, then floor fraud at 0.0 and cap safe at 1.0
    pub fn reduce(&self, scores: ScorePair, text: &str, signals: &mut Vec<SignalMatch>) -> ScorePair {
        let mut fraud = scores.fraud;
        let mut safe = scores.safe;

        for category in self.rules.reduce {
            for phrase in category.matches(text) {
                fraud -= category.weight;
                safe += category.weight;
                signals.push(SignalMatch {
                    category: category.name,
                    phrase,
                    delta: -category.weight,
                });
            }
        }

        ScorePair {
            fraud: fraud.max(0.0),
            safe: safe.min(1.0),
        }
    }
}

/// Damp a low fraud score on a clearly safe-leaning pair.
///
/// With safe above 0.7 and fraud below 0.35 the pair is always more than 0.35
/// apart, so no separate gap condition is checked.
pub fn flatten_borderline(scores: ScorePair) -> Option<ScorePair> {
    if scores.safe > FLATTEN_SAFE_FLOOR && scores.fraud < FLATTEN_FRAUD_CEILING {
        let fraud = round_to(scores.fraud * FLATTEN_FACTOR, 3);
        let safe = round_to(1.0 - fraud, 3);
        Some(ScorePair { fraud, safe })
    } else {
        None
    }
}

/// Final verdict: fraud only when strictly ahead; confidence is the larger score
pub fn decide(scores: ScorePair) -> (Label, f64) {
    let label = if scores.fraud > scores.safe {
        Label::Fraud
    } else {
        Label::Safe
    };
    (label, round_to(scores.fraud.max(scores.safe), 4))
}
